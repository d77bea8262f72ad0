pub mod bfs;
pub mod digraph;
pub mod edges;
pub mod frontier;
pub mod graph;
pub mod traversal;
pub mod visited;
