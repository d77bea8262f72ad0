pub mod chains;
pub mod dag;
pub mod factories;
pub mod partial_order;
pub mod poset;
pub mod set;
