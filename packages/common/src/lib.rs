pub mod filesystem;
pub mod visitor;

pub use filesystem::*;
pub use visitor::*;
