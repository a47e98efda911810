pub mod dir;
pub mod filters;
pub mod manager;
pub mod types;

pub use dir::*;
pub use manager::*;
pub use types::*;
