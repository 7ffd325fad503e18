pub mod calculations;
pub mod models;
pub mod summary;

pub use models::*;
