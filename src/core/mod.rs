pub mod demo;
pub mod dispatch;
pub mod speakers;

pub use crate::domain::model::Vector2D;
pub use crate::domain::ports::{Animal, Speaker};
pub use crate::utils::error::Result;
