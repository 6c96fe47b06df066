pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use crate::config::CliConfig;
pub use crate::core::{
    demo::DemoEngine,
    dispatch::{announce_any, announce_typed},
    speakers::{BaseAnimal, Cat, Cow, Dog, Human},
};
pub use crate::domain::model::Vector2D;
pub use crate::domain::ports::{Animal, Speaker};
pub use crate::utils::error::{DemoError, Result};
