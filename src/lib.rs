pub mod app;
pub mod builds;
pub mod config;
pub mod error;
pub mod lcu;
pub mod picks;
pub mod runes;
pub mod status;

pub use error::{Error, Result};
