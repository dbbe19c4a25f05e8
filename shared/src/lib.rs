pub mod client;
pub mod config;
pub mod error;
pub mod models;

pub use client::{Reloader, ToggleClient, ToggleOutcome, Transport};
pub use config::{ToggleConfig, DEFAULT_BASE_URL};
pub use error::{Result, ToggleError};
pub use models::*;
