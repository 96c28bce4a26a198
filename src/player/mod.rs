//! Player state and the operations that mutate it

pub mod config;
mod controller;
mod error;
mod input;
mod output;

pub use config::{PlayerConfig, RandomPolicy};
pub use controller::{Controller, DEFAULT_FLAG_REASON};
pub use error::{Outcome, PlayerError};
pub use input::SelectionSource;
