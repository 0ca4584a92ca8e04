pub mod types;
mod registry;
mod views;

pub use types::*;
