pub mod cli;
pub mod config;
pub mod directory;
pub mod discovery;
pub mod events;
pub mod inputs;
pub mod keys;
pub mod state;
pub use state::*;
