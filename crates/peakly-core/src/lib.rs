pub mod actions;
pub mod catalog;
pub mod collection;
pub mod config;
pub mod error;
pub mod filter;
pub mod reducer;
pub mod roster;
pub mod snapshot;
pub mod state;
pub mod trails;
pub mod wizard;

pub use actions::*;
pub use error::SequenceError;
pub use reducer::*;
pub use state::*;
