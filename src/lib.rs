pub mod api;

pub mod allocations;
pub mod assets;
pub mod clients;
pub mod movements;

pub mod constants;
pub mod errors;
pub mod fallback;
pub mod stats;
pub mod utils;

pub use errors::{Error, Result};
