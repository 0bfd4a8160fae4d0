// Engine library root: CSV sales parsing, normalization, aggregation and the
// presentation boundary built on top of them.

pub mod aggregator;
pub mod config;
pub mod data;
pub mod error;
pub mod services;

pub use error::{EngineError, Result};
