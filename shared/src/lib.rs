// Data model and display helpers shared between the engine and its presentation layer.
pub mod models;
pub mod utils;
