// Input side of the pipeline: tokenizing, normalizing, rates and loading.
pub mod csv_parser;
pub mod normalizer;
pub mod rates;
pub mod source;
