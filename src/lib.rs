pub mod accumulator;
pub mod bucket;
pub mod calendar;
pub mod config;
pub mod error;
pub mod geo;
pub mod ingest;
pub mod output;
pub mod parser;
pub mod stats;
pub mod validity;
