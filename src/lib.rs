// src/lib.rs

#[macro_use]
pub mod macros;

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod specs;

pub mod csv;
pub mod file;
pub mod geocode;
pub mod incident;
pub mod log;
pub mod normalize;
pub mod progress;
pub mod runner;
pub mod scrape;

pub use error::{Error, FieldError, Result, RowError};
