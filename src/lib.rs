pub mod analyzer;
pub mod cli;
pub mod config;
pub mod csv_io;
pub mod error;
pub mod logging;
pub mod scanner;
