//! Callwrap - call-counting, timing and tracing wrappers for Rust callables
//!
//! This library wraps plain closures and functions with bookkeeping that runs
//! around every call, without changing the arguments or the result. Output
//! goes through an injectable sink that can be copied to a log file on demand.

pub mod accessors;
pub mod args;
pub mod cli;
pub mod config;
pub mod demos;
pub mod error;
pub mod options;
pub mod output;
pub mod record;
pub mod repr;
pub mod summary;
pub mod wrapper;
