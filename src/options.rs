//! Wrapper configuration record
//!
//! Options are fixed when a wrapper is built. They can be given as a struct,
//! as `key=value` overrides on top of the defaults, or as a comma list of
//! enabled flags (`--options count,time`).

use crate::error::{CallWrapError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Flags recognized by the composer
pub const KNOWN_FLAGS: [&str; 3] = ["count", "time", "trace"];

/// Bookkeeping performed around each call
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct WrapOptions {
    /// Track and print the invocation count
    pub count: bool,
    /// Accumulate wall-clock time spent in the target
    pub time: bool,
    /// Print the call and its arguments before delegating
    pub trace: bool,
}

impl Default for WrapOptions {
    fn default() -> Self {
        Self {
            count: true,
            time: false,
            trace: false,
        }
    }
}

impl WrapOptions {
    /// Options with every flag disabled
    pub fn none() -> Self {
        Self {
            count: false,
            time: false,
            trace: false,
        }
    }

    /// Options with every flag enabled
    pub fn all() -> Self {
        Self {
            count: true,
            time: true,
            trace: true,
        }
    }

    pub fn with_count(mut self, count: bool) -> Self {
        self.count = count;
        self
    }

    pub fn with_time(mut self, time: bool) -> Self {
        self.time = time;
        self
    }

    pub fn with_trace(mut self, trace: bool) -> Self {
        self.trace = trace;
        self
    }

    /// Apply `key=value` overrides on top of the defaults
    pub fn from_pairs(pairs: &[(&str, &str)]) -> Result<Self> {
        let mut options = Self::default();
        for (key, value) in pairs {
            let flag = parse_bool(value).ok_or_else(|| {
                CallWrapError::InvalidComposition(format!(
                    "option {}={:?} is not a boolean",
                    key, value
                ))
            })?;
            options.set(key, flag)?;
        }
        Ok(options)
    }

    /// Parse a comma list of enabled flags, e.g. "count,time" or "none"
    pub fn from_expr(expr: &str) -> Result<Self> {
        let mut options = Self::none();
        for part in expr.split(',') {
            let part = part.trim();
            match part {
                "" | "none" => {}
                "all" => options = Self::all(),
                _ => options.set(part, true)?,
            }
        }
        Ok(options)
    }

    fn set(&mut self, key: &str, value: bool) -> Result<()> {
        match key {
            "count" => self.count = value,
            "time" => self.time = value,
            "trace" => self.trace = value,
            _ => {
                return Err(CallWrapError::InvalidComposition(format!(
                    "unrecognized option '{}' (expected one of: {})",
                    key,
                    KNOWN_FLAGS.join(", ")
                )))
            }
        }
        Ok(())
    }
}

impl fmt::Display for WrapOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "count={}, time={}, trace={}",
            self.count, self.time, self.trace
        )
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "yes" | "on" | "1" => Some(true),
        "false" | "no" | "off" | "0" => Some(false),
        _ => None,
    }
}
