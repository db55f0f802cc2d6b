//! Runnable demonstrations of the wrappers and helpers
//!
//! Every demo writes through the [`Output`] in its [`DemoContext`], so the
//! binary prints to stdout while tests capture the text.

mod accessors;
mod count_calls;
mod dataclass;
mod opt_args;
mod redirect;
mod repr;
mod trace_usage;
mod tracing_wrapper;

use crate::error::Result;
use crate::options::WrapOptions;
use crate::output::Output;
use crate::wrapper::{Wrapper, WrapperStats};
use clap::ValueEnum;
use std::path::PathBuf;

/// Available demonstrations, in default run order
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Demo {
    /// Counting wrapper around two greeting functions
    CountCalls,
    /// Configurable counting/timing wrapper (uses --options / callwrap.toml)
    TraceUsage,
    /// compose() with a target, with options, and with both (rejected)
    OptArgs,
    /// Tracing wrapper printing each call and its call site
    Tracing,
    /// Output copied to the log file while redirection is on
    Redirect,
    /// Representation built from an explicit field list
    Repr,
    /// Derived constructor, debug output and equality
    Dataclass,
    /// Instance getter/setter and type-scoped state
    Accessors,
}

impl Demo {
    /// All demos in run order
    pub fn all() -> &'static [Demo] {
        &[
            Demo::CountCalls,
            Demo::TraceUsage,
            Demo::OptArgs,
            Demo::Tracing,
            Demo::Redirect,
            Demo::Repr,
            Demo::Dataclass,
            Demo::Accessors,
        ]
    }

    /// Name accepted on the command line
    pub fn name(self) -> &'static str {
        match self {
            Demo::CountCalls => "count-calls",
            Demo::TraceUsage => "trace-usage",
            Demo::OptArgs => "opt-args",
            Demo::Tracing => "tracing",
            Demo::Redirect => "redirect",
            Demo::Repr => "repr",
            Demo::Dataclass => "dataclass",
            Demo::Accessors => "accessors",
        }
    }

    pub fn run(self, ctx: &mut DemoContext) -> Result<()> {
        tracing::debug!(demo = self.name(), "running demo");
        match self {
            Demo::CountCalls => count_calls::run(ctx),
            Demo::TraceUsage => trace_usage::run(ctx),
            Demo::OptArgs => opt_args::run(ctx),
            Demo::Tracing => tracing_wrapper::run(ctx),
            Demo::Redirect => redirect::run(ctx),
            Demo::Repr => repr::run(ctx),
            Demo::Dataclass => dataclass::run(ctx),
            Demo::Accessors => accessors::run(ctx),
        }
    }
}

/// Shared settings and collected wrapper statistics
#[derive(Debug)]
pub struct DemoContext {
    pub output: Output,
    /// Options for demos whose wrapper is configurable
    pub options: WrapOptions,
    /// Append-mode file used by the redirection demo
    pub log_file: PathBuf,
    stats: Vec<WrapperStats>,
}

impl DemoContext {
    pub fn new(output: Output, options: WrapOptions, log_file: impl Into<PathBuf>) -> Self {
        Self {
            output,
            options,
            log_file: log_file.into(),
            stats: Vec::new(),
        }
    }

    /// Keep a snapshot of a wrapper's statistics for the final summary
    pub fn record<F>(&mut self, wrapper: &Wrapper<F>) {
        self.stats.push(wrapper.stats());
    }

    pub fn stats(&self) -> &[WrapperStats] {
        &self.stats
    }

    fn line(&self, text: &str) -> Result<()> {
        self.output.emit_line(text)
    }

    fn rule(&self, ch: char, width: usize) -> Result<()> {
        self.line(&ch.to_string().repeat(width))
    }
}
