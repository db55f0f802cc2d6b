//! Call wrappers: counting, timing and tracing around a named callable
//!
//! A [`Wrapper`] owns its target and the bookkeeping for it. Calling the
//! wrapper runs the enabled bookkeeping steps in a fixed order, then hands
//! the arguments to the target unmodified and returns its result unchanged:
//!
//! 1. trace: print the call (name, rendered arguments) and the call site
//! 2. count: increment the invocation count and print `"{n}: "`
//! 3. time: measure the delegated call and add it to the running total
//!
//! The count is taken before delegation, so calls whose target returns an
//! error (or panics) are counted too. Target failures are never caught:
//! `Err` values come back as-is and panics unwind through the wrapper.

use crate::args::RenderArgs;
use crate::error::{CallWrapError, Result};
use crate::options::WrapOptions;
use crate::output::Output;
use serde::Serialize;
use std::fmt;
use std::panic::Location;
use std::time::{Duration, Instant};

/// A callable with a display name
pub struct Target<F> {
    name: String,
    func: F,
}

impl<F> Target<F> {
    pub fn new(name: impl Into<String>, func: F) -> Self {
        Self {
            name: name.into(),
            func,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Invoke the target directly, without any bookkeeping
    pub fn call<A, R>(&mut self, args: A) -> R
    where
        F: FnMut(A) -> R,
    {
        (self.func)(args)
    }
}

impl<F> fmt::Debug for Target<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<function {}>", self.name)
    }
}

/// Snapshot of a wrapper's bookkeeping
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WrapperStats {
    pub name: String,
    pub invocation_count: u64,
    /// Accumulated time in seconds (0 unless timing is enabled)
    pub elapsed_secs: f64,
    /// Mean time per call in seconds (0 for zero calls)
    pub mean_secs: f64,
}

/// A target plus the state tracked around its calls
pub struct Wrapper<F> {
    target: Target<F>,
    options: WrapOptions,
    output: Output,
    invocation_count: u64,
    elapsed_time_total: Duration,
}

impl<F> Wrapper<F> {
    pub fn new(target: Target<F>, options: WrapOptions, output: Output) -> Self {
        tracing::debug!(target_name = %target.name, %options, "wrapping target");
        Self {
            target,
            options,
            output,
            invocation_count: 0,
            elapsed_time_total: Duration::ZERO,
        }
    }

    /// Call the target through the configured bookkeeping
    #[track_caller]
    pub fn call<A, R>(&mut self, args: A) -> R
    where
        F: FnMut(A) -> R,
        A: RenderArgs,
    {
        let caller = Location::caller();

        if self.options.trace {
            self.emit_line(&format!(
                "{} Calling {}({})",
                "-".repeat(5),
                self.target.name,
                args.render_args()
            ));
            self.emit_line(&format!("Called in {}:{}", caller.file(), caller.line()));
        }

        self.invocation_count += 1;
        if self.options.count {
            self.emit(&format!("{}: ", self.invocation_count));
        }
        tracing::trace!(
            target_name = %self.target.name,
            call = self.invocation_count,
            "delegating"
        );

        if !self.options.time {
            return self.target.call(args);
        }

        let start = Instant::now();
        let result = self.target.call(args);
        let elapsed = start.elapsed();
        self.elapsed_time_total += elapsed;
        self.emit_line(&format!(
            "{} {:.4} seconds.",
            " ".repeat(6),
            elapsed.as_secs_f64()
        ));
        result
    }

    /// Send this wrapper's bookkeeping output to `output`
    pub fn with_output(mut self, output: Output) -> Self {
        self.output = output;
        self
    }

    pub fn name(&self) -> &str {
        self.target.name()
    }

    pub fn options(&self) -> WrapOptions {
        self.options
    }

    pub fn output(&self) -> &Output {
        &self.output
    }

    pub fn invocation_count(&self) -> u64 {
        self.invocation_count
    }

    pub fn elapsed_time_total(&self) -> Duration {
        self.elapsed_time_total
    }

    /// Mean time per call, zero when the wrapper was never called
    pub fn mean_time(&self) -> Duration {
        match u32::try_from(self.invocation_count) {
            Ok(0) => Duration::ZERO,
            Ok(n) => self.elapsed_time_total / n,
            Err(_) => Duration::from_secs_f64(
                self.elapsed_time_total.as_secs_f64() / self.invocation_count as f64,
            ),
        }
    }

    pub fn stats(&self) -> WrapperStats {
        WrapperStats {
            name: self.target.name.clone(),
            invocation_count: self.invocation_count,
            elapsed_secs: self.elapsed_time_total.as_secs_f64(),
            mean_secs: self.mean_time().as_secs_f64(),
        }
    }

    /// Drop the bookkeeping and get the target back
    pub fn into_inner(self) -> Target<F> {
        self.target
    }

    // Bookkeeping output must not change what the target returns, so write
    // failures are logged and otherwise ignored.
    fn emit(&self, text: &str) {
        if let Err(e) = self.output.emit(text) {
            tracing::warn!(error = %e, "failed to write wrapper output");
        }
    }

    fn emit_line(&self, text: &str) {
        if let Err(e) = self.output.emit_line(text) {
            tracing::warn!(error = %e, "failed to write wrapper output");
        }
    }
}

impl<F> fmt::Display for Wrapper<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.options.count {
            write!(
                f,
                "Function {}() was called {} times.",
                self.target.name, self.invocation_count
            )?;
            if self.options.time {
                writeln!(f)?;
            }
        }
        if self.options.time {
            write!(
                f,
                "All calls took {:.4} seconds. Mean value {:.4} seconds",
                self.elapsed_time_total.as_secs_f64(),
                self.mean_time().as_secs_f64()
            )?;
        }
        Ok(())
    }
}

impl<F> fmt::Debug for Wrapper<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Wrapper")
            .field("target", &self.target)
            .field("options", &self.options)
            .field("invocation_count", &self.invocation_count)
            .field("elapsed_time_total", &self.elapsed_time_total)
            .finish()
    }
}

/// Builds wrappers sharing one set of options and one output handle
#[derive(Debug, Clone, Default)]
pub struct Composer {
    options: WrapOptions,
    output: Output,
}

impl Composer {
    /// Composer using [`WrapOptions::default`]
    pub fn with_defaults() -> Self {
        Self::default()
    }

    pub fn with_options(options: WrapOptions) -> Self {
        Self {
            options,
            output: Output::default(),
        }
    }

    /// Composer configured from `key=value` overrides; at least one is required
    pub fn from_overrides(overrides: &[(&str, &str)]) -> Result<Self> {
        if overrides.is_empty() {
            return Err(CallWrapError::InvalidComposition(
                "expected a target or at least one option".to_string(),
            ));
        }
        WrapOptions::from_pairs(overrides).map(Self::with_options)
    }

    /// Send wrapper output to `output` instead of stdout
    pub fn output(mut self, output: Output) -> Self {
        self.output = output;
        self
    }

    pub fn options(&self) -> WrapOptions {
        self.options
    }

    pub fn wrap<F>(&self, target: Target<F>) -> Wrapper<F> {
        Wrapper::new(target, self.options, self.output.clone())
    }
}

/// Result of [`compose`]: a finished wrapper, or a composer awaiting its target
#[derive(Debug)]
pub enum Decoration<F> {
    Wrapped(Wrapper<F>),
    Deferred(Composer),
}

impl<F> Decoration<F> {
    /// The finished wrapper; fails if options are still waiting for a target
    pub fn into_wrapper(self) -> Result<Wrapper<F>> {
        match self {
            Decoration::Wrapped(wrapper) => Ok(wrapper),
            Decoration::Deferred(_) => Err(CallWrapError::InvalidComposition(
                "composition has no target yet".to_string(),
            )),
        }
    }

    /// The pending composer; fails if a target was already wrapped
    pub fn into_composer(self) -> Result<Composer> {
        match self {
            Decoration::Wrapped(wrapper) => Err(CallWrapError::InvalidComposition(format!(
                "target '{}' is already wrapped",
                wrapper.name()
            ))),
            Decoration::Deferred(composer) => Ok(composer),
        }
    }
}

/// Single entry point accepting either a target or options, never both
///
/// - `compose(Some(target), &[])` wraps the target with default options
/// - `compose(None, &[("time", "true")])` returns a composer to apply later
///
/// Passing both a target and options, or neither, is ambiguous and fails
/// with [`CallWrapError::InvalidComposition`].
pub fn compose<F>(target: Option<Target<F>>, overrides: &[(&str, &str)]) -> Result<Decoration<F>> {
    let rendered: Vec<String> = overrides.iter().map(|(k, v)| format!("{}={}", k, v)).collect();
    tracing::debug!(
        target_name = target.as_ref().map_or("<none>", |t| t.name()),
        overrides = %rendered.join(", "),
        "compose"
    );

    match (target, overrides.is_empty()) {
        (Some(target), true) => Ok(Decoration::Wrapped(Composer::with_defaults().wrap(target))),
        (None, false) => Composer::from_overrides(overrides).map(Decoration::Deferred),
        (Some(target), false) => Err(CallWrapError::InvalidComposition(format!(
            "compose() takes either a target or options, got target '{}' and options [{}]",
            target.name(),
            rendered.join(", ")
        ))),
        (None, true) => Err(CallWrapError::InvalidComposition(
            "compose() needs a target or at least one option".to_string(),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn greet_target() -> Target<impl FnMut((&'static str,)) -> String> {
        Target::new("greet", |(name,): (&str,)| format!("Hello {}", name))
    }

    #[test]
    fn test_counting_scenario() {
        let out = Output::capture();
        let mut greet = Composer::with_defaults().output(out.clone()).wrap(greet_target());

        greet.call(("Max",));
        greet.call(("Max",));
        let third = greet.call(("Bill",));

        assert_eq!(greet.invocation_count(), 3);
        assert_eq!(third, "Hello Bill");
        assert_eq!(out.captured(), "1: 2: 3: ");
    }

    #[test]
    fn test_timing_scenario() {
        let out = Output::capture();
        let options = WrapOptions::none().with_time(true);
        let mut add = Composer::with_options(options).output(out.clone()).wrap(Target::new(
            "add",
            |(a, b): (i32, i32)| {
                std::thread::sleep(Duration::from_secs(0));
                a + b
            },
        ));

        assert_eq!(add.call((2, 3)), 5);
        assert!(add.elapsed_time_total() >= Duration::ZERO);
        assert_eq!(add.invocation_count(), 1);
        assert!(out.captured().ends_with(" seconds.\n"));
    }

    #[test]
    fn test_time_accumulates() {
        let options = WrapOptions::none().with_time(true);
        let mut slow = Composer::with_options(options)
            .output(Output::capture())
            .wrap(Target::new("slow", |(): ()| {
                std::thread::sleep(Duration::from_millis(5))
            }));

        slow.call(());
        let first = slow.elapsed_time_total();
        slow.call(());
        assert!(first >= Duration::from_millis(5));
        assert!(slow.elapsed_time_total() >= first + Duration::from_millis(5));
    }

    #[test]
    fn test_time_disabled_stays_zero() {
        let mut wrapped = Composer::with_defaults()
            .output(Output::capture())
            .wrap(Target::new("noop", |(): ()| ()));
        wrapped.call(());
        assert_eq!(wrapped.elapsed_time_total(), Duration::ZERO);
    }

    #[test]
    fn test_error_passthrough_is_counted() {
        let mut parse = Composer::with_defaults()
            .output(Output::capture())
            .wrap(Target::new("parse", |(s,): (&str,)| s.parse::<i32>()));

        assert_eq!(parse.call(("12",)), Ok(12));
        let err = parse.call(("x",)).unwrap_err();
        assert_eq!(err, "x".parse::<i32>().unwrap_err());
        assert_eq!(parse.invocation_count(), 2);
    }

    #[test]
    fn test_panic_passthrough_is_counted() {
        let mut failing = Composer::with_defaults()
            .output(Output::capture())
            .wrap(Target::new("failing", |(): ()| -> i32 { panic!("target failed") }));

        let caught = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| failing.call(())));
        let message = caught.unwrap_err();
        assert_eq!(message.downcast_ref::<&str>(), Some(&"target failed"));
        assert_eq!(failing.invocation_count(), 1);
    }

    #[test]
    fn test_trace_output() {
        let out = Output::capture();
        let options = WrapOptions::none().with_trace(true);
        let mut add = Composer::with_options(options)
            .output(out.clone())
            .wrap(Target::new("add", |(a, b): (i32, i32)| a + b));

        let line = line!() + 1;
        add.call((2, 3));

        let text = out.captured();
        let mut lines = text.lines();
        assert_eq!(lines.next(), Some("----- Calling add(2, 3)"));
        assert_eq!(
            lines.next(),
            Some(format!("Called in {}:{}", file!(), line).as_str())
        );
        assert_eq!(lines.next(), None);
    }

    #[test]
    fn test_silent_wrapper_writes_nothing() {
        let out = Output::capture();
        let mut wrapped = Composer::with_options(WrapOptions::none())
            .output(out.clone())
            .wrap(greet_target());
        assert_eq!(wrapped.call(("Ann",)), "Hello Ann");
        assert_eq!(out.captured(), "");
        assert_eq!(wrapped.invocation_count(), 1);
    }

    #[test]
    fn test_display_summary() {
        let mut greet = Composer::with_defaults()
            .output(Output::capture())
            .wrap(greet_target());
        greet.call(("Max",));
        greet.call(("Bill",));
        assert_eq!(greet.to_string(), "Function greet() was called 2 times.");
    }

    #[test]
    fn test_display_summary_with_time() {
        let greet = Composer::with_options(WrapOptions::default().with_time(true))
            .output(Output::capture())
            .wrap(greet_target());
        assert_eq!(
            greet.to_string(),
            "Function greet() was called 0 times.\nAll calls took 0.0000 seconds. Mean value 0.0000 seconds"
        );
    }

    #[test]
    fn test_display_summary_silent() {
        let greet = Composer::with_options(WrapOptions::none())
            .output(Output::capture())
            .wrap(greet_target());
        assert_eq!(greet.to_string(), "");
    }

    #[test]
    fn test_stats_snapshot() {
        let mut greet = Composer::with_defaults()
            .output(Output::capture())
            .wrap(greet_target());
        greet.call(("Max",));
        let stats = greet.stats();
        assert_eq!(stats.name, "greet");
        assert_eq!(stats.invocation_count, 1);
        assert_eq!(stats.elapsed_secs, 0.0);
        assert_eq!(stats.mean_secs, 0.0);
    }

    #[test]
    fn test_with_output_replaces_sink() {
        let first = Output::capture();
        let second = Output::capture();
        let mut greet = Composer::with_defaults()
            .output(first.clone())
            .wrap(greet_target())
            .with_output(second.clone());

        greet.call(("Max",));
        assert_eq!(greet.output().captured(), "1: ");
        assert_eq!(second.captured(), "1: ");
        assert_eq!(first.captured(), "");
    }

    #[test]
    fn test_into_inner_returns_target() {
        let wrapped = Composer::with_defaults()
            .output(Output::capture())
            .wrap(greet_target());
        let mut target = wrapped.into_inner();
        assert_eq!(target.name(), "greet");
        assert_eq!(target.call(("Max",)), "Hello Max");
    }

    #[test]
    fn test_compose_target_only() {
        let wrapper = compose(Some(greet_target()), &[])
            .unwrap()
            .into_wrapper()
            .unwrap();
        assert_eq!(wrapper.options(), WrapOptions::default());
        assert_eq!(wrapper.name(), "greet");
    }

    #[test]
    fn test_compose_options_then_target() {
        let composer = compose::<fn((i32, i32)) -> i32>(None, &[("time", "true")])
            .unwrap()
            .into_composer()
            .unwrap();
        assert!(composer.options().time);
        assert!(composer.options().count);

        let mut add = composer
            .output(Output::capture())
            .wrap(Target::new("add", |(a, b): (i32, i32)| a + b));
        assert_eq!(add.call((2, 3)), 5);
    }

    #[test]
    fn test_compose_target_and_options_fails() {
        let result = compose(Some(greet_target()), &[("arg1", "ARGUMENT")]);
        match result {
            Err(CallWrapError::InvalidComposition(msg)) => assert!(msg.contains("greet")),
            other => panic!("expected InvalidComposition, got {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn test_compose_nothing_fails() {
        let result = compose::<fn(()) -> ()>(None, &[]);
        assert!(matches!(result, Err(CallWrapError::InvalidComposition(_))));
    }

    #[test]
    fn test_compose_unknown_option_fails() {
        let result = compose::<fn(()) -> ()>(None, &[("arg1", "true")]);
        assert!(matches!(result, Err(CallWrapError::InvalidComposition(_))));
    }

    #[test]
    fn test_target_debug() {
        assert_eq!(format!("{:?}", greet_target()), "<function greet>");
    }
}
