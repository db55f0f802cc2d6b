use super::DemoContext;
use crate::error::Result;
use crate::output::Output;
use crate::wrapper::{compose, Target};
use std::fmt::Debug;

/// Target printing its arguments and returning the second one
fn echo_second<T: Debug>(
    name: &'static str,
    out: &Output,
) -> Target<impl FnMut((T, T)) -> Result<T>> {
    let out = out.clone();
    Target::new(name, move |(param1, param2): (T, T)| {
        out.emit_line(&format!("Inside {}({:?}, {:?})", name, param1, param2))?;
        Ok(param2)
    })
}

pub(super) fn run(ctx: &mut DemoContext) -> Result<()> {
    ctx.rule('=', 30)?;
    ctx.line("Composer with options applied to a target.")?;
    let composer = compose::<fn((i32, i32)) -> Result<i32>>(None, &[("trace", "true")])?
        .into_composer()?
        .output(ctx.output.clone());
    ctx.line(&format!("Composer options: {}", composer.options()))?;
    let mut test_function1 = composer.wrap(echo_second::<i32>("test_function1", &ctx.output));
    let value = test_function1.call((100, 200))?;
    ctx.line(&format!("{:?}", value))?;
    ctx.rule('=', 30)?;

    ctx.line("Target wrapped without options.")?;
    let target = echo_second::<&str>("test_function2", &ctx.output);
    let mut test_function2 = compose(Some(target), &[])?
        .into_wrapper()?
        .with_output(ctx.output.clone());
    let value = test_function2.call(("100", "200"))?;
    ctx.line(&format!("{:?}", value))?;
    ctx.rule('=', 30)?;

    ctx.line("Options first, target supplied later.")?;
    let deferred =
        compose::<fn((i32, i32)) -> Result<i32>>(None, &[("count", "on"), ("time", "on")])?;
    let composer = deferred.into_composer()?.output(ctx.output.clone());
    let mut test_function3 = composer.wrap(echo_second::<i32>("test_function3", &ctx.output));
    ctx.rule('-', 30)?;
    let value = test_function3.call((100, 200))?;
    ctx.line(&format!("{:?}", value))?;
    ctx.rule('=', 30)?;

    ctx.line("Wrapping an already wrapped target.")?;
    let mut inner = test_function3;
    let outer = Target::new("test_function3", move |args: (i32, i32)| inner.call(args));
    let mut stacked = compose(Some(outer), &[])?
        .into_wrapper()?
        .with_output(ctx.output.clone());
    ctx.rule('-', 30)?;
    let value = stacked.call((100, 200))?;
    ctx.line(&format!("{:?}", value))?;
    ctx.record(&stacked);
    ctx.rule('=', 30)?;

    ctx.line("Improper use: target and options together are rejected.")?;
    match compose(
        Some(echo_second::<i32>("test_function3", &ctx.output)),
        &[("trace", "true")],
    ) {
        Ok(_) => ctx.line("unexpectedly accepted")?,
        Err(e) => ctx.line(&e.to_string())?,
    }
    ctx.rule('=', 30)?;
    Ok(())
}
