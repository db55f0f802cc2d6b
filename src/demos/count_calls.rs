use super::DemoContext;
use crate::error::Result;
use crate::options::WrapOptions;
use crate::wrapper::{Composer, Target};

pub(super) fn run(ctx: &mut DemoContext) -> Result<()> {
    let composer =
        Composer::with_options(WrapOptions::none().with_count(true)).output(ctx.output.clone());

    let out = ctx.output.clone();
    let mut say_hello = composer.wrap(Target::new("say_hello", move |(name,): (&str,)| {
        out.emit_line(&format!("Hello {}!", name))
    }));
    let out = ctx.output.clone();
    let mut say_bye = composer.wrap(Target::new("say_bye", move |(name,): (&str,)| {
        out.emit_line(&format!("Bye {}!", name))
    }));

    say_hello.call(("Max",))?;
    say_hello.call(("Max",))?;
    say_hello.call(("Bill",))?;
    say_bye.call(("Bill",))?;
    say_hello.call(("Ann",))?;
    say_bye.call(("Ann",))?;
    say_bye.call(("Max",))?;

    ctx.line(&say_hello.to_string())?;
    ctx.line(&say_bye.to_string())?;

    ctx.record(&say_hello);
    ctx.record(&say_bye);
    Ok(())
}
