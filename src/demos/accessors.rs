use super::DemoContext;
use crate::accessors::Example;
use crate::error::Result;

pub(super) fn run(ctx: &mut DemoContext) -> Result<()> {
    ctx.line("Two instances of Example")?;
    let mut example1 = Example::new(5);
    let mut example2 = Example::new(10);

    ctx.line("Type-scoped value")?;
    ctx.line(&Example::shared().to_string())?;
    Example::set_shared(200);
    ctx.line(&Example::shared().to_string())?;
    Example::set_shared(300);
    ctx.line(&format!(
        "Shared value after set_shared(300): {}",
        Example::shared()
    ))?;

    ctx.line("Getter")?;
    ctx.line(&example1.attr().to_string())?;
    ctx.line(&example2.attr().to_string())?;

    ctx.line("Setter")?;
    example1.set_attr(8);
    ctx.line(&example1.attr().to_string())?;
    example2.set_attr(16);
    ctx.line(&example2.attr().to_string())?;
    Ok(())
}
