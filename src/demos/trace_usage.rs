use super::DemoContext;
use crate::error::Result;
use crate::wrapper::{Composer, Target};
use std::thread;
use std::time::Duration;

const NAMES: [&str; 4] = ["ABC", "DEF", "GHI", "JKL"];

pub(super) fn run(ctx: &mut DemoContext) -> Result<()> {
    ctx.line(&format!("Wrapper options: {}", ctx.options))?;

    let out = ctx.output.clone();
    let mut test_func = Composer::with_options(ctx.options)
        .output(ctx.output.clone())
        .wrap(Target::new("test_func", move |(name,): (&str,)| {
            // Variable latency, bounded so the demo stays quick.
            let millis = name.bytes().map(u64::from).sum::<u64>() % 20;
            thread::sleep(Duration::from_millis(millis + 1));
            out.emit_line(name)
        }));

    for name in NAMES {
        test_func.call((name,))?;
    }

    ctx.line(&test_func.to_string())?;
    ctx.record(&test_func);
    Ok(())
}
