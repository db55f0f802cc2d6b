use super::tracing_wrapper::distinct;
use super::DemoContext;
use crate::args::CallArgs;
use crate::error::{CallWrapError, Result};
use crate::output::open_log;
use crate::wrapper::Target;
use serde_json::{json, Value};

pub(super) fn run(ctx: &mut DemoContext) -> Result<()> {
    let out = ctx.output.clone();
    let mut test_function1 = Target::new("test_function1", move |args: CallArgs| {
        let param1 = args.get(0, "param1").cloned().unwrap_or(Value::Null);
        let param2 = args.get(1, "param2").cloned().unwrap_or(Value::Null);
        out.emit_line(&format!("Inside test_function1({}, {})", param1, param2))?;
        Ok::<_, CallWrapError>(distinct(&param2))
    });

    let sink = open_log(&ctx.log_file)?;
    tracing::debug!(path = %ctx.log_file.display(), "redirecting output");
    ctx.output.redirected(sink, |output| -> Result<()> {
        let calls = [
            CallArgs::new().arg("param").arg(json!([1, 2, 3, 2])),
            CallArgs::new().arg(500).arg(json!([1, 2, 3, 2])),
            CallArgs::new()
                .arg(900)
                .named("param2", json!({"1": "A", "2": "B", "3": "C"})),
        ];
        for args in calls {
            let result = test_function1.call(args)?;
            output.emit_line(&format!("{:?}", result))?;
        }
        Ok(())
    })?;

    let calls = [
        CallArgs::new().arg("PARAM").arg(json!([4, 5, 6, 7])),
        CallArgs::new().arg(1000).arg(json!([4, 5, 6, 7])),
        CallArgs::new()
            .arg(2000)
            .named("param2", json!({"4": "D", "5": "E", "6": "F"})),
    ];
    for args in calls {
        let result = test_function1.call(args)?;
        ctx.line(&format!("{:?}", result))?;
    }
    Ok(())
}
