use super::DemoContext;
use crate::args::CallArgs;
use crate::error::{CallWrapError, Result};
use crate::options::WrapOptions;
use crate::wrapper::{Composer, Target};
use serde_json::{json, Value};
use std::collections::BTreeSet;
use std::thread;
use std::time::Duration;

/// Distinct elements of a value: characters of a string, items of an
/// array, keys of an object
pub(super) fn distinct(value: &Value) -> BTreeSet<String> {
    match value {
        Value::Null => BTreeSet::new(),
        Value::String(s) => s.chars().map(String::from).collect(),
        Value::Array(items) => items.iter().map(Value::to_string).collect(),
        Value::Object(map) => map.keys().cloned().collect(),
        other => BTreeSet::from([other.to_string()]),
    }
}

pub(super) fn run(ctx: &mut DemoContext) -> Result<()> {
    let out = ctx.output.clone();
    let options = WrapOptions::none().with_trace(true).with_time(true);
    let mut test_function1 = Composer::with_options(options)
        .output(ctx.output.clone())
        .wrap(Target::new("test_function1", move |args: CallArgs| {
            let param1 = args.get(0, "param1").and_then(Value::as_f64).unwrap_or(0.0);
            let param2 = args.get(1, "param2").cloned().unwrap_or(Value::Null);
            out.emit_line(&format!("Inside test_function1({}, {})", param1, param2))?;
            thread::sleep(Duration::from_secs_f64(param1.max(0.0) / 200.0));
            Ok::<_, CallWrapError>(distinct(&param2))
        }));

    ctx.line(&format!("{:?}", test_function1))?;

    let calls = [
        CallArgs::new().arg(1).arg("PARAM2"),
        CallArgs::new().arg(2).arg(json!([1, 2, 3, 2])),
        CallArgs::new()
            .arg(3)
            .named("param2", json!({"1": "A", "2": "B", "3": "C"})),
    ];
    for args in calls {
        ctx.rule('=', 20)?;
        let result = test_function1.call(args)?;
        ctx.line(&format!(
            "{} Function {} returned: {:?}",
            "-".repeat(5),
            test_function1.name(),
            result
        ))?;
    }

    ctx.record(&test_function1);
    Ok(())
}
