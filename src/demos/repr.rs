use super::DemoContext;
use crate::error::Result;
use crate::repr::{repr, Fields, Repr};

struct MyClass {
    a: i32,
    b: String,
}

impl Fields for MyClass {
    const TYPE_NAME: &'static str = "MyClass";

    fn fields(&self) -> Vec<(&'static str, String)> {
        vec![("a", format!("{:?}", self.a)), ("b", format!("{:?}", self.b))]
    }
}

pub(super) fn run(ctx: &mut DemoContext) -> Result<()> {
    let obj = MyClass {
        a: 1,
        b: "a".to_string(),
    };
    ctx.line(&repr(&obj))?;
    ctx.line(&format!("{}", Repr(&obj)))?;
    Ok(())
}
