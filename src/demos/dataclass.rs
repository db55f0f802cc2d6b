use super::DemoContext;
use crate::error::Result;
use crate::record::Record;
use crate::repr::repr;
use serde_json::json;
use std::collections::BTreeMap;

pub(super) fn run(ctx: &mut DemoContext) -> Result<()> {
    let mut obj1 = Record {
        parami: 1,
        paramf: 2.5,
        params: "π".to_string(),
        paraml: vec!["koń".to_string(), "krowa".to_string(), "koza".to_string()],
        paramt: vec![json!(1), json!(2), json!(3), json!(4)],
        paramd: BTreeMap::from([("привіт".to_string(), "witam".to_string())]),
    };

    ctx.rule('=', 34)?;
    ctx.line("Derived debug formatting:")?;
    ctx.line(&format!("{:?}", obj1))?;
    ctx.line(&repr(&obj1))?;

    ctx.rule('=', 34)?;
    ctx.line("Field access:")?;
    ctx.line(&format!("{:?}", obj1.paramt))?;
    obj1.paramt = vec![json!("A"), json!("B"), json!("C")];
    ctx.line(&format!("{:?}", obj1.paramt))?;

    ctx.rule('=', 34)?;
    ctx.line("Field-wise equality:")?;
    let obj2 = Record {
        parami: 2,
        paramf: 1.5,
        params: String::new(),
        paraml: Vec::new(),
        paramt: Vec::new(),
        paramd: BTreeMap::new(),
    };
    let verdict = if obj1 == obj2 { " " } else { " not " };
    ctx.line(&format!("{} is{}equal {}", repr(&obj1), verdict, repr(&obj2)))?;
    Ok(())
}
