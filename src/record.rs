//! Plain data record with derived boilerplate
//!
//! Construction, field access, debug formatting and field-wise equality all
//! come from derives; [`Fields`] adds the `Record(parami=..)` rendering.

use crate::repr::Fields;
use serde::Serialize;
use serde_json::Value;
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Record {
    pub parami: i64,
    pub paramf: f64,
    pub params: String,
    pub paraml: Vec<String>,
    pub paramt: Vec<Value>,
    pub paramd: BTreeMap<String, String>,
}

impl Fields for Record {
    const TYPE_NAME: &'static str = "Record";

    fn fields(&self) -> Vec<(&'static str, String)> {
        vec![
            ("parami", format!("{:?}", self.parami)),
            ("paramf", format!("{:?}", self.paramf)),
            ("params", format!("{:?}", self.params)),
            ("paraml", format!("{:?}", self.paraml)),
            ("paramt", Value::from(self.paramt.clone()).to_string()),
            ("paramd", format!("{:?}", self.paramd)),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repr::repr;
    use serde_json::json;

    fn sample() -> Record {
        Record {
            parami: 1,
            paramf: 2.5,
            params: "π".to_string(),
            paraml: vec!["koń".to_string(), "krowa".to_string()],
            paramt: vec![json!(1), json!(2)],
            paramd: BTreeMap::from([("привіт".to_string(), "witam".to_string())]),
        }
    }

    #[test]
    fn test_field_wise_equality() {
        let a = sample();
        let mut b = a.clone();
        assert_eq!(a, b);

        b.paramt = vec![json!("A"), json!("B"), json!("C")];
        assert_ne!(a, b);
    }

    #[test]
    fn test_repr() {
        let text = repr(&sample());
        assert!(text.starts_with("Record(parami=1, paramf=2.5, params=\"π\""));
        assert!(text.contains("paramt=[1,2]"));
        assert!(text.ends_with("paramd={\"привіт\": \"witam\"})"));
    }

    #[test]
    fn test_serialize() {
        let value = serde_json::to_value(sample()).unwrap();
        assert_eq!(value["parami"], json!(1));
        assert_eq!(value["paraml"][1], json!("krowa"));
    }
}
