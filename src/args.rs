//! Canonical rendering of call arguments for traces
//!
//! Typed targets take their arguments as a tuple and are rendered element by
//! element with `{:?}`. Targets that want keyword-style arguments take a
//! [`CallArgs`], whose named values keep insertion order.

use serde_json::Value;
use std::fmt::{self, Debug};

/// Renders an argument list as `a, b, key=c`
pub trait RenderArgs {
    fn render_args(&self) -> String;
}

impl RenderArgs for () {
    fn render_args(&self) -> String {
        String::new()
    }
}

macro_rules! impl_render_args_for_tuple {
    ($($name:ident),+) => {
        impl<$($name: Debug),+> RenderArgs for ($($name,)+) {
            #[allow(non_snake_case)]
            fn render_args(&self) -> String {
                let ($($name,)+) = self;
                let parts: Vec<String> = vec![$(format!("{:?}", $name)),+];
                parts.join(", ")
            }
        }
    };
}

impl_render_args_for_tuple!(A);
impl_render_args_for_tuple!(A, B);
impl_render_args_for_tuple!(A, B, C);
impl_render_args_for_tuple!(A, B, C, D);
impl_render_args_for_tuple!(A, B, C, D, E);
impl_render_args_for_tuple!(A, B, C, D, E, F);

/// Positional and named argument values of a dynamic call
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CallArgs {
    positional: Vec<Value>,
    named: Vec<(String, Value)>,
}

impl CallArgs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a positional argument
    pub fn arg(mut self, value: impl Into<Value>) -> Self {
        self.positional.push(value.into());
        self
    }

    /// Append a named argument; a repeated key replaces the value in place
    pub fn named(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        let key = key.into();
        let value = value.into();
        match self.named.iter_mut().find(|(k, _)| *k == key) {
            Some(slot) => slot.1 = value,
            None => self.named.push((key, value)),
        }
        self
    }

    pub fn positional(&self, index: usize) -> Option<&Value> {
        self.positional.get(index)
    }

    pub fn get_named(&self, key: &str) -> Option<&Value> {
        self.named.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    /// Positional argument at `index`, or the named argument `key`
    pub fn get(&self, index: usize, key: &str) -> Option<&Value> {
        self.positional(index).or_else(|| self.get_named(key))
    }

    pub fn len(&self) -> usize {
        self.positional.len() + self.named.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl fmt::Display for CallArgs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for value in &self.positional {
            if !first {
                f.write_str(", ")?;
            }
            write!(f, "{}", value)?;
            first = false;
        }
        for (key, value) in &self.named {
            if !first {
                f.write_str(", ")?;
            }
            write!(f, "{}={}", key, value)?;
            first = false;
        }
        Ok(())
    }
}

impl RenderArgs for CallArgs {
    fn render_args(&self) -> String {
        self.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_render_unit() {
        assert_eq!(().render_args(), "");
    }

    #[test]
    fn test_render_tuples() {
        assert_eq!(("Max",).render_args(), "\"Max\"");
        assert_eq!((2, 3).render_args(), "2, 3");
        assert_eq!((1.5, "x", vec![1, 2]).render_args(), "1.5, \"x\", [1, 2]");
    }

    #[test]
    fn test_call_args_render_order() {
        let args = CallArgs::new()
            .arg(900)
            .named("param2", json!({"1": "A", "2": "B"}))
            .named("flag", true);
        assert_eq!(args.render_args(), "900, param2={\"1\":\"A\",\"2\":\"B\"}, flag=true");
    }

    #[test]
    fn test_call_args_map_keeps_insertion_order() {
        let args = CallArgs::new().named("param2", json!({"3": "C", "1": "A", "2": "B"}));
        assert_eq!(args.render_args(), "param2={\"3\":\"C\",\"1\":\"A\",\"2\":\"B\"}");
    }

    #[test]
    fn test_render_six_tuple() {
        assert_eq!((1, 2, 3, 4, 5, "six").render_args(), "1, 2, 3, 4, 5, \"six\"");
    }

    #[test]
    fn test_call_args_repeated_key_keeps_position() {
        let args = CallArgs::new().named("a", 1).named("b", 2).named("a", 3);
        assert_eq!(args.to_string(), "a=3, b=2");
        assert_eq!(args.len(), 2);
    }

    #[test]
    fn test_call_args_lookup() {
        let args = CallArgs::new().arg("x").named("param2", json!([1, 2]));
        assert_eq!(args.positional(0), Some(&json!("x")));
        assert_eq!(args.positional(1), None);
        assert_eq!(args.get(1, "param2"), Some(&json!([1, 2])));
        assert_eq!(args.get_named("missing"), None);
        assert!(!args.is_empty());
        assert!(CallArgs::new().is_empty());
    }
}
