//! Representation strings built from an explicit field list
//!
//! Types list their displayable fields in declaration order and get a
//! `Type(a=1, b="a")` rendering without any runtime introspection.

use std::fmt;

/// A type that can list its public fields for display
pub trait Fields {
    const TYPE_NAME: &'static str;

    /// `(name, rendered value)` pairs in declaration order
    fn fields(&self) -> Vec<(&'static str, String)>;
}

/// Render `value` as `Type(name=value, ...)`
pub fn repr<T: Fields>(value: &T) -> String {
    Repr(value).to_string()
}

/// Display adapter producing the same text as [`repr`]
pub struct Repr<'a, T>(pub &'a T);

impl<T: Fields> fmt::Display for Repr<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(", T::TYPE_NAME)?;
        for (i, (name, value)) in self.0.fields().iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}={}", name, value)?;
        }
        f.write_str(")")
    }
}
