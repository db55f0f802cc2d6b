//! Controlled field access: per-instance and type-scoped state
//!
//! `Example` keeps its instance value private behind a getter/setter pair.
//! The type-scoped value is one process-wide static shared by every
//! `Example`, read and written with relaxed atomics and no further locking.

use std::sync::atomic::{AtomicI64, Ordering};

/// Initial value of the type-scoped state
pub const INITIAL_SHARED: i64 = 100;

static SHARED: AtomicI64 = AtomicI64::new(INITIAL_SHARED);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Example {
    attr: i64,
}

impl Example {
    pub fn new(attr: i64) -> Self {
        Self { attr }
    }

    pub fn attr(&self) -> i64 {
        self.attr
    }

    pub fn set_attr(&mut self, value: i64) {
        self.attr = value;
    }

    /// Value shared by all instances
    pub fn shared() -> i64 {
        SHARED.load(Ordering::Relaxed)
    }

    pub fn set_shared(value: i64) {
        SHARED.store(value, Ordering::Relaxed);
    }
}
