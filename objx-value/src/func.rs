//! Callable values

use crate::value::Value;
use std::sync::Arc;

/// Signature shared by every callable held in a `Value`
pub type FuncFn = dyn Fn(&[Value]) -> Value + Send + Sync;

/// Reference-counted callable handle
///
/// Two handles are equal only when they point at the same closure. An
/// optional name is used as the textual form of the value when rendering.
#[derive(Clone)]
pub struct Func {
    name: Option<String>,
    inner: Arc<FuncFn>,
}

impl Func {
    /// Wrap an anonymous closure
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(&[Value]) -> Value + Send + Sync + 'static,
    {
        Self {
            name: None,
            inner: Arc::new(f),
        }
    }

    /// Wrap a closure with a display name
    pub fn named<F>(name: impl Into<String>, f: F) -> Self
    where
        F: Fn(&[Value]) -> Value + Send + Sync + 'static,
    {
        Self {
            name: Some(name.into()),
            inner: Arc::new(f),
        }
    }

    /// Display name, if one was given
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Invoke the callable
    pub fn call(&self, args: &[Value]) -> Value {
        (self.inner)(args)
    }
}

impl PartialEq for Func {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl std::fmt::Debug for Func {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.name {
            Some(name) => write!(f, "Func({})", name),
            None => f.write_str("Func(<anonymous>)"),
        }
    }
}
