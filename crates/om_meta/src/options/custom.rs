use alloc::boxed::Box;
use alloc::sync::Arc;
use core::any::Any;
use core::fmt;

use serde_json::Value;

// -----------------------------------------------------------------------------
// CustomSerializer

/// Converts a domain value into an exchange value.
///
/// The callee must assure the value has the declared member type,
/// nothing here checks it.
#[derive(Clone)]
pub struct CustomSerializer(Arc<dyn Fn(&dyn Any) -> Value + Send + Sync>);

impl CustomSerializer {
    pub fn new(f: impl Fn(&dyn Any) -> Value + Send + Sync + 'static) -> Self {
        Self(Arc::new(f))
    }

    #[inline]
    pub fn call(&self, value: &dyn Any) -> Value {
        (self.0)(value)
    }

    /// Returns `true` if both wrap the same function object.
    #[inline]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for CustomSerializer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("CustomSerializer(..)")
    }
}

// -----------------------------------------------------------------------------
// CustomDeserializer

/// Converts an exchange value into a domain value.
#[derive(Clone)]
pub struct CustomDeserializer(Arc<dyn Fn(&Value) -> Box<dyn Any + Send> + Send + Sync>);

impl CustomDeserializer {
    pub fn new(f: impl Fn(&Value) -> Box<dyn Any + Send> + Send + Sync + 'static) -> Self {
        Self(Arc::new(f))
    }

    #[inline]
    pub fn call(&self, value: &Value) -> Box<dyn Any + Send> {
        (self.0)(value)
    }

    /// Returns `true` if both wrap the same function object.
    #[inline]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for CustomDeserializer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("CustomDeserializer(..)")
    }
}
