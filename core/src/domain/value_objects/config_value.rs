//! Connector parameters that arrive either as plain strings or wrapped

use std::fmt;
use std::sync::Arc;

/// Capability implemented by host-engine wrappers that carry a string value
///
/// Host engines often pass configuration through their own value types
/// (secret references, templated values, ...). Implementing this trait is the
/// only way such a wrapper is turned into a string.
pub trait ConfigSource: Send + Sync {
    /// Produce the wrapped string value
    fn as_string(&self) -> String;
}

impl<F> ConfigSource for F
where
    F: Fn() -> String + Send + Sync,
{
    fn as_string(&self) -> String {
        self()
    }
}

/// A connector parameter
#[derive(Clone)]
pub enum ConfigValue {
    /// A plain string supplied directly by the caller
    Raw(String),
    /// A host-engine wrapper, resolved through [`ConfigSource::as_string`]
    Wrapped(Arc<dyn ConfigSource>),
}

impl ConfigValue {
    /// Wrap a host value
    pub fn wrapped(source: impl ConfigSource + 'static) -> Self {
        ConfigValue::Wrapped(Arc::new(source))
    }

    /// Resolve to a plain string
    pub fn resolve(&self) -> String {
        match self {
            ConfigValue::Raw(value) => value.clone(),
            ConfigValue::Wrapped(source) => source.as_string(),
        }
    }
}

// Wrapped values are frequently secrets, so only the variant is printed.
impl fmt::Debug for ConfigValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigValue::Raw(_) => f.write_str("ConfigValue::Raw(..)"),
            ConfigValue::Wrapped(_) => f.write_str("ConfigValue::Wrapped(..)"),
        }
    }
}

impl From<String> for ConfigValue {
    fn from(value: String) -> Self {
        ConfigValue::Raw(value)
    }
}

impl From<&str> for ConfigValue {
    fn from(value: &str) -> Self {
        ConfigValue::Raw(value.to_string())
    }
}

impl From<&String> for ConfigValue {
    fn from(value: &String) -> Self {
        ConfigValue::Raw(value.clone())
    }
}

impl From<Arc<dyn ConfigSource>> for ConfigValue {
    fn from(source: Arc<dyn ConfigSource>) -> Self {
        ConfigValue::Wrapped(source)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct SecretRef {
        value: String,
    }

    impl ConfigSource for SecretRef {
        fn as_string(&self) -> String {
            self.value.clone()
        }
    }

    #[test]
    fn test_raw_and_wrapped_resolve_identically() {
        let raw = ConfigValue::from("+15551234567");
        let wrapped = ConfigValue::wrapped(SecretRef {
            value: "+15551234567".to_string(),
        });

        assert_eq!(raw.resolve(), wrapped.resolve());
    }

    #[test]
    fn test_closure_source() {
        let value = ConfigValue::wrapped(|| "ACtest".to_string());
        assert_eq!(value.resolve(), "ACtest");
    }

    #[test]
    fn test_debug_hides_value() {
        let value = ConfigValue::from("super-secret-token");
        let printed = format!("{:?}", value);
        assert!(!printed.contains("super-secret-token"));
    }
}
