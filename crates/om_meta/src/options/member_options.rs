use alloc::boxed::Box;
use alloc::string::String;
use core::any::Any;

use serde_json::{Map, Value};
use thiserror::Error;

use crate::info::MapShape;
use crate::options::{CustomDeserializer, CustomSerializer};

// -----------------------------------------------------------------------------
// OptionBag

/// Opaque options forwarded to engine-level policies.
pub type OptionBag = Map<String, Value>;

/// Option keys understood by registration, in their exchange spelling.
pub const RECOGNIZED_KEYS: [&str; 6] = [
    "shape",
    "isRequired",
    "emitDefaultValue",
    "name",
    "serializer",
    "deserializer",
];

// -----------------------------------------------------------------------------
// OptionsError

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum OptionsError {
    #[error("member options must be an object, found {found}")]
    NotAnObject { found: &'static str },

    #[error("option `{key}` expects {expected}, found {found}")]
    InvalidType {
        key: &'static str,
        expected: &'static str,
        found: &'static str,
    },

    #[error("option `shape` must be \"array\" or \"object\", found {0}")]
    InvalidShape(String),

    #[error("option `{key}` holds a function and cannot be given as a JSON value")]
    FunctionInBag { key: &'static str },
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

// -----------------------------------------------------------------------------
// MemberOptions

/// Options of a single member registration.
///
/// Every field may be left out; `None` means "not specified" and is kept
/// apart from an explicit `false` in the stored record.
///
/// # Examples
///
/// ```
/// use om_meta::info::MapShape;
/// use om_meta::options::MemberOptions;
///
/// let options = MemberOptions::new()
///     .named("entries")
///     .with_shape(MapShape::Object)
///     .required(true)
///     .with_extra("preserveNull", true);
///
/// assert_eq!(options.name.as_deref(), Some("entries"));
/// assert_eq!(options.is_required, Some(true));
/// assert_eq!(options.emit_default_value, None);
/// ```
#[derive(Debug, Clone, Default)]
pub struct MemberOptions {
    /// Layout of map members, ignored by other members.
    pub shape: Option<MapShape>,
    /// The member must be present when deserializing.
    pub is_required: Option<bool>,
    /// Emit a default value for uninitialized members.
    pub emit_default_value: Option<bool>,
    /// Exchange key used instead of the property key.
    pub name: Option<String>,
    pub serializer: Option<CustomSerializer>,
    pub deserializer: Option<CustomDeserializer>,
    /// Options this layer does not know, see [`extract_passthrough`].
    pub extra: OptionBag,
}

impl MemberOptions {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_shape(mut self, shape: MapShape) -> Self {
        self.shape = Some(shape);
        self
    }

    pub fn required(mut self, value: bool) -> Self {
        self.is_required = Some(value);
        self
    }

    pub fn emit_default_value(mut self, value: bool) -> Self {
        self.emit_default_value = Some(value);
        self
    }

    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_serializer(
        mut self,
        f: impl Fn(&dyn Any) -> Value + Send + Sync + 'static,
    ) -> Self {
        self.serializer = Some(CustomSerializer::new(f));
        self
    }

    pub fn with_deserializer(
        mut self,
        f: impl Fn(&Value) -> Box<dyn Any + Send> + Send + Sync + 'static,
    ) -> Self {
        self.deserializer = Some(CustomDeserializer::new(f));
        self
    }

    pub fn with_extra(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }

    /// Normalizes a loosely-typed options object.
    ///
    /// - Recognized keys are parsed, a `null` value counts as omitted.
    /// - `serializer` and `deserializer` cannot be carried by JSON, a non-null
    ///   value for them is rejected.
    /// - Every other key is kept in [`extra`](Self::extra) unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use om_meta::info::MapShape;
    /// use om_meta::options::MemberOptions;
    /// use serde_json::json;
    ///
    /// let options = MemberOptions::from_json(&json!({
    ///     "shape": "object",
    ///     "isRequired": null,
    ///     "emitDefaultValue": false,
    ///     "preserveNull": true,
    /// })).unwrap();
    ///
    /// assert_eq!(options.shape, Some(MapShape::Object));
    /// assert_eq!(options.is_required, None);
    /// assert_eq!(options.emit_default_value, Some(false));
    /// assert_eq!(options.extra["preserveNull"], json!(true));
    /// ```
    pub fn from_json(value: &Value) -> Result<Self, OptionsError> {
        let Value::Object(bag) = value else {
            return Err(OptionsError::NotAnObject {
                found: json_type(value),
            });
        };

        let mut options = Self::default();
        for (key, value) in bag {
            match key.as_str() {
                "shape" => options.shape = parse_shape(value)?,
                "isRequired" => options.is_required = parse_bool("isRequired", value)?,
                "emitDefaultValue" => {
                    options.emit_default_value = parse_bool("emitDefaultValue", value)?;
                }
                "name" => options.name = parse_string("name", value)?,
                "serializer" if !value.is_null() => {
                    return Err(OptionsError::FunctionInBag { key: "serializer" });
                }
                "deserializer" if !value.is_null() => {
                    return Err(OptionsError::FunctionInBag {
                        key: "deserializer",
                    });
                }
                "serializer" | "deserializer" => {}
                _ => {
                    options.extra.insert(key.clone(), value.clone());
                }
            }
        }
        Ok(options)
    }
}

fn parse_bool(key: &'static str, value: &Value) -> Result<Option<bool>, OptionsError> {
    match value {
        Value::Null => Ok(None),
        Value::Bool(b) => Ok(Some(*b)),
        other => Err(OptionsError::InvalidType {
            key,
            expected: "a boolean",
            found: json_type(other),
        }),
    }
}

fn parse_string(key: &'static str, value: &Value) -> Result<Option<String>, OptionsError> {
    match value {
        Value::Null => Ok(None),
        Value::String(s) => Ok(Some(s.clone())),
        other => Err(OptionsError::InvalidType {
            key,
            expected: "a string",
            found: json_type(other),
        }),
    }
}

fn parse_shape(value: &Value) -> Result<Option<MapShape>, OptionsError> {
    match value {
        Value::Null => Ok(None),
        Value::String(_) => serde_json::from_value(value.clone())
            .map(Some)
            .map_err(|_| OptionsError::InvalidShape(value.to_string())),
        other => Err(OptionsError::InvalidShape(other.to_string())),
    }
}

// -----------------------------------------------------------------------------
// Passthrough

/// Returns the opaque remainder of `options`: `extra` without any
/// [recognized key](RECOGNIZED_KEYS).
pub fn extract_passthrough(options: &MemberOptions) -> OptionBag {
    options
        .extra
        .iter()
        .filter(|(key, _)| !RECOGNIZED_KEYS.contains(&key.as_str()))
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect()
}
