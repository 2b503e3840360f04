use alloc::boxed::Box;
use core::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::info::Type;

// -----------------------------------------------------------------------------
// TypeKind

/// The variant of a [`TypeDescriptor`].
///
/// Reflection oracles report declared property types with the same
/// enumeration, so a declaration can be compared with a descriptor directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeKind {
    Concrete,
    Map,
    Array,
    Set,
}

impl fmt::Display for TypeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Concrete => f.pad("Concrete"),
            Self::Map => f.pad("Map"),
            Self::Array => f.pad("Array"),
            Self::Set => f.pad("Set"),
        }
    }
}

/// Error returned when a [`TypeDescriptor`] is not the expected [`TypeKind`].
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("descriptor kind mismatch: expected {expected}, received {received}")]
pub struct KindError {
    pub expected: TypeKind,
    pub received: TypeKind,
}

// -----------------------------------------------------------------------------
// MapShape

/// How a map member is laid out in the exchange format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MapShape {
    /// A list of `{ key, value }` pairs, supports any key type.
    Array,
    /// A keyed object, keys are converted to strings.
    Object,
}

/// Options accepted by [`map_of`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MapOptions {
    pub shape: Option<MapShape>,
}

// -----------------------------------------------------------------------------
// Descriptors

/// A single type, e.g. `u32` or a user class.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConcreteDescriptor {
    ty: Type,
}

impl ConcreteDescriptor {
    /// Returns the referenced [`Type`].
    #[inline]
    pub const fn ty(&self) -> &Type {
        &self.ty
    }
}

/// A key/value container.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MapDescriptor {
    key: Box<TypeDescriptor>,
    value: Box<TypeDescriptor>,
    shape: Option<MapShape>,
}

impl MapDescriptor {
    /// Returns the descriptor of the keys.
    #[inline]
    pub fn key(&self) -> &TypeDescriptor {
        &self.key
    }

    /// Returns the descriptor of the values.
    #[inline]
    pub fn value(&self) -> &TypeDescriptor {
        &self.value
    }

    /// Returns the shape exactly as it was given, `None` lets the engine decide.
    #[inline]
    pub const fn shape(&self) -> Option<MapShape> {
        self.shape
    }
}

/// An ordered sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArrayDescriptor {
    element: Box<TypeDescriptor>,
}

impl ArrayDescriptor {
    /// Returns the descriptor of the elements.
    #[inline]
    pub fn element(&self) -> &TypeDescriptor {
        &self.element
    }
}

/// A collection of unique values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SetDescriptor {
    element: Box<TypeDescriptor>,
}

impl SetDescriptor {
    /// Returns the descriptor of the elements.
    #[inline]
    pub fn element(&self) -> &TypeDescriptor {
        &self.element
    }
}

// -----------------------------------------------------------------------------
// TypeDescriptor

/// Structured description of a member type, independent of any runtime
/// introspection facility.
///
/// Descriptors nest arbitrarily, a map whose values are maps is
/// `map_of(k, map_of(k2, v2, ..), ..)`. Each descriptor tree is owned by
/// exactly one member record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeDescriptor {
    Concrete(ConcreteDescriptor),
    Map(MapDescriptor),
    Array(ArrayDescriptor),
    Set(SetDescriptor),
}

macro_rules! impl_cast_method {
    ($name:ident : $kind:ident => $info:ident) => {
        /// Convert [`TypeDescriptor`] to the specific descriptor.
        pub const fn $name(&self) -> Result<&$info, KindError> {
            match self {
                Self::$kind(info) => Ok(info),
                _ => Err(KindError {
                    expected: TypeKind::$kind,
                    received: self.kind(),
                }),
            }
        }
    };
}

impl TypeDescriptor {
    impl_cast_method!(as_concrete: Concrete => ConcreteDescriptor);
    impl_cast_method!(as_map: Map => MapDescriptor);
    impl_cast_method!(as_array: Array => ArrayDescriptor);
    impl_cast_method!(as_set: Set => SetDescriptor);

    /// Returns the [`TypeKind`] of this descriptor.
    pub const fn kind(&self) -> TypeKind {
        match self {
            Self::Concrete(_) => TypeKind::Concrete,
            Self::Map(_) => TypeKind::Map,
            Self::Array(_) => TypeKind::Array,
            Self::Set(_) => TypeKind::Set,
        }
    }

    /// Nesting depth, a concrete type is `0`.
    pub fn depth(&self) -> usize {
        match self {
            Self::Concrete(_) => 0,
            Self::Map(info) => 1 + info.key.depth().max(info.value.depth()),
            Self::Array(info) => 1 + info.element.depth(),
            Self::Set(info) => 1 + info.element.depth(),
        }
    }
}

impl From<Type> for TypeDescriptor {
    #[inline]
    fn from(ty: Type) -> Self {
        concrete(ty)
    }
}

impl fmt::Display for TypeDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Concrete(info) => fmt::Display::fmt(&info.ty, f),
            Self::Map(info) => write!(f, "Map<{}, {}>", info.key, info.value),
            Self::Array(info) => write!(f, "Array<{}>", info.element),
            Self::Set(info) => write!(f, "Set<{}>", info.element),
        }
    }
}

// -----------------------------------------------------------------------------
// Builders

/// Builds a [`TypeDescriptor::Concrete`].
#[inline]
pub fn concrete(ty: Type) -> TypeDescriptor {
    TypeDescriptor::Concrete(ConcreteDescriptor { ty })
}

/// Builds a [`TypeDescriptor::Map`].
///
/// No validation happens here, hints are resolved by the caller.
pub fn map_of(
    key: impl Into<TypeDescriptor>,
    value: impl Into<TypeDescriptor>,
    options: MapOptions,
) -> TypeDescriptor {
    TypeDescriptor::Map(MapDescriptor {
        key: Box::new(key.into()),
        value: Box::new(value.into()),
        shape: options.shape,
    })
}

/// Builds a [`TypeDescriptor::Array`].
pub fn array_of(element: impl Into<TypeDescriptor>) -> TypeDescriptor {
    TypeDescriptor::Array(ArrayDescriptor {
        element: Box::new(element.into()),
    })
}

/// Builds a [`TypeDescriptor::Set`].
pub fn set_of(element: impl Into<TypeDescriptor>) -> TypeDescriptor {
    TypeDescriptor::Set(SetDescriptor {
        element: Box::new(element.into()),
    })
}

#[cfg(test)]
mod tests {
    use alloc::string::{String, ToString};

    use super::{MapOptions, MapShape, TypeKind};
    use super::{array_of, concrete, map_of, set_of};
    use crate::info::Type;

    #[test]
    fn map_keeps_shape() {
        let options = MapOptions {
            shape: Some(MapShape::Object),
        };
        let descriptor = map_of(Type::of::<String>(), Type::of::<u8>(), options);
        let map = descriptor.as_map().unwrap();
        assert_eq!(map.shape(), Some(MapShape::Object));
        assert_eq!(map.key(), &concrete(Type::of::<String>()));
        assert_eq!(map.value(), &concrete(Type::of::<u8>()));

        let descriptor = map_of(Type::of::<String>(), Type::of::<u8>(), MapOptions::default());
        assert_eq!(descriptor.as_map().unwrap().shape(), None);
    }

    #[test]
    fn nested() {
        let inner = map_of(Type::of::<u32>(), Type::of::<String>(), MapOptions::default());
        let outer = map_of(Type::of::<String>(), inner.clone(), MapOptions::default());

        assert_eq!(outer.depth(), 2);
        assert_eq!(outer.as_map().unwrap().value(), &inner);
        assert_eq!(outer.to_string(), "Map<String, Map<u32, String>>");

        let list = array_of(set_of(Type::of::<i64>()));
        assert_eq!(list.depth(), 2);
        assert_eq!(list.to_string(), "Array<Set<i64>>");
    }

    #[test]
    fn casts() {
        let descriptor = set_of(Type::of::<u32>());
        assert!(descriptor.as_set().is_ok());

        let err = descriptor.as_map().unwrap_err();
        assert_eq!(err.expected, TypeKind::Map);
        assert_eq!(err.received, TypeKind::Set);
        assert_eq!(
            err.to_string(),
            "descriptor kind mismatch: expected Map, received Set"
        );
    }

    #[test]
    fn shape_serde() {
        let json = serde_json::to_value(MapShape::Object).unwrap();
        assert_eq!(json, serde_json::json!("object"));

        let shape: MapShape = serde_json::from_value(serde_json::json!("array")).unwrap();
        assert_eq!(shape, MapShape::Array);
    }
}
