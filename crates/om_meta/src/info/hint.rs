use alloc::borrow::Cow;

use thiserror::Error;

use crate::info::{Type, TypeDescriptor};

// -----------------------------------------------------------------------------
// TypeHint

/// A member type as supplied by a class author.
///
/// Only `Type` and `Descriptor` hints are [typelike](is_typelike).
/// `Unresolved` stands for a reference that could not be resolved when the
/// class was defined, e.g. a forward reference to a type that is not loaded
/// yet. Registering with such a hint leaves the member unmapped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeHint {
    Type(Type),
    Descriptor(TypeDescriptor),
    Unresolved(Cow<'static, str>),
}

impl TypeHint {
    /// A `Type` hint for `T`.
    #[inline]
    pub fn of<T: ?Sized + 'static>() -> Self {
        Self::Type(Type::of::<T>())
    }

    /// An `Unresolved` hint, `name` is only used in diagnostics.
    #[inline]
    pub fn unresolved(name: impl Into<Cow<'static, str>>) -> Self {
        Self::Unresolved(name.into())
    }

    /// See [`is_typelike`].
    #[inline]
    pub fn is_typelike(&self) -> bool {
        is_typelike(self)
    }
}

/// Returns `true` if the hint is a type reference or a [`TypeDescriptor`].
///
/// # Examples
///
/// ```
/// use om_meta::info::{is_typelike, set_of, Type, TypeHint};
///
/// assert!(is_typelike(&TypeHint::of::<u32>()));
/// assert!(is_typelike(&set_of(Type::of::<u32>()).into()));
/// assert!(!is_typelike(&TypeHint::unresolved("Order")));
/// ```
pub fn is_typelike(hint: &TypeHint) -> bool {
    match hint {
        TypeHint::Type(_) | TypeHint::Descriptor(_) => true,
        TypeHint::Unresolved(_) => false,
    }
}

impl From<Type> for TypeHint {
    #[inline]
    fn from(ty: Type) -> Self {
        Self::Type(ty)
    }
}

impl From<TypeDescriptor> for TypeHint {
    #[inline]
    fn from(descriptor: TypeDescriptor) -> Self {
        Self::Descriptor(descriptor)
    }
}

// -----------------------------------------------------------------------------
// Conversion

/// Error returned when converting an `Unresolved` hint into a descriptor.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("type hint `{name}` is not resolved")]
pub struct UnresolvedHint {
    pub name: Cow<'static, str>,
}

impl TryFrom<TypeHint> for TypeDescriptor {
    type Error = UnresolvedHint;

    fn try_from(hint: TypeHint) -> Result<Self, Self::Error> {
        match hint {
            TypeHint::Type(ty) => Ok(ty.into()),
            TypeHint::Descriptor(descriptor) => Ok(descriptor),
            TypeHint::Unresolved(name) => Err(UnresolvedHint { name }),
        }
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::String;

    use super::{TypeHint, is_typelike};
    use crate::info::{MapOptions, Type, TypeDescriptor, concrete, map_of};

    #[test]
    fn typelike() {
        assert!(is_typelike(&TypeHint::of::<String>()));
        assert!(is_typelike(&TypeHint::from(map_of(
            Type::of::<u32>(),
            Type::of::<u32>(),
            MapOptions::default(),
        ))));
        assert!(!TypeHint::unresolved("Missing").is_typelike());
    }

    #[test]
    fn into_descriptor() {
        let descriptor = TypeDescriptor::try_from(TypeHint::of::<u32>()).unwrap();
        assert_eq!(descriptor, concrete(Type::of::<u32>()));

        let nested = map_of(Type::of::<u32>(), Type::of::<u32>(), MapOptions::default());
        let descriptor = TypeDescriptor::try_from(TypeHint::from(nested.clone())).unwrap();
        assert_eq!(descriptor, nested);

        let err = TypeDescriptor::try_from(TypeHint::unresolved("Order")).unwrap_err();
        assert_eq!(err.name, "Order");
    }
}
