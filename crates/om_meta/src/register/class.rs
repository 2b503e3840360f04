use core::marker::PhantomData;

use crate::info::{Type, TypeHint};
use crate::options::{ClassDefaults, MemberOptions};
use crate::register::Registrar;

/// Registers the members of one class `C`.
///
/// Failed registrations were already reported to the registrar's sink and
/// are skipped, so a chain always runs to the end.
///
/// # Example
///
/// ```
/// use om_meta::info::TypeHint;
/// use om_meta::options::{ClassDefaults, MemberOptions};
/// use om_meta::register::Registrar;
/// use om_meta::registry::MetadataRegistry;
///
/// struct Entity;
/// struct User;
///
/// let mut registry = MetadataRegistry::new();
/// let mut registrar = Registrar::new(&mut registry);
///
/// registrar
///     .class::<Entity>()
///     .member("id", TypeHint::of::<u64>(), MemberOptions::new().required(true));
/// registrar
///     .class::<User>()
///     .extends::<Entity>()
///     .defaults(ClassDefaults::default().emit_default_value(false))
///     .map_member("scores", TypeHint::of::<String>(), TypeHint::of::<u32>(), MemberOptions::new())
///     .set_member("roles", TypeHint::of::<String>(), MemberOptions::new());
///
/// assert!(registry.lookup_of::<User>("id").is_some());
/// assert_eq!(registry.members_of::<User>().len(), 3);
/// ```
pub struct ClassRegistrar<'r, 'a, C: ?Sized> {
    registrar: &'r mut Registrar<'a>,
    _marker: PhantomData<fn(&C)>,
}

impl<'r, 'a, C: ?Sized + 'static> ClassRegistrar<'r, 'a, C> {
    #[inline]
    pub(crate) fn new(registrar: &'r mut Registrar<'a>) -> Self {
        Self {
            registrar,
            _marker: PhantomData,
        }
    }

    #[inline]
    pub fn owner(&self) -> Type {
        Type::of::<C>()
    }

    /// Declares `B` as the base class of `C`.
    pub fn extends<B: ?Sized + 'static>(&mut self) -> &mut Self {
        self.registrar
            .registry_mut()
            .declare_base(Type::of::<C>(), Type::of::<B>());
        self
    }

    /// Sets the class-level option layer.
    pub fn defaults(&mut self, defaults: ClassDefaults) -> &mut Self {
        self.registrar
            .registry_mut()
            .set_class_defaults(Type::of::<C>(), defaults);
        self
    }

    /// See [`Registrar::register_map_member`].
    pub fn map_member(
        &mut self,
        property_key: &str,
        key_hint: impl Into<TypeHint>,
        value_hint: impl Into<TypeHint>,
        options: MemberOptions,
    ) -> &mut Self {
        let _ = self.registrar.register_map_member(
            Type::of::<C>(),
            property_key,
            key_hint,
            value_hint,
            options,
        );
        self
    }

    /// See [`Registrar::register_array_member`].
    pub fn array_member(
        &mut self,
        property_key: &str,
        element_hint: impl Into<TypeHint>,
        options: MemberOptions,
    ) -> &mut Self {
        let _ = self.registrar.register_array_member(
            Type::of::<C>(),
            property_key,
            element_hint,
            options,
        );
        self
    }

    /// See [`Registrar::register_set_member`].
    pub fn set_member(
        &mut self,
        property_key: &str,
        element_hint: impl Into<TypeHint>,
        options: MemberOptions,
    ) -> &mut Self {
        let _ = self.registrar.register_set_member(
            Type::of::<C>(),
            property_key,
            element_hint,
            options,
        );
        self
    }

    /// See [`Registrar::register_member`].
    pub fn member(
        &mut self,
        property_key: &str,
        hint: impl Into<TypeHint>,
        options: MemberOptions,
    ) -> &mut Self {
        let _ = self
            .registrar
            .register_member(Type::of::<C>(), property_key, hint, options);
        self
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::String;

    use crate::diagnostics::CollectingSink;
    use crate::info::{Type, TypeHint, TypeKind};
    use crate::options::{ClassDefaults, EngineDefaults, MemberOptions};
    use crate::register::Registrar;
    use crate::registry::MetadataRegistry;

    struct Base;
    struct Derived;

    #[test]
    fn chain_skips_failures() {
        let mut registry = MetadataRegistry::new();
        let sink = CollectingSink::new();
        let mut registrar = Registrar::new(&mut registry).with_sink(&sink);

        let mut class = registrar.class::<Derived>();
        assert_eq!(class.owner(), Type::of::<Derived>());
        class
            .map_member(
                "broken",
                TypeHint::unresolved("Missing"),
                TypeHint::of::<u8>(),
                MemberOptions::new(),
            )
            .array_member("items", TypeHint::of::<String>(), MemberOptions::new());

        assert_eq!(sink.len(), 1);
        assert!(registry.lookup_of::<Derived>("broken").is_none());
        assert_eq!(
            registry.lookup_of::<Derived>("items").unwrap().descriptor().kind(),
            TypeKind::Array
        );
    }

    #[test]
    fn inherited_members_and_defaults() {
        let mut registry = MetadataRegistry::new();
        let mut registrar = Registrar::new(&mut registry);

        registrar
            .class::<Base>()
            .defaults(ClassDefaults::default().required(true))
            .member("id", TypeHint::of::<u64>(), MemberOptions::new())
            .map_member(
                "labels",
                TypeHint::of::<String>(),
                TypeHint::of::<String>(),
                MemberOptions::new(),
            );
        registrar
            .class::<Derived>()
            .extends::<Base>()
            .map_member(
                "labels",
                TypeHint::of::<String>(),
                TypeHint::of::<String>(),
                MemberOptions::new().named("tags"),
            );

        assert_eq!(registry.base_of(Type::of::<Derived>().id()), Some(Type::of::<Base>()));
        assert_eq!(
            registry.lookup_of::<Derived>("labels").unwrap().serialized_name(),
            "tags"
        );
        assert_eq!(
            registry.lookup_of::<Base>("labels").unwrap().serialized_name(),
            "labels"
        );

        let policy = registry
            .resolve_policy(Type::of::<Derived>().id(), "id", &EngineDefaults::default())
            .unwrap();
        assert!(policy.is_required);
    }
}
