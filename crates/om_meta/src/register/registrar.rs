use alloc::sync::Arc;

use crate::diagnostics::{Diagnostic, DiagnosticSink, HintSide, LogSink};
use crate::info::{MapOptions, Type, TypeDescriptor, TypeHint, TypeKind};
use crate::info::{array_of, is_typelike, map_of, set_of};
use crate::options::MemberOptions;
use crate::oracle::ReflectionOracle;
use crate::register::ClassRegistrar;
use crate::registry::{MemberMetadata, MetadataRegistry};

static LOG_SINK: LogSink = LogSink;

// -----------------------------------------------------------------------------
// Registrar

/// Registers members into a [`MetadataRegistry`] during bootstrap.
///
/// Each registration validates the type hints, builds the descriptor,
/// cross-checks it with the optional [`ReflectionOracle`], merges the options
/// and injects the record. A registration either commits one record or
/// reports a [`Diagnostic`] and leaves the registry untouched; it never panics.
///
/// Whether reflection is available is fixed when the registrar is built.
///
/// # Example
///
/// ```
/// use om_meta::info::{Type, TypeHint, TypeKind};
/// use om_meta::options::{MemberOptions, TriState};
/// use om_meta::register::Registrar;
/// use om_meta::registry::MetadataRegistry;
///
/// struct C;
///
/// let mut registry = MetadataRegistry::new();
/// let mut registrar = Registrar::new(&mut registry);
///
/// registrar
///     .register_map_member(
///         Type::of::<C>(),
///         "counts",
///         TypeHint::of::<f64>(),
///         TypeHint::of::<String>(),
///         MemberOptions::new(),
///     )
///     .unwrap();
///
/// let meta = registry.lookup_of::<C>("counts").unwrap();
/// assert_eq!(meta.serialized_name(), "counts");
/// assert_eq!(meta.descriptor().kind(), TypeKind::Map);
/// assert_eq!(meta.is_required(), TriState::Unset);
/// ```
pub struct Registrar<'a> {
    registry: &'a mut MetadataRegistry,
    oracle: Option<Arc<dyn ReflectionOracle>>,
    sink: &'a dyn DiagnosticSink,
}

impl<'a> Registrar<'a> {
    /// A registrar without reflection, reporting to the `log` facade.
    pub fn new(registry: &'a mut MetadataRegistry) -> Self {
        Self {
            registry,
            oracle: None,
            sink: &LOG_SINK,
        }
    }

    /// Enables the reflection cross-check.
    pub fn with_oracle(mut self, oracle: Arc<dyn ReflectionOracle>) -> Self {
        self.oracle = Some(oracle);
        self
    }

    /// Sets the outcome of capability detection, `None` disables the cross-check.
    pub fn with_optional_oracle(mut self, oracle: Option<Arc<dyn ReflectionOracle>>) -> Self {
        self.oracle = oracle;
        self
    }

    /// Reports diagnostics to `sink` instead of the `log` facade.
    pub fn with_sink(mut self, sink: &'a dyn DiagnosticSink) -> Self {
        self.sink = sink;
        self
    }

    #[inline]
    pub fn reflection_supported(&self) -> bool {
        self.oracle.is_some()
    }

    #[inline]
    pub fn registry(&self) -> &MetadataRegistry {
        self.registry
    }

    #[inline]
    pub fn registry_mut(&mut self) -> &mut MetadataRegistry {
        self.registry
    }

    /// Starts a [`ClassRegistrar`] for `C`.
    #[inline]
    pub fn class<C: ?Sized + 'static>(&mut self) -> ClassRegistrar<'_, 'a, C> {
        ClassRegistrar::new(self)
    }

    /// Runs every function submitted through [`auto_register!`](crate::auto_register).
    ///
    /// Returns `true` if static collection works on this platform. Repeated
    /// calls on the same registry run nothing and keep returning `true`.
    ///
    /// Without the `auto_register` feature this does nothing and returns `false`.
    #[cfg_attr(not(feature = "auto_register"), inline(always))]
    pub fn auto_register(&mut self) -> bool {
        #[cfg(feature = "auto_register")]
        {
            super::auto_register::register_all(self)
        }
        #[cfg(not(feature = "auto_register"))]
        {
            false
        }
    }

    // -------------------------------------------------------------------------
    // Entry points

    /// Registers `owner.property_key` as a map member.
    ///
    /// - An unresolved key or value hint aborts the registration, the
    ///   property stays unmapped.
    /// - A reflection mismatch is reported but the member is registered.
    /// - A prior record of the same property is replaced.
    ///
    /// The returned error was already reported to the sink.
    pub fn register_map_member(
        &mut self,
        owner: Type,
        property_key: &str,
        key_hint: impl Into<TypeHint>,
        value_hint: impl Into<TypeHint>,
        options: MemberOptions,
    ) -> Result<(), Diagnostic> {
        let key = self.resolve_hint(owner, property_key, key_hint.into(), HintSide::Key)?;
        let value = self.resolve_hint(owner, property_key, value_hint.into(), HintSide::Value)?;
        let descriptor = map_of(key, value, MapOptions { shape: options.shape });
        self.commit(owner, property_key, descriptor, options);
        Ok(())
    }

    /// Registers `owner.property_key` as an array member.
    pub fn register_array_member(
        &mut self,
        owner: Type,
        property_key: &str,
        element_hint: impl Into<TypeHint>,
        options: MemberOptions,
    ) -> Result<(), Diagnostic> {
        let element =
            self.resolve_hint(owner, property_key, element_hint.into(), HintSide::Element)?;
        self.commit(owner, property_key, array_of(element), options);
        Ok(())
    }

    /// Registers `owner.property_key` as a set member.
    pub fn register_set_member(
        &mut self,
        owner: Type,
        property_key: &str,
        element_hint: impl Into<TypeHint>,
        options: MemberOptions,
    ) -> Result<(), Diagnostic> {
        let element =
            self.resolve_hint(owner, property_key, element_hint.into(), HintSide::Element)?;
        self.commit(owner, property_key, set_of(element), options);
        Ok(())
    }

    /// Registers `owner.property_key` with a plain type or a prebuilt descriptor.
    ///
    /// The reflection cross-check expects the kind of the given descriptor.
    pub fn register_member(
        &mut self,
        owner: Type,
        property_key: &str,
        hint: impl Into<TypeHint>,
        options: MemberOptions,
    ) -> Result<(), Diagnostic> {
        let descriptor = self.resolve_hint(owner, property_key, hint.into(), HintSide::Member)?;
        self.commit(owner, property_key, descriptor, options);
        Ok(())
    }

    // -------------------------------------------------------------------------
    // Pipeline

    fn report(&self, diagnostic: &Diagnostic) {
        self.sink.report(diagnostic);
    }

    fn resolve_hint(
        &self,
        owner: Type,
        property_key: &str,
        hint: TypeHint,
        side: HintSide,
    ) -> Result<TypeDescriptor, Diagnostic> {
        if is_typelike(&hint)
            && let Ok(descriptor) = TypeDescriptor::try_from(hint)
        {
            return Ok(descriptor);
        }

        let diagnostic = Diagnostic::UnresolvableTypeHint {
            owner,
            property: property_key.into(),
            side,
        };
        self.report(&diagnostic);
        Err(diagnostic)
    }

    /// Advisory only, a mismatch never stops the registration.
    fn cross_check(&self, owner: Type, property_key: &str, expected: TypeKind) {
        let Some(oracle) = &self.oracle else {
            return;
        };
        if let Some(declared) = oracle.declared_type(&owner, property_key)
            && declared != expected
        {
            self.report(&Diagnostic::ReflectionMismatch {
                owner,
                property: property_key.into(),
                expected,
                declared,
            });
        }
    }

    fn commit(
        &mut self,
        owner: Type,
        property_key: &str,
        descriptor: TypeDescriptor,
        options: MemberOptions,
    ) {
        self.cross_check(owner, property_key, descriptor.kind());

        #[cfg(all(debug_assertions, feature = "debug"))]
        log::trace!("`{owner}.{property_key}`: {descriptor}");

        let meta = MemberMetadata::new(owner, property_key, descriptor, options);
        if self.registry.inject(meta).is_some() {
            log::debug!("`{owner}.{property_key}`: replaced an earlier registration");
        } else {
            log::debug!("`{owner}.{property_key}`: registered");
        }
    }
}
