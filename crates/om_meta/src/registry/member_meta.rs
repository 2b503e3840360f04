use alloc::string::String;

use crate::info::{Type, TypeDescriptor};
use crate::options::{ClassDefaults, EngineDefaults, ResolvedPolicy};
use crate::options::{CustomDeserializer, CustomSerializer, MemberOptions, OptionBag, TriState};
use crate::options::{extract_passthrough, to_tri_state};

// -----------------------------------------------------------------------------
// MemberMetadata

/// Finalized conversion metadata of one `(owner, property)` pair.
///
/// Records are built once per registration and owned by the
/// [`MetadataRegistry`](crate::registry::MetadataRegistry).
///
/// # Examples
///
/// ```
/// use om_meta::info::{map_of, MapOptions, Type};
/// use om_meta::options::{MemberOptions, TriState};
/// use om_meta::registry::MemberMetadata;
///
/// struct Stats;
///
/// let descriptor = map_of(Type::of::<u32>(), Type::of::<String>(), MapOptions::default());
/// let meta = MemberMetadata::new(Type::of::<Stats>(), "counts", descriptor, MemberOptions::new());
///
/// assert_eq!(meta.serialized_name(), "counts");
/// assert_eq!(meta.is_required(), TriState::Unset);
/// ```
#[derive(Debug, Clone)]
pub struct MemberMetadata {
    owner: Type,
    property_key: String,
    serialized_name: String,
    descriptor: TypeDescriptor,
    is_required: TriState<bool>,
    emit_default_value: TriState<bool>,
    serializer: Option<CustomSerializer>,
    deserializer: Option<CustomDeserializer>,
    passthrough: OptionBag,
}

impl MemberMetadata {
    /// Builds the record from resolved parts and the caller's options.
    ///
    /// - `serialized_name` is `options.name`, or the property key.
    /// - Omitted booleans stay `Unset`.
    /// - Custom functions are copied as they are.
    /// - `passthrough` is [`extract_passthrough`] of the options.
    ///
    /// `options.shape` is not read here, map descriptors already carry it.
    pub fn new(
        owner: Type,
        property_key: impl Into<String>,
        descriptor: TypeDescriptor,
        options: MemberOptions,
    ) -> Self {
        let property_key = property_key.into();
        let passthrough = extract_passthrough(&options);
        let MemberOptions {
            is_required,
            emit_default_value,
            name,
            serializer,
            deserializer,
            ..
        } = options;

        Self {
            owner,
            serialized_name: name.unwrap_or_else(|| property_key.clone()),
            property_key,
            descriptor,
            is_required: to_tri_state(is_required),
            emit_default_value: to_tri_state(emit_default_value),
            serializer,
            deserializer,
            passthrough,
        }
    }

    /// The class this member was registered on.
    #[inline]
    pub const fn owner(&self) -> &Type {
        &self.owner
    }

    #[inline]
    pub fn property_key(&self) -> &str {
        &self.property_key
    }

    /// Key used in the exchange format.
    #[inline]
    pub fn serialized_name(&self) -> &str {
        &self.serialized_name
    }

    #[inline]
    pub const fn descriptor(&self) -> &TypeDescriptor {
        &self.descriptor
    }

    #[inline]
    pub const fn is_required(&self) -> TriState<bool> {
        self.is_required
    }

    #[inline]
    pub const fn emit_default_value(&self) -> TriState<bool> {
        self.emit_default_value
    }

    #[inline]
    pub const fn serializer(&self) -> Option<&CustomSerializer> {
        self.serializer.as_ref()
    }

    #[inline]
    pub const fn deserializer(&self) -> Option<&CustomDeserializer> {
        self.deserializer.as_ref()
    }

    /// Options forwarded to engine-level policies.
    #[inline]
    pub const fn passthrough(&self) -> &OptionBag {
        &self.passthrough
    }

    /// Applies the option layers: explicit member value, then class
    /// default, then engine default.
    ///
    /// # Examples
    ///
    /// ```
    /// use om_meta::info::{map_of, MapOptions, MapShape, Type};
    /// use om_meta::options::{ClassDefaults, EngineDefaults, MemberOptions};
    /// use om_meta::registry::MemberMetadata;
    ///
    /// struct Stats;
    ///
    /// let descriptor = map_of(Type::of::<u32>(), Type::of::<u32>(), MapOptions::default());
    /// let options = MemberOptions::new().emit_default_value(false);
    /// let meta = MemberMetadata::new(Type::of::<Stats>(), "counts", descriptor, options);
    ///
    /// let class = ClassDefaults::default().required(true).emit_default_value(true);
    /// let policy = meta.resolve(&class, &EngineDefaults::default());
    ///
    /// assert!(policy.is_required);
    /// assert!(!policy.emit_default_value);
    /// assert_eq!(policy.map_shape, Some(MapShape::Array));
    /// ```
    pub fn resolve(&self, class: &ClassDefaults, engine: &EngineDefaults) -> ResolvedPolicy {
        ResolvedPolicy {
            is_required: self
                .is_required
                .or(class.is_required)
                .resolve(engine.is_required),
            emit_default_value: self
                .emit_default_value
                .or(class.emit_default_value)
                .resolve(engine.emit_default_value),
            map_shape: match self.descriptor.as_map() {
                Ok(map) => Some(map.shape().unwrap_or(engine.map_shape)),
                Err(_) => None,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::MemberMetadata;
    use crate::info::{MapOptions, MapShape, Type, array_of, map_of};
    use crate::options::{ClassDefaults, EngineDefaults, MemberOptions, TriState};

    struct Account;

    #[test]
    fn defaults() {
        let descriptor = map_of(Type::of::<u32>(), Type::of::<u32>(), MapOptions::default());
        let options = MemberOptions::new();
        let meta = MemberMetadata::new(Type::of::<Account>(), "limits", descriptor, options);

        assert!(meta.owner().is::<Account>());
        assert_eq!(meta.property_key(), "limits");
        assert_eq!(meta.serialized_name(), "limits");
        assert_eq!(meta.is_required(), TriState::Unset);
        assert_eq!(meta.emit_default_value(), TriState::Unset);
        assert!(meta.serializer().is_none());
        assert!(meta.deserializer().is_none());
        assert!(meta.passthrough().is_empty());
    }

    #[test]
    fn explicit_values() {
        let options = MemberOptions::new()
            .named("lim")
            .required(false)
            .emit_default_value(true)
            .with_extra("preserveNull", true)
            .with_serializer(|_| json!(null));
        let descriptor = array_of(Type::of::<u8>());
        let meta = MemberMetadata::new(Type::of::<Account>(), "limits", descriptor, options);

        assert_eq!(meta.serialized_name(), "lim");
        assert_eq!(meta.is_required(), TriState::Explicit(false));
        assert_eq!(meta.emit_default_value(), TriState::Explicit(true));
        assert!(meta.serializer().is_some());
        assert_eq!(meta.passthrough()["preserveNull"], json!(true));
    }

    #[test]
    fn resolve_layers() {
        let options = MemberOptions::new().required(false);
        let descriptor = map_of(
            Type::of::<u32>(),
            Type::of::<u32>(),
            MapOptions {
                shape: Some(MapShape::Object),
            },
        );
        let meta = MemberMetadata::new(Type::of::<Account>(), "limits", descriptor, options);

        let engine = EngineDefaults {
            is_required: true,
            emit_default_value: true,
            map_shape: MapShape::Array,
        };

        // explicit false beats both class and engine defaults
        let class = ClassDefaults::default().required(true);
        let policy = meta.resolve(&class, &engine);
        assert!(!policy.is_required);
        assert!(policy.emit_default_value);
        assert_eq!(policy.map_shape, Some(MapShape::Object));

        let class = ClassDefaults::default().emit_default_value(false);
        assert!(!meta.resolve(&class, &engine).emit_default_value);

        let plain = MemberMetadata::new(
            Type::of::<Account>(),
            "owner",
            Type::of::<u64>().into(),
            MemberOptions::new(),
        );
        let policy = plain.resolve(&ClassDefaults::default(), &engine);
        assert!(policy.is_required);
        assert_eq!(policy.map_shape, None);
    }
}
