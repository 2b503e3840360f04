#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(test)]
extern crate alloc;

pub use om_meta as meta;

pub use om_meta::auto_register;

/// The types used by most registrations.
pub mod prelude {
    pub use om_meta::diagnostics::{Diagnostic, DiagnosticSink};
    pub use om_meta::info::{MapOptions, MapShape, Type, TypeDescriptor, TypeHint, TypeKind};
    pub use om_meta::info::{array_of, map_of, set_of};
    pub use om_meta::options::{ClassDefaults, EngineDefaults, MemberOptions, TriState};
    pub use om_meta::register::Registrar;
    pub use om_meta::registry::{MemberMetadata, MetadataRegistry, SealedRegistry};
}

#[cfg(test)]
mod tests {
    use alloc::collections::{BTreeMap, BTreeSet};
    use alloc::string::String;
    use alloc::sync::Arc;

    use serde_json::json;

    use crate::meta::diagnostics::CollectingSink;
    use crate::meta::oracle::DeclaredTypeTable;
    use crate::meta::registry::MetadataRegistryArc;
    use crate::prelude::*;

    struct Warehouse;
    struct ColdStorage;

    fn oracle() -> Arc<DeclaredTypeTable> {
        let mut table = DeclaredTypeTable::new();
        table.declare_field::<Warehouse, BTreeMap<String, u32>>("stock");
        table.declare_field::<Warehouse, BTreeSet<String>>("zones");
        Arc::new(table)
    }

    #[test]
    fn bootstrap_from_json_options() {
        let registry = MetadataRegistryArc::default();
        let sink = CollectingSink::new();

        {
            let mut guard = registry.write();
            let mut registrar = Registrar::new(&mut guard)
                .with_oracle(oracle())
                .with_sink(&sink);

            let options = MemberOptions::from_json(&json!({
                "shape": "object",
                "emitDefaultValue": false,
                "preserveNull": true,
            }))
            .unwrap();
            registrar
                .register_map_member(
                    Type::of::<Warehouse>(),
                    "stock",
                    TypeHint::of::<String>(),
                    TypeHint::of::<u32>(),
                    options,
                )
                .unwrap();

            // declared as a set, still registered
            registrar
                .register_map_member(
                    Type::of::<Warehouse>(),
                    "zones",
                    TypeHint::of::<String>(),
                    TypeHint::of::<bool>(),
                    MemberOptions::new(),
                )
                .unwrap();

            registrar
                .class::<ColdStorage>()
                .extends::<Warehouse>()
                .defaults(ClassDefaults::default().required(true))
                .array_member("sensors", TypeHint::unresolved("Sensor"), MemberOptions::new());
        }

        let reported = sink.take();
        assert_eq!(reported.len(), 2);
        assert!(matches!(
            reported[0],
            Diagnostic::ReflectionMismatch {
                declared: TypeKind::Set,
                ..
            }
        ));
        assert!(reported[1].is_fatal_to_member());

        let sealed = registry.seal().unwrap();
        assert_eq!(sealed.len(), 2);
        assert!(sealed.lookup_of::<ColdStorage>("sensors").is_none());

        let stock = sealed.lookup_of::<ColdStorage>("stock").unwrap();
        assert!(stock.owner().is::<Warehouse>());
        assert_eq!(stock.emit_default_value(), TriState::Explicit(false));
        assert_eq!(stock.passthrough()["preserveNull"], json!(true));

        let policy = sealed
            .resolve_policy(
                Type::of::<ColdStorage>().id(),
                "stock",
                &EngineDefaults::default(),
            )
            .unwrap();
        assert!(policy.is_required);
        assert!(!policy.emit_default_value);
        assert_eq!(policy.map_shape, Some(MapShape::Object));

        let policy = sealed
            .resolve_policy(Type::of::<Warehouse>().id(), "zones", &EngineDefaults::default())
            .unwrap();
        assert!(!policy.is_required);
        assert_eq!(policy.map_shape, Some(MapShape::Array));
    }

    #[test]
    fn descriptor_display() {
        let descriptor = map_of(
            Type::of::<String>(),
            array_of(set_of(Type::of::<u8>())),
            MapOptions::default(),
        );
        assert_eq!(descriptor.to_string(), "Map<String, Array<Set<u8>>>");
    }
}
