use alloc::string::String;
use core::fmt;

use crate::hash::{HashMap, TypeIdMap};
use crate::info::{Type, TypeKind};
use crate::oracle::{Declared, ReflectionOracle};

/// A [`ReflectionOracle`] answering from recorded declarations.
#[derive(Default)]
pub struct DeclaredTypeTable {
    table: TypeIdMap<HashMap<String, TypeKind>>,
}

impl DeclaredTypeTable {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the declared kind of `owner.property_key`, replacing any
    /// earlier declaration.
    pub fn declare(&mut self, owner: Type, property_key: impl Into<String>, kind: TypeKind) {
        self.table
            .entry(owner.id())
            .or_default()
            .insert(property_key.into(), kind);
    }

    /// Records `property_key` of `Owner` as declared with type `Field`.
    #[inline]
    pub fn declare_field<Owner: 'static, Field: Declared>(
        &mut self,
        property_key: impl Into<String>,
    ) {
        self.declare(Type::of::<Owner>(), property_key, Field::KIND);
    }

    /// Number of recorded declarations.
    pub fn len(&self) -> usize {
        self.table.values().map(|members| members.len()).sum()
    }
}

impl ReflectionOracle for DeclaredTypeTable {
    fn declared_type(&self, owner: &Type, property_key: &str) -> Option<TypeKind> {
        self.table.get(&owner.id())?.get(property_key).copied()
    }
}

impl fmt::Debug for DeclaredTypeTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DeclaredTypeTable")
            .field("len", &self.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use alloc::collections::BTreeMap;

    use super::DeclaredTypeTable;
    use crate::info::{Type, TypeKind};
    use crate::oracle::ReflectionOracle;

    struct Ledger;
    struct Journal;

    #[test]
    fn declare_and_query() {
        let mut table = DeclaredTypeTable::new();
        table.declare_field::<Ledger, BTreeMap<u32, i64>>("balances");
        table.declare(Type::of::<Journal>(), "balances", TypeKind::Array);

        assert_eq!(table.len(), 2);
        assert_eq!(
            table.declared_type(&Type::of::<Ledger>(), "balances"),
            Some(TypeKind::Map)
        );
        assert_eq!(
            table.declared_type(&Type::of::<Journal>(), "balances"),
            Some(TypeKind::Array)
        );

        table.declare(Type::of::<Journal>(), "balances", TypeKind::Map);
        assert_eq!(table.len(), 2);
        assert_eq!(
            table.declared_type(&Type::of::<Journal>(), "balances"),
            Some(TypeKind::Map)
        );
        assert_eq!(table.declared_type(&Type::of::<u32>(), "balances"), None);
    }
}
