//! Optional reflection capability, consulted as an advisory cross-check.
//!
//! A registrar either owns a [`ReflectionOracle`] or it does not; that choice is
//! made once when the registrar is built and absence is a normal configuration.
//!
//! [`DeclaredTypeTable`] is the provided oracle: class authors (or generated
//! code) record the declared kind of each property, usually via the
//! [`Declared`] trait which knows the std collections.
//!
//! # Examples
//!
//! ```
//! use std::collections::{BTreeMap, HashSet};
//! use om_meta::info::{Type, TypeKind};
//! use om_meta::oracle::{DeclaredTypeTable, ReflectionOracle};
//!
//! struct Inventory {
//!     stock: BTreeMap<u32, u64>,
//!     tags: HashSet<String>,
//! }
//!
//! let mut table = DeclaredTypeTable::new();
//! table.declare_field::<Inventory, BTreeMap<u32, u64>>("stock");
//! table.declare_field::<Inventory, HashSet<String>>("tags");
//!
//! let owner = Type::of::<Inventory>();
//! assert_eq!(table.declared_type(&owner, "stock"), Some(TypeKind::Map));
//! assert_eq!(table.declared_type(&owner, "tags"), Some(TypeKind::Set));
//! assert_eq!(table.declared_type(&owner, "missing"), None);
//! ```

// -----------------------------------------------------------------------------
// Modules

mod declared;
mod table;

// -----------------------------------------------------------------------------
// Exports

pub use declared::Declared;
pub use table::DeclaredTypeTable;

use crate::info::{Type, TypeKind};

/// Reports the statically declared type of a property, if known.
///
/// Answers may be unreliable for erased or interface-typed properties,
/// which is why registration never fails on them.
pub trait ReflectionOracle: Send + Sync {
    fn declared_type(&self, owner: &Type, property_key: &str) -> Option<TypeKind>;
}
