use alloc::string::String;
use alloc::sync::Arc;
use alloc::vec::Vec;
use core::any::TypeId;
use core::fmt;

use crate::hash::{HashMap, TypeIdMap};
use crate::info::Type;
use crate::options::{ClassDefaults, EngineDefaults, ResolvedPolicy};
use crate::registry::{MemberMetadata, SealedRegistry};

// -----------------------------------------------------------------------------
// ClassEntry

#[derive(Clone)]
struct ClassEntry {
    owner: Type,
    base: Option<TypeId>,
    defaults: Option<ClassDefaults>,
    // Declaration order, overwrites keep their slot.
    members: Vec<MemberMetadata>,
    index: HashMap<String, usize>,
}

impl ClassEntry {
    fn new(owner: Type) -> Self {
        Self {
            owner,
            base: None,
            defaults: None,
            members: Vec::new(),
            index: HashMap::default(),
        }
    }

    fn get(&self, property_key: &str) -> Option<&MemberMetadata> {
        self.index.get(property_key).map(|&slot| &self.members[slot])
    }
}

/// Walks from a class to its most distant base.
struct Lineage<'a> {
    classes: &'a TypeIdMap<ClassEntry>,
    next: Option<TypeId>,
}

impl<'a> Iterator for Lineage<'a> {
    type Item = &'a ClassEntry;

    fn next(&mut self) -> Option<Self::Item> {
        let entry = self.classes.get(&self.next?)?;
        self.next = entry.base;
        Some(entry)
    }
}

// -----------------------------------------------------------------------------
// MetadataRegistry

/// Per-class, per-property table of [`MemberMetadata`].
///
/// The registry is open for writes while classes are bootstrapped, then
/// [sealed](Self::seal) into a read-only [`SealedRegistry`] for concurrent use.
///
/// - Records are only added through [`inject`](Self::inject), the last
///   registration of an `(owner, property)` pair wins.
/// - Records are never removed.
/// - Lookups on a derived class fall back to its base classes. Base records
///   are not copied, so a base record registered or replaced later is
///   visible from every derived class that does not override it.
///
/// # Example
///
/// ```
/// use om_meta::info::{map_of, MapOptions, Type};
/// use om_meta::options::MemberOptions;
/// use om_meta::registry::{MemberMetadata, MetadataRegistry};
///
/// struct Base;
/// struct Derived;
///
/// let mut registry = MetadataRegistry::new();
/// registry.declare_base(Type::of::<Derived>(), Type::of::<Base>());
///
/// let descriptor = map_of(Type::of::<u32>(), Type::of::<String>(), MapOptions::default());
/// let options = MemberOptions::new();
/// registry.inject(MemberMetadata::new(Type::of::<Base>(), "names", descriptor, options));
///
/// let meta = registry.lookup_of::<Derived>("names").unwrap();
/// assert!(meta.owner().is::<Base>());
/// assert!(registry.lookup_own(Type::of::<Derived>().id(), "names").is_none());
/// ```
#[derive(Clone, Default)]
pub struct MetadataRegistry {
    classes: TypeIdMap<ClassEntry>,
    #[cfg(feature = "auto_register")]
    pub(crate) auto_registered: bool,
}

impl MetadataRegistry {
    /// Creates an empty registry.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    fn entry(&mut self, owner: Type) -> &mut ClassEntry {
        self.classes
            .entry(owner.id())
            .or_insert_with(|| ClassEntry::new(owner))
    }

    fn lineage(&self, owner: TypeId) -> Lineage<'_> {
        Lineage {
            classes: &self.classes,
            next: Some(owner),
        }
    }

    // -------------------------------------------------------------------------
    // Writes

    /// Stores `meta` at `(meta.owner(), meta.property_key())`.
    ///
    /// Returns the record it replaced, if any. Replacing is silent, it is how
    /// repeated registrations of one property compose.
    pub fn inject(&mut self, meta: MemberMetadata) -> Option<MemberMetadata> {
        let entry = self.entry(*meta.owner());
        match entry.index.get(meta.property_key()) {
            Some(&slot) => Some(core::mem::replace(&mut entry.members[slot], meta)),
            None => {
                entry
                    .index
                    .insert(String::from(meta.property_key()), entry.members.len());
                entry.members.push(meta);
                None
            }
        }
    }

    /// Records `base` as the base class of `derived`.
    ///
    /// A declaration that would make a class its own ancestor is ignored
    /// with a warning and returns `false`.
    pub fn declare_base(&mut self, derived: Type, base: Type) -> bool {
        if derived == base || self.lineage(base.id()).any(|e| e.owner == derived) {
            log::warn!("`{derived}` cannot extend `{base}`: inheritance cycle");
            return false;
        }
        self.entry(base);
        self.entry(derived).base = Some(base.id());
        true
    }

    /// Sets the class-level option layer of `owner`.
    pub fn set_class_defaults(&mut self, owner: Type, defaults: ClassDefaults) {
        self.entry(owner).defaults = Some(defaults);
    }

    /// Makes the registry read-only.
    #[inline]
    pub fn seal(self) -> SealedRegistry {
        SealedRegistry::new(Arc::new(self))
    }

    // -------------------------------------------------------------------------
    // Reads

    /// Returns the record of `property_key`, searching `owner` then its bases.
    ///
    /// `None` means the property is not mapped.
    pub fn lookup(&self, owner: TypeId, property_key: &str) -> Option<&MemberMetadata> {
        self.lineage(owner).find_map(|entry| entry.get(property_key))
    }

    /// See [`lookup`](Self::lookup).
    #[inline]
    pub fn lookup_of<C: ?Sized + 'static>(&self, property_key: &str) -> Option<&MemberMetadata> {
        self.lookup(TypeId::of::<C>(), property_key)
    }

    /// Returns the record registered on `owner` itself, ignoring bases.
    pub fn lookup_own(&self, owner: TypeId, property_key: &str) -> Option<&MemberMetadata> {
        self.classes.get(&owner)?.get(property_key)
    }

    /// Returns the effective members of `owner`: inherited ones first, in
    /// base declaration order, with overrides taking the inherited slot.
    pub fn members(&self, owner: TypeId) -> Vec<&MemberMetadata> {
        let chain: Vec<&ClassEntry> = self.lineage(owner).collect();

        let mut members: Vec<&MemberMetadata> = Vec::new();
        let mut slots: HashMap<&str, usize> = HashMap::default();
        for entry in chain.into_iter().rev() {
            for meta in &entry.members {
                match slots.get(meta.property_key()) {
                    Some(&slot) => members[slot] = meta,
                    None => {
                        slots.insert(meta.property_key(), members.len());
                        members.push(meta);
                    }
                }
            }
        }
        members
    }

    /// See [`members`](Self::members).
    #[inline]
    pub fn members_of<C: ?Sized + 'static>(&self) -> Vec<&MemberMetadata> {
        self.members(TypeId::of::<C>())
    }

    /// Class-level defaults of `owner`.
    ///
    /// Each field is taken from the nearest class in the lineage that sets it
    /// explicitly, so a derived class only shadows what it sets itself.
    pub fn class_defaults(&self, owner: TypeId) -> ClassDefaults {
        self.lineage(owner)
            .filter_map(|entry| entry.defaults)
            .fold(ClassDefaults::default(), |merged, base| ClassDefaults {
                is_required: merged.is_required.or(base.is_required),
                emit_default_value: merged.emit_default_value.or(base.emit_default_value),
            })
    }

    /// Looks up a member and applies all option layers to it.
    pub fn resolve_policy(
        &self,
        owner: TypeId,
        property_key: &str,
        engine: &EngineDefaults,
    ) -> Option<ResolvedPolicy> {
        let meta = self.lookup(owner, property_key)?;
        Some(meta.resolve(&self.class_defaults(owner), engine))
    }

    /// Returns the declared base of `owner`.
    pub fn base_of(&self, owner: TypeId) -> Option<Type> {
        let base = self.classes.get(&owner)?.base?;
        self.classes.get(&base).map(|entry| entry.owner)
    }

    /// Whether anything was recorded for `owner` itself.
    #[inline]
    pub fn contains_class(&self, owner: TypeId) -> bool {
        self.classes.contains_key(&owner)
    }

    /// Classes with at least one record or declaration.
    pub fn classes(&self) -> impl ExactSizeIterator<Item = &Type> {
        self.classes.values().map(|entry| &entry.owner)
    }

    /// Number of stored records, inherited lookups not counted.
    pub fn len(&self) -> usize {
        self.classes.values().map(|entry| entry.members.len()).sum()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl fmt::Debug for MetadataRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(self.classes.values().map(|entry| {
                let keys: Vec<&str> = entry
                    .members
                    .iter()
                    .map(MemberMetadata::property_key)
                    .collect();
                (entry.owner, keys)
            }))
            .finish()
    }
}
