use alloc::borrow::Cow;
use alloc::boxed::Box;
use alloc::collections::{BTreeMap, BTreeSet, VecDeque};
use alloc::rc::Rc;
use alloc::string::String;
use alloc::sync::Arc;
use alloc::vec::Vec;
use core::hash::BuildHasher;
use std::collections::{HashMap, HashSet};

use crate::info::TypeKind;

/// The container kind of a declared field type.
pub trait Declared {
    const KIND: TypeKind;
}

macro_rules! impl_declared {
    ($kind:ident: $($ty:ty),* $(,)?) => {
        $(
            impl Declared for $ty {
                const KIND: TypeKind = TypeKind::$kind;
            }
        )*
    };
}

impl_declared!(Concrete: (), bool, char, f32, f64, String, &'static str, Cow<'static, str>);
impl_declared!(Concrete: u8, u16, u32, u64, u128, usize);
impl_declared!(Concrete: i8, i16, i32, i64, i128, isize);

impl<K, V, S: BuildHasher> Declared for HashMap<K, V, S> {
    const KIND: TypeKind = TypeKind::Map;
}

impl<K, V, S: BuildHasher> Declared for hashbrown::HashMap<K, V, S> {
    const KIND: TypeKind = TypeKind::Map;
}

impl<K, V> Declared for BTreeMap<K, V> {
    const KIND: TypeKind = TypeKind::Map;
}

impl<T, S: BuildHasher> Declared for HashSet<T, S> {
    const KIND: TypeKind = TypeKind::Set;
}

impl<T, S: BuildHasher> Declared for hashbrown::HashSet<T, S> {
    const KIND: TypeKind = TypeKind::Set;
}

impl<T> Declared for BTreeSet<T> {
    const KIND: TypeKind = TypeKind::Set;
}

impl<T> Declared for Vec<T> {
    const KIND: TypeKind = TypeKind::Array;
}

impl<T> Declared for VecDeque<T> {
    const KIND: TypeKind = TypeKind::Array;
}

impl<T> Declared for Box<[T]> {
    const KIND: TypeKind = TypeKind::Array;
}

impl<T, const N: usize> Declared for [T; N] {
    const KIND: TypeKind = TypeKind::Array;
}

// Wrappers report the kind of what they hold.

impl<T: Declared> Declared for Option<T> {
    const KIND: TypeKind = T::KIND;
}

impl<T: Declared> Declared for Rc<T> {
    const KIND: TypeKind = T::KIND;
}

impl<T: Declared> Declared for Arc<T> {
    const KIND: TypeKind = T::KIND;
}

#[cfg(test)]
mod tests {
    use alloc::collections::{BTreeMap, VecDeque};
    use alloc::string::String;
    use alloc::sync::Arc;
    use alloc::vec::Vec;
    use std::collections::{HashMap, HashSet};

    use super::Declared;
    use crate::info::TypeKind;

    fn kind<T: Declared>() -> TypeKind {
        T::KIND
    }

    #[test]
    fn collections() {
        assert_eq!(kind::<HashMap<u32, String>>(), TypeKind::Map);
        assert_eq!(kind::<BTreeMap<String, Vec<u8>>>(), TypeKind::Map);
        assert_eq!(kind::<HashSet<u32>>(), TypeKind::Set);
        assert_eq!(kind::<VecDeque<u32>>(), TypeKind::Array);
        assert_eq!(kind::<[u8; 4]>(), TypeKind::Array);
        assert_eq!(kind::<String>(), TypeKind::Concrete);
        assert_eq!(kind::<Option<HashMap<u32, u32>>>(), TypeKind::Map);
        assert_eq!(kind::<Arc<HashSet<u32>>>(), TypeKind::Set);
    }
}
