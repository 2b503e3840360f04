use alloc::string::String;
use core::any::TypeId;
use core::fmt;
use core::hash::{Hash, Hasher};

// -----------------------------------------------------------------------------
// Type

/// A type reference: the [`TypeId`] of a type and its full path.
///
/// Comparison and hashing only use the [`TypeId`], the path is informative.
///
/// # Examples
///
/// ```
/// use om_meta::info::Type;
/// use std::collections::BTreeMap;
///
/// let ty = Type::of::<BTreeMap<u32, String>>();
///
/// assert!(ty.is::<BTreeMap<u32, String>>());
/// assert_eq!(ty.ident(), "BTreeMap");
/// assert_eq!(ty.name(), "BTreeMap<u32, String>");
/// ```
#[derive(Clone, Copy)]
pub struct Type {
    id: TypeId,
    path: &'static str,
}

impl Type {
    /// Creates the reference of `T`.
    #[inline]
    pub fn of<T: ?Sized + 'static>() -> Self {
        Self {
            id: TypeId::of::<T>(),
            path: core::any::type_name::<T>(),
        }
    }

    /// Returns the [`TypeId`] of the type.
    #[inline(always)]
    pub const fn id(&self) -> TypeId {
        self.id
    }

    /// Check if the given type matches this one.
    #[inline(always)]
    pub fn is<T: ?Sized + 'static>(&self) -> bool {
        TypeId::of::<T>() == self.id
    }

    /// Full type path, e.g. `alloc::string::String`.
    #[inline(always)]
    pub const fn path(&self) -> &'static str {
        self.path
    }

    /// Type path without module prefixes, generics are kept, e.g.
    /// `HashMap<u32, String>`.
    pub fn name(&self) -> String {
        shorten_path(self.path)
    }

    /// Type name without generics and module path, e.g. `HashMap`.
    pub fn ident(&self) -> &'static str {
        let head = match self.path.find('<') {
            Some(end) => &self.path[..end],
            None => self.path,
        };
        match head.rfind("::") {
            Some(start) => &head[start + 2..],
            None => head,
        }
    }
}

/// Strip every `a::b::` prefix, including the ones inside generic arguments.
fn shorten_path(path: &str) -> String {
    let mut out = String::with_capacity(path.len());
    let mut segment_start = 0;
    let mut chars = path.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            ':' if chars.peek() == Some(&':') => {
                chars.next();
                out.truncate(segment_start);
            }
            '<' | '>' | ',' | ' ' | '(' | ')' | '[' | ']' | ';' | '&' | '*' => {
                out.push(c);
                segment_start = out.len();
            }
            _ => out.push(c),
        }
    }
    out
}

impl PartialEq for Type {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Type {}

impl Hash for Type {
    #[inline]
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Debug for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path)
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name())
    }
}

#[cfg(test)]
mod tests {
    use alloc::collections::BTreeMap;
    use alloc::string::String;
    use alloc::vec::Vec;

    use super::Type;

    struct Counter;

    #[test]
    fn names() {
        let ty = Type::of::<String>();
        assert_eq!(ty.path(), "alloc::string::String");
        assert_eq!(ty.name(), "String");
        assert_eq!(ty.ident(), "String");

        let ty = Type::of::<BTreeMap<u32, Vec<String>>>();
        assert_eq!(ty.name(), "BTreeMap<u32, Vec<String>>");
        assert_eq!(ty.ident(), "BTreeMap");

        let ty = Type::of::<Counter>();
        assert_eq!(ty.name(), "Counter");
        assert!(ty.path().ends_with("::Counter"));

        let ty = Type::of::<[u8]>();
        assert_eq!(ty.name(), "[u8]");
    }

    #[test]
    fn identity() {
        assert_eq!(Type::of::<u32>(), Type::of::<u32>());
        assert_ne!(Type::of::<u32>(), Type::of::<i32>());
        assert!(Type::of::<Counter>().is::<Counter>());
        assert!(!Type::of::<Counter>().is::<u32>());
    }
}
