// -----------------------------------------------------------------------------
// TriState

/// A policy value that tells "not specified" apart from an explicit value.
///
/// The consuming engine applies its own default only on `Unset`, so
/// `Explicit(false)` is never overridden by a default of `true`.
///
/// # Examples
///
/// ```
/// use om_meta::options::TriState;
///
/// let unset = TriState::<bool>::Unset;
/// let off = TriState::Explicit(false);
///
/// assert_ne!(unset, off);
/// assert_eq!(unset.resolve(true), true);
/// assert_eq!(off.resolve(true), false);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TriState<T> {
    Unset,
    Explicit(T),
}

impl<T> Default for TriState<T> {
    #[inline]
    fn default() -> Self {
        Self::Unset
    }
}

impl<T> TriState<T> {
    #[inline]
    pub const fn is_set(&self) -> bool {
        matches!(self, Self::Explicit(_))
    }

    #[inline]
    pub const fn is_unset(&self) -> bool {
        matches!(self, Self::Unset)
    }

    /// Returns the explicit value, if any.
    #[inline]
    pub const fn explicit(&self) -> Option<&T> {
        match self {
            Self::Explicit(value) => Some(value),
            Self::Unset => None,
        }
    }

    /// Keeps `self` if it is set, otherwise falls back to `fallback`.
    #[inline]
    pub fn or(self, fallback: Self) -> Self {
        match self {
            Self::Explicit(_) => self,
            Self::Unset => fallback,
        }
    }

    /// Returns the explicit value, or `default` when unset.
    #[inline]
    pub fn resolve(self, default: T) -> T {
        match self {
            Self::Explicit(value) => value,
            Self::Unset => default,
        }
    }
}

impl<T> From<Option<T>> for TriState<T> {
    #[inline]
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => Self::Explicit(value),
            None => Self::Unset,
        }
    }
}

impl<T> From<TriState<T>> for Option<T> {
    #[inline]
    fn from(value: TriState<T>) -> Self {
        match value {
            TriState::Explicit(value) => Some(value),
            TriState::Unset => None,
        }
    }
}

/// Omitted maps to `Unset`, any boolean to `Explicit`.
#[inline]
pub fn to_tri_state(value: Option<bool>) -> TriState<bool> {
    TriState::from(value)
}
