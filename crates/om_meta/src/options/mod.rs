//! Per-member options and their normalization.
//!
//! ## Menu
//!
//! - [`TriState`]: `Unset` or `Explicit(T)`, keeps "not specified" apart from "specified false".
//! - [`MemberOptions`]: The typed options record accepted by registration.
//!     - [`MemberOptions::from_json`]: Normalizes a loosely-typed JSON options object.
//!     - [`extract_passthrough`]: The opaque remainder forwarded to the engine.
//! - [`CustomSerializer`] / [`CustomDeserializer`]: Caller supplied conversion functions.
//! - Option layers, applied in order by [`MemberMetadata::resolve`]:
//!     1. explicit member options,
//!     2. [`ClassDefaults`],
//!     3. [`EngineDefaults`].
//!
//! [`MemberMetadata::resolve`]: crate::registry::MemberMetadata::resolve

// -----------------------------------------------------------------------------
// Modules

mod custom;
mod defaults;
mod member_options;
mod tri_state;

// -----------------------------------------------------------------------------
// Exports

pub use custom::{CustomDeserializer, CustomSerializer};
pub use defaults::{ClassDefaults, EngineDefaults, ResolvedPolicy};
pub use member_options::{MemberOptions, OptionBag, OptionsError, RECOGNIZED_KEYS};
pub use member_options::extract_passthrough;
pub use tri_state::{TriState, to_tri_state};
