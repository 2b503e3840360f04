//! Type references, type hints and composable type descriptors.
//!
//! ## Menu
//!
//! - [`Type`]: A `TypeId` with its full type path, used as a type reference.
//!
//! - [`TypeHint`]: What a class author passes for a member type, one of following:
//!     - `Type`: A plain type reference, e.g. `TypeHint::of::<u32>()`.
//!     - `Descriptor`: An already built [`TypeDescriptor`], this is how nesting works.
//!     - `Unresolved`: A reference which could not be resolved at definition time.
//!
//! - [`is_typelike`]: Whether a hint can be used to build a descriptor.
//!
//! - [`TypeDescriptor`]: A enum describing a (possibly nested) member type:
//!     - [`ConcreteDescriptor`]: A single type.
//!     - [`MapDescriptor`]: Key and value descriptors, with an optional [`MapShape`].
//!     - [`ArrayDescriptor`]: An element descriptor.
//!     - [`SetDescriptor`]: An element descriptor.
//!
//! - Builders: [`concrete`], [`map_of`], [`array_of`] and [`set_of`].
//!
//! - [`TypeKind`]: The variant discriminator, also used by reflection oracles.
//!
//! # Examples
//!
//! ```
//! use om_meta::info::{map_of, set_of, MapOptions, Type, TypeKind};
//!
//! // Map<u32, Set<String>>
//! let descriptor = map_of(
//!     Type::of::<u32>(),
//!     set_of(Type::of::<String>()),
//!     MapOptions::default(),
//! );
//!
//! let map = descriptor.as_map().unwrap();
//! assert_eq!(map.value().kind(), TypeKind::Set);
//! assert_eq!(descriptor.to_string(), "Map<u32, Set<String>>");
//! ```

// -----------------------------------------------------------------------------
// Modules

mod descriptor;
mod hint;
mod ty;

// -----------------------------------------------------------------------------
// Exports

pub use descriptor::{ArrayDescriptor, ConcreteDescriptor, MapDescriptor, SetDescriptor};
pub use descriptor::{KindError, TypeDescriptor, TypeKind};
pub use descriptor::{MapOptions, MapShape};
pub use descriptor::{array_of, concrete, map_of, set_of};
pub use hint::{TypeHint, UnresolvedHint, is_typelike};
pub use ty::Type;
