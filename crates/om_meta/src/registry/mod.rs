//! Storage of finalized member metadata, consulted by serialization engines.
//!
//! ## Menu
//!
//! - [`MemberMetadata`]: The record of one `(owner, property)` pair.
//! - [`MetadataRegistry`]: Per-class member tables with inherited lookup, open for writes.
//! - [`SealedRegistry`]: The read-only registry, cheap to clone and share between threads.
//! - [`MetadataRegistryArc`]: `Arc<RwLock<MetadataRegistry>>` for multi-threaded bootstrap.
//!
//! ## Lifecycle
//!
//! 1. Create a [`MetadataRegistry`] at startup.
//! 2. Run every registration through a [`Registrar`](crate::register::Registrar).
//! 3. [`seal`](MetadataRegistry::seal) it and pass the [`SealedRegistry`] to consumers.

// -----------------------------------------------------------------------------
// Modules

mod member_meta;
mod metadata_registry;
mod sealed;

// -----------------------------------------------------------------------------
// Exports

pub use member_meta::MemberMetadata;
pub use metadata_registry::MetadataRegistry;
pub use sealed::{MetadataRegistryArc, SealedRegistry};
