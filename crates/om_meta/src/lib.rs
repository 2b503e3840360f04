#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]

// -----------------------------------------------------------------------------
// Extern crates

extern crate alloc;

// -----------------------------------------------------------------------------
// Modules

mod hash;

pub mod diagnostics;
pub mod info;
pub mod options;
pub mod oracle;
pub mod register;
pub mod registry;

// -----------------------------------------------------------------------------
// Top-Level exports

#[doc(hidden)]
pub mod __macro_exports {
    #[cfg(feature = "auto_register")]
    pub use inventory;
}

pub use diagnostics::{Diagnostic, DiagnosticSink};
pub use info::{Type, TypeDescriptor, TypeHint};
pub use options::{MemberOptions, TriState};
pub use register::Registrar;
pub use registry::{MemberMetadata, MetadataRegistry, SealedRegistry};
