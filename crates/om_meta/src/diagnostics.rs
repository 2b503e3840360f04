//! Non-fatal registration diagnostics and the sinks receiving them.
//!
//! Nothing reported here stops the host program:
//!
//! - [`Diagnostic::UnresolvableTypeHint`] aborts the registration of one
//!   member, which stays unmapped.
//! - [`Diagnostic::ReflectionMismatch`] is advisory, the member is still
//!   registered.

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;
use std::sync::{Mutex, PoisonError};

use thiserror::Error;

use crate::info::{Type, TypeKind};

// -----------------------------------------------------------------------------
// Diagnostic

/// Which hint of a registration could not be resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HintSide {
    /// Key type of a map member.
    Key,
    /// Value type of a map member.
    Value,
    /// Element type of an array or set member.
    Element,
    /// Type of a plain member.
    Member,
}

impl fmt::Display for HintSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Key => f.pad("map keys"),
            Self::Value => f.pad("map values"),
            Self::Element => f.pad("elements"),
            Self::Member => f.pad("the member"),
        }
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Diagnostic {
    #[error("`{owner}.{property}`: could not resolve type of {side} at runtime")]
    UnresolvableTypeHint {
        owner: Type,
        property: String,
        side: HintSide,
    },

    #[error(
        "`{owner}.{property}`: property does not appear to be declared as a {expected} \
         (declared as {declared}); check environment configuration"
    )]
    ReflectionMismatch {
        owner: Type,
        property: String,
        expected: TypeKind,
        declared: TypeKind,
    },
}

impl Diagnostic {
    /// Returns `true` if the member registration was aborted.
    pub const fn is_fatal_to_member(&self) -> bool {
        matches!(self, Self::UnresolvableTypeHint { .. })
    }

    /// The class owning the member.
    pub const fn owner(&self) -> &Type {
        match self {
            Self::UnresolvableTypeHint { owner, .. } | Self::ReflectionMismatch { owner, .. } => {
                owner
            }
        }
    }

    /// The property key of the member.
    pub fn property(&self) -> &str {
        match self {
            Self::UnresolvableTypeHint { property, .. }
            | Self::ReflectionMismatch { property, .. } => property,
        }
    }
}

// -----------------------------------------------------------------------------
// Sinks

/// Receives diagnostics, fire-and-forget.
pub trait DiagnosticSink {
    fn report(&self, diagnostic: &Diagnostic);
}

/// Forwards diagnostics to the `log` facade.
///
/// Aborted registrations are logged as errors, advisory ones as warnings.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogSink;

impl DiagnosticSink for LogSink {
    fn report(&self, diagnostic: &Diagnostic) {
        if diagnostic.is_fatal_to_member() {
            log::error!("{diagnostic}");
        } else {
            log::warn!("{diagnostic}");
        }
    }
}

/// Keeps every reported diagnostic.
#[derive(Debug, Default)]
pub struct CollectingSink {
    reports: Mutex<Vec<Diagnostic>>,
}

impl CollectingSink {
    #[inline]
    pub const fn new() -> Self {
        Self {
            reports: Mutex::new(Vec::new()),
        }
    }

    /// Takes all diagnostics reported so far.
    pub fn take(&self) -> Vec<Diagnostic> {
        let mut reports = self.reports.lock().unwrap_or_else(PoisonError::into_inner);
        core::mem::take(&mut *reports)
    }

    pub fn len(&self) -> usize {
        self.reports
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl DiagnosticSink for CollectingSink {
    fn report(&self, diagnostic: &Diagnostic) {
        self.reports
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(diagnostic.clone());
    }
}
