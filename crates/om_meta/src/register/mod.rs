//! The registration entry points, run once per member while classes load.
//!
//! ## Menu
//!
//! - [`Registrar`]: Validates hints, builds descriptors and injects records.
//! - [`ClassRegistrar`]: Chained registrations for one class.
//! - [`auto_register!`](crate::auto_register): Collects registration functions statically.
//!
//! ## auto_register
//!
//! See [`Registrar::auto_register`].
//!
//! We use [`inventory`] crate to collect functions from every linked crate.
//! Not all platforms support it; there the call returns `false` and
//! registrations must be run by hand.
//!
//! [`inventory`]: https://docs.rs/inventory

// -----------------------------------------------------------------------------
// Modules

#[cfg(feature = "auto_register")]
mod auto_register;
mod class;
mod registrar;

// -----------------------------------------------------------------------------
// Exports

#[cfg(feature = "auto_register")]
pub use auto_register::AutoRegisterFunc;
pub use class::ClassRegistrar;
pub use registrar::Registrar;

#[cfg(not(feature = "auto_register"))]
#[macro_export]
macro_rules! auto_register {
    ($func:path) => {};
}
