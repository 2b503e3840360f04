use crate::register::Registrar;

/// A registration function collected by [`auto_register!`](crate::auto_register).
///
/// Used by [`Registrar::auto_register`], not intended to be built directly.
pub struct AutoRegisterFunc(pub fn(&mut Registrar<'_>));

inventory::collect!(AutoRegisterFunc);

// Runs with the other submissions, so the flag is only set when
// static collection works on this platform.
fn mark_available(registrar: &mut Registrar<'_>) {
    registrar.registry_mut().auto_registered = true;
}

inventory::submit! { AutoRegisterFunc(mark_available) }

/// Runs every collected function once per registry.
pub(crate) fn register_all(registrar: &mut Registrar<'_>) -> bool {
    // Reduce the cost of repeated calls.
    if registrar.registry().auto_registered {
        return true;
    }
    for func in inventory::iter::<AutoRegisterFunc> {
        (func.0)(registrar);
    }
    registrar.registry().auto_registered
}

/// Submits a `fn(&mut Registrar<'_>)` to [`Registrar::auto_register`].
///
/// Expands to nothing without the `auto_register` feature.
///
/// # Example
///
/// ```no_run
/// use om_meta::info::TypeHint;
/// use om_meta::options::MemberOptions;
/// use om_meta::register::Registrar;
/// use om_meta::registry::MetadataRegistry;
///
/// struct Inventory;
///
/// fn register_inventory(registrar: &mut Registrar<'_>) {
///     registrar.class::<Inventory>().map_member(
///         "stock",
///         TypeHint::of::<String>(),
///         TypeHint::of::<u32>(),
///         MemberOptions::new(),
///     );
/// }
///
/// om_meta::auto_register!(register_inventory);
///
/// let mut registry = MetadataRegistry::new();
/// assert!(Registrar::new(&mut registry).auto_register());
/// assert!(registry.lookup_of::<Inventory>("stock").is_some());
/// ```
#[macro_export]
macro_rules! auto_register {
    ($func:path) => {
        $crate::__macro_exports::inventory::submit! {
            $crate::register::AutoRegisterFunc($func)
        }
    };
}
