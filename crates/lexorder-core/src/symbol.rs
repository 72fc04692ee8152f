//! The `Symbol` marker trait.

use std::fmt::Debug;
use std::hash::Hash;

/// Marker trait for atomic alphabet elements.
///
/// A symbol is the unit the unknown order ranges over: a single character
/// in the reference domain, but any cheap value type with value identity
/// works. `Ord` is required so that tie-breaks among unconstrained symbols
/// can be made deterministic without tracking extra state.
///
/// Blanket-implemented for every type meeting the bounds; there is nothing
/// to implement by hand.
///
/// # Example
///
/// ```
/// use lexorder_core::Symbol;
///
/// fn takes_symbol<S: Symbol>(s: S) -> S { s }
///
/// takes_symbol('a');
/// takes_symbol(42u32);
/// ```
pub trait Symbol: Copy + Eq + Ord + Hash + Debug + 'static {}

impl<T: Copy + Eq + Ord + Hash + Debug + 'static> Symbol for T {}
