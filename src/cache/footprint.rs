//! Footprint Module
//!
//! Cost reporting for cached values.

use std::rc::Rc;
use std::sync::Arc;

// == Footprint ==
/// Reports how much of the cache budget a value occupies.
///
/// The default cost is one unit, which turns the space limit into a plain
/// entry count. Values with a meaningful size override `footprint_cost`.
///
/// ```
/// use spacebound_cache::cache::Footprint;
///
/// struct Tree {
///     nodes: u32,
/// }
///
/// impl Footprint for Tree {
///     fn footprint_cost(&self) -> u32 {
///         self.nodes
///     }
/// }
///
/// assert_eq!(Tree { nodes: 7 }.footprint_cost(), 7);
/// assert_eq!("leaf".footprint_cost(), 1);
/// ```
pub trait Footprint {
    fn footprint_cost(&self) -> u32 {
        1
    }
}

// Shared handles cost what the shared value costs.
impl<T: Footprint + ?Sized> Footprint for Rc<T> {
    fn footprint_cost(&self) -> u32 {
        (**self).footprint_cost()
    }
}

impl<T: Footprint + ?Sized> Footprint for Arc<T> {
    fn footprint_cost(&self) -> u32 {
        (**self).footprint_cost()
    }
}

impl<T: Footprint + ?Sized> Footprint for Box<T> {
    fn footprint_cost(&self) -> u32 {
        (**self).footprint_cost()
    }
}

impl<T: Footprint + ?Sized> Footprint for &T {
    fn footprint_cost(&self) -> u32 {
        (**self).footprint_cost()
    }
}

macro_rules! unit_footprint {
    ($($ty:ty),* $(,)?) => {
        $(impl Footprint for $ty {})*
    };
}

unit_footprint!(
    (),
    bool,
    char,
    u8,
    u16,
    u32,
    u64,
    u128,
    usize,
    i8,
    i16,
    i32,
    i64,
    i128,
    isize,
    f32,
    f64,
    str,
    String,
);

impl<T> Footprint for Vec<T> {}

impl<T> Footprint for Option<T> {}

/// Converts a reported cost into budget units.
pub(crate) fn space_for<V: Footprint + ?Sized>(value: &V) -> i64 {
    i64::from(value.footprint_cost())
}
