mod open;

use uom::si::{f64::Ratio, ratio::ratio};

pub use open::UnitIntervalOpen;

/// Supplies 0 and 1 for types used with the unit-based constraints.
///
/// Implement this trait for your type `T` to use it with
/// `Constrained<T, UnitIntervalOpen>` or `Constrained<T, GreaterThanOne>`.
/// Implementations should ensure that `zero() < one()` under the type's
/// `PartialOrd`.
pub trait UnitBounds: PartialOrd {
    fn zero() -> Self;
    fn one() -> Self;
}

impl UnitBounds for f64 {
    fn zero() -> Self {
        0.0
    }
    fn one() -> Self {
        1.0
    }
}

impl UnitBounds for Ratio {
    fn zero() -> Self {
        Ratio::new::<ratio>(0.0)
    }
    fn one() -> Self {
        Ratio::new::<ratio>(1.0)
    }
}
