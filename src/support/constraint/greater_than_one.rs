use std::cmp::Ordering;

use super::{Constrained, Constraint, ConstraintError, UnitBounds};

/// Marker type enforcing that a value is strictly greater than one.
///
/// Compression ratios and ratios of specific heats both need this bound:
/// at one or below, the isentropic relations produce no work or grow
/// without limit.
///
/// Requires `T: UnitBounds`, which supplies the value of one.
///
/// # Examples
///
/// ```
/// use twine_cycles::support::constraint::{Constrained, GreaterThanOne};
///
/// let gamma = GreaterThanOne::new(1.4).unwrap();
/// assert_eq!(gamma.as_ref(), &1.4);
///
/// assert!(GreaterThanOne::new(1.0).is_err());
/// assert!(GreaterThanOne::new(0.5).is_err());
/// assert!(GreaterThanOne::new(f64::NAN).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct GreaterThanOne;

impl GreaterThanOne {
    /// Constructs `Constrained<T, GreaterThanOne>` if `value > 1`.
    ///
    /// # Errors
    ///
    /// - [`ConstraintError::BelowMinimum`] if less than or equal to one.
    /// - [`ConstraintError::NotANumber`] if comparison is undefined (e.g., NaN).
    pub fn new<T: UnitBounds>(value: T) -> Result<Constrained<T, GreaterThanOne>, ConstraintError> {
        Constrained::<T, GreaterThanOne>::new(value)
    }
}

impl<T: UnitBounds> Constraint<T> for GreaterThanOne {
    fn check(value: &T) -> Result<(), ConstraintError> {
        match value.partial_cmp(&T::one()) {
            Some(Ordering::Greater) => Ok(()),
            Some(Ordering::Less | Ordering::Equal) => Err(ConstraintError::BelowMinimum),
            None => Err(ConstraintError::NotANumber),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use uom::si::{f64::Ratio, ratio::ratio};

    #[test]
    fn compression_ratios() {
        assert!(GreaterThanOne::new(6.0).is_ok());
        assert!(GreaterThanOne::new(1.000_001).is_ok());
        assert_eq!(GreaterThanOne::new(1.0), Err(ConstraintError::BelowMinimum));
        assert_eq!(GreaterThanOne::new(-3.0), Err(ConstraintError::BelowMinimum));
    }

    #[test]
    fn nan_is_not_a_number() {
        assert_eq!(
            GreaterThanOne::new(f64::NAN),
            Err(ConstraintError::NotANumber)
        );
    }

    #[test]
    fn uom_ratio() {
        assert!(Constrained::<Ratio, GreaterThanOne>::new(Ratio::new::<ratio>(1.4)).is_ok());
        assert!(GreaterThanOne::new(Ratio::new::<ratio>(0.9)).is_err());
    }
}
