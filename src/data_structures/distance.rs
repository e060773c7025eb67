use std::fmt;

use crate::graph::Weight;

/// Accumulated path weight, or the unreachable sentinel.
///
/// The derived ordering places every `Finite` value before `Unreachable`, so
/// `Unreachable` behaves like positive infinity in comparisons. Arithmetic is
/// absorbing: anything added to `Unreachable` stays `Unreachable`. Finite
/// sums saturate at the bounds of `W` (see [`Weight::saturating_sum`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Distance<W> {
    Finite(W),
    Unreachable,
}

impl<W> Distance<W>
where
    W: Weight,
{
    /// Distance of a vertex to itself
    pub fn zero() -> Self {
        Distance::Finite(W::zero())
    }

    pub fn is_finite(&self) -> bool {
        matches!(self, Distance::Finite(_))
    }

    /// Returns the finite value, if any
    pub fn finite(self) -> Option<W> {
        match self {
            Distance::Finite(value) => Some(value),
            Distance::Unreachable => None,
        }
    }

    /// Appends an edge of the given weight to this distance
    pub fn extend(self, weight: W) -> Self {
        match self {
            Distance::Finite(value) => Distance::Finite(value.saturating_sum(weight)),
            Distance::Unreachable => Distance::Unreachable,
        }
    }

    /// Concatenates two path distances
    pub fn combine(self, other: Self) -> Self {
        match (self, other) {
            (Distance::Finite(a), Distance::Finite(b)) => Distance::Finite(a.saturating_sum(b)),
            _ => Distance::Unreachable,
        }
    }
}

impl<W> fmt::Display for Distance<W>
where
    W: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Distance::Finite(value) => value.fmt(f),
            Distance::Unreachable => f.pad("inf"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unreachable_sorts_after_every_finite_value() {
        assert!(Distance::Finite(i64::MAX) < Distance::Unreachable);
        assert!(Distance::Finite(-3) < Distance::Finite(2));
        assert_eq!(
            [Distance::Unreachable, Distance::Finite(4), Distance::Finite(-1)]
                .iter()
                .min(),
            Some(&Distance::Finite(-1))
        );
    }

    #[test]
    fn unreachable_absorbs_addition() {
        let unreachable: Distance<i64> = Distance::Unreachable;

        assert_eq!(unreachable.extend(-1_000), Distance::Unreachable);
        assert_eq!(unreachable.combine(Distance::Finite(5)), Distance::Unreachable);
        assert_eq!(Distance::Finite(5).combine(unreachable), Distance::Unreachable);
        assert_eq!(Distance::Finite(5).extend(-7), Distance::Finite(-2));
        assert_eq!(Distance::Finite(5).combine(Distance::Finite(1)), Distance::Finite(6));
    }

    #[test]
    fn finite_sums_saturate_at_type_bounds() {
        assert_eq!(Distance::Finite(i64::MAX).extend(1), Distance::Finite(i64::MAX));
        assert_eq!(Distance::Finite(i64::MIN).extend(-1), Distance::Finite(i64::MIN));
        assert_eq!(
            Distance::Finite(i64::MIN / 2 - 1).combine(Distance::Finite(i64::MIN / 2)),
            Distance::Finite(i64::MIN)
        );
        assert_eq!(Distance::Finite(120i8).extend(10), Distance::Finite(i8::MAX));
    }

    #[test]
    fn finite_values_and_display() {
        assert_eq!(Distance::Finite(3).finite(), Some(3));
        assert_eq!(Distance::Finite(-2).to_string(), "-2");
        assert_eq!(Distance::<i64>::Unreachable.to_string(), "inf");
        assert!(Distance::<i64>::zero().is_finite());
        assert!(!Distance::<i64>::Unreachable.is_finite());
    }
}
