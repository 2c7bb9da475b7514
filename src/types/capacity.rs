use num_traits::{CheckedAdd, CheckedSub, NumAssign};
use std::fmt::{Debug, Display, Formatter};

/// Numeric type usable for capacities and flow amounts.
///
/// The same type is used for the capacity matrix, the flow matrix and
/// every bottleneck, so integer types give exact results. Sums are
/// checked, an amount that does not fit is reported as an error.
pub trait FlowValue: NumAssign + CheckedAdd + CheckedSub + Ord + Copy + Debug {}

impl<T: NumAssign + CheckedAdd + CheckedSub + Ord + Copy + Debug> FlowValue for T {}

/// Capacity of a directed edge.
///
/// `Unbounded` compares greater than every finite capacity; it is only
/// used for the edges leaving the virtual source and entering the
/// virtual sink.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum Capacity<F> {
    Finite(F),
    Unbounded,
}

impl<F: FlowValue> Capacity<F> {
    pub fn zero() -> Self {
        Capacity::Finite(F::zero())
    }

    /// Finite capacities of real edges must be strictly positive.
    pub fn is_valid(&self) -> bool {
        match self {
            Capacity::Finite(c) => *c > F::zero(),
            Capacity::Unbounded => true,
        }
    }

    pub fn is_positive(&self) -> bool {
        *self > Capacity::zero()
    }

    pub fn finite(&self) -> Option<F> {
        match self {
            Capacity::Finite(c) => Some(*c),
            Capacity::Unbounded => None,
        }
    }

    /// Capacity left on the edge after `flow` units have been pushed along it,
    /// or `None` if it does not fit into `F`.
    pub fn residual(&self, flow: F) -> Option<Capacity<F>> {
        match self {
            Capacity::Finite(c) => c.checked_sub(&flow).map(Capacity::Finite),
            Capacity::Unbounded => Some(Capacity::Unbounded),
        }
    }
}

impl<F: Display> Display for Capacity<F> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        match self {
            Capacity::Finite(c) => write!(f, "{c}"),
            Capacity::Unbounded => write!(f, "inf"),
        }
    }
}

#[cfg(test)]
mod test {
    use super::Capacity;

    #[test]
    fn unbounded_is_larger_than_any_finite() {
        assert!(Capacity::Unbounded > Capacity::Finite(i64::MAX));
        assert!(Capacity::Finite(3) < Capacity::Finite(4));
        assert_eq!(
            std::cmp::min(Capacity::Unbounded, Capacity::Finite(7)),
            Capacity::Finite(7)
        );
    }

    #[test]
    fn validity() {
        assert!(Capacity::Finite(1).is_valid());
        assert!(Capacity::<i64>::Unbounded.is_valid());
        assert!(!Capacity::Finite(0).is_valid());
        assert!(!Capacity::Finite(-5).is_valid());
    }

    #[test]
    fn residual() {
        assert_eq!(Capacity::Finite(10).residual(4), Some(Capacity::Finite(6)));
        // Negative flow on an edge opens up residual capacity against it.
        assert_eq!(Capacity::Finite(0).residual(-3), Some(Capacity::Finite(3)));
        assert_eq!(Capacity::Unbounded.residual(1_000), Some(Capacity::Unbounded));
        assert_eq!(Capacity::Finite(5).residual(5), Some(Capacity::zero()));
    }

    #[test]
    fn residual_out_of_range() {
        assert_eq!(Capacity::Finite(i64::MAX).residual(-1), None);
        assert_eq!(Capacity::Finite(i64::MIN).residual(1), None);
        assert_eq!(
            Capacity::<i64>::Unbounded.residual(i64::MIN),
            Some(Capacity::Unbounded)
        );
    }

    #[test]
    fn to_string() {
        assert_eq!(format!("{}", Capacity::Finite(12)), "12");
        assert_eq!(format!("{}", Capacity::<i64>::Unbounded), "inf");
    }
}
