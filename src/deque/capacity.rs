//! Capacity configuration for [`Deque`](super::Deque).
//!
//! A capacity is either a non-negative bound or unbounded. Configuration
//! sources that can only carry an integer use `-1` as the unbounded sentinel;
//! every other negative value is rejected.

use crate::CapacityError;
use core::fmt;
use core::str::FromStr;

/// Maximum number of elements a deque may hold
///
/// # Examples
///
/// ```rust
/// use linkdeque::Capacity;
///
/// assert_eq!(Capacity::from(8usize), Capacity::Bounded(8));
/// assert_eq!(Capacity::from_signed(-1), Ok(Capacity::Unbounded));
/// assert!(Capacity::from_signed(-2).is_err());
/// assert_eq!("unbounded".parse(), Ok(Capacity::Unbounded));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Capacity {
    /// At most this many elements; inserting beyond it evicts from the opposite end
    Bounded(usize),
    /// No limit
    #[default]
    Unbounded,
}

impl Capacity {
    /// Signed value standing for [`Capacity::Unbounded`]
    pub const UNBOUNDED_SENTINEL: i64 = -1;

    /// Interpret a signed capacity, treating `-1` as unbounded
    ///
    /// # Errors
    ///
    /// Returns [`CapacityError::Negative`] for any negative value other than `-1`.
    pub fn from_signed(raw: i64) -> Result<Self, CapacityError> {
        if raw == Self::UNBOUNDED_SENTINEL {
            return Ok(Capacity::Unbounded);
        }
        if raw < 0 {
            return Err(CapacityError::Negative(raw));
        }
        Ok(Capacity::Bounded(usize::try_from(raw).unwrap_or(usize::MAX)))
    }

    /// The signed representation, `-1` for unbounded
    ///
    /// Bounds too large for an `i64` saturate at `i64::MAX`.
    pub fn as_signed(self) -> i64 {
        match self {
            Capacity::Bounded(limit) => i64::try_from(limit).unwrap_or(i64::MAX),
            Capacity::Unbounded => Self::UNBOUNDED_SENTINEL,
        }
    }

    /// The bound, if any
    #[inline]
    pub fn limit(self) -> Option<usize> {
        match self {
            Capacity::Bounded(limit) => Some(limit),
            Capacity::Unbounded => None,
        }
    }

    /// Whether this capacity places no limit on length
    #[inline]
    pub fn is_unbounded(self) -> bool {
        matches!(self, Capacity::Unbounded)
    }

    /// A deque of `len` elements cannot take another without evicting
    #[inline]
    pub(crate) fn is_reached_by(self, len: usize) -> bool {
        matches!(self, Capacity::Bounded(limit) if len >= limit)
    }

    /// A deque of `len` elements must evict to restore the bound
    #[inline]
    pub(crate) fn is_exceeded_by(self, len: usize) -> bool {
        matches!(self, Capacity::Bounded(limit) if len > limit)
    }
}

impl From<usize> for Capacity {
    fn from(limit: usize) -> Self {
        Capacity::Bounded(limit)
    }
}

impl From<Option<usize>> for Capacity {
    fn from(limit: Option<usize>) -> Self {
        limit.map_or(Capacity::Unbounded, Capacity::Bounded)
    }
}

impl TryFrom<i64> for Capacity {
    type Error = CapacityError;

    fn try_from(raw: i64) -> Result<Self, Self::Error> {
        Capacity::from_signed(raw)
    }
}

impl FromStr for Capacity {
    type Err = CapacityError;

    /// Accepts `unbounded`, `unlimited`, `-1` or a non-negative integer
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.eq_ignore_ascii_case("unbounded") || trimmed.eq_ignore_ascii_case("unlimited") {
            return Ok(Capacity::Unbounded);
        }
        let raw: i64 = trimmed
            .parse()
            .map_err(|_| CapacityError::Unparsable(s.to_owned()))?;
        Capacity::from_signed(raw)
    }
}

impl fmt::Display for Capacity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Capacity::Bounded(limit) => write!(f, "{}", limit),
            Capacity::Unbounded => write!(f, "unbounded"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_signed() {
        assert_eq!(Capacity::from_signed(-1), Ok(Capacity::Unbounded));
        assert_eq!(Capacity::from_signed(0), Ok(Capacity::Bounded(0)));
        assert_eq!(Capacity::from_signed(3), Ok(Capacity::Bounded(3)));
        assert_eq!(
            Capacity::from_signed(-2),
            Err(CapacityError::Negative(-2))
        );
        assert_eq!(
            Capacity::try_from(i64::MIN),
            Err(CapacityError::Negative(i64::MIN))
        );
    }

    #[test]
    fn test_as_signed() {
        assert_eq!(Capacity::Unbounded.as_signed(), -1);
        assert_eq!(Capacity::Bounded(0).as_signed(), 0);
        assert_eq!(Capacity::Bounded(42).as_signed(), 42);
    }

    #[test]
    fn test_parse() {
        assert_eq!("5".parse(), Ok(Capacity::Bounded(5)));
        assert_eq!(" 0 ".parse(), Ok(Capacity::Bounded(0)));
        assert_eq!("-1".parse(), Ok(Capacity::Unbounded));
        assert_eq!("Unlimited".parse(), Ok(Capacity::Unbounded));
        assert_eq!("-7".parse::<Capacity>(), Err(CapacityError::Negative(-7)));
        assert_eq!(
            "lots".parse::<Capacity>(),
            Err(CapacityError::Unparsable("lots".to_owned()))
        );
    }

    #[test]
    fn test_bound_checks() {
        let cap = Capacity::Bounded(2);
        assert!(!cap.is_reached_by(1));
        assert!(cap.is_reached_by(2));
        assert!(!cap.is_exceeded_by(2));
        assert!(cap.is_exceeded_by(3));

        assert!(Capacity::Bounded(0).is_exceeded_by(1));
        assert!(!Capacity::Unbounded.is_reached_by(usize::MAX));
        assert!(!Capacity::Unbounded.is_exceeded_by(usize::MAX));
    }

    #[test]
    fn test_conversions_and_display() {
        assert_eq!(Capacity::from(None::<usize>), Capacity::Unbounded);
        assert_eq!(Capacity::from(Some(4usize)), Capacity::Bounded(4));
        assert_eq!(Capacity::default(), Capacity::Unbounded);
        assert_eq!(Capacity::Bounded(4).limit(), Some(4));
        assert_eq!(Capacity::Unbounded.limit(), None);
        assert_eq!(Capacity::Bounded(4).to_string(), "4");
        assert_eq!(Capacity::Unbounded.to_string(), "unbounded");
    }
}
