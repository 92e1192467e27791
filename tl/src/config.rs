//! Limits applied while decoding untrusted input.

use core::ops::{Bound, RangeBounds};

/// Default maximum nesting of objects and vectors.
pub const DEFAULT_MAX_DEPTH: usize = 64;

/// Largest length a byte string prefix can express (3 bytes).
pub const MAX_MESSAGE_LEN: usize = (1 << 24) - 1;

/// Configuration for a single decode call.
///
/// The defaults accept anything the wire format can express, bounded only by the depth limit.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    /// Maximum number of nested objects and vectors.
    ///
    /// Exceeding it fails the decode with [crate::Error::DepthExceeded] instead of exhausting
    /// the stack.
    pub max_depth: usize,

    /// Allowed element counts for vectors.
    pub vector_len: RangeCfg<usize>,

    /// Allowed lengths for strings and raw byte strings.
    pub bytes_len: RangeCfg<usize>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            vector_len: RangeCfg::from(..),
            bytes_len: RangeCfg::from(..=MAX_MESSAGE_LEN),
        }
    }
}

/// Configuration for limiting the range of a value.
///
/// # Examples
///
/// ```
/// use commonware_tl::RangeCfg;
///
/// let cfg = RangeCfg::new(0..=1024);
/// assert!(cfg.contains(&500));
/// assert!(!cfg.contains(&2000));
/// ```
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct RangeCfg<T: Copy + PartialOrd> {
    start: Bound<T>,
    end: Bound<T>,
}

macro_rules! impl_from_range {
    ($($range:ty),*) => {
        $(
            impl<T: Copy + PartialOrd> From<$range> for RangeCfg<T> {
                fn from(r: $range) -> Self {
                    Self::new(r)
                }
            }
        )*
    };
}

impl_from_range!(
    core::ops::Range<T>,
    core::ops::RangeInclusive<T>,
    core::ops::RangeFrom<T>,
    core::ops::RangeTo<T>,
    core::ops::RangeToInclusive<T>
);

impl<T: Copy + PartialOrd> From<core::ops::RangeFull> for RangeCfg<T> {
    fn from(_: core::ops::RangeFull) -> Self {
        Self::new(..)
    }
}

impl<T: Copy + PartialOrd> RangeCfg<T> {
    /// Creates a new `RangeCfg` from any type implementing `RangeBounds<T>`.
    pub fn new(r: impl RangeBounds<T>) -> Self {
        RangeCfg {
            start: r.start_bound().cloned(),
            end: r.end_bound().cloned(),
        }
    }

    /// Returns true if the value is within this range.
    pub fn contains(&self, value: &T) -> bool {
        let above_start = match &self.start {
            Bound::Included(s) => value >= s,
            Bound::Excluded(s) => value > s,
            Bound::Unbounded => true,
        };
        let below_end = match &self.end {
            Bound::Included(e) => value <= e,
            Bound::Excluded(e) => value < e,
            Bound::Unbounded => true,
        };
        above_start && below_end
    }
}

impl<T: Copy + PartialOrd> RangeBounds<T> for RangeCfg<T> {
    fn start_bound(&self) -> Bound<&T> {
        self.start.as_ref()
    }

    fn end_bound(&self) -> Bound<&T> {
        self.end.as_ref()
    }
}
