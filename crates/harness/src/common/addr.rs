//! Bus address ranges.
//!
//! This module defines the half-open span a single bus device owns. It provides the following:
//! 1. **Span Type:** `AddressRange` with a 64-bit size so one range can cover the full space.
//! 2. **Containment:** Membership tests used by the fabric and its tests.
//! 3. **Partitioning:** Deriving the device ranges from a core's ascending boundary list.

/// Size of the 32-bit bus address space in bytes.
pub const ADDRESS_SPACE: u64 = 1 << 32;

/// A half-open span `[begin, begin + size)` of the 32-bit bus address space.
///
/// `size` is 64 bits wide because the last range of a map may extend to 2³².
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AddressRange {
    /// First address owned by the range.
    pub begin: u32,
    /// Number of bytes owned by the range.
    pub size: u64,
}

impl AddressRange {
    /// Creates a range starting at `begin` spanning `size` bytes.
    #[inline(always)]
    pub const fn new(begin: u32, size: u64) -> Self {
        Self { begin, size }
    }

    /// One past the last address of the range, as a 64-bit value.
    #[inline(always)]
    pub const fn end(&self) -> u64 {
        self.begin as u64 + self.size
    }

    /// Returns `true` if `addr` falls inside the range.
    #[inline(always)]
    pub const fn contains(&self, addr: u32) -> bool {
        (addr as u64) >= self.begin as u64 && (addr as u64) < self.end()
    }

    /// Splits the 32-bit address space into consecutive ranges at the given boundaries.
    ///
    /// A boundary list of length `D - 1` yields `D` ranges: the first starts at 0, each
    /// boundary closes one range and opens the next, and the last range absorbs the
    /// remainder up to 2³². Boundaries are expected in strictly ascending order.
    ///
    /// # Arguments
    ///
    /// * `boundaries` - Ascending upper bounds of every range except the last.
    ///
    /// # Returns
    ///
    /// The ranges in device-index order.
    pub fn partition(boundaries: &[u32]) -> Vec<Self> {
        let mut ranges = Vec::with_capacity(boundaries.len() + 1);
        let mut begin = 0u64;
        for &upper in boundaries {
            ranges.push(Self::new(begin as u32, upper as u64 - begin));
            begin = upper as u64;
        }
        ranges.push(Self::new(begin as u32, ADDRESS_SPACE - begin));
        ranges
    }
}
