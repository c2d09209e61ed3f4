use alloc::vec::Vec;

use crate::SlideSlot;

/// Index bookkeeping for the internal slide sequence.
///
/// In looping mode the real items are padded with copies so that the strip can scroll past
/// either end and then silently jump back:
///
/// ```text
/// [last `visible` items] [real items 0..total] [first `visible + 1` items]
/// ```
///
/// Internal indices address that padded sequence; virtual indices address the real items.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SlideIndex {
    total: usize,
    visible: usize,
    looping: bool,
}

impl SlideIndex {
    /// Padding is only added when `looping` and there is at least one real item.
    pub fn new(total: usize, visible: usize, looping: bool) -> Self {
        Self {
            total,
            visible,
            looping: looping && total > 0,
        }
    }

    pub fn total(&self) -> usize {
        self.total
    }

    pub fn visible(&self) -> usize {
        self.visible
    }

    pub fn is_looping(&self) -> bool {
        self.looping
    }

    /// Number of prepended copies.
    pub fn leading_clones(&self) -> usize {
        if self.looping { self.visible } else { 0 }
    }

    /// Number of appended copies.
    pub fn trailing_clones(&self) -> usize {
        if self.looping { self.visible + 1 } else { 0 }
    }

    /// Length of the internal sequence.
    pub fn padded_len(&self) -> usize {
        self.leading_clones() + self.total + self.trailing_clones()
    }

    /// Internal index of the first real item; where a fresh carousel starts.
    pub fn initial_slide(&self) -> usize {
        self.leading_clones()
    }

    /// Inclusive range of internal indices a transition may target.
    ///
    /// Without looping this is `0..=total - visible`. With looping a step may leave the padded
    /// strip on either side and is re-anchored by one set of real items when it settles, so the
    /// range is every index a single re-anchor brings back: `-total..=padded_len - 1`. Prev/next
    /// and auto-rotation steps stay well inside it.
    pub fn target_bounds(&self) -> (isize, isize) {
        if self.looping {
            (-(self.total as isize), self.padded_len() as isize - 1)
        } else {
            (0, self.total.saturating_sub(self.visible) as isize)
        }
    }

    /// Real item shown at an internal index.
    ///
    /// Copies wrap modulo `total`, so a carousel forced to loop with fewer items than visible
    /// slots still yields a well-formed sequence.
    pub fn real_index(&self, internal: usize) -> Option<usize> {
        if internal >= self.padded_len() || self.total == 0 {
            return None;
        }
        let shifted = internal as isize - self.leading_clones() as isize;
        Some(shifted.rem_euclid(self.total as isize) as usize)
    }

    /// Maps an internal index onto the real-content index, undoing the clone padding.
    ///
    /// Outside looping mode internal and virtual indices coincide. In looping mode the result is
    /// always in `0..total`.
    pub fn to_virtual(&self, internal: usize) -> usize {
        if !self.looping {
            return internal;
        }
        let mut index = internal;
        if index >= self.total + self.visible {
            index -= self.total;
        } else if index < self.visible {
            index += self.total;
        }
        // Only a forced loop with `total <= visible` can land outside the real run here.
        (index as isize - self.visible as isize).rem_euclid(self.total as isize) as usize
    }

    /// Maps a real-content index onto the canonical internal index (inside the real run).
    pub fn to_internal(&self, virtual_index: usize) -> usize {
        virtual_index + self.leading_clones()
    }

    /// The full internal sequence, clones included.
    pub fn slots(&self) -> Vec<SlideSlot> {
        let leading = self.leading_clones();
        let trailing_start = leading + self.total;
        (0..self.padded_len())
            .filter_map(|i| {
                self.real_index(i).map(|real_index| SlideSlot {
                    real_index,
                    is_clone: i < leading || i >= trailing_start,
                })
            })
            .collect()
    }
}
