use alloc::vec::Vec;

use crate::{PaginationMode, SlideIndex};

/// Maps pagination controls to slides and back.
///
/// Grouped pagination has one control per set of `visible` slides; ungrouped pagination has one
/// control per slide.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Pagination {
    controls: usize,
    external: bool,
    grouped: bool,
    visible: usize,
    total: usize,
    looping: bool,
    adjustment: usize,
}

impl Pagination {
    /// Returns `None` when `mode` disables pagination.
    pub fn new(mode: PaginationMode, grouped: bool, index: &SlideIndex) -> Option<Self> {
        let visible = index.visible();
        let total = index.total();
        let (controls, external) = match mode {
            PaginationMode::None => return None,
            PaginationMode::Generated if grouped => (total.div_ceil(visible), false),
            PaginationMode::Generated => (total, false),
            PaginationMode::External { controls } => (controls, true),
        };
        Some(Self {
            controls,
            external,
            grouped,
            visible,
            total,
            looping: index.is_looping(),
            adjustment: if index.is_looping() { visible } else { 0 },
        })
    }

    /// Number of pagination controls.
    pub fn controls(&self) -> usize {
        self.controls
    }

    /// `true` when the host supplied the controls.
    pub fn is_external(&self) -> bool {
        self.external
    }

    pub fn is_grouped(&self) -> bool {
        self.grouped
    }

    /// Offset from a control position to the internal slide index.
    pub fn slide_adjustment(&self) -> usize {
        self.adjustment
    }

    /// Internal slide index a click on control `position` navigates to.
    pub fn target_for(&self, position: usize) -> usize {
        if self.grouped {
            position * self.visible + self.adjustment
        } else {
            position + self.adjustment
        }
    }

    /// Normalizes an internal index into the control space before highlighting.
    ///
    /// In looping mode indices at or past `total` wrap back by `total`, other indices drop the
    /// leading padding. A negative index maps to `total - index` (see
    /// [`Pagination::negative_wrap`]).
    pub fn normalize(&self, index: isize) -> isize {
        if !self.looping {
            return index;
        }
        let total = self.total as isize;
        if index >= total {
            index - total
        } else if index < 0 {
            Self::negative_wrap(total, index)
        } else {
            index - self.visible as isize
        }
    }

    /// The negative-index branch of [`Pagination::normalize`]: `total - index`.
    ///
    /// Unlike the forward wrap (`index - total`) this lands past the last control, which then
    /// highlights nothing. Reached when an infinite step backs out of the leading copies, so
    /// the highlight stays empty until the next transition.
    pub fn negative_wrap(total: isize, index: isize) -> isize {
        total - index
    }

    /// Control positions to mark active for a transition to internal `index`.
    ///
    /// Grouped: the single control of the group containing the index. Ungrouped: the run of
    /// `visible` controls starting at the index. Negative positions count back from the last
    /// control; positions past the end are skipped.
    pub fn active_for(&self, index: isize) -> Vec<usize> {
        let index = self.normalize(index);
        let visible = self.visible as isize;
        let (start, len) = if self.grouped {
            (index.div_euclid(visible), 1)
        } else {
            (index, visible)
        };
        let controls = self.controls as isize;
        (start..start.saturating_add(len))
            .map(|p| if p < 0 { p + controls } else { p })
            .filter(|&p| (0..controls).contains(&p))
            .map(|p| p as usize)
            .collect()
    }
}
