use alloc::vec::Vec;

use crate::{AnimationRequest, ClassNames, Layout, NavButton, SlideSlot};

/// Outcome of [`ViewAdapter::animate_to`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Animation {
    /// The strip already sits at the target; the carousel settles the transition immediately.
    Finished,
    /// The view is still moving. Call [`crate::Carousel::complete_animation`] once it is done.
    Running,
}

/// The rendering side of a carousel (DOM, TUI, GUI, or a test double).
///
/// The carousel calls into the view; the view never calls back into the carousel. Methods
/// that only matter to some views have empty default bodies.
pub trait ViewAdapter {
    /// Builds the clipping wrapper, the scrolling strip and the navigation region.
    fn create_wrapper(&mut self, layout: &Layout, classes: &ClassNames);

    /// Lays out the internal slide sequence (clones included) inside the strip.
    fn layout_slides(&mut self, slots: &[SlideSlot], layout: &Layout);

    /// Generates `count` pagination controls. Not called for host-supplied controls.
    fn create_pagination(&mut self, count: usize, class: &str) {
        let _ = (count, class);
    }

    fn create_prev_next(&mut self, prev_class: &str, next_class: &str) {
        let _ = (prev_class, next_class);
    }

    /// Starts moving the strip to `request.left`.
    fn animate_to(&mut self, request: AnimationRequest) -> Animation;

    /// Moves the strip by `delta` without animation (loop re-anchoring).
    fn shift_strip(&mut self, delta: i64);

    /// Marks exactly `indices` as active, clearing every other pagination control.
    fn set_active_controls(&mut self, indices: &[usize]);

    fn set_disabled(&mut self, button: NavButton, disabled: bool);
}

/// A UI-less view that records what the carousel asked for and finishes animations instantly.
///
/// Useful for tests and for hosts that only need the carousel's state.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HeadlessView {
    pub layout: Option<Layout>,
    pub slots: Vec<SlideSlot>,
    /// Number of generated pagination controls; `None` when none were generated.
    pub pagination: Option<usize>,
    pub has_prev_next: bool,
    pub left: i64,
    pub active: Vec<usize>,
    pub prev_disabled: bool,
    pub next_disabled: bool,
    /// Every animation target, in order.
    pub animations: Vec<AnimationRequest>,
    /// Every re-anchor shift, in order.
    pub shifts: Vec<i64>,
    /// When `true`, `animate_to` reports [`Animation::Running`] and leaves completion to the test.
    pub defer_animations: bool,
}

impl HeadlessView {
    pub fn new() -> Self {
        Self::default()
    }

    /// A view whose animations must be completed explicitly.
    pub fn deferred() -> Self {
        Self {
            defer_animations: true,
            ..Self::default()
        }
    }
}

impl ViewAdapter for HeadlessView {
    fn create_wrapper(&mut self, layout: &Layout, _classes: &ClassNames) {
        self.layout = Some(*layout);
        self.left = layout.initial_left;
    }

    fn layout_slides(&mut self, slots: &[SlideSlot], _layout: &Layout) {
        self.slots = slots.to_vec();
    }

    fn create_pagination(&mut self, count: usize, _class: &str) {
        self.pagination = Some(count);
    }

    fn create_prev_next(&mut self, _prev_class: &str, _next_class: &str) {
        self.has_prev_next = true;
    }

    fn animate_to(&mut self, request: AnimationRequest) -> Animation {
        self.left = request.left;
        self.animations.push(request);
        if self.defer_animations {
            Animation::Running
        } else {
            Animation::Finished
        }
    }

    fn shift_strip(&mut self, delta: i64) {
        self.left += delta;
        self.shifts.push(delta);
    }

    fn set_active_controls(&mut self, indices: &[usize]) {
        self.active.clear();
        self.active.extend_from_slice(indices);
    }

    fn set_disabled(&mut self, button: NavButton, disabled: bool) {
        match button {
            NavButton::Prev => self.prev_disabled = disabled,
            NavButton::Next => self.next_disabled = disabled,
        }
    }
}
