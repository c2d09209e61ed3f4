use alloc::string::String;
use alloc::vec::Vec;

use carousel::{
    Animation, AnimationRequest, ClassNames, Layout, NavButton, SlideSlot, ViewAdapter,
};

use crate::Tween;

/// State of one generated prev/next button.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ButtonState {
    pub class: String,
    pub disabled: bool,
}

/// Everything a renderer needs to draw the carousel, minus the strip position.
///
/// A DOM layer diffs this against what it rendered last; a TUI or GUI simply draws it.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Scene {
    pub layout: Option<Layout>,
    pub classes: ClassNames,
    pub slots: Vec<SlideSlot>,
    /// Number of generated pagination controls (0 when the host supplies its own).
    pub pages: usize,
    /// Active pagination positions.
    pub active: Vec<usize>,
    pub prev: Option<ButtonState>,
    pub next: Option<ButtonState>,
}

/// A retained-mode [`ViewAdapter`] that animates the strip with a [`Tween`].
///
/// The view holds no UI objects. Its owner sets the clock before driving the carousel and
/// advances the tween from a frame loop or timer (see [`crate::Driver`]).
#[derive(Clone, Debug, Default)]
pub struct TweenView {
    scene: Scene,
    left: i64,
    clock_ms: u64,
    tween: Option<Tween>,
}

impl TweenView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    /// Current strip offset (CSS `left`).
    pub fn left(&self) -> i64 {
        self.left
    }

    pub fn tween(&self) -> Option<&Tween> {
        self.tween.as_ref()
    }

    pub fn is_animating(&self) -> bool {
        self.tween.is_some()
    }

    /// Time used as the start of tweens begun by the next `animate_to`.
    pub fn set_clock(&mut self, now_ms: u64) {
        self.clock_ms = now_ms;
    }

    /// Advances the running tween.
    ///
    /// Returns `None` when nothing is animating, otherwise whether the tween just finished.
    pub fn advance(&mut self, now_ms: u64) -> Option<bool> {
        let tween = self.tween?;
        self.left = tween.sample(now_ms);
        if tween.is_done(now_ms) {
            self.tween = None;
            return Some(true);
        }
        Some(false)
    }
}

impl ViewAdapter for TweenView {
    fn create_wrapper(&mut self, layout: &Layout, classes: &ClassNames) {
        self.scene.layout = Some(*layout);
        self.scene.classes = classes.clone();
        self.left = layout.initial_left;
    }

    fn layout_slides(&mut self, slots: &[SlideSlot], _layout: &Layout) {
        self.scene.slots = slots.to_vec();
    }

    fn create_pagination(&mut self, count: usize, _class: &str) {
        self.scene.pages = count;
    }

    fn create_prev_next(&mut self, prev_class: &str, next_class: &str) {
        self.scene.prev = Some(ButtonState {
            class: String::from(prev_class),
            disabled: false,
        });
        self.scene.next = Some(ButtonState {
            class: String::from(next_class),
            disabled: false,
        });
    }

    fn animate_to(&mut self, request: AnimationRequest) -> Animation {
        if request.duration_ms == 0 || request.left == self.left {
            self.left = request.left;
            self.tween = None;
            return Animation::Finished;
        }
        self.tween = Some(Tween::new(
            self.left,
            request.left,
            self.clock_ms,
            request.duration_ms,
            request.easing,
        ));
        Animation::Running
    }

    fn shift_strip(&mut self, delta: i64) {
        self.left += delta;
    }

    fn set_active_controls(&mut self, indices: &[usize]) {
        self.scene.active.clear();
        self.scene.active.extend_from_slice(indices);
    }

    fn set_disabled(&mut self, button: NavButton, disabled: bool) {
        let slot = match button {
            NavButton::Prev => &mut self.scene.prev,
            NavButton::Next => &mut self.scene.next,
        };
        if let Some(state) = slot {
            state.disabled = disabled;
        }
    }
}
