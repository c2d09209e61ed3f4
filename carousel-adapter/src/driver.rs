use carousel::{Carousel, CarouselOptions, OptionsError, Proceed};

use crate::TweenView;

/// A framework-neutral driver that wraps a [`Carousel`] rendering into a [`TweenView`].
///
/// This type does not hold any UI objects. Adapters drive it by calling:
/// - `click_prev` / `click_next` / `click_page` when the user clicks a control
/// - `on_focus_lost` / `on_focus_gained` when the host window or tab changes focus
/// - `tick(now_ms)` each frame/timer tick (tween progress, transition completion, auto-rotation)
///
/// The strip position returned by `tick()` is what a DOM layer writes to the strip's `left`.
#[derive(Debug)]
pub struct Driver {
    c: Carousel<TweenView>,
}

impl Driver {
    pub fn new(options: CarouselOptions, slide_count: usize) -> Result<Self, OptionsError> {
        Ok(Self {
            c: Carousel::new(options, slide_count, TweenView::new())?,
        })
    }

    pub fn from_carousel(c: Carousel<TweenView>) -> Self {
        Self { c }
    }

    pub fn carousel(&self) -> &Carousel<TweenView> {
        &self.c
    }

    pub fn carousel_mut(&mut self) -> &mut Carousel<TweenView> {
        &mut self.c
    }

    pub fn into_carousel(self) -> Carousel<TweenView> {
        self.c
    }

    pub fn view(&self) -> &TweenView {
        self.c.view()
    }

    /// Current strip offset.
    pub fn left(&self) -> i64 {
        self.c.view().left()
    }

    /// Advances the driver.
    ///
    /// - If a slide animation is running, moves the strip and returns the new offset. When the
    ///   animation ends the transition settles (including any loop re-anchor) in the same call.
    /// - Then runs the auto-rotation clock, which may start the next transition.
    pub fn tick(&mut self, now_ms: u64) -> Option<i64> {
        self.c.view_mut().set_clock(now_ms);
        let advanced = self.c.view_mut().advance(now_ms);
        let moved = match advanced {
            Some(true) => {
                #[cfg(feature = "tracing")]
                tracing::trace!(target: "carousel_adapter", left = self.left(), "tween finished");
                self.c.complete_animation();
                Some(self.left())
            }
            Some(false) => Some(self.left()),
            None => None,
        };
        self.c.tick(now_ms);
        moved
    }

    /// See [`Carousel::request_slide`].
    pub fn request_slide(&mut self, target: isize, now_ms: u64) -> bool {
        self.c.view_mut().set_clock(now_ms);
        self.c.request_slide(target)
    }

    /// Resumes a transition held by the before-slide-change hook; the animation starts at
    /// `now_ms`.
    pub fn proceed(&mut self, ticket: Proceed, now_ms: u64) -> bool {
        self.c.view_mut().set_clock(now_ms);
        self.c.proceed(ticket)
    }

    pub fn click_prev(&mut self, now_ms: u64) -> bool {
        self.c.view_mut().set_clock(now_ms);
        self.c.click_prev()
    }

    pub fn click_next(&mut self, now_ms: u64) -> bool {
        self.c.view_mut().set_clock(now_ms);
        self.c.click_next()
    }

    pub fn click_page(&mut self, position: usize, now_ms: u64) -> bool {
        self.c.view_mut().set_clock(now_ms);
        self.c.click_page(position)
    }

    pub fn on_focus_lost(&mut self) {
        self.c.on_focus_lost();
    }

    pub fn on_focus_gained(&mut self) {
        self.c.on_focus_gained();
    }
}
