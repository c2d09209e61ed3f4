use crate::autoplay::AutoRotation;
use crate::hook::HookStrategy;
use crate::{
    Animation, AnimationRequest, CarouselOptions, CarouselState, Layout, NavButton, OptionsError,
    Pagination, Proceed, SlideIndex, ViewAdapter,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Transition {
    Idle,
    /// Waiting for the before-slide-change hook to hand back its ticket.
    AwaitingProceed { id: u64, target: isize },
    Animating { target: isize },
}

/// A headless carousel controller.
///
/// The carousel owns the navigation state machine and the index arithmetic; everything visual
/// goes through the [`ViewAdapter`] it was built with:
///
/// ```text
/// request_slide ─▶ before hook ─▶ view.animate_to ─▶ complete_animation
///                  (may hold)                        ─▶ loop re-anchor ─▶ after hook ─▶ idle
/// ```
///
/// At most one transition runs at a time. Requests that arrive while a transition is in flight
/// are dropped, not queued.
#[derive(Debug)]
pub struct Carousel<V> {
    options: CarouselOptions,
    index: SlideIndex,
    layout: Layout,
    pagination: Option<Pagination>,
    has_prev_next: bool,
    hook: HookStrategy,
    current_slide: usize,
    transition: Transition,
    next_transition_id: u64,
    auto: Option<AutoRotation>,
    view: V,
}

impl<V: ViewAdapter> Carousel<V> {
    /// Builds a carousel over `slide_count` items and sets up the view.
    ///
    /// In infinite mode the slide sequence is padded with clones and the carousel starts on the
    /// first real slide. Auto-rotation (if enabled) is armed and starts counting on the first
    /// [`Carousel::tick`].
    pub fn new(
        options: CarouselOptions,
        slide_count: usize,
        view: V,
    ) -> Result<Self, OptionsError> {
        options.validate()?;
        let options = options.normalized();
        let visible = options.visible_items;
        let navigable = slide_count > visible || options.force_prev_next_buttons;

        let index = SlideIndex::new(slide_count, visible, options.infinite && navigable);
        let layout = Layout::new(&options, &index);
        let pagination = if slide_count > visible {
            Pagination::new(options.pagination, options.group_slides, &index)
        } else {
            None
        };
        let has_prev_next = options.prev_next_buttons && navigable;
        let auto = (options.auto && index.is_looping())
            .then(|| AutoRotation::new(options.auto_delay_ms));

        cdebug!(
            total = slide_count,
            visible,
            looping = index.is_looping(),
            padded_len = index.padded_len(),
            "Carousel::new"
        );

        let mut carousel = Self {
            hook: HookStrategy::from_option(options.before_slide_change.as_ref()),
            current_slide: index.initial_slide(),
            transition: Transition::Idle,
            next_transition_id: 0,
            options,
            index,
            layout,
            pagination,
            has_prev_next,
            auto,
            view,
        };
        carousel.setup_view();
        carousel.start_auto_rotation();
        Ok(carousel)
    }

    fn setup_view(&mut self) {
        let classes = &self.options.class_names;
        self.view.create_wrapper(&self.layout, classes);
        self.view.layout_slides(&self.index.slots(), &self.layout);

        if let Some(p) = &self.pagination {
            if !p.is_external() {
                self.view.create_pagination(p.controls(), &classes.pagination);
            }
        }
        if self.has_prev_next {
            self.view
                .create_prev_next(&classes.prev_button, &classes.next_button);
        }

        self.sync_pagination(self.current_slide as isize);
        if self.tracks_button_state() {
            self.sync_prev_next(self.current_slide as isize);
        }
    }

    pub fn options(&self) -> &CarouselOptions {
        &self.options
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    pub fn into_view(self) -> V {
        self.view
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    pub fn slide_index(&self) -> &SlideIndex {
        &self.index
    }

    pub fn pagination(&self) -> Option<&Pagination> {
        self.pagination.as_ref()
    }

    pub fn has_prev_next(&self) -> bool {
        self.has_prev_next
    }

    pub fn total_slides(&self) -> usize {
        self.index.total()
    }

    /// Internal index of the first visible slide.
    pub fn current_slide(&self) -> usize {
        self.current_slide
    }

    /// Real-content index of the first visible slide.
    pub fn virtual_slide(&self) -> usize {
        self.index.to_virtual(self.current_slide)
    }

    pub fn slide_adjustment(&self) -> usize {
        self.pagination.map_or(0, |p| p.slide_adjustment())
    }

    /// `true` when the slide sequence is clone-padded and navigation wraps around.
    pub fn is_infinite(&self) -> bool {
        self.index.is_looping()
    }

    /// `true` from the moment a transition is accepted until it settles.
    pub fn is_animating(&self) -> bool {
        self.transition != Transition::Idle
    }

    /// Target of the transition in flight, if any.
    pub fn pending_target(&self) -> Option<isize> {
        match self.transition {
            Transition::Idle => None,
            Transition::AwaitingProceed { target, .. } | Transition::Animating { target } => {
                Some(target)
            }
        }
    }

    /// See [`SlideIndex::to_virtual`].
    pub fn to_virtual_index(&self, internal: usize) -> usize {
        self.index.to_virtual(internal)
    }

    pub fn state(&self) -> CarouselState {
        CarouselState {
            total_slides: self.index.total(),
            current_slide: self.current_slide,
            virtual_slide: self.virtual_slide(),
            slide_adjustment: self.slide_adjustment(),
            is_animating: self.is_animating(),
            auto_timer_active: self.is_auto_rotating(),
        }
    }

    fn is_navigable(&self) -> bool {
        self.index.total() > self.options.visible_items || self.options.force_prev_next_buttons
    }

    fn tracks_button_state(&self) -> bool {
        self.has_prev_next
            && !self.index.is_looping()
            && self.index.total() > self.options.visible_items
    }

    /// Entry point for all navigation.
    ///
    /// Returns `true` when a transition was started (it may still be held by the
    /// before-slide-change hook). Out-of-range targets are clamped; requests that cannot move
    /// the carousel, or that arrive mid-transition, are dropped without side effects.
    ///
    /// In infinite mode every request proceeds, including one for the current slide, and the
    /// target may lie outside the padded strip: stepping back from the leading copies lands on a
    /// negative index, which settles one set of real items further on.
    pub fn request_slide(&mut self, target: isize) -> bool {
        if !self.is_navigable() {
            return false;
        }
        if self.is_animating() {
            ctrace!(requested = target, "request_slide dropped: transition in flight");
            return false;
        }
        let Some(target) = self.resolve_target(target) else {
            ctrace!(
                requested = target,
                current = self.current_slide,
                "request_slide suppressed"
            );
            return false;
        };
        self.begin(target);
        true
    }

    fn resolve_target(&self, target: isize) -> Option<isize> {
        let (min, max) = self.index.target_bounds();
        if self.index.is_looping() {
            return Some(target.clamp(min, max));
        }
        let grouped = self.options.group_slides;
        if grouped && target >= self.index.total() as isize {
            return None;
        }
        let target = target.clamp(min, max);
        if !grouped && target == self.current_slide as isize {
            return None;
        }
        Some(target)
    }

    fn begin(&mut self, target: isize) {
        let id = self.next_transition_id;
        self.next_transition_id = id.wrapping_add(1);
        self.transition = Transition::AwaitingProceed { id, target };
        ctrace!(id, to = target, current = self.current_slide, "transition started");

        let ticket = Proceed {
            transition: id,
            target,
        };
        if let Some(ticket) = self.hook.dispatch(ticket, self.current_slide) {
            self.proceed(ticket);
        }
    }

    /// Resumes a transition held by the before-slide-change hook.
    ///
    /// Returns `false` (and does nothing) for a ticket that does not belong to the transition
    /// currently waiting.
    pub fn proceed(&mut self, ticket: Proceed) -> bool {
        match self.transition {
            Transition::AwaitingProceed { id, .. } if id == ticket.transition => {
                self.resume(ticket);
                true
            }
            _ => {
                cwarn!(
                    ticket = ticket.transition,
                    "proceed called with a stale ticket"
                );
                false
            }
        }
    }

    fn resume(&mut self, ticket: Proceed) {
        let target = ticket.target;
        self.transition = Transition::Animating { target };

        let animation = self.view.animate_to(AnimationRequest {
            index: target,
            left: self.layout.left_for(target),
            duration_ms: self.options.transition_speed_ms,
            easing: self.options.easing,
        });
        self.sync_pagination(target);
        if self.tracks_button_state() {
            self.sync_prev_next(target);
        }

        if animation == Animation::Finished {
            self.settle(target);
        }
    }

    /// Reports that the view finished the running animation.
    ///
    /// Returns `false` when no animation was running.
    pub fn complete_animation(&mut self) -> bool {
        let Transition::Animating { target } = self.transition else {
            return false;
        };
        self.settle(target);
        true
    }

    fn settle(&mut self, target: isize) {
        let mut target = target;
        if self.index.is_looping() {
            let total = self.index.total() as isize;
            if target < self.options.visible_items as isize {
                // Scrolled into the leading clones: jump to the same slides at the end.
                self.view.shift_strip(-self.layout.loop_width());
                target += total;
            } else if target > total {
                self.view.shift_strip(self.layout.loop_width());
                target -= total;
            }
        }

        // Bounded targets always re-anchor to a non-negative index.
        let target = usize::try_from(target).unwrap_or(0);
        let previous = self.current_slide;
        if let Some(f) = &self.options.after_slide_change {
            f(target, previous);
        }
        self.current_slide = target;
        self.transition = Transition::Idle;
        ctrace!(current = self.current_slide, previous, "transition settled");
    }

    fn sync_pagination(&mut self, index: isize) {
        if let Some(p) = &self.pagination {
            let active = p.active_for(index);
            self.view.set_active_controls(&active);
        }
    }

    fn sync_prev_next(&mut self, index: isize) {
        let last = self
            .index
            .total()
            .saturating_sub(self.options.visible_items) as isize;
        self.view.set_disabled(NavButton::Prev, index <= 0);
        self.view.set_disabled(NavButton::Next, index >= last);
    }

    fn step(&self) -> isize {
        if self.options.group_slides {
            self.options.visible_items as isize
        } else {
            1
        }
    }

    /// Handles a click on the "previous" button.
    pub fn click_prev(&mut self) -> bool {
        self.stop_auto_rotation_by_user();
        if self.is_animating() {
            return false;
        }
        self.request_slide(self.current_slide as isize - self.step())
    }

    /// Handles a click on the "next" button.
    pub fn click_next(&mut self) -> bool {
        self.stop_auto_rotation_by_user();
        if self.is_animating() {
            return false;
        }
        self.request_slide(self.current_slide as isize + self.step())
    }

    /// Handles a click on pagination control `position`.
    pub fn click_page(&mut self, position: usize) -> bool {
        self.stop_auto_rotation_by_user();
        let Some(p) = self.pagination else {
            return false;
        };
        if position >= p.controls() || self.is_animating() {
            return false;
        }
        let target = p.target_for(position);
        if !p.is_grouped() && target == self.current_slide {
            return false;
        }
        self.request_slide(target as isize)
    }

    pub fn is_auto_rotating(&self) -> bool {
        self.auto.is_some_and(|a| a.is_active())
    }

    /// Starts auto-rotation. A no-op unless the carousel was built with `auto` and `infinite`,
    /// or when rotation is already running.
    pub fn start_auto_rotation(&mut self) {
        if let Some(auto) = &mut self.auto {
            auto.start();
        }
    }

    /// Stops auto-rotation. Safe to call at any time.
    pub fn stop_auto_rotation(&mut self) {
        if let Some(auto) = &mut self.auto {
            auto.stop();
        }
    }

    fn stop_auto_rotation_by_user(&mut self) {
        if let Some(auto) = &mut self.auto {
            if !auto.is_stopped_by_user() {
                cdebug!("auto-rotation stopped by user navigation");
            }
            auto.stop_by_user();
        }
    }

    /// The host lost focus: pause auto-rotation.
    pub fn on_focus_lost(&mut self) {
        self.stop_auto_rotation();
    }

    /// The host regained focus: resume auto-rotation unless the user stopped it.
    pub fn on_focus_gained(&mut self) {
        if let Some(auto) = &mut self.auto {
            auto.resume();
        }
    }

    /// Advances the auto-rotation clock.
    ///
    /// Returns `true` when a rotation step started a transition.
    pub fn tick(&mut self, now_ms: u64) -> bool {
        let Some(auto) = &mut self.auto else {
            return false;
        };
        if !auto.tick(now_ms) {
            return false;
        }
        let target = self.current_slide + self.options.visible_items;
        self.request_slide(target as isize)
    }
}
