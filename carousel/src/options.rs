use alloc::string::String;
use alloc::sync::Arc;

use crate::{Easing, OptionsError, PaginationMode, Proceed};

/// A hook called before a slide change starts.
///
/// Arguments are `(target, current, proceed)` in internal indices. In infinite mode `target` may
/// fall before the first padded slide (a step backwards out of the leading copies); it is
/// re-anchored when the transition settles. The transition stays
/// suspended until the `proceed` ticket comes back: either return it (`Some(proceed)`) to
/// continue immediately, or keep it and hand it to [`crate::Carousel::proceed`] later.
///
/// There is no timeout. A hook that drops its ticket leaves the carousel animating forever.
pub type BeforeSlideChangeCallback =
    Arc<dyn Fn(isize, usize, Proceed) -> Option<Proceed> + Send + Sync>;

/// A notification fired after a slide change settles.
///
/// Arguments are `(new_index, previous_index)` in internal indices, after loop re-anchoring.
pub type AfterSlideChangeCallback = Arc<dyn Fn(usize, usize) + Send + Sync>;

/// CSS class hooks handed to the view when it builds the carousel chrome.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "camelCase"))]
pub struct ClassNames {
    pub wrapper: String,
    pub nav_wrapper: String,
    pub pagination: String,
    pub prev_button: String,
    pub next_button: String,
}

impl Default for ClassNames {
    fn default() -> Self {
        Self {
            wrapper: String::from("carouselWrapper"),
            nav_wrapper: String::from("carouselNavWrapper"),
            pagination: String::from("carouselPagination"),
            prev_button: String::from("carouselBtnPrev"),
            next_button: String::from("carouselBtnNext"),
        }
    }
}

/// Configuration for [`crate::Carousel`].
///
/// Hooks are stored in `Arc`s so the options stay cheap to clone.
pub struct CarouselOptions {
    /// How many slides are visible at a time.
    pub visible_items: usize,
    pub slide_width: u32,
    pub slide_height: u32,
    /// Space between two neighbouring slides.
    pub slide_spacing: u32,
    pub pagination: PaginationMode,
    /// `true`: one pagination control per set of visible slides, and prev/next move a whole set.
    /// Forced off when only one slide is visible.
    pub group_slides: bool,
    pub transition_speed_ms: u64,
    pub easing: Easing,
    pub before_slide_change: Option<BeforeSlideChangeCallback>,
    pub after_slide_change: Option<AfterSlideChangeCallback>,
    pub prev_next_buttons: bool,
    /// Loop back to the beginning past the last slide (and vice versa).
    pub infinite: bool,
    /// Create prev/next buttons and allow navigation even when every slide fits the viewport.
    pub force_prev_next_buttons: bool,
    /// Auto-rotate. Ignored unless `infinite` is set. Stops for good on the first user click.
    pub auto: bool,
    pub auto_delay_ms: u64,
    pub class_names: ClassNames,
}

impl Clone for CarouselOptions {
    fn clone(&self) -> Self {
        Self {
            visible_items: self.visible_items,
            slide_width: self.slide_width,
            slide_height: self.slide_height,
            slide_spacing: self.slide_spacing,
            pagination: self.pagination,
            group_slides: self.group_slides,
            transition_speed_ms: self.transition_speed_ms,
            easing: self.easing,
            before_slide_change: self.before_slide_change.clone(),
            after_slide_change: self.after_slide_change.clone(),
            prev_next_buttons: self.prev_next_buttons,
            infinite: self.infinite,
            force_prev_next_buttons: self.force_prev_next_buttons,
            auto: self.auto,
            auto_delay_ms: self.auto_delay_ms,
            class_names: self.class_names.clone(),
        }
    }
}

impl Default for CarouselOptions {
    fn default() -> Self {
        Self::new(1)
    }
}

impl CarouselOptions {
    /// Creates options showing `visible_items` slides at a time, with the classic defaults
    /// (400x250 slides, 10 units apart, generated pagination, prev/next buttons).
    pub fn new(visible_items: usize) -> Self {
        Self {
            visible_items,
            slide_width: 400,
            slide_height: 250,
            slide_spacing: 10,
            pagination: PaginationMode::Generated,
            group_slides: true,
            transition_speed_ms: 400,
            easing: Easing::EaseOutExpo,
            before_slide_change: None,
            after_slide_change: None,
            prev_next_buttons: true,
            infinite: false,
            force_prev_next_buttons: false,
            auto: false,
            auto_delay_ms: 7000,
            class_names: ClassNames::default(),
        }
    }

    pub fn with_slide_size(mut self, width: u32, height: u32) -> Self {
        self.slide_width = width;
        self.slide_height = height;
        self
    }

    pub fn with_slide_spacing(mut self, spacing: u32) -> Self {
        self.slide_spacing = spacing;
        self
    }

    pub fn with_pagination(mut self, pagination: PaginationMode) -> Self {
        self.pagination = pagination;
        self
    }

    pub fn with_group_slides(mut self, group_slides: bool) -> Self {
        self.group_slides = group_slides;
        self
    }

    pub fn with_transition(mut self, speed_ms: u64, easing: Easing) -> Self {
        self.transition_speed_ms = speed_ms;
        self.easing = easing;
        self
    }

    pub fn with_before_slide_change(
        mut self,
        f: Option<impl Fn(isize, usize, Proceed) -> Option<Proceed> + Send + Sync + 'static>,
    ) -> Self {
        self.before_slide_change = f.map(|f| Arc::new(f) as _);
        self
    }

    pub fn with_after_slide_change(
        mut self,
        f: Option<impl Fn(usize, usize) + Send + Sync + 'static>,
    ) -> Self {
        self.after_slide_change = f.map(|f| Arc::new(f) as _);
        self
    }

    pub fn with_prev_next_buttons(mut self, enabled: bool) -> Self {
        self.prev_next_buttons = enabled;
        self
    }

    pub fn with_infinite(mut self, infinite: bool) -> Self {
        self.infinite = infinite;
        self
    }

    pub fn with_force_prev_next_buttons(mut self, force: bool) -> Self {
        self.force_prev_next_buttons = force;
        self
    }

    /// Enables auto-rotation every `delay_ms`. Only takes effect together with `infinite`.
    pub fn with_auto(mut self, auto: bool, delay_ms: u64) -> Self {
        self.auto = auto;
        self.auto_delay_ms = delay_ms;
        self
    }

    pub fn with_class_names(mut self, class_names: ClassNames) -> Self {
        self.class_names = class_names;
        self
    }

    /// Checks that the geometry is physically meaningful.
    pub fn validate(&self) -> Result<(), OptionsError> {
        if self.visible_items == 0 {
            return Err(OptionsError::NoVisibleItems);
        }
        if self.slide_width == 0 || self.slide_height == 0 {
            return Err(OptionsError::EmptySlide);
        }
        Ok(())
    }

    /// Grouping only makes sense when more than one slide is visible.
    pub(crate) fn normalized(mut self) -> Self {
        if self.visible_items <= 1 {
            self.group_slides = false;
        }
        self
    }
}

impl core::fmt::Debug for CarouselOptions {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("CarouselOptions")
            .field("visible_items", &self.visible_items)
            .field("slide_width", &self.slide_width)
            .field("slide_height", &self.slide_height)
            .field("slide_spacing", &self.slide_spacing)
            .field("pagination", &self.pagination)
            .field("group_slides", &self.group_slides)
            .field("transition_speed_ms", &self.transition_speed_ms)
            .field("easing", &self.easing)
            .field("before_slide_change", &self.before_slide_change.is_some())
            .field("after_slide_change", &self.after_slide_change.is_some())
            .field("prev_next_buttons", &self.prev_next_buttons)
            .field("infinite", &self.infinite)
            .field("force_prev_next_buttons", &self.force_prev_next_buttons)
            .field("auto", &self.auto)
            .field("auto_delay_ms", &self.auto_delay_ms)
            .finish_non_exhaustive()
    }
}

/// Plain-data carousel settings, keyed like the classic widget options
/// (`visibleItems`, `slideWidth`, `autoDelay`, ...).
///
/// Every field has a default, so partial documents are accepted. Hooks cannot be expressed here;
/// attach them to the converted [`CarouselOptions`].
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "camelCase"))]
pub struct CarouselConfig {
    pub visible_items: usize,
    pub slide_width: u32,
    pub slide_height: u32,
    pub slide_spacing: u32,
    /// `true` generates controls; `false` disables pagination.
    pub pagination: bool,
    /// Number of host-rendered pagination controls to reuse instead of generating them.
    pub external_pagination: Option<usize>,
    pub group_slides: bool,
    pub transition_speed: u64,
    pub slide_easing: String,
    pub prev_next_buttons: bool,
    pub infinite: bool,
    pub force_prev_next_buttons: bool,
    pub auto: bool,
    pub auto_delay: u64,
    pub class_names: ClassNames,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        let o = CarouselOptions::default();
        Self {
            visible_items: o.visible_items,
            slide_width: o.slide_width,
            slide_height: o.slide_height,
            slide_spacing: o.slide_spacing,
            pagination: true,
            external_pagination: None,
            group_slides: o.group_slides,
            transition_speed: o.transition_speed_ms,
            slide_easing: String::from(o.easing.name()),
            prev_next_buttons: o.prev_next_buttons,
            infinite: o.infinite,
            force_prev_next_buttons: o.force_prev_next_buttons,
            auto: o.auto,
            auto_delay: o.auto_delay_ms,
            class_names: o.class_names,
        }
    }
}

impl TryFrom<CarouselConfig> for CarouselOptions {
    type Error = OptionsError;

    fn try_from(config: CarouselConfig) -> Result<Self, Self::Error> {
        let easing = config.slide_easing.parse::<Easing>()?;
        let pagination = match (config.pagination, config.external_pagination) {
            (false, _) => PaginationMode::None,
            (true, Some(controls)) => PaginationMode::External { controls },
            (true, None) => PaginationMode::Generated,
        };
        let options = CarouselOptions::new(config.visible_items)
            .with_slide_size(config.slide_width, config.slide_height)
            .with_slide_spacing(config.slide_spacing)
            .with_pagination(pagination)
            .with_group_slides(config.group_slides)
            .with_transition(config.transition_speed, easing)
            .with_prev_next_buttons(config.prev_next_buttons)
            .with_infinite(config.infinite)
            .with_force_prev_next_buttons(config.force_prev_next_buttons)
            .with_auto(config.auto, config.auto_delay)
            .with_class_names(config.class_names);
        options.validate()?;
        Ok(options)
    }
}
