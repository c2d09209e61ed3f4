use crate::{CarouselOptions, SlideIndex, Size};

/// Geometry of the carousel, derived once from the options and the slide count.
///
/// The strip holds every slide edge to edge; each slide carries half the spacing on either
/// side (rounded down on the left, up on the right). Strip offsets are CSS-style `left`
/// values: moving to later slides makes them more negative.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Layout {
    /// The clipping viewport, sized to exactly the visible slides.
    pub wrapper: Size,
    /// The scrolling strip holding all slides (clones included).
    pub strip: Size,
    pub slide: Size,
    pub margin_left: u32,
    pub margin_right: u32,
    /// Strip offset before any transition.
    pub initial_left: i64,
    pitch: i64,
    lead: i64,
    total: usize,
}

impl Layout {
    pub fn new(options: &CarouselOptions, index: &SlideIndex) -> Self {
        let width = options.slide_width as u64;
        let height = options.slide_height as u64;
        let spacing = options.slide_spacing as u64;

        let shown = index.total().min(options.visible_items) as u64;
        let wrapper_width = if shown == 0 {
            0
        } else {
            shown * width + (shown - 1) * spacing
        };

        let pitch = (width + spacing) as i64;
        let lead = (spacing / 2) as i64;
        let mut layout = Self {
            wrapper: Size {
                width: wrapper_width,
                height,
            },
            strip: Size {
                width: index.padded_len() as u64 * (width + spacing),
                height,
            },
            slide: Size { width, height },
            margin_left: options.slide_spacing / 2,
            margin_right: options.slide_spacing.div_ceil(2),
            initial_left: 0,
            pitch,
            lead,
            total: index.total(),
        };
        layout.initial_left = layout.left_for(index.initial_slide() as isize);
        layout
    }

    /// Strip offset that puts internal slide `index` at the start of the viewport.
    pub fn left_for(&self, index: isize) -> i64 {
        -(self.pitch * index as i64) - self.lead
    }

    /// Width of one full set of real slides; the distance of a loop re-anchor.
    pub fn loop_width(&self) -> i64 {
        self.pitch * self.total as i64
    }
}
