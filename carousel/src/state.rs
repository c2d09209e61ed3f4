/// A lightweight, serializable snapshot of the carousel state.
///
/// With `feature = "serde"`, this type implements `Serialize`/`Deserialize`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CarouselState {
    /// Number of real (non-cloned) slides.
    pub total_slides: usize,
    /// Internal index of the first visible slide.
    pub current_slide: usize,
    /// Real-content index of the first visible slide.
    pub virtual_slide: usize,
    pub slide_adjustment: usize,
    pub is_animating: bool,
    pub auto_timer_active: bool,
}
