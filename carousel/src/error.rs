use thiserror::Error;

/// Reasons a carousel cannot be constructed from a set of options.
///
/// Navigation itself never fails: out-of-range requests are clamped or dropped.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum OptionsError {
    #[error("`visible_items` must be at least 1")]
    NoVisibleItems,
    #[error("slide width and height must be non-zero")]
    EmptySlide,
    #[error("unknown easing name")]
    UnknownEasing,
}
