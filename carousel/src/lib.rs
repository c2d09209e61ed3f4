//! A headless carousel engine.
//!
//! For adapter-level utilities (tweens, a retained view, a tick driver), see the
//! `carousel-adapter` crate.
//!
//! This crate owns the parts of a carousel that are actually stateful: the navigation state
//! machine, clone padding and virtual/internal index translation for infinite looping, the
//! before/after slide-change hooks, pagination and prev/next state, and the auto-rotation timer.
//!
//! It is UI-agnostic. A DOM/TUI/GUI layer implements [`ViewAdapter`] and is expected to:
//! - build the wrapper, strip and controls it is asked for
//! - move the strip when asked (animated or not)
//! - report animation completion and user clicks back to the [`Carousel`]
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod autoplay;
mod carousel;
mod error;
mod hook;
mod index;
mod layout;
mod options;
mod pagination;
mod state;
mod types;
mod view;


pub use autoplay::AutoRotation;
pub use carousel::Carousel;
pub use error::OptionsError;
pub use hook::Proceed;
pub use index::SlideIndex;
pub use layout::Layout;
pub use options::{
    AfterSlideChangeCallback, BeforeSlideChangeCallback, CarouselConfig, CarouselOptions,
    ClassNames,
};
pub use pagination::Pagination;
pub use state::CarouselState;
pub use types::{AnimationRequest, Easing, NavButton, PaginationMode, Size, SlideSlot};
pub use view::{Animation, HeadlessView, ViewAdapter};
