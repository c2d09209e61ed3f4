//! Adapter utilities for the `carousel` crate.
//!
//! The `carousel` crate is UI-agnostic and focuses on navigation state and index math. This
//! crate provides small, framework-neutral helpers commonly needed by adapters:
//!
//! - Tween-based strip animation with the carousel's easing curves
//! - A retained view model ([`TweenView`]) a renderer can draw from
//! - A tick-driven [`Driver`] that settles transitions and runs auto-rotation
//!
//! This crate is intentionally framework-agnostic (no DOM/egui/ratatui bindings).
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

mod driver;
mod tween;
mod view;

#[cfg(test)]
mod tests;

pub use driver::Driver;
pub use tween::Tween;
pub use view::{ButtonState, Scene, TweenView};
