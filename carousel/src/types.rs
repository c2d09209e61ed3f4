use core::fmt;
use core::str::FromStr;

use crate::OptionsError;

/// Easing curve applied to slide transitions.
///
/// Names follow the jQuery easing identifiers (`"linear"`, `"swing"`, `"easeOutExpo"`, ...).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub enum Easing {
    Linear,
    Swing,
    SmoothStep,
    EaseInOutCubic,
    #[default]
    EaseOutExpo,
}

impl Easing {
    /// Maps linear progress `t` in `0.0..=1.0` onto the eased progress.
    pub fn sample(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            // `swing` is a cosine ease in jQuery; smoothstep stays within 1% of it.
            Self::Swing | Self::SmoothStep => t * t * (3.0 - 2.0 * t),
            Self::EaseInOutCubic => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    let u = -2.0 * t + 2.0;
                    1.0 - (u * u * u) / 2.0
                }
            }
            Self::EaseOutExpo => {
                if t >= 1.0 {
                    1.0
                } else {
                    1.0 - exp2(-10.0 * t)
                }
            }
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Linear => "linear",
            Self::Swing => "swing",
            Self::SmoothStep => "smoothStep",
            Self::EaseInOutCubic => "easeInOutCubic",
            Self::EaseOutExpo => "easeOutExpo",
        }
    }
}

impl fmt::Display for Easing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Easing {
    type Err = OptionsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "linear" => Ok(Self::Linear),
            "swing" => Ok(Self::Swing),
            "smoothStep" => Ok(Self::SmoothStep),
            "easeInOutCubic" => Ok(Self::EaseInOutCubic),
            "easeOutExpo" => Ok(Self::EaseOutExpo),
            _ => Err(OptionsError::UnknownEasing),
        }
    }
}

// 2^x for x <= 0 without float intrinsics, so the curve works in `no_std`.
fn exp2(x: f32) -> f32 {
    let mut whole = x as i32;
    if whole as f32 > x {
        whole -= 1;
    }
    let y = (x - whole as f32) * core::f32::consts::LN_2;
    let mut term = 1.0f32;
    let mut sum = 1.0f32;
    for n in 1..8 {
        term *= y / n as f32;
        sum += term;
    }
    let mut scale = 1.0f32;
    while whole < 0 {
        scale *= 0.5;
        whole += 1;
    }
    sum * scale
}

/// The two generated navigation buttons.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum NavButton {
    Prev,
    Next,
}

/// Where the pagination controls come from.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PaginationMode {
    /// No pagination controls.
    None,
    /// Controls are generated by the carousel (one per group or per slide).
    #[default]
    Generated,
    /// The host already rendered `controls` pagination elements; the carousel reuses them.
    External { controls: usize },
}

/// Width/height pair in layout units.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Size {
    pub width: u64,
    pub height: u64,
}

/// One entry of the internal slide sequence.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SlideSlot {
    /// Index of the real content item shown in this slot.
    pub real_index: usize,
    /// `true` for the padding copies added around the real items in infinite mode.
    pub is_clone: bool,
}

/// A request for the view to animate the slide strip.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AnimationRequest {
    /// Internal index of the slide that ends up first in the viewport. Negative only in
    /// infinite mode, when stepping back past the leading copies.
    pub index: isize,
    /// Strip offset (CSS `left`) at the end of the transition.
    pub left: i64,
    pub duration_ms: u64,
    pub easing: Easing,
}
