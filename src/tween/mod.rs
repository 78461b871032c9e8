//! Continuous-time presentation of discrete grid moves
//!
//! Each move starts one tween per segment; the host advances them every frame.

pub mod easing;
pub mod interpolator;

pub use easing::Easing;
pub use interpolator::{Interpolator, Tween};
