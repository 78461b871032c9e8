use std::f32::consts::FRAC_PI_2;

use serde::{Deserialize, Serialize};

/// Easing curves mapping linear progress in [0, 1] to eased progress
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Easing {
    Linear,
    /// Sinusoidal ease-out
    #[default]
    SineOut,
    /// Quadratic ease-out
    QuadOut,
}

impl Easing {
    pub fn apply(&self, k: f32) -> f32 {
        let k = k.clamp(0.0, 1.0);
        match self {
            Easing::Linear => k,
            Easing::SineOut => (k * FRAC_PI_2).sin(),
            Easing::QuadOut => k * (2.0 - k),
        }
    }
}
