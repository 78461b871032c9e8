//! Tween Snake - grid snake simulation with interpolated motion
//!
//! This library provides:
//! - Discrete grid simulation and the frame-driven session (game module)
//! - Per-segment position tweening (tween module)
//! - Key latching and terminal key translation (input module)
//! - A terminal host: rendering, stats and the play loop (render, metrics, modes)

pub mod game;
pub mod input;
pub mod metrics;
pub mod modes;
pub mod render;
pub mod tween;
