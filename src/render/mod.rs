//! Canvas2D painters. Each reads state from `crate::core` and only draws.

mod helpers;

pub mod favicon;
pub mod globe;
pub mod particles;
pub mod waveform;
