pub mod form;
pub mod globe;
pub mod nav;
pub mod particles;
pub mod reveal;
pub mod waveform;
