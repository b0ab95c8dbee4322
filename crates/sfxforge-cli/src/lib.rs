//! SFXForge CLI library.
//!
//! Command implementations for the `sfxforge` binary: single-sound
//! generation, recipe rendering, the placeholder preset, and WAV inspection.

pub mod commands;
