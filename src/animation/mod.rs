//! Easing, outline blending and the hover morph state machine.

/// Timing curves.
pub mod ease;
/// Outline blending.
pub mod interpolate;
/// Run state machine.
pub mod morph;
