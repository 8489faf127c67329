//! Host-facing widget: pointer events in, repaint requests and pixels out.

/// Runtime settings.
pub mod config;
/// Host window boundary.
pub mod host;
/// The notch widget.
pub mod notch;
/// Headless hover playback on a virtual clock.
pub mod playback;
