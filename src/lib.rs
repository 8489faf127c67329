//! A hover-reactive "notch": a small vector outline that morphs between a collapsed and an
//! expanded shape when the pointer enters or leaves it.
//!
//! # Pipeline overview
//!
//! 1. **Outlines**: two literal [`PathModel`]s with identical segment-tag sequences, checked
//!    once at startup ([`NotchShapes::load`]).
//! 2. **Animate**: [`MorphAnimator`] turns host time ([`Millis`]) into linear progress, eases it
//!    with ease-out-back ([`Ease::OutBack`]) and blends the outlines ([`interpolate`]).
//! 3. **Render**: [`CpuRenderer`] fills the current outline into a premultiplied RGBA8
//!    [`FrameRGBA`], horizontally centered and top-aligned.
//! 4. **Host**: [`NotchWidget`] maps pointer events to runs and drives a [`HostWindow`]'s tick
//!    source and repaint queue.
//!
//! Design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Injected time**: nothing reads a clock; every time-dependent call takes a [`Millis`].
//! - **Single-threaded**: the widget is driven from the host's UI thread only.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod foundation;

pub mod animation;
pub mod path;
pub mod render;
pub mod widget;

pub use crate::foundation::core::{Affine, BezPath, Canvas, Millis, Point, Rect, Vec2};
pub use crate::foundation::error::{NotchError, NotchResult};

pub use crate::animation::ease::Ease;
pub use crate::animation::interpolate::interpolate;
pub use crate::animation::morph::{MorphAnimator, MorphFrame, MorphState, MorphTiming, TickOutcome};
pub use crate::path::model::{PathBuilder, PathModel};
pub use crate::path::segment::{Segment, SegmentKind};
pub use crate::path::shapes::{NotchShapes, collapsed_shape, expanded_shape};
pub use crate::render::cpu::{CpuRenderer, center_offset_x};
pub use crate::render::surface::FrameRGBA;
pub use crate::widget::config::{NotchConfig, default_surface};
pub use crate::widget::host::{HeadlessHost, HostWindow};
pub use crate::widget::notch::NotchWidget;
pub use crate::widget::playback::{HoverScript, PlaybackStats, play};
