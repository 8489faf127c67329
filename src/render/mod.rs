//! CPU rendering of outlines into RGBA8 surfaces.

/// `vello_cpu`-backed rasterizer.
pub mod cpu;
/// Surface buffer type.
pub mod surface;
