//! Immutable outlines and the two literal notch shapes.

/// Outline container and builder.
pub mod model;
/// Drawing segments.
pub mod segment;
/// Literal collapsed/expanded outlines.
pub mod shapes;
