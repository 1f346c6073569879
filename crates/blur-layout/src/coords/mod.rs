//! Geometry types shared by the resolver and the blur primitive boundary.
//!
//! Canonical space is logical pixels, origin top-left.

mod corner_radii;

pub use corner_radii::CornerRadii;
