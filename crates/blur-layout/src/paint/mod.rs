//! Paint model for the blur overlay.
//!
//! Scope:
//! - packed color representation handed to blur primitives
//! - opacity application onto the alpha channel
//!
//! Geometry types remain in `coords`.

pub mod color;

pub use color::ColorArgb;

/// Scales `color`'s alpha channel by `opacity` and writes the result back.
///
/// `alpha * opacity` is rounded half away from zero and clamped to `[0, 255]`.
/// RGB channels are untouched. The alpha channel is replaced, not blended: the
/// original alpha only participates as the scale base.
#[inline]
pub fn apply_opacity_to_color(color: ColorArgb, opacity: f32) -> ColorArgb {
    // Computed in f32 so 255 * 0.7 lands on 178.5.
    let target = color.alpha() as f32 * opacity;
    // NaN saturates to 0 through the cast.
    let alpha = target.round().clamp(0.0, 255.0) as u8;
    color.with_alpha(alpha)
}
