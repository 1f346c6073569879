//! Resolution of raw style inputs into an immutable [`BlurConfig`].
//!
//! Resolution is a single pure pass: no I/O, no logging, no failure modes.
//! Each corner radius is picked once here and never recomputed.

use crate::coords::CornerRadii;
use crate::paint::{apply_opacity_to_color, ColorArgb};
use crate::style::RawStyleInputs;

/// Picks the radius for one corner.
///
/// A present, non-negative override wins. Anything else (absent, or a
/// negative "unset" sentinel such as `-1`) falls back to `all_corners`.
/// Negative or NaN `all_corners` resolves to `0`. A `-0.0` override is not
/// strictly negative, so it wins and comes back as `0.0`.
#[inline]
pub fn resolve_corner_radius(all_corners: f32, per_corner: Option<f32>) -> f32 {
    match per_corner {
        Some(r) if r >= 0.0 => r + 0.0,
        _ => all_corners.max(0.0) + 0.0,
    }
}

/// Fully resolved blur parameters.
///
/// Fields are private: a `BlurConfig` is read-only once built, and changing a
/// value means building a new one.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct BlurConfig {
    background_color: ColorArgb,
    opacity: f32,
    blur_radius: u32,
    corner_radii: CornerRadii,
}

impl BlurConfig {
    pub fn resolve(raw: &RawStyleInputs) -> Self {
        let all = raw.corner_radius;
        Self {
            background_color: raw.background_color,
            opacity: raw.opacity,
            blur_radius: raw.blur_radius,
            corner_radii: CornerRadii::new(
                resolve_corner_radius(all, raw.corner_radius_top_left),
                resolve_corner_radius(all, raw.corner_radius_top_right),
                resolve_corner_radius(all, raw.corner_radius_bottom_left),
                resolve_corner_radius(all, raw.corner_radius_bottom_right),
            ),
        }
    }

    #[inline]
    pub fn background_color(&self) -> ColorArgb {
        self.background_color
    }

    #[inline]
    pub fn opacity(&self) -> f32 {
        self.opacity
    }

    #[inline]
    pub fn blur_radius(&self) -> u32 {
        self.blur_radius
    }

    #[inline]
    pub fn corner_radii(&self) -> CornerRadii {
        self.corner_radii
    }

    /// The color handed to the blur primitive: background with opacity baked
    /// into its alpha channel.
    #[inline]
    pub fn blur_color(&self) -> ColorArgb {
        apply_opacity_to_color(self.background_color, self.opacity)
    }
}

impl Default for BlurConfig {
    fn default() -> Self {
        Self::resolve(&RawStyleInputs::default())
    }
}

impl From<&RawStyleInputs> for BlurConfig {
    fn from(raw: &RawStyleInputs) -> Self {
        Self::resolve(raw)
    }
}

impl From<RawStyleInputs> for BlurConfig {
    fn from(raw: RawStyleInputs) -> Self {
        Self::resolve(&raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::CORNER_RADIUS_UNSET;

    // ── resolve_corner_radius ─────────────────────────────────────────────

    #[test]
    fn override_wins_when_non_negative() {
        for (all, o) in [(10.0, 5.0), (0.0, 3.0), (8.0, 0.0), (2.0, 40.0)] {
            assert_eq!(resolve_corner_radius(all, Some(o)), o);
        }
    }

    #[test]
    fn negative_override_falls_back() {
        for (all, o) in [(10.0, -1.0), (0.0, -1.0), (4.0, -0.5), (7.0, f32::NEG_INFINITY)] {
            assert_eq!(resolve_corner_radius(all, Some(o)), all);
        }
    }

    #[test]
    fn missing_override_falls_back() {
        assert_eq!(resolve_corner_radius(12.0, None), 12.0);
    }

    #[test]
    fn nothing_supplied_is_zero() {
        assert_eq!(resolve_corner_radius(0.0, None), 0.0);
        assert_eq!(resolve_corner_radius(0.0, Some(CORNER_RADIUS_UNSET)), 0.0);
    }

    #[test]
    fn negative_zero_override_resolves_to_positive_zero() {
        let r = resolve_corner_radius(10.0, Some(-0.0));
        assert_eq!(r, 0.0);
        assert!(r.is_sign_positive());
    }

    #[test]
    fn nan_override_falls_back() {
        assert_eq!(resolve_corner_radius(6.0, Some(f32::NAN)), 6.0);
    }

    // ── BlurConfig ────────────────────────────────────────────────────────

    #[test]
    fn default_config() {
        let c = BlurConfig::default();
        assert_eq!(c.background_color(), ColorArgb::TRANSPARENT);
        assert_eq!(c.opacity(), 0.7);
        assert_eq!(c.blur_radius(), 25);
        assert_eq!(c.corner_radii(), CornerRadii::zero());
    }

    #[test]
    fn corners_resolve_independently() {
        let raw = RawStyleInputs::new()
            .corner_radius(10.0)
            .corner_radius_top_left(CORNER_RADIUS_UNSET)
            .corner_radius_top_right(5.0);
        let r = BlurConfig::resolve(&raw).corner_radii();
        assert_eq!(r.top_left, 10.0);
        assert_eq!(r.top_right, 5.0);
        assert_eq!(r.bottom_left, 10.0);
        assert_eq!(r.bottom_right, 10.0);
    }

    #[test]
    fn each_corner_can_differ() {
        let raw = RawStyleInputs::new()
            .corner_radius_top_left(1.0)
            .corner_radius_top_right(2.0)
            .corner_radius_bottom_left(3.0)
            .corner_radius_bottom_right(4.0);
        assert_eq!(BlurConfig::from(raw).corner_radii().to_array(), [1.0, 2.0, 3.0, 4.0]);
    }

    #[test]
    fn blur_color_bakes_opacity() {
        let raw = RawStyleInputs::new().background_color(ColorArgb(0xFF11_2233));
        let c = BlurConfig::resolve(&raw);
        assert_eq!(c.background_color(), ColorArgb(0xFF11_2233));
        assert_eq!(c.blur_color(), ColorArgb(0xB311_2233));
    }

    #[test]
    fn resolution_is_deterministic() {
        let raw = RawStyleInputs::new().corner_radius(3.0).opacity(0.25).blur_radius(9);
        assert_eq!(BlurConfig::resolve(&raw), BlurConfig::resolve(&raw));
    }
}
