use crate::paint::ColorArgb;

use super::attrs::StyleAttributes;

/// Opacity applied to the background color while blur is active.
pub const DEFAULT_BLUR_BACKGROUND_OPACITY: f32 = 0.7;
/// Blur strength in the primitive's native units.
pub const DEFAULT_BLUR_RADIUS: u32 = 25;
/// Per-corner sentinel meaning "fall back to the all-corners radius".
pub const CORNER_RADIUS_UNSET: f32 = -1.0;

/// Attribute keys read by [`RawStyleInputs::from_attributes`].
pub mod keys {
    pub const BACKGROUND_COLOUR: &str = "background_colour";
    pub const BLUR_BACKGROUND_COLOUR_OPACITY: &str = "blur_background_colour_opacity";
    pub const BLUR_RADIUS: &str = "blur_radius";
    pub const CORNER_RADIUS: &str = "corner_radius";
    pub const CORNER_RADIUS_TOP_LEFT: &str = "corner_radius_top_left";
    pub const CORNER_RADIUS_TOP_RIGHT: &str = "corner_radius_top_right";
    pub const CORNER_RADIUS_BOTTOM_LEFT: &str = "corner_radius_bottom_left";
    pub const CORNER_RADIUS_BOTTOM_RIGHT: &str = "corner_radius_bottom_right";
}

/// Unresolved style inputs, consumed once when the component is built.
///
/// Every field has a default, so an empty `RawStyleInputs` resolves to a
/// transparent, unrounded blur of strength 25.
///
/// # Example
/// ```rust
/// use blur_layout::style::RawStyleInputs;
/// use blur_layout::paint::ColorArgb;
///
/// let raw = RawStyleInputs::new()
///     .background_color(ColorArgb(0xFF11_2233))
///     .corner_radius(10.0)
///     .corner_radius_top_right(5.0);
/// assert_eq!(raw.corner_radius_top_right, Some(5.0));
/// ```
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct RawStyleInputs {
    pub background_color: ColorArgb,
    pub opacity: f32,
    pub blur_radius: u32,
    /// Radius used for every corner that has no usable override.
    pub corner_radius: f32,
    /// `None`, or a negative value, means unset.
    pub corner_radius_top_left: Option<f32>,
    pub corner_radius_top_right: Option<f32>,
    pub corner_radius_bottom_left: Option<f32>,
    pub corner_radius_bottom_right: Option<f32>,
}

impl RawStyleInputs {
    pub fn new() -> Self {
        Self {
            background_color: ColorArgb::TRANSPARENT,
            opacity: DEFAULT_BLUR_BACKGROUND_OPACITY,
            blur_radius: DEFAULT_BLUR_RADIUS,
            corner_radius: 0.0,
            corner_radius_top_left: None,
            corner_radius_top_right: None,
            corner_radius_bottom_left: None,
            corner_radius_bottom_right: None,
        }
    }

    /// Reads inputs from a host attribute set.
    ///
    /// `None` means the host supplied no attribute set at all; every field
    /// then takes its default. Keys holding the wrong kind of value are
    /// treated as absent. The blur radius is rounded to a whole number and
    /// corner radii to whole pixel sizes (see [`StyleAttributes::get_pixel_size`]).
    pub fn from_attributes(attrs: Option<&StyleAttributes>) -> Self {
        let Some(a) = attrs else {
            return Self::new();
        };
        let defaults = Self::new();

        Self {
            background_color: a
                .get_color(keys::BACKGROUND_COLOUR)
                .unwrap_or(defaults.background_color),
            opacity: a
                .get_f32(keys::BLUR_BACKGROUND_COLOUR_OPACITY)
                .unwrap_or(defaults.opacity),
            blur_radius: a
                .get_rounded(keys::BLUR_RADIUS)
                .map(|r| r.max(0.0) as u32)
                .unwrap_or(defaults.blur_radius),
            corner_radius: a
                .get_pixel_size(keys::CORNER_RADIUS)
                .unwrap_or(defaults.corner_radius),
            corner_radius_top_left: a.get_pixel_size(keys::CORNER_RADIUS_TOP_LEFT),
            corner_radius_top_right: a.get_pixel_size(keys::CORNER_RADIUS_TOP_RIGHT),
            corner_radius_bottom_left: a.get_pixel_size(keys::CORNER_RADIUS_BOTTOM_LEFT),
            corner_radius_bottom_right: a.get_pixel_size(keys::CORNER_RADIUS_BOTTOM_RIGHT),
        }
    }

    pub fn background_color(mut self, color: ColorArgb) -> Self {
        self.background_color = color;
        self
    }

    pub fn opacity(mut self, opacity: f32) -> Self {
        self.opacity = opacity;
        self
    }

    pub fn blur_radius(mut self, radius: u32) -> Self {
        self.blur_radius = radius;
        self
    }

    pub fn corner_radius(mut self, r: f32) -> Self {
        self.corner_radius = r;
        self
    }

    pub fn corner_radius_top_left(mut self, r: f32) -> Self {
        self.corner_radius_top_left = Some(r);
        self
    }

    pub fn corner_radius_top_right(mut self, r: f32) -> Self {
        self.corner_radius_top_right = Some(r);
        self
    }

    pub fn corner_radius_bottom_left(mut self, r: f32) -> Self {
        self.corner_radius_bottom_left = Some(r);
        self
    }

    pub fn corner_radius_bottom_right(mut self, r: f32) -> Self {
        self.corner_radius_bottom_right = Some(r);
        self
    }
}

impl Default for RawStyleInputs {
    fn default() -> Self {
        Self::new()
    }
}
