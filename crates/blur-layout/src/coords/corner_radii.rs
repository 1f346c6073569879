/// Per-corner radii for the blurred background (logical pixels).
///
/// Corners follow the blur primitive's argument order: top-left, top-right,
/// bottom-left, bottom-right. This differs from the CSS clockwise order.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct CornerRadii {
    pub top_left: f32,
    pub top_right: f32,
    pub bottom_left: f32,
    pub bottom_right: f32,
}

impl CornerRadii {
    #[inline]
    pub const fn new(top_left: f32, top_right: f32, bottom_left: f32, bottom_right: f32) -> Self {
        Self { top_left, top_right, bottom_left, bottom_right }
    }

    /// Uniform radius on all four corners.
    #[inline]
    pub const fn all(r: f32) -> Self {
        Self { top_left: r, top_right: r, bottom_left: r, bottom_right: r }
    }

    /// No rounding.
    #[inline]
    pub const fn zero() -> Self {
        Self::all(0.0)
    }

    #[inline]
    pub fn is_uniform(self) -> bool {
        self.top_left == self.top_right
            && self.top_left == self.bottom_left
            && self.top_left == self.bottom_right
    }

    /// `[top_left, top_right, bottom_left, bottom_right]`
    #[inline]
    pub const fn to_array(self) -> [f32; 4] {
        [self.top_left, self.top_right, self.bottom_left, self.bottom_right]
    }
}
