//! Style inputs as supplied by the host, before resolution.

mod attrs;
mod inputs;

pub use attrs::{StyleAttributes, StyleProp, StyleValue};
pub use inputs::{
    keys, RawStyleInputs, CORNER_RADIUS_UNSET, DEFAULT_BLUR_BACKGROUND_OPACITY,
    DEFAULT_BLUR_RADIUS,
};
