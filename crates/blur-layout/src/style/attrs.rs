use crate::paint::ColorArgb;

// ── StyleValue ────────────────────────────────────────────────────────────

/// A typed value produced by the host's style lookup.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum StyleValue {
    /// Packed color: `#aarrggbb`
    Color(ColorArgb),
    /// Numeric literal; integers and pixel sizes are carried as `f32` too.
    Number(f32),
}

// ── StyleAttributes ───────────────────────────────────────────────────────

/// A single `key: value` entry.
#[derive(Debug, Clone, PartialEq)]
pub struct StyleProp {
    pub key: String,
    pub value: StyleValue,
}

/// Key/value style set already resolved by the host.
///
/// On duplicate keys the first entry wins.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StyleAttributes {
    pub props: Vec<StyleProp>,
}

impl StyleAttributes {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: impl Into<String>, value: StyleValue) -> Self {
        self.props.push(StyleProp { key: key.into(), value });
        self
    }

    pub fn with_number(self, key: impl Into<String>, v: f32) -> Self {
        self.with(key, StyleValue::Number(v))
    }

    pub fn with_color(self, key: impl Into<String>, c: ColorArgb) -> Self {
        self.with(key, StyleValue::Color(c))
    }

    /// Look up a value by key.
    pub fn get(&self, key: &str) -> Option<&StyleValue> {
        self.props.iter().find(|p| p.key == key).map(|p| &p.value)
    }

    /// Get a value as `f32` if it is a `Number`.
    pub fn get_f32(&self, key: &str) -> Option<f32> {
        match self.get(key)? {
            StyleValue::Number(v) => Some(*v),
            _ => None,
        }
    }

    /// Get a value as a whole number, rounded half away from zero.
    pub fn get_rounded(&self, key: &str) -> Option<f32> {
        self.get_f32(key).map(f32::round)
    }

    /// Get a value as a whole pixel size.
    ///
    /// Rounds half away from zero, but a nonzero input never collapses to
    /// zero: `0.3` becomes `1` and `-0.4` becomes `-1`, so a negative "unset"
    /// value stays negative.
    pub fn get_pixel_size(&self, key: &str) -> Option<f32> {
        self.get_f32(key).map(pixel_size)
    }

    /// Get a value as `ColorArgb` if it is a `Color`.
    pub fn get_color(&self, key: &str) -> Option<ColorArgb> {
        match self.get(key)? {
            StyleValue::Color(c) => Some(*c),
            _ => None,
        }
    }
}

fn pixel_size(v: f32) -> f32 {
    if v > 0.0 {
        v.round().max(1.0)
    } else if v < 0.0 {
        v.round().min(-1.0)
    } else {
        // 0, -0.0 and NaN
        0.0
    }
}
