use std::fmt;

use crate::config::BlurConfig;
use crate::error::Result;
use crate::lifecycle::{BlurLifecycle, RenderRoot};
use crate::style::{RawStyleInputs, StyleAttributes};

/// A container whose background is a rounded, tinted blur.
///
/// Style inputs are resolved once, at construction. The host adapter forwards
/// its attach/detach callbacks to [`on_attached`](Self::on_attached) and
/// [`on_detached`](Self::on_detached); everything else (layout, drawing the
/// children) stays with the host.
///
/// # Example
/// ```rust,ignore
/// let mut layout = BlurLayout::new(
///     RawStyleInputs::new()
///         .background_color(ColorArgb(0xFF20_2020))
///         .corner_radius(16.0),
/// );
/// layout.on_attached(&mut root)?;
/// // ...
/// layout.on_detached();
/// ```
pub struct BlurLayout<R: RenderRoot> {
    config: BlurConfig,
    lifecycle: BlurLifecycle<R::Handle>,
}

impl<R: RenderRoot> BlurLayout<R> {
    pub fn new(raw: RawStyleInputs) -> Self {
        Self::with_config(BlurConfig::resolve(&raw))
    }

    /// Builds from a host attribute set; `None` means no attributes at all.
    pub fn from_attributes(attrs: Option<&StyleAttributes>) -> Self {
        Self::new(RawStyleInputs::from_attributes(attrs))
    }

    pub fn with_config(config: BlurConfig) -> Self {
        Self { config, lifecycle: BlurLifecycle::new() }
    }

    #[inline]
    pub fn config(&self) -> &BlurConfig {
        &self.config
    }

    #[inline]
    pub fn is_attached(&self) -> bool {
        self.lifecycle.is_attached()
    }

    /// The active background renderer, if attached.
    #[inline]
    pub fn background(&self) -> Option<&R::Handle> {
        self.lifecycle.handle()
    }

    pub fn on_attached(&mut self, root: &mut R) -> Result<()> {
        self.lifecycle.on_attached(root, &self.config)
    }

    pub fn on_detached(&mut self) {
        self.lifecycle.on_detached();
    }
}

impl<R: RenderRoot> fmt::Debug for BlurLayout<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BlurLayout")
            .field("config", &self.config)
            .field("state", &self.lifecycle.state())
            .finish()
    }
}
