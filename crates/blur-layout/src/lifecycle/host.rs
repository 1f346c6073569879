use crate::error::Result;
use crate::paint::ColorArgb;

/// A blur-rendering primitive handed out by the host.
///
/// The blur algorithm behind it is opaque; this trait is only the call
/// contract used to configure it.
pub trait BlurHandle {
    fn set_blur_radius(&mut self, radius: u32);

    /// `color` already has the overlay opacity baked into its alpha channel.
    fn set_color(&mut self, color: ColorArgb);

    fn set_corner_radii(&mut self, top_left: f32, top_right: f32, bottom_left: f32, bottom_right: f32);
}

/// The rendering root a component is attached to.
///
/// Injected at attach time instead of looked up globally, so the lifecycle can
/// run against any host (or a fake in tests).
pub trait RenderRoot {
    type Handle: BlurHandle;

    /// Requests a fresh, unconfigured blur handle.
    ///
    /// Fails when the rendering surface cannot provide one. Callers do not
    /// retry.
    fn create_blur_handle(&mut self) -> Result<Self::Handle>;

    /// Makes `handle` the active background renderer of the component.
    ///
    /// Called exactly once per handle, after it is fully configured.
    fn install_background(&mut self, handle: &Self::Handle);
}
