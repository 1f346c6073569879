use crate::config::BlurConfig;
use crate::error::Result;

use super::host::{BlurHandle, RenderRoot};

/// Attachment state of a component's blur background.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum LifecycleState {
    /// No handle exists.
    Detached,
    /// Exactly one live, fully configured handle exists.
    Attached,
}

/// Owns at most one blur handle, scoped to the component's attachment.
///
/// Handles are never reused: every attach requests a new one from the host,
/// and detaching just drops the reference. Freeing the underlying resources is
/// the host's job.
#[derive(Debug)]
pub struct BlurLifecycle<H: BlurHandle> {
    handle: Option<H>,
}

impl<H: BlurHandle> BlurLifecycle<H> {
    pub fn new() -> Self {
        Self { handle: None }
    }

    #[inline]
    pub fn state(&self) -> LifecycleState {
        if self.handle.is_some() {
            LifecycleState::Attached
        } else {
            LifecycleState::Detached
        }
    }

    #[inline]
    pub fn is_attached(&self) -> bool {
        self.handle.is_some()
    }

    /// The installed background handle, if attached.
    #[inline]
    pub fn handle(&self) -> Option<&H> {
        self.handle.as_ref()
    }

    /// Creates, configures and installs a new handle from `config`.
    ///
    /// Order is fixed: blur radius, color (opacity baked in), corner radii,
    /// then installation. The handle only becomes observable through
    /// [`handle`](Self::handle) once all of that has happened.
    ///
    /// On error the controller is left detached and the error is returned
    /// unchanged.
    pub fn on_attached<R>(&mut self, root: &mut R, config: &BlurConfig) -> Result<()>
    where
        R: RenderRoot<Handle = H>,
    {
        // Hosts should detach first; never keep two handles around.
        if self.handle.take().is_some() {
            log::warn!("blur background attached twice; discarding previous handle");
        }

        let mut handle = root.create_blur_handle()?;

        let radii = config.corner_radii();
        handle.set_blur_radius(config.blur_radius());
        handle.set_color(config.blur_color());
        handle.set_corner_radii(radii.top_left, radii.top_right, radii.bottom_left, radii.bottom_right);

        root.install_background(&handle);
        self.handle = Some(handle);

        if radii.is_uniform() {
            log::debug!(
                "blur background attached: radius={} color={} corners={}",
                config.blur_radius(),
                config.blur_color(),
                radii.top_left,
            );
        } else {
            log::debug!(
                "blur background attached: radius={} color={} corners={:?}",
                config.blur_radius(),
                config.blur_color(),
                radii.to_array(),
            );
        }
        Ok(())
    }

    /// Releases the handle. A no-op when already detached.
    pub fn on_detached(&mut self) {
        match self.handle.take() {
            Some(_) => log::debug!("blur background detached"),
            None => log::trace!("detach without a live blur handle ignored"),
        }
    }
}

impl<H: BlurHandle> Default for BlurLifecycle<H> {
    fn default() -> Self {
        Self::new()
    }
}
