//! Blurred, corner-rounded container background.
//!
//! Two pieces:
//! - [`config`] turns declarative style inputs into an immutable [`BlurConfig`]
//! - [`lifecycle`] owns the host's blur handle while the component is attached
//!
//! [`BlurLayout`] ties both together; a host adapter only needs to construct it
//! and forward attach/detach callbacks.
//!
//! # Quick start
//!
//! ```rust
//! use blur_layout::paint::ColorArgb;
//! use blur_layout::style::RawStyleInputs;
//! use blur_layout::BlurConfig;
//!
//! let config = BlurConfig::resolve(
//!     &RawStyleInputs::new()
//!         .background_color(ColorArgb(0xFF11_2233))
//!         .corner_radius(10.0)
//!         .corner_radius_top_right(5.0),
//! );
//! assert_eq!(config.blur_color(), ColorArgb(0xB311_2233));
//! assert_eq!(config.corner_radii().to_array(), [10.0, 5.0, 10.0, 10.0]);
//! ```

pub mod component;
pub mod config;
pub mod coords;
pub mod error;
pub mod lifecycle;
pub mod logging;
pub mod paint;
pub mod style;

pub use component::BlurLayout;
pub use config::{resolve_corner_radius, BlurConfig};
pub use error::{BlurError, Result};
pub use lifecycle::{BlurHandle, BlurLifecycle, LifecycleState, RenderRoot};
pub use paint::apply_opacity_to_color;
