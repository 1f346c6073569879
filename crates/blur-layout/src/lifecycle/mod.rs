//! Blur handle lifecycle.
//!
//! This module is responsible for:
//! - the host-facing traits for the blur primitive and its rendering root
//! - creating and configuring a handle when the component is attached
//! - dropping it when the component is detached

mod controller;
mod host;

#[cfg(test)]
pub(crate) mod fake;

pub use controller::{BlurLifecycle, LifecycleState};
pub use host::{BlurHandle, RenderRoot};
