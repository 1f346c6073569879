//! Recording host used by the lifecycle and component tests.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use crate::error::{BlurError, Result};
use crate::paint::ColorArgb;

use super::host::{BlurHandle, RenderRoot};

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Call {
    Create(usize),
    BlurRadius(usize, u32),
    Color(usize, ColorArgb),
    CornerRadii(usize, [f32; 4]),
    Install(usize),
}

pub(crate) type CallLog = Rc<RefCell<Vec<Call>>>;

#[derive(Debug)]
pub(crate) struct FakeHandle {
    pub id: usize,
    pub blur_radius: Option<u32>,
    pub color: Option<ColorArgb>,
    pub corner_radii: Option<[f32; 4]>,
    calls: CallLog,
    _alive: Rc<()>,
}

impl BlurHandle for FakeHandle {
    fn set_blur_radius(&mut self, radius: u32) {
        self.blur_radius = Some(radius);
        self.calls.borrow_mut().push(Call::BlurRadius(self.id, radius));
    }

    fn set_color(&mut self, color: ColorArgb) {
        self.color = Some(color);
        self.calls.borrow_mut().push(Call::Color(self.id, color));
    }

    fn set_corner_radii(&mut self, top_left: f32, top_right: f32, bottom_left: f32, bottom_right: f32) {
        let r = [top_left, top_right, bottom_left, bottom_right];
        self.corner_radii = Some(r);
        self.calls.borrow_mut().push(Call::CornerRadii(self.id, r));
    }
}

/// Hands out numbered handles and records every call in order.
///
/// `liveness[i]` goes dead once handle `i` is dropped, which lets tests prove
/// the controller no longer holds it.
#[derive(Debug, Default)]
pub(crate) struct FakeRoot {
    pub calls: CallLog,
    pub liveness: Vec<Weak<()>>,
    pub unavailable: bool,
    /// Snapshot of each handle's configuration at install time.
    pub installed: Vec<(usize, Option<u32>, Option<ColorArgb>, Option<[f32; 4]>)>,
}

impl FakeRoot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn unavailable() -> Self {
        Self { unavailable: true, ..Self::default() }
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    pub fn is_alive(&self, id: usize) -> bool {
        self.liveness[id].upgrade().is_some()
    }
}

impl RenderRoot for FakeRoot {
    type Handle = FakeHandle;

    fn create_blur_handle(&mut self) -> Result<FakeHandle> {
        if self.unavailable {
            return Err(BlurError::unavailable("fake surface offline"));
        }
        let id = self.liveness.len();
        let alive = Rc::new(());
        self.liveness.push(Rc::downgrade(&alive));
        self.calls.borrow_mut().push(Call::Create(id));
        Ok(FakeHandle {
            id,
            blur_radius: None,
            color: None,
            corner_radii: None,
            calls: Rc::clone(&self.calls),
            _alive: alive,
        })
    }

    fn install_background(&mut self, handle: &FakeHandle) {
        self.installed
            .push((handle.id, handle.blur_radius, handle.color, handle.corner_radii));
        self.calls.borrow_mut().push(Call::Install(handle.id));
    }
}
