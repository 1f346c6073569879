use anyhow::Context;

use blur_layout::logging::{init_logging, LoggingConfig};
use blur_layout::paint::ColorArgb;
use blur_layout::style::{keys, StyleAttributes};
use blur_layout::{BlurError, BlurHandle, BlurLayout, RenderRoot};

/// Blur handle that only reports what it is told.
#[derive(Debug)]
struct TraceHandle {
    id: u32,
}

impl BlurHandle for TraceHandle {
    fn set_blur_radius(&mut self, radius: u32) {
        log::info!("  handle #{}  set_blur_radius({radius})", self.id);
    }

    fn set_color(&mut self, color: ColorArgb) {
        log::info!("  handle #{}  set_color({color})", self.id);
    }

    fn set_corner_radii(&mut self, top_left: f32, top_right: f32, bottom_left: f32, bottom_right: f32) {
        log::info!(
            "  handle #{}  set_corner_radii({top_left}, {top_right}, {bottom_left}, {bottom_right})",
            self.id
        );
    }
}

impl Drop for TraceHandle {
    fn drop(&mut self) {
        log::info!("  handle #{}  released", self.id);
    }
}

/// Rendering root standing in for a real window surface.
struct TraceRoot {
    next_id: u32,
    blur_supported: bool,
}

impl RenderRoot for TraceRoot {
    type Handle = TraceHandle;

    fn create_blur_handle(&mut self) -> blur_layout::Result<TraceHandle> {
        if !self.blur_supported {
            return Err(BlurError::unavailable("cross-window blur disabled"));
        }
        let id = self.next_id;
        self.next_id += 1;
        log::info!("  root       create_blur_handle() -> #{id}");
        Ok(TraceHandle { id })
    }

    fn install_background(&mut self, handle: &TraceHandle) {
        log::info!("  root       install_background(#{})", handle.id);
    }
}

fn main() -> anyhow::Result<()> {
    init_logging(LoggingConfig::default());

    let blur_supported = !std::env::args().any(|a| a == "--no-blur");

    let attrs = StyleAttributes::new()
        .with_color(keys::BACKGROUND_COLOUR, ColorArgb(0xFF11_2233))
        .with_number(keys::BLUR_RADIUS, 40.0)
        .with_number(keys::CORNER_RADIUS, 24.0)
        .with_number(keys::CORNER_RADIUS_BOTTOM_LEFT, 0.0)
        .with_number(keys::CORNER_RADIUS_BOTTOM_RIGHT, 0.0);

    let mut layout = BlurLayout::<TraceRoot>::from_attributes(Some(&attrs));
    let mut root = TraceRoot { next_id: 1, blur_supported };

    let cfg = layout.config();
    println!();
    println!("  background  {}", cfg.background_color());
    println!("  opacity     {}", cfg.opacity());
    let (r, g, b, a) = cfg.blur_color().to_straight();
    println!("  overlay     {}  (rgba {r:.3}, {g:.3}, {b:.3}, {a:.3})", cfg.blur_color());
    println!("  blur radius {}", cfg.blur_radius());
    println!("  corners     {:?}", cfg.corner_radii().to_array());
    println!();

    for cycle in 1..=2 {
        log::info!("attach (cycle {cycle})");
        layout
            .on_attached(&mut root)
            .with_context(|| format!("attaching blur background, cycle {cycle}"))?;

        log::info!("detach (cycle {cycle})");
        layout.on_detached();
    }

    // Absorbed: nothing is attached any more.
    layout.on_detached();

    Ok(())
}
