use glam::Vec2;
use web_sys as web;

/// Pointer drag tracking for orbit controls.
#[derive(Default, Clone, Copy, Debug)]
pub struct PointerState {
    pub x: f32,
    pub y: f32,
    pub down: bool,
    pub pointer_id: i32,
}

impl PointerState {
    pub fn press(&mut self, pos: Vec2, pointer_id: i32) {
        self.x = pos.x;
        self.y = pos.y;
        self.down = true;
        self.pointer_id = pointer_id;
    }

    /// Move to `pos`; returns the drag delta when a press is active.
    pub fn drag_to(&mut self, pos: Vec2) -> Option<Vec2> {
        let delta = Vec2::new(pos.x - self.x, pos.y - self.y);
        self.x = pos.x;
        self.y = pos.y;
        (self.down && delta.is_finite()).then_some(delta)
    }

    pub fn release(&mut self) {
        self.down = false;
    }
}

/// Normalize a wheel delta to pixels. Line and page modes are scaled by
/// typical browser sizes.
#[inline]
pub fn wheel_delta_px(delta_y: f64, delta_mode: u32) -> f32 {
    let scale = match delta_mode {
        1 => 16.0,  // DOM_DELTA_LINE
        2 => 800.0, // DOM_DELTA_PAGE
        _ => 1.0,
    };
    (delta_y * scale) as f32
}

#[inline]
pub fn pointer_canvas_px(ev: &web::MouseEvent, canvas: &web::HtmlCanvasElement) -> Vec2 {
    let rect = canvas.get_bounding_client_rect();
    let x_css = ev.client_x() as f32 - rect.left() as f32;
    let y_css = ev.client_y() as f32 - rect.top() as f32;
    let w = rect.width() as f32;
    let h = rect.height() as f32;
    if w <= 0.0 || h <= 0.0 {
        return Vec2::new(x_css, y_css);
    }
    let sx = (x_css / w) * canvas.width() as f32;
    let sy = (y_css / h) * canvas.height() as f32;
    Vec2::new(sx, sy)
}
