use glam::{EulerRot, Mat4, Vec2};

/// Per-frame increments for the constellation group and its glow.
#[derive(Clone, Debug)]
pub struct AnimationParams {
    /// Radians added to the group's X/Y rotation each frame.
    pub rotation_step: Vec2,
    /// Hue advance per frame, in turns.
    pub hue_step: f32,
    pub saturation: f32,
    pub lightness: f32,
    pub emissive_intensity: f32,
}

impl Default for AnimationParams {
    fn default() -> Self {
        Self {
            rotation_step: Vec2::new(0.0005, 0.001),
            hue_step: 0.001,
            saturation: 1.0,
            lightness: 0.5,
            emissive_intensity: 1.2,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct AnimationState {
    pub rotation: Vec2,
    /// Always in `[0, 1)`.
    pub hue: f32,
    pub frames: u64,
}

impl AnimationState {
    pub fn advance(&mut self, params: &AnimationParams) {
        self.rotation += params.rotation_step;
        self.hue = (self.hue + params.hue_step).rem_euclid(1.0);
        // rem_euclid can round up to exactly 1.0 for tiny negative inputs
        if self.hue >= 1.0 {
            self.hue = 0.0;
        }
        self.frames = self.frames.wrapping_add(1);
    }

    /// Model matrix for the whole group (spheres, edges, labels).
    pub fn group_matrix(&self) -> Mat4 {
        Mat4::from_euler(EulerRot::XYZ, self.rotation.x, self.rotation.y, 0.0)
    }

    pub fn emissive_rgb(&self, params: &AnimationParams) -> [f32; 3] {
        let [r, g, b] = hsl_to_rgb(self.hue, params.saturation, params.lightness);
        let k = params.emissive_intensity;
        [r * k, g * k, b * k]
    }
}

/// HSL to RGB with hue in turns; all channels in `[0, 1]`.
pub fn hsl_to_rgb(h: f32, s: f32, l: f32) -> [f32; 3] {
    let h = h.rem_euclid(1.0);
    let s = s.clamp(0.0, 1.0);
    let l = l.clamp(0.0, 1.0);
    if s == 0.0 {
        return [l, l, l];
    }
    let hi = if l <= 0.5 { l * (1.0 + s) } else { l + s - l * s };
    let lo = 2.0 * l - hi;
    [
        hue_channel(lo, hi, h + 1.0 / 3.0),
        hue_channel(lo, hi, h),
        hue_channel(lo, hi, h - 1.0 / 3.0),
    ]
}

#[inline]
fn hue_channel(lo: f32, hi: f32, t: f32) -> f32 {
    let t = t.rem_euclid(1.0);
    if t < 1.0 / 6.0 {
        lo + (hi - lo) * 6.0 * t
    } else if t < 0.5 {
        hi
    } else if t < 2.0 / 3.0 {
        lo + (hi - lo) * 6.0 * (2.0 / 3.0 - t)
    } else {
        lo
    }
}
