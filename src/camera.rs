// Camera description and orbit controls.
//
// The orbit camera circles a target point. Drags add angular velocity,
// which decays every frame so the view glides to a stop.

use glam::{Mat4, Vec3};

/// Simple right-handed camera description with perspective projection.
#[derive(Clone, Debug)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub aspect: f32,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Camera {
    /// Compute the clip-space projection matrix.
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, self.aspect, self.znear, self.zfar)
    }
    /// Compute the view matrix that transforms world to view space.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }

    pub fn view_proj(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }

    /// World-space right and up vectors of the view, used to turn billboards
    /// toward the camera.
    pub fn billboard_axes(&self) -> (Vec3, Vec3) {
        let view = self.view_matrix();
        (view.row(0).truncate(), view.row(1).truncate())
    }
}

#[derive(Clone, Debug)]
pub struct OrbitParams {
    pub rotate_speed: f32,
    pub damping: f32,
    pub zoom_speed: f32,
    pub min_distance: f32,
    pub max_distance: f32,
    pub pitch_limit: f32,
}

#[derive(Clone, Debug)]
pub struct OrbitCamera {
    pub target: Vec3,
    pub distance: f32,
    pub yaw: f32,
    pub pitch: f32,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
    pub params: OrbitParams,
    yaw_velocity: f32,
    pitch_velocity: f32,
}

impl OrbitCamera {
    /// Camera on the +Z axis looking at `target` from `distance`.
    pub fn new(target: Vec3, distance: f32, fovy_radians: f32, params: OrbitParams) -> Self {
        let distance = distance.clamp(params.min_distance, params.max_distance);
        Self {
            target,
            distance,
            yaw: 0.0,
            pitch: 0.0,
            fovy_radians,
            znear: 0.1,
            zfar: 1000.0,
            params,
            yaw_velocity: 0.0,
            pitch_velocity: 0.0,
        }
    }

    pub fn with_clip(mut self, znear: f32, zfar: f32) -> Self {
        self.znear = znear;
        self.zfar = zfar;
        self
    }

    /// Drag by `(dx, dy)` pixels on a viewport `viewport_height` pixels tall.
    pub fn rotate(&mut self, dx: f32, dy: f32, viewport_height: f32) {
        let h = viewport_height.max(1.0);
        let k = std::f32::consts::TAU * self.params.rotate_speed / h;
        self.yaw_velocity -= dx * k;
        self.pitch_velocity += dy * k;
    }

    /// Wheel zoom; positive `delta` (scroll down) moves away.
    pub fn zoom(&mut self, delta: f32) {
        if !delta.is_finite() || delta == 0.0 {
            return;
        }
        let scale = 0.95_f32.powf(self.params.zoom_speed * delta.abs() / 100.0);
        let next = if delta > 0.0 {
            self.distance / scale
        } else {
            self.distance * scale
        };
        self.distance = next.clamp(self.params.min_distance, self.params.max_distance);
    }

    /// Apply accumulated velocity, then damp it. Called once per frame.
    pub fn update(&mut self) {
        self.yaw += self.yaw_velocity;
        self.pitch = (self.pitch + self.pitch_velocity)
            .clamp(-self.params.pitch_limit, self.params.pitch_limit);
        let keep = (1.0 - self.params.damping).clamp(0.0, 1.0);
        self.yaw_velocity *= keep;
        self.pitch_velocity *= keep;
        if self.yaw_velocity.abs() < 1e-6 {
            self.yaw_velocity = 0.0;
        }
        if self.pitch_velocity.abs() < 1e-6 {
            self.pitch_velocity = 0.0;
        }
    }

    pub fn eye(&self) -> Vec3 {
        let (sy, cy) = self.yaw.sin_cos();
        let (sp, cp) = self.pitch.sin_cos();
        self.target + self.distance * Vec3::new(cp * sy, sp, cp * cy)
    }

    pub fn camera(&self, aspect: f32) -> Camera {
        Camera {
            eye: self.eye(),
            target: self.target,
            up: Vec3::Y,
            aspect: if aspect.is_finite() && aspect > 0.0 {
                aspect
            } else {
                1.0
            },
            fovy_radians: self.fovy_radians,
            znear: self.znear,
            zfar: self.zfar,
        }
    }
}
