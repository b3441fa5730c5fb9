/// Render, camera, and control tuning constants.
///
/// These constants express intended behavior (e.g., damping, clamp limits,
/// post-processing weights) and keep magic numbers out of the code.
// Camera
pub const CAMERA_FOV_DEG: f32 = 75.0;
pub const CAMERA_NEAR: f32 = 0.1;
pub const CAMERA_FAR: f32 = 1000.0;
pub const CAMERA_DISTANCE: f32 = 5.0; // initial eye distance from the origin

// Orbit controls
pub const ORBIT_ROTATE_SPEED: f32 = 1.0; // full viewport drag = one turn
pub const ORBIT_DAMPING: f32 = 0.05; // fraction of angular velocity lost per frame
pub const ORBIT_ZOOM_SPEED: f32 = 1.0;
pub const ORBIT_MIN_DISTANCE: f32 = 1.0;
pub const ORBIT_MAX_DISTANCE: f32 = 50.0;
pub const ORBIT_PITCH_LIMIT: f32 = 1.55; // just short of the poles

// Lighting
pub const AMBIENT_LIGHT: [f32; 3] = [0.25, 0.25, 0.3];
pub const POINT_LIGHT_POS: [f32; 3] = [5.0, 5.0, 5.0];
pub const POINT_LIGHT_INTENSITY: f32 = 1.0;

// Bloom (bright pass + separable blur at half resolution)
pub const BLOOM_STRENGTH: f32 = 1.5;
pub const BLOOM_RADIUS: f32 = 0.4;
pub const BLOOM_THRESHOLD: f32 = 0.85;

// Film grain
pub const FILM_INTENSITY: f32 = 0.35;
pub const FILM_GRAYSCALE: bool = false;

// Labels
pub const LABEL_FONT: &str = "bold 48px sans-serif";
pub const LABEL_ROW_HEIGHT_PX: u32 = 64;
pub const LABEL_PADDING_PX: u32 = 8;
pub const LABEL_ATLAS_MAX_WIDTH_PX: u32 = 2048;
pub const LABEL_MAX_CHARS: usize = 28;
pub const LABEL_WORLD_HEIGHT: f32 = 0.12; // world units per label quad height

// Clear color (linear)
pub const CLEAR_COLOR: [f64; 3] = [0.005, 0.006, 0.012];
