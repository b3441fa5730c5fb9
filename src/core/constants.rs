// Shared scene constants used by the web frontend.

// Data source
pub const DEFAULT_TRACKS_ENDPOINT: &str = "api/top-tracks.json"; // overridden by data-tracks-url
pub const TRACKS_URL_ATTRIBUTE: &str = "data-tracks-url";
pub const MAX_TRACKS: usize = 10; // tracks placed in the scene

// Scene layout
pub const POSITION_RANGE: f32 = 2.0; // half extent of the placement cube
pub const SPHERE_RADIUS: f32 = 0.1;
pub const LABEL_LIFT: f32 = 0.18; // gap between sphere top and label baseline
pub const SPHERE_SEGMENTS: u32 = 32;
pub const SPHERE_RINGS: u32 = 16;

// Palette (linear RGB)
pub const SPHERE_BASE_COLOR: [f32; 3] = [0.85, 0.85, 0.9];
pub const LINE_COLOR: [f32; 3] = [0.55, 0.75, 1.0];
pub const LABEL_COLOR: [f32; 3] = [1.0, 1.0, 1.0];
