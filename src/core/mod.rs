pub mod animation;
pub mod atlas;
pub mod constants;
pub mod layout;
pub mod mesh;
pub mod neighbors;
pub mod scene;
pub mod tracks;

pub use animation::*;
pub use atlas::*;
pub use constants::*;
pub use layout::*;
pub use mesh::*;
pub use neighbors::*;
pub use scene::*;
pub use tracks::*;

// Shaders bundled as string constants
pub static POST_WGSL: &str = include_str!("../../shaders/post.wgsl");
pub static SCENE_WGSL: &str = include_str!("../../shaders/scene.wgsl");
