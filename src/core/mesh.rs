use std::f32::consts::PI;

#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct MeshVertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
}

#[derive(Clone, Debug, Default)]
pub struct SphereMesh {
    pub vertices: Vec<MeshVertex>,
    pub indices: Vec<u16>,
}

/// Unit UV sphere. `segments` around the equator, `rings` pole to pole.
///
/// Counts are clamped to keep the mesh closed and addressable with `u16`
/// indices.
pub fn uv_sphere(segments: u32, rings: u32) -> SphereMesh {
    let segments = segments.clamp(3, 128);
    let rings = rings.clamp(2, 128);
    let mut mesh = SphereMesh::default();

    for ring in 0..=rings {
        let theta = ring as f32 / rings as f32 * PI;
        let (sin_t, cos_t) = theta.sin_cos();
        for seg in 0..=segments {
            let phi = seg as f32 / segments as f32 * 2.0 * PI;
            let (sin_p, cos_p) = phi.sin_cos();
            let n = [sin_t * cos_p, cos_t, sin_t * sin_p];
            mesh.vertices.push(MeshVertex {
                position: n,
                normal: n,
            });
        }
    }

    let stride = segments + 1;
    for ring in 0..rings {
        for seg in 0..segments {
            let a = ring * stride + seg;
            let b = a + stride;
            mesh.indices
                .extend([a, b, a + 1, a + 1, b, b + 1].map(|i| i as u16));
        }
    }
    mesh
}
