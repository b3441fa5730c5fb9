use super::helpers::{self, DEPTH_FORMAT};
use crate::core::{uv_sphere, MeshVertex, TrackScene, SPHERE_RINGS, SPHERE_SEGMENTS};
use crate::labels::LabelAtlas;
use wgpu::util::DeviceExt;

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct SceneUniforms {
    pub(crate) view_proj: [[f32; 4]; 4],
    pub(crate) model: [[f32; 4]; 4],
    pub(crate) camera_right: [f32; 4],
    pub(crate) camera_up: [f32; 4],
    pub(crate) eye: [f32; 4],
    pub(crate) light_pos: [f32; 4],
    pub(crate) emissive: [f32; 4],
    pub(crate) ambient: [f32; 4],
    pub(crate) base_color: [f32; 4],
    pub(crate) line_color: [f32; 4],
    pub(crate) label_color: [f32; 4],
}

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
struct SphereInstance {
    center_scale: [f32; 4],
}

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
struct LineVertex {
    position: [f32; 3],
}

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
struct LabelInstance {
    anchor_aspect: [f32; 4],
    uv_rect: [f32; 4],
}

const SPHERE_ATTRS: [wgpu::VertexAttribute; 2] =
    wgpu::vertex_attr_array![0 => Float32x3, 1 => Float32x3];
const SPHERE_INSTANCE_ATTRS: [wgpu::VertexAttribute; 1] =
    wgpu::vertex_attr_array![2 => Float32x4];
const LINE_ATTRS: [wgpu::VertexAttribute; 1] = wgpu::vertex_attr_array![0 => Float32x3];
const LABEL_ATTRS: [wgpu::VertexAttribute; 2] =
    wgpu::vertex_attr_array![0 => Float32x4, 1 => Float32x4];

/// GPU buffers and pipelines for the constellation: spheres, edges, labels.
///
/// Geometry is uploaded once; only the uniform buffer changes per frame.
pub(crate) struct ConstellationResources {
    pub(crate) uniform_buffer: wgpu::Buffer,
    bind_group: wgpu::BindGroup,

    sphere_pipeline: wgpu::RenderPipeline,
    sphere_vertices: wgpu::Buffer,
    sphere_indices: wgpu::Buffer,
    sphere_index_count: u32,
    sphere_instances: wgpu::Buffer,
    sphere_count: u32,

    line_pipeline: wgpu::RenderPipeline,
    line_vertices: wgpu::Buffer,
    line_vertex_count: u32,

    label_pipeline: wgpu::RenderPipeline,
    label_instances: wgpu::Buffer,
    label_count: u32,
    label_bind_group: wgpu::BindGroup,
}

pub(crate) fn create_constellation_resources(
    device: &wgpu::Device,
    queue: &wgpu::Queue,
    hdr_format: wgpu::TextureFormat,
    scene: &TrackScene,
    atlas: &LabelAtlas,
) -> ConstellationResources {
    let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
        label: Some("scene_shader"),
        source: wgpu::ShaderSource::Wgsl(crate::core::SCENE_WGSL.into()),
    });

    let uniform_buffer = device.create_buffer(&wgpu::BufferDescriptor {
        label: Some("scene_uniforms"),
        size: std::mem::size_of::<SceneUniforms>() as u64,
        usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        mapped_at_creation: false,
    });
    let bgl = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
        label: Some("scene_bgl"),
        entries: &[helpers::uniform_bgl_entry(
            0,
            wgpu::ShaderStages::VERTEX | wgpu::ShaderStages::FRAGMENT,
        )],
    });
    let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
        label: Some("scene_bg"),
        layout: &bgl,
        entries: &[wgpu::BindGroupEntry {
            binding: 0,
            resource: uniform_buffer.as_entire_binding(),
        }],
    });
    let label_bgl = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
        label: Some("label_bgl"),
        entries: &helpers::texture_bgl_entries(wgpu::ShaderStages::FRAGMENT),
    });
    let pl_scene = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
        label: Some("scene_pl"),
        bind_group_layouts: &[&bgl],
        push_constant_ranges: &[],
    });
    let pl_label = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
        label: Some("label_pl"),
        bind_group_layouts: &[&bgl, &label_bgl],
        push_constant_ranges: &[],
    });

    // Spheres: one shared mesh, one instance per track
    let mesh = uv_sphere(SPHERE_SEGMENTS, SPHERE_RINGS);
    let sphere_vertices = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
        label: Some("sphere_vertices"),
        contents: bytemuck::cast_slice(&mesh.vertices),
        usage: wgpu::BufferUsages::VERTEX,
    });
    let sphere_indices = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
        label: Some("sphere_indices"),
        contents: bytemuck::cast_slice(&pad_indices(&mesh.indices)),
        usage: wgpu::BufferUsages::INDEX,
    });
    let instances: Vec<SphereInstance> = scene
        .nodes()
        .iter()
        .map(|n| SphereInstance {
            center_scale: n.position.extend(scene.sphere_radius()).to_array(),
        })
        .collect();
    let sphere_instances = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
        label: Some("sphere_instances"),
        contents: non_empty_bytes(bytemuck::cast_slice(&instances)),
        usage: wgpu::BufferUsages::VERTEX,
    });
    let sphere_pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
        label: Some("sphere_pipeline"),
        layout: Some(&pl_scene),
        vertex: wgpu::VertexState {
            module: &shader,
            entry_point: Some("vs_sphere"),
            buffers: &[
                wgpu::VertexBufferLayout {
                    array_stride: std::mem::size_of::<MeshVertex>() as u64,
                    step_mode: wgpu::VertexStepMode::Vertex,
                    attributes: &SPHERE_ATTRS,
                },
                wgpu::VertexBufferLayout {
                    array_stride: std::mem::size_of::<SphereInstance>() as u64,
                    step_mode: wgpu::VertexStepMode::Instance,
                    attributes: &SPHERE_INSTANCE_ATTRS,
                },
            ],
            compilation_options: wgpu::PipelineCompilationOptions::default(),
        },
        primitive: wgpu::PrimitiveState::default(),
        depth_stencil: Some(depth_state(true)),
        multisample: wgpu::MultisampleState::default(),
        fragment: Some(wgpu::FragmentState {
            module: &shader,
            entry_point: Some("fs_sphere"),
            targets: &[Some(wgpu::ColorTargetState {
                format: hdr_format,
                blend: None,
                write_mask: wgpu::ColorWrites::ALL,
            })],
            compilation_options: wgpu::PipelineCompilationOptions::default(),
        }),
        cache: None,
        multiview: None,
    });

    // Neighbor edges as a line list
    let line_data: Vec<LineVertex> = scene
        .line_segments()
        .iter()
        .flat_map(|[a, b]| {
            [
                LineVertex {
                    position: a.to_array(),
                },
                LineVertex {
                    position: b.to_array(),
                },
            ]
        })
        .collect();
    let line_vertices = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
        label: Some("line_vertices"),
        contents: non_empty_bytes(bytemuck::cast_slice(&line_data)),
        usage: wgpu::BufferUsages::VERTEX,
    });
    let line_pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
        label: Some("line_pipeline"),
        layout: Some(&pl_scene),
        vertex: wgpu::VertexState {
            module: &shader,
            entry_point: Some("vs_line"),
            buffers: &[wgpu::VertexBufferLayout {
                array_stride: std::mem::size_of::<LineVertex>() as u64,
                step_mode: wgpu::VertexStepMode::Vertex,
                attributes: &LINE_ATTRS,
            }],
            compilation_options: wgpu::PipelineCompilationOptions::default(),
        },
        primitive: wgpu::PrimitiveState {
            topology: wgpu::PrimitiveTopology::LineList,
            ..Default::default()
        },
        depth_stencil: Some(depth_state(true)),
        multisample: wgpu::MultisampleState::default(),
        fragment: Some(wgpu::FragmentState {
            module: &shader,
            entry_point: Some("fs_line"),
            targets: &[Some(wgpu::ColorTargetState {
                format: hdr_format,
                blend: None,
                write_mask: wgpu::ColorWrites::ALL,
            })],
            compilation_options: wgpu::PipelineCompilationOptions::default(),
        }),
        cache: None,
        multiview: None,
    });

    // Labels: camera-facing quads sampling the atlas
    let label_data: Vec<LabelInstance> = scene
        .label_anchors()
        .iter()
        .zip(&atlas.layout.slots)
        .map(|(anchor, slot)| LabelInstance {
            anchor_aspect: anchor.extend(slot.aspect()).to_array(),
            uv_rect: slot.uv_rect(atlas.width(), atlas.height()),
        })
        .collect();
    let label_instances = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
        label: Some("label_instances"),
        contents: non_empty_bytes(bytemuck::cast_slice(&label_data)),
        usage: wgpu::BufferUsages::VERTEX,
    });
    let label_view = upload_atlas(device, queue, atlas);
    let label_sampler = helpers::create_linear_sampler(device, "label_sampler");
    let label_bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
        label: Some("label_bg"),
        layout: &label_bgl,
        entries: &[
            wgpu::BindGroupEntry {
                binding: 0,
                resource: wgpu::BindingResource::TextureView(&label_view),
            },
            wgpu::BindGroupEntry {
                binding: 1,
                resource: wgpu::BindingResource::Sampler(&label_sampler),
            },
        ],
    });
    let label_pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
        label: Some("label_pipeline"),
        layout: Some(&pl_label),
        vertex: wgpu::VertexState {
            module: &shader,
            entry_point: Some("vs_label"),
            buffers: &[wgpu::VertexBufferLayout {
                array_stride: std::mem::size_of::<LabelInstance>() as u64,
                step_mode: wgpu::VertexStepMode::Instance,
                attributes: &LABEL_ATTRS,
            }],
            compilation_options: wgpu::PipelineCompilationOptions::default(),
        },
        primitive: wgpu::PrimitiveState::default(),
        depth_stencil: Some(depth_state(false)),
        multisample: wgpu::MultisampleState::default(),
        fragment: Some(wgpu::FragmentState {
            module: &shader,
            entry_point: Some("fs_label"),
            targets: &[Some(wgpu::ColorTargetState {
                format: hdr_format,
                blend: Some(wgpu::BlendState::ALPHA_BLENDING),
                write_mask: wgpu::ColorWrites::ALL,
            })],
            compilation_options: wgpu::PipelineCompilationOptions::default(),
        }),
        cache: None,
        multiview: None,
    });

    ConstellationResources {
        uniform_buffer,
        bind_group,
        sphere_pipeline,
        sphere_vertices,
        sphere_indices,
        sphere_index_count: mesh.indices.len() as u32,
        sphere_instances,
        sphere_count: instances.len() as u32,
        line_pipeline,
        line_vertices,
        line_vertex_count: line_data.len() as u32,
        label_pipeline,
        label_instances,
        label_count: label_data.len() as u32,
        label_bind_group,
    }
}

impl ConstellationResources {
    /// Record the scene draws. Opaque geometry first, labels last so they
    /// blend over it.
    pub(crate) fn draw(&self, rpass: &mut wgpu::RenderPass<'_>) {
        rpass.set_bind_group(0, &self.bind_group, &[]);
        if self.sphere_count > 0 {
            rpass.set_pipeline(&self.sphere_pipeline);
            rpass.set_vertex_buffer(0, self.sphere_vertices.slice(..));
            rpass.set_vertex_buffer(1, self.sphere_instances.slice(..));
            rpass.set_index_buffer(self.sphere_indices.slice(..), wgpu::IndexFormat::Uint16);
            rpass.draw_indexed(0..self.sphere_index_count, 0, 0..self.sphere_count);
        }
        if self.line_vertex_count > 0 {
            rpass.set_pipeline(&self.line_pipeline);
            rpass.set_vertex_buffer(0, self.line_vertices.slice(..));
            rpass.draw(0..self.line_vertex_count, 0..1);
        }
        if self.label_count > 0 {
            rpass.set_pipeline(&self.label_pipeline);
            rpass.set_bind_group(1, &self.label_bind_group, &[]);
            rpass.set_vertex_buffer(0, self.label_instances.slice(..));
            rpass.draw(0..6, 0..self.label_count);
        }
    }
}

fn depth_state(write: bool) -> wgpu::DepthStencilState {
    wgpu::DepthStencilState {
        format: DEPTH_FORMAT,
        depth_write_enabled: write,
        depth_compare: wgpu::CompareFunction::Less,
        stencil: wgpu::StencilState::default(),
        bias: wgpu::DepthBiasState::default(),
    }
}

/// Buffer writes must be 4-byte aligned; pad odd u16 index counts.
fn pad_indices(indices: &[u16]) -> Vec<u16> {
    let mut out = indices.to_vec();
    if out.len() % 2 == 1 {
        out.push(0);
    }
    out
}

/// Zero-sized vertex buffers are invalid; keep one padding element.
fn non_empty_bytes(bytes: &[u8]) -> &[u8] {
    const PAD: [u8; 16] = [0; 16];
    if bytes.is_empty() {
        &PAD
    } else {
        bytes
    }
}

fn upload_atlas(device: &wgpu::Device, queue: &wgpu::Queue, atlas: &LabelAtlas) -> wgpu::TextureView {
    let size = wgpu::Extent3d {
        width: atlas.width(),
        height: atlas.height(),
        depth_or_array_layers: 1,
    };
    let texture = device.create_texture(&wgpu::TextureDescriptor {
        label: Some("label_atlas"),
        size,
        mip_level_count: 1,
        sample_count: 1,
        dimension: wgpu::TextureDimension::D2,
        format: wgpu::TextureFormat::Rgba8Unorm,
        usage: wgpu::TextureUsages::TEXTURE_BINDING | wgpu::TextureUsages::COPY_DST,
        view_formats: &[],
    });
    queue.write_texture(
        wgpu::TexelCopyTextureInfo {
            texture: &texture,
            mip_level: 0,
            origin: wgpu::Origin3d::ZERO,
            aspect: wgpu::TextureAspect::All,
        },
        &atlas.pixels,
        wgpu::TexelCopyBufferLayout {
            offset: 0,
            bytes_per_row: Some(4 * atlas.width()),
            rows_per_image: Some(atlas.height()),
        },
        size,
    );
    texture.create_view(&wgpu::TextureViewDescriptor::default())
}
