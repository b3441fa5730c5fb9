use super::helpers;
use super::targets::RenderTargets;
use crate::constants::{
    BLOOM_RADIUS, BLOOM_STRENGTH, BLOOM_THRESHOLD, FILM_GRAYSCALE, FILM_INTENSITY,
};

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct PostUniforms {
    resolution: [f32; 2],
    time: f32,
    bloom_strength: f32,
    blur_dir: [f32; 2],
    threshold: f32,
    bloom_radius: f32,
    film_intensity: f32,
    film_grayscale: f32,
    _pad: [f32; 2],
}

/// Bloom and film tuning.
#[derive(Clone, Debug)]
pub struct PostParams {
    pub bloom_strength: f32,
    pub bloom_radius: f32,
    pub threshold: f32,
    pub film_intensity: f32,
    pub film_grayscale: bool,
}

impl Default for PostParams {
    fn default() -> Self {
        Self {
            bloom_strength: BLOOM_STRENGTH,
            bloom_radius: BLOOM_RADIUS,
            threshold: BLOOM_THRESHOLD,
            film_intensity: FILM_INTENSITY,
            film_grayscale: FILM_GRAYSCALE,
        }
    }
}

impl PostParams {
    fn uniforms(&self, resolution: [f32; 2], time: f32, blur_dir: [f32; 2]) -> PostUniforms {
        PostUniforms {
            resolution,
            time,
            bloom_strength: self.bloom_strength,
            blur_dir,
            threshold: self.threshold,
            bloom_radius: self.bloom_radius,
            film_intensity: self.film_intensity,
            film_grayscale: if self.film_grayscale { 1.0 } else { 0.0 },
            _pad: [0.0; 2],
        }
    }
}

/// Queue writes land before the encoder runs, so every pass that needs
/// different uniforms gets its own buffer.
pub(crate) struct PostUniformBuffers {
    pub(crate) main: wgpu::Buffer,
    pub(crate) blur_h: wgpu::Buffer,
    pub(crate) blur_v: wgpu::Buffer,
}

pub(crate) struct PostResources {
    pub(crate) bgl0: wgpu::BindGroupLayout, // tex+sampler+uniform
    pub(crate) bgl1: wgpu::BindGroupLayout, // tex+sampler
    pub(crate) uniforms: PostUniformBuffers,
    pub(crate) bright_pipeline: wgpu::RenderPipeline,
    pub(crate) blur_pipeline: wgpu::RenderPipeline,
    pub(crate) composite_pipeline: wgpu::RenderPipeline,
    pub(crate) film_pipeline: wgpu::RenderPipeline,
}

pub(crate) fn create_post_resources(
    device: &wgpu::Device,
    post_shader: &wgpu::ShaderModule,
    hdr_format: wgpu::TextureFormat,
    swap_format: wgpu::TextureFormat,
) -> PostResources {
    let [tex0, samp0] = helpers::texture_bgl_entries(wgpu::ShaderStages::FRAGMENT);
    let bgl0 = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
        label: Some("post_bgl0"),
        entries: &[
            tex0,
            samp0,
            helpers::uniform_bgl_entry(2, wgpu::ShaderStages::FRAGMENT),
        ],
    });
    let bgl1 = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
        label: Some("post_bgl1"),
        entries: &helpers::texture_bgl_entries(wgpu::ShaderStages::FRAGMENT),
    });
    let make_uniform = |label: &str| {
        device.create_buffer(&wgpu::BufferDescriptor {
            label: Some(label),
            size: std::mem::size_of::<PostUniforms>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        })
    };
    let uniforms = PostUniformBuffers {
        main: make_uniform("post_uniforms"),
        blur_h: make_uniform("post_uniforms_blur_h"),
        blur_v: make_uniform("post_uniforms_blur_v"),
    };
    let pl_single = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
        label: Some("pl_post_0"),
        bind_group_layouts: &[&bgl0],
        push_constant_ranges: &[],
    });
    let pl_composite = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
        label: Some("pl_post_comp"),
        bind_group_layouts: &[&bgl0, &bgl1],
        push_constant_ranges: &[],
    });
    let bright_pipeline = helpers::make_post_pipeline(
        device,
        "bright_pipeline",
        &pl_single,
        post_shader,
        "fs_bright",
        hdr_format,
        None,
    );
    let blur_pipeline = helpers::make_post_pipeline(
        device,
        "blur_pipeline",
        &pl_single,
        post_shader,
        "fs_blur",
        hdr_format,
        None,
    );
    let composite_pipeline = helpers::make_post_pipeline(
        device,
        "composite_pipeline",
        &pl_composite,
        post_shader,
        "fs_composite",
        hdr_format,
        None,
    );
    let film_pipeline = helpers::make_post_pipeline(
        device,
        "film_pipeline",
        &pl_single,
        post_shader,
        "fs_film",
        swap_format,
        Some(wgpu::BlendState::REPLACE),
    );

    PostResources {
        bgl0,
        bgl1,
        uniforms,
        bright_pipeline,
        blur_pipeline,
        composite_pipeline,
        film_pipeline,
    }
}

/// Bind groups that reference the offscreen targets; rebuilt on resize.
pub(crate) struct PostBindGroups {
    pub(crate) from_hdr: wgpu::BindGroup,
    pub(crate) from_bloom_a: wgpu::BindGroup,
    pub(crate) from_bloom_b: wgpu::BindGroup,
    pub(crate) bloom_a_only: wgpu::BindGroup,
    pub(crate) from_composite: wgpu::BindGroup,
}

impl PostBindGroups {
    pub(crate) fn new(
        device: &wgpu::Device,
        post: &PostResources,
        sampler: &wgpu::Sampler,
        targets: &RenderTargets,
    ) -> Self {
        let with_uniform = |label: &str, view: &wgpu::TextureView, uniform: &wgpu::Buffer| {
            device.create_bind_group(&wgpu::BindGroupDescriptor {
                label: Some(label),
                layout: &post.bgl0,
                entries: &[
                    wgpu::BindGroupEntry {
                        binding: 0,
                        resource: wgpu::BindingResource::TextureView(view),
                    },
                    wgpu::BindGroupEntry {
                        binding: 1,
                        resource: wgpu::BindingResource::Sampler(sampler),
                    },
                    wgpu::BindGroupEntry {
                        binding: 2,
                        resource: uniform.as_entire_binding(),
                    },
                ],
            })
        };
        let u = &post.uniforms;
        Self {
            from_hdr: with_uniform("bg_hdr", &targets.hdr_view, &u.main),
            from_bloom_a: with_uniform("bg_from_bloom_a", &targets.bloom_a_view, &u.blur_h),
            from_bloom_b: with_uniform("bg_from_bloom_b", &targets.bloom_b_view, &u.blur_v),
            bloom_a_only: device.create_bind_group(&wgpu::BindGroupDescriptor {
                label: Some("bg_bloom_a_only"),
                layout: &post.bgl1,
                entries: &[
                    wgpu::BindGroupEntry {
                        binding: 0,
                        resource: wgpu::BindingResource::TextureView(&targets.bloom_a_view),
                    },
                    wgpu::BindGroupEntry {
                        binding: 1,
                        resource: wgpu::BindingResource::Sampler(sampler),
                    },
                ],
            }),
            from_composite: with_uniform("bg_from_composite", &targets.composite_view, &u.main),
        }
    }
}

pub(crate) fn write_post_uniforms(
    queue: &wgpu::Queue,
    post: &PostResources,
    params: &PostParams,
    bloom_resolution: [f32; 2],
    time: f32,
) {
    let u = &post.uniforms;
    let main = params.uniforms(bloom_resolution, time, [0.0, 0.0]);
    let blur_h = params.uniforms(bloom_resolution, time, [1.0, 0.0]);
    let blur_v = params.uniforms(bloom_resolution, time, [0.0, 1.0]);
    queue.write_buffer(&u.main, 0, bytemuck::bytes_of(&main));
    queue.write_buffer(&u.blur_h, 0, bytemuck::bytes_of(&blur_h));
    queue.write_buffer(&u.blur_v, 0, bytemuck::bytes_of(&blur_v));
}

pub(crate) fn blit(
    encoder: &mut wgpu::CommandEncoder,
    label: &str,
    target: &wgpu::TextureView,
    clear: wgpu::Color,
    pipeline: &wgpu::RenderPipeline,
    bg0: &wgpu::BindGroup,
    bg1: Option<&wgpu::BindGroup>,
) {
    let mut r = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
        label: Some(label),
        color_attachments: &[Some(wgpu::RenderPassColorAttachment {
            view: target,
            resolve_target: None,
            ops: wgpu::Operations {
                load: wgpu::LoadOp::Clear(clear),
                store: wgpu::StoreOp::Store,
            },
        })],
        depth_stencil_attachment: None,
        timestamp_writes: None,
        occlusion_query_set: None,
    });
    r.set_pipeline(pipeline);
    r.set_bind_group(0, bg0, &[]);
    if let Some(g1) = bg1 {
        r.set_bind_group(1, g1, &[]);
    }
    r.draw(0..3, 0..1);
}
