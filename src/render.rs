use crate::constants::{
    AMBIENT_LIGHT, CLEAR_COLOR, LABEL_WORLD_HEIGHT, POINT_LIGHT_INTENSITY, POINT_LIGHT_POS,
};
use crate::core::{TrackScene, LABEL_COLOR, LINE_COLOR, SPHERE_BASE_COLOR};
use crate::labels::LabelAtlas;
use glam::{Mat4, Vec3};
use web_sys as web;

mod constellation;
mod helpers;
mod post;
mod targets;

use constellation::{create_constellation_resources, ConstellationResources, SceneUniforms};
use helpers::HDR_FORMAT;
pub use post::PostParams;
use post::{PostBindGroups, PostResources};
use targets::RenderTargets;

/// Per-frame camera and animation inputs for [`GpuState::render`].
pub struct FrameInputs {
    pub view_proj: Mat4,
    pub model: Mat4,
    pub eye: Vec3,
    pub camera_right: Vec3,
    pub camera_up: Vec3,
    pub emissive: [f32; 3],
    pub dt_sec: f32,
}

pub struct GpuState<'a> {
    surface: wgpu::Surface<'a>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    // Spheres, edges, labels
    constellation: ConstellationResources,
    // Post-processing resources
    targets: RenderTargets,
    linear_sampler: wgpu::Sampler,
    post: PostResources,
    post_bind_groups: PostBindGroups,
    post_params: PostParams,

    width: u32,
    height: u32,
    clear_color: wgpu::Color,
    time_accum: f32,
}

impl<'a> GpuState<'a> {
    pub async fn new(
        canvas: &'a web::HtmlCanvasElement,
        scene: &TrackScene,
        atlas: &LabelAtlas,
        post_params: PostParams,
    ) -> anyhow::Result<Self> {
        let width = canvas.width().max(1);
        let height = canvas.height().max(1);

        let instance = wgpu::Instance::default();
        let surface = instance.create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))?;
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .ok_or_else(|| anyhow::anyhow!("No WebGPU adapter"))?;
        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    required_features: wgpu::Features::empty(),
                    // Use default limits on web to avoid passing unknown fields to older WebGPU impls
                    required_limits: wgpu::Limits::default(),
                    memory_hints: wgpu::MemoryHints::Performance,
                    label: None,
                },
                None,
            )
            .await
            .map_err(|e| anyhow::anyhow!(format!("request_device error: {:?}", e)))?;
        let caps = surface.get_capabilities(&adapter);
        let format = caps
            .formats
            .iter()
            .copied()
            .find(|f| {
                matches!(
                    f,
                    wgpu::TextureFormat::Bgra8UnormSrgb | wgpu::TextureFormat::Rgba8UnormSrgb
                )
            })
            .or_else(|| caps.formats.first().copied())
            .ok_or_else(|| anyhow::anyhow!("surface reports no formats"))?;
        let alpha_mode = caps
            .alpha_modes
            .first()
            .copied()
            .unwrap_or(wgpu::CompositeAlphaMode::Auto);
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width,
            height,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode,
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);
        log::info!("[gpu] surface {:?} {}x{}", format, width, height);

        let constellation = create_constellation_resources(&device, &queue, HDR_FORMAT, scene, atlas);

        let targets = RenderTargets::new(&device, width, height);
        let post_shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("post_shader"),
            source: wgpu::ShaderSource::Wgsl(crate::core::POST_WGSL.into()),
        });
        let linear_sampler = helpers::create_linear_sampler(&device, "linear_sampler");
        let post = post::create_post_resources(&device, &post_shader, HDR_FORMAT, format);
        let post_bind_groups = PostBindGroups::new(&device, &post, &linear_sampler, &targets);

        Ok(Self {
            surface,
            device,
            queue,
            config,
            constellation,
            targets,
            linear_sampler,
            post,
            post_bind_groups,
            post_params,
            width,
            height,
            clear_color: wgpu::Color {
                r: CLEAR_COLOR[0],
                g: CLEAR_COLOR[1],
                b: CLEAR_COLOR[2],
                a: 1.0,
            },
            time_accum: 0.0,
        })
    }

    pub fn resize_if_needed(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        if width != self.width || height != self.height {
            self.width = width;
            self.height = height;
            self.config.width = width;
            self.config.height = height;
            self.surface.configure(&self.device, &self.config);

            // Recreate offscreen render targets and dependent bind groups
            self.targets.recreate(&self.device, width, height);
            self.post_bind_groups =
                PostBindGroups::new(&self.device, &self.post, &self.linear_sampler, &self.targets);
        }
    }

    /// Scene pass, bloom (bright + blur H + blur V), composite, film.
    pub fn render(&mut self, frame_in: &FrameInputs) -> Result<(), wgpu::SurfaceError> {
        self.time_accum += frame_in.dt_sec.max(0.0);
        let frame = match self.surface.get_current_texture() {
            Ok(f) => f,
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                // Skip this frame; the next one renders into the fresh surface.
                self.surface.configure(&self.device, &self.config);
                return Ok(());
            }
            Err(e) => return Err(e),
        };
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let uniforms = SceneUniforms {
            view_proj: frame_in.view_proj.to_cols_array_2d(),
            model: frame_in.model.to_cols_array_2d(),
            camera_right: frame_in.camera_right.extend(LABEL_WORLD_HEIGHT).to_array(),
            camera_up: frame_in.camera_up.extend(0.0).to_array(),
            eye: frame_in.eye.extend(1.0).to_array(),
            light_pos: Vec3::from(POINT_LIGHT_POS)
                .extend(POINT_LIGHT_INTENSITY)
                .to_array(),
            emissive: rgb4(frame_in.emissive),
            ambient: rgb4(AMBIENT_LIGHT),
            base_color: rgb4(SPHERE_BASE_COLOR),
            line_color: rgb4(LINE_COLOR),
            label_color: rgb4(LABEL_COLOR),
        };
        self.queue.write_buffer(
            &self.constellation.uniform_buffer,
            0,
            bytemuck::bytes_of(&uniforms),
        );
        let (bw, bh) = self.targets.bloom_size();
        post::write_post_uniforms(
            &self.queue,
            &self.post,
            &self.post_params,
            [bw as f32, bh as f32],
            self.time_accum,
        );

        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("encoder"),
            });
        {
            let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("scene_pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &self.targets.hdr_view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(self.clear_color),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: &self.targets.depth_view,
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Store,
                    }),
                    stencil_ops: None,
                }),
                timestamp_writes: None,
                occlusion_query_set: None,
            });
            self.constellation.draw(&mut rpass);
        }

        let bg = &self.post_bind_groups;
        // Pass 2: bright pass → bloom_a
        post::blit(
            &mut encoder,
            "bright_pass",
            &self.targets.bloom_a_view,
            wgpu::Color::BLACK,
            &self.post.bright_pipeline,
            &bg.from_hdr,
            None,
        );
        // Pass 3: blur horizontal bloom_a -> bloom_b
        post::blit(
            &mut encoder,
            "blur_h",
            &self.targets.bloom_b_view,
            wgpu::Color::BLACK,
            &self.post.blur_pipeline,
            &bg.from_bloom_a,
            None,
        );
        // Pass 4: blur vertical bloom_b -> bloom_a
        post::blit(
            &mut encoder,
            "blur_v",
            &self.targets.bloom_a_view,
            wgpu::Color::BLACK,
            &self.post.blur_pipeline,
            &bg.from_bloom_b,
            None,
        );
        // Pass 5: scene + bloom -> composite
        post::blit(
            &mut encoder,
            "composite",
            &self.targets.composite_view,
            self.clear_color,
            &self.post.composite_pipeline,
            &bg.from_hdr,
            Some(&bg.bloom_a_only),
        );
        // Pass 6: film grain to swapchain
        post::blit(
            &mut encoder,
            "film",
            &view,
            self.clear_color,
            &self.post.film_pipeline,
            &bg.from_composite,
            None,
        );

        self.queue.submit(Some(encoder.finish()));
        frame.present();
        Ok(())
    }
}

#[inline]
fn rgb4(c: [f32; 3]) -> [f32; 4] {
    [c[0], c[1], c[2], 1.0]
}
