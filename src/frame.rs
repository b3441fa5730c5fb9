use crate::camera::OrbitCamera;
use crate::core::{AnimationParams, AnimationState, TrackScene};
use crate::labels::LabelAtlas;
use crate::render::{self, FrameInputs, PostParams};
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext<'a> {
    pub canvas: web::HtmlCanvasElement,
    pub camera: Rc<RefCell<OrbitCamera>>,
    pub gpu: render::GpuState<'a>,

    pub anim: AnimationState,
    pub anim_params: AnimationParams,
    pub last_instant: Instant,
}

impl<'a> FrameContext<'a> {
    pub fn frame(&mut self) {
        let now = Instant::now();
        let dt_sec = (now - self.last_instant).as_secs_f32();
        self.last_instant = now;

        self.anim.advance(&self.anim_params);

        let w = self.canvas.width();
        let h = self.canvas.height();
        let aspect = w.max(1) as f32 / h.max(1) as f32;
        let cam = {
            let mut orbit = self.camera.borrow_mut();
            orbit.update();
            orbit.camera(aspect)
        };
        // Labels turn toward the camera through these axes every tick.
        let (right, up) = cam.billboard_axes();

        self.gpu.resize_if_needed(w, h);
        let inputs = FrameInputs {
            view_proj: cam.view_proj(),
            model: self.anim.group_matrix(),
            eye: cam.eye,
            camera_right: right,
            camera_up: up,
            emissive: self.anim.emissive_rgb(&self.anim_params),
            dt_sec,
        };
        if let Err(e) = self.gpu.render(&inputs) {
            log::error!("render error: {:?}", e);
        }
    }
}

pub async fn init_gpu(
    canvas: &web::HtmlCanvasElement,
    scene: &TrackScene,
    atlas: &LabelAtlas,
) -> anyhow::Result<render::GpuState<'static>> {
    // leak a canvas clone to satisfy 'static lifetime for surface
    let leaked_canvas = Box::leak(Box::new(canvas.clone()));
    render::GpuState::new(leaked_canvas, scene, atlas, PostParams::default()).await
}

/// Drive `frame` from requestAnimationFrame until the page goes away.
pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext<'static>>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx_tick.borrow_mut().frame();
        request_frame(&tick_clone);
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    if let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref()) {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}
