#![cfg(target_arch = "wasm32")]
use crate::camera::{OrbitCamera, OrbitParams};
use crate::constants::*;
use crate::core::{AnimationParams, AnimationState, LayoutParams, TrackScene};
use anyhow::Context;
use glam::Vec3;
use instant::Instant;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod camera;
mod constants;
mod core;
mod dom;
mod events;
mod fetch;
mod frame;
mod input;
mod labels;
mod render;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("track-constellation starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let canvas_el = document
        .get_element_by_id("app-canvas")
        .ok_or_else(|| anyhow::anyhow!("missing #app-canvas"))?;
    let canvas: web::HtmlCanvasElement = canvas_el
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    // Maintain canvas internal pixel size to match CSS size * devicePixelRatio
    dom::wire_canvas_resize(&canvas);

    let endpoint = dom::tracks_endpoint(&canvas);
    let names = fetch::fetch_top_tracks(&endpoint)
        .await
        .context("fetching top tracks")?;

    labels::ensure_font_loaded(&document, LABEL_FONT)
        .await
        .context("loading label font")?;

    let mut rng = StdRng::from_entropy();
    let scene = TrackScene::build(&names, &mut rng, &LayoutParams::default());
    log::info!(
        "[scene] {} tracks, {} neighbor edges",
        scene.len(),
        scene.edges().len()
    );

    let atlas = labels::rasterize(&document, &scene.names()).context("rasterizing labels")?;
    let gpu = frame::init_gpu(&canvas, &scene, &atlas)
        .await
        .context("WebGPU init")?;

    let camera = Rc::new(RefCell::new(
        OrbitCamera::new(
            Vec3::ZERO,
            CAMERA_DISTANCE,
            CAMERA_FOV_DEG.to_radians(),
            OrbitParams {
                rotate_speed: ORBIT_ROTATE_SPEED,
                damping: ORBIT_DAMPING,
                zoom_speed: ORBIT_ZOOM_SPEED,
                min_distance: ORBIT_MIN_DISTANCE,
                max_distance: ORBIT_MAX_DISTANCE,
                pitch_limit: ORBIT_PITCH_LIMIT,
            },
        )
        .with_clip(CAMERA_NEAR, CAMERA_FAR),
    ));
    events::wire_orbit_controls(events::OrbitWiring {
        canvas: canvas.clone(),
        camera: camera.clone(),
        pointer: Rc::new(RefCell::new(input::PointerState::default())),
    });

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        canvas,
        camera,
        gpu,
        anim: AnimationState::default(),
        anim_params: AnimationParams::default(),
        last_instant: Instant::now(),
    }));
    log::info!("[frame] starting animation loop");
    frame::start_loop(frame_ctx);
    Ok(())
}
