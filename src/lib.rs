#![cfg(target_arch = "wasm32")]
use crate::camera::Camera;
use crate::constants::{CANVAS_ID, SCROLL_ID, YEAR_ID};
use crate::controller::SoundController;
use crate::scene::Scene;
use instant::Instant;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod audio;
mod camera;
mod constants;
mod controller;
mod dom;
mod events;
mod frame;
mod geometry;
mod overlay;
mod render;
mod scene;
mod story;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("scroll-story starting");

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

    let canvas: web::HtmlCanvasElement = document
        .get_element_by_id(CANVAS_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{CANVAS_ID}"))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
    let scroll_el = document
        .get_element_by_id(SCROLL_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{SCROLL_ID}"))?;

    dom::set_current_year(&document, YEAR_ID);

    // Interaction: sound flag, gate, anchors share one controller
    let sound: events::SharedSound =
        Rc::new(RefCell::new(SoundController::new(audio::WebTone::default())));
    events::wire_sound_toggle(&document, sound.clone());
    events::wire_start_gate(&document, sound.clone());
    events::wire_anchor_links(&document, sound);

    // Scene, camera and renderer sized to the viewport
    let (w, h) = dom::size_canvas(&canvas, &window);
    let camera = Rc::new(RefCell::new(Camera::new((w / h) as f32)));
    events::wire_resize(&canvas, camera.clone());

    let mut rng = StdRng::from_entropy();
    let scene = Scene::build(&mut rng);
    log::info!(
        "[scene] stars={} panels={}",
        scene.stars.positions.len(),
        scene.centerpiece.panels.len()
    );

    // snapshot: a resize may borrow the camera while the adapter request is pending
    let initial_camera = camera.borrow().clone();
    let gpu = frame::init_gpu(&canvas, &scene, &initial_camera).await;

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        scene,
        camera,
        canvas,
        scroll_el,
        gpu,
        started: Instant::now(),
    }));
    frame::start_loop(frame_ctx);
    Ok(())
}
