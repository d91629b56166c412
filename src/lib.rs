#![cfg(target_arch = "wasm32")]
use anyhow::anyhow;
use scene_core::InputState;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod constants;
mod dom;
mod events;
mod frame;
mod render;

use constants::{BACKGROUND_URL, CANVAS_ID};
use events::Listeners;
use frame::{FrameContext, FrameLoop, GpuSlot};

/// Everything `teardown` has to undo.
struct App {
    input: Rc<RefCell<InputState>>,
    listeners: Listeners,
    frame_loop: FrameLoop,
    gpu: GpuSlot,
}

impl App {
    fn shutdown(mut self) {
        self.input.borrow_mut().detach();
        self.listeners.remove_all();
        self.frame_loop.stop();
        if let Some(gpu) = self.gpu.borrow_mut().take() {
            gpu.release();
        }
        log::info!("scroll-scene torn down");
    }
}

thread_local! {
    static APP: RefCell<Option<App>> = const { RefCell::new(None) };
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("scroll-scene starting");

    let app = init().map_err(|e| {
        log::error!("init error: {:?}", e);
        JsValue::from_str(&format!("{:#}", e))
    })?;
    APP.with(|slot| *slot.borrow_mut() = Some(app));
    Ok(())
}

/// Stop reacting to scroll/resize, stop the frame loop and free GPU
/// resources. Calling it again is a no-op.
#[wasm_bindgen]
pub fn teardown() {
    match APP.with(|slot| slot.borrow_mut().take()) {
        Some(app) => app.shutdown(),
        None => log::debug!("teardown: nothing running"),
    }
}

fn init() -> anyhow::Result<App> {
    let window = web::window().ok_or_else(|| anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow!("no document"))?;

    // Fail before anything is wired if there is nowhere to draw
    let canvas = dom::find_canvas(&document, CANVAS_ID)?;

    let input = Rc::new(RefCell::new(InputState::default()));
    let mut listeners = Listeners::default();
    if let Err(e) = wire_listeners(&window, &document, &canvas, &input, &mut listeners) {
        listeners.remove_all();
        return Err(e);
    }

    let gpu: GpuSlot = Rc::new(RefCell::new(None));
    let frame_ctx = Rc::new(RefCell::new(FrameContext::new(input.clone(), gpu.clone())));
    let frame_loop = match frame::start_loop(frame_ctx) {
        Ok(l) => l,
        Err(e) => {
            listeners.remove_all();
            return Err(e);
        }
    };

    spawn_local(init_gpu(canvas, gpu.clone(), input.clone()));

    Ok(App {
        input,
        listeners,
        frame_loop,
        gpu,
    })
}

fn wire_listeners(
    window: &web::Window,
    document: &web::Document,
    canvas: &web::HtmlCanvasElement,
    input: &Rc<RefCell<InputState>>,
    listeners: &mut Listeners,
) -> anyhow::Result<()> {
    listeners.push(events::wire_scroll(window, document, input.clone())?);
    listeners.push(events::wire_resize(window, canvas, input.clone())?);
    Ok(())
}

async fn init_gpu(canvas: web::HtmlCanvasElement, slot: GpuSlot, input: Rc<RefCell<InputState>>) {
    let mut gpu = match render::GpuState::new(&canvas).await {
        Ok(g) => g,
        Err(e) => {
            log::error!("WebGPU init error: {:?}", e);
            return;
        }
    };

    match render::background::load_image(BACKGROUND_URL).await {
        Ok(img) => gpu.set_background(&img),
        Err(e) => log::warn!("background unavailable, using clear colour: {:#}", e),
    }

    // teardown may have run while we were awaiting
    if input.borrow().is_detached() {
        gpu.release();
        return;
    }
    *slot.borrow_mut() = Some(gpu);
}
