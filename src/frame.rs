use crate::render;
use scene_core::{InputState, SceneState, Scheduler, Stage};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub type GpuSlot = Rc<RefCell<Option<render::GpuState>>>;

pub struct FrameContext {
    pub input: Rc<RefCell<InputState>>,
    pub gpu: GpuSlot,
    pub scene: SceneState,
    pub scheduler: Scheduler,
    last_stage: Option<Stage>,
}

impl FrameContext {
    pub fn new(input: Rc<RefCell<InputState>>, gpu: GpuSlot) -> Self {
        Self {
            input,
            gpu,
            scene: SceneState::default(),
            scheduler: Scheduler::default(),
            last_stage: None,
        }
    }

    /// One scheduler tick followed by one render, in that order.
    pub fn frame(&mut self) {
        let (progress, viewport) = {
            let input = self.input.borrow();
            (input.progress(), input.viewport())
        };

        let tick = self.scheduler.tick(&mut self.scene, progress);
        if tick.stage != self.last_stage {
            match tick.stage {
                Some(stage) => log::debug!("[timeline] {} at {:.1}%", stage, progress),
                None => log::debug!("[timeline] idle at {:.1}%", progress),
            }
            self.last_stage = tick.stage;
        }

        self.scene.camera.set_viewport(viewport.width, viewport.height);

        if let Some(g) = self.gpu.borrow_mut().as_mut() {
            g.resize_if_needed(viewport.width, viewport.height);
            if let Err(e) = g.render(&self.scene) {
                log::error!("render error: {:?}", e);
            }
        }
    }
}

/// Handle to a running requestAnimationFrame chain.
pub struct FrameLoop {
    tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>>,
    pending: Rc<Cell<Option<i32>>>,
}

impl FrameLoop {
    /// Cancel the pending frame and drop the callback so it can never be
    /// rescheduled. Safe to call more than once.
    pub fn stop(&self) {
        if let Some(id) = self.pending.take() {
            if let Some(w) = web::window() {
                _ = w.cancel_animation_frame(id);
            }
        }
        if self.tick.borrow_mut().take().is_some() {
            log::info!("[frame] loop stopped");
        }
    }
}

fn request_frame(
    tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>,
    pending: &Cell<Option<i32>>,
) -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let tick = tick.borrow();
    let Some(cb) = tick.as_ref() else {
        pending.set(None);
        return Ok(());
    };
    let id = window
        .request_animation_frame(cb.as_ref().unchecked_ref())
        .map_err(|e| anyhow::anyhow!("requestAnimationFrame: {:?}", e))?;
    pending.set(Some(id));
    Ok(())
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) -> anyhow::Result<FrameLoop> {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let pending = Rc::new(Cell::new(None));

    let tick_clone = tick.clone();
    let pending_clone = pending.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        pending_clone.set(None);
        frame_ctx.borrow_mut().frame();
        if let Err(e) = request_frame(&tick_clone, &pending_clone) {
            log::error!("[frame] {:#}", e);
        }
    }) as Box<dyn FnMut()>));

    request_frame(&tick, &pending)?;
    Ok(FrameLoop { tick, pending })
}
