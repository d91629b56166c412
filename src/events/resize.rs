use super::Subscription;
use crate::dom;
use scene_core::InputState;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use web_sys as web;

// Maintain canvas internal pixel size to match CSS size * devicePixelRatio;
// the frame loop picks the new size up from `input`.
pub fn wire_resize(
    window: &web::Window,
    canvas: &web::HtmlCanvasElement,
    input: Rc<RefCell<InputState>>,
) -> anyhow::Result<Subscription> {
    let (w, h) = dom::sync_canvas_backing_size(canvas);
    input.borrow_mut().on_resize(w, h);

    let canvas = canvas.clone();
    let closure = Closure::wrap(Box::new(move || {
        if input.borrow().is_detached() {
            return;
        }
        let (w, h) = dom::sync_canvas_backing_size(&canvas);
        input.borrow_mut().on_resize(w, h);
    }) as Box<dyn FnMut()>);
    Subscription::add(window, "resize", closure)
}
