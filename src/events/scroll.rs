use super::Subscription;
use crate::dom;
use scene_core::InputState;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use web_sys as web;

/// Push the current scroll position into `input`.
pub fn sync_progress(document: &web::Document, input: &Rc<RefCell<InputState>>) {
    if let Some(metrics) = dom::scroll_metrics(document) {
        input.borrow_mut().on_scroll(metrics);
    }
}

pub fn wire_scroll(
    window: &web::Window,
    document: &web::Document,
    input: Rc<RefCell<InputState>>,
) -> anyhow::Result<Subscription> {
    // Pick up the position the page was restored at
    sync_progress(document, &input);

    let doc = document.clone();
    let closure = Closure::wrap(Box::new(move || {
        sync_progress(&doc, &input);
    }) as Box<dyn FnMut()>);
    Subscription::add(window, "scroll", closure)
}
