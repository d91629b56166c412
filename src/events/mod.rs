pub mod resize;
pub mod scroll;

pub use resize::wire_resize;
pub use scroll::wire_scroll;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// A listener we own, so it can be removed again instead of leaked.
pub struct Subscription {
    target: web::EventTarget,
    event: &'static str,
    closure: Closure<dyn FnMut()>,
}

impl Subscription {
    pub fn add(
        target: &web::EventTarget,
        event: &'static str,
        closure: Closure<dyn FnMut()>,
    ) -> anyhow::Result<Self> {
        target
            .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
            .map_err(|e| anyhow::anyhow!("add {} listener: {:?}", event, e))?;
        Ok(Self {
            target: target.clone(),
            event,
            closure,
        })
    }

    /// Deregister and drop the callback.
    pub fn remove(self) {
        if let Err(e) = self
            .target
            .remove_event_listener_with_callback(self.event, self.closure.as_ref().unchecked_ref())
        {
            log::warn!("[events] remove {} listener: {:?}", self.event, e);
        }
    }
}

#[derive(Default)]
pub struct Listeners {
    subs: Vec<Subscription>,
}

impl Listeners {
    pub fn push(&mut self, sub: Subscription) {
        self.subs.push(sub);
    }

    pub fn remove_all(&mut self) {
        let n = self.subs.len();
        for sub in self.subs.drain(..) {
            sub.remove();
        }
        log::info!("[events] removed {} listeners", n);
    }
}
