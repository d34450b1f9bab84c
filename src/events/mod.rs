//! Pointer and touch listeners that feed the simulation's pointer state.
//!
//! Listeners only write the pointer; the next scheduled frame picks it up.

mod pointer;
mod touch;

use crate::core::{Simulation, SurfaceSize};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

type Handler = Closure<dyn FnMut(web::Event)>;

/// Everything the handlers need.
#[derive(Clone)]
pub struct InputWiring {
    pub canvas: web::HtmlCanvasElement,
    pub sim: Rc<RefCell<Simulation>>,
    pub surface: SurfaceSize,
}

/// Registered listeners, kept so they can be removed on unmount.
#[derive(Default)]
pub struct ListenerSet {
    entries: Vec<(web::EventTarget, &'static str, Handler)>,
}

impl ListenerSet {
    fn add(&mut self, target: &web::EventTarget, event: &'static str, handler: Handler) {
        match target.add_event_listener_with_callback(event, handler.as_ref().unchecked_ref()) {
            Ok(()) => self.entries.push((target.clone(), event, handler)),
            Err(e) => log::warn!("[events] could not listen for {event}: {:?}", e),
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Remove every listener and drop its closure. Idempotent.
    pub fn detach(&mut self) {
        for (target, event, handler) in self.entries.drain(..) {
            _ = target.remove_event_listener_with_callback(event, handler.as_ref().unchecked_ref());
        }
    }
}

impl Drop for ListenerSet {
    fn drop(&mut self) {
        self.detach();
    }
}

/// Mouse over the canvas; touch anywhere on the page, so dragging a finger
/// outside the portrait still drives it.
pub fn wire_input_handlers(w: InputWiring) -> ListenerSet {
    let mut set = ListenerSet::default();
    pointer::wire(&w, &mut set);
    if let Some(window) = web::window() {
        let page: &web::EventTarget = window.as_ref();
        touch::wire(&w, page, &mut set);
    }
    log::debug!("[events] {} listeners attached", set.len());
    set
}
