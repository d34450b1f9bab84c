use super::{Handler, InputWiring, ListenerSet};
use crate::dom;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub(super) fn wire(w: &InputWiring, page: &web::EventTarget, set: &mut ListenerSet) {
    set.add(page, "touchstart", touch_track(w));
    set.add(page, "touchmove", touch_track(w));
    set.add(page, "touchend", touch_release(w));
    set.add(page, "touchcancel", touch_release(w));
}

// first touch point, mapped relative to the canvas even when outside it
fn touch_track(w: &InputWiring) -> Handler {
    let w = w.clone();
    Closure::wrap(Box::new(move |ev: web::Event| {
        let Some(ev) = ev.dyn_ref::<web::TouchEvent>() else {
            return;
        };
        let Some(t) = ev.touches().item(0) else {
            return;
        };
        let (x, y, rw, rh) = dom::client_offset(&w.canvas, t.client_x(), t.client_y());
        let (lx, ly) = w.surface.to_logical(x, y, rw, rh);
        w.sim.borrow_mut().touch_moved(lx, ly, ev.time_stamp());
    }) as Box<dyn FnMut(_)>)
}

fn touch_release(w: &InputWiring) -> Handler {
    let w = w.clone();
    Closure::wrap(Box::new(move |ev: web::Event| {
        w.sim.borrow_mut().touch_ended(ev.time_stamp());
    }) as Box<dyn FnMut(_)>)
}
