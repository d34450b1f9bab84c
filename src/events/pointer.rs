use super::{Handler, InputWiring, ListenerSet};
use crate::dom;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub(super) fn wire(w: &InputWiring, set: &mut ListenerSet) {
    let target: &web::EventTarget = w.canvas.as_ref();
    set.add(target, "mousemove", mousemove(w));
    set.add(target, "mouseleave", mouseleave(w));
}

fn mousemove(w: &InputWiring) -> Handler {
    let w = w.clone();
    Closure::wrap(Box::new(move |ev: web::Event| {
        let Some(ev) = ev.dyn_ref::<web::MouseEvent>() else {
            return;
        };
        let (x, y, rw, rh) = dom::client_offset(&w.canvas, ev.client_x(), ev.client_y());
        let (lx, ly) = w.surface.to_logical(x, y, rw, rh);
        w.sim.borrow_mut().mouse_moved(lx, ly, ev.time_stamp());
    }) as Box<dyn FnMut(_)>)
}

fn mouseleave(w: &InputWiring) -> Handler {
    let w = w.clone();
    Closure::wrap(Box::new(move |_ev: web::Event| {
        w.sim.borrow_mut().pointer_left();
    }) as Box<dyn FnMut(_)>)
}
