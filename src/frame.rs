use crate::canvas::Canvas2dSink;
use crate::core::{FrameHandle, FrameScheduler, LoopState, Simulation};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

type Tick = Closure<dyn FnMut()>;

pub struct FrameContext {
    pub sim: Rc<RefCell<Simulation>>,
    pub ctx: web::CanvasRenderingContext2d,
}

impl FrameContext {
    pub fn frame(&mut self) {
        let mut sink = Canvas2dSink::new(&self.ctx);
        self.sim.borrow_mut().frame(&mut sink);
    }
}

/// `requestAnimationFrame` as a [`FrameScheduler`]. Without a callback it
/// can only cancel.
struct Raf<'a> {
    window: &'a web::Window,
    tick: Option<&'a Tick>,
}

impl FrameScheduler for Raf<'_> {
    fn request_frame(&mut self) -> Option<FrameHandle> {
        let tick = self.tick?;
        let callback: &js_sys::Function = tick.as_ref().unchecked_ref();
        match self.window.request_animation_frame(callback) {
            Ok(id) => Some(FrameHandle(id)),
            Err(e) => {
                log::error!("[frame] requestAnimationFrame failed: {:?}", e);
                None
            }
        }
    }

    fn cancel_frame(&mut self, handle: FrameHandle) {
        _ = self.window.cancel_animation_frame(handle.0);
    }
}

/// Handle to a running frame loop.
pub struct FrameLoop {
    window: web::Window,
    state: Rc<RefCell<LoopState>>,
    tick: Rc<RefCell<Option<Tick>>>,
}

impl FrameLoop {
    #[inline]
    pub fn frames(&self) -> u64 {
        self.state.borrow().frames()
    }

    /// Cancel the pending frame and release the callback. Idempotent.
    pub fn stop(&mut self) {
        let mut raf = Raf {
            window: &self.window,
            tick: None,
        };
        self.state.borrow_mut().stop(&mut raf);
        // the callback holds a clone of `tick`; dropping it breaks the cycle
        self.tick.borrow_mut().take();
    }
}

impl Drop for FrameLoop {
    fn drop(&mut self) {
        self.stop();
    }
}

/// Start a self-rescheduling loop that runs `frame_ctx.frame()` once per
/// animation frame until [`FrameLoop::stop`].
pub fn start_loop(window: web::Window, frame_ctx: FrameContext) -> FrameLoop {
    let state = Rc::new(RefCell::new(LoopState::new()));
    state.borrow_mut().begin();

    let tick: Rc<RefCell<Option<Tick>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let state_tick = state.clone();
    let window_tick = window.clone();
    let mut frame_ctx = frame_ctx;
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        // a frame already queued when the loop stopped lands here
        if !state_tick.borrow_mut().fire() {
            return;
        }
        frame_ctx.frame();
        let cb = tick_clone.borrow();
        let mut raf = Raf {
            window: &window_tick,
            tick: cb.as_ref(),
        };
        state_tick.borrow_mut().schedule_next(&mut raf);
    }) as Box<dyn FnMut()>));

    {
        let cb = tick.borrow();
        let mut raf = Raf {
            window: &window,
            tick: cb.as_ref(),
        };
        state.borrow_mut().start(&mut raf);
    }

    FrameLoop {
        window,
        state,
        tick,
    }
}
