//! Mount lifecycle and frame scheduling bookkeeping.
//!
//! `Unmounted -> Initializing -> Running -> Unmounted`. [`LoopState`] keeps at
//! most one frame request in flight and makes teardown idempotent; the host
//! supplies the actual scheduling primitive through [`FrameScheduler`].

/// Opaque id of a pending frame request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FrameHandle(pub i32);

/// Host "call me on the next frame" primitive.
pub trait FrameScheduler {
    /// Returns `None` if the host refused the request.
    fn request_frame(&mut self) -> Option<FrameHandle>;
    fn cancel_frame(&mut self, handle: FrameHandle);
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Phase {
    #[default]
    Unmounted,
    Initializing,
    Running,
}

#[derive(Debug, Default)]
pub struct LoopState {
    phase: Phase,
    pending: Option<FrameHandle>,
    frames: u64,
}

impl LoopState {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[inline]
    pub fn pending(&self) -> Option<FrameHandle> {
        self.pending
    }

    /// Frames delivered since mount.
    #[inline]
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Enter `Initializing`. Only valid from `Unmounted`.
    pub fn begin(&mut self) -> bool {
        if self.phase != Phase::Unmounted {
            return false;
        }
        self.phase = Phase::Initializing;
        self.frames = 0;
        true
    }

    /// Enter `Running` and request the first frame.
    pub fn start<S: FrameScheduler + ?Sized>(&mut self, sched: &mut S) -> bool {
        if self.phase != Phase::Initializing {
            return false;
        }
        self.phase = Phase::Running;
        self.schedule_next(sched)
    }

    /// Request the next frame unless one is already pending or the loop is
    /// not running.
    pub fn schedule_next<S: FrameScheduler + ?Sized>(&mut self, sched: &mut S) -> bool {
        if self.phase != Phase::Running || self.pending.is_some() {
            return false;
        }
        self.pending = sched.request_frame();
        self.pending.is_some()
    }

    /// Called first thing in the frame callback. Returns whether the frame
    /// should run; a callback that fires after teardown gets `false`.
    pub fn fire(&mut self) -> bool {
        self.pending = None;
        if self.phase != Phase::Running {
            return false;
        }
        self.frames += 1;
        true
    }

    /// Cancel any pending frame and return to `Unmounted`. Safe to call any
    /// number of times, in any phase.
    pub fn stop<S: FrameScheduler + ?Sized>(&mut self, sched: &mut S) {
        if let Some(h) = self.pending.take() {
            sched.cancel_frame(h);
        }
        self.phase = Phase::Unmounted;
    }
}
