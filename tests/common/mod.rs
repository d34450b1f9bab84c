// Test doubles shared by the host-side integration tests.

#![allow(dead_code)]
use glam::Vec2;
use portrait_particles::core::{DrawSink, FrameHandle, FrameScheduler, Rgba};

#[derive(Clone, Debug, PartialEq)]
pub enum Op {
    Clear(f32, f32),
    Rect {
        x: f32,
        y: f32,
        w: f32,
        h: f32,
        color: Rgba,
    },
    Circle {
        center: Vec2,
        radius: f32,
        color: Rgba,
    },
    Line {
        from: Vec2,
        to: Vec2,
        width: f32,
        color: Rgba,
    },
}

/// Records every draw call in order.
#[derive(Default)]
pub struct RecordingSink {
    pub ops: Vec<Op>,
}

impl RecordingSink {
    pub fn lines(&self) -> Vec<&Op> {
        self.ops
            .iter()
            .filter(|op| matches!(op, Op::Line { .. }))
            .collect()
    }
}

impl DrawSink for RecordingSink {
    fn clear(&mut self, width: f32, height: f32) {
        self.ops.push(Op::Clear(width, height));
    }
    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: Rgba) {
        self.ops.push(Op::Rect { x, y, w, h, color });
    }
    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgba) {
        self.ops.push(Op::Circle {
            center,
            radius,
            color,
        });
    }
    fn line(&mut self, from: Vec2, to: Vec2, width: f32, color: Rgba) {
        self.ops.push(Op::Line {
            from,
            to,
            width,
            color,
        });
    }
}

/// Hands out increasing ids and remembers requests and cancellations.
#[derive(Default)]
pub struct FakeScheduler {
    pub next_id: i32,
    pub requested: Vec<FrameHandle>,
    pub cancelled: Vec<FrameHandle>,
    pub refuse: bool,
}

impl FrameScheduler for FakeScheduler {
    fn request_frame(&mut self) -> Option<FrameHandle> {
        if self.refuse {
            return None;
        }
        self.next_id += 1;
        let h = FrameHandle(self.next_id);
        self.requested.push(h);
        Some(h)
    }

    fn cancel_frame(&mut self, handle: FrameHandle) {
        self.cancelled.push(handle);
    }
}
