use crate::core::{DrawSink, Rgba};
use glam::Vec2;
use std::f64::consts::TAU;
use web_sys as web;

/// [`DrawSink`] over a Canvas 2D context already scaled to logical units.
pub struct Canvas2dSink<'a> {
    ctx: &'a web::CanvasRenderingContext2d,
}

impl<'a> Canvas2dSink<'a> {
    pub fn new(ctx: &'a web::CanvasRenderingContext2d) -> Self {
        Self { ctx }
    }
}

impl DrawSink for Canvas2dSink<'_> {
    fn clear(&mut self, width: f32, height: f32) {
        self.ctx.clear_rect(0.0, 0.0, width as f64, height as f64);
    }

    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: Rgba) {
        self.ctx.set_fill_style_str(&color.css());
        self.ctx.fill_rect(x as f64, y as f64, w as f64, h as f64);
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgba) {
        self.ctx.begin_path();
        if self
            .ctx
            .arc(center.x as f64, center.y as f64, radius as f64, 0.0, TAU)
            .is_ok()
        {
            self.ctx.set_fill_style_str(&color.css());
            self.ctx.fill();
        }
        self.ctx.close_path();
    }

    fn line(&mut self, from: Vec2, to: Vec2, width: f32, color: Rgba) {
        self.ctx.set_stroke_style_str(&color.css());
        self.ctx.set_line_width(width as f64);
        self.ctx.begin_path();
        self.ctx.move_to(from.x as f64, from.y as f64);
        self.ctx.line_to(to.x as f64, to.y as f64);
        self.ctx.stroke();
    }
}
