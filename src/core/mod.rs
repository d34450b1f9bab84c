pub mod config;
pub mod constants;
pub mod error;
pub mod field;
pub mod lifecycle;
pub mod particle;
pub mod physics;
pub mod pointer;
pub mod render;
pub mod simulation;
pub mod surface;

pub use config::*;
pub use error::{SimError, SimResult};
pub use field::{PixelBuffer, Seed};
pub use lifecycle::{FrameHandle, FrameScheduler, LoopState, Phase};
pub use particle::{Particle, Rgba};
pub use pointer::{PointerState, TouchGuard};
pub use render::DrawSink;
pub use simulation::Simulation;
pub use surface::SurfaceSize;
