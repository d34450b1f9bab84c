use crate::core::{SimError, Simulation, SimulationConfig};
use crate::{asset, dom, events, frame};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

const DEFAULT_IMAGE_URL: &str = "/portrait.png";
const IMAGE_ATTR_KEY: &str = "image";

struct Mounted {
    alive: Rc<Cell<bool>>,
    frame_loop: frame::FrameLoop,
    listeners: events::ListenerSet,
}

/// A particle simulation mounted on one canvas.
///
/// Dropping or freeing the handle unmounts it.
#[wasm_bindgen]
pub struct ParticlePortrait {
    mounted: Option<Mounted>,
}

#[wasm_bindgen]
impl ParticlePortrait {
    /// Mount on `<canvas id="{canvas_id}">`.
    ///
    /// `variant` picks a preset (`portrait` by default, or `constellation`);
    /// `image_url` overrides the portrait image. `data-particles-*` attributes
    /// on the canvas adjust the preset. Only an unknown `variant` is an error;
    /// a missing canvas or 2D context yields an inert handle.
    pub fn mount(
        canvas_id: &str,
        variant: Option<String>,
        image_url: Option<String>,
    ) -> Result<ParticlePortrait, JsValue> {
        let base = SimulationConfig::variant(variant.as_deref().unwrap_or_default())
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        match mount_on(canvas_id, base, image_url) {
            Ok(mounted) => Ok(Self { mounted }),
            Err(e) => {
                log::warn!("[mount] #{canvas_id}: {e:#}");
                Ok(Self { mounted: None })
            }
        }
    }

    #[wasm_bindgen(getter)]
    pub fn mounted(&self) -> bool {
        self.mounted.is_some()
    }

    /// Frames rendered since mount.
    #[wasm_bindgen(getter)]
    pub fn frames(&self) -> f64 {
        self.mounted
            .as_ref()
            .map(|m| m.frame_loop.frames() as f64)
            .unwrap_or(0.0)
    }

    /// Cancel the frame loop and remove all listeners. Safe to repeat.
    pub fn unmount(&mut self) {
        if let Some(mut m) = self.mounted.take() {
            m.alive.set(false);
            m.frame_loop.stop();
            m.listeners.detach();
            log::info!("[mount] unmounted after {} frames", m.frame_loop.frames());
        }
    }
}

impl Drop for ParticlePortrait {
    fn drop(&mut self) {
        self.unmount();
    }
}

fn mount_on(
    canvas_id: &str,
    base: SimulationConfig,
    image_url: Option<String>,
) -> anyhow::Result<Option<Mounted>> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;
    let canvas = dom::canvas_by_id(&document, canvas_id)?;

    let attrs = dom::data_overrides(&canvas);
    let mut attr_image = None;
    let pairs = attrs.iter().filter_map(|(k, v)| {
        if k == IMAGE_ATTR_KEY {
            attr_image = Some(v.clone());
            None
        } else {
            Some((k.as_str(), v.as_str()))
        }
    });
    let (config, rejected) = SimulationConfig::with_overrides(base, pairs);
    for e in &rejected {
        log::warn!("[mount] ignoring override: {e}");
    }

    let Some((ctx, surface)) = dom::setup_surface(&canvas, config.width, config.height) else {
        log::debug!("[mount] #{canvas_id}: {}", SimError::SurfaceUnavailable);
        return Ok(None);
    };

    let sim = Simulation::new(config, rand::random())?;
    let sim = Rc::new(RefCell::new(sim));
    let alive = Rc::new(Cell::new(true));

    let sample_width = sim.borrow().sample_width();
    if let Some(target_width) = sample_width {
        let url = image_url
            .or(attr_image)
            .unwrap_or_else(|| DEFAULT_IMAGE_URL.to_string());
        let sim_load = Rc::downgrade(&sim);
        let alive_load = alive.clone();
        spawn_local(async move {
            let loaded = asset::load_pixels(&url, target_width).await;
            // unmounted while loading
            if !alive_load.get() {
                return;
            }
            let Some(sim) = sim_load.upgrade() else {
                return;
            };
            let mut sim = sim.borrow_mut();
            if let Err(e) = loaded.and_then(|px| sim.populate_from_image(&px)) {
                sim.image_failed(&e);
            }
        });
    } else {
        sim.borrow_mut().populate_random();
    }

    let listeners = events::wire_input_handlers(events::InputWiring {
        canvas: canvas.clone(),
        sim: sim.clone(),
        surface,
    });

    let frame_ctx = frame::FrameContext {
        sim: sim.clone(),
        ctx,
    };
    let frame_loop = frame::start_loop(window, frame_ctx);

    log::info!(
        "[mount] #{canvas_id} {}x{} @{}x dpr",
        surface.logical_width,
        surface.logical_height,
        surface.dpr
    );

    Ok(Some(Mounted {
        alive,
        frame_loop,
        listeners,
    }))
}
