#![cfg(target_arch = "wasm32")]
use std::cell::RefCell;
use std::rc::{Rc, Weak};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use ztoline_core::{Renderer, Viewport};

mod canvas;
mod dom;
mod events;
mod input;
mod timer;

use canvas::CanvasSurface;
use timer::IntervalScheduler;

pub(crate) type Stage = Renderer<CanvasSurface, IntervalScheduler>;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("ztoline starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let (window, document) = dom::window_document()?;
    let (width, height) = dom::inner_size(&window);
    let canvas = dom::attach_canvas(&document, width, height)?;
    let ctx = dom::context_2d(&canvas)?;
    let viewport = Viewport::new(width as f64, height as f64)?;
    log::info!("[stage] canvas {}x{}", width, height);

    // The interval callback only holds a weak handle so the stage can own its scheduler.
    let stage: Rc<RefCell<Stage>> = Rc::new_cyclic(|weak: &Weak<RefCell<Stage>>| {
        let weak = weak.clone();
        let scheduler = IntervalScheduler::new(window.clone(), move || {
            let Some(stage) = weak.upgrade() else {
                return;
            };
            if let Ok(mut stage) = stage.try_borrow_mut() {
                stage.tick();
            }
        });
        RefCell::new(Renderer::new(CanvasSurface::new(ctx), viewport, scheduler))
    });

    stage.borrow_mut().draw();
    events::wire_tap(&canvas, stage);
    Ok(())
}
