#![cfg(target_arch = "wasm32")]
use dotfield_core::{DotField, FieldConfig};
use instant::Instant;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

mod constants;
mod dom;
mod events;
mod frame;
mod render;

use constants::{CANVAS_ID, CONTAINER_ID};

struct Instance {
    running: Rc<Cell<bool>>,
    listeners: events::Listeners,
}

thread_local! {
    static INSTANCE: RefCell<Option<Instance>> = const { RefCell::new(None) };
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("dotfield-web starting");

    if let Err(e) = mount() {
        log::error!("init error: {e:?}");
    }
    Ok(())
}

/// Tear down the background: stop the frame loop and deregister every
/// listener registered at mount. Safe to call when nothing is mounted.
#[wasm_bindgen]
pub fn unmount() {
    INSTANCE.with(|slot| {
        if let Some(instance) = slot.borrow_mut().take() {
            instance.running.set(false);
            instance.listeners.detach();
            log::info!("dotfield-web unmounted");
        }
    });
}

fn mount() -> anyhow::Result<()> {
    // A page re-running its scripts must not double-wire the background
    if INSTANCE.with(|slot| slot.borrow().is_some()) {
        return Ok(());
    }

    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let container = document
        .get_element_by_id(CONTAINER_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{CONTAINER_ID}"))?;
    let canvas: web::HtmlCanvasElement = document
        .get_element_by_id(CANVAS_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{CANVAS_ID} inside #{CONTAINER_ID}"))?
        .dyn_into()
        .map_err(|_| anyhow::anyhow!("#{CANVAS_ID} is not a canvas element"))?;
    let ctx = canvas
        .get_context("2d")
        .map_err(|e| anyhow::anyhow!("{e:?}"))?
        .ok_or_else(|| anyhow::anyhow!("2d context unavailable"))?
        .dyn_into::<web::CanvasRenderingContext2d>()
        .map_err(|_| anyhow::anyhow!("2d context has unexpected type"))?;

    let config = FieldConfig::default();
    let circle = render::circle_path((config.dot_size / 2.0) as f64)
        .ok_or_else(|| anyhow::anyhow!("failed to build circle path"))?;

    let field = Rc::new(RefCell::new(DotField::new(config)));
    let running = Rc::new(Cell::new(true));
    let epoch = Instant::now();

    // Initial layout against the container's current size
    let css = dom::sync_canvas_backing_size(&container, &canvas, &ctx);
    field.borrow_mut().resize(css.x, css.y);
    {
        let layout = field.borrow().layout();
        log::info!(
            "[mount] {}x{} css px, {} cols x {} rows",
            css.x,
            css.y,
            layout.cols,
            layout.rows
        );
    }

    let listeners = events::wire(
        events::InputWiring {
            window,
            container,
            canvas,
            ctx: ctx.clone(),
            field: field.clone(),
        },
        epoch,
    );

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        field,
        ctx,
        circle,
        running: running.clone(),
        last_instant: epoch,
    }));
    frame::start_loop(frame_ctx);

    INSTANCE.with(|slot| *slot.borrow_mut() = Some(Instance { running, listeners }));
    Ok(())
}
