use crate::render;
use dotfield_core::DotField;
use instant::Instant;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    pub field: Rc<RefCell<DotField>>,
    pub ctx: web::CanvasRenderingContext2d,
    pub circle: web::Path2D,
    pub running: Rc<Cell<bool>>,
    pub last_instant: Instant,
}

impl FrameContext {
    /// One frame: advance in-flight displacements by the real elapsed time,
    /// then repaint from current state only — nothing is queued across frames.
    pub fn frame(&mut self) {
        let now = Instant::now();
        let dt_sec = (now - self.last_instant).as_secs_f32();
        self.last_instant = now;

        let mut field = self.field.borrow_mut();
        field.tick(dt_sec);
        render::draw_field(&self.ctx, &self.circle, &field);
    }
}

/// Drive `FrameContext::frame` from `requestAnimationFrame` until the running
/// flag is cleared; once it is, the closure chain simply ends and no stray
/// callback ever touches a torn-down field.
pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        if !frame_ctx_tick.borrow().running.get() {
            return;
        }
        frame_ctx_tick.borrow_mut().frame();
        if let Some(w) = web::window() {
            _ = w.request_animation_frame(
                tick_clone
                    .borrow()
                    .as_ref()
                    .unwrap()
                    .as_ref()
                    .unchecked_ref(),
            );
        }
    }) as Box<dyn FnMut()>));
    if let Some(w) = web::window() {
        _ = w.request_animation_frame(tick.borrow().as_ref().unwrap().as_ref().unchecked_ref());
    }
}
