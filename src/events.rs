use crate::constants::POINTER_THROTTLE_MS;
use crate::dom;
use dotfield_core::DotField;
use glam::Vec2;
use instant::Instant;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct InputWiring {
    pub window: web::Window,
    pub container: web::Element,
    pub canvas: web::HtmlCanvasElement,
    pub ctx: web::CanvasRenderingContext2d,
    pub field: Rc<RefCell<DotField>>,
}

struct ListenerEntry {
    target: web::EventTarget,
    event: &'static str,
    closure: Closure<dyn FnMut(web::Event)>,
}

/// Explicitly-owned event listeners: every closure registered at mount is
/// retained here so teardown can deregister all of them, rather than leaking
/// page-wide handlers with `Closure::forget`.
pub struct Listeners {
    entries: Vec<ListenerEntry>,
}

impl Listeners {
    fn attach(
        &mut self,
        target: &web::EventTarget,
        event: &'static str,
        closure: Closure<dyn FnMut(web::Event)>,
    ) {
        let _ = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
        self.entries.push(ListenerEntry {
            target: target.clone(),
            event,
            closure,
        });
    }

    pub fn detach(&self) {
        for entry in &self.entries {
            let _ = entry
                .target
                .remove_event_listener_with_callback(entry.event, entry.closure.as_ref().unchecked_ref());
        }
    }
}

#[inline]
fn canvas_relative(client: Vec2, canvas: &web::HtmlCanvasElement) -> Vec2 {
    let rect = canvas.get_bounding_client_rect();
    client - Vec2::new(rect.left() as f32, rect.top() as f32)
}

#[inline]
fn mouse_client(ev: &web::MouseEvent) -> Vec2 {
    Vec2::new(ev.client_x() as f32, ev.client_y() as f32)
}

// First touch point stands in for the pointer
#[inline]
fn touch_client(ev: &web::TouchEvent) -> Option<Vec2> {
    let touch = ev.touches().get(0)?;
    Some(Vec2::new(touch.client_x() as f32, touch.client_y() as f32))
}

/// Register all input and resize handlers. The canvas has
/// `pointer-events: none`, so pointer listeners go on the window; resize
/// rebuilds the grid synchronously against the container's new size.
pub fn wire(w: InputWiring, epoch: Instant) -> Listeners {
    let mut listeners = Listeners { entries: Vec::new() };

    // mousemove, throttled to bound per-event CPU cost
    {
        let field = w.field.clone();
        let canvas = w.canvas.clone();
        let last_move_ms = Cell::new(f64::NEG_INFINITY);
        let closure = Closure::wrap(Box::new(move |ev: web::Event| {
            let now_ms = epoch.elapsed().as_secs_f64() * 1000.0;
            if now_ms - last_move_ms.get() < POINTER_THROTTLE_MS {
                return;
            }
            last_move_ms.set(now_ms);
            let ev: web::MouseEvent = ev.unchecked_into();
            let client = mouse_client(&ev);
            field
                .borrow_mut()
                .on_pointer_move(canvas_relative(client, &canvas), client, now_ms);
        }) as Box<dyn FnMut(web::Event)>);
        listeners.attach(w.window.as_ref(), "mousemove", closure);
    }

    // touchmove maps through the same sampling path, unthrottled
    {
        let field = w.field.clone();
        let canvas = w.canvas.clone();
        let closure = Closure::wrap(Box::new(move |ev: web::Event| {
            let ev: web::TouchEvent = ev.unchecked_into();
            if let Some(client) = touch_client(&ev) {
                let now_ms = epoch.elapsed().as_secs_f64() * 1000.0;
                field
                    .borrow_mut()
                    .on_pointer_move(canvas_relative(client, &canvas), client, now_ms);
            }
        }) as Box<dyn FnMut(web::Event)>);
        listeners.attach(w.window.as_ref(), "touchmove", closure);
    }

    // click -> shock
    {
        let field = w.field.clone();
        let canvas = w.canvas.clone();
        let closure = Closure::wrap(Box::new(move |ev: web::Event| {
            let ev: web::MouseEvent = ev.unchecked_into();
            let pos = canvas_relative(mouse_client(&ev), &canvas);
            let shocked = field.borrow_mut().on_activate(pos);
            if !shocked.is_empty() {
                log::debug!("[shock] displaced {} dots", shocked.len());
            }
        }) as Box<dyn FnMut(web::Event)>);
        listeners.attach(w.window.as_ref(), "click", closure);
    }

    // touchstart -> shock
    {
        let field = w.field.clone();
        let canvas = w.canvas.clone();
        let closure = Closure::wrap(Box::new(move |ev: web::Event| {
            let ev: web::TouchEvent = ev.unchecked_into();
            if let Some(client) = touch_client(&ev) {
                field
                    .borrow_mut()
                    .on_activate(canvas_relative(client, &canvas));
            }
        }) as Box<dyn FnMut(web::Event)>);
        listeners.attach(w.window.as_ref(), "touchstart", closure);
    }

    // window resize -> backing-store sync + synchronous grid rebuild
    {
        let field = w.field.clone();
        let container = w.container.clone();
        let canvas = w.canvas.clone();
        let ctx = w.ctx.clone();
        let closure = Closure::wrap(Box::new(move |_ev: web::Event| {
            let css = dom::sync_canvas_backing_size(&container, &canvas, &ctx);
            field.borrow_mut().resize(css.x, css.y);
        }) as Box<dyn FnMut(web::Event)>);
        listeners.attach(w.window.as_ref(), "resize", closure);
    }

    listeners
}
