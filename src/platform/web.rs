//! Browser animation loop (WASM only)
//!
//! Drives a `FieldDriver` from `requestAnimationFrame` and feeds it pointer
//! and resize events. Everything runs on the browser's single thread, so
//! shared state is `Rc<RefCell<_>>`.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use glam::Vec2;
use wasm_bindgen::prelude::*;
use web_sys::{Event, EventTarget, HtmlCanvasElement, MouseEvent, Window};

use super::driver::FieldDriver;
use crate::error::FieldError;
use crate::renderer::CanvasSurface;
use crate::settings::FieldSettings;

/// Id of the background canvas on the landing page
pub const CANVAS_ID: &str = "particle-canvas";

struct WebField {
    driver: FieldDriver,
    surface: CanvasSurface,
}

impl WebField {
    /// Match the canvas to the window and rebuild the field
    fn fit_to_window(&mut self, window: &Window) {
        let (width, height) = window_size(window);
        self.surface.set_size(width as u32, height as u32);
        self.driver.resize(width, width, height);
    }
}

/// An event listener that can be detached again
struct Listener {
    target: EventTarget,
    event: &'static str,
    closure: Closure<dyn FnMut(Event)>,
}

impl Listener {
    fn attach(
        target: EventTarget,
        event: &'static str,
        handler: impl FnMut(Event) + 'static,
    ) -> Result<Self, FieldError> {
        let closure = Closure::<dyn FnMut(Event)>::new(handler);
        target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
        Ok(Self {
            target,
            event,
            closure,
        })
    }

    fn detach(&self) {
        if let Err(e) = self
            .target
            .remove_event_listener_with_callback(self.event, self.closure.as_ref().unchecked_ref())
        {
            log::warn!("Failed to detach {} listener: {e:?}", self.event);
        }
    }
}

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;

/// A running particle field. Stopping (or dropping) it cancels the pending
/// frame and detaches its listeners.
pub struct AnimationHandle {
    window: Window,
    frame_id: Rc<Cell<Option<i32>>>,
    callback: FrameCallback,
    listeners: Vec<Listener>,
}

impl AnimationHandle {
    pub fn stop(&mut self) {
        if let Some(id) = self.frame_id.take() {
            if let Err(e) = self.window.cancel_animation_frame(id) {
                log::warn!("Failed to cancel frame {id}: {e:?}");
            }
        }
        // Dropping the closure also breaks its reference to itself
        if self.callback.borrow_mut().take().is_some() {
            log::info!("Particle field stopped");
        }
        for listener in self.listeners.drain(..) {
            listener.detach();
        }
    }
}

impl Drop for AnimationHandle {
    fn drop(&mut self) {
        self.stop();
    }
}

fn window_size(window: &Window) -> (f32, f32) {
    let read = |v: Result<JsValue, JsValue>| v.ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    (read(window.inner_width()) as f32, read(window.inner_height()) as f32)
}

fn request_frame(window: &Window, callback: &FrameCallback, frame_id: &Cell<Option<i32>>) {
    if let Some(cb) = callback.borrow().as_ref() {
        frame_id.set(window.request_animation_frame(cb.as_ref().unchecked_ref()).ok());
    }
}

/// Attach a particle field to `canvas` and start animating it
pub fn start(
    canvas: HtmlCanvasElement,
    settings: FieldSettings,
) -> Result<AnimationHandle, FieldError> {
    let window = web_sys::window().ok_or(FieldError::NoWindow)?;
    let document = window.document().ok_or(FieldError::NoDocument)?;

    let (width, height) = window_size(&window);
    let surface = CanvasSurface::new(canvas)?;
    surface.set_size(width as u32, height as u32);

    let seed = js_sys::Date::now() as u64;
    let driver = FieldDriver::new(settings, width, width, height, seed);
    let state = Rc::new(RefCell::new(WebField { driver, surface }));

    let mut listeners = Vec::new();

    // Pointer position relative to the canvas
    {
        let state = state.clone();
        listeners.push(Listener::attach(window.clone().into(), "mousemove", move |event| {
            let Some(event) = event.dyn_ref::<MouseEvent>() else {
                return;
            };
            let mut s = state.borrow_mut();
            let rect = s.surface.canvas().get_bounding_client_rect();
            let pointer = Vec2::new(
                (event.client_x() as f64 - rect.left()) as f32,
                (event.client_y() as f64 - rect.top()) as f32,
            );
            s.driver.set_pointer(Some(pointer));
        })?);
    }

    // Pointer left the page
    if let Some(root) = document.document_element() {
        let state = state.clone();
        listeners.push(Listener::attach(root.into(), "mouseleave", move |_| {
            state.borrow_mut().driver.set_pointer(None);
        })?);
    }

    {
        let state = state.clone();
        let win = window.clone();
        listeners.push(Listener::attach(window.clone().into(), "resize", move |_| {
            state.borrow_mut().fit_to_window(&win);
        })?);
    }

    let frame_id = Rc::new(Cell::new(None));
    let callback: FrameCallback = Rc::new(RefCell::new(None));
    {
        let win = window.clone();
        let frame_id = frame_id.clone();
        let next = callback.clone();
        *callback.borrow_mut() = Some(Closure::new(move |_time: f64| {
            {
                let mut s = state.borrow_mut();
                let WebField { driver, surface } = &mut *s;
                driver.frame(surface);
            }
            request_frame(&win, &next, &frame_id);
        }));
    }
    request_frame(&window, &callback, &frame_id);

    log::info!("Particle field running");
    Ok(AnimationHandle {
        window,
        frame_id,
        callback,
        listeners,
    })
}

thread_local! {
    static ACTIVE: RefCell<Option<AnimationHandle>> = const { RefCell::new(None) };
}

/// Start the field on `canvas`, replacing any field already running
pub fn launch(canvas: HtmlCanvasElement, settings: FieldSettings) -> Result<(), FieldError> {
    stop_particle_field();
    let handle = start(canvas, settings)?;
    ACTIVE.with(|active| *active.borrow_mut() = Some(handle));
    Ok(())
}

/// Find the canvas with id `canvas_id`
pub fn find_canvas(canvas_id: &str) -> Result<HtmlCanvasElement, FieldError> {
    let document = web_sys::window()
        .ok_or(FieldError::NoWindow)?
        .document()
        .ok_or(FieldError::NoDocument)?;
    document
        .get_element_by_id(canvas_id)
        .ok_or_else(|| FieldError::MissingElement(format!("#{canvas_id}")))?
        .dyn_into::<HtmlCanvasElement>()
        .map_err(|_| FieldError::MissingElement(format!("canvas#{canvas_id}")))
}

/// Start the field on the element with id `canvas_id`, with settings from
/// its `data-field-settings` attribute
#[wasm_bindgen(js_name = startParticleField)]
pub fn start_particle_field(canvas_id: &str) -> Result<(), JsValue> {
    let canvas = find_canvas(canvas_id)?;
    let settings = FieldSettings::load_from(&canvas);
    launch(canvas, settings)?;
    Ok(())
}

/// Stop the running field, if any
#[wasm_bindgen(js_name = stopParticleField)]
pub fn stop_particle_field() {
    let handle = ACTIVE.with(|active| active.borrow_mut().take());
    drop(handle);
}
