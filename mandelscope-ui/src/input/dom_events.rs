//! Translation of DOM keyboard and mouse events into explorer input events.

use crate::input::EventQueue;
use mandelscope_core::{InputEvent, Key, PointerButton};
use wasm_bindgen::prelude::*;
use web_sys::{EventTarget, HtmlCanvasElement, KeyboardEvent, MouseEvent, Window};

/// Keyboard event from a `KeyboardEvent.key` identifier.
pub fn key_event(identifier: &str) -> InputEvent {
    InputEvent::KeyPress(Key::from_identifier(identifier))
}

/// Pointer event in canvas pixel coordinates.
///
/// `offset` is relative to the element box as laid out by CSS; when the
/// element is displayed at a different size than its backing store the
/// offset is rescaled to backing-store pixels.
pub fn pointer_event(
    button: i16,
    offset: (i32, i32),
    client_size: (i32, i32),
    canvas_size: (u32, u32),
) -> InputEvent {
    let scale = |offset: i32, client: i32, canvas: u32| {
        if client > 0 {
            offset as f64 * canvas as f64 / client as f64
        } else {
            offset as f64
        }
    };

    InputEvent::PointerPress {
        button: PointerButton::from_index(button.max(0) as u16),
        px: scale(offset.0, client_size.0, canvas_size.0),
        py: scale(offset.1, client_size.1, canvas_size.1),
    }
}

/// Whether the browser's default action (page scroll) should be suppressed.
pub fn is_navigation_key(identifier: &str) -> bool {
    matches!(
        identifier,
        "ArrowLeft" | "ArrowRight" | "ArrowUp" | "ArrowDown"
    )
}

type Listener = Closure<dyn FnMut(web_sys::Event)>;

/// DOM listeners feeding an [`EventQueue`]. Detached on drop.
pub struct DomListeners {
    registrations: Vec<(EventTarget, &'static str, Listener)>,
}

impl DomListeners {
    /// Listen for key presses and page teardown on the window, and mouse
    /// presses on the canvas.
    pub fn attach(
        window: &Window,
        canvas: &HtmlCanvasElement,
        queue: &EventQueue,
    ) -> Result<Self, JsValue> {
        let mut listeners = Self {
            registrations: Vec::new(),
        };

        let keys = queue.clone();
        listeners.add(window, "keydown", move |event: web_sys::Event| {
            let Some(event) = event.dyn_ref::<KeyboardEvent>() else {
                return;
            };
            let identifier = event.key();
            if is_navigation_key(&identifier) {
                event.prevent_default();
            }
            keys.push(key_event(&identifier));
        })?;

        let clicks = queue.clone();
        let target = canvas.clone();
        listeners.add(canvas, "mousedown", move |event: web_sys::Event| {
            let Some(event) = event.dyn_ref::<MouseEvent>() else {
                return;
            };
            clicks.push(pointer_event(
                event.button(),
                (event.offset_x(), event.offset_y()),
                (target.client_width(), target.client_height()),
                (target.width(), target.height()),
            ));
        })?;

        let teardown = queue.clone();
        listeners.add(window, "pagehide", move |_event: web_sys::Event| {
            teardown.push(InputEvent::Quit);
        })?;

        Ok(listeners)
    }

    fn add(
        &mut self,
        target: &EventTarget,
        kind: &'static str,
        handler: impl FnMut(web_sys::Event) + 'static,
    ) -> Result<(), JsValue> {
        let closure: Listener = Closure::wrap(Box::new(handler) as Box<dyn FnMut(_)>);
        target.add_event_listener_with_callback(kind, closure.as_ref().unchecked_ref())?;
        self.registrations.push((target.clone(), kind, closure));
        Ok(())
    }
}

impl Drop for DomListeners {
    fn drop(&mut self) {
        for (target, kind, closure) in self.registrations.drain(..) {
            if let Err(e) =
                target.remove_event_listener_with_callback(kind, closure.as_ref().unchecked_ref())
            {
                log::warn!("Failed to detach {} listener: {:?}", kind, e);
            }
        }
    }
}
