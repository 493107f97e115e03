//! Browser session: owns the render loop, the canvas surface and the DOM
//! listeners, and ticks them at the configured frame rate.

use crate::input::{DomListeners, EventQueue};
use crate::rendering::canvas_utils::performance_now;
use crate::rendering::CanvasSurface;
use gloo_timers::callback::{Interval, Timeout};
use mandelscope_compute::{LoopControl, RenderLoop};
use mandelscope_core::{describe_view, ExplorerConfig, InputEvent, LogSink};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys::HtmlCanvasElement;

struct Session {
    render_loop: RenderLoop,
    surface: CanvasSurface,
    listeners: Option<DomListeners>,
}

impl Session {
    fn is_running(&self) -> bool {
        self.listeners.is_some()
    }

    /// Render one frame and apply the input gathered since the last one.
    fn tick(&mut self) -> LoopControl {
        if !self.is_running() {
            return LoopControl::Quit;
        }

        let start = performance_now();
        match self.render_loop.frame(&mut self.surface) {
            Ok(LoopControl::Continue) => {
                log::debug!("Frame rendered in {:.1}ms", performance_now() - start);
                LoopControl::Continue
            }
            Ok(LoopControl::Quit) => {
                self.listeners = None;
                log::info!("Explorer stopped");
                LoopControl::Quit
            }
            Err(e) => {
                // Nothing is carried between frames; the next tick redraws.
                log::error!("Frame failed: {:?}", e);
                LoopControl::Continue
            }
        }
    }
}

/// JS-side handle to a running explorer.
#[wasm_bindgen]
pub struct ExplorerHandle {
    events: EventQueue,
    session: Rc<RefCell<Session>>,
}

#[wasm_bindgen]
impl ExplorerHandle {
    /// Ask the explorer to stop after the current frame.
    pub fn quit(&self) {
        self.events.push(InputEvent::Quit);
    }

    #[wasm_bindgen(js_name = isRunning)]
    pub fn is_running(&self) -> bool {
        self.session.borrow().is_running()
    }

    /// Current view parameters as a human-readable line.
    #[wasm_bindgen(js_name = describeView)]
    pub fn describe_view(&self) -> String {
        describe_view(self.session.borrow().render_loop.view())
    }
}

/// Start an explorer on a `width` x `height` canvas appended to the page body.
#[wasm_bindgen]
pub fn start(width: u32, height: u32) -> Result<ExplorerHandle, JsValue> {
    init_logging();
    let config = ExplorerConfig::new(width, height).map_err(config_error)?;
    launch(config)
}

/// Start an explorer configured from the page URL (`?width=&height=&fps=`).
#[wasm_bindgen(js_name = startFromLocation)]
pub fn start_from_location() -> Result<ExplorerHandle, JsValue> {
    init_logging();
    let search = web_sys::window()
        .ok_or_else(|| JsValue::from_str("No window"))?
        .location()
        .search()?;
    let config = ExplorerConfig::from_query(&search).map_err(config_error)?;
    launch(config)
}

fn init_logging() {
    console_error_panic_hook::set_once();
    _ = console_log::init_with_level(log::Level::Debug);
}

fn config_error(e: mandelscope_core::ConfigError) -> JsValue {
    JsValue::from_str(&format!("Invalid configuration: {}", e))
}

fn launch(config: ExplorerConfig) -> Result<ExplorerHandle, JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("No window"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("No document"))?;
    let body = document
        .body()
        .ok_or_else(|| JsValue::from_str("No body"))?;

    let canvas = document
        .create_element("canvas")?
        .dyn_into::<HtmlCanvasElement>()?;
    body.append_child(&canvas)?;

    let events = EventQueue::new();
    let surface = CanvasSurface::new(&canvas, config.canvas, events.clone())?;
    let listeners = DomListeners::attach(&window, &canvas, &events)?;

    log::info!(
        "Starting explorer: {}x{} at {} fps",
        config.canvas.width,
        config.canvas.height,
        config.target_fps
    );

    let session = Rc::new(RefCell::new(Session {
        render_loop: RenderLoop::new(&config, Box::new(LogSink)),
        surface,
        listeners: Some(listeners),
    }));

    // First frame right away, then one per interval
    session.borrow_mut().tick();

    let interval_slot: Rc<RefCell<Option<Interval>>> = Rc::new(RefCell::new(None));
    let tick_session = session.clone();
    let tick_slot = interval_slot.clone();
    let interval = Interval::new(config.frame_interval_ms(), move || {
        if tick_session.borrow_mut().tick() == LoopControl::Quit {
            // Cancel outside of the interval's own callback
            let slot = tick_slot.clone();
            Timeout::new(0, move || {
                slot.borrow_mut().take();
            })
            .forget();
        }
    });
    *interval_slot.borrow_mut() = Some(interval);

    Ok(ExplorerHandle { events, session })
}
