//! Native host that draws each frame as text on stdout.
//!
//! Plays a short scripted session (zoom, recenter, more iterations, dump,
//! quit) through `RenderLoop::run` at the default 6 frames per second.
//!
//! Run with `cargo run -p mandelscope-compute --example terminal`.

use mandelscope_compute::{
    DisplaySurface, ExplorerConfig, FixedRateThrottle, InputEvent, Key, PointerButton,
    RenderLoop, StderrSink, ViewState,
};
use std::collections::VecDeque;
use std::convert::Infallible;

const COLUMNS: u32 = 80;
const ROWS: u32 = 64;

struct TerminalSurface {
    width: u32,
    cells: Vec<bool>,
    script: VecDeque<Vec<InputEvent>>,
}

impl TerminalSurface {
    fn new(width: u32, height: u32, script: Vec<Vec<InputEvent>>) -> Self {
        Self {
            width,
            cells: vec![false; (width * height) as usize],
            script: script.into(),
        }
    }
}

impl DisplaySurface for TerminalSurface {
    type Error = Infallible;

    fn clear(&mut self) {
        self.cells.fill(false);
    }

    fn mark_point(&mut self, px: u32, py: u32) {
        if let Some(cell) = self.cells.get_mut((py * self.width + px) as usize) {
            *cell = true;
        }
    }

    fn present(&mut self) -> Result<(), Infallible> {
        let mut frame = String::with_capacity(self.cells.len() + self.cells.len() / 8);
        for row in self.cells.chunks(self.width as usize) {
            frame.extend(row.iter().map(|&stable| if stable { '#' } else { ' ' }));
            frame.push('\n');
        }
        println!("{frame}");
        Ok(())
    }

    fn poll_events(&mut self) -> Vec<InputEvent> {
        // Running out of script ends the session
        self.script.pop_front().unwrap_or_else(|| vec![InputEvent::Quit])
    }
}

fn main() {
    let view = ViewState::default().with_center(-0.5, 0.0).with_scale(3.0);
    let config = ExplorerConfig::new(COLUMNS, ROWS)
        .and_then(|config| config.with_view(view))
        .unwrap_or_else(|err| panic!("invalid terminal config: {err}"));

    let key = |c| InputEvent::KeyPress(Key::Char(c));
    let script = vec![
        vec![],
        vec![key('z')],
        vec![InputEvent::PointerPress {
            button: PointerButton::Primary,
            px: 24.0,
            py: 32.0,
        }],
        vec![key('a'), key('a'), key('e')],
        vec![InputEvent::Quit],
    ];

    let mut surface = TerminalSurface::new(COLUMNS, ROWS, script);
    let mut throttle = FixedRateThrottle::new(config.target_fps);
    let mut render_loop = RenderLoop::new(&config, Box::new(StderrSink));

    match render_loop.run(&mut surface, &mut throttle) {
        Ok(()) => {}
        Err(never) => match never {},
    }

    let stats = render_loop.last_stats();
    println!(
        "{} frames, last frame {}/{} stable",
        stats.frame, stats.stable, stats.samples
    );
}
