//! Diagnostic output for the "dump state" command.

use crate::ViewState;
use std::io::Write;

/// Human-readable one-line summary of a view.
pub fn describe_view(view: &ViewState) -> String {
    format!(
        "x: {}, y: {}, scale: {}, iter: {}, dilation: {}",
        view.center.x, view.center.y, view.scale, view.max_iterations, view.sampling_stride
    )
}

/// Receives view snapshots when the user asks for them.
pub trait DiagnosticSink {
    fn emit(&mut self, view: &ViewState);
}

/// Writes dump lines to standard error.
#[derive(Debug, Default, Clone, Copy)]
pub struct StderrSink;

impl DiagnosticSink for StderrSink {
    fn emit(&mut self, view: &ViewState) {
        let _ = writeln!(std::io::stderr(), "{}", describe_view(view));
    }
}

/// Routes dump lines through the `log` facade at info level.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogSink;

impl DiagnosticSink for LogSink {
    fn emit(&mut self, view: &ViewState) {
        log::info!("{}", describe_view(view));
    }
}

/// Collects dump lines in memory.
impl DiagnosticSink for Vec<String> {
    fn emit(&mut self, view: &ViewState) {
        self.push(describe_view(view));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn describe_contains_all_five_values() {
        let view = ViewState::default()
            .with_center(-0.5, 0.25)
            .with_scale(0.125)
            .with_max_iterations(70)
            .with_sampling_stride(3);

        assert_eq!(
            describe_view(&view),
            "x: -0.5, y: 0.25, scale: 0.125, iter: 70, dilation: 3"
        );
    }

    #[test]
    fn vec_sink_collects_lines() {
        let mut lines: Vec<String> = Vec::new();
        lines.emit(&ViewState::default());
        lines.emit(&ViewState::default().with_scale(2.0));

        assert_eq!(lines.len(), 2);
        assert!(lines[1].contains("scale: 2"));
    }

    #[test]
    fn stderr_and_log_sinks_accept_views() {
        StderrSink.emit(&ViewState::default());
        LogSink.emit(&ViewState::default());
    }
}
