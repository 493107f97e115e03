use mandelscope_core::InputEvent;

/// Anything that can show a frame of marked pixels and deliver input events.
///
/// Marking and clearing work on a back buffer and cannot fail; only handing
/// the finished frame to the platform can.
pub trait DisplaySurface {
    type Error;

    /// Reset every pixel of the back buffer to the background.
    fn clear(&mut self);

    /// Mark one pixel as belonging to the set.
    fn mark_point(&mut self, px: u32, py: u32);

    /// Show the back buffer.
    fn present(&mut self) -> Result<(), Self::Error>;

    /// Take all events received since the last call, oldest first.
    fn poll_events(&mut self) -> Vec<InputEvent>;
}
