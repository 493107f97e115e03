use mandelscope_core::InputEvent;
use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

/// Shared FIFO between DOM listeners (producers) and the frame tick (consumer).
#[derive(Clone, Debug, Default)]
pub struct EventQueue {
    inner: Rc<RefCell<VecDeque<InputEvent>>>,
}

impl EventQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&self, event: InputEvent) {
        self.inner.borrow_mut().push_back(event);
    }

    /// Remove and return every queued event, oldest first.
    pub fn drain(&self) -> Vec<InputEvent> {
        self.inner.borrow_mut().drain(..).collect()
    }

    pub fn len(&self) -> usize {
        self.inner.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.borrow().is_empty()
    }
}
