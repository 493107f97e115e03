pub mod dom_events;
pub mod event_queue;

pub use dom_events::DomListeners;
pub use event_queue::EventQueue;
