pub mod app;
pub mod input;
pub mod rendering;

pub use app::{start, start_from_location, ExplorerHandle};
