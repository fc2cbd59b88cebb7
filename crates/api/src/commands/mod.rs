//! Commands - view layer to backend bridge

mod poll_view;

pub use poll_view::*;
