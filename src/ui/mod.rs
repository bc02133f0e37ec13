//! UI components for Docshelf

pub mod drag_proxy;
pub mod editor;
pub mod preview;
pub mod sidebar;
pub mod status_bar;
