pub mod clipboard;
pub mod components;
pub mod icons;
pub mod media_query;
pub mod motion;
pub mod scroll_lock;
pub mod window_scroll;
