pub mod footer;
pub mod motion;
pub mod navigation;
pub mod preloader;
pub mod scroll_top;
pub mod theme_toggle;
