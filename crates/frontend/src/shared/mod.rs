pub mod a11y;
pub mod browser;
pub mod charts;
pub mod components;
pub mod icons;
pub mod loading;
pub mod modal_frame;
pub mod storage;
pub mod toast;
