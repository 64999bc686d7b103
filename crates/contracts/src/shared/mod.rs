pub mod a11y;
pub mod autosave;
pub mod bills;
pub mod charts;
pub mod config;
pub mod form;
pub mod format;
pub mod inbox;
pub mod navigation;
pub mod requests;
pub mod submission;
pub mod toast;
pub mod validation;
