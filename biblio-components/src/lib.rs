//! View components shared across the app

pub mod activity;
pub mod buttons;
pub mod icons;
pub mod modal;
pub mod pagination;
pub mod search;
pub mod table;
pub mod toast;

pub const DEFAULT_BUTTON_CLASSES: &str =
    "btn rounded-lg bg-sky-700 px-3 py-2 text-sm font-medium text-white hover:bg-sky-600";
