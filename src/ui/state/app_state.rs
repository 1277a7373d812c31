use dioxus::prelude::{use_signal, Signal};

use crate::ui::nav::{PageKind, DEFAULT_PAGE};

#[derive(Clone, Copy)]
pub struct AppState {
    pub active_page: Signal<PageKind>,
    pub status: Signal<String>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            active_page: use_signal(|| DEFAULT_PAGE),
            status: use_signal(|| "就绪".to_string()),
        }
    }
}
