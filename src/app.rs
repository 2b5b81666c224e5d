//! Root Dioxus application component
//!
//! This module contains the main App component that serves as the root of the UI tree.

use crate::assistant::ChatSession;
use crate::catalog::{catalog, Catalog};
use crate::route::Route;
use crate::storage::settings::{load_settings, save_settings, AppSettings};
use crate::ui::Layout;
use dioxus::prelude::*;

const STYLES: &str = include_str!("../assets/style.css");

/// Global application state shared across components
#[derive(Clone, Copy)]
pub struct AppState {
    pub catalog: &'static Catalog,
    pub settings: Signal<AppSettings>,
    /// Current location string, e.g. `/console/compare?ids=1,3`
    pub location: Signal<String>,
    /// Chat widget state - survives navigation
    pub chat: Signal<ChatSession>,
}

impl AppState {
    pub fn new() -> Self {
        let settings = load_settings();
        tracing::info!("AppState initialized (theme: {:?})", settings.theme);

        Self {
            catalog: catalog(),
            settings: Signal::new(settings),
            location: Signal::new(Route::default().to_string()),
            chat: Signal::new(ChatSession::new()),
        }
    }

    /// Move to `route`. Only its location string is kept, so every page
    /// reads its parameters back through [`Route::parse`].
    pub fn navigate(&self, route: Route) {
        let location = route.to_string();
        tracing::debug!("Navigating to {}", location);
        let mut current = self.location;
        current.set(location);
    }

    /// Route for the current location
    pub fn route(&self) -> Route {
        Route::parse(&self.location.read())
    }

    /// Apply a settings change and persist it
    pub fn update_settings(&self, update: impl FnOnce(&mut AppSettings)) {
        let mut signal = self.settings;
        let mut settings = signal.write();
        update(&mut *settings);
        settings.validate();
        if let Err(error) = save_settings(&*settings) {
            tracing::error!("Failed to save settings: {}", error);
        }
    }
}

#[component]
pub fn App() -> Element {
    use_context_provider(AppState::new);

    rsx! {
        style { "{STYLES}" }
        Layout {}
    }
}
