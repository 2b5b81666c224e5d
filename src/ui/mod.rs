//! UI components for NeuroDash
//!
//! This module contains all user interface components built with Dioxus.

pub mod chat;
pub mod compare;
pub mod components;
pub mod console;
pub mod detail;
pub mod evaluate;
pub mod home;

use crate::app::AppState;
use crate::route::Route;
use dioxus::prelude::*;

/// Page switch plus the app-wide chat widget
#[component]
pub fn Layout() -> Element {
    let app_state = use_context::<AppState>();
    let (theme, chat_enabled) = {
        let settings = app_state.settings.read();
        (settings.theme, settings.chat_enabled)
    };
    let route = app_state.route();

    rsx! {
        div {
            class: "app-root {theme.class()}",

            match route {
                Route::Home => rsx! { home::HomePage {} },
                Route::Console => rsx! { console::ConsolePage {} },
                Route::Compare { ids } => rsx! { compare::ComparePage { ids: ids.clone() } },
                Route::ModelDetail { id } => rsx! {
                    detail::ModelDetailPage { key: "{id}", id: id.clone() }
                },
                Route::Evaluate => rsx! { evaluate::EvaluatePage {} },
            }

            if chat_enabled {
                chat::ChatWidget {}
            }
        }
    }
}
