use crate::app::AppState;
use crate::route::Route;
use dioxus::prelude::*;

#[component]
pub fn BackLink(label: String, to: Route) -> Element {
    let app_state = use_context::<AppState>();

    rsx! {
        button {
            class: "back-link",
            onclick: move |_| app_state.navigate(to.clone()),
            "← {label}"
        }
    }
}
