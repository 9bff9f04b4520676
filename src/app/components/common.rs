use dioxus::prelude::*;

// Reusable Loading Component (BEM: c-loading)
#[component]
pub fn LoadingText(message: String) -> Element {
    rsx! {
        div { class: "c-loading",
            div { class: "c-loading__spinner" }
            p { class: "c-loading__text", "{message}" }
        }
    }
}

// Reusable Error Message Component (BEM: c-error)
#[component]
pub fn ErrorMessage(message: String) -> Element {
    rsx! {
        div { class: "c-error", role: "alert",
            span { class: "c-error__icon", "❌" }
            p { class: "c-error__text", "{message}" }
        }
    }
}

// Empty state shown before the first message (BEM: c-empty-state)
#[component]
pub fn EmptyState(icon: String, title: String, description: String) -> Element {
    rsx! {
        div { class: "c-empty-state",
            div { class: "c-empty-state__icon", "{icon}" }
            h2 { class: "c-empty-state__title", "{title}" }
            p { class: "c-empty-state__description", "{description}" }
        }
    }
}
