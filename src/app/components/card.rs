use dioxus::prelude::*;

/// Feature card on the landing page
#[component]
pub fn Card(
    icon: String,
    title: String,
    children: Element,
) -> Element {
    rsx! {
        div { class: "c-card",
            div { class: "c-card__header",
                span { class: "c-card__icon", "{icon}" }
                h3 { class: "c-card__title", "{title}" }
            }
            div { class: "c-card__body",
                {children}
            }
        }
    }
}
