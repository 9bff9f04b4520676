use dioxus::prelude::*;

#[derive(Clone, PartialEq)]
pub enum ButtonVariant {
    Primary,
    Secondary,
}

impl ButtonVariant {
    fn class(&self) -> &'static str {
        match self {
            ButtonVariant::Primary => "c-button--primary",
            ButtonVariant::Secondary => "c-button--secondary",
        }
    }
}

#[component]
pub fn Button(
    variant: Option<ButtonVariant>,
    disabled: Option<bool>,
    title: Option<String>,
    onclick: Option<EventHandler<MouseEvent>>,
    children: Element,
) -> Element {
    let variant_class = variant.unwrap_or(ButtonVariant::Primary).class();
    let disabled = disabled.unwrap_or(false);
    let title = title.unwrap_or_default();

    rsx! {
        button {
            class: "c-button {variant_class}",
            disabled: disabled,
            title: "{title}",
            onclick: move |evt| {
                if let Some(handler) = &onclick {
                    handler.call(evt);
                }
            },
            {children}
        }
    }
}
