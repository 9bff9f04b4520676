//! Chat input: Enter sends, Shift+Enter inserts a newline

use dioxus::prelude::*;

#[cfg(target_arch = "wasm32")]
use js_sys::eval as js_eval;

/// Whether `input` may be sent: something besides whitespace, within `max_chars`
pub fn can_submit(input: &str, max_chars: usize) -> bool {
    !input.trim().is_empty() && input.chars().count() <= max_chars
}

#[component]
pub fn ChatInput(
    input: Signal<String>,
    max_chars: usize,
    on_submit: EventHandler<()>,
    on_edit: EventHandler<()>,
) -> Element {
    let mut is_composing = use_signal(|| false);

    // Focus the textarea on mount
    use_effect(move || {
        #[cfg(target_arch = "wasm32")]
        {
            let script = r#"
                setTimeout(() => {
                    const textarea = document.getElementById('chat-input');
                    if (textarea) {
                        textarea.focus();
                    }
                }, 100);
            "#;
            let _ = js_eval(script);
        }
    });

    // Enter to send, Shift+Enter for newline, ignored while an IME composes
    let handle_keypress = move |evt: Event<KeyboardData>| {
        if evt.key() == Key::Enter
            && !evt.modifiers().contains(Modifiers::SHIFT)
            && !*is_composing.read()
        {
            evt.prevent_default();
            if can_submit(&input.read(), max_chars) {
                on_submit.call(());
            }
        }
    };

    let char_count = input.read().chars().count();
    let over_limit = char_count > max_chars;
    let sendable = can_submit(&input.read(), max_chars);
    let counter_class = if over_limit {
        "c-chat-input__counter c-chat-input__counter--over"
    } else {
        "c-chat-input__counter"
    };

    rsx! {
        div {
            id: "chat-input-container",
            class: "c-chat-input",

            textarea {
                id: "chat-input",
                class: "c-chat-input__textarea",
                value: "{input}",
                placeholder: "Type your message... (Enter to send, Shift+Enter for new line)",
                rows: "1",
                oninput: move |evt| {
                    input.set(evt.value());
                    on_edit.call(());
                },
                onkeypress: handle_keypress,
                oncompositionstart: move |_| is_composing.set(true),
                oncompositionend: move |_| is_composing.set(false),
            }

            div { class: "c-chat-input__actions-row",
                span { class: "{counter_class}", "{char_count}/{max_chars}" }

                button {
                    class: "btn btn--send btn--icon-only",
                    title: "Send",
                    disabled: !sendable,
                    onclick: move |_| on_submit.call(()),
                    span { class: "btn__icon", "➤" }
                }
            }
        }
    }
}
