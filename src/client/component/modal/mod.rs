pub mod confirmation_modal;

use dioxus::prelude::*;

pub use confirmation_modal::ConfirmationModal;

/// DaisyUI modal toggled by `show`. Escape and the backdrop close it unless `prevent_close`.
#[component]
pub fn Modal(
    show: Signal<bool>,
    title: String,
    prevent_close: bool,
    #[props(default)] wide: bool,
    children: Element,
) -> Element {
    let mut close = move || {
        if !prevent_close {
            show.set(false);
        }
    };

    #[cfg(feature = "web")]
    use_effect(move || {
        if show() {
            document::eval(r#"document.querySelector('.modal-open')?.focus()"#);
        }
    });

    let width = if wide { "max-w-3xl" } else { "max-w-lg" };

    rsx! {
        div {
            class: if show() { "modal modal-open modal-bottom sm:modal-middle" } else { "modal" },
            tabindex: "-1",
            onkeydown: move |evt| {
                if evt.key() == Key::Escape {
                    close();
                }
            },
            div {
                class: "modal-box w-11/12 {width}",
                header {
                    class: "flex items-start justify-between gap-4 mb-4",
                    h3 { class: "font-bold text-lg", "{title}" }
                    if !prevent_close {
                        button {
                            r#type: "button",
                            class: "btn btn-sm btn-circle btn-ghost",
                            onclick: move |_| close(),
                            "✕"
                        }
                    }
                }
                {children}
            }
            div {
                class: "modal-backdrop",
                onclick: move |_| close(),
            }
        }
    }
}
