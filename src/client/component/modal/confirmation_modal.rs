use dioxus::prelude::*;

use super::Modal;

/// Yes/no dialog for destructive actions. Buttons lock while `is_processing`.
#[component]
pub fn ConfirmationModal(
    show: Signal<bool>,
    title: String,
    message: Element,
    confirm_text: String,
    confirm_class: String,
    is_processing: bool,
    on_confirm: EventHandler<()>,
) -> Element {
    rsx! {
        Modal {
            show,
            title,
            prevent_close: is_processing,
            div { class: "py-2", {message} }
            footer {
                class: "modal-action",
                button {
                    r#type: "button",
                    class: "btn btn-ghost",
                    disabled: is_processing,
                    onclick: move |_| show.set(false),
                    "ยกเลิก"
                }
                button {
                    r#type: "button",
                    class: "btn {confirm_class}",
                    disabled: is_processing,
                    onclick: move |_| on_confirm.call(()),
                    if is_processing {
                        span { class: "loading loading-spinner loading-sm" }
                    } else {
                        "{confirm_text}"
                    }
                }
            }
        }
    }
}
