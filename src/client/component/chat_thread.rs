use dioxus::prelude::*;

use crate::{client::model::auth::AuthContext, model::chat::ChatMessageDto};

#[cfg(feature = "web")]
use crate::client::api::chat::{get_messages, send_message};

/// Milliseconds between polls for new messages.
#[cfg(feature = "web")]
const POLL_INTERVAL_MS: u32 = 3_000;

/// Appends messages not already present, keeping id order.
fn merge_messages(messages: &mut Vec<ChatMessageDto>, incoming: Vec<ChatMessageDto>) {
    for message in incoming {
        if !messages.iter().any(|m| m.id == message.id) {
            messages.push(message);
        }
    }
    messages.sort_by_key(|m| m.id);
}

/// Conversation between the office and the owner of `user_id`'s thread.
#[component]
pub fn ChatThread(user_id: i32) -> Element {
    let auth = use_context::<AuthContext>();
    let current_user_id = auth.read().user_id();

    let mut messages = use_signal(Vec::<ChatMessageDto>::new);
    let mut draft = use_signal(String::new);
    let mut sending = use_signal(|| false);
    let mut error = use_signal(|| None::<String>);

    #[cfg(feature = "web")]
    use_future(move || async move {
        match get_messages(user_id, None).await {
            Ok(initial) => messages.set(initial),
            Err(err) => error.set(Some(err.message)),
        }
        loop {
            gloo_timers::future::TimeoutFuture::new(POLL_INTERVAL_MS).await;
            let after_id = messages.peek().last().map(|m| m.id);
            match get_messages(user_id, after_id).await {
                Ok(new_messages) if !new_messages.is_empty() => {
                    merge_messages(&mut messages.write(), new_messages);
                }
                Ok(_) => {}
                Err(err) => {
                    dioxus_logger::tracing::warn!("Failed to poll chat: {}", err);
                }
            }
        }
    });

    let on_send = move |evt: FormEvent| {
        evt.prevent_default();
        let body = draft().trim().to_string();
        if body.is_empty() {
            return;
        }
        sending.set(true);

        #[cfg(feature = "web")]
        spawn(async move {
            match send_message(user_id, body).await {
                Ok(message) => {
                    merge_messages(&mut messages.write(), vec![message]);
                    draft.set(String::new());
                    error.set(None);
                }
                Err(err) => error.set(Some(err.message)),
            }
            sending.set(false);
        });
        #[cfg(not(feature = "web"))]
        let _ = body;
    };

    rsx! {
        div {
            class: "card bg-base-200 w-full",
            div {
                class: "card-body flex flex-col gap-3",
                div {
                    class: "flex flex-col gap-2 h-[60vh] overflow-y-auto",
                    if messages().is_empty() {
                        p { class: "opacity-50 text-center my-auto", "ยังไม่มีข้อความ" }
                    }
                    for message in messages() {
                        {
                            let mine = Some(message.sender_id) == current_user_id;
                            let sent_at = message.created_at.format("%Y-%m-%d %H:%M").to_string();
                            rsx! {
                                div {
                                    key: "{message.id}",
                                    class: if mine { "chat chat-end" } else { "chat chat-start" },
                                    div {
                                        class: "chat-header text-xs opacity-60",
                                        if message.sender_admin { "เจ้าหน้าที่ · " }
                                        "{sent_at}"
                                    }
                                    div {
                                        class: if mine { "chat-bubble chat-bubble-primary whitespace-pre-line" } else { "chat-bubble whitespace-pre-line" },
                                        "{message.body}"
                                    }
                                }
                            }
                        }
                    }
                }
                if let Some(err) = error() {
                    p { class: "text-error text-sm", "{err}" }
                }
                form {
                    class: "flex gap-2",
                    onsubmit: on_send,
                    input {
                        class: "input input-bordered flex-1",
                        placeholder: "พิมพ์ข้อความ...",
                        maxlength: "2000",
                        value: "{draft}",
                        oninput: move |evt| draft.set(evt.value()),
                    }
                    button {
                        r#type: "submit",
                        class: "btn btn-primary",
                        disabled: sending(),
                        "ส่ง"
                    }
                }
            }
        }
    }
}
