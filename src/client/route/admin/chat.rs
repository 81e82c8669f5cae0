use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::{
    client::{
        component::{ChatThread, ErrorPage, LoadingPage},
        constant::SITE_NAME,
        model::cache::Cache,
        route::admin::{AdminPage, AdminTab},
        router::Route,
    },
    model::chat::ChatThreadDto,
};

#[cfg(feature = "web")]
use crate::client::api::chat::get_threads;

/// Shortens a message body for the thread list.
fn preview(body: &str) -> String {
    const MAX_CHARS: usize = 60;
    if body.chars().count() > MAX_CHARS {
        format!("{}…", body.chars().take(MAX_CHARS).collect::<String>())
    } else {
        body.to_string()
    }
}

#[component]
pub fn AdminChat() -> Element {
    let mut threads = use_signal(|| Cache::<Vec<ChatThreadDto>>::NotFetched);

    #[cfg(feature = "web")]
    {
        let future = use_resource(get_threads);
        use_effect(move || {
            if let Some(result) = &*future.read_unchecked() {
                if let Err(err) = result {
                    tracing::error!("Failed to fetch chat threads: {}", err);
                }
                threads.set(result.clone().into());
            }
        });
    }

    rsx! {
        Title { "แชท | {SITE_NAME}" }
        match threads() {
            Cache::Fetched(list) => rsx! {
                AdminPage {
                    active_tab: AdminTab::Chat,
                    div {
                        class: "card bg-base-200",
                        div {
                            class: "card-body",
                            if list.is_empty() {
                                div { class: "text-center py-8 opacity-50", "ยังไม่มีข้อความ" }
                            } else {
                                ul {
                                    class: "menu w-full",
                                    for thread in list {
                                        li {
                                            key: "{thread.user_id}",
                                            Link {
                                                to: Route::AdminChatThread { user_id: thread.user_id },
                                                class: "flex flex-col items-start",
                                                div {
                                                    class: "flex w-full justify-between",
                                                    span { class: "font-semibold", "{thread.display_name}" }
                                                    span {
                                                        class: "text-xs opacity-60",
                                                        {thread.last_message.created_at.format("%Y-%m-%d %H:%M").to_string()}
                                                    }
                                                }
                                                span {
                                                    class: "text-sm opacity-70",
                                                    {preview(&thread.last_message.body)}
                                                }
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            },
            Cache::Error(err) => rsx! { ErrorPage { status: err.status, message: err.message } },
            Cache::NotFetched => rsx! { LoadingPage {} },
        }
    }
}

#[component]
pub fn AdminChatThread(user_id: i32) -> Element {
    rsx! {
        Title { "แชท | {SITE_NAME}" }
        AdminPage {
            active_tab: AdminTab::Chat,
            div {
                class: "mb-4",
                Link { to: Route::AdminChat {}, class: "btn btn-sm btn-ghost", "← กลับ" }
            }
            ChatThread { user_id }
        }
    }
}
