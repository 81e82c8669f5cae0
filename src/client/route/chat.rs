use dioxus::prelude::*;

use crate::client::{
    component::{ChatThread, Page},
    constant::SITE_NAME,
    model::auth::AuthContext,
};

/// The caller's own thread with the office.
#[component]
pub fn Chat() -> Element {
    let auth = use_context::<AuthContext>();
    let Some(user_id) = auth.read().user_id() else {
        return rsx! {};
    };

    rsx! {
        Title { "ติดต่อเจ้าหน้าที่ | {SITE_NAME}" }
        Page {
            class: "flex flex-col items-center w-full",
            div {
                class: "w-full max-w-3xl flex flex-col gap-4",
                h1 { class: "text-2xl", "ติดต่อเจ้าหน้าที่" }
                ChatThread { user_id }
            }
        }
    }
}
