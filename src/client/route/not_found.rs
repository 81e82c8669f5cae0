use dioxus::prelude::*;

use crate::client::{component::ErrorPage, constant::SITE_NAME};

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = segments.join("/");

    rsx! {
        Title { "ไม่พบหน้า | {SITE_NAME}" }
        ErrorPage { status: 404, message: format!("ไม่พบหน้า /{}", path) }
    }
}
