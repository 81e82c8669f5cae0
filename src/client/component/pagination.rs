use dioxus::prelude::*;

use crate::model::api::PaginatedDto;

#[derive(Clone, PartialEq)]
pub struct PaginationData {
    pub page: u64,
    pub per_page: u64,
    pub total: u64,
    pub total_pages: u64,
}

impl<T> From<&PaginatedDto<T>> for PaginationData {
    fn from(dto: &PaginatedDto<T>) -> Self {
        Self {
            page: dto.page,
            per_page: dto.per_page,
            total: dto.total,
            total_pages: dto.total_pages,
        }
    }
}

#[component]
pub fn Pagination(page: Signal<u64>, per_page: Signal<u64>, data: PaginationData) -> Element {
    let last_page = data.total_pages.saturating_sub(1);
    let first_shown = if data.total == 0 {
        0
    } else {
        data.page * data.per_page + 1
    };
    let last_shown = ((data.page + 1) * data.per_page).min(data.total);

    rsx!(
        div {
            class: "flex flex-col sm:flex-row justify-between items-center mt-4 gap-4",
            div {
                class: "flex items-center gap-2 text-sm",
                span { "แสดง" }
                select {
                    class: "select select-bordered select-sm",
                    value: "{per_page()}",
                    onchange: move |evt| {
                        if let Ok(value) = evt.value().parse::<u64>() {
                            per_page.set(value);
                            page.set(0);
                        }
                    },
                    option { value: "10", "10" }
                    option { value: "20", "20" }
                    option { value: "50", "50" }
                    option { value: "100", "100" }
                }
                span { "รายการ" }
            }
            div {
                class: "flex flex-col sm:flex-row items-center gap-2 sm:gap-4",
                span {
                    class: "text-xs sm:text-sm opacity-70 whitespace-nowrap",
                    "{first_shown} - {last_shown} จาก {data.total}"
                }
                div {
                    class: "join",
                    button {
                        class: "join-item btn btn-xs sm:btn-sm",
                        disabled: data.page == 0,
                        onclick: move |_| {
                            if page() > 0 {
                                page.set(page() - 1);
                            }
                        },
                        "«"
                    }
                    button {
                        class: "join-item btn btn-xs sm:btn-sm no-animation",
                        "หน้า {data.page + 1} / {data.total_pages.max(1)}"
                    }
                    button {
                        class: "join-item btn btn-xs sm:btn-sm",
                        disabled: data.page >= last_page,
                        onclick: move |_| {
                            if page() < last_page {
                                page.set(page() + 1);
                            }
                        },
                        "»"
                    }
                }
            }
        }
    )
}
