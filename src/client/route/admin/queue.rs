use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::{
    client::{
        component::{status_badge, ErrorPage, LoadingPage, Pagination, PaginationData},
        constant::{DEFAULT_PER_PAGE, SITE_NAME},
        model::cache::Cache,
        route::admin::{AdminPage, AdminTab},
    },
    model::{
        api::PaginatedDto,
        queue::{QueueEntryDto, QueueStatus},
    },
};

#[cfg(feature = "web")]
use crate::client::api::queue::{delete_entry, get_queue, update_status};

const STATUS_FILTERS: [QueueStatus; 4] = [
    QueueStatus::Pending,
    QueueStatus::Confirmed,
    QueueStatus::Assigned,
    QueueStatus::Cancelled,
];

#[component]
pub fn AdminQueue() -> Element {
    let mut entries = use_signal(|| Cache::<PaginatedDto<QueueEntryDto>>::NotFetched);
    let mut status = use_signal(|| None::<QueueStatus>);
    let mut page = use_signal(|| 0u64);
    let per_page = use_signal(|| DEFAULT_PER_PAGE);
    let mut refetch_trigger = use_signal(|| 0u32);
    let mut action_error = use_signal(|| None::<String>);

    #[cfg(feature = "web")]
    {
        let future = use_resource(move || async move {
            let _ = refetch_trigger();
            get_queue(status(), page(), per_page()).await
        });
        use_effect(move || {
            if let Some(result) = &*future.read_unchecked() {
                if let Err(err) = result {
                    tracing::error!("Failed to fetch queue: {}", err);
                }
                entries.set(result.clone().into());
            }
        });
    }

    let set_status = move |id: i32, target: QueueStatus| {
        #[cfg(feature = "web")]
        spawn(async move {
            match update_status(id, target).await {
                Ok(_) => refetch_trigger.set(refetch_trigger() + 1),
                Err(err) => action_error.set(Some(err.message)),
            }
        });
        #[cfg(not(feature = "web"))]
        let _ = (id, target);
    };

    let remove = move |id: i32| {
        #[cfg(feature = "web")]
        spawn(async move {
            match delete_entry(id).await {
                Ok(()) => refetch_trigger.set(refetch_trigger() + 1),
                Err(err) => action_error.set(Some(err.message)),
            }
        });
        #[cfg(not(feature = "web"))]
        let _ = id;
    };

    rsx! {
        Title { "คิวดูห้อง | {SITE_NAME}" }
        match entries() {
            Cache::Fetched(data) => rsx! {
                AdminPage {
                    active_tab: AdminTab::Queue,
                    div {
                        class: "flex gap-2 mb-4",
                        select {
                            class: "select select-bordered select-sm",
                            onchange: move |evt| {
                                status.set(evt.value().parse().ok());
                                page.set(0);
                            },
                            option { value: "", selected: status().is_none(), "ทุกสถานะ" }
                            for s in STATUS_FILTERS {
                                option { value: s.as_str(), selected: status() == Some(s), {s.label()} }
                            }
                        }
                    }
                    if let Some(err) = action_error() {
                        div { class: "alert alert-error mb-4", "{err}" }
                    }
                    div {
                        class: "card bg-base-200",
                        div {
                            class: "card-body overflow-x-auto",
                            if data.items.is_empty() {
                                div { class: "text-center py-8 opacity-50", "ไม่มีคิว" }
                            } else {
                                table {
                                    class: "table table-zebra w-full",
                                    thead {
                                        tr {
                                            th { "วันนัด" }
                                            th { "ชื่อ" }
                                            th { "ติดต่อ" }
                                            th { "ประเภทห้อง" }
                                            th { "หมายเหตุ" }
                                            th { "สถานะ" }
                                            th { class: "text-right", "จัดการ" }
                                        }
                                    }
                                    tbody {
                                        for entry in data.items.iter().cloned() {
                                            tr {
                                                key: "{entry.id}",
                                                td { "{entry.appointment_date}" }
                                                td { "{entry.first_name} {entry.last_name}" }
                                                td {
                                                    p { "{entry.phone}" }
                                                    p { class: "text-xs opacity-70", "{entry.email}" }
                                                }
                                                td { "{entry.room_type_name}" }
                                                td { class: "max-w-xs", {entry.note.clone().unwrap_or_default()} }
                                                td { {status_badge(&entry.status)} }
                                                td {
                                                    div {
                                                        class: "flex gap-2 justify-end",
                                                        if entry.status == QueueStatus::Pending {
                                                            button {
                                                                class: "btn btn-xs btn-primary",
                                                                onclick: move |_| set_status(entry.id, QueueStatus::Confirmed),
                                                                "ยืนยัน"
                                                            }
                                                        }
                                                        if entry.status.is_active() {
                                                            button {
                                                                class: "btn btn-xs btn-warning",
                                                                onclick: move |_| set_status(entry.id, QueueStatus::Cancelled),
                                                                "ยกเลิก"
                                                            }
                                                        }
                                                        button {
                                                            class: "btn btn-xs btn-error",
                                                            onclick: move |_| remove(entry.id),
                                                            "ลบ"
                                                        }
                                                    }
                                                }
                                            }
                                        }
                                    }
                                }
                            }
                            Pagination { page, per_page, data: PaginationData::from(&data) }
                        }
                    }
                }
            },
            Cache::Error(err) => rsx! { ErrorPage { status: err.status, message: err.message } },
            Cache::NotFetched => rsx! { LoadingPage {} },
        }
    }
}
