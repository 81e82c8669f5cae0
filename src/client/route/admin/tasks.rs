use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::{
    client::{
        component::{
            format_baht, status_badge, ErrorPage, LoadingPage, Modal, Pagination, PaginationData,
        },
        constant::{DEFAULT_PER_PAGE, SITE_NAME},
        model::cache::Cache,
        route::admin::{AdminPage, AdminTab},
    },
    model::{
        api::PaginatedDto,
        room::RoomDto,
        task::{CreateTaskDto, TaskDto, TaskKind, TaskStatus},
    },
};

#[cfg(feature = "web")]
use crate::client::api::{
    room::get_rooms,
    task::{complete_task, create_task, delete_task, get_tasks, update_status},
};

const STATUS_FILTERS: [TaskStatus; 3] = [
    TaskStatus::Pending,
    TaskStatus::InProgress,
    TaskStatus::Completed,
];

#[component]
pub fn AdminTasks() -> Element {
    let mut tasks = use_signal(|| Cache::<PaginatedDto<TaskDto>>::NotFetched);
    let mut status = use_signal(|| None::<TaskStatus>);
    let mut page = use_signal(|| 0u64);
    let per_page = use_signal(|| DEFAULT_PER_PAGE);
    let mut refetch_trigger = use_signal(|| 0u32);
    let mut show_create = use_signal(|| false);
    let mut completing = use_signal(|| None::<TaskDto>);
    let mut action_error = use_signal(|| None::<String>);

    #[cfg(feature = "web")]
    {
        let future = use_resource(move || async move {
            let _ = refetch_trigger();
            get_tasks(status(), page(), per_page()).await
        });
        use_effect(move || {
            if let Some(result) = &*future.read_unchecked() {
                if let Err(err) = result {
                    tracing::error!("Failed to fetch tasks: {}", err);
                }
                tasks.set(result.clone().into());
            }
        });
    }

    let start = move |id: i32| {
        #[cfg(feature = "web")]
        spawn(async move {
            match update_status(id, TaskStatus::InProgress).await {
                Ok(_) => refetch_trigger.set(refetch_trigger() + 1),
                Err(err) => action_error.set(Some(err.message)),
            }
        });
        #[cfg(not(feature = "web"))]
        let _ = id;
    };

    let remove = move |id: i32| {
        #[cfg(feature = "web")]
        spawn(async move {
            match delete_task(id).await {
                Ok(()) => refetch_trigger.set(refetch_trigger() + 1),
                Err(err) => action_error.set(Some(err.message)),
            }
        });
        #[cfg(not(feature = "web"))]
        let _ = id;
    };

    rsx! {
        Title { "งานซ่อม/ทำความสะอาด | {SITE_NAME}" }
        match tasks() {
            Cache::Fetched(data) => rsx! {
                AdminPage {
                    active_tab: AdminTab::Tasks,
                    div {
                        class: "flex flex-wrap items-center justify-between gap-4 mb-4",
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
                        button {
                            class: "btn btn-primary",
                            onclick: move |_| show_create.set(true),
                            "เพิ่มงาน"
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
                                div { class: "text-center py-8 opacity-50", "ไม่มีงาน" }
                            } else {
                                table {
                                    class: "table table-zebra w-full",
                                    thead {
                                        tr {
                                            th { "ห้อง" }
                                            th { "ประเภท" }
                                            th { "รายละเอียด" }
                                            th { "ค่าใช้จ่าย" }
                                            th { "สถานะ" }
                                            th { class: "text-right", "จัดการ" }
                                        }
                                    }
                                    tbody {
                                        for task in data.items.iter().cloned() {
                                            tr {
                                                key: "{task.id}",
                                                td { "{task.room_number}" }
                                                td { {task.kind.label()} }
                                                td { class: "max-w-sm", "{task.description}" }
                                                td { {task.price.map(|p| format_baht(p as i64)).unwrap_or_default()} }
                                                td { {status_badge(&task.status)} }
                                                td {
                                                    div {
                                                        class: "flex gap-2 justify-end",
                                                        if task.status == TaskStatus::Pending {
                                                            button {
                                                                class: "btn btn-xs btn-info",
                                                                onclick: move |_| start(task.id),
                                                                "เริ่มงาน"
                                                            }
                                                        }
                                                        if task.status != TaskStatus::Completed {
                                                            button {
                                                                class: "btn btn-xs btn-success",
                                                                onclick: {
                                                                    let task = task.clone();
                                                                    move |_| completing.set(Some(task.clone()))
                                                                },
                                                                "ปิดงาน"
                                                            }
                                                        }
                                                        button {
                                                            class: "btn btn-xs btn-error",
                                                            onclick: move |_| remove(task.id),
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
        if show_create() {
            CreateTaskModal { show: show_create, refetch_trigger }
        }
        if let Some(task) = completing() {
            CompleteTaskModal { task, completing, refetch_trigger }
        }
    }
}

#[component]
fn CreateTaskModal(mut show: Signal<bool>, mut refetch_trigger: Signal<u32>) -> Element {
    let mut rooms = use_signal(Vec::<RoomDto>::new);
    let mut room_id = use_signal(|| None::<i32>);
    let mut kind = use_signal(|| TaskKind::Housekeeping);
    let mut description = use_signal(String::new);
    let mut submitting = use_signal(|| false);
    let mut error = use_signal(|| None::<String>);

    #[cfg(feature = "web")]
    {
        let future = use_resource(|| get_rooms(None, None, None));
        use_effect(move || {
            if let Some(Ok(list)) = &*future.read_unchecked() {
                rooms.set(list.clone());
            }
        });
    }

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        if room_id().is_none() {
            error.set(Some("กรุณาเลือกห้อง".to_string()));
            return;
        }
        let payload = CreateTaskDto {
            room_id: room_id(),
            kind: kind(),
            description: description().trim().to_string(),
        };
        submitting.set(true);

        #[cfg(feature = "web")]
        spawn(async move {
            match create_task(payload).await {
                Ok(_) => {
                    show.set(false);
                    refetch_trigger.set(refetch_trigger() + 1);
                }
                Err(err) => error.set(Some(err.message)),
            }
            submitting.set(false);
        });
        #[cfg(not(feature = "web"))]
        let _ = payload;
    };

    rsx! {
        Modal {
            show,
            title: "เพิ่มงาน".to_string(),
            prevent_close: submitting(),
            form {
                class: "flex flex-col gap-3",
                onsubmit: on_submit,
                select {
                    class: "select select-bordered",
                    required: true,
                    onchange: move |evt| room_id.set(evt.value().parse().ok()),
                    option { value: "", disabled: true, selected: room_id().is_none(), "เลือกห้อง" }
                    for room in rooms() {
                        option { key: "{room.id}", value: "{room.id}", "{room.room_number}" }
                    }
                }
                select {
                    class: "select select-bordered",
                    onchange: move |evt| {
                        if let Ok(value) = evt.value().parse::<TaskKind>() {
                            kind.set(value);
                        }
                    },
                    for option_kind in [TaskKind::Housekeeping, TaskKind::Maintenance] {
                        option { value: option_kind.as_str(), selected: kind() == option_kind, {option_kind.label()} }
                    }
                }
                textarea {
                    class: "textarea textarea-bordered",
                    placeholder: "รายละเอียด",
                    required: true,
                    value: "{description}",
                    oninput: move |evt| description.set(evt.value()),
                }
                if let Some(err) = error() {
                    p { class: "text-error text-sm", "{err}" }
                }
                div {
                    class: "modal-action",
                    button { r#type: "submit", class: "btn btn-primary", disabled: submitting(), "บันทึก" }
                }
            }
        }
    }
}

#[component]
fn CompleteTaskModal(
    task: TaskDto,
    mut completing: Signal<Option<TaskDto>>,
    mut refetch_trigger: Signal<u32>,
) -> Element {
    let mut show = use_signal(|| true);
    let mut price = use_signal(|| task.price.unwrap_or(0));
    let mut submitting = use_signal(|| false);
    let mut error = use_signal(|| None::<String>);
    let task_id = task.id;

    use_effect(move || {
        if !show() {
            completing.set(None);
        }
    });

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        submitting.set(true);

        #[cfg(feature = "web")]
        spawn(async move {
            match complete_task(task_id, price()).await {
                Ok(_) => {
                    show.set(false);
                    refetch_trigger.set(refetch_trigger() + 1);
                }
                Err(err) => error.set(Some(err.message)),
            }
            submitting.set(false);
        });
    };

    rsx! {
        Modal {
            show,
            title: format!("ปิดงานห้อง {}", task.room_number),
            prevent_close: submitting(),
            form {
                class: "flex flex-col gap-3",
                onsubmit: on_submit,
                p { class: "opacity-70", "{task.description}" }
                label {
                    class: "form-control",
                    span { class: "label-text", "ค่าใช้จ่าย (บาท)" }
                    input {
                        r#type: "number",
                        class: "input input-bordered",
                        min: "0",
                        value: "{price}",
                        oninput: move |evt| {
                            if let Ok(value) = evt.value().parse() {
                                price.set(value);
                            }
                        },
                    }
                }
                if let Some(err) = error() {
                    p { class: "text-error text-sm", "{err}" }
                }
                div {
                    class: "modal-action",
                    button { r#type: "submit", class: "btn btn-success", disabled: submitting(), "ปิดงาน" }
                }
            }
        }
    }
}
