use dioxus::prelude::*;

use crate::{
    client::{
        component::{format_baht, status_badge},
        model::cache::Cache,
    },
    model::{
        api::PaginatedDto,
        task::{CreateTaskDto, TaskDto, TaskKind, TaskStatus},
    },
};

#[cfg(feature = "web")]
use crate::client::api::task::{create_task, delete_task, get_tasks};

/// Housekeeping and repair requests of the caller's room.
#[component]
pub fn RoomTasks() -> Element {
    let mut tasks = use_signal(|| Cache::<PaginatedDto<TaskDto>>::NotFetched);
    let mut refetch_trigger = use_signal(|| 0u32);
    let mut kind = use_signal(|| TaskKind::Maintenance);
    let mut description = use_signal(String::new);
    let mut submitting = use_signal(|| false);
    let mut error = use_signal(|| None::<String>);

    #[cfg(feature = "web")]
    {
        let future = use_resource(move || async move {
            let _ = refetch_trigger();
            get_tasks(None, 0, 20).await
        });
        use_effect(move || {
            if let Some(result) = &*future.read_unchecked() {
                tasks.set(result.clone().into());
            }
        });
    }

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let payload = CreateTaskDto {
            room_id: None,
            kind: kind(),
            description: description().trim().to_string(),
        };
        submitting.set(true);
        error.set(None);

        #[cfg(feature = "web")]
        spawn(async move {
            match create_task(payload).await {
                Ok(_) => {
                    description.set(String::new());
                    refetch_trigger.set(refetch_trigger() + 1);
                }
                Err(err) => error.set(Some(err.message)),
            }
            submitting.set(false);
        });
        #[cfg(not(feature = "web"))]
        let _ = payload;
    };

    let on_cancel = move |id: i32| {
        #[cfg(feature = "web")]
        spawn(async move {
            match delete_task(id).await {
                Ok(()) => refetch_trigger.set(refetch_trigger() + 1),
                Err(err) => error.set(Some(err.message)),
            }
        });
        #[cfg(not(feature = "web"))]
        let _ = id;
    };

    rsx! {
        div {
            class: "card bg-base-200",
            div {
                class: "card-body flex flex-col gap-4",
                h2 { class: "card-title", "แจ้งทำความสะอาด / แจ้งซ่อม" }
                form {
                    class: "flex flex-col sm:flex-row gap-2",
                    onsubmit: on_submit,
                    select {
                        class: "select select-bordered",
                        onchange: move |evt| {
                            if let Ok(value) = evt.value().parse::<TaskKind>() {
                                kind.set(value);
                            }
                        },
                        for option_kind in [TaskKind::Maintenance, TaskKind::Housekeeping] {
                            option {
                                value: option_kind.as_str(),
                                selected: kind() == option_kind,
                                {option_kind.label()}
                            }
                        }
                    }
                    input {
                        class: "input input-bordered flex-1",
                        placeholder: "รายละเอียด เช่น ก๊อกน้ำรั่ว",
                        required: true,
                        value: "{description}",
                        oninput: move |evt| description.set(evt.value()),
                    }
                    button {
                        r#type: "submit",
                        class: "btn btn-primary",
                        disabled: submitting(),
                        "ส่งคำขอ"
                    }
                }
                if let Some(err) = error() {
                    p { class: "text-error text-sm", "{err}" }
                }
                match tasks() {
                    Cache::Fetched(page) if page.items.is_empty() => rsx! {
                        p { class: "opacity-50", "ยังไม่มีคำขอ" }
                    },
                    Cache::Fetched(page) => rsx! {
                        ul {
                            class: "flex flex-col gap-2",
                            for task in page.items {
                                li {
                                    key: "{task.id}",
                                    class: "flex flex-wrap items-center gap-3 p-3 rounded bg-base-100",
                                    span { class: "badge badge-outline", {task.kind.label()} }
                                    span { class: "flex-1", "{task.description}" }
                                    if let Some(price) = task.price {
                                        span { class: "opacity-70", "{format_baht(price as i64)}" }
                                    }
                                    {status_badge(&task.status)}
                                    if task.status == TaskStatus::Pending {
                                        button {
                                            class: "btn btn-xs btn-ghost",
                                            onclick: move |_| on_cancel(task.id),
                                            "ยกเลิก"
                                        }
                                    }
                                }
                            }
                        }
                    },
                    Cache::Error(err) => rsx! { p { class: "text-error", "{err}" } },
                    Cache::NotFetched => rsx! { span { class: "loading loading-spinner" } },
                }
            }
        }
    }
}
