use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::{
    client::{
        component::{format_baht, ConfirmationModal, ErrorPage, ImageInput, LoadingPage, Modal},
        constant::SITE_NAME,
        model::cache::Cache,
        route::admin::{AdminPage, AdminTab},
    },
    model::room_type::{RoomTypeDto, RoomTypeFormDto},
};

#[cfg(feature = "web")]
use crate::client::api::room_type::{
    create_room_type, delete_room_type, get_room_types, update_room_type,
};

#[component]
pub fn AdminRoomTypes() -> Element {
    let mut room_types = use_signal(|| Cache::<Vec<RoomTypeDto>>::NotFetched);
    let refetch_trigger = use_signal(|| 0u32);
    // `Some(None)` creates, `Some(Some(dto))` edits
    let mut editing = use_signal(|| None::<Option<RoomTypeDto>>);
    let mut deleting = use_signal(|| None::<RoomTypeDto>);

    #[cfg(feature = "web")]
    {
        let future = use_resource(move || async move {
            let _ = refetch_trigger();
            get_room_types().await
        });
        use_effect(move || {
            if let Some(result) = &*future.read_unchecked() {
                if let Err(err) = result {
                    tracing::error!("Failed to fetch room types: {}", err);
                }
                room_types.set(result.clone().into());
            }
        });
    }

    rsx! {
        Title { "ประเภทห้อง | {SITE_NAME}" }
        match room_types() {
            Cache::Fetched(list) => rsx! {
                AdminPage {
                    active_tab: AdminTab::RoomTypes,
                    div {
                        class: "flex justify-end mb-4",
                        button {
                            class: "btn btn-primary",
                            onclick: move |_| editing.set(Some(None)),
                            "เพิ่มประเภทห้อง"
                        }
                    }
                    div {
                        class: "grid grid-cols-1 md:grid-cols-2 gap-4",
                        for room_type in list {
                            div {
                                key: "{room_type.id}",
                                class: "card card-side bg-base-200",
                                if let Some(url) = &room_type.image_url {
                                    figure { img { class: "w-32 h-full object-cover", src: "{url}" } }
                                }
                                div {
                                    class: "card-body",
                                    h3 { class: "card-title", "{room_type.name}" }
                                    p { "{format_baht(room_type.price as i64)} / เดือน" }
                                    p { class: "text-sm opacity-70 line-clamp-3", "{room_type.description}" }
                                    div {
                                        class: "card-actions justify-end",
                                        button {
                                            class: "btn btn-sm",
                                            onclick: {
                                                let room_type = room_type.clone();
                                                move |_| editing.set(Some(Some(room_type.clone())))
                                            },
                                            "แก้ไข"
                                        }
                                        button {
                                            class: "btn btn-sm btn-error",
                                            onclick: {
                                                let room_type = room_type.clone();
                                                move |_| deleting.set(Some(room_type.clone()))
                                            },
                                            "ลบ"
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
        if let Some(target) = editing() {
            RoomTypeModal { target, editing, refetch_trigger }
        }
        if let Some(target) = deleting() {
            DeleteRoomTypeModal { target, deleting, refetch_trigger }
        }
    }
}

#[component]
fn RoomTypeModal(
    #[props(!optional)] target: Option<RoomTypeDto>,
    mut editing: Signal<Option<Option<RoomTypeDto>>>,
    mut refetch_trigger: Signal<u32>,
) -> Element {
    let mut show = use_signal(|| true);
    let existing_id = target.as_ref().map(|t| t.id);
    let mut form = use_signal(|| match &target {
        Some(t) => RoomTypeFormDto {
            name: t.name.clone(),
            price: t.price,
            description: t.description.clone(),
            image: t.image_url.clone(),
        },
        None => RoomTypeFormDto::default(),
    });
    let image = use_signal(|| form.peek().image.clone());
    let mut submitting = use_signal(|| false);
    let mut error = use_signal(|| None::<String>);

    use_effect(move || {
        if !show() {
            editing.set(None);
        }
    });

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let mut payload = form();
        payload.image = image();
        submitting.set(true);

        #[cfg(feature = "web")]
        spawn(async move {
            let result = match existing_id {
                Some(id) => update_room_type(id, payload).await,
                None => create_room_type(payload).await,
            };
            match result {
                Ok(_) => {
                    show.set(false);
                    refetch_trigger.set(refetch_trigger() + 1);
                }
                Err(err) => error.set(Some(err.message)),
            }
            submitting.set(false);
        });
        #[cfg(not(feature = "web"))]
        let _ = (payload, existing_id);
    };

    rsx! {
        Modal {
            show,
            title: if existing_id.is_some() { "แก้ไขประเภทห้อง".to_string() } else { "เพิ่มประเภทห้อง".to_string() },
            prevent_close: submitting(),
            form {
                class: "flex flex-col gap-3",
                onsubmit: on_submit,
                input {
                    class: "input input-bordered",
                    placeholder: "ชื่อประเภท",
                    required: true,
                    value: "{form().name}",
                    oninput: move |evt| form.write().name = evt.value(),
                }
                input {
                    r#type: "number",
                    class: "input input-bordered",
                    min: "0",
                    placeholder: "ค่าเช่าต่อเดือน (บาท)",
                    value: "{form().price}",
                    oninput: move |evt| {
                        if let Ok(price) = evt.value().parse() {
                            form.write().price = price;
                        }
                    },
                }
                textarea {
                    class: "textarea textarea-bordered",
                    placeholder: "รายละเอียด",
                    rows: "4",
                    value: "{form().description}",
                    oninput: move |evt| form.write().description = evt.value(),
                }
                ImageInput { label: "รูปภาพ".to_string(), value: image }
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
fn DeleteRoomTypeModal(
    target: RoomTypeDto,
    mut deleting: Signal<Option<RoomTypeDto>>,
    mut refetch_trigger: Signal<u32>,
) -> Element {
    let mut show = use_signal(|| true);
    let mut processing = use_signal(|| false);
    let mut error = use_signal(|| None::<String>);
    let id = target.id;

    use_effect(move || {
        if !show() {
            deleting.set(None);
        }
    });

    rsx! {
        ConfirmationModal {
            show,
            title: format!("ลบประเภทห้อง {}", target.name),
            message: rsx! {
                p { "ลบได้เฉพาะประเภทที่ไม่มีห้องหรือคิวอ้างอิงอยู่" }
                if let Some(err) = error() {
                    p { class: "text-error text-sm mt-2", "{err}" }
                }
            },
            confirm_text: "ลบ".to_string(),
            confirm_class: "btn-error".to_string(),
            is_processing: processing(),
            on_confirm: move |_| {
                processing.set(true);
                #[cfg(feature = "web")]
                spawn(async move {
                    match delete_room_type(id).await {
                        Ok(()) => {
                            refetch_trigger.set(refetch_trigger() + 1);
                            show.set(false);
                        }
                        Err(err) => error.set(Some(err.message)),
                    }
                    processing.set(false);
                });
            },
        }
    }
}
