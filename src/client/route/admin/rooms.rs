use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::{
    client::{
        component::{format_baht, ConfirmationModal, ErrorPage, ImageInput, LoadingPage, Modal},
        constant::SITE_NAME,
        model::cache::Cache,
        route::admin::{AdminPage, AdminTab},
    },
    model::{
        auth::CredentialsDto,
        queue::QueueEntryDto,
        room::{AssignTenantDto, CreateRoomDto, RoomDto, UpdateRoomDto},
        room_type::RoomTypeDto,
    },
};

#[cfg(feature = "web")]
use crate::client::api::{
    queue::get_queue,
    room::{assign_tenant, create_room, delete_room, get_rooms, update_room, vacate_room},
    room_type::get_room_types,
};

fn optional(value: &str) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}

/// What a room modal is open for.
#[derive(Clone, PartialEq)]
enum RoomAction {
    Edit(RoomDto),
    Assign(RoomDto),
    Vacate(RoomDto),
    Delete(RoomDto),
}

#[component]
pub fn AdminRooms() -> Element {
    let mut rooms = use_signal(|| Cache::<Vec<RoomDto>>::NotFetched);
    let mut room_types = use_signal(Vec::<RoomTypeDto>::new);
    let mut type_filter = use_signal(|| None::<i32>);
    let mut available_filter = use_signal(|| None::<bool>);
    let refetch_trigger = use_signal(|| 0u32);

    let mut show_create = use_signal(|| false);
    let action = use_signal(|| None::<RoomAction>);
    let credentials = use_signal(|| None::<(String, CredentialsDto)>);

    #[cfg(feature = "web")]
    {
        let types_future = use_resource(get_room_types);
        let rooms_future = use_resource(move || async move {
            let _ = refetch_trigger();
            get_rooms(None, type_filter(), available_filter()).await
        });
        use_effect(move || {
            if let Some(Ok(list)) = &*types_future.read_unchecked() {
                room_types.set(list.clone());
            }
        });
        use_effect(move || {
            if let Some(result) = &*rooms_future.read_unchecked() {
                if let Err(err) = result {
                    tracing::error!("Failed to fetch rooms: {}", err);
                }
                rooms.set(result.clone().into());
            }
        });
    }

    rsx! {
        Title { "ห้องพัก | {SITE_NAME}" }
        if let Cache::Error(err) = rooms() {
            ErrorPage { status: err.status, message: err.message }
        } else if let Cache::Fetched(list) = rooms() {
            AdminPage {
                active_tab: AdminTab::Rooms,
                div {
                    class: "flex flex-wrap items-center justify-between gap-4 mb-4",
                    div {
                        class: "flex gap-2",
                        select {
                            class: "select select-bordered select-sm",
                            onchange: move |evt| type_filter.set(evt.value().parse().ok()),
                            option { value: "", "ทุกประเภท" }
                            for room_type in room_types() {
                                option { key: "{room_type.id}", value: "{room_type.id}", "{room_type.name}" }
                            }
                        }
                        select {
                            class: "select select-bordered select-sm",
                            onchange: move |evt| available_filter.set(evt.value().parse().ok()),
                            option { value: "", "ทุกสถานะ" }
                            option { value: "true", "เปิดให้เช่า" }
                            option { value: "false", "ปิดให้เช่า" }
                        }
                    }
                    button {
                        class: "btn btn-primary",
                        onclick: move |_| show_create.set(true),
                        "เพิ่มห้อง"
                    }
                }
                div {
                    class: "card bg-base-200",
                    div {
                        class: "card-body overflow-x-auto",
                        if list.is_empty() {
                            div { class: "text-center py-8 opacity-50", "ยังไม่มีห้อง" }
                        } else {
                            table {
                                class: "table table-zebra w-full",
                                thead {
                                    tr {
                                        th { "ห้อง" }
                                        th { "ชั้น" }
                                        th { "ประเภท" }
                                        th { "ค่าเช่า" }
                                        th { "ผู้เช่า" }
                                        th { class: "text-right", "จัดการ" }
                                    }
                                }
                                tbody {
                                    for room in list {
                                        RoomRow { room, action }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        } else {
            LoadingPage {}
        }

        CreateRoomModal { show: show_create, room_types: room_types(), refetch_trigger, credentials }
        match action() {
            Some(RoomAction::Edit(room)) => rsx! {
                EditRoomModal { room, room_types: room_types(), action, refetch_trigger }
            },
            Some(RoomAction::Assign(room)) => rsx! {
                AssignTenantModal { room, action, refetch_trigger }
            },
            Some(RoomAction::Vacate(room)) => rsx! {
                VacateRoomModal { room, action, refetch_trigger, credentials }
            },
            Some(RoomAction::Delete(room)) => rsx! {
                DeleteRoomModal { room, action, refetch_trigger }
            },
            None => rsx! {},
        }
        CredentialsModal { credentials }
    }
}

#[component]
fn RoomRow(room: RoomDto, mut action: Signal<Option<RoomAction>>) -> Element {
    let occupied = room.renter.is_some();
    let edit_room = room.clone();
    let tenant_room = room.clone();
    let delete_room = room.clone();

    rsx! {
        tr {
            td { class: "font-semibold", "{room.room_number}" }
            td { "{room.floor}" }
            td { "{room.room_type_name}" }
            td { "{format_baht(room.price as i64)}" }
            td {
                if let Some(renter) = &room.renter {
                    "{renter.first_name} {renter.last_name}"
                } else if room.available {
                    span { class: "badge badge-success badge-sm", "ว่าง" }
                } else {
                    span { class: "badge badge-ghost badge-sm", "ปิดให้เช่า" }
                }
            }
            td {
                div {
                    class: "flex gap-2 justify-end",
                    button {
                        class: "btn btn-sm",
                        onclick: move |_| action.set(Some(RoomAction::Edit(edit_room.clone()))),
                        "แก้ไข"
                    }
                    if occupied {
                        button {
                            class: "btn btn-sm btn-warning",
                            onclick: move |_| action.set(Some(RoomAction::Vacate(tenant_room.clone()))),
                            "ย้ายออก"
                        }
                    } else {
                        button {
                            class: "btn btn-sm btn-primary",
                            onclick: move |_| action.set(Some(RoomAction::Assign(tenant_room.clone()))),
                            "เพิ่มผู้เช่า"
                        }
                        button {
                            class: "btn btn-sm btn-error",
                            onclick: move |_| action.set(Some(RoomAction::Delete(delete_room.clone()))),
                            "ลบ"
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn CreateRoomModal(
    show: Signal<bool>,
    room_types: Vec<RoomTypeDto>,
    mut refetch_trigger: Signal<u32>,
    mut credentials: Signal<Option<(String, CredentialsDto)>>,
) -> Element {
    let mut room_number = use_signal(String::new);
    let mut room_type_id = use_signal(|| None::<i32>);
    let mut floor = use_signal(|| 1i32);
    let image = use_signal(|| None::<String>);
    let mut submitting = use_signal(|| false);
    let mut error = use_signal(|| None::<String>);

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let Some(type_id) = room_type_id() else {
            error.set(Some("กรุณาเลือกประเภทห้อง".to_string()));
            return;
        };
        let payload = CreateRoomDto {
            room_number: room_number().trim().to_string(),
            room_type_id: type_id,
            floor: floor(),
            image: image(),
        };
        submitting.set(true);
        error.set(None);

        #[cfg(feature = "web")]
        spawn(async move {
            match create_room(payload).await {
                Ok(created) => {
                    credentials.set(Some((
                        format!("สร้างห้อง {} แล้ว", created.room.room_number),
                        created.credentials,
                    )));
                    room_number.set(String::new());
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
            title: "เพิ่มห้อง".to_string(),
            prevent_close: submitting(),
            form {
                class: "flex flex-col gap-3",
                onsubmit: on_submit,
                input {
                    class: "input input-bordered",
                    placeholder: "เลขห้อง เช่น A101",
                    required: true,
                    value: "{room_number}",
                    oninput: move |evt| room_number.set(evt.value()),
                }
                select {
                    class: "select select-bordered",
                    required: true,
                    onchange: move |evt| room_type_id.set(evt.value().parse().ok()),
                    option { value: "", disabled: true, selected: room_type_id().is_none(), "เลือกประเภทห้อง" }
                    for room_type in room_types {
                        option { key: "{room_type.id}", value: "{room_type.id}", "{room_type.name}" }
                    }
                }
                input {
                    r#type: "number",
                    class: "input input-bordered",
                    min: "0",
                    placeholder: "ชั้น",
                    value: "{floor}",
                    oninput: move |evt| {
                        if let Ok(value) = evt.value().parse() {
                            floor.set(value);
                        }
                    },
                }
                ImageInput { label: "รูปห้อง (ไม่บังคับ)".to_string(), value: image }
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
fn EditRoomModal(
    room: RoomDto,
    room_types: Vec<RoomTypeDto>,
    mut action: Signal<Option<RoomAction>>,
    mut refetch_trigger: Signal<u32>,
) -> Element {
    let mut show = use_signal(|| true);
    let mut form = use_signal(|| UpdateRoomDto {
        room_type_id: room.room_type_id,
        floor: room.floor,
        available: room.available,
    });
    let mut submitting = use_signal(|| false);
    let mut error = use_signal(|| None::<String>);
    let room_id = room.id;

    use_effect(move || {
        if !show() {
            action.set(None);
        }
    });

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        submitting.set(true);

        #[cfg(feature = "web")]
        spawn(async move {
            match update_room(room_id, form()).await {
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
            title: format!("แก้ไขห้อง {}", room.room_number),
            prevent_close: submitting(),
            form {
                class: "flex flex-col gap-3",
                onsubmit: on_submit,
                select {
                    class: "select select-bordered",
                    onchange: move |evt| {
                        if let Ok(id) = evt.value().parse() {
                            form.write().room_type_id = id;
                        }
                    },
                    for room_type in room_types {
                        option {
                            key: "{room_type.id}",
                            value: "{room_type.id}",
                            selected: form().room_type_id == room_type.id,
                            "{room_type.name}"
                        }
                    }
                }
                input {
                    r#type: "number",
                    class: "input input-bordered",
                    min: "0",
                    value: "{form().floor}",
                    oninput: move |evt| {
                        if let Ok(value) = evt.value().parse() {
                            form.write().floor = value;
                        }
                    },
                }
                label {
                    class: "label cursor-pointer justify-start gap-3",
                    input {
                        r#type: "checkbox",
                        class: "toggle",
                        checked: form().available,
                        onchange: move |evt| form.write().available = evt.checked(),
                    }
                    span { class: "label-text", "เปิดให้เช่า" }
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
fn AssignTenantModal(
    room: RoomDto,
    mut action: Signal<Option<RoomAction>>,
    mut refetch_trigger: Signal<u32>,
) -> Element {
    let mut show = use_signal(|| true);
    let mut queue = use_signal(Vec::<QueueEntryDto>::new);
    let mut form = use_signal(|| AssignTenantDto {
        queue_id: None,
        first_name: String::new(),
        last_name: String::new(),
        email: None,
        phone: None,
    });
    let mut submitting = use_signal(|| false);
    let mut error = use_signal(|| None::<String>);
    let room_id = room.id;
    let room_type_id = room.room_type_id;

    #[cfg(feature = "web")]
    {
        let future = use_resource(|| get_queue(None, 0, 100));
        use_effect(move || {
            if let Some(Ok(page)) = &*future.read_unchecked() {
                queue.set(
                    page.items
                        .iter()
                        .filter(|e| e.room_type_id == room_type_id && e.status.is_active())
                        .cloned()
                        .collect(),
                );
            }
        });
    }

    use_effect(move || {
        if !show() {
            action.set(None);
        }
    });

    let on_pick_entry = move |evt: FormEvent| {
        let picked = evt
            .value()
            .parse::<i32>()
            .ok()
            .and_then(|id| queue.read().iter().find(|e| e.id == id).cloned());
        let mut form = form.write();
        match picked {
            Some(entry) => {
                form.queue_id = Some(entry.id);
                form.first_name = entry.first_name;
                form.last_name = entry.last_name;
                form.email = Some(entry.email);
                form.phone = Some(entry.phone);
            }
            None => form.queue_id = None,
        }
    };

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        submitting.set(true);

        #[cfg(feature = "web")]
        spawn(async move {
            match assign_tenant(room_id, form()).await {
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
            title: format!("เพิ่มผู้เช่าห้อง {}", room.room_number),
            prevent_close: submitting(),
            form {
                class: "flex flex-col gap-3",
                onsubmit: on_submit,
                select {
                    class: "select select-bordered",
                    onchange: on_pick_entry,
                    option { value: "", "ไม่ได้มาจากคิว" }
                    for entry in queue() {
                        option {
                            key: "{entry.id}",
                            value: "{entry.id}",
                            "{entry.appointment_date} · {entry.first_name} {entry.last_name} ({entry.status.label()})"
                        }
                    }
                }
                div {
                    class: "grid grid-cols-2 gap-3",
                    input {
                        class: "input input-bordered",
                        placeholder: "ชื่อ",
                        required: true,
                        value: "{form().first_name}",
                        oninput: move |evt| form.write().first_name = evt.value(),
                    }
                    input {
                        class: "input input-bordered",
                        placeholder: "นามสกุล",
                        required: true,
                        value: "{form().last_name}",
                        oninput: move |evt| form.write().last_name = evt.value(),
                    }
                }
                input {
                    r#type: "email",
                    class: "input input-bordered",
                    placeholder: "อีเมล",
                    value: "{form().email.clone().unwrap_or_default()}",
                    oninput: move |evt| form.write().email = optional(&evt.value()),
                }
                input {
                    r#type: "tel",
                    class: "input input-bordered",
                    placeholder: "เบอร์โทรศัพท์",
                    value: "{form().phone.clone().unwrap_or_default()}",
                    oninput: move |evt| form.write().phone = optional(&evt.value()),
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
fn VacateRoomModal(
    room: RoomDto,
    mut action: Signal<Option<RoomAction>>,
    mut refetch_trigger: Signal<u32>,
    mut credentials: Signal<Option<(String, CredentialsDto)>>,
) -> Element {
    let mut show = use_signal(|| true);
    let mut processing = use_signal(|| false);
    let room_id = room.id;

    use_effect(move || {
        if !show() {
            action.set(None);
        }
    });

    rsx! {
        ConfirmationModal {
            show,
            title: format!("ย้ายผู้เช่าออกจากห้อง {}", room.room_number),
            message: rsx! {
                p { "บัญชีของห้องจะถูกรีเซ็ตและออกรหัสผ่านใหม่" }
            },
            confirm_text: "ย้ายออก".to_string(),
            confirm_class: "btn-warning".to_string(),
            is_processing: processing(),
            on_confirm: move |_| {
                processing.set(true);
                #[cfg(feature = "web")]
                spawn(async move {
                    match vacate_room(room_id).await {
                        Ok(vacated) => {
                            credentials.set(Some((
                                format!("ห้อง {} ว่างแล้ว", vacated.room.room_number),
                                vacated.credentials,
                            )));
                            refetch_trigger.set(refetch_trigger() + 1);
                        }
                        Err(err) => tracing::error!("Failed to vacate room: {}", err),
                    }
                    processing.set(false);
                    show.set(false);
                });
            },
        }
    }
}

#[component]
fn DeleteRoomModal(
    room: RoomDto,
    mut action: Signal<Option<RoomAction>>,
    mut refetch_trigger: Signal<u32>,
) -> Element {
    let mut show = use_signal(|| true);
    let mut processing = use_signal(|| false);
    let room_id = room.id;

    use_effect(move || {
        if !show() {
            action.set(None);
        }
    });

    rsx! {
        ConfirmationModal {
            show,
            title: format!("ลบห้อง {}", room.room_number),
            message: rsx! {
                p { "ห้องและบัญชีของห้องจะถูกลบถาวร" }
            },
            confirm_text: "ลบ".to_string(),
            confirm_class: "btn-error".to_string(),
            is_processing: processing(),
            on_confirm: move |_| {
                processing.set(true);
                #[cfg(feature = "web")]
                spawn(async move {
                    match delete_room(room_id).await {
                        Ok(()) => refetch_trigger.set(refetch_trigger() + 1),
                        Err(err) => tracing::error!("Failed to delete room: {}", err),
                    }
                    processing.set(false);
                    show.set(false);
                });
            },
        }
    }
}

/// One-time display of a room account's login details.
#[component]
fn CredentialsModal(mut credentials: Signal<Option<(String, CredentialsDto)>>) -> Element {
    let mut show = use_signal(|| false);

    use_effect(move || {
        show.set(credentials.read().is_some());
    });
    use_effect(move || {
        if !show() && credentials.peek().is_some() {
            credentials.set(None);
        }
    });

    let Some((title, creds)) = credentials() else {
        return rsx! {};
    };

    rsx! {
        Modal {
            show,
            title,
            prevent_close: false,
            p { class: "mb-3", "บันทึกข้อมูลเข้าสู่ระบบนี้ไว้ รหัสผ่านจะแสดงเพียงครั้งเดียว" }
            div {
                class: "bg-base-200 rounded p-3 font-mono",
                p { "ชื่อผู้ใช้: {creds.username}" }
                p { "รหัสผ่าน: {creds.password}" }
            }
            div {
                class: "modal-action",
                button { class: "btn", onclick: move |_| show.set(false), "ปิด" }
            }
        }
    }
}
