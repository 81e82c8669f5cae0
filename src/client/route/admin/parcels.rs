use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::{
    client::{
        component::{ErrorPage, LoadingPage, Modal, Pagination, PaginationData},
        constant::{DEFAULT_PER_PAGE, SITE_NAME},
        model::cache::Cache,
        route::admin::{AdminPage, AdminTab},
    },
    model::{
        api::PaginatedDto,
        parcel::{CreateParcelDto, ParcelDto},
        room::RoomDto,
    },
};

#[cfg(feature = "web")]
use crate::client::api::{
    parcel::{create_parcel, delete_parcel, get_parcels, pick_up},
    room::get_rooms,
};

fn optional(value: &str) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}

#[component]
pub fn AdminParcels() -> Element {
    let mut parcels = use_signal(|| Cache::<PaginatedDto<ParcelDto>>::NotFetched);
    let mut picked_up = use_signal(|| Some(false));
    let mut page = use_signal(|| 0u64);
    let per_page = use_signal(|| DEFAULT_PER_PAGE);
    let mut refetch_trigger = use_signal(|| 0u32);
    let mut show_create = use_signal(|| false);
    let mut action_error = use_signal(|| None::<String>);

    #[cfg(feature = "web")]
    {
        let future = use_resource(move || async move {
            let _ = refetch_trigger();
            get_parcels(picked_up(), page(), per_page()).await
        });
        use_effect(move || {
            if let Some(result) = &*future.read_unchecked() {
                if let Err(err) = result {
                    tracing::error!("Failed to fetch parcels: {}", err);
                }
                parcels.set(result.clone().into());
            }
        });
    }

    let hand_over = move |id: i32| {
        #[cfg(feature = "web")]
        spawn(async move {
            match pick_up(id).await {
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
            match delete_parcel(id).await {
                Ok(()) => refetch_trigger.set(refetch_trigger() + 1),
                Err(err) => action_error.set(Some(err.message)),
            }
        });
        #[cfg(not(feature = "web"))]
        let _ = id;
    };

    rsx! {
        Title { "พัสดุ | {SITE_NAME}" }
        match parcels() {
            Cache::Fetched(data) => rsx! {
                AdminPage {
                    active_tab: AdminTab::Parcels,
                    div {
                        class: "flex flex-wrap items-center justify-between gap-4 mb-4",
                        select {
                            class: "select select-bordered select-sm",
                            onchange: move |evt| {
                                picked_up.set(evt.value().parse().ok());
                                page.set(0);
                            },
                            option { value: "false", selected: picked_up() == Some(false), "รอรับ" }
                            option { value: "true", selected: picked_up() == Some(true), "รับแล้ว" }
                            option { value: "", selected: picked_up().is_none(), "ทั้งหมด" }
                        }
                        button {
                            class: "btn btn-primary",
                            onclick: move |_| show_create.set(true),
                            "รับพัสดุเข้า"
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
                                div { class: "text-center py-8 opacity-50", "ไม่มีพัสดุ" }
                            } else {
                                table {
                                    class: "table table-zebra w-full",
                                    thead {
                                        tr {
                                            th { "ห้อง" }
                                            th { "ผู้รับ" }
                                            th { "ขนส่ง" }
                                            th { "เลขพัสดุ" }
                                            th { "มาถึง" }
                                            th { class: "text-right", "จัดการ" }
                                        }
                                    }
                                    tbody {
                                        for parcel in data.items.iter().cloned() {
                                            tr {
                                                key: "{parcel.id}",
                                                td { "{parcel.room_number}" }
                                                td { "{parcel.recipient_name}" }
                                                td { {parcel.carrier.clone().unwrap_or_default()} }
                                                td { {parcel.tracking_number.clone().unwrap_or_default()} }
                                                td { {parcel.received_at.format("%Y-%m-%d %H:%M").to_string()} }
                                                td {
                                                    div {
                                                        class: "flex gap-2 justify-end",
                                                        if !parcel.picked_up {
                                                            button {
                                                                class: "btn btn-xs btn-success",
                                                                onclick: move |_| hand_over(parcel.id),
                                                                "รับแล้ว"
                                                            }
                                                        }
                                                        button {
                                                            class: "btn btn-xs btn-error",
                                                            onclick: move |_| remove(parcel.id),
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
            CreateParcelModal { show: show_create, refetch_trigger }
        }
    }
}

#[component]
fn CreateParcelModal(mut show: Signal<bool>, mut refetch_trigger: Signal<u32>) -> Element {
    let mut rooms = use_signal(Vec::<RoomDto>::new);
    let mut room_id = use_signal(|| None::<i32>);
    let mut recipient = use_signal(String::new);
    let mut carrier = use_signal(String::new);
    let mut tracking = use_signal(String::new);
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

    let on_pick_room = move |evt: FormEvent| {
        let id = evt.value().parse::<i32>().ok();
        room_id.set(id);
        let renter = id.and_then(|id| {
            rooms
                .read()
                .iter()
                .find(|r| r.id == id)
                .and_then(|r| r.renter.clone())
        });
        if let Some(renter) = renter {
            if recipient.peek().is_empty() {
                recipient.set(format!("{} {}", renter.first_name, renter.last_name));
            }
        }
    };

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let Some(id) = room_id() else {
            error.set(Some("กรุณาเลือกห้อง".to_string()));
            return;
        };
        let payload = CreateParcelDto {
            room_id: id,
            recipient_name: recipient().trim().to_string(),
            carrier: optional(&carrier()),
            tracking_number: optional(&tracking()),
        };
        submitting.set(true);

        #[cfg(feature = "web")]
        spawn(async move {
            match create_parcel(payload).await {
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
            title: "รับพัสดุเข้า".to_string(),
            prevent_close: submitting(),
            form {
                class: "flex flex-col gap-3",
                onsubmit: on_submit,
                select {
                    class: "select select-bordered",
                    required: true,
                    onchange: on_pick_room,
                    option { value: "", disabled: true, selected: room_id().is_none(), "เลือกห้อง" }
                    for room in rooms() {
                        option { key: "{room.id}", value: "{room.id}", "{room.room_number}" }
                    }
                }
                input {
                    class: "input input-bordered",
                    placeholder: "ชื่อผู้รับ",
                    required: true,
                    value: "{recipient}",
                    oninput: move |evt| recipient.set(evt.value()),
                }
                input {
                    class: "input input-bordered",
                    placeholder: "บริษัทขนส่ง (ไม่บังคับ)",
                    value: "{carrier}",
                    oninput: move |evt| carrier.set(evt.value()),
                }
                input {
                    class: "input input-bordered",
                    placeholder: "เลขพัสดุ (ไม่บังคับ)",
                    value: "{tracking}",
                    oninput: move |evt| tracking.set(evt.value()),
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
