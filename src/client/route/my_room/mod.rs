mod bills;
mod parcels;
mod tasks;

use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::{
    client::{
        component::{format_baht, ErrorPage, LoadingPage, Page},
        constant::SITE_NAME,
        model::cache::Cache,
    },
    model::room::RoomDto,
};

use bills::RoomBills;
use parcels::RoomParcels;
use tasks::RoomTasks;

#[cfg(feature = "web")]
use crate::client::api::room::get_my_room;

/// A room account's home: room details, bills, requests and parcels.
#[component]
pub fn MyRoom() -> Element {
    let mut room = use_signal(|| Cache::<RoomDto>::NotFetched);

    #[cfg(feature = "web")]
    {
        let future = use_resource(get_my_room);
        use_effect(move || {
            if let Some(result) = &*future.read_unchecked() {
                if let Err(err) = result {
                    tracing::error!("Failed to fetch room: {}", err);
                }
                room.set(result.clone().into());
            }
        });
    }

    rsx! {
        Title { "ห้องของฉัน | {SITE_NAME}" }
        match room() {
            Cache::Fetched(room) => rsx! {
                Page {
                    class: "flex flex-col items-center w-full",
                    div {
                        class: "w-full max-w-5xl flex flex-col gap-6",
                        div {
                            class: "card bg-base-200",
                            div {
                                class: "card-body flex flex-row flex-wrap gap-6 items-center",
                                if let Some(url) = &room.image_url {
                                    img { class: "w-40 h-28 object-cover rounded", src: "{url}" }
                                }
                                div {
                                    h1 { class: "text-2xl font-semibold", "ห้อง {room.room_number}" }
                                    p { "{room.room_type_name} · ชั้น {room.floor}" }
                                    p { class: "opacity-70", "ค่าเช่า {format_baht(room.price as i64)} / เดือน" }
                                    if let Some(renter) = &room.renter {
                                        p { class: "opacity-70", "ผู้เช่า: {renter.first_name} {renter.last_name}" }
                                    }
                                }
                            }
                        }
                        RoomBills {}
                        RoomTasks {}
                        RoomParcels {}
                    }
                }
            },
            Cache::Error(err) => rsx! {
                ErrorPage { status: err.status, message: err.message }
            },
            Cache::NotFetched => rsx! { LoadingPage {} },
        }
    }
}
