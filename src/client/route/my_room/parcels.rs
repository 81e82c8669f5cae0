use dioxus::prelude::*;

use crate::{
    client::model::cache::Cache,
    model::{api::PaginatedDto, parcel::ParcelDto},
};

#[cfg(feature = "web")]
use crate::client::api::parcel::get_parcels;

/// Parcels held at the office for the caller's room.
#[component]
pub fn RoomParcels() -> Element {
    let mut parcels = use_signal(|| Cache::<PaginatedDto<ParcelDto>>::NotFetched);

    #[cfg(feature = "web")]
    {
        let future = use_resource(|| get_parcels(Some(false), 0, 20));
        use_effect(move || {
            if let Some(result) = &*future.read_unchecked() {
                parcels.set(result.clone().into());
            }
        });
    }

    rsx! {
        div {
            class: "card bg-base-200",
            div {
                class: "card-body",
                h2 { class: "card-title", "พัสดุรอรับ" }
                match parcels() {
                    Cache::Fetched(page) if page.items.is_empty() => rsx! {
                        p { class: "opacity-50", "ไม่มีพัสดุค้างรับ" }
                    },
                    Cache::Fetched(page) => rsx! {
                        ul {
                            class: "flex flex-col gap-2",
                            for parcel in page.items {
                                {
                                    let received = parcel.received_at.format("%Y-%m-%d %H:%M").to_string();
                                    let carrier = parcel.carrier.clone().unwrap_or_default();
                                    let tracking = parcel.tracking_number.clone().unwrap_or_default();
                                    rsx! {
                                        li {
                                            key: "{parcel.id}",
                                            class: "p-3 rounded bg-base-100",
                                            p { class: "font-semibold", "{parcel.recipient_name}" }
                                            p {
                                                class: "text-sm opacity-70",
                                                "{carrier} {tracking} · มาถึง {received}"
                                            }
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
