use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::{
    client::{
        component::{format_baht, ErrorPage, LoadingPage},
        constant::SITE_NAME,
        model::cache::Cache,
        route::admin::{AdminPage, AdminTab},
    },
    model::dashboard::DashboardStatsDto,
};

#[cfg(feature = "web")]
use crate::client::api::dashboard::get_stats;

#[component]
fn Stat(title: &'static str, value: String, description: Option<String>) -> Element {
    rsx! {
        div {
            class: "stat",
            div { class: "stat-title", "{title}" }
            div { class: "stat-value text-2xl", "{value}" }
            if let Some(description) = description {
                div { class: "stat-desc", "{description}" }
            }
        }
    }
}

#[component]
pub fn AdminDashboard() -> Element {
    let mut stats = use_signal(|| Cache::<DashboardStatsDto>::NotFetched);

    #[cfg(feature = "web")]
    {
        let future = use_resource(get_stats);
        use_effect(move || {
            if let Some(result) = &*future.read_unchecked() {
                if let Err(err) = result {
                    tracing::error!("Failed to fetch dashboard stats: {}", err);
                }
                stats.set(result.clone().into());
            }
        });
    }

    rsx! {
        Title { "ภาพรวม | {SITE_NAME}" }
        match stats() {
            Cache::Fetched(s) => rsx! {
                AdminPage {
                    active_tab: AdminTab::Dashboard,
                    div {
                        class: "stats stats-vertical lg:stats-horizontal bg-base-200 w-full mb-4",
                        Stat { title: "ห้องทั้งหมด", value: s.total_rooms.to_string() }
                        Stat {
                            title: "มีผู้เช่า",
                            value: s.occupied_rooms.to_string(),
                            description: format!("{} ผู้เช่า", s.tenants),
                        }
                        Stat {
                            title: "ห้องว่าง",
                            value: s.vacant_rooms.to_string(),
                            description: format!("ปิดปรับปรุง {} ห้อง", s.unavailable_rooms),
                        }
                        Stat { title: "สมาชิกยังไม่มีห้อง", value: s.registered_users.to_string() }
                    }
                    div {
                        class: "stats stats-vertical lg:stats-horizontal bg-base-200 w-full",
                        Stat { title: "คิวรอยืนยัน", value: s.pending_queue.to_string() }
                        Stat {
                            title: "บิลค้างชำระ",
                            value: s.unpaid_bills.to_string(),
                            description: format!("รอตรวจสลิป {} บิล", s.pending_review_bills),
                        }
                        Stat { title: "ยอดค้างรับ", value: format_baht(s.outstanding_amount) }
                        Stat { title: "งานค้าง", value: s.open_tasks.to_string() }
                        Stat { title: "พัสดุรอรับ", value: s.waiting_parcels.to_string() }
                    }
                }
            },
            Cache::Error(err) => rsx! { ErrorPage { status: err.status, message: err.message } },
            Cache::NotFetched => rsx! { LoadingPage {} },
        }
    }
}
