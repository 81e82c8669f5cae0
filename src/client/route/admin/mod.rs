mod bills;
mod chat;
mod dashboard;
mod landing_page;
mod parcels;
mod queue;
mod room_types;
mod rooms;
mod tasks;
mod users;

pub use bills::AdminBills;
pub use chat::{AdminChat, AdminChatThread};
pub use dashboard::AdminDashboard;
pub use landing_page::AdminLandingPage;
pub use parcels::AdminParcels;
pub use queue::AdminQueue;
pub use room_types::AdminRoomTypes;
pub use rooms::AdminRooms;
pub use tasks::AdminTasks;
pub use users::AdminUsers;

use dioxus::prelude::*;

use crate::client::{component::Page, router::Route};

#[derive(Clone, Copy, PartialEq)]
pub enum AdminTab {
    Dashboard,
    Rooms,
    RoomTypes,
    Queue,
    Bills,
    Tasks,
    Parcels,
    Chat,
    Users,
    LandingPage,
}

impl AdminTab {
    const ALL: [AdminTab; 10] = [
        AdminTab::Dashboard,
        AdminTab::Rooms,
        AdminTab::RoomTypes,
        AdminTab::Queue,
        AdminTab::Bills,
        AdminTab::Tasks,
        AdminTab::Parcels,
        AdminTab::Chat,
        AdminTab::Users,
        AdminTab::LandingPage,
    ];

    fn label(&self) -> &'static str {
        match self {
            AdminTab::Dashboard => "ภาพรวม",
            AdminTab::Rooms => "ห้องพัก",
            AdminTab::RoomTypes => "ประเภทห้อง",
            AdminTab::Queue => "คิวดูห้อง",
            AdminTab::Bills => "บิล",
            AdminTab::Tasks => "งานซ่อม/ทำความสะอาด",
            AdminTab::Parcels => "พัสดุ",
            AdminTab::Chat => "แชท",
            AdminTab::Users => "ผู้ใช้",
            AdminTab::LandingPage => "หน้าแรก",
        }
    }

    fn route(&self) -> Route {
        match self {
            AdminTab::Dashboard => Route::AdminDashboard {},
            AdminTab::Rooms => Route::AdminRooms {},
            AdminTab::RoomTypes => Route::AdminRoomTypes {},
            AdminTab::Queue => Route::AdminQueue {},
            AdminTab::Bills => Route::AdminBills {},
            AdminTab::Tasks => Route::AdminTasks {},
            AdminTab::Parcels => Route::AdminParcels {},
            AdminTab::Chat => Route::AdminChat {},
            AdminTab::Users => Route::AdminUsers {},
            AdminTab::LandingPage => Route::AdminLandingPage {},
        }
    }
}

#[component]
pub fn AdminTabs(active_tab: AdminTab) -> Element {
    rsx! {
        div {
            role: "tablist",
            class: "tabs tabs-bordered mb-6 overflow-x-auto flex-nowrap",
            for tab in AdminTab::ALL {
                Link {
                    to: tab.route(),
                    role: "tab",
                    class: if tab == active_tab { "tab tab-active whitespace-nowrap" } else { "tab whitespace-nowrap" },
                    {tab.label()}
                }
            }
        }
    }
}

/// Page frame shared by the admin screens.
#[component]
pub fn AdminPage(active_tab: AdminTab, children: Element) -> Element {
    rsx! {
        Page {
            class: "flex flex-col items-center w-full h-full",
            div {
                class: "w-full max-w-6xl",
                h1 {
                    class: "text-lg sm:text-2xl mb-4",
                    "ผู้ดูแลระบบ"
                }
                AdminTabs { active_tab }
                {children}
            }
        }
    }
}
