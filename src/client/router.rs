use dioxus::prelude::*;

use crate::client::component::{Layout, RequiresAdmin, RequiresLoggedIn};
use crate::client::route::{
    admin::{
        AdminBills, AdminChat, AdminChatThread, AdminDashboard, AdminLandingPage, AdminParcels,
        AdminQueue, AdminRoomTypes, AdminRooms, AdminTasks, AdminUsers,
    },
    Chat, Home, Login, MyRoom, NotFound, Profile, Register,
};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
    #[route("/")]
    Home {},

    #[route("/login")]
    Login {},

    #[route("/register")]
    Register {},

    #[layout(RequiresLoggedIn)]
    #[route("/my-room")]
    MyRoom {},

    #[route("/chat")]
    Chat {},

    #[route("/profile")]
    Profile {},
    #[end_layout]

    #[layout(RequiresAdmin)]
    #[nest("/admin")]
        #[route("/")]
        AdminDashboard {},

        #[route("/rooms")]
        AdminRooms {},

        #[route("/room-types")]
        AdminRoomTypes {},

        #[route("/queue")]
        AdminQueue {},

        #[route("/bills")]
        AdminBills {},

        #[route("/tasks")]
        AdminTasks {},

        #[route("/parcels")]
        AdminParcels {},

        #[route("/chat")]
        AdminChat {},

        #[route("/chat/:user_id")]
        AdminChatThread { user_id: i32 },

        #[route("/users")]
        AdminUsers {},

        #[route("/landing-page")]
        AdminLandingPage {},
    #[end_nest]
    #[end_layout]

    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}
