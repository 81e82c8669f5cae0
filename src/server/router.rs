use axum::{
    extract::DefaultBodyLimit,
    routing::{delete, get, post, put},
    Router,
};
use tower_http::services::ServeDir;

use crate::server::{
    controller::{
        auth, bill, chat, dashboard, landing_page, parcel, queue, room, room_type, task, upload,
        user,
    },
    state::AppState,
    util::image::MAX_IMAGE_BYTES,
};

/// Request body limit; base64 inflates a 5 MiB image by a third.
const BODY_LIMIT: usize = MAX_IMAGE_BYTES * 2;

/// API routes. `upload_dir` is served at `/uploads` for the local storage backend.
pub fn router(upload_dir: &str) -> Router<AppState> {
    Router::new()
        .route("/api/auth/register", post(auth::register))
        .route("/api/auth/login", post(auth::login))
        .route("/api/auth/logout", post(auth::logout))
        .route("/api/auth/user", get(auth::get_user))
        .route("/api/auth/password", put(auth::change_password))
        .route("/api/users", get(user::get_users))
        .route("/api/users/me", put(user::update_me))
        .route(
            "/api/users/{id}",
            get(user::get_user_by_id).delete(user::delete_user),
        )
        .route(
            "/api/room-types",
            get(room_type::get_room_types).post(room_type::create_room_type),
        )
        .route(
            "/api/room-types/{id}",
            get(room_type::get_room_type)
                .put(room_type::update_room_type)
                .delete(room_type::delete_room_type),
        )
        .route("/api/rooms", get(room::get_rooms).post(room::create_room))
        .route("/api/rooms/mine", get(room::get_my_room))
        .route(
            "/api/rooms/{id}",
            get(room::get_room)
                .put(room::update_room)
                .delete(room::delete_room),
        )
        .route(
            "/api/rooms/{id}/tenant",
            post(room::assign_tenant).delete(room::vacate_room),
        )
        .route("/api/queue", get(queue::get_queue).post(queue::book))
        .route("/api/queue/availability", get(queue::get_availability))
        .route("/api/queue/{id}", delete(queue::delete_entry))
        .route("/api/queue/{id}/status", put(queue::update_status))
        .route("/api/tasks", get(task::get_tasks).post(task::create_task))
        .route("/api/tasks/{id}", delete(task::delete_task))
        .route("/api/tasks/{id}/status", put(task::update_status))
        .route("/api/tasks/{id}/complete", put(task::complete_task))
        .route("/api/bills", get(bill::get_bills).post(bill::create_bill))
        .route(
            "/api/bills/{id}",
            get(bill::get_bill).delete(bill::delete_bill),
        )
        .route("/api/bills/{id}/proof", put(bill::submit_proof))
        .route("/api/bills/{id}/status", put(bill::update_status))
        .route(
            "/api/parcels",
            get(parcel::get_parcels).post(parcel::create_parcel),
        )
        .route(
            "/api/parcels/{id}",
            delete(parcel::delete_parcel),
        )
        .route("/api/parcels/{id}/pickup", put(parcel::pick_up))
        .route("/api/chat/threads", get(chat::get_threads))
        .route(
            "/api/chat/{user_id}/messages",
            get(chat::get_messages).post(chat::send_message),
        )
        .route(
            "/api/landing-page",
            get(landing_page::get_landing_page).put(landing_page::update_landing_page),
        )
        .route("/api/dashboard/stats", get(dashboard::get_stats))
        .route("/api/upload", post(upload::upload))
        .nest_service("/uploads", ServeDir::new(upload_dir))
        .layer(DefaultBodyLimit::max(BODY_LIMIT))
}
