use dioxus::prelude::*;

use crate::client::{
    component::page::{ErrorPage, LoadingPage},
    model::auth::{AuthContext, AuthState},
    router::Route,
};

#[derive(PartialEq, Clone)]
pub enum Permission {
    LoggedIn,
    Admin,
}

#[component]
pub fn RequiresLoggedIn() -> Element {
    rsx! {
        ProtectedLayout { permissions: vec![Permission::LoggedIn] }
    }
}

#[component]
pub fn RequiresAdmin() -> Element {
    rsx! {
        ProtectedLayout { permissions: vec![Permission::Admin] }
    }
}

fn check_permissions(state: &AuthState, required_permissions: &[Permission]) -> bool {
    let Some(user) = state.user() else {
        return false;
    };

    required_permissions.iter().all(|perm| match perm {
        Permission::LoggedIn => true,
        Permission::Admin => user.admin,
    })
}

#[component]
pub fn ProtectedLayout(permissions: Vec<Permission>) -> Element {
    let auth = use_context::<AuthContext>();
    let nav = navigator();

    let fetch_completed = auth.read().is_resolved();
    let logged_in = auth.read().is_authenticated();
    let has_required_permissions = check_permissions(&auth.read(), &permissions);

    use_effect(use_reactive!(|(logged_in, fetch_completed)| {
        if fetch_completed && !logged_in {
            nav.push(Route::Login {});
        }
    }));

    rsx! {
        if !fetch_completed {
            LoadingPage {  }
        } else if logged_in && !has_required_permissions {
            ErrorPage { status: 403, message: "คุณไม่มีสิทธิ์เข้าถึงหน้านี้" }
        } else if logged_in {
            Outlet::<Route> {}
        }
    }
}
