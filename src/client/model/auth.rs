use dioxus::prelude::*;

use crate::{client::model::error::ApiError, model::user::UserDto};

/// Logged-in user shared through context.
#[derive(Clone, Copy)]
pub struct AuthContext {
    inner: Signal<AuthState>,
}

impl AuthContext {
    pub fn new() -> Self {
        Self {
            inner: Signal::new(AuthState::Initializing),
        }
    }

    pub fn read(&self) -> impl std::ops::Deref<Target = AuthState> + '_ {
        self.inner.read()
    }

    pub fn set(&mut self, state: AuthState) {
        self.inner.set(state);
    }

    /// After login or a profile update.
    pub fn set_user(&mut self, user: UserDto) {
        self.inner.set(AuthState::Authenticated(user));
    }

    pub fn clear(&mut self) {
        self.inner.set(AuthState::NotLoggedIn);
    }
}

#[derive(Clone)]
pub enum AuthState {
    /// Haven't asked the server yet
    Initializing,
    Authenticated(UserDto),
    NotLoggedIn,
    /// Failed to check authentication
    Error(ApiError),
}

impl From<Option<UserDto>> for AuthState {
    fn from(opt: Option<UserDto>) -> Self {
        match opt {
            Some(user) => AuthState::Authenticated(user),
            None => AuthState::NotLoggedIn,
        }
    }
}

impl AuthState {
    pub fn is_resolved(&self) -> bool {
        !matches!(self, AuthState::Initializing)
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self, AuthState::Authenticated(_))
    }

    pub fn is_admin(&self) -> bool {
        self.user().is_some_and(|u| u.admin)
    }

    pub fn user(&self) -> Option<&UserDto> {
        match self {
            AuthState::Authenticated(user) => Some(user),
            _ => None,
        }
    }

    pub fn user_id(&self) -> Option<i32> {
        self.user().map(|u| u.id)
    }

    /// The room of a room account.
    pub fn room_id(&self) -> Option<i32> {
        self.user().and_then(|u| u.room_id)
    }
}
