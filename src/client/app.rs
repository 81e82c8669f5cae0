use dioxus::prelude::*;

use crate::client::{
    constant::{SITE_DESCRIPTION, SITE_NAME},
    model::auth::AuthContext,
    router::Route,
};

#[cfg(feature = "web")]
use crate::client::{api::auth::get_user, model::auth::AuthState};

const FAVICON: Asset = asset!("/assets/favicon.svg");
const TAILWIND_CSS: Asset = asset!("/assets/tailwind.css");
const LOGO: Asset = asset!("/assets/logo.svg");

#[component]
pub fn App() -> Element {
    #[allow(unused_mut)]
    let mut auth = use_context_provider(AuthContext::new);

    // Resolve the cookie session once on load
    #[cfg(feature = "web")]
    {
        let future = use_resource(get_user);
        use_effect(move || {
            if let Some(result) = &*future.read_unchecked() {
                auth.set(match result {
                    Ok(user) => AuthState::from(user.clone()),
                    Err(err) => AuthState::Error(err.clone()),
                });
            }
        });
    }

    rsx! {
        Title { "{SITE_NAME}" }
        document::Link { rel: "icon", href: FAVICON }
        document::Meta {
            name: "og:image",
            content: LOGO
        }
        document::Meta {
            name: "description",
            content: SITE_DESCRIPTION
        }
        document::Link { rel: "stylesheet", href: TAILWIND_CSS }
        Router::<Route> {}
    }
}
