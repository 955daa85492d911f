//! Sign-in screen
//!
//! The backend issues access tokens elsewhere; the console only stores one.

use dioxus::prelude::*;

use crate::ui::components::ErrorBanner;
use crate::ui::routes::Route;
use crate::ui::services::use_services;

#[component]
pub fn SignInPage() -> Element {
    let navigator = use_navigator();
    let services = use_services();
    let mut token = use_signal(String::new);
    let mut error = use_signal(|| None::<String>);

    let already_signed_in = services.auth.is_signed_in();
    use_effect(move || {
        if already_signed_in {
            navigator.replace(Route::SongsRoute {});
        }
    });

    let auth = services.auth.clone();
    let submit = move |_: MouseEvent| {
        auth.sign_in(&token.read());
        if auth.is_signed_in() {
            error.set(None);
            navigator.replace(Route::SongsRoute {});
        } else {
            error.set(Some("Please paste an access token".to_string()));
        }
    };

    rsx! {
        div {
            class: "sign-in",
            div {
                class: "sign-in-card",
                h1 { "Media Admin" }
                p { class: "muted", "Paste the access token issued by the catalog API." }
                if let Some(message) = error() {
                    ErrorBanner { message }
                }
                label { class: "field-label", r#for: "token", "Access token" }
                input {
                    id: "token",
                    class: "field-input",
                    r#type: "password",
                    placeholder: "eyJhbGciOi...",
                    value: "{token}",
                    oninput: move |evt| token.set(evt.value()),
                }
                button {
                    class: "btn btn-primary btn-block",
                    onclick: submit,
                    "Sign in"
                }
            }
        }
    }
}
