//! Router and route components
//!
//! Every catalog page sits behind [`ConsoleLayout`], which redirects to the
//! sign-in screen when no access token is present.

use dioxus::prelude::*;
use mediadmin_domain::{Category, Comment, Film, Genre, Review, Song};

use crate::ui::components::{feedback_page, resource_page, SignInPage};
use crate::ui::services::use_services;

#[derive(Clone, Debug, PartialEq, Routable)]
#[rustfmt::skip]
pub enum Route {
    #[route("/login")]
    SignInRoute {},
    #[layout(ConsoleLayout)]
        #[route("/")]
        SongsRoute {},
        #[route("/category")]
        CategoriesRoute {},
        #[route("/films")]
        FilmsRoute {},
        #[route("/genre")]
        GenresRoute {},
        #[route("/comment")]
        CommentsRoute {},
        #[route("/ulasan")]
        ReviewsRoute {},
    #[end_layout]
    #[route("/:..segments")]
    NotFoundRoute { segments: Vec<String> },
}

#[component]
fn SignInRoute() -> Element {
    rsx! {
        SignInPage {}
    }
}

/// Navbar, logout and the token guard shared by the catalog pages
#[component]
fn ConsoleLayout() -> Element {
    let navigator = use_navigator();
    let services = use_services();
    let signed_in = services.auth.is_signed_in();

    use_effect(move || {
        if !signed_in {
            tracing::debug!("No access token, redirecting to sign in");
            navigator.replace(Route::SignInRoute {});
        }
    });

    if !signed_in {
        return rsx! {
            div { class: "page-status", "Redirecting to sign in..." }
        };
    }

    let auth = services.auth.clone();
    rsx! {
        div {
            class: "console-layout",
            nav {
                class: "navbar",
                span { class: "navbar-brand", "Media Admin" }
                div {
                    class: "navbar-links",
                    Link { to: Route::SongsRoute {}, active_class: "active", "Songs" }
                    Link { to: Route::CategoriesRoute {}, active_class: "active", "Categories" }
                    Link { to: Route::FilmsRoute {}, active_class: "active", "Films" }
                    Link { to: Route::GenresRoute {}, active_class: "active", "Genres" }
                    Link { to: Route::CommentsRoute {}, active_class: "active", "Comments" }
                    Link { to: Route::ReviewsRoute {}, active_class: "active", "Reviews" }
                }
                button {
                    class: "btn btn-secondary",
                    onclick: move |_| {
                        auth.logout();
                        tracing::info!("Signed out");
                        navigator.replace(Route::SignInRoute {});
                    },
                    "Logout"
                }
            }
            main {
                class: "console-main",
                Outlet::<Route> {}
            }
        }
    }
}

#[component]
fn SongsRoute() -> Element {
    resource_page::<Song>()
}

#[component]
fn CategoriesRoute() -> Element {
    resource_page::<Category>()
}

#[component]
fn FilmsRoute() -> Element {
    resource_page::<Film>()
}

#[component]
fn GenresRoute() -> Element {
    resource_page::<Genre>()
}

#[component]
fn CommentsRoute() -> Element {
    feedback_page::<Comment>()
}

#[component]
fn ReviewsRoute() -> Element {
    feedback_page::<Review>()
}

#[component]
fn NotFoundRoute(segments: Vec<String>) -> Element {
    let path = segments.join("/");
    rsx! {
        div {
            class: "not-found",
            h1 { "Page not found" }
            p { "Nothing lives at /{path}." }
            Link { to: Route::SongsRoute {}, class: "btn btn-primary", "Back to songs" }
        }
    }
}
