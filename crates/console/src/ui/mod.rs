use dioxus::prelude::*;

use crate::application::resource::StateCell;

pub mod components;
pub mod routes;
pub mod services;

#[cfg(test)]
mod catalog_integration_tests;

pub use routes::Route;
pub use services::{use_services, ManagedFeedback, ManagedResource, Services};

const CONSOLE_CSS: &str = include_str!("../../assets/console.css");

/// Page state kept in a signal is driven by the same managers the tests use
impl<T: 'static> StateCell<T> for Signal<T> {
    fn update_state<O>(&mut self, f: impl FnOnce(&mut T) -> O) -> O {
        f(&mut self.write())
    }

    fn read_state<O>(&self, f: impl FnOnce(&T) -> O) -> O {
        f(&self.read())
    }
}

pub fn app() -> Element {
    rsx! {
        AppRoot {}
    }
}

#[component]
fn AppRoot() -> Element {
    rsx! {
        style { {CONSOLE_CSS} }

        div {
            class: "app-shell",
            Router::<routes::Route> {}
        }
    }
}
