use dioxus::document::Title;
use dioxus::prelude::*;

use crate::client::{components::Page, router::Route};

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = segments.join("/");

    rsx!(
        Title { "Not Found | Roster ELO" }
        Page { class: "flex items-center justify-center",
            div { class: "flex flex-col items-center gap-4",
                p { class: "text-2xl", "Page not found" }
                p { class: "text-sm opacity-70", "/{path}" }
                Link {
                    to: Route::Home { tournamentId: String::new() },
                    class: "btn btn-primary",
                    "Back to lookup"
                }
            }
        }
    )
}
