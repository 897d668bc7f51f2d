use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::FaBook;
use dioxus_free_icons::Icon;

pub use crate::client::router::Route;

#[component]
pub fn Navbar() -> Element {
    rsx! {
        div {
            class: "navbar bg-base-200 fixed top-0 z-10",
            div {
                class: "navbar-start",
                div { class: "flex items-center gap-2",
                    p { class: "text-xl",
                        "Roster ELO"
                    }
                    p { class: "text-xs",
                        "CS2 Challengermode tournament FACEIT ELO"
                    }
                }
            }
            div {
                class: "navbar-end",
                a { href: "/api/docs",
                    button {
                        class: "btn btn-ghost flex gap-2",
                        Icon {
                            width: 20,
                            height: 20,
                            icon: FaBook
                        }
                        p { "API Docs" }
                    }
                }
            }
        }

        Outlet::<Route> {}
    }
}
