use dioxus::prelude::*;

use crate::client::router::Route;

const TAILWIND_BROWSER: &str = "https://cdn.jsdelivr.net/npm/@tailwindcss/browser@4";
const DAISYUI_CSS: &str = "https://cdn.jsdelivr.net/npm/daisyui@5";

#[component]
pub fn App() -> Element {
    rsx! {
        document::Stylesheet { href: "{DAISYUI_CSS}" }
        document::Script { src: "{TAILWIND_BROWSER}" }
        Router::<Route> {}
    }
}
