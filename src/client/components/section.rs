use dioxus::prelude::*;

/// Card with a title, an optional description and arbitrary content.
#[component]
pub fn Section(
    title: String,
    description: Option<String>,
    class: Option<&'static str>,
    children: Element,
) -> Element {
    let class: &str = class.unwrap_or("");

    rsx!(
        div {
            class: "card bg-base-100 shadow-sm w-full",
            div {
                class: "card-body gap-4",
                div {
                    h2 { class: "card-title", "{title}" }
                    if let Some(description) = description {
                        p { class: "text-sm opacity-70", "{description}" }
                    }
                }
                div { class: "{class}",
                    {children}
                }
            }
        }
    )
}
