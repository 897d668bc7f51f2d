use dioxus::prelude::*;

/// Page body below the fixed navbar.
#[component]
pub fn Page(class: Option<&'static str>, children: Element) -> Element {
    let class: &str = class.unwrap_or("");

    rsx!(
        div {
            class: "min-h-screen pt-[64px] p-4",
            div {
                class: "container mx-auto py-5 {class}",
                {children}
            }
        }
    )
}
