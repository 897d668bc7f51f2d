use dioxus::prelude::*;

use crate::model::roster::MemberDto;

#[component]
pub fn UserAvatar(member: MemberDto) -> Element {
    let username = &member.user.username;

    rsx!(
        div { class: "avatar",
            if let Some(url) = member.avatar_url() {
                div { class: "w-5 h-5 rounded-full",
                    img { src: "{url}", alt: "{username}" }
                }
            } else {
                div { class: "w-5 h-5 rounded-full bg-neutral text-neutral-content flex items-center justify-center",
                    span { class: "text-xs uppercase", "{member.initial()}" }
                }
            }
        }
    )
}
