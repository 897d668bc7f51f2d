use dioxus::prelude::*;

use crate::roster::elo::EloLevel;

/// FACEIT level badge followed by the ELO value.
#[component]
pub fn EloBadge(elo: i64) -> Element {
    let level = EloLevel::from_elo(elo);
    let color = level.color_class();

    rsx!(
        span { class: "flex items-center gap-1.5 tabular-nums",
            span {
                class: "badge badge-sm rounded-full w-6 h-6 p-0 {color}",
                title: "Level {level.0}",
                "{level.0}"
            }
            "{elo}"
        }
    )
}
