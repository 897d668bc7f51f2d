use dioxus::prelude::*;

use crate::{
    client::components::{EloBadge, UserAvatar},
    roster::table::{PlayerGroup, PlayerRow},
};

/// Players listed under the name of their lineup.
#[component]
pub fn PlayerTable(groups: Vec<PlayerGroup>) -> Element {
    rsx!(
        div {
            class: "overflow-x-auto",
            table {
                class: "table table-md",
                thead {
                    tr {
                        th { "Lineup" }
                        th { "Player" }
                        th { "Steam ID" }
                        th { "ELO" }
                    }
                }
                tbody {
                    if groups.is_empty() {
                        tr {
                            td { colspan: 4, "No data" }
                        }
                    }
                    for group in groups.iter() {
                        tr { key: "{group.key}",
                            td { class: "font-bold", colspan: 4, "{group.name}" }
                        }
                        for player in group.players.iter() {
                            PlayerTableRow { key: "{player.key}", player: player.clone() }
                        }
                    }
                }
            }
        }
    )
}

#[component]
fn PlayerTableRow(player: PlayerRow) -> Element {
    let member = &player.member;

    rsx!(
        tr {
            td {}
            td {
                span { class: "inline-flex items-center gap-1.5",
                    UserAvatar { member: member.clone() }
                    "{member.user.username}"
                    if member.captain {
                        span { class: "font-medium", "(captain)" }
                    }
                }
            }
            td {
                match &player.steam_id {
                    Ok(steam_id) => rsx!(
                        a {
                            class: "link link-info tabular-nums",
                            href: steam_id.profile_url(),
                            target: "_blank",
                            "{steam_id}"
                        }
                    ),
                    Err(err) => rsx!(
                        span { class: "text-error text-sm", title: "{err}", "{member.game_account_id}" }
                    ),
                }
            }
            td {
                if let Some(elo) = player.rating {
                    EloBadge { elo }
                } else {
                    span { class: "font-bold", "Not found" }
                }
            }
        }
    )
}
