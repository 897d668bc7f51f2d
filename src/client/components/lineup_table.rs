use dioxus::prelude::*;

use crate::{
    client::components::{EloBadge, UserAvatar},
    roster::table::LineupRow,
};

#[component]
pub fn LineupTable(rows: Vec<LineupRow>) -> Element {
    rsx!(
        div {
            class: "overflow-x-auto",
            table {
                class: "table table-md",
                thead {
                    tr {
                        th { "Type" }
                        th { "Name" }
                        th { "Captain" }
                        th { "Players" }
                        th {
                            span { class: "flex flex-col",
                                span { "ELO" }
                                span { class: "text-xs opacity-70", "Min - Max" }
                            }
                        }
                        th {
                            span { class: "flex flex-col",
                                span { "ELO" }
                                span { class: "text-xs opacity-70", "Mean" }
                            }
                        }
                        th {
                            span { class: "flex flex-col",
                                span { "ELO" }
                                span { class: "text-xs opacity-70", "Sum" }
                            }
                        }
                    }
                }
                tbody {
                    if rows.is_empty() {
                        tr {
                            td { colspan: 7, "No data" }
                        }
                    }
                    for row in rows.iter() {
                        LineupTableRow { key: "{row.key}", row: row.clone() }
                    }
                }
            }
        }
    )
}

#[component]
fn LineupTableRow(row: LineupRow) -> Element {
    let kind = if row.is_team { "Team" } else { "Group" };
    let aggregate = row.aggregate;

    rsx!(
        tr {
            td { "{kind}" }
            td { "{row.name}" }
            td {
                match &row.captain {
                    Ok(captain) => rsx!(
                        span { class: "flex items-center gap-1.5",
                            UserAvatar { member: captain.clone() }
                            "{captain.user.username}"
                        }
                    ),
                    Err(err) => rsx!(
                        span { class: "text-error text-sm", title: "{err}", "Unknown" }
                    ),
                }
            }
            td { class: "tabular-nums", "{row.capacity}" }
            td {
                match (aggregate.min, aggregate.max) {
                    (Some(min), Some(max)) => rsx!(
                        span { class: "grid grid-cols-2 max-w-56",
                            EloBadge { elo: min }
                            EloBadge { elo: max }
                        }
                    ),
                    _ => rsx!(span { class: "opacity-70", "-" }),
                }
            }
            td { class: "tabular-nums",
                if let Some(mean) = aggregate.mean {
                    "{mean}"
                } else {
                    "-"
                }
            }
            td { class: "tabular-nums", "{aggregate.sum}" }
        }
    )
}
