use dioxus::document::{Meta, Title};
use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::FaMagnifyingGlass;
use dioxus_free_icons::Icon;
use dioxus_logger::tracing;
use uuid::Uuid;

use crate::{
    client::{
        components::{LineupTable, Page, PlayerTable, Section},
        util::api::{fetch_ratings, fetch_roster},
    },
    model::roster::RosterDto,
    roster::{
        lookup::{LookupSequence, LookupState},
        summary::RosterSummary,
        table::{lineup_rows, player_groups, player_ids},
        tournament_id::extract_tournament_id,
        RatingMap,
    },
};

/// Prefilled lookup input for local development
#[cfg(debug_assertions)]
const DEFAULT_TOURNAMENT_ID: &str = "9fb0e8d8-6733-49c5-3943-08dddfe5e858";
#[cfg(not(debug_assertions))]
const DEFAULT_TOURNAMENT_ID: &str = "";

#[component]
pub fn Home(tournamentId: String) -> Element {
    let initial_input = if tournamentId.is_empty() {
        DEFAULT_TOURNAMENT_ID.to_string()
    } else {
        tournamentId.clone()
    };

    let mut input = use_signal(|| initial_input);
    let mut input_error = use_signal(|| None::<String>);
    let mut sequence = use_signal(LookupSequence::default);
    let mut roster = use_signal(LookupState::<RosterDto>::default);
    let mut ratings = use_signal(LookupState::<RatingMap>::default);

    let mut lookup = move |tournament_id: Uuid| {
        let ticket = sequence.write().begin();
        roster.set(LookupState::Loading);
        ratings.set(LookupState::Idle);

        spawn(async move {
            let result = fetch_roster(tournament_id).await;
            if !sequence.read().is_current(ticket) {
                return;
            }

            let loaded = match result {
                Ok(loaded) => loaded,
                Err(err) => {
                    tracing::error!("Failed to load roster of {}: {}", tournament_id, err);
                    roster.set(LookupState::Failed(err));
                    return;
                }
            };

            let ids = player_ids(&loaded);
            roster.set(LookupState::Loaded(loaded));

            if ids.is_empty() {
                return;
            }

            ratings.set(LookupState::Loading);
            let result = fetch_ratings(&ids).await;
            if !sequence.read().is_current(ticket) {
                return;
            }

            match result {
                Ok(map) => ratings.set(LookupState::Loaded(map)),
                Err(err) => {
                    tracing::error!("Failed to load FACEIT ratings: {}", err);
                    ratings.set(LookupState::Failed(err));
                }
            }
        });
    };

    // Tournament ids shared through the `tournamentId` query parameter are looked up once mounted
    use_effect(move || {
        if let Some(tournament_id) = extract_tournament_id(&tournamentId) {
            lookup(tournament_id);
        }
    });

    let mut submit = move || {
        let parsed = extract_tournament_id(&input.read());

        match parsed {
            Some(tournament_id) => {
                input_error.set(None);
                lookup(tournament_id);
            }
            None => input_error.set(Some("Tournament id or link is invalid".to_string())),
        }
    };

    let roster_state = roster.read().clone();
    let ratings_state = ratings.read().clone();

    let empty_ratings = RatingMap::new();
    let rating_map = ratings_state.loaded().unwrap_or(&empty_ratings);

    let (summary, rows, groups) = match roster_state.loaded() {
        Some(loaded) => (
            RosterSummary::from_roster(loaded),
            lineup_rows(loaded, rating_map),
            player_groups(loaded, rating_map),
        ),
        None => (RosterSummary::default(), Vec::new(), Vec::new()),
    };

    let is_loading = roster_state.is_loading() || ratings_state.is_loading();

    rsx!(
        Title { "Roster ELO" }
        Meta {
            name: "description",
            content: "FACEIT ELO statistics of CS2 Challengermode tournament rosters."
        }
        Page { class: "flex flex-col gap-4",
            h1 { class: "font-semibold text-2xl",
                "CS2 Challengermode Tournament FACEIT ELO Fetcher"
            }

            Section {
                title: "Tournament lookup",
                description: "Enter a tournament id or link to start the lookup",
                class: "flex flex-col gap-2",
                div { class: "flex gap-4",
                    input {
                        class: "input w-full",
                        r#type: "text",
                        placeholder: "Tournament id or link",
                        value: "{input}",
                        oninput: move |evt| input.set(evt.value()),
                        onkeydown: move |evt| {
                            if evt.key() == Key::Enter {
                                submit();
                            }
                        },
                    }
                    button {
                        class: "btn btn-primary flex gap-2",
                        disabled: roster_state.is_loading(),
                        onclick: move |_| submit(),
                        Icon {
                            width: 16,
                            height: 16,
                            icon: FaMagnifyingGlass
                        }
                        p { "Fetch" }
                    }
                }
                if let Some(error) = input_error() {
                    p { class: "text-error text-sm", "{error}" }
                }
            }

            Section { title: "Tournament",
                match &roster_state {
                    LookupState::Loaded(loaded) => rsx!(
                        div { class: "flex flex-col gap-2",
                            div { class: "font-semibold text-sm", "{loaded.tournament.name}" }
                            pre { class: "font-sans text-sm whitespace-pre-wrap",
                                "{loaded.tournament.description}"
                            }
                        }
                    ),
                    LookupState::Failed(error) => rsx!(
                        div { role: "alert", class: "alert alert-error", "{error}" }
                    ),
                    LookupState::Loading => rsx!(div { class: "skeleton h-6 w-64" }),
                    LookupState::Idle => rsx!(div { "No data" }),
                }
            }

            if is_loading {
                Section { title: "Loading",
                    span { class: "loading loading-spinner loading-lg" }
                    if ratings_state.is_loading() {
                        p { class: "mt-4 text-sm opacity-70",
                            "Looking up players on FACEIT takes a while..."
                        }
                    }
                }
            }

            if let Some(error) = ratings_state.error() {
                div { role: "alert", class: "alert alert-warning",
                    "FACEIT ratings are unavailable: {error}"
                }
            }

            Section { title: "Lineups",
                ul { class: "text-sm",
                    li { "Teams: {summary.teams_count}" }
                    li { "Groups: {summary.groups_count}" }
                    li { "Total: {summary.lineups_count}" }
                }
                div { class: "mt-4",
                    LineupTable { rows }
                }
            }

            Section { title: "Players",
                ul { class: "text-sm",
                    li { "Players in teams: {summary.team_players_count}" }
                    li { "Players in groups: {summary.group_players_count}" }
                    li { "Total: {summary.players_count}" }
                }
                div { class: "mt-4",
                    PlayerTable { groups }
                }
            }
        }
    )
}
