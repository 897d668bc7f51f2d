//! Roster-wide lineup and player counts.

use crate::model::roster::{LineupDto, RosterDto};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RosterSummary {
    pub teams_count: usize,
    pub groups_count: usize,
    pub lineups_count: usize,
    pub team_players_count: usize,
    pub group_players_count: usize,
    pub players_count: usize,
}

impl RosterSummary {
    pub fn from_roster(roster: &RosterDto) -> Self {
        Self::from_lineups(roster.lineups().map(|(_, lineup)| lineup))
    }

    pub fn from_lineups<'a>(lineups: impl IntoIterator<Item = &'a LineupDto>) -> Self {
        lineups
            .into_iter()
            .fold(Self::default(), |mut summary, lineup| {
                let members = lineup.members.len();

                if lineup.is_team() {
                    summary.teams_count += 1;
                    summary.team_players_count += members;
                } else {
                    summary.groups_count += 1;
                    summary.group_players_count += members;
                }

                summary.lineups_count += 1;
                summary.players_count += members;
                summary
            })
    }
}
