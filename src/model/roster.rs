//! Tournament roster DTOs.
//!
//! The JSON shape mirrors the `data` payload of the Challengermode roster GraphQL query, the
//! server validates the upstream payload into these types and forwards them unchanged to the
//! web client.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// Lineup capacity shown next to the member count in the lineup table.
pub const LINEUP_CAPACITY: usize = 8;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct RosterDto {
    pub tournament: TournamentDto,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct TournamentDto {
    pub name: String,
    pub description: String,
    pub attendance: AttendanceDto,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct AttendanceDto {
    pub available_slot_count: i64,
    pub confirmed_lineup_count: i64,
    pub signups: LineupCollectionDto,
    pub roster: LineupCollectionDto,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct LineupCollectionDto {
    pub lineups: Vec<LineupDto>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct LineupDto {
    pub name: String,
    /// Present for formal teams, absent for ad-hoc groups
    pub team: Option<TeamDto>,
    pub members: Vec<MemberDto>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct TeamDto {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub logo: Option<ImageDto>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct ImageDto {
    pub url: String,
    pub width: f64,
    pub height: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct MemberDto {
    pub captain: bool,
    /// Platform specific account id, a SteamID32 such as `[U:1:1075413651]`
    pub game_account_id: String,
    pub user: MemberUserDto,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct MemberUserDto {
    pub username: String,
    pub profile_picture: Option<ImageDto>,
}

/// Lineup collection a lineup was listed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LineupSource {
    Roster,
    Signups,
}

/// Identifies a lineup within a roster.
///
/// Lineup names are not guaranteed to be unique across (or within) the roster and signups
/// collections, so lineups are identified by their collection and position instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LineupKey {
    pub source: LineupSource,
    pub index: usize,
}

impl fmt::Display for LineupKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let source = match self.source {
            LineupSource::Roster => "roster",
            LineupSource::Signups => "signups",
        };

        write!(f, "{}-{}", source, self.index)
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DataError {
    #[error("Lineup {0:?} has no captain")]
    NoCaptain(String),
    #[error("Lineup {name:?} has {count} captains, expected exactly one")]
    MultipleCaptains { name: String, count: usize },
}

impl RosterDto {
    /// Iterates over all lineups, confirmed roster lineups first and signups after.
    pub fn lineups(&self) -> impl Iterator<Item = (LineupKey, &LineupDto)> {
        let attendance = &self.tournament.attendance;

        let roster = attendance
            .roster
            .lineups
            .iter()
            .enumerate()
            .map(|(index, lineup)| {
                let key = LineupKey {
                    source: LineupSource::Roster,
                    index,
                };
                (key, lineup)
            });

        let signups = attendance
            .signups
            .lineups
            .iter()
            .enumerate()
            .map(|(index, lineup)| {
                let key = LineupKey {
                    source: LineupSource::Signups,
                    index,
                };
                (key, lineup)
            });

        roster.chain(signups)
    }
}

impl LineupDto {
    pub fn is_team(&self) -> bool {
        self.team.is_some()
    }

    /// Returns the lineup's single captain.
    ///
    /// # Returns
    /// - `Ok(&MemberDto)` - Exactly one member is flagged as captain
    /// - `Err(DataError::NoCaptain)` - No member is flagged as captain
    /// - `Err(DataError::MultipleCaptains)` - More than one member is flagged as captain
    pub fn captain(&self) -> Result<&MemberDto, DataError> {
        let mut captains = self.members.iter().filter(|member| member.captain);

        let captain = captains
            .next()
            .ok_or_else(|| DataError::NoCaptain(self.name.clone()))?;

        let extra = captains.count();
        if extra > 0 {
            return Err(DataError::MultipleCaptains {
                name: self.name.clone(),
                count: extra + 1,
            });
        }

        Ok(captain)
    }

    /// Member count label such as `5/8`
    pub fn capacity_label(&self) -> String {
        format!("{}/{}", self.members.len(), LINEUP_CAPACITY)
    }
}

impl MemberDto {
    pub fn avatar_url(&self) -> Option<&str> {
        self.user
            .profile_picture
            .as_ref()
            .map(|picture| picture.url.as_str())
    }

    /// First character of the username, used when no avatar is available
    pub fn initial(&self) -> String {
        self.user
            .username
            .chars()
            .next()
            .map(|c| c.to_uppercase().to_string())
            .unwrap_or_default()
    }
}
