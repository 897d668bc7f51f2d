//! Validation of the Challengermode roster payload.
//!
//! The payload is checked field by field while it is converted into the shared roster DTOs, the
//! first field that does not match the expected schema is reported with its JSON path. Fields
//! not part of the schema are ignored.

use serde_json::{Map, Value};
use uuid::Uuid;

use crate::{
    model::roster::{
        AttendanceDto, ImageDto, LineupCollectionDto, LineupDto, MemberDto, MemberUserDto,
        RosterDto, TeamDto, TournamentDto,
    },
    server::error::challengermode::ValidationError,
};

type Object = Map<String, Value>;

/// Position within the payload, rendered as `tournament.attendance.roster.lineups[0].name`.
#[derive(Clone)]
struct Path(String);

impl Path {
    fn root() -> Self {
        Self(String::new())
    }

    fn field(&self, name: &str) -> Self {
        if self.0.is_empty() {
            Self(name.to_string())
        } else {
            Self(format!("{}.{}", self.0, name))
        }
    }

    fn index(&self, index: usize) -> Self {
        Self(format!("{}[{}]", self.0, index))
    }

    fn error(&self, reason: impl Into<String>) -> ValidationError {
        let path = if self.0.is_empty() {
            "data".to_string()
        } else {
            self.0.clone()
        };

        ValidationError {
            path,
            reason: reason.into(),
        }
    }
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

fn as_object<'a>(value: &'a Value, path: &Path) -> Result<&'a Object, ValidationError> {
    value
        .as_object()
        .ok_or_else(|| path.error(format!("expected object, found {}", type_name(value))))
}

fn required<'a>(object: &'a Object, name: &str, path: &Path) -> Result<&'a Value, ValidationError> {
    object
        .get(name)
        .ok_or_else(|| path.field(name).error("missing field"))
}

fn object_field<'a>(
    object: &'a Object,
    name: &str,
    path: &Path,
) -> Result<&'a Object, ValidationError> {
    as_object(required(object, name, path)?, &path.field(name))
}

/// Nullable field, which must still be present. Only an explicit `null` maps to `None`
fn nullable_object_field<'a>(
    object: &'a Object,
    name: &str,
    path: &Path,
) -> Result<Option<&'a Object>, ValidationError> {
    match required(object, name, path)? {
        Value::Null => Ok(None),
        value => as_object(value, &path.field(name)).map(Some),
    }
}

fn array_field<'a>(
    object: &'a Object,
    name: &str,
    path: &Path,
) -> Result<&'a Vec<Value>, ValidationError> {
    let value = required(object, name, path)?;

    value.as_array().ok_or_else(|| {
        path.field(name)
            .error(format!("expected array, found {}", type_name(value)))
    })
}

fn string_field(object: &Object, name: &str, path: &Path) -> Result<String, ValidationError> {
    let value = required(object, name, path)?;

    value.as_str().map(str::to_string).ok_or_else(|| {
        path.field(name)
            .error(format!("expected string, found {}", type_name(value)))
    })
}

fn bool_field(object: &Object, name: &str, path: &Path) -> Result<bool, ValidationError> {
    let value = required(object, name, path)?;

    value.as_bool().ok_or_else(|| {
        path.field(name)
            .error(format!("expected boolean, found {}", type_name(value)))
    })
}

fn number_field(object: &Object, name: &str, path: &Path) -> Result<f64, ValidationError> {
    let value = required(object, name, path)?;

    value.as_f64().ok_or_else(|| {
        path.field(name)
            .error(format!("expected number, found {}", type_name(value)))
    })
}

fn integer_field(object: &Object, name: &str, path: &Path) -> Result<i64, ValidationError> {
    let value = required(object, name, path)?;

    value.as_i64().ok_or_else(|| {
        path.field(name)
            .error(format!("expected integer, found {}", value))
    })
}

fn uuid_field(object: &Object, name: &str, path: &Path) -> Result<Uuid, ValidationError> {
    let value = string_field(object, name, path)?;

    Uuid::parse_str(&value).map_err(|_| {
        path.field(name)
            .error(format!("expected UUID, found {:?}", value))
    })
}

fn url_field(object: &Object, name: &str, path: &Path) -> Result<String, ValidationError> {
    let value = string_field(object, name, path)?;

    reqwest::Url::parse(&value).map_err(|_| {
        path.field(name)
            .error(format!("expected absolute URL, found {:?}", value))
    })?;

    Ok(value)
}

/// Validates the `data` payload of the roster query.
///
/// # Returns
/// - `Ok(RosterDto)` - The payload matches the roster schema
/// - `Err(ValidationError)` - The first field not matching the schema, with its JSON path
pub fn parse_roster(data: &Value) -> Result<RosterDto, ValidationError> {
    let root = Path::root();
    let data = as_object(data, &root)?;

    let path = root.field("tournament");
    let tournament = object_field(data, "tournament", &root)?;

    Ok(RosterDto {
        tournament: parse_tournament(tournament, &path)?,
    })
}

fn parse_tournament(tournament: &Object, path: &Path) -> Result<TournamentDto, ValidationError> {
    let name = string_field(tournament, "name", path)?;
    let description = string_field(tournament, "description", path)?;

    let attendance_path = path.field("attendance");
    let attendance = object_field(tournament, "attendance", path)?;

    Ok(TournamentDto {
        name,
        description,
        attendance: parse_attendance(attendance, &attendance_path)?,
    })
}

fn parse_attendance(attendance: &Object, path: &Path) -> Result<AttendanceDto, ValidationError> {
    let available_slot_count = integer_field(attendance, "availableSlotCount", path)?;
    let confirmed_lineup_count = integer_field(attendance, "confirmedLineupCount", path)?;

    let signups = object_field(attendance, "signups", path)?;
    let signups = parse_collection(signups, &path.field("signups"))?;

    let roster = object_field(attendance, "roster", path)?;
    let roster = parse_collection(roster, &path.field("roster"))?;

    Ok(AttendanceDto {
        available_slot_count,
        confirmed_lineup_count,
        signups,
        roster,
    })
}

fn parse_collection(
    collection: &Object,
    path: &Path,
) -> Result<LineupCollectionDto, ValidationError> {
    let lineups_path = path.field("lineups");

    let lineups = array_field(collection, "lineups", path)?
        .iter()
        .enumerate()
        .map(|(index, lineup)| {
            let lineup_path = lineups_path.index(index);
            parse_lineup(as_object(lineup, &lineup_path)?, &lineup_path)
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(LineupCollectionDto { lineups })
}

fn parse_lineup(lineup: &Object, path: &Path) -> Result<LineupDto, ValidationError> {
    let name = string_field(lineup, "name", path)?;

    let team = match nullable_object_field(lineup, "team", path)? {
        Some(team) => Some(parse_team(team, &path.field("team"))?),
        None => None,
    };

    let members_path = path.field("members");
    let members = array_field(lineup, "members", path)?
        .iter()
        .enumerate()
        .map(|(index, member)| {
            let member_path = members_path.index(index);
            parse_member(as_object(member, &member_path)?, &member_path)
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(LineupDto {
        name,
        team,
        members,
    })
}

fn parse_team(team: &Object, path: &Path) -> Result<TeamDto, ValidationError> {
    let id = uuid_field(team, "id", path)?;
    let name = string_field(team, "name", path)?;
    let description = string_field(team, "description", path)?;

    let logo = match nullable_object_field(team, "logo", path)? {
        Some(logo) => {
            let logo_path = path.field("logo");
            Some(ImageDto {
                width: number_field(logo, "width", &logo_path)?,
                height: number_field(logo, "height", &logo_path)?,
                url: url_field(logo, "url", &logo_path)?,
            })
        }
        None => None,
    };

    Ok(TeamDto {
        id,
        name,
        description,
        logo,
    })
}

fn parse_member(member: &Object, path: &Path) -> Result<MemberDto, ValidationError> {
    let captain = bool_field(member, "captain", path)?;
    let game_account_id = string_field(member, "gameAccountId", path)?;

    let user_path = path.field("user");
    let user = object_field(member, "user", path)?;
    let username = string_field(user, "username", &user_path)?;

    let profile_picture = match nullable_object_field(user, "profilePicture", &user_path)? {
        Some(picture) => {
            let picture_path = user_path.field("profilePicture");
            Some(ImageDto {
                url: string_field(picture, "url", &picture_path)?,
                width: number_field(picture, "width", &picture_path)?,
                height: number_field(picture, "height", &picture_path)?,
            })
        }
        None => None,
    };

    Ok(MemberDto {
        captain,
        game_account_id,
        user: MemberUserDto {
            username,
            profile_picture,
        },
    })
}
