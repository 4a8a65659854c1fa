use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use super::classify::Gender;

pub const PLACEHOLDER_PHOTO: &str = "https://via.placeholder.com/50";
pub const PLACEHOLDER_STATUS: &str = "Pendiente";
pub const PLACEHOLDER_START: &str = "00-00-0000 - 00:00";

// --- Raw file structures ---
//
// Match files arrive with scalar fields that are sometimes numbers and
// sometimes numeric strings; decoding defaults missing, null and unparsable
// values instead of rejecting the record.

/// One match file: either a single game or a `GAMES` collection.
#[derive(Debug, Clone, Deserialize)]
pub struct RawGameFile {
    #[serde(rename = "GAMES", default)]
    pub games: Option<Vec<RawGame>>,
    #[serde(rename = "HEADER", default)]
    pub header: Option<RawHeader>,
    #[serde(rename = "SCOREBOARD", default)]
    pub scoreboard: Option<RawScoreboard>,
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct RawGame {
    #[serde(rename = "HEADER", default)]
    pub header: Option<RawHeader>,
    #[serde(rename = "SCOREBOARD", default)]
    pub scoreboard: Option<RawScoreboard>,
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct RawHeader {
    /// Combined "DD-MM-YYYY - HH:MM" timestamp.
    #[serde(default)]
    pub starttime: Option<String>,
    /// Clock / status line ("Final", quarter time, ...).
    #[serde(default)]
    pub time: Option<String>,
    #[serde(default)]
    pub competition: Option<String>,
    #[serde(default)]
    pub round: Option<String>,
    #[serde(rename = "TEAM", default)]
    pub teams: Vec<RawHeaderTeam>,
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct RawHeaderTeam {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub logo: Option<String>,
    #[serde(default, deserialize_with = "int_or_zero")]
    pub pts: i32,
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct RawScoreboard {
    #[serde(rename = "TEAM", default)]
    pub teams: Vec<RawScoreboardTeam>,
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct RawScoreboardTeam {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(rename = "PLAYER", default)]
    pub players: Vec<RawPlayerLine>,
}

/// One player's box-score line as it appears on the wire.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct RawPlayerLine {
    #[serde(default, deserialize_with = "string_or_empty")]
    pub id: String,
    /// Jersey number.
    #[serde(default, deserialize_with = "string_or_empty")]
    pub no: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub logo: Option<String>,
    #[serde(default, deserialize_with = "int_or_zero")]
    pub pts: i32,
    #[serde(default, deserialize_with = "int_or_zero")]
    pub p2a: i32,
    #[serde(default, deserialize_with = "int_or_zero")]
    pub p2m: i32,
    #[serde(default, deserialize_with = "int_or_zero")]
    pub p3a: i32,
    #[serde(default, deserialize_with = "int_or_zero")]
    pub p3m: i32,
    #[serde(default, deserialize_with = "int_or_zero")]
    pub p1a: i32,
    #[serde(default, deserialize_with = "int_or_zero")]
    pub p1m: i32,
    #[serde(default, deserialize_with = "int_or_zero")]
    pub ro: i32,
    #[serde(default, deserialize_with = "int_or_zero")]
    pub rd: i32,
    #[serde(default, deserialize_with = "int_or_zero")]
    pub rt: i32,
    #[serde(default, deserialize_with = "int_or_zero")]
    pub assist: i32,
    #[serde(default, deserialize_with = "int_or_zero")]
    pub st: i32,
    #[serde(default, deserialize_with = "int_or_zero")]
    pub to: i32,
    #[serde(default, deserialize_with = "int_or_zero")]
    pub bs: i32,
    #[serde(default, deserialize_with = "int_or_zero")]
    pub pf: i32,
    #[serde(default, deserialize_with = "int_or_zero")]
    pub val: i32,
    #[serde(default, deserialize_with = "int_or_zero")]
    pub pllss: i32,
}

// --- Normalized structures ---

/// One game with its header data normalized for the schedule view.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NormalizedGame {
    pub day: String,
    pub month: String,
    pub year: String,
    pub time: String,
    pub competition: String,
    pub round: String,
    pub status: String,
    pub gender: Gender,
    pub team_a: TeamSide,
    pub team_b: TeamSide,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamSide {
    pub name: String,
    pub logo_url: String,
    pub points: i32,
}

impl NormalizedGame {
    /// "DD-MM-YYYY" key used by the calendar and the date filter.
    pub fn date_key(&self) -> String {
        format!("{}-{}-{}", self.day, self.month, self.year)
    }

    /// The combined timestamp the files carry in their header.
    pub fn start_label(&self) -> String {
        format!("{} - {}", self.date_key(), self.time)
    }
}

// --- Lenient scalar decoding ---

fn int_or_zero<'de, D>(deserializer: D) -> Result<i32, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Number(n) => n.as_i64().unwrap_or(0) as i32,
        Value::String(s) => s.trim().parse().unwrap_or(0),
        _ => 0,
    })
}

fn string_or_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::String(s) => s,
        Value::Number(n) => n.to_string(),
        _ => String::new(),
    })
}
