use super::classify::gender_for_competition;
use super::models::{
    NormalizedGame, RawGameFile, RawHeader, RawHeaderTeam, RawScoreboard, TeamSide,
    PLACEHOLDER_PHOTO, PLACEHOLDER_START, PLACEHOLDER_STATUS,
};

/// A normalized game plus the box score it arrived with, when present.
#[derive(Debug, Clone)]
pub struct ParsedGame {
    pub game: NormalizedGame,
    pub scoreboard: Option<RawScoreboard>,
}

/// Normalize one decoded match file into per-game records.
///
/// A file is either a single game or a `GAMES` collection; every entry yields
/// a record. Missing fields fall back to placeholders, they never drop the
/// record.
pub fn parse_file(file: &RawGameFile) -> Vec<ParsedGame> {
    match &file.games {
        Some(games) => games
            .iter()
            .map(|g| parse_game(g.header.as_ref(), g.scoreboard.as_ref()))
            .collect(),
        None => vec![parse_game(file.header.as_ref(), file.scoreboard.as_ref())],
    }
}

fn parse_game(header: Option<&RawHeader>, scoreboard: Option<&RawScoreboard>) -> ParsedGame {
    let empty = RawHeader::default();
    let header = header.unwrap_or(&empty);

    let starttime = text_or(&header.starttime, PLACEHOLDER_START);
    let (day, month, year, time) = split_start_time(&starttime);

    let competition = text_or(&header.competition, "");
    let gender = gender_for_competition(&competition);

    let game = NormalizedGame {
        day,
        month,
        year,
        time,
        competition,
        round: text_or(&header.round, ""),
        status: text_or(&header.time, PLACEHOLDER_STATUS),
        gender,
        team_a: team_side(header.teams.first(), "Equipo A"),
        team_b: team_side(header.teams.get(1), "Equipo B"),
    };

    ParsedGame {
        game,
        scoreboard: scoreboard.cloned(),
    }
}

/// Split "DD-MM-YYYY - HH:MM" into its date components and time part.
fn split_start_time(starttime: &str) -> (String, String, String, String) {
    let mut parts = starttime.splitn(2, " - ");
    let date_part = parts.next().unwrap_or("");
    let time_part = parts.next().unwrap_or("").to_string();

    let mut date = date_part.split('-');
    let day = date.next().unwrap_or("00").to_string();
    let month = date.next().unwrap_or("00").to_string();
    let year = date.next().unwrap_or("0000").to_string();

    (day, month, year, time_part)
}

fn team_side(team: Option<&RawHeaderTeam>, fallback_name: &str) -> TeamSide {
    match team {
        Some(t) => TeamSide {
            name: text_or(&t.name, fallback_name),
            logo_url: text_or(&t.logo, PLACEHOLDER_PHOTO),
            points: t.pts,
        },
        None => TeamSide {
            name: fallback_name.to_string(),
            logo_url: PLACEHOLDER_PHOTO.to_string(),
            points: 0,
        },
    }
}

/// Empty strings count as missing, matching how the files are produced.
pub(crate) fn text_or(value: &Option<String>, fallback: &str) -> String {
    match value {
        Some(s) if !s.is_empty() => s.clone(),
        _ => fallback.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::classify::Gender;

    fn decode(json: serde_json::Value) -> RawGameFile {
        serde_json::from_value(json).unwrap()
    }

    #[test]
    fn single_game_file_yields_one_record() {
        let file = decode(serde_json::json!({
            "HEADER": {
                "starttime": "05-04-2025 - 18:30",
                "time": "Final",
                "competition": "LF Endesa",
                "round": "A",
                "TEAM": [
                    { "name": "CB Norte", "logo": "https://img/n.png", "pts": "63" },
                    { "name": "CB Sur", "logo": "https://img/s.png", "pts": 58 }
                ]
            }
        }));

        let parsed = parse_file(&file);
        assert_eq!(parsed.len(), 1);

        let game = &parsed[0].game;
        assert_eq!(game.day, "05");
        assert_eq!(game.month, "04");
        assert_eq!(game.year, "2025");
        assert_eq!(game.time, "18:30");
        assert_eq!(game.status, "Final");
        assert_eq!(game.gender, Gender::Female);
        assert_eq!(game.team_a.points, 63);
        assert_eq!(game.team_b.name, "CB Sur");
        assert_eq!(game.date_key(), "05-04-2025");
        assert_eq!(game.start_label(), "05-04-2025 - 18:30");
    }

    #[test]
    fn games_array_yields_one_record_per_entry() {
        let file = decode(serde_json::json!({
            "GAMES": [
                { "HEADER": { "starttime": "01-02-2025 - 10:00", "competition": "Liga EBA" } },
                { "HEADER": { "starttime": "01-02-2025 - 12:00", "competition": "Liga EBA" } },
                {}
            ]
        }));

        let parsed = parse_file(&file);
        assert_eq!(parsed.len(), 3);
        assert_eq!(parsed[0].game.time, "10:00");
        assert_eq!(parsed[1].game.time, "12:00");
    }

    #[test]
    fn missing_fields_fall_back_to_placeholders() {
        let file = decode(serde_json::json!({ "HEADER": {} }));
        let game = &parse_file(&file)[0].game;

        assert_eq!(game.day, "00");
        assert_eq!(game.month, "00");
        assert_eq!(game.year, "0000");
        assert_eq!(game.time, "00:00");
        assert_eq!(game.status, "Pendiente");
        assert_eq!(game.team_a.name, "Equipo A");
        assert_eq!(game.team_b.name, "Equipo B");
        assert_eq!(game.team_a.logo_url, PLACEHOLDER_PHOTO);
        assert_eq!(game.team_a.points, 0);
    }

    #[test]
    fn file_without_header_still_yields_a_record() {
        let file = decode(serde_json::json!({}));
        let parsed = parse_file(&file);
        assert_eq!(parsed.len(), 1);
        assert_eq!(parsed[0].game.status, "Pendiente");
    }

    #[test]
    fn scoreboard_is_carried_through() {
        let file = decode(serde_json::json!({
            "HEADER": { "starttime": "05-04-2025 - 18:30" },
            "SCOREBOARD": { "TEAM": [ { "name": "CB Norte", "PLAYER": [] } ] }
        }));

        let parsed = parse_file(&file);
        let scoreboard = parsed[0].scoreboard.as_ref().unwrap();
        assert_eq!(scoreboard.teams[0].name.as_deref(), Some("CB Norte"));
    }
}
