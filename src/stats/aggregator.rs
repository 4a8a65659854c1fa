use std::collections::{BTreeSet, HashMap};

use crate::domain::classify::classify_round;
use crate::domain::models::{NormalizedGame, RawPlayerLine, RawScoreboard};
use crate::domain::parser::{text_or, ParsedGame};

use super::types::{shooting_pct, AggregateKey, MatchEntry, PlayerAggregate, StatLine};

const PLACEHOLDER_PLAYER: &str = "Desconocido";
const PLACEHOLDER_TEAM: &str = "Equipo X";

/// In-memory collection of player aggregates, keyed by
/// (player, team, competition, scope).
#[derive(Debug, Default)]
pub struct StatsBook {
    players: HashMap<AggregateKey, PlayerAggregate>,
    competitions: BTreeSet<String>,
    teams: BTreeSet<String>,
}

impl StatsBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold a parsed game in; games without a box score contribute nothing.
    pub fn record_parsed(&mut self, parsed: &ParsedGame) {
        if let Some(scoreboard) = &parsed.scoreboard {
            self.record_game(&parsed.game, scoreboard);
        }
    }

    /// Fold one game's box score into the aggregates. Each player line
    /// updates two variants: the season total and the phase the round
    /// classifies into.
    pub fn record_game(&mut self, game: &NormalizedGame, scoreboard: &RawScoreboard) {
        let phase = classify_round(&game.round);
        let match_date = game.start_label();

        if !game.competition.is_empty() {
            self.competitions.insert(game.competition.clone());
        }

        let team_a_name = scoreboard
            .teams
            .first()
            .map(|t| text_or(&t.name, "Equipo A"))
            .unwrap_or_else(|| "Equipo A".to_string());
        let team_b_name = scoreboard
            .teams
            .get(1)
            .map(|t| text_or(&t.name, "Equipo B"))
            .unwrap_or_else(|| "Equipo B".to_string());

        for (index, team) in scoreboard.teams.iter().enumerate() {
            let team_name = text_or(&team.name, PLACEHOLDER_TEAM);
            self.teams.insert(team_name.clone());

            let rival = if index == 0 {
                team_b_name.clone()
            } else {
                team_a_name.clone()
            };

            for player in &team.players {
                let stats = StatLine::from_raw(player);
                let entry = MatchEntry {
                    match_date: match_date.clone(),
                    round: game.round.clone(),
                    phase,
                    rival: rival.clone(),
                    pct2: shooting_pct(stats.t2c, stats.t2i),
                    pct3: shooting_pct(stats.t3c, stats.t3i),
                    pct_tl: shooting_pct(stats.tlc, stats.tli),
                    stats,
                };

                for scope in [None, Some(phase)] {
                    let key = AggregateKey {
                        player_id: player.id.clone(),
                        team: team_name.clone(),
                        competition: game.competition.clone(),
                        scope,
                    };
                    self.players
                        .entry(key)
                        .or_insert_with(|| new_aggregate(player, &team_name, game, scope))
                        .apply(&entry);
                }
            }
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &PlayerAggregate> {
        self.players.values()
    }

    pub fn find(&self, key: &AggregateKey) -> Option<&PlayerAggregate> {
        self.players.get(key)
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    /// Distinct competition names seen so far, sorted.
    pub fn competitions(&self) -> Vec<String> {
        self.competitions.iter().cloned().collect()
    }

    /// Distinct team names seen so far, sorted.
    pub fn teams(&self) -> Vec<String> {
        self.teams.iter().cloned().collect()
    }
}

fn new_aggregate(
    player: &RawPlayerLine,
    team_name: &str,
    game: &NormalizedGame,
    scope: Option<crate::domain::Phase>,
) -> PlayerAggregate {
    PlayerAggregate {
        dorsal: player.no.clone(),
        player_photo: text_or(&player.logo, crate::domain::models::PLACEHOLDER_PHOTO),
        player_name: text_or(&player.name, PLACEHOLDER_PLAYER),
        team_name: team_name.to_string(),
        competition: game.competition.clone(),
        scope,
        gender: game.gender,
        games: 0,
        totals: StatLine::default(),
        matches: Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::parser::parse_file;
    use crate::domain::{Gender, Phase, RawGameFile};

    fn game_file(round: &str, competition: &str, pts: i32, t2c: i32, t2i: i32) -> RawGameFile {
        serde_json::from_value(serde_json::json!({
            "HEADER": {
                "starttime": "05-04-2025 - 18:30",
                "competition": competition,
                "round": round,
                "TEAM": [
                    { "name": "CB Norte", "pts": 70 },
                    { "name": "CB Sur", "pts": 60 }
                ]
            },
            "SCOREBOARD": {
                "TEAM": [
                    {
                        "name": "CB Norte",
                        "PLAYER": [{
                            "id": "p1", "no": "7", "name": "Ana López",
                            "pts": pts, "p2m": t2c, "p2a": t2i
                        }]
                    },
                    { "name": "CB Sur", "PLAYER": [] }
                ]
            }
        }))
        .unwrap()
    }

    fn record(book: &mut StatsBook, file: &RawGameFile) {
        for parsed in parse_file(file) {
            book.record_parsed(&parsed);
        }
    }

    fn key(scope: Option<Phase>) -> AggregateKey {
        AggregateKey {
            player_id: "p1".to_string(),
            team: "CB Norte".to_string(),
            competition: "LF Endesa".to_string(),
            scope,
        }
    }

    #[test]
    fn total_games_equal_group_plus_playoff_games() {
        let mut book = StatsBook::new();
        record(&mut book, &game_file("A", "LF Endesa", 10, 5, 8));
        record(&mut book, &game_file("QF", "LF Endesa", 6, 3, 4));
        record(&mut book, &game_file("B", "LF Endesa", 4, 2, 2));

        let total = book.find(&key(None)).unwrap();
        let group = book.find(&key(Some(Phase::GroupPhase))).unwrap();
        let playoffs = book.find(&key(Some(Phase::Playoffs))).unwrap();

        assert_eq!(total.games, 3);
        assert_eq!(total.games, group.games + playoffs.games);
        assert_eq!(group.games, 2);
        assert_eq!(playoffs.games, 1);
    }

    #[test]
    fn counters_sum_and_history_grows() {
        let mut book = StatsBook::new();
        record(&mut book, &game_file("A", "LF Endesa", 10, 5, 8));
        record(&mut book, &game_file("QF", "LF Endesa", 6, 3, 4));

        let total = book.find(&key(None)).unwrap();
        assert_eq!(total.totals.pts, 16);
        assert_eq!(total.totals.t2c, 8);
        assert_eq!(total.totals.t2i, 12);
        assert_eq!(total.matches.len(), 2);
        assert_eq!(total.matches[0].pct2, "62.5");
        assert_eq!(total.matches[1].pct2, "75.0");
        assert_eq!(total.matches[1].rival, "CB Sur");
        assert_eq!(total.gender, Gender::Female);
    }

    #[test]
    fn zero_attempt_games_record_zero_percentage() {
        let mut book = StatsBook::new();
        record(&mut book, &game_file("A", "LF Endesa", 0, 0, 0));

        let total = book.find(&key(None)).unwrap();
        assert_eq!(total.matches[0].pct2, "0.0");
        assert_eq!(total.matches[0].pct_tl, "0.0");
    }

    #[test]
    fn folding_order_does_not_change_aggregates() {
        let first = game_file("A", "LF Endesa", 10, 5, 8);
        let second = game_file("QF", "LF Endesa", 6, 3, 4);

        let mut forward = StatsBook::new();
        record(&mut forward, &first);
        record(&mut forward, &second);

        let mut reverse = StatsBook::new();
        record(&mut reverse, &second);
        record(&mut reverse, &first);

        let a = forward.find(&key(None)).unwrap();
        let b = reverse.find(&key(None)).unwrap();
        assert_eq!(a.games, b.games);
        assert_eq!(a.totals, b.totals);
        assert_eq!(forward.len(), reverse.len());
    }

    #[test]
    fn unnamed_players_and_teams_get_placeholders() {
        let file: RawGameFile = serde_json::from_value(serde_json::json!({
            "HEADER": { "starttime": "05-04-2025 - 18:30", "round": "A" },
            "SCOREBOARD": {
                "TEAM": [ { "PLAYER": [{ "id": 9 }] } ]
            }
        }))
        .unwrap();

        let mut book = StatsBook::new();
        record(&mut book, &file);

        let aggregate = book.iter().next().unwrap();
        assert_eq!(aggregate.player_name, "Desconocido");
        assert_eq!(aggregate.team_name, "Equipo X");
        assert_eq!(book.teams(), vec!["Equipo X"]);
    }

    #[test]
    fn distinct_competitions_and_teams_are_collected() {
        let mut book = StatsBook::new();
        record(&mut book, &game_file("A", "LF Endesa", 10, 5, 8));
        record(&mut book, &game_file("A", "Liga EBA", 2, 1, 1));

        assert_eq!(book.competitions(), vec!["LF Endesa", "Liga EBA"]);
        assert_eq!(book.teams(), vec!["CB Norte", "CB Sur"]);
    }
}
