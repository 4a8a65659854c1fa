use std::fs;
use std::path::PathBuf;

use torneo_stats::domain::{parse_file, schedule, Gender, Phase, RawGameFile};
use torneo_stats::stats::{
    run_query, AggregateKey, FilterState, SortColumn, StatMode, StatsBook,
};

fn read_fixture(name: &str) -> RawGameFile {
    let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    path.push("tests");
    path.push("fixtures");
    path.push(name);
    let raw = fs::read_to_string(path).expect("fixture file should be readable");
    serde_json::from_str(&raw).expect("fixture should decode")
}

fn load_book(names: &[&str]) -> (Vec<torneo_stats::domain::NormalizedGame>, StatsBook) {
    let mut games = Vec::new();
    let mut book = StatsBook::new();
    for name in names {
        let file = read_fixture(name);
        for parsed in parse_file(&file) {
            book.record_parsed(&parsed);
            games.push(parsed.game);
        }
    }
    (games, book)
}

fn key(scope: Option<Phase>) -> AggregateKey {
    AggregateKey {
        player_id: "10".to_string(),
        team: "CB Valle".to_string(),
        competition: "LF Endesa".to_string(),
        scope,
    }
}

#[test]
fn season_total_splits_across_phases() {
    let (_, book) = load_book(&["group_phase_game.json", "playoff_game.json"]);

    let total = book.find(&key(None)).expect("season total should exist");
    assert_eq!(total.games, 2);
    assert_eq!(total.totals.pts, 16);
    assert_eq!(total.totals.t2c, 8);
    assert_eq!(total.totals.t2i, 12);
    assert_eq!(total.gender, Gender::Female);

    let group = book.find(&key(Some(Phase::GroupPhase))).unwrap();
    assert_eq!(group.games, 1);
    assert_eq!(group.totals.pts, 10);

    let playoffs = book.find(&key(Some(Phase::Playoffs))).unwrap();
    assert_eq!(playoffs.games, 1);
    assert_eq!(playoffs.totals.pts, 6);

    assert_eq!(total.games, group.games + playoffs.games);
}

#[test]
fn match_history_records_per_game_percentages_and_rivals() {
    let (_, book) = load_book(&["group_phase_game.json", "playoff_game.json"]);

    let total = book.find(&key(None)).unwrap();
    assert_eq!(total.matches.len(), 2);

    let first = &total.matches[0];
    assert_eq!(first.match_date, "05-04-2025 - 18:00");
    assert_eq!(first.rival, "CB Montaña");
    assert_eq!(first.pct2, "62.5");
    assert_eq!(first.phase, Phase::GroupPhase);

    let second = &total.matches[1];
    assert_eq!(second.rival, "CB Costa");
    assert_eq!(second.pct2, "75.0");
    assert_eq!(second.pct3, "0.0");
    assert_eq!(second.phase, Phase::Playoffs);

    let maxima = total.match_maxima();
    assert_eq!(maxima.pts, 10);
    assert_eq!(maxima.asist, 5);
    assert_eq!(maxima.rd, 4);
}

#[test]
fn leaderboard_query_serves_the_expected_page() {
    let (_, book) = load_book(&["group_phase_game.json", "playoff_game.json"]);

    // Three players, season totals only, best scorer first.
    let state = FilterState {
        sort_column: Some(SortColumn::Pts),
        ..Default::default()
    };
    let view = run_query(&book, &state);
    assert_eq!(view.total, 3);
    assert_eq!(view.items[0].player_name, "Lucía Torres");
    assert_eq!(view.items[0].totals.pts, 16);
    assert_eq!(view.items[1].player_name, "Sara Núñez");

    // Per-game averages reorder: Lucía 8.0/g, Sara 14.0/g, Marta 7.0/g.
    let state = FilterState {
        sort_column: Some(SortColumn::Pts),
        mode: StatMode::Averages,
        ..Default::default()
    };
    let view = run_query(&book, &state);
    assert_eq!(view.items[1].player_name, "Lucía Torres");

    // Group-phase selection hides everything from the playoff file.
    let state = FilterState {
        phase: Some(Phase::GroupPhase),
        ..Default::default()
    };
    let view = run_query(&book, &state);
    assert_eq!(view.total, 2);
    assert!(view.items.iter().all(|a| a.scope == Some(Phase::GroupPhase)));
}

#[test]
fn schedule_view_covers_single_and_multi_game_files() {
    let (games, _) = load_book(&[
        "group_phase_game.json",
        "playoff_game.json",
        "jornada_games.json",
    ]);

    assert_eq!(games.len(), 4);

    // The round file contributes two schedule entries, ordered by time.
    let filter = schedule::ScheduleFilter {
        date: Some("06-04-2025".to_string()),
        ..Default::default()
    };
    let mut visible = schedule::filter_games(&games, &filter);
    schedule::sort_by_start_time(&mut visible);
    assert_eq!(visible.len(), 2);
    assert_eq!(visible[0].time, "09:45");
    assert_eq!(visible[0].team_a.name, "CB Llano");
    assert_eq!(visible[1].status, "Pendiente");

    assert_eq!(
        schedule::match_dates(&games),
        vec!["05-04-2025", "06-04-2025", "12-04-2025"]
    );
    assert_eq!(
        schedule::competitions(&games),
        vec!["LF Endesa", "Liga EBA"]
    );
}

#[test]
fn stats_ignore_files_without_a_box_score() {
    let (games, book) = load_book(&["jornada_games.json"]);

    assert_eq!(games.len(), 2);
    assert!(book.is_empty());
}
