use chrono::{NaiveDate, NaiveTime};
use std::collections::BTreeSet;

use super::classify::Gender;
use super::models::NormalizedGame;

const DATE_FORMAT: &str = "%d-%m-%Y";

/// User-selected schedule filters; unset fields match everything.
#[derive(Debug, Clone, Default)]
pub struct ScheduleFilter {
    pub date: Option<String>,
    pub competition: Option<String>,
    pub gender: Option<Gender>,
}

/// All set filters must hold for a game to stay visible.
pub fn filter_games<'a>(
    games: &'a [NormalizedGame],
    filter: &ScheduleFilter,
) -> Vec<&'a NormalizedGame> {
    games
        .iter()
        .filter(|game| {
            let date_ok = filter.date.as_ref().is_none_or(|d| game.date_key() == *d);
            let comp_ok = filter
                .competition
                .as_ref()
                .is_none_or(|c| game.competition == *c);
            let gender_ok = filter.gender.is_none_or(|g| game.gender == g);
            date_ok && comp_ok && gender_ok
        })
        .collect()
}

/// Order games by their start time; unparsable times sort first as midnight.
pub fn sort_by_start_time(games: &mut [&NormalizedGame]) {
    games.sort_by_key(|game| parse_time(&game.time));
}

fn parse_time(time: &str) -> NaiveTime {
    NaiveTime::parse_from_str(time, "%H:%M").unwrap_or(NaiveTime::MIN)
}

/// Distinct dates that have at least one game, in chronological order.
/// The zero placeholder date never parses and is left out.
pub fn match_dates(games: &[NormalizedGame]) -> Vec<String> {
    let dates: BTreeSet<NaiveDate> = games
        .iter()
        .filter_map(|game| NaiveDate::parse_from_str(&game.date_key(), DATE_FORMAT).ok())
        .collect();

    dates
        .into_iter()
        .map(|d| d.format(DATE_FORMAT).to_string())
        .collect()
}

/// Distinct competition names, sorted; unnamed competitions are skipped.
pub fn competitions(games: &[NormalizedGame]) -> Vec<String> {
    let names: BTreeSet<&str> = games
        .iter()
        .map(|game| game.competition.as_str())
        .filter(|name| !name.is_empty())
        .collect();

    names.into_iter().map(str::to_string).collect()
}
