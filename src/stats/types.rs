use serde::Serialize;

use crate::domain::models::RawPlayerLine;
use crate::domain::{Gender, Phase};

/// The 17 box-score counters tracked for every player, in table order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct StatLine {
    pub pts: i32,
    pub t2i: i32,
    pub t2c: i32,
    pub t3i: i32,
    pub t3c: i32,
    pub tli: i32,
    pub tlc: i32,
    pub ro: i32,
    pub rd: i32,
    pub rt: i32,
    #[serde(rename = "as")]
    pub asist: i32,
    pub br: i32,
    pub bp: i32,
    pub tp: i32,
    pub fc: i32,
    pub va: i32,
    pub pm: i32,
}

/// Sortable leaderboard columns, named by their table keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortColumn {
    Pts,
    T2i,
    T2c,
    T3i,
    T3c,
    Tli,
    Tlc,
    Ro,
    Rd,
    Rt,
    As,
    Br,
    Bp,
    Tp,
    Fc,
    Va,
    Pm,
}

impl SortColumn {
    pub const ALL: [SortColumn; 17] = [
        SortColumn::Pts,
        SortColumn::T2i,
        SortColumn::T2c,
        SortColumn::T3i,
        SortColumn::T3c,
        SortColumn::Tli,
        SortColumn::Tlc,
        SortColumn::Ro,
        SortColumn::Rd,
        SortColumn::Rt,
        SortColumn::As,
        SortColumn::Br,
        SortColumn::Bp,
        SortColumn::Tp,
        SortColumn::Fc,
        SortColumn::Va,
        SortColumn::Pm,
    ];

    pub fn parse(key: &str) -> Option<Self> {
        let column = match key {
            "pts" => SortColumn::Pts,
            "t2i" => SortColumn::T2i,
            "t2c" => SortColumn::T2c,
            "t3i" => SortColumn::T3i,
            "t3c" => SortColumn::T3c,
            "tli" => SortColumn::Tli,
            "tlc" => SortColumn::Tlc,
            "ro" => SortColumn::Ro,
            "rd" => SortColumn::Rd,
            "rt" => SortColumn::Rt,
            "as" => SortColumn::As,
            "br" => SortColumn::Br,
            "bp" => SortColumn::Bp,
            "tp" => SortColumn::Tp,
            "fc" => SortColumn::Fc,
            "va" => SortColumn::Va,
            "pm" => SortColumn::Pm,
            _ => return None,
        };
        Some(column)
    }
}

impl StatLine {
    /// Map one wire box-score line onto the table columns.
    pub fn from_raw(line: &RawPlayerLine) -> Self {
        Self {
            pts: line.pts,
            t2i: line.p2a,
            t2c: line.p2m,
            t3i: line.p3a,
            t3c: line.p3m,
            tli: line.p1a,
            tlc: line.p1m,
            ro: line.ro,
            rd: line.rd,
            rt: line.rt,
            asist: line.assist,
            br: line.st,
            bp: line.to,
            tp: line.bs,
            fc: line.pf,
            va: line.val,
            pm: line.pllss,
        }
    }

    pub fn get(&self, column: SortColumn) -> i32 {
        match column {
            SortColumn::Pts => self.pts,
            SortColumn::T2i => self.t2i,
            SortColumn::T2c => self.t2c,
            SortColumn::T3i => self.t3i,
            SortColumn::T3c => self.t3c,
            SortColumn::Tli => self.tli,
            SortColumn::Tlc => self.tlc,
            SortColumn::Ro => self.ro,
            SortColumn::Rd => self.rd,
            SortColumn::Rt => self.rt,
            SortColumn::As => self.asist,
            SortColumn::Br => self.br,
            SortColumn::Bp => self.bp,
            SortColumn::Tp => self.tp,
            SortColumn::Fc => self.fc,
            SortColumn::Va => self.va,
            SortColumn::Pm => self.pm,
        }
    }

    fn get_mut(&mut self, column: SortColumn) -> &mut i32 {
        match column {
            SortColumn::Pts => &mut self.pts,
            SortColumn::T2i => &mut self.t2i,
            SortColumn::T2c => &mut self.t2c,
            SortColumn::T3i => &mut self.t3i,
            SortColumn::T3c => &mut self.t3c,
            SortColumn::Tli => &mut self.tli,
            SortColumn::Tlc => &mut self.tlc,
            SortColumn::Ro => &mut self.ro,
            SortColumn::Rd => &mut self.rd,
            SortColumn::Rt => &mut self.rt,
            SortColumn::As => &mut self.asist,
            SortColumn::Br => &mut self.br,
            SortColumn::Bp => &mut self.bp,
            SortColumn::Tp => &mut self.tp,
            SortColumn::Fc => &mut self.fc,
            SortColumn::Va => &mut self.va,
            SortColumn::Pm => &mut self.pm,
        }
    }

    pub fn accumulate(&mut self, game: &StatLine) {
        for column in SortColumn::ALL {
            *self.get_mut(column) += game.get(column);
        }
    }

    /// Keep the per-column maximum of the two lines.
    pub fn max_with(&mut self, other: &StatLine) {
        for column in SortColumn::ALL {
            let slot = self.get_mut(column);
            *slot = (*slot).max(other.get(column));
        }
    }
}

/// `makes/attempts` as a one-decimal percentage string, "0.0" for no attempts.
pub fn shooting_pct(makes: i32, attempts: i32) -> String {
    if attempts > 0 {
        format!("{:.1}", makes as f64 / attempts as f64 * 100.0)
    } else {
        "0.0".to_string()
    }
}

/// One game's contribution inside an aggregate's history.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchEntry {
    pub match_date: String,
    pub round: String,
    #[serde(rename = "phaseType")]
    pub phase: Phase,
    pub rival: String,
    #[serde(flatten)]
    pub stats: StatLine,
    pub pct2: String,
    pub pct3: String,
    #[serde(rename = "pctTl")]
    pub pct_tl: String,
}

/// Identity of one aggregate. `scope: None` is the season-total variant;
/// `Some(phase)` the per-phase one. Derived purely from file content, so
/// folding is stable under any file-arrival order.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AggregateKey {
    pub player_id: String,
    pub team: String,
    pub competition: String,
    pub scope: Option<Phase>,
}

/// Running per-player accumulator for one (team, competition, scope) triple.
#[derive(Debug, Clone)]
pub struct PlayerAggregate {
    pub dorsal: String,
    pub player_photo: String,
    pub player_name: String,
    pub team_name: String,
    pub competition: String,
    pub scope: Option<Phase>,
    pub gender: Gender,
    pub games: u32,
    pub totals: StatLine,
    pub matches: Vec<MatchEntry>,
}

impl PlayerAggregate {
    /// Fold one game in: bump the games counter, add the counters, remember
    /// the match for drill-down.
    pub fn apply(&mut self, entry: &MatchEntry) {
        self.games += 1;
        self.totals.accumulate(&entry.stats);
        self.matches.push(entry.clone());
    }

    pub fn phase_label(&self) -> &'static str {
        match self.scope {
            Some(phase) => phase.label(),
            None => "",
        }
    }

    pub fn pct2(&self) -> String {
        shooting_pct(self.totals.t2c, self.totals.t2i)
    }

    pub fn pct3(&self) -> String {
        shooting_pct(self.totals.t3c, self.totals.t3i)
    }

    pub fn pct_tl(&self) -> String {
        shooting_pct(self.totals.tlc, self.totals.tli)
    }

    /// Per-column maxima over the match history, for career-best highlights.
    pub fn match_maxima(&self) -> StatLine {
        let mut maxima = StatLine::default();
        for entry in &self.matches {
            maxima.max_with(&entry.stats);
        }
        maxima
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shooting_pct_formats_one_decimal() {
        assert_eq!(shooting_pct(5, 8), "62.5");
        assert_eq!(shooting_pct(3, 4), "75.0");
        assert_eq!(shooting_pct(1, 3), "33.3");
    }

    #[test]
    fn shooting_pct_is_zero_without_attempts() {
        assert_eq!(shooting_pct(0, 0), "0.0");
    }

    #[test]
    fn accumulate_sums_every_column() {
        let mut total = StatLine {
            pts: 10,
            t2c: 4,
            ..Default::default()
        };
        total.accumulate(&StatLine {
            pts: 6,
            t2c: 3,
            va: 9,
            ..Default::default()
        });

        assert_eq!(total.pts, 16);
        assert_eq!(total.t2c, 7);
        assert_eq!(total.va, 9);
        assert_eq!(total.ro, 0);
    }

    #[test]
    fn max_with_keeps_per_column_maxima() {
        let mut maxima = StatLine {
            pts: 10,
            rd: 2,
            ..Default::default()
        };
        maxima.max_with(&StatLine {
            pts: 6,
            rd: 7,
            ..Default::default()
        });

        assert_eq!(maxima.pts, 10);
        assert_eq!(maxima.rd, 7);
    }

    #[test]
    fn sort_column_parses_table_keys() {
        assert_eq!(SortColumn::parse("pts"), Some(SortColumn::Pts));
        assert_eq!(SortColumn::parse("as"), Some(SortColumn::As));
        assert_eq!(SortColumn::parse("pm"), Some(SortColumn::Pm));
        assert_eq!(SortColumn::parse("rank"), None);
    }
}
