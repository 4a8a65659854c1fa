use crate::domain::{Gender, Phase};

use super::aggregator::StatsBook;
use super::types::{PlayerAggregate, SortColumn};

pub const DEFAULT_PAGE_SIZE: usize = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

impl SortOrder {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "asc" => Some(SortOrder::Asc),
            "desc" => Some(SortOrder::Desc),
            _ => None,
        }
    }
}

/// Leaderboard display mode: raw counters or per-game averages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatMode {
    #[default]
    Totals,
    Averages,
}

impl StatMode {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "totales" => Some(StatMode::Totals),
            "promedios" => Some(StatMode::Averages),
            _ => None,
        }
    }
}

/// Everything the user has selected on the leaderboard. One value per
/// interaction; the query below is a pure function of it.
#[derive(Debug, Clone)]
pub struct FilterState {
    pub competition: Option<String>,
    pub team: Option<String>,
    pub gender: Option<Gender>,
    /// `None` shows season totals; a phase shows only that variant.
    pub phase: Option<Phase>,
    pub search: Option<String>,
    pub sort_column: Option<SortColumn>,
    pub sort_order: SortOrder,
    pub mode: StatMode,
    /// 1-indexed.
    pub page: usize,
    pub page_size: usize,
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            competition: None,
            team: None,
            gender: None,
            phase: None,
            search: None,
            sort_column: None,
            sort_order: SortOrder::default(),
            mode: StatMode::default(),
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

/// One discrete leaderboard interaction.
#[derive(Debug, Clone)]
pub enum FilterAction {
    SelectCompetition(Option<String>),
    SelectTeam(Option<String>),
    SelectGender(Option<Gender>),
    SelectPhase(Option<Phase>),
    EditSearch(String),
    ClickColumn(SortColumn),
    SetMode(StatMode),
    GoToPage(usize),
}

/// Build the next filter state for one user action. Changing a filter, the
/// search text or the mode jumps back to the first page; re-sorting keeps the
/// current page, clicking the active column flips its order.
pub fn apply_action(state: &FilterState, action: FilterAction) -> FilterState {
    let mut next = state.clone();
    match action {
        FilterAction::SelectCompetition(competition) => {
            next.competition = competition;
            next.page = 1;
        }
        FilterAction::SelectTeam(team) => {
            next.team = team;
            next.page = 1;
        }
        FilterAction::SelectGender(gender) => {
            next.gender = gender;
            next.page = 1;
        }
        FilterAction::SelectPhase(phase) => {
            next.phase = phase;
            next.page = 1;
        }
        FilterAction::EditSearch(text) => {
            next.search = if text.is_empty() { None } else { Some(text) };
            next.page = 1;
        }
        FilterAction::ClickColumn(column) => {
            if next.sort_column == Some(column) {
                next.sort_order = match next.sort_order {
                    SortOrder::Asc => SortOrder::Desc,
                    SortOrder::Desc => SortOrder::Asc,
                };
            } else {
                next.sort_column = Some(column);
                next.sort_order = SortOrder::Desc;
            }
        }
        FilterAction::SetMode(mode) => {
            next.mode = mode;
            next.page = 1;
        }
        FilterAction::GoToPage(page) => {
            next.page = page.max(1);
        }
    }
    next
}

/// The visible page plus enough context to render pagination controls.
#[derive(Debug)]
pub struct PageView<'a> {
    pub items: Vec<&'a PlayerAggregate>,
    pub total: usize,
    pub page: usize,
    pub page_size: usize,
}

impl PageView<'_> {
    pub fn page_count(&self) -> usize {
        self.total.div_ceil(self.page_size)
    }

    pub fn has_prev(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.page_count()
    }

    /// Rank of the first row on this page.
    pub fn start_rank(&self) -> usize {
        (self.page - 1) * self.page_size + 1
    }
}

/// Filter, sort and slice the aggregate set. Stateless: the same book and
/// state always produce the same page.
pub fn run_query<'a>(book: &'a StatsBook, state: &FilterState) -> PageView<'a> {
    let mut rows: Vec<&PlayerAggregate> = book
        .iter()
        .filter(|aggregate| matches_filters(aggregate, state))
        .collect();

    sort_rows(&mut rows, state);

    let total = rows.len();
    let page = state.page.max(1);
    let page_size = state.page_size.max(1);
    let start = (page - 1) * page_size;

    let items = if start >= total {
        Vec::new()
    } else {
        rows[start..(start + page_size).min(total)].to_vec()
    };

    PageView {
        items,
        total,
        page,
        page_size,
    }
}

fn matches_filters(aggregate: &PlayerAggregate, state: &FilterState) -> bool {
    // Phase selection decides which of the three variants is visible.
    if aggregate.scope != state.phase {
        return false;
    }

    if let Some(competition) = &state.competition {
        if aggregate.competition != *competition {
            return false;
        }
    }
    if let Some(team) = &state.team {
        if aggregate.team_name != *team {
            return false;
        }
    }
    if let Some(gender) = state.gender {
        if aggregate.gender != gender {
            return false;
        }
    }

    if let Some(search) = &state.search {
        let term = search.to_lowercase();
        if !term.is_empty()
            && !aggregate.player_name.to_lowercase().contains(&term)
            && !aggregate.team_name.to_lowercase().contains(&term)
        {
            return false;
        }
    }

    true
}

/// Equal sort keys fall back to the player name so pages stay stable; the
/// name is also the whole ordering when no column is selected.
fn sort_rows(rows: &mut [&PlayerAggregate], state: &FilterState) {
    rows.sort_by(|a, b| {
        let by_column = match state.sort_column {
            Some(column) => {
                let ordering = match state.mode {
                    StatMode::Totals => a.totals.get(column).cmp(&b.totals.get(column)),
                    StatMode::Averages => per_game(a, column).total_cmp(&per_game(b, column)),
                };
                match state.sort_order {
                    SortOrder::Asc => ordering,
                    SortOrder::Desc => ordering.reverse(),
                }
            }
            None => std::cmp::Ordering::Equal,
        };

        by_column
            .then_with(|| a.player_name.cmp(&b.player_name))
            .then_with(|| a.team_name.cmp(&b.team_name))
            .then_with(|| a.competition.cmp(&b.competition))
    });
}

/// Aggregates only exist once a game contributed, so `games >= 1` here.
fn per_game(aggregate: &PlayerAggregate, column: SortColumn) -> f64 {
    aggregate.totals.get(column) as f64 / aggregate.games as f64
}
