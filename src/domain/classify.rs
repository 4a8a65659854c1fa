use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

/// Competitions played in the women's category. Everything else defaults to
/// the men's category.
const FEMALE_COMPETITIONS: [&str; 5] = [
    "LF Endesa",
    "LF Challenge",
    "L.F. 2",
    "CE SSAA Cadete Fem.",
    "CE SSA Infantil Fem.",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gender {
    #[serde(rename = "M")]
    Female,
    #[serde(rename = "H")]
    Male,
}

impl Gender {
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Female => "M",
            Gender::Male => "H",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "M" => Some(Gender::Female),
            "H" => Some(Gender::Male),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    #[serde(rename = "Fase de Grupos")]
    GroupPhase,
    #[serde(rename = "Playoffs")]
    Playoffs,
}

impl Phase {
    pub fn label(&self) -> &'static str {
        match self {
            Phase::GroupPhase => "Fase de Grupos",
            Phase::Playoffs => "Playoffs",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "Fase de Grupos" => Some(Phase::GroupPhase),
            "Playoffs" => Some(Phase::Playoffs),
            _ => None,
        }
    }
}

static GROUP_ROUND: OnceLock<Regex> = OnceLock::new();

/// A round label names the group phase iff it is a single uppercase group
/// letter (A through E). Everything else, including lowercase letters, counts
/// as playoffs.
pub fn classify_round(round: &str) -> Phase {
    let re = GROUP_ROUND.get_or_init(|| Regex::new(r"^[A-E]$").expect("valid round pattern"));
    if re.is_match(round.trim()) {
        Phase::GroupPhase
    } else {
        Phase::Playoffs
    }
}

/// Gender is fixed by the competition name, compared case-insensitively.
pub fn gender_for_competition(competition: &str) -> Gender {
    let wanted = competition.trim().to_lowercase();
    if FEMALE_COMPETITIONS
        .iter()
        .any(|c| c.to_lowercase() == wanted)
    {
        Gender::Female
    } else {
        Gender::Male
    }
}
