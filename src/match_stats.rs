use serde::{Deserialize, Serialize};
use std::fmt;
use strum_macros::{Display, EnumString};

pub type HeroId = String;
pub type TeamId = String;
pub type MatchId = String;

/// Heroes are compared by trimmed, lowercase name.
pub fn normalize_hero(raw: &str) -> HeroId {
    raw.trim().to_lowercase()
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "snake_case")]
pub enum DraftAction {
    Pick,
    Ban,
}

/// Single draft action as stored in the dataset, one per hero picked or banned.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct DraftRow {
    pub match_id: MatchId,
    pub team: TeamId,
    pub hero: String,
    pub is_winner: u8,
    pub action_type: DraftAction,
}

impl DraftRow {
    pub fn won(&self) -> bool {
        self.is_winner != 0
    }
}

/// Picks and bans of one side in one match.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct TeamDraft {
    pub team_id: TeamId,
    pub picks: Vec<HeroId>,
    pub bans: Vec<HeroId>,
    pub won: bool,
}

impl TeamDraft {
    pub fn new(team_id: TeamId, won: bool) -> TeamDraft {
        TeamDraft {
            team_id,
            picks: vec![],
            bans: vec![],
            won,
        }
    }

    pub fn push(&mut self, action: DraftAction, hero: HeroId) {
        match action {
            DraftAction::Pick => self.picks.push(hero),
            DraftAction::Ban => self.bans.push(hero),
        }
    }
}

/// Accepted match: always exactly two distinct sides.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Match {
    pub match_id: MatchId,
    pub teams: [TeamDraft; 2],
}

impl Match {
    pub fn new(match_id: MatchId, first: TeamDraft, second: TeamDraft) -> Match {
        Match {
            match_id,
            teams: [first, second],
        }
    }

    /// Returns (own side, opposing side) when `team_id` played this match.
    pub fn sides_for(&self, team_id: &str) -> Option<(&TeamDraft, &TeamDraft)> {
        let [first, second] = &self.teams;
        if first.team_id == team_id {
            Some((first, second))
        } else if second.team_id == team_id {
            Some((second, first))
        } else {
            None
        }
    }
}

#[derive(Debug)]
pub enum StatsError {
    Io(std::io::Error),
    Csv(csv::Error),
    Json(serde_json::Error),
    Config(config::ConfigError),
    UnknownLane(String),
}

impl From<std::io::Error> for StatsError {
    fn from(e: std::io::Error) -> StatsError {
        StatsError::Io(e)
    }
}

impl From<csv::Error> for StatsError {
    fn from(e: csv::Error) -> StatsError {
        StatsError::Csv(e)
    }
}

impl From<serde_json::Error> for StatsError {
    fn from(e: serde_json::Error) -> StatsError {
        StatsError::Json(e)
    }
}

impl From<config::ConfigError> for StatsError {
    fn from(e: config::ConfigError) -> StatsError {
        StatsError::Config(e)
    }
}

impl fmt::Display for StatsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatsError::Io(e) => write!(f, "io error: {}", e),
            StatsError::Csv(e) => write!(f, "csv error: {}", e),
            StatsError::Json(e) => write!(f, "json error: {}", e),
            StatsError::Config(e) => write!(f, "configuration error: {}", e),
            StatsError::UnknownLane(lane) => write!(f, "unknown lane: {}", lane),
        }
    }
}

impl std::error::Error for StatsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            StatsError::Io(e) => Some(e),
            StatsError::Csv(e) => Some(e),
            StatsError::Json(e) => Some(e),
            StatsError::Config(e) => Some(e),
            StatsError::UnknownLane(_) => None,
        }
    }
}

pub type StatsResult<T> = std::result::Result<T, StatsError>;
