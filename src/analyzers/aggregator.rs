use super::winratio::WinRatio;
use crate::match_stats::{normalize_hero, DraftRow, HeroId, Match, MatchId, TeamDraft};
use itertools::Itertools;
use serde::Serialize;
use std::collections::HashMap;

/// Per hero pick/ban counters.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HeroStat {
    pub pick_win: u32,
    pub pick_lose: u32,
    pub banned: u32,
}

impl HeroStat {
    pub fn add_pick(&mut self, won: bool) {
        if won {
            self.pick_win += 1;
        } else {
            self.pick_lose += 1;
        }
    }

    pub fn picks(&self) -> u32 {
        self.pick_win + self.pick_lose
    }

    pub fn win_rate(&self) -> f64 {
        if self.picks() == 0 {
            0.0
        } else {
            self.pick_win as f64 / self.picks() as f64
        }
    }
}

/// Unordered hero pair, stored with the ids sorted.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct HeroPair(HeroId, HeroId);

impl HeroPair {
    pub fn new(a: &str, b: &str) -> HeroPair {
        if a <= b {
            HeroPair(a.to_string(), b.to_string())
        } else {
            HeroPair(b.to_string(), a.to_string())
        }
    }

    pub fn first(&self) -> &HeroId {
        &self.0
    }

    pub fn second(&self) -> &HeroId {
        &self.1
    }
}

/// Record of the same team picking both heroes of a pair.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PairStat {
    pub record: WinRatio,
    pub freq: u32,
}

impl PairStat {
    pub fn add_score(&mut self, won: bool) {
        self.record.add_score(won);
        self.freq += 1;
    }
}

/// Keyed by (my hero, opposing hero).
pub type VersusStat = WinRatio;
pub type VersusKey = (HeroId, HeroId);

/// Everything derived from one loaded dataset.
#[derive(Debug, Default, Clone)]
pub struct DraftStats {
    pub hero_stats: HashMap<HeroId, HeroStat>,
    pub pair_stats: HashMap<HeroPair, PairStat>,
    pub versus_stats: HashMap<VersusKey, VersusStat>,
    pub matches: Vec<Match>,
}

impl DraftStats {
    pub fn hero_stat(&self, hero: &str) -> HeroStat {
        self.hero_stats.get(hero).copied().unwrap_or_default()
    }

    fn add_team(&mut self, own: &TeamDraft, enemy: &TeamDraft) {
        for hero in own.bans.iter() {
            self.hero_stats.entry(hero.clone()).or_default().banned += 1;
        }
        for hero in own.picks.iter() {
            self.hero_stats
                .entry(hero.clone())
                .or_default()
                .add_pick(own.won);
        }
        for (h1, h2) in own.picks.iter().unique().sorted().tuple_combinations() {
            self.pair_stats
                .entry(HeroPair::new(h1, h2))
                .or_default()
                .add_score(own.won);
        }
        for (mine, theirs) in own.picks.iter().cartesian_product(enemy.picks.iter()) {
            self.versus_stats
                .entry((mine.clone(), theirs.clone()))
                .or_default()
                .add_score(own.won);
        }
    }
}

/// Groups rows into matches, keeping first-seen order of matches and teams.
/// Matches that do not resolve to exactly two teams are dropped.
pub fn group_matches(rows: &[DraftRow]) -> Vec<Match> {
    let mut order: Vec<MatchId> = Vec::new();
    let mut grouped: HashMap<&str, Vec<TeamDraft>> = HashMap::new();
    for row in rows {
        let teams = grouped.entry(row.match_id.as_str()).or_insert_with(|| {
            order.push(row.match_id.clone());
            Vec::new()
        });
        let position = match teams.iter().position(|t| t.team_id == row.team) {
            Some(p) => p,
            None => {
                teams.push(TeamDraft::new(row.team.clone(), row.won()));
                teams.len() - 1
            }
        };
        teams[position].push(row.action_type, normalize_hero(&row.hero));
    }
    order
        .into_iter()
        .filter_map(|match_id| {
            let teams = grouped.remove(match_id.as_str())?;
            if teams.len() != 2 {
                debug!(
                    "Dropping match {}: {} teams instead of 2.",
                    match_id,
                    teams.len()
                );
                return None;
            }
            let mut teams = teams.into_iter();
            let first = teams.next()?;
            let second = teams.next()?;
            Some(Match::new(match_id, first, second))
        })
        .collect()
}

/// Folds accepted matches into hero, pair and versus statistics.
pub fn aggregate_matches(matches: Vec<Match>) -> DraftStats {
    let mut stats = DraftStats::default();
    for match_ in matches.iter() {
        let [first, second] = &match_.teams;
        stats.add_team(first, second);
        stats.add_team(second, first);
    }
    stats.matches = matches;
    stats
}

pub fn aggregate(rows: &[DraftRow]) -> DraftStats {
    let matches = group_matches(rows);
    let stats = aggregate_matches(matches);
    info!(
        "Aggregated {} matches: {} heroes, {} pairs, {} matchups.",
        stats.matches.len(),
        stats.hero_stats.len(),
        stats.pair_stats.len(),
        stats.versus_stats.len()
    );
    stats
}
