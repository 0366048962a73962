use super::aggregator::{DraftStats, HeroPair, PairStat};
use crate::graph::SynergyGraph;
use crate::match_stats::HeroId;
use itertools::Itertools;
use std::collections::HashMap;

const WIN_WEIGHT: f64 = 0.6;
const LOSE_WEIGHT: f64 = 0.3;
const FALLBACK_WEIGHT: f64 = 0.1;

const TEAM_WIN_PICK_BONUS: f64 = 0.3;
const TEAM_LOSE_PICK_BONUS: f64 = 0.2;
const ENEMY_BAN_BONUS: f64 = 0.5;

fn base_weight(pair_stat: &PairStat) -> f64 {
    WIN_WEIGHT * pair_stat.record.wins as f64 + LOSE_WEIGHT * pair_stat.record.loses as f64
}

/// Proxy weight for a pair with no co-pick record, based on the less picked hero.
/// Aggregated pairs always have freq > 0, so this only matters for hand-built stats.
fn fallback_weight(pair: &HeroPair, stats: &DraftStats) -> Option<f64> {
    let first = stats.hero_stat(pair.first());
    let second = stats.hero_stat(pair.second());
    let weight = match (first.picks(), second.picks()) {
        (0, 0) => return None,
        (0, _) => FALLBACK_WEIGHT * second.pick_win as f64,
        (_, 0) => FALLBACK_WEIGHT * first.pick_win as f64,
        (p1, p2) => {
            let fewer = if p1 < p2 { first } else { second };
            FALLBACK_WEIGHT * fewer.win_rate()
        }
    };
    if weight > 0.0 {
        Some(weight)
    } else {
        None
    }
}

/// Global "heroes that win together" graph.
pub fn build_synergy_graph(stats: &DraftStats) -> SynergyGraph {
    let mut graph = SynergyGraph::new();
    let mut fallbacks = 0;
    for (pair, pair_stat) in stats.pair_stats.iter().sorted_by(|a, b| a.0.cmp(b.0)) {
        let weight = base_weight(pair_stat);
        let weight = if weight > 0.0 {
            weight
        } else {
            fallbacks += 1;
            match fallback_weight(pair, stats) {
                Some(w) => w,
                None => continue,
            }
        };
        graph.set_edge(pair.first(), pair.second(), weight);
    }
    if fallbacks > 0 {
        warn!("{} hero pairs had no co-pick record.", fallbacks);
    }
    info!(
        "Built synergy graph: {} heroes, {} edges.",
        graph.hero_count(),
        graph.edge_count()
    );
    graph
}

/// Per hero bonus collected over every match `team_id` played.
pub fn team_bonuses(stats: &DraftStats, team_id: &str) -> HashMap<HeroId, f64> {
    let mut bonuses: HashMap<HeroId, f64> = HashMap::new();
    for (own, enemy) in stats.matches.iter().filter_map(|m| m.sides_for(team_id)) {
        let pick_bonus = if own.won {
            TEAM_WIN_PICK_BONUS
        } else {
            TEAM_LOSE_PICK_BONUS
        };
        for hero in own.picks.iter().unique() {
            *bonuses.entry(hero.clone()).or_insert(0.0) += pick_bonus;
        }
        // heroes the enemy feared enough to ban against this team
        for hero in enemy.bans.iter().unique() {
            *bonuses.entry(hero.clone()).or_insert(0.0) += ENEMY_BAN_BONUS;
        }
    }
    bonuses
}

/// Team biased copy of `global`. An edge between two boosted heroes gets both bonuses.
pub fn team_synergy_graph(global: &SynergyGraph, stats: &DraftStats, team_id: &str) -> SynergyGraph {
    let bonuses = team_bonuses(stats, team_id);
    debug!("Team {}: {} heroes with bonus.", team_id, bonuses.len());
    global.with_bonuses(&bonuses)
}
