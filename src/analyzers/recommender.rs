use super::aggregator::DraftStats;
use super::counter::build_counter_graph;
use super::lanes::effective_lane_occupation;
use super::scoring::hero_value;
use super::synergy::{build_synergy_graph, team_synergy_graph};
use crate::graph::{weight_key, CounterGraph, SynergyGraph};
use crate::heroes_info::{HeroRoleMap, Lane, LaneSet};
use crate::match_stats::{normalize_hero, DraftAction, HeroId, TeamId};
use serde::Serialize;
use std::cmp::Reverse;
use std::collections::HashSet;

pub const RECOMMENDATION_COUNT: usize = 5;

/// Current state of one side of the draft.
#[derive(Debug, Clone, Default)]
pub struct DraftSide {
    pub team: TeamId,
    pub picks: Vec<HeroId>,
    pub bans: Vec<HeroId>,
}

impl DraftSide {
    pub fn new<S: AsRef<str>>(team: &str, picks: &[S], bans: &[S]) -> DraftSide {
        DraftSide {
            team: team.to_string(),
            picks: picks.iter().map(|h| normalize_hero(h.as_ref())).collect(),
            bans: bans.iter().map(|h| normalize_hero(h.as_ref())).collect(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct DraftQuery {
    pub action: DraftAction,
    pub own: DraftSide,
    pub enemy: DraftSide,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Recommendation {
    pub hero: HeroId,
    pub score: f64,
}

/// Ranking engine for one loaded dataset. Graphs are built once here
/// and only read by queries.
pub struct Recommender {
    stats: DraftStats,
    synergy: SynergyGraph,
    counter: CounterGraph,
    roles: HeroRoleMap,
}

impl Recommender {
    pub fn new(stats: DraftStats, roles: HeroRoleMap) -> Recommender {
        let synergy = build_synergy_graph(&stats);
        let counter = build_counter_graph(&stats);
        if roles.is_empty() {
            warn!("No hero lanes loaded, lane rules are off.");
        }
        Recommender {
            stats,
            synergy,
            counter,
            roles,
        }
    }

    pub fn stats(&self) -> &DraftStats {
        &self.stats
    }

    pub fn synergy(&self) -> &SynergyGraph {
        &self.synergy
    }

    pub fn counter(&self) -> &CounterGraph {
        &self.counter
    }

    pub fn team_synergy(&self, team_id: &str) -> SynergyGraph {
        team_synergy_graph(&self.synergy, &self.stats, team_id)
    }

    /// Top eligible heroes for the requested action.
    pub fn recommend(&self, query: &DraftQuery) -> Vec<Recommendation> {
        let mut ranked = self.ranked_candidates(query);
        ranked.truncate(RECOMMENDATION_COUNT);
        ranked
    }

    /// Every eligible hero, best first. Equal scores are ordered by hero id.
    pub fn ranked_candidates(&self, query: &DraftQuery) -> Vec<Recommendation> {
        // a ban is judged from the enemy's point of view
        let (acting, opposing) = match query.action {
            DraftAction::Pick => (&query.own, &query.enemy),
            DraftAction::Ban => (&query.enemy, &query.own),
        };
        let team_graph = self.team_synergy(&acting.team);
        let own_lanes = effective_lane_occupation(&self.roles, &query.own.picks);
        let enemy_lanes = effective_lane_occupation(&self.roles, &query.enemy.picks);
        let used: HashSet<&str> = query
            .own
            .picks
            .iter()
            .chain(query.own.bans.iter())
            .chain(query.enemy.picks.iter())
            .chain(query.enemy.bans.iter())
            .map(|h| h.as_str())
            .collect();

        let mut scored: Vec<Recommendation> = self
            .synergy
            .heroes()
            .filter(|hero| !used.contains(hero.as_str()))
            .map(|hero| Recommendation {
                hero: hero.clone(),
                score: hero_value(
                    hero,
                    &team_graph,
                    &self.counter,
                    &acting.picks,
                    &opposing.picks,
                ),
            })
            .collect();
        scored.sort_by(|a, b| {
            (Reverse(weight_key(a.score)), &a.hero).cmp(&(Reverse(weight_key(b.score)), &b.hero))
        });
        let ranked: Vec<Recommendation> = scored
            .into_iter()
            .filter(|r| self.is_eligible(query.action, &r.hero, &own_lanes, &enemy_lanes))
            .collect();
        debug!(
            "{} for {} vs {}: {} eligible heroes.",
            query.action,
            query.own.team,
            query.enemy.team,
            ranked.len()
        );
        ranked
    }

    fn is_eligible(
        &self,
        action: DraftAction,
        hero: &str,
        own_lanes: &LaneSet,
        enemy_lanes: &LaneSet,
    ) -> bool {
        let lanes = self.roles.lanes(hero);
        if lanes.is_empty() {
            return true;
        }
        match action {
            DraftAction::Pick => {
                let open: LaneSet = Lane::all().difference(own_lanes).copied().collect();
                !lanes.is_disjoint(&open)
            }
            DraftAction::Ban => {
                // a one-lane hero whose lane the enemy already filled denies nothing
                if lanes.len() == 1 && lanes.iter().all(|lane| enemy_lanes.contains(lane)) {
                    return false;
                }
                !lanes.is_subset(enemy_lanes)
            }
        }
    }
}
