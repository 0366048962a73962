//! Hero graphs: undirected synergy and directed counter relations.
//!
//! Both wrap a petgraph `Graph` plus a hero -> node lookup. At most one
//! edge is kept per node pair (per direction for the counter graph).

use crate::match_stats::HeroId;
use ordered_float::OrderedFloat;
use petgraph::graph::{Graph, NodeIndex};
use petgraph::visit::EdgeRef;
use petgraph::{Directed, EdgeType, Undirected};
use serde::{Deserialize, Serialize};
use std::cmp::Reverse;
use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeightedEdge {
    pub weight: f64,
}

/// Flattened edge, used for listing and export.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EdgeRecord {
    pub source: HeroId,
    pub target: HeroId,
    pub weight: f64,
}

#[derive(Debug, Clone)]
pub struct HeroGraph<Ty: EdgeType> {
    graph: Graph<HeroId, WeightedEdge, Ty>,
    index: HashMap<HeroId, NodeIndex>,
}

pub type SynergyGraph = HeroGraph<Undirected>;
pub type CounterGraph = HeroGraph<Directed>;

/// Ordering key for weights and scores, rounded to 1e-9 so sums of the same
/// terms taken in a different order compare equal.
pub fn weight_key(weight: f64) -> OrderedFloat<f64> {
    OrderedFloat((weight * 1e9).round())
}

impl<Ty: EdgeType> Default for HeroGraph<Ty> {
    fn default() -> Self {
        HeroGraph {
            graph: Graph::default(),
            index: HashMap::new(),
        }
    }
}

impl<Ty: EdgeType> HeroGraph<Ty> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Idempotent, returns existing index if already present.
    pub fn add_hero(&mut self, hero: &str) -> NodeIndex {
        if let Some(&idx) = self.index.get(hero) {
            return idx;
        }
        let idx = self.graph.add_node(hero.to_string());
        self.index.insert(hero.to_string(), idx);
        idx
    }

    /// Adds the edge, or overwrites the weight of the existing one.
    pub fn set_edge(&mut self, source: &str, target: &str, weight: f64) {
        let a = self.add_hero(source);
        let b = self.add_hero(target);
        self.graph.update_edge(a, b, WeightedEdge { weight });
    }

    /// Heroes in insertion order.
    pub fn heroes(&self) -> impl Iterator<Item = &HeroId> {
        self.graph.node_weights()
    }

    pub fn hero_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Weight of `source -> target` (either direction when undirected).
    pub fn weight(&self, source: &str, target: &str) -> Option<f64> {
        let a = self.index.get(source)?;
        let b = self.index.get(target)?;
        let edge = self.graph.find_edge(*a, *b)?;
        self.graph.edge_weight(edge).map(|e| e.weight)
    }

    pub fn edges(&self) -> Vec<EdgeRecord> {
        self.graph
            .edge_references()
            .map(|e| EdgeRecord {
                source: self.graph[e.source()].clone(),
                target: self.graph[e.target()].clone(),
                weight: e.weight().weight,
            })
            .collect()
    }

    /// Heaviest `k` edges, ties ordered by endpoint ids.
    pub fn top_edges(&self, k: usize) -> Vec<EdgeRecord> {
        let mut edges = self.edges();
        edges.sort_by(|a, b| {
            (Reverse(weight_key(a.weight)), &a.source, &a.target).cmp(&(
                Reverse(weight_key(b.weight)),
                &b.source,
                &b.target,
            ))
        });
        edges.truncate(k);
        edges
    }
}

impl HeroGraph<Undirected> {
    /// Sum of weights of every edge touching `hero`; 0 if absent.
    pub fn incident_weight(&self, hero: &str) -> f64 {
        match self.index.get(hero) {
            Some(&idx) => self.graph.edges(idx).map(|e| e.weight().weight).sum(),
            None => 0.0,
        }
    }

    /// New graph where every edge gains the bonus of each of its endpoints.
    /// `self` is left untouched.
    pub fn with_bonuses(&self, bonuses: &HashMap<HeroId, f64>) -> SynergyGraph {
        let bonus = |idx: NodeIndex| {
            self.graph
                .node_weight(idx)
                .and_then(|hero| bonuses.get(hero))
                .copied()
                .unwrap_or(0.0)
        };
        let graph = self.graph.map(
            |_, hero| hero.clone(),
            |edge, e| {
                let extra = match self.graph.edge_endpoints(edge) {
                    Some((a, b)) => bonus(a) + bonus(b),
                    None => 0.0,
                };
                WeightedEdge {
                    weight: e.weight + extra,
                }
            },
        );
        HeroGraph {
            graph,
            index: self.index.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_hero_idempotent_test() {
        let mut graph = SynergyGraph::new();
        let a = graph.add_hero("chou");
        let b = graph.add_hero("chou");
        assert_eq!(a, b);
        assert_eq!(graph.hero_count(), 1);
    }

    #[test]
    fn synergy_edges_undirected_test() {
        let mut graph = SynergyGraph::new();
        graph.set_edge("a", "b", 1.5);
        graph.set_edge("b", "a", 2.0);
        graph.set_edge("a", "c", 0.5);
        assert_eq!(graph.edge_count(), 2);
        assert_eq!(graph.weight("b", "a"), Some(2.0));
        assert_eq!(graph.incident_weight("a"), 2.5);
        assert_eq!(graph.incident_weight("missing"), 0.0);
        assert_eq!(graph.weight("b", "c"), None);
    }

    #[test]
    fn counter_edges_directed_test() {
        let mut graph = CounterGraph::new();
        graph.set_edge("a", "b", 3.0);
        assert_eq!(graph.weight("a", "b"), Some(3.0));
        assert_eq!(graph.weight("b", "a"), None);
        graph.set_edge("a", "b", 1.0);
        assert_eq!(graph.edge_count(), 1);
        assert_eq!(graph.weight("a", "b"), Some(1.0));
    }

    #[test]
    fn with_bonuses_test() {
        let mut graph = SynergyGraph::new();
        graph.set_edge("a", "b", 1.0);
        graph.set_edge("b", "c", 1.0);
        graph.set_edge("c", "d", 1.0);
        let bonuses: HashMap<HeroId, f64> =
            vec![("a".to_string(), 0.5), ("b".to_string(), 0.25)].into_iter().collect();
        let boosted = graph.with_bonuses(&bonuses);
        assert_eq!(boosted.weight("a", "b"), Some(1.75));
        assert_eq!(boosted.weight("b", "c"), Some(1.25));
        assert_eq!(boosted.weight("c", "d"), Some(1.0));
        assert_eq!(graph.weight("a", "b"), Some(1.0));
        assert_eq!(boosted.heroes().collect::<Vec<_>>(), graph.heroes().collect::<Vec<_>>());
    }

    #[test]
    fn top_edges_test() {
        let mut graph = CounterGraph::new();
        graph.set_edge("a", "b", 1.0);
        graph.set_edge("c", "d", 3.0);
        graph.set_edge("b", "c", 1.0);
        let top = graph.top_edges(2);
        assert_eq!(top.len(), 2);
        assert_eq!((top[0].source.as_str(), top[0].weight), ("c", 3.0));
        assert_eq!((top[1].source.as_str(), top[1].target.as_str()), ("a", "b"));
        assert_eq!(graph.top_edges(10).len(), 3);
    }

    #[test]
    fn equal_sums_tie_on_ids_test() {
        let mut graph = SynergyGraph::new();
        // 1.2 + 0.6 != 0.3 + 1.5 in f64
        graph.set_edge("z", "p", 0.3 + 1.5);
        graph.set_edge("a", "b", 1.2 + 0.6);
        let top = graph.top_edges(2);
        assert_eq!((top[0].source.as_str(), top[1].source.as_str()), ("a", "z"));
        assert_eq!(weight_key(1.2 + 0.6), weight_key(0.3 + 1.5));
    }
}
