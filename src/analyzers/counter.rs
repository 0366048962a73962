use super::aggregator::DraftStats;
use crate::graph::CounterGraph;
use itertools::Itertools;

/// Directed "hero beats hero" graph, weighted by net matchup wins.
pub fn build_counter_graph(stats: &DraftStats) -> CounterGraph {
    let mut graph = CounterGraph::new();
    for ((mine, theirs), versus) in stats.versus_stats.iter().sorted_by(|a, b| a.0.cmp(b.0)) {
        let score = versus.net();
        if score > 0 {
            graph.set_edge(mine, theirs, score as f64);
        } else if score < 0 {
            graph.set_edge(theirs, mine, -score as f64);
        }
    }
    info!(
        "Built counter graph: {} heroes, {} edges.",
        graph.hero_count(),
        graph.edge_count()
    );
    graph
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzers::aggregator::aggregate;
    use crate::analyzers::aggregator::tests::mock_rows;

    fn matchups() -> DraftStats {
        aggregate(&mock_rows(
            r#"[
            {"match_id": "1", "team": "x", "hero": "a", "is_winner": 1, "action_type": "pick"},
            {"match_id": "1", "team": "y", "hero": "b", "is_winner": 0, "action_type": "pick"},
            {"match_id": "2", "team": "x", "hero": "a", "is_winner": 1, "action_type": "pick"},
            {"match_id": "2", "team": "y", "hero": "b", "is_winner": 0, "action_type": "pick"},
            {"match_id": "2", "team": "y", "hero": "c", "is_winner": 0, "action_type": "pick"},
            {"match_id": "3", "team": "x", "hero": "a", "is_winner": 1, "action_type": "pick"},
            {"match_id": "3", "team": "y", "hero": "c", "is_winner": 0, "action_type": "pick"},
            {"match_id": "4", "team": "x", "hero": "a", "is_winner": 0, "action_type": "pick"},
            {"match_id": "4", "team": "y", "hero": "c", "is_winner": 1, "action_type": "pick"},
            {"match_id": "5", "team": "x", "hero": "d", "is_winner": 0, "action_type": "pick"},
            {"match_id": "5", "team": "y", "hero": "b", "is_winner": 1, "action_type": "pick"}
        ]"#,
        ))
    }

    #[test]
    fn counter_direction_test() {
        let graph = build_counter_graph(&matchups());
        assert_eq!(graph.weight("a", "b"), Some(2.0));
        assert_eq!(graph.weight("b", "a"), None);
        assert_eq!(graph.weight("b", "d"), Some(1.0));
        assert_eq!(graph.weight("d", "b"), None);
        // a vs c: 2 wins, 1 loss
        assert_eq!(graph.weight("a", "c"), Some(1.0));
    }

    #[test]
    fn no_even_matchup_edge_test() {
        let stats = aggregate(&mock_rows(
            r#"[
            {"match_id": "1", "team": "x", "hero": "a", "is_winner": 1, "action_type": "pick"},
            {"match_id": "1", "team": "y", "hero": "b", "is_winner": 0, "action_type": "pick"},
            {"match_id": "2", "team": "x", "hero": "a", "is_winner": 0, "action_type": "pick"},
            {"match_id": "2", "team": "y", "hero": "b", "is_winner": 1, "action_type": "pick"}
        ]"#,
        ));
        let graph = build_counter_graph(&stats);
        assert_eq!(graph.edge_count(), 0);
    }

    #[test]
    fn single_direction_per_pair_test() {
        let stats = matchups();
        let graph = build_counter_graph(&stats);
        for (mine, theirs) in stats.versus_stats.keys() {
            let forward = graph.weight(mine, theirs).is_some();
            let backward = graph.weight(theirs, mine).is_some();
            assert!(!(forward && backward));
            let net = stats.versus_stats[&(mine.clone(), theirs.clone())].net();
            assert_eq!(forward, net > 0);
        }
    }
}
