use crate::graph::{CounterGraph, SynergyGraph};
use crate::match_stats::HeroId;

/// Composite value of picking `hero`: total synergy of the hero in `synergy`
/// plus net counter advantage against `enemies`. Missing nodes and edges count 0.
/// `allies` is only logged: synergy sums every neighbour of `hero`, picked or not.
pub fn hero_value(
    hero: &str,
    synergy: &SynergyGraph,
    counter: &CounterGraph,
    allies: &[HeroId],
    enemies: &[HeroId],
) -> f64 {
    let synergy_value = synergy.incident_weight(hero);
    let counter_value: f64 = enemies
        .iter()
        .map(|enemy| {
            counter.weight(hero, enemy).unwrap_or(0.0) - counter.weight(enemy, hero).unwrap_or(0.0)
        })
        .sum();
    trace!(
        "{}: synergy {:.3}, counter {:.3} ({} allies, {} enemies)",
        hero,
        synergy_value,
        counter_value,
        allies.len(),
        enemies.len()
    );
    synergy_value + counter_value
}
