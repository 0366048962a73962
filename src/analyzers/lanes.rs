use crate::heroes_info::{HeroRoleMap, Lane, LaneSet};
use crate::match_stats::HeroId;
use std::collections::HashMap;

/// Lanes taken by `picks`. Single-lane heroes claim their lane first; heroes with
/// several lanes then take the first free one alphabetically, or nothing if none is free.
/// Heroes without known lanes are ignored.
pub fn effective_lane_occupation(roles: &HeroRoleMap, picks: &[HeroId]) -> LaneSet {
    let mut lane_count: HashMap<Lane, u32> = HashMap::new();
    let mut flexible: Vec<LaneSet> = Vec::new();
    for hero in picks {
        let lanes = roles.lanes(hero);
        match lanes.len() {
            0 => {}
            1 => {
                for lane in lanes {
                    *lane_count.entry(lane).or_insert(0) += 1;
                }
            }
            _ => flexible.push(lanes),
        }
    }
    for lanes in flexible {
        if let Some(lane) = lanes
            .into_iter()
            .find(|lane| lane_count.get(lane).copied().unwrap_or(0) == 0)
        {
            lane_count.insert(lane, 1);
        }
    }
    lane_count
        .into_iter()
        .filter(|(_, count)| *count > 0)
        .map(|(lane, _)| lane)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::heroes_info::Lane::*;
    use crate::heroes_info::DEFAULT_HERO_ROLES;

    fn picks(heroes: &[&str]) -> Vec<HeroId> {
        heroes.iter().map(|h| h.to_string()).collect()
    }

    fn lanes(lanes: &[Lane]) -> LaneSet {
        lanes.iter().copied().collect()
    }

    #[test]
    fn fixed_heroes_first_test() {
        // chou (exp, roam) comes before akai (exp) but akai keeps exp.
        let occupied = effective_lane_occupation(&DEFAULT_HERO_ROLES, &picks(&["chou", "akai"]));
        assert_eq!(occupied, lanes(&[Exp, Roam]));
    }

    #[test]
    fn flexible_alphabetical_test() {
        // baxia: exp, jungler, roam -> exp is free
        let occupied = effective_lane_occupation(&DEFAULT_HERO_ROLES, &picks(&["baxia"]));
        assert_eq!(occupied, lanes(&[Exp]));
        let occupied =
            effective_lane_occupation(&DEFAULT_HERO_ROLES, &picks(&["baxia", "fredrinn"]));
        assert_eq!(occupied, lanes(&[Exp, Jungler]));
    }

    #[test]
    fn flexible_without_free_lane_test() {
        // kimmy (gold, mid) after granger (gold) and pharsa (mid) occupies nothing new.
        let occupied = effective_lane_occupation(
            &DEFAULT_HERO_ROLES,
            &picks(&["kimmy", "granger", "pharsa"]),
        );
        assert_eq!(occupied, lanes(&[Gold, Mid]));
    }

    #[test]
    fn unknown_heroes_ignored_test() {
        let occupied = effective_lane_occupation(&DEFAULT_HERO_ROLES, &picks(&["nana", "ling"]));
        assert_eq!(occupied, lanes(&[Jungler]));
        assert!(effective_lane_occupation(&DEFAULT_HERO_ROLES, &[]).is_empty());
    }

    #[test]
    fn deterministic_test() {
        let team = picks(&["hilda", "ruby", "chou", "lunox", "hanzo"]);
        let first = effective_lane_occupation(&DEFAULT_HERO_ROLES, &team);
        for _ in 0..10 {
            assert_eq!(effective_lane_occupation(&DEFAULT_HERO_ROLES, &team), first);
        }
        // hilda exp, ruby gold, chou roam, lunox mid, hanzo jungler
        assert_eq!(first, Lane::all());
    }
}
