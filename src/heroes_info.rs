use crate::match_stats::{normalize_hero, HeroId, StatsError, StatsResult};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashMap};
use std::fs::read_to_string;
use std::path::Path;
use std::str::FromStr;
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter, EnumString};

/// Team position. Declaration order is lexicographic by name,
/// so `BTreeSet<Lane>` iterates lanes alphabetically.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Lane {
    Exp,
    Gold,
    Jungler,
    Mid,
    Roam,
}

impl Lane {
    pub fn all() -> BTreeSet<Lane> {
        Lane::iter().collect()
    }
}

pub type LaneSet = BTreeSet<Lane>;

lazy_static! {
    /// Lane table shipped with the tool, used when no roles file is configured.
    pub static ref DEFAULT_HERO_ROLES: HeroRoleMap = HeroRoleMap::from_table(BUILTIN_ROLES);
}

/// Maps hero -> admissible lanes. Heroes missing from the map fit any lane.
#[derive(Debug, Clone, Default)]
pub struct HeroRoleMap {
    roles: HashMap<HeroId, LaneSet>,
}

impl HeroRoleMap {
    pub fn new(roles: HashMap<HeroId, LaneSet>) -> HeroRoleMap {
        HeroRoleMap {
            roles: roles
                .into_iter()
                .map(|(hero, lanes)| (normalize_hero(&hero), lanes))
                .collect(),
        }
    }

    fn from_table(table: &[(&str, &[Lane])]) -> HeroRoleMap {
        HeroRoleMap {
            roles: table
                .iter()
                .map(|(hero, lanes)| (hero.to_string(), lanes.iter().copied().collect()))
                .collect(),
        }
    }

    /// Initializes from json file of form `{"hero": ["lane", ...]}`.
    pub fn init<P: AsRef<Path>>(roles_filename: P) -> StatsResult<HeroRoleMap> {
        let raw: HashMap<String, Vec<String>> =
            serde_json::from_str(read_to_string(roles_filename)?.as_str())?;
        let mut roles = HashMap::new();
        for (hero, lanes) in raw {
            let lanes = lanes
                .iter()
                .map(|lane| {
                    Lane::from_str(lane.trim())
                        .map_err(|_| StatsError::UnknownLane(format!("{} (hero: {})", lane, hero)))
                })
                .collect::<StatsResult<LaneSet>>()?;
            roles.insert(hero, lanes);
        }
        info!("Loaded lanes for {} heroes.", roles.len());
        Ok(HeroRoleMap::new(roles))
    }

    /// Admissible lanes; empty for unknown heroes.
    pub fn lanes(&self, hero: &str) -> LaneSet {
        self.roles.get(hero).cloned().unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.roles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.roles.is_empty()
    }
}

use self::Lane::*;

const BUILTIN_ROLES: &[(&str, &[Lane])] = &[
    ("akai", &[Exp]),
    ("alpha", &[Jungler]),
    ("angela", &[Roam]),
    ("arlott", &[Exp]),
    ("aurora", &[Mid]),
    ("badang", &[Exp, Roam]),
    ("barats", &[Jungler]),
    ("baxia", &[Exp, Jungler, Roam]),
    ("beatrix", &[Gold]),
    ("belerick", &[Exp]),
    ("benedetta", &[Exp]),
    ("bruno", &[Gold]),
    ("carmilla", &[Roam]),
    ("cecilion", &[Mid]),
    ("chip", &[Roam]),
    ("chou", &[Exp, Roam]),
    ("cici", &[Exp]),
    ("claude", &[Gold]),
    ("clint", &[Gold]),
    ("edith", &[Exp]),
    ("esmeralda", &[Exp]),
    ("fanny", &[Jungler]),
    ("faramis", &[Mid]),
    ("floryn", &[Roam]),
    ("franco", &[Roam]),
    ("fredrinn", &[Exp, Jungler]),
    ("gatotkaca", &[Exp, Roam]),
    ("gloo", &[Exp]),
    ("granger", &[Gold]),
    ("guinevere", &[Jungler, Roam]),
    ("hanzo", &[Gold, Jungler]),
    ("harith", &[Gold]),
    ("hayabusa", &[Jungler]),
    ("helcurt", &[Roam]),
    ("hilda", &[Exp, Mid, Roam]),
    ("hylos", &[Exp, Roam]),
    ("irithel", &[Gold]),
    ("jawhead", &[Roam]),
    ("joy", &[Jungler]),
    ("julian", &[Jungler]),
    ("kadita", &[Mid]),
    ("kaja", &[Jungler]),
    ("kalea", &[Exp, Roam]),
    ("karrie", &[Gold]),
    ("khaleed", &[Exp, Roam]),
    ("khufra", &[Roam]),
    ("kimmy", &[Gold, Mid]),
    ("lancelot", &[Jungler]),
    ("leomord", &[Jungler]),
    ("ling", &[Jungler]),
    ("lukas", &[Exp, Jungler]),
    ("lunox", &[Gold, Mid]),
    ("luo yi", &[Mid]),
    ("lylia", &[Mid]),
    ("martis", &[Jungler]),
    ("masha", &[Exp]),
    ("mathilda", &[Exp, Roam]),
    ("moskov", &[Gold]),
    ("natan", &[Gold]),
    ("nolan", &[Jungler]),
    ("novaria", &[Mid, Roam]),
    ("paquito", &[Exp]),
    ("pharsa", &[Mid]),
    ("phoveus", &[Exp]),
    ("ruby", &[Exp, Gold, Roam]),
    ("selena", &[Mid]),
    ("suyou", &[Jungler]),
    ("terizla", &[Exp]),
    ("tigreal", &[Roam]),
    ("uranus", &[Exp]),
    ("vale", &[Mid]),
    ("valentina", &[Exp, Mid]),
    ("valir", &[Mid]),
    ("vexana", &[Mid]),
    ("wanwan", &[Gold]),
    ("xborg", &[Exp, Jungler]),
    ("yi sun shin", &[Jungler]),
    ("yve", &[Mid]),
    ("zhask", &[Mid]),
    ("zhuxin", &[Mid]),
];
