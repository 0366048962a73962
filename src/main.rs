#[macro_use]
extern crate log;

use clap::{Parser, Subcommand};
use draftstats::analyzers::aggregator::aggregate;
use draftstats::analyzers::recommender::{DraftQuery, DraftSide, Recommender};
use draftstats::extractor::read_draft_rows;
use draftstats::graph::EdgeRecord;
use draftstats::match_stats::DraftAction;
use draftstats::settings::Settings;
use draftstats::storage::result_storage::store_edges_result;
use draftstats::BoxError;
use simplelog::{Config, SimpleLogger};
use std::path::PathBuf;

#[derive(Parser)]
#[clap(name = "draftstats", about = "Hero pick/ban recommendations from draft history")]
struct Opts {
    /// Settings file (defaults to ./Settings.toml)
    #[clap(short, long)]
    config: Option<PathBuf>,
    /// Draft csv, overrides settings
    #[clap(short, long)]
    data: Option<PathBuf>,
    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Top five heroes to pick or ban next
    Recommend {
        #[clap(long)]
        action: DraftAction,
        #[clap(long)]
        team: String,
        #[clap(long)]
        enemy: String,
        #[clap(long, default_value = "")]
        our_picks: String,
        #[clap(long, default_value = "")]
        our_bans: String,
        #[clap(long, default_value = "")]
        enemy_picks: String,
        #[clap(long, default_value = "")]
        enemy_bans: String,
    },
    /// Heaviest edges of a graph
    Edges {
        #[clap(long, possible_values = &["global", "team", "counter"], default_value = "global")]
        graph: String,
        #[clap(long)]
        team: Option<String>,
        #[clap(long)]
        top: Option<usize>,
        /// List every edge instead of the top ones
        #[clap(long, conflicts_with = "top")]
        all: bool,
        /// Also write the edges as json to the results directory
        #[clap(long)]
        export: bool,
    },
    /// Dataset and graph sizes
    Summary,
}

fn hero_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|h| h.trim().to_lowercase())
        .filter(|h| !h.is_empty())
        .collect()
}

/// Export tag and edges of the chosen graph; `limit: None` keeps every edge.
fn select_edges(
    recommender: &Recommender,
    graph: &str,
    team: Option<&str>,
    limit: Option<usize>,
) -> Result<(String, Vec<EdgeRecord>), BoxError> {
    let (tag, edges, edge_count) = match (graph, team) {
        ("team", Some(team)) => {
            let synergy = recommender.team_synergy(team);
            let k = limit.unwrap_or_else(|| synergy.edge_count());
            (format!("synergy_{}", team), synergy.top_edges(k), synergy.edge_count())
        }
        ("team", None) => return Err("--team is required for the team graph".into()),
        (_, Some(_)) => return Err(format!("--team does not apply to the {} graph", graph).into()),
        ("counter", None) => {
            let counter = recommender.counter();
            let k = limit.unwrap_or_else(|| counter.edge_count());
            ("counter".to_string(), counter.top_edges(k), counter.edge_count())
        }
        _ => {
            let global = recommender.synergy();
            let k = limit.unwrap_or_else(|| global.edge_count());
            ("synergy_global".to_string(), global.top_edges(k), global.edge_count())
        }
    };
    debug!("Listing {} of {} edges.", edges.len(), edge_count);
    Ok((tag, edges))
}

fn print_edges(edges: &[EdgeRecord]) {
    for e in edges {
        println!("{} - {} : {:.2}", e.source, e.target, e.weight);
    }
}

fn main() -> Result<(), BoxError> {
    let opts = Opts::parse();
    let mut settings = Settings::load(opts.config.as_deref())?;
    if let Some(data) = opts.data {
        settings.data_file = data;
    }
    SimpleLogger::init(settings.level_filter(), Config::default())?;

    let rows = read_draft_rows(&settings.data_file)?;
    let recommender = Recommender::new(aggregate(&rows), settings.hero_roles()?);

    match opts.command {
        Command::Recommend {
            action,
            team,
            enemy,
            our_picks,
            our_bans,
            enemy_picks,
            enemy_bans,
        } => {
            let query = DraftQuery {
                action,
                own: DraftSide::new(&team, &hero_list(&our_picks), &hero_list(&our_bans)),
                enemy: DraftSide::new(&enemy, &hero_list(&enemy_picks), &hero_list(&enemy_bans)),
            };
            println!("Top hero recommendations for {}:", action.to_string().to_uppercase());
            for r in recommender.recommend(&query) {
                println!("{} : {:.4}", r.hero, r.score);
            }
        }
        Command::Edges {
            graph,
            team,
            top,
            all,
            export,
        } => {
            let limit = if all {
                None
            } else {
                Some(top.unwrap_or(settings.top_edges))
            };
            let (tag, edges) = select_edges(&recommender, &graph, team.as_deref(), limit)?;
            print_edges(&edges);
            if export {
                store_edges_result(&settings.results_dir, &tag, &edges)?;
            }
        }
        Command::Summary => {
            let stats = recommender.stats();
            println!("Matches: {}", stats.matches.len());
            println!("Heroes: {}", stats.hero_stats.len());
            println!("Hero pairs: {}", stats.pair_stats.len());
            println!("Matchups: {}", stats.versus_stats.len());
            println!(
                "Synergy graph: {} heroes, {} edges",
                recommender.synergy().hero_count(),
                recommender.synergy().edge_count()
            );
            println!(
                "Counter graph: {} heroes, {} edges",
                recommender.counter().hero_count(),
                recommender.counter().edge_count()
            );
        }
    }
    debug!("Done.");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use draftstats::heroes_info::HeroRoleMap;
    use draftstats::match_stats::DraftRow;

    fn recommender() -> Recommender {
        let rows: Vec<DraftRow> = serde_json::from_str(
            r#"[
            {"match_id": "1", "team": "x", "hero": "a", "is_winner": 1, "action_type": "pick"},
            {"match_id": "1", "team": "x", "hero": "b", "is_winner": 1, "action_type": "pick"},
            {"match_id": "1", "team": "x", "hero": "c", "is_winner": 1, "action_type": "pick"},
            {"match_id": "1", "team": "y", "hero": "d", "is_winner": 0, "action_type": "pick"}
        ]"#,
        )
        .unwrap();
        Recommender::new(aggregate(&rows), HeroRoleMap::default())
    }

    #[test]
    fn hero_list_test() {
        assert_eq!(hero_list(" Chou, ,LING "), vec!["chou", "ling"]);
        assert!(hero_list("").is_empty());
    }

    #[test]
    fn select_all_edges_test() {
        let recommender = recommender();
        let (tag, edges) = select_edges(&recommender, "global", None, None).unwrap();
        assert_eq!(tag, "synergy_global");
        assert_eq!(edges.len(), 3);
        let (_, edges) = select_edges(&recommender, "global", None, Some(1)).unwrap();
        assert_eq!(edges.len(), 1);
        let (tag, edges) = select_edges(&recommender, "counter", None, None).unwrap();
        assert_eq!(tag, "counter");
        assert_eq!(edges.len(), 3);
    }

    #[test]
    fn select_edges_team_flag_test() {
        let recommender = recommender();
        let (tag, edges) = select_edges(&recommender, "team", Some("x"), None).unwrap();
        assert_eq!(tag, "synergy_x");
        assert_eq!(edges.len(), 3);
        assert!(select_edges(&recommender, "team", None, None).is_err());
        assert!(select_edges(&recommender, "global", Some("x"), None).is_err());
        assert!(select_edges(&recommender, "counter", Some("x"), None).is_err());
    }
}
