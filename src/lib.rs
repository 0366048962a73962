#[macro_use]
extern crate log;
#[macro_use]
extern crate lazy_static;

#[macro_use]
pub mod analyzers;
pub mod extractor;
pub mod graph;
pub mod heroes_info;
pub mod match_stats;
pub mod settings;
pub mod storage;

pub type BoxError = Box<dyn std::error::Error>;
