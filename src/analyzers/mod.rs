#[macro_use]
pub mod analyzers_utils;
pub mod aggregator;
pub mod counter;
pub mod lanes;
pub mod recommender;
pub mod scoring;
pub mod synergy;
mod winratio;

pub use winratio::WinRatio;
