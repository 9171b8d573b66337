pub mod batting;
pub mod bowling;
pub mod compare;
pub mod config;
pub mod dataset;
pub mod error;
pub mod export;
pub mod fake_data;
pub mod grouping;
pub mod listings;
pub mod match_stats;
pub mod ratio;
pub mod records;
pub mod state;
pub mod summary;
pub mod team_stats;
