pub mod aggregate;
pub mod config;
pub mod fixtures;
pub mod http_client;
pub mod leagues;
pub mod picks;
pub mod report;
pub mod team_stats;
