pub mod config;
pub mod shows;
pub mod stats;
