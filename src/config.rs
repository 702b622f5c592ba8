use crate::storage::resolve_data_path;
use crate::streak::DEFAULT_HORIZON_DAYS;
use std::{env, path::PathBuf};

pub const DEFAULT_PORT: u16 = 8080;

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub data_path: PathBuf,
    pub streak_horizon: u32,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            port: parse_var("PORT").unwrap_or(DEFAULT_PORT),
            data_path: resolve_data_path(),
            streak_horizon: parse_var("HABIT_STREAK_HORIZON")
                .filter(|days| *days > 0)
                .unwrap_or(DEFAULT_HORIZON_DAYS),
        }
    }
}

fn parse_var<T: std::str::FromStr>(name: &str) -> Option<T> {
    env::var(name).ok().and_then(|value| value.trim().parse().ok())
}
