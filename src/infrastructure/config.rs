//! Application configuration

use std::env;
use std::str::FromStr;

use anyhow::{Context, Result};

use crate::application::services::DEFAULT_MAX_DICE_PER_ROLL;

const RNG_SEED_VAR: &str = "GM_TOOLS_RNG_SEED";
const MAX_DICE_PER_ROLL_VAR: &str = "GM_TOOLS_MAX_DICE_PER_ROLL";

/// Application configuration loaded from environment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Seed for a reproducible session. `None` draws from the thread RNG.
    pub rng_seed: Option<u64>,
    /// Upper limit on `quantity` for a single dice roll
    pub max_dice_per_roll: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            rng_seed: None,
            max_dice_per_roll: DEFAULT_MAX_DICE_PER_ROLL,
        }
    }
}

impl AppConfig {
    /// Load `.env` if present, then read the environment
    pub fn load() -> Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_env()
    }

    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable source
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let rng_seed = parse_var::<u64>(&lookup, RNG_SEED_VAR)
            .context("GM_TOOLS_RNG_SEED must be an unsigned 64-bit integer")?;

        let max_dice_per_roll = parse_var::<u32>(&lookup, MAX_DICE_PER_ROLL_VAR)
            .context("GM_TOOLS_MAX_DICE_PER_ROLL must be a positive integer")?
            .unwrap_or(DEFAULT_MAX_DICE_PER_ROLL);
        if max_dice_per_roll == 0 {
            anyhow::bail!("GM_TOOLS_MAX_DICE_PER_ROLL must be a positive integer");
        }

        Ok(Self {
            rng_seed,
            max_dice_per_roll,
        })
    }
}

/// Unset or blank variables are `None`; anything else must parse
fn parse_var<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Result<Option<T>>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match lookup(key) {
        Some(raw) if !raw.trim().is_empty() => raw
            .trim()
            .parse()
            .map(Some)
            .with_context(|| format!("invalid value {raw:?} for {key}")),
        _ => Ok(None),
    }
}
