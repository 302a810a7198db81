pub mod cli;

use crate::domain::ports::GeocoderConfig;
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use clap::{Parser, Subcommand};
use std::time::Duration;

#[derive(Debug, Clone, Parser)]
#[command(name = "standup-order")]
#[command(about = "Generates a randomized geographic update order for a team roster")]
pub struct CliConfig {
    #[arg(long, default_value = "roster.json", help = "Roster state file")]
    pub roster_path: String,

    #[arg(long, default_value = "https://nominatim.openstreetmap.org/search")]
    pub geocoder_endpoint: String,

    #[arg(long, default_value = "10", help = "Per-request geocoding timeout")]
    pub timeout_seconds: u64,

    #[arg(long, default_value = "3", help = "Retries after a transient geocoding failure")]
    pub max_retries: u32,

    #[arg(long, default_value = "2", help = "Delay between geocoding attempts")]
    pub backoff_seconds: u64,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Add or update a roster member by name and free-text location
    Add { name: String, location: String },
    /// Remove a member; unknown names are ignored
    Remove { name: String },
    /// Show the current roster
    List,
    /// Pick a random directional flow and print the update order
    Order {
        #[arg(long, help = "Seed the flow selector for reproducible output")]
        seed: Option<u64>,
    },
    /// Clear the roster
    Reset,
}

impl GeocoderConfig for CliConfig {
    fn endpoint(&self) -> &str {
        &self.geocoder_endpoint
    }

    fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }

    fn max_retries(&self) -> u32 {
        self.max_retries
    }

    fn backoff(&self) -> Duration {
        Duration::from_secs(self.backoff_seconds)
    }

    fn user_agent(&self) -> &str {
        concat!("standup-order/", env!("CARGO_PKG_VERSION"))
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_url("geocoder_endpoint", &self.geocoder_endpoint)?;
        validation::validate_path("roster_path", &self.roster_path)?;
        validation::validate_range("timeout_seconds", self.timeout_seconds, 1, 120)?;
        validation::validate_range("max_retries", self.max_retries, 0, 10)?;
        validation::validate_range("backoff_seconds", self.backoff_seconds, 0, 60)?;
        Ok(())
    }
}
