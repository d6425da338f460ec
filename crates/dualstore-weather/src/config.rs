//! Weather store configuration: the labels of the dense axes.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WeatherConfig {
    /// Dense row labels, in traversal order.
    pub years: Vec<String>,
    /// Dense column labels, in traversal order.
    pub cities: Vec<String>,
}

impl Default for WeatherConfig {
    fn default() -> Self {
        Self {
            years: ["2023", "2024", "2025"].map(String::from).to_vec(),
            cities: ["Delhi", "Mumbai", "Chennai"].map(String::from).to_vec(),
        }
    }
}

impl WeatherConfig {
    pub fn from_json_str(text: &str) -> Result<Self> {
        serde_json::from_str(text).context("failed to parse weather config JSON")
    }
}
