use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::MorphoError;

/// Typed view of the default vaults query response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VaultsResponse {
    pub data: VaultsData,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VaultsData {
    pub vaults: VaultPage,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VaultPage {
    pub items: Vec<VaultItem>,
}

/// A single vault as projected by the default query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VaultItem {
    pub name: String,
    pub symbol: String,
    pub chain: VaultChain,
    pub state: Option<VaultState>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VaultChain {
    pub id: u64,
    pub network: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VaultState {
    pub daily_apy: Option<f64>, // fraction, 0.05 == 5%
}

impl VaultsResponse {
    pub fn from_value(value: Value) -> Result<Self, MorphoError> {
        Ok(serde_json::from_value(value)?)
    }

    pub fn items(&self) -> &[VaultItem] {
        &self.data.vaults.items
    }
}

impl VaultItem {
    pub fn daily_apy(&self) -> Option<f64> {
        self.state.as_ref().and_then(|state| state.daily_apy)
    }
}
