//! Deployment input records and their persistence under `input/`.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::address::Address;

pub const INPUT_DIR: &str = "input";
pub const BASE_INPUTS_FILE: &str = "BaseInputs.json";
pub const CROSS_CHAIN_INPUTS_FILE: &str = "CrossChainInputs.json";

/// Reserved slot for the principal token before one is deployed.
pub fn principal_token_placeholder() -> Address {
    let mut bytes = [0u8; 20];
    bytes[19] = 1;
    Address::from_bytes(bytes)
}

/// Instance identity and token economics. The instance id stays 0 until
/// registration assigns one.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Metadata {
    pub name: String,
    pub id: u64,
    pub principal_token_name: String,
    pub principal_token_symbol: String,
    pub principal_token_address: Address,
    pub total_supply: u128,
    pub era_tokens: u128,
    pub reward: u128,
}

impl Default for Metadata {
    fn default() -> Self {
        Self {
            name: "EVVM".to_string(),
            id: 0,
            principal_token_name: "Mate Token".to_string(),
            principal_token_symbol: "MATE".to_string(),
            principal_token_address: principal_token_placeholder(),
            total_supply: 2033333333000000000000000000,
            era_tokens: 1016666666500000000000000000,
            reward: 5000000000000000000,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BaseInputs {
    pub admin: Address,
    pub golden_fisher: Address,
    pub activator: Address,
    pub metadata: Metadata,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HyperlaneEndpoint {
    pub domain_id: u64,
    pub mailbox: Address,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LayerZeroEndpoint {
    pub eid: u64,
    pub endpoint: Address,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AxelarEndpoint {
    pub chain_name: String,
    pub gateway: Address,
    pub gas_service: Address,
}

/// Messaging endpoints for one side of a cross-chain pair.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StationConfig {
    pub chain_id: u64,
    pub hyperlane: HyperlaneEndpoint,
    pub layer_zero: LayerZeroEndpoint,
    pub axelar: AxelarEndpoint,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CrossChainInputs {
    pub external_admin: Address,
    pub host: StationConfig,
    pub external: StationConfig,
}

fn write_pretty<T: Serialize>(root: &Path, file: &str, value: &T) -> anyhow::Result<PathBuf> {
    let dir = root.join(INPUT_DIR);
    fs::create_dir_all(&dir)
        .with_context(|| format!("creating input directory {}", dir.display()))?;
    let path = dir.join(file);
    let json = serde_json::to_string_pretty(value)?;
    fs::write(&path, json.as_bytes())
        .with_context(|| format!("writing {}", path.display()))?;
    Ok(path)
}

impl BaseInputs {
    pub fn save(&self, root: &Path) -> anyhow::Result<PathBuf> {
        write_pretty(root, BASE_INPUTS_FILE, self)
    }

    pub fn load(root: &Path) -> anyhow::Result<Self> {
        let path = root.join(INPUT_DIR).join(BASE_INPUTS_FILE);
        let raw = fs::read_to_string(&path)
            .with_context(|| format!("reading {}", path.display()))?;
        serde_json::from_str(&raw).with_context(|| format!("parsing {}", path.display()))
    }
}

impl CrossChainInputs {
    pub fn save(&self, root: &Path) -> anyhow::Result<PathBuf> {
        write_pretty(root, CROSS_CHAIN_INPUTS_FILE, self)
    }

    pub fn load(root: &Path) -> anyhow::Result<Self> {
        let path = root.join(INPUT_DIR).join(CROSS_CHAIN_INPUTS_FILE);
        let raw = fs::read_to_string(&path)
            .with_context(|| format!("reading {}", path.display()))?;
        serde_json::from_str(&raw).with_context(|| format!("parsing {}", path.display()))
    }
}
