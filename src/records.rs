//! Deployment and registration artifacts under `output/deployments/`.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::{Deserialize, Serialize};
use time::format_description::well_known::Rfc3339;
use time::OffsetDateTime;

use crate::address::Address;
use crate::chains;

pub const OUTPUT_DIR: &str = "output/deployments";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChainRef {
    pub chain_id: u64,
    pub chain_name: String,
}

impl ChainRef {
    pub fn new(chain_id: u64) -> Self {
        Self {
            chain_id,
            chain_name: chains::describe(chain_id),
        }
    }
}

/// Single-chain deployment record, written before the toolchain step runs so
/// the collected configuration survives a failed or postponed deploy.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeploymentRecord {
    pub timestamp: String,
    pub chain: ChainRef,
    pub wallet_name: String,
    pub instance_name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CrossChainDeploymentRecord {
    pub deployment_type: String,
    pub timestamp: String,
    pub host_chain: ChainRef,
    pub external_chain: ChainRef,
    pub wallet_name: String,
    pub instance_name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegistrationRecord {
    pub timestamp: String,
    pub chain: ChainRef,
    pub core_address: Address,
}

pub fn now_rfc3339() -> String {
    OffsetDateTime::now_utc()
        .format(&Rfc3339)
        .unwrap_or_else(|_| String::from("unknown"))
}

fn write_record<T: Serialize>(root: &Path, name: &str, record: &T) -> anyhow::Result<PathBuf> {
    let dir = root.join(OUTPUT_DIR);
    fs::create_dir_all(&dir)
        .with_context(|| format!("creating output directory {}", dir.display()))?;
    let path = dir.join(format!("{name}.json"));
    let json = serde_json::to_string_pretty(record)?;
    fs::write(&path, json.as_bytes())
        .with_context(|| format!("writing {}", path.display()))?;
    Ok(path)
}

impl DeploymentRecord {
    pub fn save(&self, root: &Path) -> anyhow::Result<PathBuf> {
        write_record(root, "evvmDeployment", self)
    }
}

impl CrossChainDeploymentRecord {
    pub fn save(&self, root: &Path) -> anyhow::Result<PathBuf> {
        write_record(root, "evvmCrossChainDeployment", self)
    }
}

impl RegistrationRecord {
    pub fn save(&self, root: &Path) -> anyhow::Result<PathBuf> {
        write_record(root, "evvmRegistration", self)
    }
}
