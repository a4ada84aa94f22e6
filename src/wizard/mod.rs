//! Interactive configuration wizards.
//!
//! Each wizard collects typed values, shows a summary, and loops until the
//! user confirms, mirroring the review-and-redo flow of the rest of the
//! tooling. Persistence lives in [`inputs`]; the wizards only gather data.

pub mod inputs;

use log::debug;

use crate::address::Address;
use crate::output;
use crate::prompt::{
    prompt_address, prompt_number, prompt_string, prompt_yes_no, PromptResult,
};
use crate::term::Console;

pub use inputs::{
    AxelarEndpoint, BaseInputs, CrossChainInputs, HyperlaneEndpoint, LayerZeroEndpoint, Metadata,
    StationConfig,
};

fn base_summary(base: &BaseInputs) {
    output::section_subtitle("Configuration Summary");
    println!("Addresses:");
    output::summary_row("admin", base.admin.as_str());
    output::summary_row("goldenFisher", base.golden_fisher.as_str());
    output::summary_row("activator", base.activator.as_str());
    println!();
    println!("Metadata:");
    output::summary_row("name", &base.metadata.name);
    output::summary_row("principalTokenName", &base.metadata.principal_token_name);
    output::summary_row(
        "principalTokenSymbol",
        &base.metadata.principal_token_symbol,
    );
    output::summary_row(
        "principalTokenAddress",
        base.metadata.principal_token_address.as_str(),
    );
    output::summary_row("totalSupply", &base.metadata.total_supply.to_string());
    output::summary_row("eraTokens", &base.metadata.era_tokens.to_string());
    output::summary_row("reward", &base.metadata.reward.to_string());
    println!();
}

/// Collect admin addresses and instance metadata, looping until confirmed.
pub fn collect_base_inputs<C: Console>(console: &mut C) -> PromptResult<BaseInputs> {
    loop {
        let admin = prompt_address(console, "Enter the admin address:", None)?;
        let golden_fisher = prompt_address(console, "Enter the goldenFisher address:", None)?;
        let activator = prompt_address(console, "Enter the activator address:", None)?;

        let defaults = Metadata::default();
        let mut metadata = defaults.clone();
        metadata.name = prompt_string(
            console,
            &format!("Instance name [{}]:", defaults.name),
            Some(&defaults.name),
        )?;
        metadata.principal_token_name = prompt_string(
            console,
            &format!("Principal token name [{}]:", defaults.principal_token_name),
            Some(&defaults.principal_token_name),
        )?;
        metadata.principal_token_symbol = prompt_string(
            console,
            &format!(
                "Principal token symbol [{}]:",
                defaults.principal_token_symbol
            ),
            Some(&defaults.principal_token_symbol),
        )?;

        if prompt_yes_no(
            console,
            "Configure advanced metadata (totalSupply, eraTokens, reward)?",
            false,
        )? {
            metadata.total_supply = prompt_number(
                console,
                &format!("Total supply [{}]:", metadata.total_supply),
                Some(metadata.total_supply),
            )?;
            metadata.era_tokens = prompt_number(
                console,
                &format!("Era tokens [{}]:", metadata.era_tokens),
                Some(metadata.era_tokens),
            )?;
            metadata.reward = prompt_number(
                console,
                &format!("Reward [{}]:", metadata.reward),
                Some(metadata.reward),
            )?;
        }

        let base = BaseInputs {
            admin,
            golden_fisher,
            activator,
            metadata,
        };
        base_summary(&base);

        if prompt_yes_no(console, "Confirm configuration?", true)? {
            debug!("base configuration confirmed");
            return Ok(base);
        }
    }
}

fn collect_station<C: Console>(console: &mut C, side: &str) -> PromptResult<StationConfig> {
    output::section_subtitle(&format!("{side} chain endpoints"));
    let chain_id = prompt_number(console, &format!("{side} chain id:"), None)?;
    let hyperlane = HyperlaneEndpoint {
        domain_id: prompt_number(console, "Hyperlane domain id:", None)?,
        mailbox: prompt_address(console, "Hyperlane mailbox address:", None)?,
    };
    let layer_zero = LayerZeroEndpoint {
        eid: prompt_number(console, "LayerZero EID:", None)?,
        endpoint: prompt_address(console, "LayerZero endpoint address:", None)?,
    };
    let axelar = AxelarEndpoint {
        chain_name: prompt_string(console, "Axelar chain name:", None)?,
        gateway: prompt_address(console, "Axelar gateway address:", None)?,
        gas_service: prompt_address(console, "Axelar gas service address:", None)?,
    };
    Ok(StationConfig {
        chain_id,
        hyperlane,
        layer_zero,
        axelar,
    })
}

fn station_summary(label: &str, station: &StationConfig) {
    println!("{label} ({}):", crate::chains::describe(station.chain_id));
    output::summary_row(
        "Hyperlane domain id",
        &station.hyperlane.domain_id.to_string(),
    );
    output::summary_row("Hyperlane mailbox", station.hyperlane.mailbox.as_str());
    output::summary_row("LayerZero EID", &station.layer_zero.eid.to_string());
    output::summary_row("LayerZero endpoint", station.layer_zero.endpoint.as_str());
    output::summary_row("Axelar chain", &station.axelar.chain_name);
    output::summary_row("Axelar gateway", station.axelar.gateway.as_str());
    output::summary_row("Axelar gas service", station.axelar.gas_service.as_str());
    println!();
}

/// Collect host/external messaging endpoints, looping until confirmed.
pub fn collect_cross_chain_inputs<C: Console>(
    console: &mut C,
) -> PromptResult<CrossChainInputs> {
    loop {
        let external_admin: Address =
            prompt_address(console, "Enter the external admin address:", None)?;
        let host = collect_station(console, "Host")?;
        let external = collect_station(console, "External")?;

        let inputs = CrossChainInputs {
            external_admin,
            host,
            external,
        };

        output::section_subtitle("Cross-Chain Configuration Summary");
        output::summary_row("External admin", inputs.external_admin.as_str());
        println!();
        station_summary("Host Chain Station", &inputs.host);
        station_summary("External Chain Station", &inputs.external);

        if prompt_yes_no(console, "Confirm cross-chain configuration?", true)? {
            debug!("cross-chain configuration confirmed");
            return Ok(inputs);
        }
    }
}
