//! Deploy workflow: collect configuration, persist it, print next steps.
//!
//! Deployment itself belongs to the contract toolchain; this command stops at
//! writing the input files and the deployment record, then prints the exact
//! command to run.

use std::path::Path;

use anyhow::bail;
use log::info;

use crate::chains;
use crate::output;
use crate::prompt::{prompt_number, prompt_yes_no};
use crate::records::{ChainRef, CrossChainDeploymentRecord, DeploymentRecord};
use crate::term::Console;
use crate::wizard::{self, inputs, BaseInputs, CrossChainInputs};

#[derive(Debug, Clone)]
pub struct DeployArgs {
    pub cross_chain: bool,
    pub skip_input_config: bool,
    pub wallet_name: String,
}

fn base_inputs<C: Console>(
    console: &mut C,
    root: &Path,
    args: &DeployArgs,
) -> anyhow::Result<BaseInputs> {
    if args.skip_input_config {
        let base = BaseInputs::load(root)?;
        output::warning(&format!(
            "Skipping input configuration, reusing {}/{}",
            inputs::INPUT_DIR,
            inputs::BASE_INPUTS_FILE
        ));
        return Ok(base);
    }

    let base = wizard::collect_base_inputs(console)?;
    let path = base.save(root)?;
    output::confirmation(&format!("Input configuration saved to {}", path.display()));

    if !prompt_yes_no(console, "Proceed with deployment?", true)? {
        bail!("deployment cancelled by user");
    }
    Ok(base)
}

fn check_target_chain(chain_id: u64) {
    if chains::is_local(chain_id) {
        output::warning(&format!(
            "Local blockchain detected (chain id {chain_id}), skipping network checks"
        ));
    } else if chains::lookup(chain_id).is_none() {
        output::warning(&format!(
            "Chain id {chain_id} is not in the known network table"
        ));
    }
}

pub fn run<C: Console>(console: &mut C, root: &Path, args: &DeployArgs) -> anyhow::Result<()> {
    if args.cross_chain {
        run_cross(console, root, args)
    } else {
        run_single(console, root, args)
    }
}

fn run_single<C: Console>(console: &mut C, root: &Path, args: &DeployArgs) -> anyhow::Result<()> {
    output::section_title("Deploy Contracts");

    let base = base_inputs(console, root, args)?;

    let chain_id: u64 = prompt_number(console, "Target chain id:", None)?;
    check_target_chain(chain_id);
    output::info_with_chain("Deploying instance", &chains::describe(chain_id));

    let record = DeploymentRecord {
        timestamp: crate::records::now_rfc3339(),
        chain: ChainRef::new(chain_id),
        wallet_name: args.wallet_name.clone(),
        instance_name: base.metadata.name.clone(),
    };
    let path = record.save(root)?;
    info!("deployment record written to {}", path.display());
    output::confirmation(&format!("Deployment information saved to {}", path.display()));

    output::section_subtitle("Next steps");
    println!(
        "Run the deployment script with your configured wallet:\n\n  \
         forge script script/Deploy.s.sol:DeployScript --rpc-url <RPC_URL> \
         --account {} --broadcast\n\n\
         Then register the instance:\n\n  \
         evvm register --core-address <CORE_ADDRESS> --wallet-name {}\n",
        args.wallet_name, args.wallet_name
    );
    Ok(())
}

fn run_cross<C: Console>(console: &mut C, root: &Path, args: &DeployArgs) -> anyhow::Result<()> {
    output::section_title("Deploy Cross-Chain Contracts");

    let base = base_inputs(console, root, args)?;
    let cross: CrossChainInputs = wizard::collect_cross_chain_inputs(console)?;
    let path = cross.save(root)?;
    output::confirmation(&format!(
        "Cross-chain input configuration saved to {}",
        path.display()
    ));

    check_target_chain(cross.host.chain_id);
    check_target_chain(cross.external.chain_id);

    let record = CrossChainDeploymentRecord {
        deployment_type: "cross-chain".to_string(),
        timestamp: crate::records::now_rfc3339(),
        host_chain: ChainRef::new(cross.host.chain_id),
        external_chain: ChainRef::new(cross.external.chain_id),
        wallet_name: args.wallet_name.clone(),
        instance_name: base.metadata.name.clone(),
    };
    let record_path = record.save(root)?;
    info!("cross-chain record written to {}", record_path.display());
    output::confirmation(&format!(
        "Deployment information saved to {}",
        record_path.display()
    ));

    output::section_subtitle("Next steps");
    println!(
        "Run the host and external deployment scripts with your configured wallet:\n\n  \
         forge script script/DeployCrossChain.s.sol:DeployCrossChainScript \
         --rpc-url <HOST_RPC_URL> --account {} --broadcast\n",
        args.wallet_name
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{run, DeployArgs};
    use crate::prompt::testing::ScriptedConsole;
    use crate::prompt::PromptError;
    use crate::wizard::{BaseInputs, Metadata};

    const ADDR: &str = "0x5aaeb6053f3e94c9b9a09f33669435e7ef1beaed";

    fn args() -> DeployArgs {
        DeployArgs {
            cross_chain: false,
            skip_input_config: false,
            wallet_name: "defaultKey".to_string(),
        }
    }

    #[test]
    fn single_deploy_writes_inputs_and_record() {
        let dir = tempfile::tempdir().unwrap();
        let mut console = ScriptedConsole::from_lines(&[
            ADDR, ADDR, ADDR, "", "", "", "n", "y", // wizard + confirm
            "y",        // proceed
            "11155111", // chain id
        ]);
        run(&mut console, dir.path(), &args()).unwrap();

        assert!(dir.path().join("input/BaseInputs.json").exists());
        let record = std::fs::read_to_string(
            dir.path().join("output/deployments/evvmDeployment.json"),
        )
        .unwrap();
        assert!(record.contains("\"wallet_name\": \"defaultKey\""));
        assert!(record.contains("Ethereum Sepolia"));
    }

    #[test]
    fn declining_the_proceed_step_aborts_without_a_record() {
        let dir = tempfile::tempdir().unwrap();
        let mut console = ScriptedConsole::from_lines(&[
            ADDR, ADDR, ADDR, "", "", "", "n", "y", // wizard + confirm
            "n", // do not proceed
        ]);
        let err = run(&mut console, dir.path(), &args()).unwrap_err();
        assert!(err.to_string().contains("cancelled"));
        assert!(!dir
            .path()
            .join("output/deployments/evvmDeployment.json")
            .exists());
    }

    #[test]
    fn skip_input_config_requires_an_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let mut console = ScriptedConsole::new(&[]);
        let mut deploy_args = args();
        deploy_args.skip_input_config = true;
        assert!(run(&mut console, dir.path(), &deploy_args).is_err());
    }

    #[test]
    fn skip_input_config_reuses_saved_inputs() {
        let dir = tempfile::tempdir().unwrap();
        let base = BaseInputs {
            admin: ADDR.parse().unwrap(),
            golden_fisher: ADDR.parse().unwrap(),
            activator: ADDR.parse().unwrap(),
            metadata: Metadata::default(),
        };
        base.save(dir.path()).unwrap();

        let mut console = ScriptedConsole::from_lines(&["31337"]);
        let mut deploy_args = args();
        deploy_args.skip_input_config = true;
        run(&mut console, dir.path(), &deploy_args).unwrap();
        assert!(dir
            .path()
            .join("output/deployments/evvmDeployment.json")
            .exists());
    }

    #[test]
    fn ctrl_c_during_the_wizard_surfaces_cancellation() {
        let dir = tempfile::tempdir().unwrap();
        let mut console = ScriptedConsole::new(&[b"\x03"]);
        let err = run(&mut console, dir.path(), &args()).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<PromptError>(),
            Some(PromptError::Cancelled)
        ));
    }

    #[test]
    fn cross_chain_deploy_writes_both_artifacts() {
        let dir = tempfile::tempdir().unwrap();
        let mut console = ScriptedConsole::from_lines(&[
            ADDR, ADDR, ADDR, "", "", "", "n", "y", // base wizard
            "y", // proceed
            ADDR, // external admin
            "11155111", "1", ADDR, "40161", ADDR, "sepolia", ADDR, ADDR, // host
            "421614", "2", ADDR, "40231", ADDR, "arbitrum", ADDR, ADDR, // external
            "y", // confirm cross-chain
        ]);
        let mut deploy_args = args();
        deploy_args.cross_chain = true;
        run(&mut console, dir.path(), &deploy_args).unwrap();

        assert!(dir.path().join("input/CrossChainInputs.json").exists());
        let record = std::fs::read_to_string(
            dir.path()
                .join("output/deployments/evvmCrossChainDeployment.json"),
        )
        .unwrap();
        assert!(record.contains("\"deployment_type\": \"cross-chain\""));
        assert!(record.contains("Arbitrum Sepolia"));
    }
}
