//! Register workflow: record the core contract for registry submission.

use std::path::Path;

use log::info;

use crate::address::Address;
use crate::chains;
use crate::output;
use crate::prompt::{prompt_address, prompt_number};
use crate::records::{ChainRef, RegistrationRecord};
use crate::term::Console;

#[derive(Debug, Clone)]
pub struct RegisterArgs {
    /// Core contract address; prompted for when absent.
    pub core_address: Option<Address>,
    pub wallet_name: String,
}

pub fn run<C: Console>(console: &mut C, root: &Path, args: &RegisterArgs) -> anyhow::Result<()> {
    output::section_title("Register Instance");

    let core_address = match &args.core_address {
        Some(address) => address.clone(),
        None => prompt_address(console, "Enter the core contract address:", None)?,
    };
    let chain_id: u64 = prompt_number(console, "Chain id the instance is deployed on:", None)?;

    output::info_with_chain("Registering instance", &chains::describe(chain_id));

    let record = RegistrationRecord {
        timestamp: crate::records::now_rfc3339(),
        chain: ChainRef::new(chain_id),
        core_address: core_address.clone(),
    };
    let path = record.save(root)?;
    info!("registration record written to {}", path.display());
    output::confirmation(&format!(
        "Registration information saved to {}",
        path.display()
    ));

    output::section_subtitle("Next steps");
    println!(
        "Submit the registration with your configured wallet:\n\n  \
         forge script script/Registration.s.sol:RegistrationScript \
         --rpc-url <RPC_URL> --account {} --broadcast \
         --sig \"run(address)\" {}\n",
        args.wallet_name, core_address
    );
    Ok(())
}
