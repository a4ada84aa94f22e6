use std::path::Path;
use std::process::ExitCode;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};

use forgehand::address::Address;
use forgehand::commands::{deploy, register, DeployArgs, RegisterArgs};
use forgehand::prompt::{prompt_select, PromptError};
use forgehand::term::{install_cleanup_hooks, StdioConsole};
use forgehand::{logging, output};

#[derive(Parser)]
#[command(version, about, long_about = None)]
struct UserArgs {
    #[command(subcommand)]
    command: Option<Command>,

    /// Verbose
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Deploy a new instance
    Deploy(DeployFlags),

    /// Register a deployed instance
    Register(RegisterFlags),
}

#[derive(Args)]
struct DeployFlags {
    /// Deploy host and external chain stations
    #[arg(short, long)]
    cross_chain: bool,

    /// Reuse input/BaseInputs.json instead of running the wizard
    #[arg(short, long)]
    skip_input_config: bool,

    /// Wallet account name for the printed toolchain commands
    #[arg(short = 'n', long, default_value = "defaultKey")]
    wallet_name: String,
}

#[derive(Args)]
struct RegisterFlags {
    /// Core contract address; prompted for when omitted
    #[arg(long)]
    core_address: Option<Address>,

    /// Wallet account name for the printed toolchain commands
    #[arg(short = 'n', long, default_value = "defaultKey")]
    wallet_name: String,
}

const MENU_DEPLOY: &str = "Deploy a new instance";
const MENU_DEPLOY_CROSS: &str = "Deploy a cross-chain instance";
const MENU_REGISTER: &str = "Register a deployed instance";
const MENU_EXIT: &str = "Exit";

fn main_menu(console: &mut StdioConsole, root: &Path) -> Result<()> {
    output::banner();
    loop {
        let choice = prompt_select(
            console,
            "What do you want to do?",
            &[MENU_DEPLOY, MENU_DEPLOY_CROSS, MENU_REGISTER, MENU_EXIT],
        )?;
        match choice.as_str() {
            MENU_DEPLOY | MENU_DEPLOY_CROSS => {
                let args = DeployArgs {
                    cross_chain: choice == MENU_DEPLOY_CROSS,
                    skip_input_config: false,
                    wallet_name: "defaultKey".to_string(),
                };
                deploy::run(console, root, &args)?;
            }
            MENU_REGISTER => {
                let args = RegisterArgs {
                    core_address: None,
                    wallet_name: "defaultKey".to_string(),
                };
                register::run(console, root, &args)?;
            }
            _ => return Ok(()),
        }
    }
}

fn run(args: UserArgs) -> Result<()> {
    let root = std::env::current_dir()?;
    let mut console = StdioConsole::new();

    match args.command {
        Some(Command::Deploy(flags)) => deploy::run(
            &mut console,
            &root,
            &DeployArgs {
                cross_chain: flags.cross_chain,
                skip_input_config: flags.skip_input_config,
                wallet_name: flags.wallet_name,
            },
        ),
        Some(Command::Register(flags)) => register::run(
            &mut console,
            &root,
            &RegisterArgs {
                core_address: flags.core_address,
                wallet_name: flags.wallet_name,
            },
        ),
        None => main_menu(&mut console, &root),
    }
}

fn main() -> ExitCode {
    let args = UserArgs::parse();
    logging::init(args.verbose);

    let _cleanup = match install_cleanup_hooks() {
        Ok(guard) => guard,
        Err(err) => {
            output::error(&format!("failed to install terminal cleanup hooks: {err}"));
            return ExitCode::FAILURE;
        }
    };

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            if matches!(
                err.downcast_ref::<PromptError>(),
                Some(PromptError::Cancelled)
            ) {
                output::abort_notice();
                return ExitCode::from(130);
            }
            output::error(&format!("{err:#}"));
            ExitCode::FAILURE
        }
    }
}
