use clap::{Args, Parser, Subcommand};

use crate::commands::init::InitOptions;
use crate::installer::PackageManager;

#[derive(Parser)]
#[command(name = "albatroz")]
#[command(version)]
#[command(about = "Albatroz CLI: add UI components to Expo projects")]
pub struct Cli {
    /// Show debug logs on stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize Albatroz in the current Expo project
    Init(InitArgs),
    /// Add a component (lists available components when no name is given)
    Add {
        /// Component name (e.g. alert, button)
        component: Option<String>,

        #[command(flatten)]
        init: InitArgs,
    },
}

/// Flags used whenever the project gets initialized.
#[derive(Args, Debug, Default)]
pub struct InitArgs {
    /// Component repository to download from
    #[arg(long, value_name = "URL")]
    pub base_url: Option<String>,

    /// Package manager for installing lucide-react-native (npm, yarn, pnpm)
    #[arg(long, value_name = "MANAGER")]
    pub package_manager: Option<PackageManager>,
}

impl From<InitArgs> for InitOptions {
    fn from(args: InitArgs) -> Self {
        InitOptions {
            base_url: args.base_url,
            package_manager: args.package_manager,
        }
    }
}
