use std::path::Path;

use colored::Colorize;

use super::Backends;
use crate::config::{Config, ConfigStore};
use crate::error::Result;
use crate::installer::{PackageManager, ICON_PACKAGE};
use crate::project::{Project, FRAMEWORK_PACKAGE};

/// Options for `albatroz init`, resolved from CLI flags.
#[derive(Debug, Clone, Default)]
pub struct InitOptions {
    /// Overrides the default component repository.
    pub base_url: Option<String>,
    /// Skips the interactive package manager prompt.
    pub package_manager: Option<PackageManager>,
}

/// Initialize the project in the current directory.
pub fn run(opts: &InitOptions) -> Result<Config> {
    let root = std::env::current_dir()?;
    Backends::with_system(|backends| execute(&root, opts, backends))
}

/// Initialize the project rooted at `root`.
///
/// 1. Validates that `root` is an Expo project.
/// 2. Builds a fresh [`Config`] and records which dependencies are present.
/// 3. When `lucide-react-native` is missing, asks for a package manager
///    (unless one was given) and installs it.
/// 4. Writes `albatroz.json`.
///
/// Nothing is written if any step fails.
pub fn execute(root: &Path, opts: &InitOptions, backends: Backends<'_>) -> Result<Config> {
    let project = Project::open(root)?;
    let store = ConfigStore::in_dir(root);

    let mut config = Config::default();
    if let Some(base_url) = &opts.base_url {
        config.base_url = base_url.clone();
    }
    config.validate()?;

    let manifest = project.manifest();
    config.dependencies.expo = manifest.has_dependency(FRAMEWORK_PACKAGE);
    config.dependencies.lucide_react_native =
        manifest.has_dependency(ICON_PACKAGE) || previously_installed(&store);

    if config.dependencies.lucide_react_native {
        tracing::debug!(package = ICON_PACKAGE, "Dependency already present");
    } else {
        let manager = match opts.package_manager {
            Some(manager) => manager,
            None => backends.prompt.choose()?,
        };
        println!(
            "{} Installing {} with {}",
            "->".blue(),
            ICON_PACKAGE.cyan(),
            manager.to_string().green()
        );
        backends.installer.install(project.root(), manager, ICON_PACKAGE)?;
        config.dependencies.lucide_react_native = true;
        println!("{} Installed {}", "✓".green(), ICON_PACKAGE.cyan());
    }

    store.write(&config)?;
    println!(
        "{} Project initialized, configuration saved to {}",
        "✓".green(),
        store.path().display().to_string().cyan()
    );

    Ok(config)
}

/// Whether an earlier `init` already installed the icon library.
fn previously_installed(store: &ConfigStore) -> bool {
    if !store.exists() {
        return false;
    }
    match store.read() {
        Ok(config) => config.dependencies.lucide_react_native,
        Err(e) => {
            tracing::warn!(error = %e, "Ignoring unreadable config");
            false
        }
    }
}
