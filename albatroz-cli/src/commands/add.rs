use std::path::{Path, PathBuf};

use colored::Colorize;

use super::init::{self, InitOptions};
use super::Backends;
use crate::catalog::{Catalog, Component};
use crate::config::ConfigStore;
use crate::error::Result;
use crate::project::Project;

/// Destination of installed components, relative to the project root.
pub const COMPONENTS_DIR: &str = "src/components/ui";

/// What `albatroz add` ended up doing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddOutcome {
    /// No component was named; the catalog was printed.
    Listed,
    /// The (lower-cased) identifier is not in the catalog.
    Unavailable(String),
    /// The component was downloaded to `path`. `replaced` is `true` when an
    /// existing file was overwritten.
    Written { path: PathBuf, replaced: bool },
}

/// Add a component to the project in the current directory.
pub fn run(component: Option<&str>, init_opts: &InitOptions) -> Result<AddOutcome> {
    let root = std::env::current_dir()?;
    Backends::with_system(|backends| execute(&root, component, init_opts, backends))
}

/// Add `component` to the project rooted at `root`.
///
/// Unknown identifiers are reported and return [`AddOutcome::Unavailable`]
/// before anything else happens: no initialization, no download, no write.
/// Otherwise the project is initialized first when `albatroz.json` is
/// missing, and the command carries on in the same invocation.
/// Existing component files are always overwritten.
pub fn execute(
    root: &Path,
    component: Option<&str>,
    init_opts: &InitOptions,
    backends: Backends<'_>,
) -> Result<AddOutcome> {
    Project::open(root)?;

    let catalog = Catalog::new();
    let component = match component {
        Some(id) => match catalog.lookup(id) {
            Some(component) => Some(component),
            None => {
                println!(
                    "{} Component '{}' is not available.",
                    "!".yellow(),
                    id.cyan()
                );
                print_catalog(&catalog);
                return Ok(AddOutcome::Unavailable(id.to_lowercase()));
            }
        },
        None => None,
    };

    let store = ConfigStore::in_dir(root);
    let config = if store.exists() {
        store.read()?
    } else {
        println!(
            "{} No {} found, initializing the project first",
            "!".yellow(),
            store.path().display()
        );
        init::execute(root, init_opts, backends)?
    };

    let Some(component) = component else {
        print_catalog(&catalog);
        return Ok(AddOutcome::Listed);
    };

    println!("{} Downloading {}", "->".blue(), component.name().cyan());
    let body = backends.source.fetch(&config.base_url, &component)?;
    let (path, replaced) = write_component(root, &component, &body)?;

    let shown = Path::new(COMPONENTS_DIR).join(component.file_name());
    let verb = if replaced { "Replaced" } else { "Added" };
    println!(
        "{} {verb} {} at {}",
        "✓".green(),
        component.name().cyan(),
        shown.display()
    );

    Ok(AddOutcome::Written { path, replaced })
}

/// Write `body` verbatim to `<root>/src/components/ui/<Name>.tsx`.
///
/// Returns the written path and whether a file already existed there.
pub fn write_component(
    root: &Path,
    component: &Component,
    body: &[u8],
) -> Result<(PathBuf, bool)> {
    let dir = root.join(COMPONENTS_DIR);
    std::fs::create_dir_all(&dir)?;

    let path = dir.join(component.file_name());
    let replaced = path.exists();
    std::fs::write(&path, body)?;
    tracing::debug!(path = %path.display(), replaced, "Wrote component");

    Ok((path, replaced))
}

fn print_catalog(catalog: &Catalog) {
    println!("Available components:");
    for name in catalog.names() {
        println!("  - {}", name.cyan());
    }
}
