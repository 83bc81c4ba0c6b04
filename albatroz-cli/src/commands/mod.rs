//! Command implementations for the `albatroz` CLI.
//!
//! Each submodule corresponds to a top-level CLI command. Commands take a
//! [`Backends`] so the prompt, the package manager and the component
//! download can be swapped out.

use crate::fetch::{ComponentSource, HttpSource};
use crate::installer::{CommandInstaller, DialoguerPrompt, Installer, ManagerPrompt};

/// Component installation — `albatroz add [component]`.
///
/// Downloads one cataloged component into `src/components/ui/`,
/// initializing the project first when `albatroz.json` is missing.
pub mod add;

/// Project initialization — `albatroz init`.
///
/// Validates the Expo project, installs `lucide-react-native` when absent
/// and writes `albatroz.json`.
pub mod init;

/// Side-effecting services used by the commands.
#[derive(Clone, Copy)]
pub struct Backends<'a> {
    pub prompt: &'a dyn ManagerPrompt,
    pub installer: &'a dyn Installer,
    pub source: &'a dyn ComponentSource,
}

impl Backends<'_> {
    /// Run `f` with the terminal prompt, the real package manager and HTTP.
    pub fn with_system<T>(f: impl FnOnce(Backends<'_>) -> T) -> T {
        let source = HttpSource::new();
        f(Backends {
            prompt: &DialoguerPrompt,
            installer: &CommandInstaller,
            source: &source,
        })
    }
}

impl std::fmt::Debug for Backends<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Backends").finish_non_exhaustive()
    }
}
