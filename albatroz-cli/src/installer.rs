use std::path::Path;
use std::process::{Command, Stdio};
use std::str::FromStr;

use dialoguer::Select;

use crate::error::{AlbatrozError, Result};

/// Icon library the components import from.
pub const ICON_PACKAGE: &str = "lucide-react-native";

/// Package managers `albatroz init` can install dependencies with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PackageManager {
    Npm,
    Yarn,
    Pnpm,
}

impl PackageManager {
    pub const ALL: [PackageManager; 3] = [
        PackageManager::Npm,
        PackageManager::Yarn,
        PackageManager::Pnpm,
    ];

    /// Executable name, without any platform suffix.
    pub fn program(self) -> &'static str {
        match self {
            PackageManager::Npm => "npm",
            PackageManager::Yarn => "yarn",
            PackageManager::Pnpm => "pnpm",
        }
    }

    /// Arguments that add `package` to the project.
    pub fn install_args(self, package: &str) -> Vec<String> {
        let sub = match self {
            PackageManager::Npm => "install",
            PackageManager::Yarn | PackageManager::Pnpm => "add",
        };
        vec![sub.to_string(), package.to_string()]
    }

    fn executable(self) -> String {
        // The JS package managers ship as .cmd shims on Windows.
        if cfg!(windows) {
            format!("{}.cmd", self.program())
        } else {
            self.program().to_string()
        }
    }
}

impl std::fmt::Display for PackageManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.program())
    }
}

impl FromStr for PackageManager {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "npm" => Ok(PackageManager::Npm),
            "yarn" => Ok(PackageManager::Yarn),
            "pnpm" => Ok(PackageManager::Pnpm),
            other => Err(format!("Unknown package manager '{other}' (npm, yarn, pnpm)")),
        }
    }
}

/// Installs a package into the host project.
pub trait Installer {
    fn install(&self, root: &Path, manager: PackageManager, package: &str) -> Result<()>;
}

/// Runs the real package manager as a child process.
///
/// Standard output is discarded; standard error is captured and becomes the
/// error message when the process fails.
#[derive(Debug, Default, Clone, Copy)]
pub struct CommandInstaller;

impl Installer for CommandInstaller {
    fn install(&self, root: &Path, manager: PackageManager, package: &str) -> Result<()> {
        let args = manager.install_args(package);
        tracing::info!(manager = %manager, args = ?args, "Installing dependency");

        let output = Command::new(manager.executable())
            .args(&args)
            .current_dir(root)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::piped())
            .output()
            .map_err(|e| AlbatrozError::Install {
                manager: manager.to_string(),
                message: e.to_string(),
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            let message = if stderr.is_empty() {
                format!("exited with {}", output.status)
            } else {
                stderr
            };
            return Err(AlbatrozError::Install {
                manager: manager.to_string(),
                message,
            });
        }
        Ok(())
    }
}

/// Asks the operator which package manager to use.
pub trait ManagerPrompt {
    fn choose(&self) -> Result<PackageManager>;
}

/// Interactive terminal prompt backed by `dialoguer`.
#[derive(Debug, Default, Clone, Copy)]
pub struct DialoguerPrompt;

impl ManagerPrompt for DialoguerPrompt {
    fn choose(&self) -> Result<PackageManager> {
        let choices = PackageManager::ALL.map(PackageManager::program);
        let idx = Select::new()
            .with_prompt("Package manager")
            .items(&choices)
            .default(0)
            .interact()
            .map_err(|e| AlbatrozError::Prompt(e.to_string()))?;
        Ok(PackageManager::ALL[idx])
    }
}
