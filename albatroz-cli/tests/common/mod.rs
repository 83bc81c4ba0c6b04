#![allow(dead_code)]

use albatroz_cli::catalog::Component;
use albatroz_cli::commands::Backends;
use albatroz_cli::fetch::{component_url, ComponentSource};
use albatroz_cli::installer::{Installer, ManagerPrompt, PackageManager};
use albatroz_cli::{AlbatrozError, Result};
use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub struct CwdGuard {
    original: PathBuf,
}

impl CwdGuard {
    pub fn new(path: &Path) -> Self {
        let original = std::env::current_dir().unwrap();
        std::env::set_current_dir(path).unwrap();
        CwdGuard { original }
    }
}

impl Drop for CwdGuard {
    fn drop(&mut self) {
        let _ = std::env::set_current_dir(&self.original);
    }
}

pub const EXPO_ONLY: &str = r#"{"name":"app","dependencies":{"expo":"~51.0.0"}}"#;
pub const EXPO_WITH_ICONS: &str =
    r#"{"dependencies":{"expo":"1.0.0","lucide-react-native":"2.0.0"}}"#;

pub fn write_manifest(root: &Path, json: &str) {
    fs::write(root.join("package.json"), json).unwrap();
}

/// Prompt that answers with a fixed choice, or fails when it has none.
#[derive(Default)]
pub struct FakePrompt {
    pub choice: Option<PackageManager>,
    pub calls: Cell<usize>,
}

impl ManagerPrompt for FakePrompt {
    fn choose(&self) -> Result<PackageManager> {
        self.calls.set(self.calls.get() + 1);
        self.choice.ok_or(AlbatrozError::Prompt("no answer".into()))
    }
}

/// Records install requests; optionally fails every one.
#[derive(Default)]
pub struct FakeInstaller {
    pub failure: Option<String>,
    pub calls: RefCell<Vec<(PackageManager, String)>>,
}

impl Installer for FakeInstaller {
    fn install(&self, _root: &Path, manager: PackageManager, package: &str) -> Result<()> {
        self.calls.borrow_mut().push((manager, package.to_string()));
        match &self.failure {
            Some(message) => Err(AlbatrozError::Install {
                manager: manager.to_string(),
                message: message.clone(),
            }),
            None => Ok(()),
        }
    }
}

pub enum Reply {
    Body(Vec<u8>),
    NotFound,
    Fail(String),
}

/// Serves canned replies keyed by component slug and records requested URLs.
#[derive(Default)]
pub struct FakeSource {
    pub replies: HashMap<String, Reply>,
    pub requests: RefCell<Vec<String>>,
}

impl FakeSource {
    pub fn reply(&mut self, slug: &str, reply: Reply) {
        self.replies.insert(slug.to_string(), reply);
    }
}

impl ComponentSource for FakeSource {
    fn fetch(&self, base_url: &str, component: &Component) -> Result<Vec<u8>> {
        let url = component_url(base_url, component);
        self.requests.borrow_mut().push(url);
        let slug = component.slug();
        match self.replies.get(&slug) {
            Some(Reply::Body(body)) => Ok(body.clone()),
            Some(Reply::NotFound) | None => Err(AlbatrozError::ComponentNotFound(slug)),
            Some(Reply::Fail(msg)) => Err(AlbatrozError::Http(msg.clone())),
        }
    }
}

/// A temporary project directory plus fake backends.
pub struct Fixture {
    pub tmp: TempDir,
    pub prompt: FakePrompt,
    pub installer: FakeInstaller,
    pub source: FakeSource,
}

impl Fixture {
    pub fn new(manifest: &str) -> Self {
        let tmp = TempDir::new().unwrap();
        write_manifest(tmp.path(), manifest);
        Fixture {
            tmp,
            prompt: FakePrompt::default(),
            installer: FakeInstaller::default(),
            source: FakeSource::default(),
        }
    }

    pub fn root(&self) -> &Path {
        self.tmp.path()
    }

    pub fn backends(&self) -> Backends<'_> {
        Backends {
            prompt: &self.prompt,
            installer: &self.installer,
            source: &self.source,
        }
    }

    pub fn config_path(&self) -> PathBuf {
        self.root().join("albatroz.json")
    }
}
