use std::path::PathBuf;

/// Error type shared by every `albatroz` command.
#[derive(Debug)]
pub enum AlbatrozError {
    /// `package.json` is missing from the project root.
    ManifestNotFound(PathBuf),
    /// `package.json` exists but could not be parsed.
    ManifestInvalid { path: PathBuf, reason: String },
    /// The manifest does not declare the framework dependency.
    MissingFramework { dependency: &'static str },
    /// `albatroz.json` is malformed or holds an unusable value.
    Config(String),
    /// The remote repository answered 404 for a cataloged component.
    ComponentNotFound(String),
    /// Any other failure while talking to the remote repository.
    Http(String),
    /// The package manager could not install a dependency.
    Install { manager: String, message: String },
    /// The interactive prompt was aborted or could not be shown.
    Prompt(String),
    Io(std::io::Error),
}

impl AlbatrozError {
    /// Returns `true` for errors caused by the host project itself rather
    /// than by a single command step.
    pub fn is_environment(&self) -> bool {
        matches!(
            self,
            AlbatrozError::ManifestNotFound(_)
                | AlbatrozError::ManifestInvalid { .. }
                | AlbatrozError::MissingFramework { .. }
        )
    }
}

impl std::fmt::Display for AlbatrozError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AlbatrozError::ManifestNotFound(path) => {
                write!(f, "package.json not found at {}", path.display())
            }
            AlbatrozError::ManifestInvalid { path, reason } => {
                write!(f, "Could not read {}: {reason}", path.display())
            }
            AlbatrozError::MissingFramework { dependency } => {
                write!(f, "Not an Expo project: missing '{dependency}'")
            }
            AlbatrozError::Config(msg) => write!(f, "Invalid configuration: {msg}"),
            AlbatrozError::ComponentNotFound(_) => write!(f, "Component not found in repository"),
            AlbatrozError::Http(msg) => write!(f, "Download failed: {msg}"),
            AlbatrozError::Install { manager, message } => {
                write!(f, "{manager} install failed: {message}")
            }
            AlbatrozError::Prompt(msg) => write!(f, "Prompt failed: {msg}"),
            AlbatrozError::Io(e) => write!(f, "I/O error: {e}"),
        }
    }
}

impl std::error::Error for AlbatrozError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AlbatrozError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for AlbatrozError {
    fn from(e: std::io::Error) -> Self {
        AlbatrozError::Io(e)
    }
}

pub type Result<T> = std::result::Result<T, AlbatrozError>;
