//! # Tool Path Resolver
//!
//! This module handles finding the Ghostscript executable:
//! - Explicit path from the configuration
//! - `OPTIMIZE_PDF_GS` environment variable (direct override)
//! - System-installed binaries on `PATH`
//!
//! When nothing is found the bare command name is returned, so the failure
//! shows up at spawn time and goes through the configured failure policy.

use std::env;
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Environment variable that points at a specific Ghostscript binary
pub const GHOSTSCRIPT_ENV: &str = "OPTIMIZE_PDF_GS";

/// Ghostscript path resolver
pub struct ToolPathResolver {
    /// Path forced by the configuration, takes precedence over everything
    override_path: Option<PathBuf>,
}

impl ToolPathResolver {
    /// Create a new path resolver
    pub fn new(override_path: Option<PathBuf>) -> Self {
        Self { override_path }
    }

    /// Command names Ghostscript is installed under on this platform
    pub fn candidate_names() -> &'static [&'static str] {
        if cfg!(windows) {
            &["gswin64c", "gswin32c", "gs"]
        } else {
            &["gs"]
        }
    }

    /// Resolve the Ghostscript executable
    pub fn resolve_ghostscript(&self) -> PathBuf {
        self.resolve_from(env::var_os(GHOSTSCRIPT_ENV), env::var_os("PATH"))
    }

    /// Resolution order: configured path, env override, PATH search, bare name
    fn resolve_from(&self, env_override: Option<OsString>, path_var: Option<OsString>) -> PathBuf {
        if let Some(ref path) = self.override_path {
            debug!("Using configured Ghostscript: {:?}", path);
            return path.clone();
        }

        if let Some(path) = env_override.filter(|v| !v.is_empty()) {
            let path = PathBuf::from(path);
            debug!("Using Ghostscript from {}: {:?}", GHOSTSCRIPT_ENV, path);
            return path;
        }

        if let Some(ref path_var) = path_var {
            for name in Self::candidate_names() {
                if let Some(system_path) = Self::find_in_dirs(name, env::split_paths(path_var)) {
                    debug!("Using system tool: {} -> {:?}", name, system_path);
                    return system_path;
                }
            }
        }

        // Spawn-time MissingDependency carries the install hint
        let fallback = Self::candidate_names()[0];
        debug!("Ghostscript not found in PATH, falling back to '{}'", fallback);
        PathBuf::from(fallback)
    }

    fn find_in_dirs<I>(tool_name: &str, dirs: I) -> Option<PathBuf>
    where
        I: IntoIterator<Item = PathBuf>,
    {
        let extension = if cfg!(windows) { ".exe" } else { "" };
        let tool_with_ext = format!("{}{}", tool_name, extension);

        dirs.into_iter()
            .map(|dir| dir.join(&tool_with_ext))
            .find(|path| Self::is_executable(path))
    }

    /// Same rule as execvp: regular file with at least one execute bit
    #[cfg(unix)]
    fn is_executable(path: &Path) -> bool {
        use std::os::unix::fs::PermissionsExt;

        path.metadata()
            .map(|metadata| metadata.is_file() && metadata.permissions().mode() & 0o111 != 0)
            .unwrap_or(false)
    }

    #[cfg(not(unix))]
    fn is_executable(path: &Path) -> bool {
        path.is_file()
    }

    /// Installation instructions for the current platform
    pub fn install_instructions() -> &'static str {
        if cfg!(target_os = "linux") {
            "sudo apt-get install ghostscript"
        } else if cfg!(target_os = "macos") {
            "brew install ghostscript"
        } else if cfg!(windows) {
            "download the installer from https://ghostscript.com/releases/gsdnld.html"
        } else {
            "install Ghostscript with your system package manager"
        }
    }

    /// Message for a tool that could not be found at spawn time
    pub fn missing_tool_message(tool: &Path) -> String {
        format!(
            "Tool '{}' not found. To install Ghostscript: {}",
            tool.display(),
            Self::install_instructions()
        )
    }
}

impl Default for ToolPathResolver {
    fn default() -> Self {
        Self::new(None)
    }
}
