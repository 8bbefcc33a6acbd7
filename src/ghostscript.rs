//! # Ghostscript Processing Module
//!
//! Questo modulo gestisce la compressione PDF tramite Ghostscript.
//!
//! ## Pipeline di compressione:
//! 1. Costruisce la lista fissa di argomenti (`pdfwrite`, compatibilità 1.4)
//! 2. Avvia Ghostscript e attende la terminazione (nessun timeout)
//! 3. Traduce l'exit status in `OptimizeError`
//!
//! stdout/stderr del processo sono ereditati e non vengono mai analizzati.
//!
//! ## Comando:
//! ```text
//! gs -sDEVICE=pdfwrite -dCompatibilityLevel=1.4 -dPDFSETTINGS=/<quality>
//!    -dNOPAUSE -dBATCH -sOutputFile=<output> <input>
//! ```

use crate::error::OptimizeError;
use crate::job::Job;
use crate::tool_resolver::ToolPathResolver;
use std::ffi::OsString;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::process::Command;
use tracing::debug;

/// Runs Ghostscript against single jobs
#[derive(Debug, Clone)]
pub struct Ghostscript {
    program: PathBuf,
}

impl Ghostscript {
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self { program: program.into() }
    }

    pub fn program(&self) -> &Path {
        &self.program
    }

    /// Full argument list for one conversion
    pub fn command_args(job: &Job, output_path: &Path) -> Vec<OsString> {
        let mut output_arg = OsString::from("-sOutputFile=");
        output_arg.push(output_path);

        vec![
            OsString::from("-sDEVICE=pdfwrite"),
            OsString::from("-dCompatibilityLevel=1.4"),
            OsString::from(format!("-dPDFSETTINGS=/{}", job.quality)),
            OsString::from("-dNOPAUSE"),
            OsString::from("-dBATCH"),
            output_arg,
            job.input_path.as_os_str().to_os_string(),
        ]
    }

    /// Compress `job` into `output_path`, blocking until Ghostscript exits
    pub async fn compress(&self, job: &Job, output_path: &Path) -> Result<(), OptimizeError> {
        let args = Self::command_args(job, output_path);
        debug!("Running {} {:?}", self.program.display(), args);

        let start_time = std::time::Instant::now();

        let status = Command::new(&self.program)
            .args(&args)
            .status()
            .await
            .map_err(|e| self.spawn_error(e))?;

        debug!(
            "{} finished in {:.1}s with {}",
            self.program.display(),
            start_time.elapsed().as_secs_f64(),
            status
        );

        if !status.success() {
            return Err(OptimizeError::ToolFailed {
                command: self.program.display().to_string(),
                status,
            });
        }

        Ok(())
    }

    fn spawn_error(&self, error: std::io::Error) -> OptimizeError {
        if error.kind() == ErrorKind::NotFound {
            OptimizeError::MissingDependency(ToolPathResolver::missing_tool_message(&self.program))
        } else {
            OptimizeError::Spawn {
                tool: self.program.display().to_string(),
                error,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Quality;

    #[test]
    fn test_command_args() {
        let job = Job::new("in/a.pdf", Quality::Screen);
        let args = Ghostscript::command_args(&job, Path::new("in/a_optimized_q_screen.pdf"));

        let expected: Vec<OsString> = [
            "-sDEVICE=pdfwrite",
            "-dCompatibilityLevel=1.4",
            "-dPDFSETTINGS=/screen",
            "-dNOPAUSE",
            "-dBATCH",
            "-sOutputFile=in/a_optimized_q_screen.pdf",
            "in/a.pdf",
        ]
        .iter()
        .map(OsString::from)
        .collect();

        assert_eq!(args, expected);
    }

    #[test]
    fn test_command_args_follow_quality() {
        let job = Job::new("b.pdf", Quality::Prepress);
        let args = Ghostscript::command_args(&job, Path::new("out.pdf"));
        assert!(args.contains(&OsString::from("-dPDFSETTINGS=/prepress")));
        assert_eq!(args.last(), Some(&OsString::from("b.pdf")));
    }

    #[tokio::test]
    async fn test_missing_binary_is_missing_dependency() {
        let dir = tempfile::TempDir::new().unwrap();
        let gs = Ghostscript::new(dir.path().join("no-such-gs"));
        let job = Job::new(dir.path().join("a.pdf"), Quality::Ebook);

        let err = gs
            .compress(&job, &dir.path().join("a_optimized_q_ebook.pdf"))
            .await
            .unwrap_err();

        assert!(matches!(err, OptimizeError::MissingDependency(_)));
        assert!(!err.is_per_job());
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_non_executable_binary_is_spawn_error() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::TempDir::new().unwrap();
        let program = dir.path().join("gs");
        std::fs::write(&program, b"#!/bin/sh\nexit 0\n").unwrap();
        std::fs::set_permissions(&program, std::fs::Permissions::from_mode(0o644)).unwrap();

        let gs = Ghostscript::new(&program);
        let job = Job::new(dir.path().join("a.pdf"), Quality::Ebook);
        let err = gs
            .compress(&job, &dir.path().join("a_optimized_q_ebook.pdf"))
            .await
            .unwrap_err();

        assert!(matches!(err, OptimizeError::Spawn { .. }));
        let chain = format!("{:#}", anyhow::Error::from(err));
        assert_eq!(chain.matches("os error 13").count(), 1);
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_non_zero_exit_is_tool_failure() {
        let gs = Ghostscript::new("false");
        let job = Job::new("a.pdf", Quality::Ebook);

        let err = gs.compress(&job, Path::new("a_optimized_q_ebook.pdf")).await.unwrap_err();

        assert!(err.is_per_job());
        assert!(err.to_string().contains("non-zero exit status: 1"));
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_zero_exit_is_success() {
        let gs = Ghostscript::new("true");
        let job = Job::new("a.pdf", Quality::Ebook);

        assert!(gs.compress(&job, Path::new("a_optimized_q_ebook.pdf")).await.is_ok());
    }
}
