use std::path::{Path, PathBuf};
use std::process::Command;

use crate::config::ICONUTIL;
use crate::error::IconError;
use crate::logger::log_command;

/// What the bundling tool reported. A non-zero exit is an outcome, not an `Err`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageOutcome {
    pub success: bool,
    pub diagnostics: String,
}

pub trait Packager {
    /// Short tool name used in operator messages.
    fn name(&self) -> &str;
    fn package(&self, source_dir: &Path, destination: &Path) -> Result<PackageOutcome, IconError>;
}

/// macOS `iconutil -c icns <iconset> -o <icns>`.
pub struct IconUtil {
    program: PathBuf,
}

impl IconUtil {
    pub fn with_program(program: impl Into<PathBuf>) -> Self {
        Self { program: program.into() }
    }
}

impl Default for IconUtil {
    fn default() -> Self {
        Self::with_program(ICONUTIL)
    }
}

impl Packager for IconUtil {
    fn name(&self) -> &str {
        ICONUTIL
    }

    fn package(&self, source_dir: &Path, destination: &Path) -> Result<PackageOutcome, IconError> {
        let mut cmd = Command::new(&self.program);
        cmd.arg("-c").arg("icns").arg(source_dir).arg("-o").arg(destination);
        log_command(&cmd);
        // blocks until the tool exits; no timeout
        let output = cmd.output().map_err(|source| IconError::Spawn {
            program: self.program.display().to_string(),
            source,
        })?;
        Ok(PackageOutcome {
            success: output.status.success(),
            diagnostics: String::from_utf8_lossy(&output.stderr).trim_end().to_string(),
        })
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use std::fs;
    use std::os::unix::fs::PermissionsExt;
    use tempfile::tempdir;

    fn stub(dir: &Path, body: &str) -> PathBuf {
        let path = dir.join("iconutil-stub");
        fs::write(&path, format!("#!/bin/sh\n{body}\n")).unwrap();
        let mut perms = fs::metadata(&path).unwrap().permissions();
        perms.set_mode(0o755);
        fs::set_permissions(&path, perms).unwrap();
        path
    }

    #[test]
    fn passes_mode_flag_and_paths() {
        let dir = tempdir().unwrap();
        let args_file = dir.path().join("args.txt");
        let tool = stub(dir.path(), &format!("echo \"$@\" > '{}'", args_file.display()));
        let outcome = IconUtil::with_program(tool)
            .package(Path::new("/tmp/A.iconset"), Path::new("/tmp/A.icns"))
            .unwrap();
        assert!(outcome.success);
        assert_eq!(
            fs::read_to_string(args_file).unwrap().trim(),
            "-c icns /tmp/A.iconset -o /tmp/A.icns"
        );
    }

    #[test]
    fn captures_stderr_on_failure() {
        let dir = tempdir().unwrap();
        let tool = stub(dir.path(), "echo 'bad format' >&2\nexit 1");
        let outcome = IconUtil::with_program(tool)
            .package(dir.path(), &dir.path().join("out.icns"))
            .unwrap();
        assert_eq!(
            outcome,
            PackageOutcome { success: false, diagnostics: "bad format".to_string() }
        );
    }

    #[test]
    fn missing_tool_is_spawn_error() {
        let dir = tempdir().unwrap();
        let err = IconUtil::with_program(dir.path().join("no-such-tool"))
            .package(dir.path(), &dir.path().join("out.icns"))
            .unwrap_err();
        assert!(matches!(err, IconError::Spawn { .. }));
    }
}
