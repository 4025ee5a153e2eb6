//! Subprocess plumbing shared by all tool invocations.

use std::env;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use log::debug;

use crate::ViennaError;

/// Resolve `program` on PATH, like `which`.
pub fn find_executable(program: &str) -> Result<PathBuf, ViennaError> {
    let paths = env::var_os("PATH").unwrap_or_default();
    for dir in env::split_paths(&paths) {
        let candidate = dir.join(program);
        if candidate.is_file() {
            return Ok(candidate);
        }
    }
    Err(ViennaError::MissingExecutable(program.to_string()))
}

/// Run a ViennaRNA executable with `input` piped to stdin and stdout
/// captured.
///
/// The process runs inside `workdir` so that side-effect files (`dot.ps`)
/// never land in the caller's working directory.
pub fn run_tool(
    program: &str,
    args: &[String],
    input: &str,
    workdir: &Path,
) -> Result<String, ViennaError> {
    let path = find_executable(program)?;
    debug!("{} {} < {:?}", path.display(), args.join(" "), input.trim_end());

    let mut child = Command::new(path)
        .args(args)
        .current_dir(workdir)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()?;

    // Write the input, then drop the handle so the pipe closes and the
    // tool sees EOF.
    if let Some(mut stdin) = child.stdin.take() {
        stdin.write_all(input.as_bytes())?;
    }

    let output = child.wait_with_output()?;
    if !output.status.success() {
        return Err(ViennaError::ToolFailure {
            program: program.to_string(),
            status: output.status.code(),
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        });
    }
    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_executable_missing() {
        let err = find_executable("definitely-not-a-real-tool-name").unwrap_err();
        assert!(matches!(err, ViennaError::MissingExecutable(_)));
    }

    #[test]
    fn test_run_tool_captures_stdout() {
        // `cat` echoes stdin back, standing in for a ViennaRNA tool.
        let scratch = tempfile::tempdir().unwrap();
        let out = run_tool("cat", &[], "GGGGAAAACCCC\n", scratch.path()).unwrap();
        assert_eq!(out, "GGGGAAAACCCC\n");
    }

    #[test]
    fn test_run_tool_nonzero_exit() {
        let scratch = tempfile::tempdir().unwrap();
        let args = vec!["/nonexistent-file".to_string()];
        let err = run_tool("cat", &args, "", scratch.path()).unwrap_err();
        assert!(matches!(err, ViennaError::ToolFailure { status: Some(_), .. }));
    }
}
