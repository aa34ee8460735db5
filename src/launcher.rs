use std::fmt;
use std::path::{Path, PathBuf};
use std::process::{Child, Command};

#[cfg(windows)]
const CREATE_NEW_CONSOLE: u32 = 0x0000_0010;
#[cfg(windows)]
const CREATE_NEW_PROCESS_GROUP: u32 = 0x0000_0200;

/// Extensions that need a command interpreter.
pub const SCRIPT_EXTENSIONS: &[&str] = &["bat", "cmd"];

/// How a file is handed to the operating system.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LaunchKind {
    /// Run through the platform command shell.
    Script,
    /// Execute the file itself.
    Direct,
}

#[derive(Debug)]
pub enum LaunchError {
    NotFound(PathBuf),
    Spawn {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl fmt::Display for LaunchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LaunchError::NotFound(path) => write!(f, "File not found:\n{}", path.display()),
            LaunchError::Spawn { source, .. } => write!(f, "Error running script:\n{source}"),
        }
    }
}

impl std::error::Error for LaunchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LaunchError::NotFound(_) => None,
            LaunchError::Spawn { source, .. } => Some(source),
        }
    }
}

pub fn classify(path: &Path) -> LaunchKind {
    let is_script = path
        .extension()
        .map(|ext| {
            SCRIPT_EXTENSIONS
                .iter()
                .any(|s| ext.eq_ignore_ascii_case(s))
        })
        .unwrap_or(false);
    if is_script {
        LaunchKind::Script
    } else {
        LaunchKind::Direct
    }
}

/// Directory the child starts in: the folder containing the target.
pub fn working_dir(path: &Path) -> Option<&Path> {
    path.parent().filter(|p| !p.as_os_str().is_empty())
}

/// Build the command that starts `path` without spawning it.
pub fn build_command(path: &Path) -> Command {
    let kind = classify(path);
    let mut command = match kind {
        LaunchKind::Script => shell_command(path),
        LaunchKind::Direct => direct_command(path),
    };
    if let Some(dir) = working_dir(path) {
        command.current_dir(dir);
    }
    detach(&mut command, kind);
    command
}

#[cfg(windows)]
fn shell_command(path: &Path) -> Command {
    use std::os::windows::process::CommandExt;

    let mut c = Command::new("cmd.exe");
    c.raw_arg(format!("/C \"{}\"", path.display()));
    c
}

#[cfg(not(windows))]
fn shell_command(path: &Path) -> Command {
    let mut c = Command::new("sh");
    c.arg(path);
    c
}

fn direct_command(path: &Path) -> Command {
    Command::new(path)
}

#[cfg(windows)]
fn detach(command: &mut Command, kind: LaunchKind) {
    use std::os::windows::process::CommandExt;

    // Scripts get a console of their own so they stay interactive.
    let flags = match kind {
        LaunchKind::Script => CREATE_NEW_CONSOLE | CREATE_NEW_PROCESS_GROUP,
        LaunchKind::Direct => CREATE_NEW_PROCESS_GROUP,
    };
    command.creation_flags(flags);
}

#[cfg(unix)]
fn detach(command: &mut Command, _kind: LaunchKind) {
    use std::os::unix::process::CommandExt;

    command.process_group(0);
}

#[cfg(not(any(windows, unix)))]
fn detach(_command: &mut Command, _kind: LaunchKind) {}

/// Start `path` as a detached child process.
///
/// Nothing is spawned when the file does not exist. The launcher never waits
/// on the child; a background thread only collects its exit status.
pub fn launch(path: impl AsRef<Path>) -> Result<(), LaunchError> {
    let path = path.as_ref();
    if !path.is_file() {
        tracing::error!("launch target missing: {}", path.display());
        return Err(LaunchError::NotFound(path.to_path_buf()));
    }
    let kind = classify(path);
    let child = build_command(path).spawn().map_err(|source| {
        tracing::error!("failed to start {}: {source}", path.display());
        LaunchError::Spawn {
            path: path.to_path_buf(),
            source,
        }
    })?;
    tracing::info!(pid = child.id(), ?kind, "launched {}", path.display());
    reap(child);
    Ok(())
}

fn reap(mut child: Child) {
    let spawned = std::thread::Builder::new()
        .name("launch-reaper".into())
        .spawn(move || {
            let _ = child.wait();
        });
    if let Err(e) = spawned {
        tracing::debug!("could not start reaper thread: {e}");
    }
}
