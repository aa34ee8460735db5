use bat_launcher::launcher::{build_command, classify, launch, LaunchError, LaunchKind};
use std::path::Path;
use tempfile::tempdir;

#[test]
fn batch_and_cmd_go_through_the_shell() {
    assert_eq!(classify(Path::new("C:\\x\\build.bat")), LaunchKind::Script);
    assert_eq!(classify(Path::new("C:\\x\\clean.cmd")), LaunchKind::Script);
    assert_eq!(classify(Path::new("C:\\x\\UPPER.BAT")), LaunchKind::Script);
}

#[test]
fn everything_else_runs_directly() {
    assert_eq!(classify(Path::new("C:\\x\\tool.exe")), LaunchKind::Direct);
    assert_eq!(classify(Path::new("/usr/local/bin/tool")), LaunchKind::Direct);
    assert_eq!(classify(Path::new("script.ps1")), LaunchKind::Direct);
}

#[test]
fn script_command_wraps_in_shell() {
    let dir = tempdir().unwrap();
    let script = dir.path().join("job.bat");
    let cmd = build_command(&script);
    let program = cmd.get_program().to_string_lossy().into_owned();
    if cfg!(windows) {
        assert_eq!(program, "cmd.exe");
    } else {
        assert_eq!(program, "sh");
        let args: Vec<_> = cmd.get_args().collect();
        assert_eq!(args, vec![script.as_os_str()]);
    }
    assert_eq!(cmd.get_current_dir(), Some(dir.path()));
}

#[test]
fn direct_command_runs_file_itself() {
    let dir = tempdir().unwrap();
    let exe = dir.path().join("tool.exe");
    let cmd = build_command(&exe);
    assert_eq!(cmd.get_program(), exe.as_os_str());
    assert_eq!(cmd.get_args().count(), 0);
    assert_eq!(cmd.get_current_dir(), Some(dir.path()));
}

#[test]
fn missing_file_is_reported_and_nothing_starts() {
    let dir = tempdir().unwrap();
    let missing = dir.path().join("gone.bat");
    match launch(&missing) {
        Err(LaunchError::NotFound(p)) => assert_eq!(p, missing),
        other => panic!("expected NotFound, got {other:?}"),
    }
}

#[test]
fn directory_is_not_launchable() {
    let dir = tempdir().unwrap();
    assert!(matches!(launch(dir.path()), Err(LaunchError::NotFound(_))));
}

#[cfg(unix)]
#[test]
fn script_runs_in_its_own_directory() {
    use std::time::{Duration, Instant};

    let dir = tempdir().unwrap();
    let script = dir.path().join("touch.bat");
    std::fs::write(&script, "echo done > marker.txt\n").unwrap();

    launch(&script).unwrap();

    let marker = dir.path().join("marker.txt");
    let deadline = Instant::now() + Duration::from_secs(5);
    while !marker.exists() && Instant::now() < deadline {
        std::thread::sleep(Duration::from_millis(20));
    }
    assert!(marker.exists(), "script did not run in its directory");
}

#[cfg(unix)]
#[test]
fn non_executable_file_fails_to_spawn() {
    let dir = tempdir().unwrap();
    let data = dir.path().join("notes.txt");
    std::fs::write(&data, "plain text").unwrap();
    match launch(&data) {
        Err(err @ LaunchError::Spawn { .. }) => {
            assert!(err.to_string().starts_with("Error running script:"));
        }
        other => panic!("expected Spawn error, got {other:?}"),
    }
}
