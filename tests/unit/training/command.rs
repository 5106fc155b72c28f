//! Tests for invocations, command outputs and the process runner

#[cfg(test)]
mod tests {
    use std::ffi::OsString;
    use std::path::PathBuf;
    use tempfile::TempDir;
    use tesstrainer::TrainerError;
    use tesstrainer::training::command::{
        CommandOutput, CommandRunner, Invocation, SystemRunner, tail_lines,
    };

    // Tests arguments are kept in order and rendered for logs
    #[test]
    fn test_invocation_builder() {
        let invocation = Invocation::new("tesseract")
            .arg("eng.Font.exp0.tif")
            .arg("eng.Font.exp0")
            .arg("batch.nochop")
            .arg("makebox");

        assert_eq!(invocation.program(), "tesseract");
        assert_eq!(invocation.args().len(), 4);
        assert_eq!(
            invocation.command_line(),
            "tesseract eng.Font.exp0.tif eng.Font.exp0 batch.nochop makebox"
        );
    }

    // Tests flags are joined with an equals sign
    #[test]
    fn test_invocation_flag() {
        let invocation = Invocation::new("text2image")
            .flag("ptsize", "25")
            .flag("fonts_dir", PathBuf::from("/fonts"));

        assert_eq!(
            invocation.args(),
            [OsString::from("--ptsize=25"), OsString::from("--fonts_dir=/fonts")]
        );
    }

    // Tests successful outputs pass the check unchanged
    #[test]
    fn test_check_success() {
        let output = CommandOutput::succeeded().check("cntraining").unwrap();
        assert!(output.success);
        assert_eq!(output.code, Some(0));
    }

    // Tests failed outputs become CommandFailed with the stderr tail
    #[test]
    fn test_check_failure() {
        let stderr: String = (1..=30).map(|line| format!("line {line}\n")).collect();
        let error = CommandOutput::failed(4, stderr).check("mftraining").unwrap_err();

        match error {
            TrainerError::CommandFailed {
                program,
                code,
                stderr,
            } => {
                assert_eq!(program, "mftraining");
                assert_eq!(code, Some(4));
                assert!(stderr.starts_with("line 11"));
                assert!(stderr.ends_with("line 30"));
            }
            other => unreachable!("Expected CommandFailed, got {other:?}"),
        }
    }

    // Tests tail extraction on short and empty input
    #[test]
    fn test_tail_lines() {
        assert_eq!(tail_lines("a\nb\nc\n", 2), "b\nc");
        assert_eq!(tail_lines("a\nb", 5), "a\nb");
        assert_eq!(tail_lines("", 3), "");
    }

    // Tests program resolution with and without a tools directory
    #[test]
    fn test_resolve() {
        let on_path = SystemRunner::default();
        assert_eq!(on_path.resolve("tesseract"), PathBuf::from("tesseract"));

        let in_dir = SystemRunner::new(Some(PathBuf::from("/opt/tess")), false);
        let expected = format!("tesseract{}", std::env::consts::EXE_SUFFIX);
        assert_eq!(in_dir.resolve("tesseract"), PathBuf::from("/opt/tess").join(expected));
    }

    // Tests a relative tools directory is anchored to the current directory
    #[test]
    fn test_resolve_relative_tools_dir() {
        let runner = SystemRunner::new(Some(PathBuf::from("tools/bin")), false);
        let resolved = runner.resolve("cntraining");

        assert!(resolved.is_absolute());
        assert!(resolved.starts_with(std::env::current_dir().unwrap().join("tools/bin")));
    }

    // Tests a program that does not exist is reported as such
    #[test]
    fn test_run_missing_program() {
        let dir = TempDir::new().unwrap();
        let mut runner = SystemRunner::new(Some(dir.path().to_path_buf()), false);

        let error = runner
            .run(&Invocation::new("no_such_training_tool"), dir.path())
            .unwrap_err();
        assert!(matches!(error, TrainerError::ToolNotFound { .. }));
    }

    // Tests output is captured and the working directory applied
    #[cfg(unix)]
    #[test]
    fn test_run_captures_output_in_cwd() {
        let dir = TempDir::new().unwrap();
        let mut runner = SystemRunner::default();

        let output = runner
            .run(&Invocation::new("sh").arg("-c").arg("pwd; echo oops >&2"), dir.path())
            .unwrap();

        assert!(output.success);
        let reported = PathBuf::from(output.stdout.trim()).canonicalize().unwrap();
        assert_eq!(reported, dir.path().canonicalize().unwrap());
        assert_eq!(output.stderr.trim(), "oops");
    }

    // Tests a relative tools directory still finds programs when run elsewhere
    #[cfg(unix)]
    #[test]
    fn test_run_relative_tools_dir_from_other_cwd() {
        use std::fs;
        use std::os::unix::fs::PermissionsExt;
        use std::path::Path;

        let tools = tempfile::Builder::new()
            .prefix(".tools-")
            .tempdir_in(".")
            .unwrap();
        let bin = tools.path().join("bin");
        fs::create_dir(&bin).unwrap();
        let program = bin.join("faketool");
        fs::write(&program, "#!/bin/sh\necho found\n").unwrap();
        fs::set_permissions(&program, fs::Permissions::from_mode(0o755)).unwrap();

        let relative = Path::new(".").join(tools.path().file_name().unwrap()).join("bin");
        let cwd = TempDir::new().unwrap();
        let mut runner = SystemRunner::new(Some(relative), false);

        let output = runner.run(&Invocation::new("faketool"), cwd.path()).unwrap();
        assert!(output.success);
        assert_eq!(output.stdout.trim(), "found");
    }

    // Tests a non-zero exit is returned as output rather than an error
    #[cfg(unix)]
    #[test]
    fn test_run_reports_exit_code() {
        let dir = TempDir::new().unwrap();
        let mut runner = SystemRunner::default();

        let output = runner
            .run(&Invocation::new("sh").arg("-c").arg("exit 3"), dir.path())
            .unwrap();
        assert!(!output.success);
        assert_eq!(output.code, Some(3));

        let error = output.check("sh").unwrap_err();
        assert!(error.to_string().contains("status 3"));
    }

    // Tests verbose mode streams instead of capturing
    #[cfg(unix)]
    #[test]
    fn test_run_verbose_does_not_capture() {
        let dir = TempDir::new().unwrap();
        let mut runner = SystemRunner::new(None, true);

        let output = runner
            .run(&Invocation::new("sh").arg("-c").arg("echo streamed"), dir.path())
            .unwrap();
        assert!(output.success);
        assert!(output.stdout.is_empty());
    }
}
