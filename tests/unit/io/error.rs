//! Tests for error types including source chaining and message formatting

#[cfg(test)]
mod tests {
    use std::error::Error;
    use std::path::PathBuf;
    use tesstrainer::TrainerError;
    use tesstrainer::io::error::{WithPath, file_system, missing_path};

    // Tests the missing directory message names the path
    #[test]
    fn test_missing_path_message() {
        let error = missing_path("directory", "/usr/share/tessdata");

        assert_eq!(
            error.to_string(),
            "The /usr/share/tessdata directory does not exist. Aborting."
        );
        assert!(error.is_validation());
        assert!(error.source().is_none());
    }

    // Tests the font name message mentions the flag and the name
    #[test]
    fn test_invalid_font_name_message() {
        let error = TrainerError::InvalidFontName {
            name: "DejaVu Sans".to_string(),
        };

        let message = error.to_string();
        assert!(message.contains("--font-name"));
        assert!(message.contains("DejaVu Sans"));
        assert!(message.contains("spaces"));
        assert!(error.is_validation());
    }

    // Tests the language message mentions the flag and the code
    #[test]
    fn test_invalid_language_message() {
        let error = TrainerError::InvalidLanguage {
            language: "../eng".to_string(),
        };

        let message = error.to_string();
        assert!(message.contains("--tesseract-lang"));
        assert!(message.contains("'../eng'"));
        assert!(message.ends_with("Aborting."));
        assert!(error.is_validation());
    }

    // Tests the unregistered font message names both font and file
    #[test]
    fn test_unregistered_font_message() {
        let error = TrainerError::UnregisteredFont {
            name: "Garamond".to_string(),
            properties: PathBuf::from("font_properties"),
        };

        assert_eq!(
            error.to_string(),
            "The font properties of Garamond have not been defined in font_properties. Aborting."
        );
        assert!(error.is_validation());
    }

    // Tests command failures include status and stderr
    #[test]
    fn test_command_failed_message() {
        let error = TrainerError::CommandFailed {
            program: "mftraining".to_string(),
            code: Some(2),
            stderr: "Error: no samples".to_string(),
        };

        let message = error.to_string();
        assert!(message.starts_with("'mftraining' exited with status 2"));
        assert!(message.ends_with("Error: no samples"));
        assert!(!error.is_validation());
    }

    // Tests signal termination is reported without a code
    #[test]
    fn test_command_killed_message() {
        let error = TrainerError::CommandFailed {
            program: "tesseract".to_string(),
            code: None,
            stderr: String::new(),
        };

        assert_eq!(error.to_string(), "'tesseract' was terminated by a signal");
    }

    // Tests launch failures chain to the I/O error
    #[test]
    fn test_tool_not_found_source() {
        let error = TrainerError::ToolNotFound {
            program: "text2image".to_string(),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "no such file"),
        };

        assert!(error.to_string().contains("text2image"));
        assert!(error.source().is_some());
    }

    // Tests missing artifacts name the step and path
    #[test]
    fn test_missing_artifact_message() {
        let error = TrainerError::MissingArtifact {
            step: "box",
            path: PathBuf::from("/tmp/ws/eng.Font.exp0.box"),
        };

        assert_eq!(
            error.to_string(),
            "The box step did not produce '/tmp/ws/eng.Font.exp0.box'"
        );
        assert!(!error.is_validation());
    }

    // Tests path context is attached to I/O failures
    #[test]
    fn test_with_path_context() {
        let result: std::result::Result<(), std::io::Error> = Err(std::io::Error::new(
            std::io::ErrorKind::PermissionDenied,
            "access denied",
        ));

        let error = result.with_path("install trained data", "/tessdata/eng.traineddata").unwrap_err();
        let message = error.to_string();
        assert!(message.contains("install trained data"));
        assert!(message.contains("/tessdata/eng.traineddata"));
        assert!(message.contains("access denied"));
        assert!(error.source().is_some());
    }

    // Tests the bare I/O conversion and helper agree on shape
    #[test]
    fn test_io_conversion() {
        let from_io: TrainerError =
            std::io::Error::other("disk full").into();
        let helper = file_system("copy", "out", std::io::Error::other("disk full"));

        assert!(matches!(from_io, TrainerError::FileSystem { operation: "unknown", .. }));
        assert!(matches!(helper, TrainerError::FileSystem { operation: "copy", .. }));
    }
}
