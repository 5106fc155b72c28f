//! Tests for training defaults and artifact naming constants

#[cfg(test)]
mod tests {
    use tesstrainer::io::configuration::{
        BOX_EXTENSION, CLUSTER_OUTPUTS, DEFAULT_EXP_NUMBER, DEFAULT_FONT_PROPERTIES,
        DEFAULT_FONT_SIZE, DEFAULT_TESSDATA_PATH, FEATURES_EXTENSION, IMAGE_EXTENSION,
        PIPELINE_STEPS, STDERR_TAIL_LINES, TRAINEDDATA_EXTENSION,
    };
    use tesstrainer::training::pipeline::Step;

    // Tests defaults of the optional arguments
    #[test]
    fn test_default_arguments() {
        assert_eq!(DEFAULT_FONT_SIZE, 25);
        assert_eq!(DEFAULT_EXP_NUMBER, 0);
        assert_eq!(DEFAULT_FONT_PROPERTIES, "./font_properties");
        assert_eq!(DEFAULT_TESSDATA_PATH, "/usr/local/share/tessdata");
    }

    // Tests that per-font artifacts use distinct extensions
    #[test]
    fn test_artifact_extensions_are_distinct() {
        let extensions = [
            IMAGE_EXTENSION,
            BOX_EXTENSION,
            FEATURES_EXTENSION,
            TRAINEDDATA_EXTENSION,
        ];
        for (index, extension) in extensions.iter().enumerate() {
            assert!(!extension.starts_with('.'));
            assert!(!extensions[index + 1..].contains(extension));
        }
    }

    // Tests the clustering outputs expected by combine_tessdata
    #[test]
    fn test_cluster_outputs() {
        assert_eq!(
            CLUSTER_OUTPUTS,
            ["inttemp", "pffmtable", "shapetable", "normproto"]
        );
    }

    // Tests that progress covers every pipeline step
    #[test]
    fn test_pipeline_step_count() {
        assert_eq!(PIPELINE_STEPS, Step::ALL.len() as u64);
    }

    // Tests the stderr tail is bounded but useful
    #[test]
    fn test_stderr_tail_lines() {
        assert!(STDERR_TAIL_LINES > 0);
        assert!(STDERR_TAIL_LINES <= 100);
    }
}
