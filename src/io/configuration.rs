//! Training defaults, toolchain program names and artifact naming

// Defaults for optional command-line arguments
/// Default font size of the rendered training text, in points
pub const DEFAULT_FONT_SIZE: u32 = 25;
/// Default training experience number
pub const DEFAULT_EXP_NUMBER: u32 = 0;
/// Default location of the font properties file
pub const DEFAULT_FONT_PROPERTIES: &str = "./font_properties";
/// Default location of the tessdata directory
pub const DEFAULT_TESSDATA_PATH: &str = "/usr/local/share/tessdata";

/// Environment variable naming a directory that holds the training programs
pub const TOOLS_DIR_ENV: &str = "TESSTRAIN_TOOLS_DIR";

// Toolchain programs, resolved on PATH unless a tools directory is given
/// Renders training text into a multi-page TIFF
pub const TEXT2IMAGE: &str = "text2image";
/// OCR engine, used for box generation and feature extraction
pub const TESSERACT: &str = "tesseract";
/// Builds the character set from box files
pub const UNICHARSET_EXTRACTOR: &str = "unicharset_extractor";
/// Clusters shape features
pub const MFTRAINING: &str = "mftraining";
/// Clusters character normalization features
pub const CNTRAINING: &str = "cntraining";
/// Compiles a word list into a DAWG dictionary
pub const WORDLIST2DAWG: &str = "wordlist2dawg";
/// Packs the trained components into a single file
pub const COMBINE_TESSDATA: &str = "combine_tessdata";

// Artifact naming
/// Extension of the rendered multi-page image
pub const IMAGE_EXTENSION: &str = "tif";
/// Extension of box files
pub const BOX_EXTENSION: &str = "box";
/// Extension of extracted feature files
pub const FEATURES_EXTENSION: &str = "tr";
/// Extension of the packaged trained data
pub const TRAINEDDATA_EXTENSION: &str = "traineddata";
/// Character set written by the extractor
pub const UNICHARSET: &str = "unicharset";
/// Clustering outputs that are renamed with the language prefix before packaging
pub const CLUSTER_OUTPUTS: [&str; 4] = ["inttemp", "pffmtable", "shapetable", "normproto"];
/// Suffix of the frequent-word dictionary component
pub const FREQ_DAWG_SUFFIX: &str = "freq-dawg";

/// Number of pipeline steps reported by progress display
pub const PIPELINE_STEPS: u64 = 7;
/// Trailing lines of a failed command's stderr kept in error messages
pub const STDERR_TAIL_LINES: usize = 20;
/// Width of the progress bar in characters
pub const PROGRESS_BAR_WIDTH: u16 = 30;
