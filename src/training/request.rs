//! Immutable description of one training run

use crate::io::configuration::{
    DEFAULT_EXP_NUMBER, DEFAULT_FONT_PROPERTIES, DEFAULT_FONT_SIZE, DEFAULT_TESSDATA_PATH,
    TRAINEDDATA_EXTENSION,
};
use std::path::{Path, PathBuf};

/// Parameters of a single training run
///
/// Fields are private; a request is assembled once from command-line input
/// (or [`TrainingRequest::new`] plus the `with_*` adjusters) and only read
/// afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrainingRequest {
    language: String,
    training_text: PathBuf,
    font_name: String,
    font_path: PathBuf,
    font_size: u32,
    exp_number: u32,
    font_properties: PathBuf,
    tessdata_path: PathBuf,
    word_list: Option<PathBuf>,
    tools_dir: Option<PathBuf>,
    verbose: bool,
}

impl TrainingRequest {
    /// Create a request with defaults for every optional parameter
    pub fn new(
        language: impl Into<String>,
        training_text: impl Into<PathBuf>,
        font_name: impl Into<String>,
        font_path: impl Into<PathBuf>,
    ) -> Self {
        Self {
            language: language.into(),
            training_text: training_text.into(),
            font_name: font_name.into(),
            font_path: font_path.into(),
            font_size: DEFAULT_FONT_SIZE,
            exp_number: DEFAULT_EXP_NUMBER,
            font_properties: PathBuf::from(DEFAULT_FONT_PROPERTIES),
            tessdata_path: PathBuf::from(DEFAULT_TESSDATA_PATH),
            word_list: None,
            tools_dir: None,
            verbose: false,
        }
    }

    /// Set the rendered font size
    #[must_use]
    pub const fn with_font_size(mut self, font_size: u32) -> Self {
        self.font_size = font_size;
        self
    }

    /// Set the experience number
    #[must_use]
    pub const fn with_exp_number(mut self, exp_number: u32) -> Self {
        self.exp_number = exp_number;
        self
    }

    /// Set the font properties file
    #[must_use]
    pub fn with_font_properties(mut self, path: impl Into<PathBuf>) -> Self {
        self.font_properties = path.into();
        self
    }

    /// Set the tessdata directory receiving the result
    #[must_use]
    pub fn with_tessdata_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.tessdata_path = path.into();
        self
    }

    /// Set or clear the frequent-word list
    #[must_use]
    pub fn with_word_list(mut self, path: Option<PathBuf>) -> Self {
        self.word_list = path;
        self
    }

    /// Set or clear the directory holding the training programs
    #[must_use]
    pub fn with_tools_dir(mut self, path: Option<PathBuf>) -> Self {
        self.tools_dir = path;
        self
    }

    /// Stream toolchain output to the terminal
    #[must_use]
    pub const fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Language identifier of the trained data
    pub fn language(&self) -> &str {
        &self.language
    }

    /// Training text file
    pub fn training_text(&self) -> &Path {
        &self.training_text
    }

    /// Font name, as registered in the font properties file
    pub fn font_name(&self) -> &str {
        &self.font_name
    }

    /// TrueType/OpenType font file
    pub fn font_path(&self) -> &Path {
        &self.font_path
    }

    /// Rendered font size
    pub const fn font_size(&self) -> u32 {
        self.font_size
    }

    /// Experience number
    pub const fn exp_number(&self) -> u32 {
        self.exp_number
    }

    /// Font properties file
    pub fn font_properties(&self) -> &Path {
        &self.font_properties
    }

    /// Directory the trained data is installed into
    pub fn tessdata_path(&self) -> &Path {
        &self.tessdata_path
    }

    /// Frequent-word list, when a dictionary should be built
    pub fn word_list(&self) -> Option<&Path> {
        self.word_list.as_deref()
    }

    /// Directory holding the training programs, if not on `PATH`
    pub fn tools_dir(&self) -> Option<&Path> {
        self.tools_dir.as_deref()
    }

    /// Whether toolchain output is streamed
    pub const fn verbose(&self) -> bool {
        self.verbose
    }

    /// Base name shared by the per-font artifacts, `<lang>.<font>.exp<N>`
    pub fn training_base(&self) -> String {
        format!("{}.{}.exp{}", self.language, self.font_name, self.exp_number)
    }

    /// File name of the packaged result, `<lang>.traineddata`
    pub fn traineddata_name(&self) -> String {
        format!("{}.{TRAINEDDATA_EXTENSION}", self.language)
    }

    /// Final location of the trained data inside the tessdata directory
    pub fn installed_path(&self) -> PathBuf {
        self.tessdata_path.join(self.traineddata_name())
    }
}
