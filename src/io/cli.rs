//! Command-line interface for validating a font and training it

use crate::io::configuration::{
    DEFAULT_EXP_NUMBER, DEFAULT_FONT_PROPERTIES, DEFAULT_FONT_SIZE, DEFAULT_TESSDATA_PATH,
    TOOLS_DIR_ENV,
};
use crate::io::error::Result;
use crate::training::command::CommandRunner;
use crate::training::orchestrator::{Trainer, TrainingReport};
use crate::training::request::TrainingRequest;
use crate::training::validation::validate;
use clap::Parser;
use std::path::PathBuf;

/// Exit status of a successful run
pub const EXIT_SUCCESS: u8 = 0;
/// Exit status of any validation or pipeline failure
pub const EXIT_FAILURE: u8 = 1;

#[derive(Parser, Debug)]
#[command(name = "tesstrainer")]
#[command(
    author,
    version,
    about = "Train Tesseract on a font and install the resulting traineddata"
)]
/// Command-line arguments for a training run
pub struct Cli {
    /// Language of the traineddata to create
    #[arg(short = 'l', long)]
    pub tesseract_lang: String,

    /// Path of the training text
    #[arg(short = 't', long)]
    pub training_text: PathBuf,

    /// Path of the TrueType/OpenType file of the training font
    #[arg(short = 'F', long)]
    pub font_path: PathBuf,

    /// Name of the training font, without spaces
    #[arg(short = 'n', long)]
    pub font_name: String,

    /// Font size of the rendered training text
    #[arg(short = 's', long, default_value_t = DEFAULT_FONT_SIZE)]
    pub font_size: u32,

    /// Number of the training experience
    #[arg(short = 'e', long, alias = "experience_number", default_value_t = DEFAULT_EXP_NUMBER)]
    pub experience_number: u32,

    /// File listing the properties of the training fonts
    #[arg(short = 'f', long, default_value = DEFAULT_FONT_PROPERTIES)]
    pub font_properties: PathBuf,

    /// The tessdata directory receiving the traineddata
    #[arg(short = 'p', long, default_value = DEFAULT_TESSDATA_PATH)]
    pub tessdata_path: PathBuf,

    /// File listing frequent words, compiled into the dictionary when given
    #[arg(short = 'w', long, alias = "word_list")]
    pub word_list: Option<PathBuf>,

    /// Directory containing the Tesseract training programs
    #[arg(long, env = TOOLS_DIR_ENV)]
    pub tools_dir: Option<PathBuf>,

    /// Display the output of the training programs
    #[arg(short = 'v', long)]
    pub verbose: bool,
}

impl From<Cli> for TrainingRequest {
    fn from(cli: Cli) -> Self {
        Self::new(
            cli.tesseract_lang,
            cli.training_text,
            cli.font_name,
            cli.font_path,
        )
        .with_font_size(cli.font_size)
        .with_exp_number(cli.experience_number)
        .with_font_properties(cli.font_properties)
        .with_tessdata_path(cli.tessdata_path)
        .with_word_list(cli.word_list)
        .with_tools_dir(cli.tools_dir)
        .with_verbose(cli.verbose)
    }
}

/// Validates a request and then runs the real toolchain on it
pub struct TrainingSession {
    request: TrainingRequest,
}

impl TrainingSession {
    /// Create a session from parsed arguments
    pub fn new(cli: Cli) -> Self {
        Self {
            request: cli.into(),
        }
    }

    /// The request built from the arguments
    pub const fn request(&self) -> &TrainingRequest {
        &self.request
    }

    /// Validate, train, clean and install
    ///
    /// # Errors
    ///
    /// Returns the validation error if any check fails, before any program is
    /// launched, or the first pipeline failure otherwise
    pub fn process(&self) -> Result<TrainingReport> {
        self.preflight()?;
        Trainer::new(self.request.clone()).run()
    }

    /// Validate, then run the pipeline through `runner` instead of the real toolchain
    ///
    /// # Errors
    ///
    /// Same as [`TrainingSession::process`]
    pub fn process_with<R: CommandRunner>(&self, runner: R) -> Result<TrainingReport> {
        self.preflight()?;
        Trainer::with_runner(self.request.clone(), runner).run()
    }

    fn preflight(&self) -> Result<()> {
        validate(&self.request)?;
        tracing::info!(
            language = self.request.language(),
            font = self.request.font_name(),
            "arguments validated"
        );
        Ok(())
    }
}

/// Map the outcome of a session to the process exit status
pub const fn exit_status<T>(result: &Result<T>) -> u8 {
    match result {
        Ok(_) => EXIT_SUCCESS,
        Err(_) => EXIT_FAILURE,
    }
}
