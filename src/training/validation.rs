//! Pre-flight checks run before any toolchain program is started

use crate::io::error::{Result, TrainerError, WithPath, missing_path};
use crate::training::request::TrainingRequest;
use std::fs;
use std::path::{Component, Path};

/// Check a request, returning the first problem found
///
/// Checks run in a fixed order: language code, tessdata directory, font file,
/// font name syntax, font properties file and font registration, training
/// text, word list.
///
/// # Errors
///
/// Returns [`TrainerError::InvalidLanguage`], [`TrainerError::MissingPath`],
/// [`TrainerError::InvalidFontName`] or [`TrainerError::UnregisteredFont`]
/// for the first failed check, and
/// [`TrainerError::FileSystem`] if the font properties file cannot be read.
pub fn validate(request: &TrainingRequest) -> Result<()> {
    validate_language(request.language())?;

    if !request.tessdata_path().is_dir() {
        return Err(missing_path("directory", request.tessdata_path()));
    }

    if !request.font_path().exists() {
        return Err(missing_path("file", request.font_path()));
    }

    validate_font_name(request.font_name())?;

    if !request.font_properties().is_file() {
        return Err(missing_path("file", request.font_properties()));
    }

    if !font_is_registered(request.font_name(), request.font_properties())? {
        return Err(TrainerError::UnregisteredFont {
            name: request.font_name().to_string(),
            properties: request.font_properties().to_path_buf(),
        });
    }

    if !request.training_text().is_file() {
        return Err(missing_path("file", request.training_text()));
    }

    if let Some(word_list) = request.word_list()
        && !word_list.is_file()
    {
        return Err(missing_path("file", word_list));
    }

    Ok(())
}

/// Reject language codes that would leave the tessdata or scratch directory
///
/// The code names the installed file and prefixes every staged artifact, so
/// it must be one plain path component.
///
/// # Errors
///
/// Returns [`TrainerError::InvalidLanguage`] if the code is empty, contains
/// whitespace or a path separator, or is `.` or `..`
pub fn validate_language(language: &str) -> Result<()> {
    let mut components = Path::new(language).components();
    let plain = matches!(
        (components.next(), components.next()),
        (Some(Component::Normal(name)), None) if name == language
    );
    if !plain || language.contains(['/', '\\']) || language.chars().any(char::is_whitespace) {
        return Err(TrainerError::InvalidLanguage {
            language: language.to_string(),
        });
    }
    Ok(())
}

/// Reject font names that would split into several tokens
///
/// # Errors
///
/// Returns [`TrainerError::InvalidFontName`] if the name contains whitespace
pub fn validate_font_name(name: &str) -> Result<()> {
    if name.chars().any(char::is_whitespace) {
        return Err(TrainerError::InvalidFontName {
            name: name.to_string(),
        });
    }
    Ok(())
}

/// Whether `name` appears as a token of the font properties file
///
/// # Errors
///
/// Returns [`TrainerError::FileSystem`] if the file cannot be read
pub fn font_is_registered(name: &str, properties: &Path) -> Result<bool> {
    let contents = fs::read_to_string(properties).with_path("read font properties", properties)?;
    Ok(contents.split_whitespace().any(|token| token == name))
}
