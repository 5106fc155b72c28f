//! The fixed sequence of training steps and the commands each one runs

use crate::io::configuration::{
    BOX_EXTENSION, CLUSTER_OUTPUTS, CNTRAINING, COMBINE_TESSDATA, FEATURES_EXTENSION,
    FREQ_DAWG_SUFFIX, IMAGE_EXTENSION, MFTRAINING, TESSERACT, TEXT2IMAGE, UNICHARSET,
    UNICHARSET_EXTRACTOR, WORDLIST2DAWG,
};
use crate::io::error::{Result, WithPath};
use crate::training::command::Invocation;
use crate::training::request::TrainingRequest;
use std::path::{Path, PathBuf};

/// Pipeline stages in execution order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Step {
    /// Render the training text into a multi-page image
    Render,
    /// Generate box annotations for the rendered image
    Box,
    /// Extract features and the character set
    Extract,
    /// Cluster features and build the dictionary
    Cluster,
    /// Combine components into the trained data file
    Package,
    /// Remove intermediate artifacts
    Clean,
    /// Copy the trained data into the tessdata directory
    Install,
}

impl Step {
    /// Every step, in execution order
    pub const ALL: [Self; 7] = [
        Self::Render,
        Self::Box,
        Self::Extract,
        Self::Cluster,
        Self::Package,
        Self::Clean,
        Self::Install,
    ];

    /// Short name used in logs, progress and error messages
    pub const fn label(self) -> &'static str {
        match self {
            Self::Render => "render",
            Self::Box => "box",
            Self::Extract => "extract",
            Self::Cluster => "cluster",
            Self::Package => "package",
            Self::Clean => "clean",
            Self::Install => "install",
        }
    }

    /// Whether the step runs toolchain programs
    pub const fn is_external(self) -> bool {
        !matches!(self, Self::Clean | Self::Install)
    }
}

/// Input paths made absolute so they survive the change of working directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedInputs {
    /// Training text file
    pub training_text: PathBuf,
    /// Directory containing the font file
    pub fonts_dir: PathBuf,
    /// Font properties file
    pub font_properties: PathBuf,
    /// Frequent-word list, if any
    pub word_list: Option<PathBuf>,
}

impl ResolvedInputs {
    /// Resolve the request's input paths against the current directory
    ///
    /// # Errors
    ///
    /// Returns [`crate::TrainerError::FileSystem`] if the current directory
    /// cannot be determined
    pub fn resolve(request: &TrainingRequest) -> Result<Self> {
        let font_path = absolute(request.font_path())?;
        let fonts_dir = font_path
            .parent()
            .map_or_else(|| font_path.clone(), Path::to_path_buf);

        Ok(Self {
            training_text: absolute(request.training_text())?,
            fonts_dir,
            font_properties: absolute(request.font_properties())?,
            word_list: request.word_list().map(absolute).transpose()?,
        })
    }
}

fn absolute(path: &Path) -> Result<PathBuf> {
    std::path::absolute(path).with_path("resolve path", path)
}

/// Commands and expected outputs of one external step
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepPlan {
    /// Which step this is
    pub step: Step,
    /// Programs to run, in order
    pub invocations: Vec<Invocation>,
    /// Renames applied after the programs finish, as `(from, to)`
    pub renames: Vec<(String, String)>,
    /// Files that must exist once the step is done
    pub outputs: Vec<String>,
}

/// Build the plans of the external steps for a request
pub fn plan(request: &TrainingRequest, inputs: &ResolvedInputs) -> Vec<StepPlan> {
    let base = request.training_base();
    let lang = request.language();
    let image = format!("{base}.{IMAGE_EXTENSION}");
    let boxes = format!("{base}.{BOX_EXTENSION}");
    let features = format!("{base}.{FEATURES_EXTENSION}");
    let lang_unicharset = format!("{lang}.{UNICHARSET}");

    let render = StepPlan {
        step: Step::Render,
        invocations: vec![
            Invocation::new(TEXT2IMAGE)
                .flag("text", &inputs.training_text)
                .flag("outputbase", &base)
                .flag("font", request.font_name())
                .flag("fonts_dir", &inputs.fonts_dir)
                .flag("ptsize", request.font_size().to_string()),
        ],
        renames: Vec::new(),
        outputs: vec![image.clone()],
    };

    let boxing = StepPlan {
        step: Step::Box,
        invocations: vec![
            Invocation::new(TESSERACT)
                .arg(&image)
                .arg(&base)
                .arg("batch.nochop")
                .arg("makebox"),
        ],
        renames: Vec::new(),
        outputs: vec![boxes.clone()],
    };

    let extract = StepPlan {
        step: Step::Extract,
        invocations: vec![
            Invocation::new(TESSERACT)
                .arg(&image)
                .arg(&base)
                .arg("nobatch")
                .arg("box.train"),
            Invocation::new(UNICHARSET_EXTRACTOR).arg(&boxes),
        ],
        renames: Vec::new(),
        outputs: vec![features.clone(), UNICHARSET.to_string()],
    };

    let mut cluster_invocations = vec![
        Invocation::new(MFTRAINING)
            .arg("-F")
            .arg(&inputs.font_properties)
            .arg("-U")
            .arg(UNICHARSET)
            .arg("-O")
            .arg(&lang_unicharset)
            .arg(&features),
        Invocation::new(CNTRAINING).arg(&features),
    ];
    let renames: Vec<(String, String)> = CLUSTER_OUTPUTS
        .iter()
        .map(|name| ((*name).to_string(), format!("{lang}.{name}")))
        .collect();
    let mut cluster_outputs: Vec<String> = renames.iter().map(|(_, to)| to.clone()).collect();
    cluster_outputs.push(lang_unicharset.clone());
    if let Some(word_list) = &inputs.word_list {
        let dawg = format!("{lang}.{FREQ_DAWG_SUFFIX}");
        cluster_invocations.push(
            Invocation::new(WORDLIST2DAWG)
                .arg(word_list)
                .arg(&dawg)
                .arg(&lang_unicharset),
        );
        cluster_outputs.push(dawg);
    }

    let cluster = StepPlan {
        step: Step::Cluster,
        invocations: cluster_invocations,
        renames,
        outputs: cluster_outputs,
    };

    let package = StepPlan {
        step: Step::Package,
        invocations: vec![Invocation::new(COMBINE_TESSDATA).arg(format!("{lang}."))],
        renames: Vec::new(),
        outputs: vec![request.traineddata_name()],
    };

    vec![render, boxing, extract, cluster, package]
}
