//! Runs the training pipeline from rendering to installation

use crate::io::error::Result;
use crate::io::progress::StepProgress;
use crate::training::command::{CommandRunner, SystemRunner};
use crate::training::pipeline::{ResolvedInputs, Step, StepPlan, plan};
use crate::training::request::TrainingRequest;
use crate::training::workspace::{Workspace, install};
use std::path::{Path, PathBuf};
use std::time::Instant;

/// Outcome of a successful run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrainingReport {
    /// Where the trained data was installed
    pub installed: PathBuf,
    /// Intermediate artifacts deleted by the clean step
    pub removed: Vec<String>,
    /// Scratch directory used by the run, gone once the run returns
    pub workspace: PathBuf,
    /// Number of toolchain programs launched
    pub commands_run: usize,
}

/// Drives the pipeline for one request with a given command runner
pub struct Trainer<R> {
    request: TrainingRequest,
    runner: R,
    progress: StepProgress,
    scratch_parent: Option<PathBuf>,
    commands_run: usize,
}

impl Trainer<SystemRunner> {
    /// Create a trainer that launches the real toolchain
    ///
    /// Progress is drawn unless the request streams tool output.
    pub fn new(request: TrainingRequest) -> Self {
        let runner = SystemRunner::new(
            request.tools_dir().map(Path::to_path_buf),
            request.verbose(),
        );
        let progress = if request.verbose() {
            StepProgress::hidden()
        } else {
            StepProgress::new()
        };
        Self::with_runner(request, runner).with_progress(progress)
    }
}

impl<R: CommandRunner> Trainer<R> {
    /// Create a trainer around any command runner, with hidden progress
    pub fn with_runner(request: TrainingRequest, runner: R) -> Self {
        Self {
            request,
            runner,
            progress: StepProgress::hidden(),
            scratch_parent: None,
            commands_run: 0,
        }
    }

    /// Replace the progress display
    #[must_use]
    pub fn with_progress(mut self, progress: StepProgress) -> Self {
        self.progress = progress;
        self
    }

    /// Create scratch directories under `parent` instead of the system temp dir
    #[must_use]
    pub fn with_scratch_parent(mut self, parent: impl Into<PathBuf>) -> Self {
        self.scratch_parent = Some(parent.into());
        self
    }

    /// The request being trained
    pub const fn request(&self) -> &TrainingRequest {
        &self.request
    }

    /// The command runner, for inspection after a run
    pub const fn runner(&self) -> &R {
        &self.runner
    }

    /// Number of steps finished so far, including those before a failure
    pub fn completed_steps(&self) -> u64 {
        self.progress.completed()
    }

    /// Run every step, stopping at the first failure
    ///
    /// The request is expected to have passed validation already. Nothing is
    /// written to the tessdata directory unless all earlier steps succeed.
    ///
    /// # Errors
    ///
    /// Returns the error of the first step that fails
    pub fn run(&mut self) -> Result<TrainingReport> {
        let started = Instant::now();
        let result = self.run_steps();
        match &result {
            Ok(report) => {
                self.progress.finish();
                tracing::info!(
                    installed = %report.installed.display(),
                    commands = report.commands_run,
                    elapsed_ms = started.elapsed().as_millis(),
                    "training complete"
                );
            }
            Err(err) => {
                let completed_steps = self.progress.completed();
                self.progress.abandon();
                tracing::error!(completed_steps, "training aborted: {err}");
            }
        }
        result
    }

    fn run_steps(&mut self) -> Result<TrainingReport> {
        self.commands_run = 0;
        let workspace = match &self.scratch_parent {
            Some(parent) => Workspace::create_in(parent)?,
            None => Workspace::create()?,
        };
        tracing::debug!(workspace = %workspace.path().display(), "created workspace");

        let package = self.training(&workspace)?;
        let removed = self.clean(&workspace)?;
        let installed = self.add_trained_data(&package)?;

        Ok(TrainingReport {
            installed,
            removed,
            workspace: workspace.path().to_path_buf(),
            commands_run: self.commands_run,
        })
    }

    /// Run the external steps in `workspace`, returning the packaged file
    ///
    /// # Errors
    ///
    /// Returns the first launch failure, non-zero exit or missing output
    pub fn training(&mut self, workspace: &Workspace) -> Result<PathBuf> {
        let inputs = ResolvedInputs::resolve(&self.request)?;
        for step_plan in plan(&self.request, &inputs) {
            self.execute(&step_plan, workspace)?;
        }
        workspace.require(Step::Package.label(), &self.request.traineddata_name())
    }

    /// Remove everything from `workspace` except the packaged file
    ///
    /// # Errors
    ///
    /// Returns [`crate::TrainerError::FileSystem`] if an artifact cannot be removed
    pub fn clean(&self, workspace: &Workspace) -> Result<Vec<String>> {
        self.begin(Step::Clean);
        let removed = workspace.clean(&self.request.traineddata_name())?;
        tracing::debug!(count = removed.len(), "removed intermediate artifacts");
        self.progress.complete_step();
        Ok(removed)
    }

    /// Copy the packaged file into the tessdata directory
    ///
    /// # Errors
    ///
    /// Returns [`crate::TrainerError::FileSystem`] if the copy fails
    pub fn add_trained_data(&self, package: &Path) -> Result<PathBuf> {
        self.begin(Step::Install);
        let installed = install(package, &self.request.installed_path())?;
        self.progress.complete_step();
        Ok(installed)
    }

    fn execute(&mut self, step_plan: &StepPlan, workspace: &Workspace) -> Result<()> {
        let label = step_plan.step.label();
        self.begin(step_plan.step);

        for invocation in &step_plan.invocations {
            tracing::debug!(step = label, "running {}", invocation.command_line());
            let output = self.runner.run(invocation, workspace.path())?;
            self.commands_run += 1;
            output.check(invocation.program())?;
        }

        for (from, to) in &step_plan.renames {
            workspace.rename(label, from, to)?;
        }

        for name in &step_plan.outputs {
            workspace.require(label, name)?;
        }

        self.progress.complete_step();
        Ok(())
    }

    fn begin(&self, step: Step) {
        tracing::info!(step = step.label(), "starting step");
        self.progress.start_step(step.label());
    }
}
