//! The interactive session: acquire a dataset, browse to a row, pick a model,
//! print the prediction, ask to go again. Owns all retry and exit policy.
//!
//! Recoverable at the same step: invalid menu input, a missing cache in reuse
//! mode, unknown model keys, artifact load failures. Ends the session:
//! cancelling the import dialog, a parse or validation failure, declining the
//! repeat prompt. Quitting the browser restarts the cycle from the
//! acquisition menu. The step decisions live in pure functions
//! (`mode_for_choice`, `acquire_step`, `resolve_step`) and the terminal loops
//! only render what they return.

use crate::browse::RowBrowser;
use crate::config::Config;
use crate::dataset::picker::FilePicker;
use crate::dataset::store::{AcquireMode, Acquired, DatasetStore};
use crate::dataset::Dataset;
use crate::error::{Result, SiftError};
use crate::model::{LoadedModel, ModelCatalog};
use crate::predict::predict_text;
use console::{style, Term};
use dialoguer::{theme::ColorfulTheme, Input};
use log::warn;

/// Parse an acquisition menu choice. `None` re-prompts the menu.
fn mode_for_choice(choice: &str) -> Option<AcquireMode> {
    match choice.trim() {
        "1" => Some(AcquireMode::Reuse),
        "2" => Some(AcquireMode::Import),
        _ => None,
    }
}

/// Next move after one acquisition attempt.
#[derive(Debug)]
enum AcquireStep {
    /// A dataset is ready; the cycle proceeds.
    Use(Dataset),
    /// Recoverable: show the notice and re-prompt the menu.
    Reprompt(String),
    /// Terminal: show the message (if any) and end the session.
    End(Option<String>),
}

fn acquire_step(result: Result<Acquired>) -> AcquireStep {
    match result {
        Ok(Acquired::Dataset(dataset)) => AcquireStep::Use(dataset),
        Ok(Acquired::NoCache) => AcquireStep::Reprompt(
            "No database file found. You must import a dataset first.".to_string(),
        ),
        Ok(Acquired::Cancelled) => AcquireStep::End(Some("No file selected.".to_string())),
        Err(err) => {
            warn!("Dataset acquisition failed: {}", err);
            AcquireStep::End(Some(format!("Error loading dataset: {}", err)))
        }
    }
}

/// Next move after one model resolution attempt. Unknown keys and artifact
/// load failures both re-offer the catalog; this step is never abandoned.
#[derive(Debug)]
enum ResolveStep {
    Use(LoadedModel),
    Reprompt(String),
    /// Infrastructure failure, propagated.
    Fail(SiftError),
}

fn resolve_step(result: Result<LoadedModel>) -> ResolveStep {
    match result {
        Ok(model) => ResolveStep::Use(model),
        Err(SiftError::UnknownModel(_)) => {
            ResolveStep::Reprompt("Invalid choice, try again.".to_string())
        }
        Err(err @ SiftError::ModelLoad { .. }) => {
            warn!("{}", err);
            ResolveStep::Reprompt(format!("Error: {}", err))
        }
        Err(err) => ResolveStep::Fail(err),
    }
}

pub struct Session {
    store: DatasetStore,
    catalog: ModelCatalog,
    browser: RowBrowser,
    picker: Box<dyn FilePicker>,
    term: Term,
    theme: ColorfulTheme,
}

impl Session {
    pub fn new(config: &Config, picker: Box<dyn FilePicker>) -> Self {
        Self {
            store: DatasetStore::new(&config.database_path),
            catalog: ModelCatalog::builtin(&config.models_dir),
            browser: RowBrowser::new(config.page_size, config.preview_chars),
            picker,
            term: Term::stdout(),
            theme: ColorfulTheme::default(),
        }
    }

    pub fn run(&self) -> Result<()> {
        self.term.write_line(&format!(
            "{}",
            style("=== Scientific Relevance Prediction System ===")
                .bold()
                .cyan()
        ))?;

        loop {
            let dataset = match self.acquire_dataset()? {
                Some(dataset) => dataset,
                None => return Ok(()),
            };

            self.term.write_line(&format!(
                "\nDataset loaded with {} rows.",
                style(dataset.len()).bold()
            ))?;

            let text = match self.browser.browse(&dataset)? {
                Some(text) => text,
                // Browsing abandoned; start over from the dataset menu.
                None => continue,
            };

            let model = self.choose_model()?;
            let prediction = predict_text(&model, &text)?;

            self.term.write_line(&format!(
                "\nPrediction result: {}\n",
                style(prediction.label).bold().green()
            ))?;

            let again: String = Input::with_theme(&self.theme)
                .with_prompt("Run another prediction? (y/n)")
                .interact_text_on(&self.term)?;
            if !matches!(again.trim().to_ascii_lowercase().as_str(), "y" | "yes") {
                return Ok(());
            }
        }
    }

    /// Prompt for an acquisition mode until a dataset is available or the
    /// session must end. `Ok(None)` ends the session.
    fn acquire_dataset(&self) -> Result<Option<Dataset>> {
        loop {
            self.term.write_line("")?;
            self.term
                .write_line(&format!("{}", style("=== Dataset Options ===").bold()))?;
            self.term
                .write_line("1. Use existing test dataset from database")?;
            self.term
                .write_line("2. Import new test dataset into database")?;

            let choice: String = Input::with_theme(&self.theme)
                .with_prompt("Choose option (1 or 2)")
                .interact_text_on(&self.term)?;

            let mode = match mode_for_choice(&choice) {
                Some(mode) => mode,
                None => {
                    self.term
                        .write_line(&format!("{}", style("Invalid choice. Try again.").yellow()))?;
                    continue;
                }
            };

            match acquire_step(self.store.acquire(mode, self.picker.as_ref())) {
                AcquireStep::Use(dataset) => {
                    if mode == AcquireMode::Import {
                        self.term.write_line(&format!(
                            "Dataset imported and saved to {}",
                            self.store.cache_path().display()
                        ))?;
                    }
                    return Ok(Some(dataset));
                }
                AcquireStep::Reprompt(notice) => {
                    self.term
                        .write_line(&format!("{}", style(notice).yellow()))?;
                }
                AcquireStep::End(message) => {
                    if let Some(message) = message {
                        self.term.write_line(&message)?;
                    }
                    return Ok(None);
                }
            }
        }
    }

    /// Prompt for a model key until one resolves.
    fn choose_model(&self) -> Result<LoadedModel> {
        loop {
            self.term
                .write_line(&format!("\n{}", style("Available models:").bold()))?;
            for entry in self.catalog.entries() {
                self.term
                    .write_line(&format!("{}. {}", entry.key, entry.name))?;
            }

            let choice: String = Input::with_theme(&self.theme)
                .with_prompt("Choose a model (1-4)")
                .interact_text_on(&self.term)?;

            match resolve_step(self.catalog.resolve(choice.trim())) {
                ResolveStep::Use(model) => {
                    self.term
                        .write_line(&format!("\nUsing model: {}", style(model.name()).bold()))?;
                    return Ok(model);
                }
                ResolveStep::Reprompt(notice) => {
                    self.term
                        .write_line(&format!("{}", style(notice).yellow()))?;
                }
                ResolveStep::Fail(err) => return Err(err),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Predictor;
    use std::path::PathBuf;

    struct NoopPredictor;

    impl Predictor for NoopPredictor {
        fn predict(&self, texts: &[&str]) -> Vec<i64> {
            texts.iter().map(|_| 1).collect()
        }
    }

    fn sample_dataset() -> Dataset {
        Dataset::from_table(
            vec!["text".to_string(), "link_accessibility".to_string()],
            vec![vec!["row".to_string(), "ok".to_string()]],
        )
        .unwrap()
    }

    #[test]
    fn test_mode_for_choice() {
        assert_eq!(mode_for_choice("1"), Some(AcquireMode::Reuse));
        assert_eq!(mode_for_choice(" 2 "), Some(AcquireMode::Import));
        assert_eq!(mode_for_choice("3"), None);
        assert_eq!(mode_for_choice("reuse"), None);
        assert_eq!(mode_for_choice(""), None);
    }

    #[test]
    fn test_acquire_dataset_proceeds() {
        let step = acquire_step(Ok(Acquired::Dataset(sample_dataset())));
        assert!(matches!(step, AcquireStep::Use(_)));
    }

    #[test]
    fn test_acquire_missing_cache_reprompts() {
        let step = acquire_step(Ok(Acquired::NoCache));
        match step {
            AcquireStep::Reprompt(notice) => assert!(notice.contains("import a dataset first")),
            other => panic!("expected a re-prompt, got {:?}", other),
        }
    }

    #[test]
    fn test_acquire_cancellation_ends_session() {
        let step = acquire_step(Ok(Acquired::Cancelled));
        match step {
            AcquireStep::End(Some(message)) => assert_eq!(message, "No file selected."),
            other => panic!("expected the session to end, got {:?}", other),
        }
    }

    #[test]
    fn test_acquire_validation_failure_ends_session() {
        let step = acquire_step(Err(SiftError::MissingColumn("text")));
        match step {
            AcquireStep::End(Some(message)) => {
                assert!(message.contains("Error loading dataset"));
                assert!(message.contains("text"));
            }
            other => panic!("expected the session to end, got {:?}", other),
        }
    }

    #[test]
    fn test_resolve_success_uses_model() {
        let model = LoadedModel::new("Fake", Box::new(NoopPredictor));
        assert!(matches!(resolve_step(Ok(model)), ResolveStep::Use(_)));
    }

    #[test]
    fn test_resolve_unknown_key_reprompts() {
        let step = resolve_step(Err(SiftError::UnknownModel("9".to_string())));
        match step {
            ResolveStep::Reprompt(notice) => assert_eq!(notice, "Invalid choice, try again."),
            other => panic!("expected a re-prompt, got {:?}", other),
        }
    }

    #[test]
    fn test_resolve_load_failure_reprompts_with_identity() {
        let step = resolve_step(Err(SiftError::ModelLoad {
            name: "LinearSVC".to_string(),
            path: PathBuf::from("models/linear_svc.json"),
            message: "file missing".to_string(),
        }));
        match step {
            ResolveStep::Reprompt(notice) => {
                assert!(notice.contains("LinearSVC"));
                assert!(notice.contains("linear_svc.json"));
            }
            other => panic!("expected a re-prompt, got {:?}", other),
        }
    }

    #[test]
    fn test_resolve_infrastructure_failure_propagates() {
        let step = resolve_step(Err(SiftError::UserInput("terminal gone".to_string())));
        assert!(matches!(step, ResolveStep::Fail(SiftError::UserInput(_))));
    }
}
