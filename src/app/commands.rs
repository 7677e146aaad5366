use crate::core::importer::DictionaryImporter;
use crate::core::EntryStore;

/// What the operator sees after `word <WORD>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandOutcome {
    Imported { word: String, id: u64, message: String },
    Failed { message: String },
}

impl CommandOutcome {
    pub fn message(&self) -> &str {
        match self {
            CommandOutcome::Imported { message, .. } => message,
            CommandOutcome::Failed { message } => message,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, CommandOutcome::Imported { .. })
    }
}

/// Runs one import and reports the result. Import errors end here; they are
/// never propagated to the caller.
pub async fn import_word<R: EntryStore>(
    importer: &DictionaryImporter<R>,
    word: &str,
) -> CommandOutcome {
    match importer.import(word).await {
        Ok(entry) => {
            let id = entry.id.unwrap_or_default();
            let message = format!(
                "Imported dictionary entry for \"{}\" (entry ID: {}).",
                entry.word, id
            );
            CommandOutcome::Imported {
                word: entry.word,
                id,
                message,
            }
        }
        Err(e) => {
            if e.is_remote_failure() {
                tracing::warn!("Dictionary import for {:?} stopped at the remote API", word);
            }
            CommandOutcome::Failed {
                message: e.to_string(),
            }
        }
    }
}

/// Prints the outcome the way the CLI reports it.
pub fn report(outcome: &CommandOutcome) {
    match outcome {
        CommandOutcome::Imported { message, .. } => {
            tracing::info!("✅ {}", message);
            println!("✅ {}", message);
        }
        CommandOutcome::Failed { message } => {
            tracing::error!("❌ {}", message);
            eprintln!("❌ {}", message);
        }
    }
}
