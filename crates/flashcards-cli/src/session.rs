// Rust guideline compliant 2026-10-19

//! Interactive command loop.
//!
//! A [`Session`] owns the card store and the transcript for one run of the
//! program. It imports the startup file, dispatches menu actions until the
//! user exits or input ends, then runs the shutdown export.

use crate::commands;
use flashcards_core::{
    CardStore, Config, Dialogue, Error, Notice, Prompt, Prompter, Result, Transcript,
};
use std::path::PathBuf;

/// Action names, in menu order.
pub const ACTIONS: &[&str] = &[
    "add",
    "remove",
    "import",
    "export",
    "ask",
    "exit",
    "log",
    "hardest card",
    "reset stats",
];

/// A menu action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Add,
    Remove,
    Import,
    Export,
    Ask,
    Exit,
    Log,
    HardestCard,
    ResetStats,
}

impl Action {
    /// Parses a menu answer. Surrounding whitespace is ignored.
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "add" => Some(Action::Add),
            "remove" => Some(Action::Remove),
            "import" => Some(Action::Import),
            "export" => Some(Action::Export),
            "ask" => Some(Action::Ask),
            "exit" => Some(Action::Exit),
            "log" => Some(Action::Log),
            "hardest card" => Some(Action::HardestCard),
            "reset stats" => Some(Action::ResetStats),
            _ => None,
        }
    }
}

enum Flow {
    Continue,
    Exit,
}

/// One interactive run of the program.
pub struct Session {
    store: CardStore,
    transcript: Transcript,
    import_from: Option<PathBuf>,
    export_to: Option<PathBuf>,
}

impl Session {
    /// Creates a session with an empty store using `config` for the startup
    /// and shutdown paths and the transcript input marker.
    pub fn new(config: &Config) -> Self {
        Self {
            store: CardStore::new(),
            transcript: Transcript::with_input_marker(config.input_marker.clone()),
            import_from: config.import_from.clone(),
            export_to: config.export_to.clone(),
        }
    }

    /// Returns the card store.
    pub fn store(&self) -> &CardStore {
        &self.store
    }

    /// Returns the transcript recorded so far.
    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    /// Runs the session to completion.
    ///
    /// End of input is treated like `exit`, so the shutdown export still
    /// happens.
    ///
    /// # Errors
    ///
    /// Returns an error only if the prompter fails to read or write.
    pub fn run(&mut self, prompter: &mut dyn Prompter) -> Result<()> {
        match self.startup(prompter) {
            Err(Error::InputClosed) => return self.shutdown(prompter),
            other => other?,
        }

        loop {
            match self.step(prompter) {
                Ok(Flow::Continue) => {}
                Ok(Flow::Exit) => break,
                Err(Error::InputClosed) => {
                    tracing::info!("input closed, ending session");
                    break;
                }
                Err(e) => return Err(e),
            }
        }

        self.shutdown(prompter)
    }

    fn startup(&mut self, prompter: &mut dyn Prompter) -> Result<()> {
        let Some(path) = self.import_from.clone() else {
            return Ok(());
        };
        tracing::info!(path = %path.display(), "importing startup cards");
        let mut dialogue = Dialogue::new(prompter, &mut self.transcript);
        let result = commands::files::import(&mut self.store, &mut dialogue, Some(&path));
        Self::report(&mut dialogue, result)
    }

    fn shutdown(&mut self, prompter: &mut dyn Prompter) -> Result<()> {
        let mut dialogue = Dialogue::new(prompter, &mut self.transcript);
        if let Some(path) = self.export_to.as_deref() {
            tracing::info!(path = %path.display(), "exporting cards at exit");
            let result = commands::files::export(&self.store, &mut dialogue, Some(path));
            Self::report(&mut dialogue, result)?;
        }
        dialogue.tell(Notice::Farewell)
    }

    fn step(&mut self, prompter: &mut dyn Prompter) -> Result<Flow> {
        let answer =
            Dialogue::new(prompter, &mut self.transcript).ask(Prompt::Action { actions: ACTIONS })?;
        let Some(action) = Action::parse(&answer) else {
            tracing::debug!(answer = %answer, "unknown action");
            return Ok(Flow::Continue);
        };
        tracing::debug!(?action, "dispatching");

        let result = match action {
            Action::Exit => return Ok(Flow::Exit),
            Action::Log => commands::files::log(&mut self.transcript, prompter),
            action => Self::dispatch(
                &mut self.store,
                action,
                &mut Dialogue::new(prompter, &mut self.transcript),
            ),
        };

        let mut dialogue = Dialogue::new(prompter, &mut self.transcript);
        Self::report(&mut dialogue, result)?;
        Ok(Flow::Continue)
    }

    fn dispatch(store: &mut CardStore, action: Action, dialogue: &mut Dialogue<'_>) -> Result<()> {
        match action {
            Action::Add => commands::cards::add(store, dialogue),
            Action::Remove => commands::cards::remove(store, dialogue),
            Action::Import => commands::files::import(store, dialogue, None),
            Action::Export => commands::files::export(store, dialogue, None),
            Action::Ask => commands::study::ask(store, dialogue),
            Action::HardestCard => commands::study::hardest(store, dialogue),
            Action::ResetStats => commands::study::reset_stats(store, dialogue),
            Action::Exit | Action::Log => Ok(()),
        }
    }

    /// Turns recoverable failures into a notice. Closed input is passed on.
    fn report(dialogue: &mut Dialogue<'_>, result: Result<()>) -> Result<()> {
        match result {
            Ok(()) => Ok(()),
            Err(Error::InputClosed) => Err(Error::InputClosed),
            Err(e) => {
                tracing::warn!(error = %e, "action failed");
                dialogue.tell(Notice::Failure(&e.to_string()))
            }
        }
    }
}
