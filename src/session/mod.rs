mod contacts;
mod schedule;
mod selector;

#[cfg(test)]
mod testing;

use thiserror::Error;

use crate::groundstation::{ApiError, GroundStationApi};
use crate::prompt::{PromptError, Prompter};
use crate::window::{WindowError, WindowRules};

#[derive(Debug, Error)]
pub enum SessionError {
    #[error(transparent)]
    Api(#[from] ApiError),
    #[error(transparent)]
    Prompt(#[from] PromptError),
    #[error(transparent)]
    Window(#[from] WindowError),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type SessionResult<T> = Result<T, SessionError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Schedule,
    View { json: bool },
    Cancel,
}

/// What the root menu does after a step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

const MENU: [&str; 4] = [
    "Schedule contacts",
    "View contacts",
    "Cancel contacts",
    "Quit",
];

/// One operator session. Nothing is carried over between actions except the
/// API handle and the window rules.
pub struct Session<'a, A, P> {
    api: &'a A,
    prompter: &'a mut P,
    rules: WindowRules,
}

impl<'a, A: GroundStationApi, P: Prompter> Session<'a, A, P> {
    pub fn new(api: &'a A, prompter: &'a mut P, rules: WindowRules) -> Self {
        Self {
            api,
            prompter,
            rules,
        }
    }

    /// Root menu loop. Returns when the operator quits or interrupts a prompt.
    pub async fn run_menu(&mut self) -> SessionResult<()> {
        loop {
            match self.menu_step().await {
                Ok(Flow::Continue) => {}
                Ok(Flow::Quit) | Err(SessionError::Prompt(PromptError::Interrupted)) => {
                    return Ok(())
                }
                Err(e) => return Err(e),
            }
        }
    }

    async fn menu_step(&mut self) -> SessionResult<Flow> {
        let choices: Vec<String> = MENU.iter().map(|s| s.to_string()).collect();
        let action = match self
            .prompter
            .select("What would you like to do?", None, &choices)?
        {
            0 => Action::Schedule,
            1 => Action::View { json: false },
            2 => Action::Cancel,
            _ => return Ok(Flow::Quit),
        };
        self.run(action).await?;
        Ok(Flow::Continue)
    }

    pub async fn run(&mut self, action: Action) -> SessionResult<()> {
        log::debug!("running {:?}", action);
        match action {
            Action::Schedule => self.schedule().await,
            Action::View { json } => self.view(json).await,
            Action::Cancel => self.cancel().await,
        }
    }

    fn say(&mut self, text: impl AsRef<str>) {
        self.prompter.say(text.as_ref());
    }
}
