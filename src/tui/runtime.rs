use std::sync::Arc;
use tokio::sync::mpsc;
use tokio::task::{JoinHandle, JoinSet};
use tracing::{debug, trace, warn};

use super::action::Action;
use super::component::{Component, Effect, Element};
use super::components::App;
use super::effects::AppEffects;
use super::reducer::reduce;
use super::state::AppState;

/// Component runtime - manages state and action processing
///
/// The Runtime is responsible for:
/// - Managing the application state
/// - Dispatching actions through the reducer
/// - Executing side effects asynchronously
/// - Building the virtual component tree
///
/// Dropping the runtime aborts every pending effect (sign-in requests,
/// loading timers), so nothing fires after the calendar is torn down.
pub struct Runtime {
    /// Current application state
    state: AppState,

    /// Channel for dispatching actions
    action_tx: mpsc::UnboundedSender<Action>,
    action_rx: mpsc::UnboundedReceiver<Action>,

    /// Channel for queuing effects
    effect_tx: mpsc::UnboundedSender<Effect>,

    /// Sign-in and timer effects
    app_effects: Arc<AppEffects>,

    /// Effect executor task, owner of all in-flight effect tasks
    executor: JoinHandle<()>,
}

impl Runtime {
    /// Create a new runtime with initial state and effects handler
    ///
    /// Must be called from within a tokio runtime.
    pub fn new(initial_state: AppState, app_effects: Arc<AppEffects>) -> Self {
        let (action_tx, action_rx) = mpsc::unbounded_channel();
        let (effect_tx, effect_rx) = mpsc::unbounded_channel();

        // Spawn effect executor task
        let action_tx_clone = action_tx.clone();
        let executor = tokio::spawn(async move {
            Self::run_effect_executor(effect_rx, action_tx_clone).await;
        });

        Self {
            state: initial_state,
            action_tx,
            action_rx,
            effect_tx,
            app_effects,
            executor,
        }
    }

    /// Get a reference to the current state
    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Dispatch an action to be processed by the reducer
    ///
    /// Uses mem::take to avoid cloning AppState.
    pub fn dispatch(&mut self, action: Action) {
        trace!("ACTION: Dispatching {:?}", action);

        let state = std::mem::take(&mut self.state);
        let (new_state, effect) = reduce(state, action);
        self.state = new_state;

        self.execute_effect(effect);
    }

    /// Execute an effect, turning sign-in and delay requests into async work
    fn execute_effect(&self, effect: Effect) {
        match effect {
            Effect::None => {}
            Effect::SignIn(credentials) => {
                debug!("EFFECT: Executing sign-in for {}", credentials.email);
                let _ = self.effect_tx.send(self.app_effects.sign_in(credentials));
            }
            Effect::Delay { after, action } => {
                trace!("EFFECT: Scheduling {:?} in {:?}", action, after);
                let _ = self.effect_tx.send(self.app_effects.delay(after, *action));
            }
            Effect::Batch(effects) => {
                for e in effects {
                    self.execute_effect(e);
                }
            }
            Effect::Action(_) | Effect::Async(_) => {
                trace!("ACTION: Queueing effect for async execution");
                let _ = self.effect_tx.send(effect);
            }
        }
    }

    /// Process all pending actions in the queue
    ///
    /// Returns the number of actions processed
    pub fn process_actions(&mut self) -> usize {
        let mut count = 0;
        while let Ok(action) = self.action_rx.try_recv() {
            self.dispatch(action);
            count += 1;
        }
        count
    }

    /// Build the virtual element tree from current state
    pub fn build(&self) -> Element {
        App.view(&self.state)
    }

    /// Get a sender for dispatching actions from external sources
    pub fn action_sender(&self) -> mpsc::UnboundedSender<Action> {
        self.action_tx.clone()
    }

    /// Execute effects asynchronously
    ///
    /// This runs in a separate tokio task and processes effects as they come in.
    /// Effects can dispatch new actions which feed back into the runtime.
    /// Spawned futures live in a JoinSet owned by this task, so aborting the
    /// executor aborts them too.
    async fn run_effect_executor(
        mut effect_rx: mpsc::UnboundedReceiver<Effect>,
        action_tx: mpsc::UnboundedSender<Action>,
    ) {
        let mut tasks = JoinSet::new();
        loop {
            tokio::select! {
                effect = effect_rx.recv() => match effect {
                    Some(effect) => Self::process_effect_async(effect, &action_tx, &mut tasks),
                    None => break,
                },
                Some(_) = tasks.join_next(), if !tasks.is_empty() => {}
            }
        }
    }

    /// Process a single effect in the async executor
    fn process_effect_async(
        effect: Effect,
        action_tx: &mpsc::UnboundedSender<Action>,
        tasks: &mut JoinSet<()>,
    ) {
        match effect {
            Effect::None => {}
            Effect::Action(action) => {
                let _ = action_tx.send(action);
            }
            Effect::Batch(effects) => {
                for e in effects {
                    Self::process_effect_async(e, action_tx, tasks);
                }
            }
            Effect::Async(future) => {
                let action_tx = action_tx.clone();
                tasks.spawn(async move {
                    let action = future.await;
                    let _ = action_tx.send(action);
                });
            }
            // Converted by execute_effect() before being queued
            Effect::SignIn(_) | Effect::Delay { .. } => {
                warn!("Unconverted effect reached async executor: {:?}", effect);
            }
        }
    }
}

impl Drop for Runtime {
    fn drop(&mut self) {
        debug!("RUNTIME: Aborting pending effects");
        self.executor.abort();
    }
}
