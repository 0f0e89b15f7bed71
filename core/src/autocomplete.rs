// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Address autocomplete: debounced lookups with stale-response suppression.

use std::sync::Arc;
use std::time::Duration;

use evently_geocode::{AutocompleteRequest, GeocodeError, Geocoder, Suggestion};
use tokio::sync::mpsc::{UnboundedReceiver, UnboundedSender, unbounded_channel};
use tokio::task::JoinHandle;

use crate::selection::SelectedLocation;

/// Tuning knobs of the controller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AutocompleteOptions {
    /// Quiet period after the last edit before a lookup is issued.
    pub debounce: Duration,
    /// Minimum number of characters that triggers a lookup. Empty text never does.
    pub min_length: usize,
    /// Maximum number of suggestions kept.
    pub limit: usize,
    /// Optional ISO 3166-1 alpha-2 country filter.
    pub country: Option<String>,
}

impl AutocompleteOptions {
    /// Returns true if `text` is long enough to be looked up.
    ///
    /// Characters are counted as typed, whitespace included.
    #[must_use]
    pub fn is_searchable(&self, text: &str) -> bool {
        !text.is_empty() && text.chars().count() >= self.min_length
    }
}

impl Default for AutocompleteOptions {
    fn default() -> Self {
        Self {
            debounce: Duration::from_millis(300),
            min_length: 2,
            limit: evently_geocode::DEFAULT_LIMIT,
            country: None,
        }
    }
}

/// Lifecycle of the current address query.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum QueryState {
    /// Nothing scheduled or in flight.
    #[default]
    Idle,
    /// A lookup is scheduled once the quiet period elapses.
    Debouncing,
    /// A lookup for the current text is in flight.
    Loading,
    /// The suggestions reflect the current text.
    Success,
    /// The last lookup for the current text failed.
    Error(GeocodeError),
}

impl QueryState {
    /// Returns true while a lookup is scheduled or in flight.
    #[must_use]
    pub const fn is_pending(&self) -> bool {
        matches!(self, Self::Debouncing | Self::Loading)
    }
}

/// What a processed message did to the controller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Update {
    /// The quiet period elapsed and a lookup was issued.
    Dispatched {
        /// Sequence number of the lookup.
        seq: u64,
        /// Text that was sent.
        text: String,
    },
    /// The quiet period elapsed but the geocoder is not configured.
    Rejected(GeocodeError),
    /// Suggestions for the current text were stored.
    Received {
        /// Sequence number of the lookup.
        seq: u64,
        /// Number of suggestions stored.
        count: usize,
    },
    /// The lookup for the current text failed.
    Failed {
        /// Sequence number of the lookup.
        seq: u64,
        /// Failure reported by the geocoder.
        error: GeocodeError,
    },
    /// A completion for a superseded query was dropped.
    Stale {
        /// Sequence number of the dropped lookup.
        seq: u64,
    },
    /// A timer that had already been replaced fired and was ignored.
    Expired,
}

#[derive(Debug)]
enum Message {
    Elapsed {
        arm: u64,
    },
    Completed {
        seq: u64,
        text: String,
        result: Result<Vec<Suggestion>, GeocodeError>,
    },
}

/// Turns free-text address input into place suggestions.
///
/// The controller is owned by a single task and mutated only through
/// `&mut self`. Debounce timers and lookups run as spawned Tokio tasks that
/// report back over a channel; [`tick`](Self::tick) and [`pump`](Self::pump)
/// apply their messages. A completion is accepted only if it belongs to the
/// latest lookup and the input has not changed since.
///
/// Methods that schedule work spawn onto the current Tokio runtime and panic
/// if called outside of one.
pub struct AutocompleteController {
    geocoder: Arc<dyn Geocoder>,
    options: AutocompleteOptions,

    query: String,
    suggestions: Vec<Suggestion>,
    selection: Option<SelectedLocation>,
    state: QueryState,

    timer: Option<JoinHandle<()>>,
    arm: u64,
    seq: u64,
    current: Option<u64>,

    tx: UnboundedSender<Message>,
    rx: UnboundedReceiver<Message>,
}

impl AutocompleteController {
    /// Creates an idle controller with an empty query.
    pub fn new(geocoder: Arc<dyn Geocoder>, options: AutocompleteOptions) -> Self {
        let (tx, rx) = unbounded_channel();
        Self {
            geocoder,
            options,
            query: String::new(),
            suggestions: Vec::new(),
            selection: None,
            state: QueryState::Idle,
            timer: None,
            arm: 0,
            seq: 0,
            current: None,
            tx,
            rx,
        }
    }

    /// Records new address text.
    ///
    /// Any previous selection, suggestion list and error is cleared and the
    /// pending timer is cancelled. Text with fewer than `min_length`
    /// characters leaves the controller idle; anything longer arms a fresh
    /// debounce timer. Passing the current text again does nothing.
    pub fn on_address_change(&mut self, text: impl Into<String>) {
        let text = text.into();
        if text == self.query {
            return;
        }

        self.query = text;
        self.selection = None;
        self.suggestions.clear();
        self.cancel_timer();
        self.current = None;

        if self.options.is_searchable(&self.query) {
            self.arm_timer();
            self.state = QueryState::Debouncing;
        } else {
            self.state = QueryState::Idle;
        }
    }

    /// Selects the suggestion at `index` in the current list.
    ///
    /// Returns `None`, leaving everything untouched, if there is no such
    /// suggestion.
    pub fn select(&mut self, index: usize) -> Option<SelectedLocation> {
        let suggestion = self.suggestions.get(index)?.clone();
        Some(self.select_suggestion(&suggestion))
    }

    /// Commits a suggestion as the selected location.
    ///
    /// The query becomes the suggestion's label, the list is cleared and any
    /// pending work is abandoned. A suggestion without both coordinates
    /// yields a label-only selection.
    pub fn select_suggestion(&mut self, suggestion: &Suggestion) -> SelectedLocation {
        let selection = SelectedLocation::from(suggestion);
        if !selection.has_coordinates() {
            tracing::debug!(formatted = %suggestion.formatted, "selected a suggestion without coordinates");
        }

        self.query.clone_from(&suggestion.formatted);
        self.suggestions.clear();
        self.cancel_timer();
        self.current = None;
        self.state = QueryState::Idle;
        self.selection = Some(selection.clone());
        selection
    }

    /// Waits for the next timer or lookup message and applies it.
    ///
    /// This waits forever if nothing is scheduled or in flight. Returns
    /// `None` only if the message channel has closed.
    pub async fn tick(&mut self) -> Option<Update> {
        let msg = self.rx.recv().await?;
        Some(self.apply(msg))
    }

    /// Applies every message already delivered, without waiting.
    pub fn pump(&mut self) -> Vec<Update> {
        let mut updates = Vec::new();
        while let Ok(msg) = self.rx.try_recv() {
            updates.push(self.apply(msg));
        }
        updates
    }

    /// Cancels the pending timer and abandons any lookup in flight.
    pub fn close(&mut self) {
        self.cancel_timer();
        self.current = None;
        if self.state.is_pending() {
            self.state = QueryState::Idle;
        }
    }

    /// Current address text.
    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Suggestions for the current text, most relevant first.
    #[must_use]
    pub fn suggestions(&self) -> &[Suggestion] {
        &self.suggestions
    }

    /// The committed selection, if any.
    #[must_use]
    pub const fn selection(&self) -> Option<&SelectedLocation> {
        self.selection.as_ref()
    }

    /// Current query state.
    #[must_use]
    pub const fn state(&self) -> &QueryState {
        &self.state
    }

    /// The error of the last lookup, if it failed.
    #[must_use]
    pub const fn error(&self) -> Option<&GeocodeError> {
        match &self.state {
            QueryState::Error(err) => Some(err),
            _ => None,
        }
    }

    /// Controller options.
    #[must_use]
    pub const fn options(&self) -> &AutocompleteOptions {
        &self.options
    }

    fn arm_timer(&mut self) {
        self.arm += 1;
        let arm = self.arm;
        let tx = self.tx.clone();
        let delay = self.options.debounce;
        self.timer = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            // The receiver lives as long as the controller.
            let _ = tx.send(Message::Elapsed { arm });
        }));
    }

    fn cancel_timer(&mut self) {
        if let Some(timer) = self.timer.take() {
            timer.abort();
        }
    }

    fn apply(&mut self, msg: Message) -> Update {
        match msg {
            Message::Elapsed { arm } => {
                if self.timer.is_none() || arm != self.arm {
                    tracing::trace!(arm, "ignoring replaced debounce timer");
                    return Update::Expired;
                }
                self.timer = None;
                self.dispatch()
            }
            Message::Completed { seq, text, result } => self.complete(seq, &text, result),
        }
    }

    fn dispatch(&mut self) -> Update {
        if let Err(err) = self.geocoder.ensure_configured() {
            tracing::warn!(%err, "address lookup skipped");
            self.suggestions.clear();
            self.state = QueryState::Error(err.clone());
            return Update::Rejected(err);
        }

        self.seq += 1;
        let seq = self.seq;
        let text = self.query.clone();
        self.current = Some(seq);
        self.state = QueryState::Loading;
        tracing::debug!(seq, %text, "dispatching address lookup");

        let request = AutocompleteRequest::new(text.clone())
            .with_limit(self.options.limit)
            .with_country(self.options.country.clone());
        let geocoder = Arc::clone(&self.geocoder);
        let tx = self.tx.clone();
        tokio::spawn(async move {
            let result = geocoder.autocomplete(&request).await;
            let _ = tx.send(Message::Completed {
                seq,
                text: request.text,
                result,
            });
        });

        Update::Dispatched { seq, text }
    }

    fn complete(
        &mut self,
        seq: u64,
        text: &str,
        result: Result<Vec<Suggestion>, GeocodeError>,
    ) -> Update {
        if self.current != Some(seq) || text != self.query {
            tracing::debug!(seq, text, "dropping stale address lookup");
            return Update::Stale { seq };
        }

        self.current = None;
        match result {
            Ok(mut suggestions) => {
                suggestions.truncate(self.options.limit);
                let count = suggestions.len();
                self.suggestions = suggestions;
                self.state = QueryState::Success;
                Update::Received { seq, count }
            }
            Err(error) => {
                tracing::debug!(seq, %error, "address lookup failed");
                self.suggestions.clear();
                self.state = QueryState::Error(error.clone());
                Update::Failed { seq, error }
            }
        }
    }
}

impl Drop for AutocompleteController {
    fn drop(&mut self) {
        self.cancel_timer();
    }
}

impl std::fmt::Debug for AutocompleteController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AutocompleteController")
            .field("options", &self.options)
            .field("query", &self.query)
            .field("suggestions", &self.suggestions.len())
            .field("selection", &self.selection)
            .field("state", &self.state)
            .field("seq", &self.seq)
            .finish_non_exhaustive()
    }
}
