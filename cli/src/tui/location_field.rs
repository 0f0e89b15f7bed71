// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::cell::RefCell;

use evently_core::{QueryState, SelectedLocation};
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

use crate::tui::component::{Component, Message};
use crate::tui::component_form::{Access, FormItem, FormItemState, ITEM_HEIGHT, Input};
use crate::tui::dispatcher::{Action, Dispatcher};
use crate::tui::event_store::EventStore;

/// Suggestions shown at once below the address input.
const MAX_VISIBLE_SUGGESTIONS: usize = 6;

const S_HIGHLIGHT: &str = "▸ ";

struct LocationAccess;

impl Access<EventStore, String> for LocationAccess {
    fn get(store: &RefCell<EventStore>) -> String {
        store.borrow().location().to_string()
    }

    fn set(dispatcher: &mut Dispatcher, value: String) -> bool {
        dispatcher.dispatch(Action::UpdateLocation(value));
        true
    }
}

/// Address input with a status line and the suggestion dropdown.
pub struct LocationField {
    input: Input<EventStore, LocationAccess>,
}

impl LocationField {
    pub fn new() -> Self {
        Self {
            input: Input::new("Location"),
        }
    }

    fn visible_suggestions(store: &RefCell<EventStore>) -> usize {
        store
            .borrow()
            .autocomplete
            .suggestions()
            .len()
            .min(MAX_VISIBLE_SUGGESTIONS)
    }

    fn move_highlight(
        dispatcher: &mut Dispatcher,
        store: &RefCell<EventStore>,
        down: bool,
    ) -> Option<Message> {
        let (len, highlighted) = {
            let s = store.borrow();
            (s.autocomplete.suggestions().len(), s.highlighted)
        };
        let next = match (highlighted, down) {
            (_, _) if len == 0 => return None,
            (None, true) => Some(0),
            (None, false) => return None,
            (Some(i), true) => Some((i + 1).min(len - 1)),
            (Some(0), false) => None,
            (Some(i), false) => Some(i - 1),
        };
        dispatcher.dispatch(Action::HighlightSuggestion(next));
        Some(Message::Handled)
    }
}

impl Component<EventStore> for LocationField {
    fn render(&self, store: &RefCell<EventStore>, area: Rect, buf: &mut Buffer) {
        let [input_area, status_area, list_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Fill(1),
        ])
        .areas(area);

        self.input.render(store, input_area, buf);

        let s = store.borrow();
        status_line(&s).render(status_area, buf);

        let suggestions = s.autocomplete.suggestions();
        let first = s
            .highlighted
            .map_or(0, |i| (i + 1).saturating_sub(MAX_VISIBLE_SUGGESTIONS));
        let rows = Layout::vertical(vec![Constraint::Length(1); MAX_VISIBLE_SUGGESTIONS])
            .split(list_area);
        for ((i, suggestion), row) in suggestions.iter().enumerate().skip(first).zip(rows.iter()) {
            let line = match s.highlighted == Some(i) {
                true => Line::from(vec![
                    S_HIGHLIGHT.blue().bold(),
                    suggestion.formatted.as_str().bold(),
                ]),
                false => Line::from(vec!["  ".into(), suggestion.formatted.as_str().into()]),
            };
            Paragraph::new(line).render(*row, buf);
        }
    }

    fn get_cursor_position(&self, store: &RefCell<EventStore>, area: Rect) -> Option<(u16, u16)> {
        self.input.get_cursor_position(store, area)
    }

    fn on_key(
        &mut self,
        dispatcher: &mut Dispatcher,
        store: &RefCell<EventStore>,
        area: Rect,
        event: KeyEvent,
    ) -> Option<Message> {
        if !self.input.is_active() || event.modifiers.contains(KeyModifiers::CONTROL) {
            return None;
        }

        match event.code {
            KeyCode::Down => Self::move_highlight(dispatcher, store, true),
            KeyCode::Up => Self::move_highlight(dispatcher, store, false),
            KeyCode::Enter => {
                let highlighted = store.borrow().highlighted;
                let i = highlighted?;
                dispatcher.dispatch(Action::SelectSuggestion(i));
                // the query now holds the chosen label
                self.input.activate(dispatcher, store);
                Some(Message::CursorUpdated)
            }
            _ => self.input.on_key(dispatcher, store, area, event),
        }
    }

    fn activate(&mut self, dispatcher: &mut Dispatcher, store: &RefCell<EventStore>) {
        self.input.activate(dispatcher, store);
    }

    fn deactivate(&mut self, dispatcher: &mut Dispatcher, store: &RefCell<EventStore>) {
        self.input.deactivate(dispatcher, store);
        if store.borrow().highlighted.is_some() {
            dispatcher.dispatch(Action::HighlightSuggestion(None));
        }
    }
}

impl FormItem<EventStore> for LocationField {
    fn item_title(&self, store: &RefCell<EventStore>) -> &str {
        self.input.item_title(store)
    }

    fn item_state(&self, store: &RefCell<EventStore>) -> FormItemState {
        self.input.item_state(store)
    }

    fn item_height(&self, store: &RefCell<EventStore>) -> u16 {
        // status line plus the dropdown
        let rows = u16::try_from(Self::visible_suggestions(store)).unwrap_or(0);
        ITEM_HEIGHT + 1 + rows
    }
}

fn status_line(store: &EventStore) -> Line<'static> {
    let ctrl = &store.autocomplete;
    match ctrl.state() {
        QueryState::Debouncing | QueryState::Loading => "Searching…".dark_gray().italic().into(),
        QueryState::Error(e) if e.is_configuration() => Line::from(vec![
            format!("{e} ").red(),
            "Set GEOAPIFY_API_KEY or geocode.api_key in the config.".dark_gray(),
        ]),
        QueryState::Error(e) => format!("Lookup failed: {e}").red().into(),
        QueryState::Success if ctrl.suggestions().is_empty() => "No matches".yellow().into(),
        QueryState::Success => format!("{} suggestions", ctrl.suggestions().len())
            .dark_gray()
            .into(),
        QueryState::Idle => match ctrl.selection() {
            Some(selection) => selection_line(selection),
            None if ctrl.query().is_empty() => "Type an address to search".dark_gray().into(),
            None if !ctrl.options().is_searchable(ctrl.query()) => {
                format!("Type at least {} characters", ctrl.options().min_length)
                    .dark_gray()
                    .into()
            }
            None => Line::default(),
        },
    }
}

fn selection_line(selection: &SelectedLocation) -> Line<'static> {
    match selection.position() {
        Some(p) => format!("Selected: {p}").green().into(),
        None => "No coordinates for this place, the map keeps the default view"
            .yellow()
            .into(),
    }
}
