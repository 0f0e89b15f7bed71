// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{cell::RefCell, error::Error, rc::Rc, time::Duration};

use ratatui::crossterm::event::{self, Event, KeyEventKind};
use ratatui::layout::Rect;
use ratatui::{DefaultTerminal, Frame};

use crate::tui::component::{Component, Message};
use crate::tui::dispatcher::Dispatcher;
use crate::tui::event_editor::EventEditor;
use crate::tui::event_store::EventStore;

/// How long to wait for a key before applying finished lookups.
const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Runs the create-event editor until it is submitted or closed.
///
/// Must be called from within a Tokio runtime, since address lookups are
/// spawned onto it. The returned store carries the payload if the form was
/// submitted.
pub fn edit_event(store: EventStore) -> Result<EventStore, Box<dyn Error>> {
    let store = Rc::new(RefCell::new(store));

    let mut terminal = ratatui::init();
    let result = {
        let mut dispatcher = Dispatcher::new();
        EventStore::register_to(store.clone(), &mut dispatcher);
        let mut app = App::new(dispatcher, &store);

        loop {
            let area = match app.draw(&store, &mut terminal) {
                Ok(area) => area,
                Err(e) => break Err(e),
            };

            match app.read_event(&store, area) {
                Err(e) => break Err(e),
                Ok(Some(Message::Exit)) => break Ok(()),
                Ok(_) => {}
            }
        }
    }; // release dispatcher and view here to avoid borrow conflicts
    ratatui::restore();
    result?;

    let mut owned_store = Rc::try_unwrap(store)
        .map_err(|_| "Store still has references")?
        .into_inner();
    owned_store.autocomplete.close();
    Ok(owned_store)
}

struct App {
    dispatcher: Dispatcher,
    view: EventEditor,
}

impl App {
    fn new(mut dispatcher: Dispatcher, store: &RefCell<EventStore>) -> Self {
        let mut view = EventEditor::new();
        view.activate(&mut dispatcher, store);
        Self { dispatcher, view }
    }

    fn draw(
        &self,
        store: &RefCell<EventStore>,
        terminal: &mut DefaultTerminal,
    ) -> Result<Rect, Box<dyn Error>> {
        let completed = terminal.draw(|frame| self.render(store, frame))?;
        Ok(completed.area)
    }

    fn render(&self, store: &RefCell<EventStore>, frame: &mut Frame) {
        let area = frame.area();
        self.view.render(store, area, frame.buffer_mut());
        if let Some(pos) = self.view.get_cursor_position(store, area) {
            frame.set_cursor_position(pos);
        }
    }

    /// Applies finished lookups, then waits briefly for a key press.
    fn read_event(
        &mut self,
        store: &RefCell<EventStore>,
        area: Rect,
    ) -> Result<Option<Message>, Box<dyn Error>> {
        let changed = store.borrow_mut().sync();
        if !event::poll(POLL_INTERVAL)? {
            return Ok(changed.then_some(Message::Handled));
        }

        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                Ok(self.view.on_key(&mut self.dispatcher, store, area, key))
            }
            Event::Resize(..) => Ok(Some(Message::Handled)),
            _ => Ok(None),
        }
    }
}
