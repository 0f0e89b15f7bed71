// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::cell::RefCell;

use evently_core::Theme;
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;
use strum::IntoEnumIterator;

use crate::tui::component::{Component, Message};
use crate::tui::component_form::{Access, Form, Input, RadioGroup};
use crate::tui::component_form_util::{PositiveIntegerAccess, VisibleIf, VisiblePredicate};
use crate::tui::component_page::{KeyHints, SinglePage};
use crate::tui::dispatcher::{Action, Dispatcher};
use crate::tui::event_store::EventStore;
use crate::tui::location_field::LocationField;
use crate::tui::map_panel::MapPanel;

const EDITOR_HINTS: KeyHints = &[
    ("Prev", "<Up>"),
    ("Next", "<Down>"),
    ("Submit", "<Ctrl-S>"),
    ("Demo", "<Ctrl-D>"),
    ("Exit", "<Esc>"),
];

/// The create-event page: form on the left, map on the right.
pub struct EventEditor(SinglePage<EventStore, EventBody>);

impl EventEditor {
    pub fn new() -> Self {
        Self(SinglePage::new("Create Event", EventBody::new()).with_hints(EDITOR_HINTS))
    }
}

impl Component<EventStore> for EventEditor {
    fn render(&self, store: &RefCell<EventStore>, area: Rect, buf: &mut Buffer) {
        self.0.render(store, area, buf);
    }

    fn get_cursor_position(&self, store: &RefCell<EventStore>, area: Rect) -> Option<(u16, u16)> {
        self.0.get_cursor_position(store, area)
    }

    fn on_key(
        &mut self,
        dispatcher: &mut Dispatcher,
        store: &RefCell<EventStore>,
        area: Rect,
        event: KeyEvent,
    ) -> Option<Message> {
        if event.modifiers.contains(KeyModifiers::CONTROL) {
            match event.code {
                KeyCode::Char('s') => {
                    dispatcher.dispatch(Action::SubmitChanges);
                    return match store.borrow().payload.is_some() {
                        true => Some(Message::Exit),
                        false => Some(Message::Handled),
                    };
                }
                KeyCode::Char('d') => {
                    let now = jiff::Zoned::now().datetime();
                    dispatcher.dispatch(Action::FillDemo(now));
                    // refocus so the cursor lands at the end of the new text
                    self.0.deactivate(dispatcher, store);
                    self.0.activate(dispatcher, store);
                    return Some(Message::CursorUpdated);
                }
                KeyCode::Char('c') => return Some(Message::Exit),
                _ => {}
            }
        }
        self.0.on_key(dispatcher, store, area, event)
    }

    fn activate(&mut self, dispatcher: &mut Dispatcher, store: &RefCell<EventStore>) {
        self.0.activate(dispatcher, store);
    }

    fn deactivate(&mut self, dispatcher: &mut Dispatcher, store: &RefCell<EventStore>) {
        self.0.deactivate(dispatcher, store);
    }
}

pub struct EventBody {
    form: Form<EventStore>,
    map: MapPanel,
}

impl EventBody {
    fn new() -> Self {
        Self {
            form: Form::new(vec![
                Box::new(new_title()),
                Box::new(new_start()),
                Box::new(new_end()),
                Box::new(LocationField::new()),
                Box::new(new_description()),
                Box::new(new_require_approval()),
                Box::new(new_tickets()),
                Box::new(VisibleIf::<_, _, PaidTickets>::new(new_ticket_price())),
                Box::new(new_capacity()),
                Box::new(new_theme()),
                Box::new(new_banner()),
            ]),
            map: MapPanel,
        }
    }

    fn split(area: Rect) -> (Rect, Rect, Rect) {
        let [main, message] =
            Layout::vertical([Constraint::Fill(1), Constraint::Length(1)]).areas(area);
        let [form, map] =
            Layout::horizontal([Constraint::Percentage(55), Constraint::Percentage(45)])
                .areas(main);
        (form, map, message)
    }
}

impl Component<EventStore> for EventBody {
    fn render(&self, store: &RefCell<EventStore>, area: Rect, buf: &mut Buffer) {
        let (form, map, message) = Self::split(area);
        self.form.render(store, form, buf);
        self.map.render(store, map, buf);

        let line: Line = match store.borrow().message.clone() {
            Some(msg) => msg.red().bold().into(),
            None => Line::default(),
        };
        Paragraph::new(line).render(message.inner(Margin::new(1, 0)), buf);
    }

    fn get_cursor_position(&self, store: &RefCell<EventStore>, area: Rect) -> Option<(u16, u16)> {
        let (form, _, _) = Self::split(area);
        self.form.get_cursor_position(store, form)
    }

    fn on_key(
        &mut self,
        dispatcher: &mut Dispatcher,
        store: &RefCell<EventStore>,
        area: Rect,
        event: KeyEvent,
    ) -> Option<Message> {
        let (form, _, _) = Self::split(area);
        self.form.on_key(dispatcher, store, form, event)
    }

    fn activate(&mut self, dispatcher: &mut Dispatcher, store: &RefCell<EventStore>) {
        self.form.activate(dispatcher, store);
    }

    fn deactivate(&mut self, dispatcher: &mut Dispatcher, store: &RefCell<EventStore>) {
        self.form.deactivate(dispatcher, store);
    }
}

macro_rules! new_input {
    ($fn: ident, $title:expr, $acc: ident, $field: ident, $action: ident) => {
        fn $fn() -> Input<EventStore, $acc> {
            Input::new($title)
        }

        struct $acc;

        impl Access<EventStore, String> for $acc {
            fn get(store: &RefCell<EventStore>) -> String {
                store.borrow().$field.clone()
            }

            fn set(dispatcher: &mut Dispatcher, value: String) -> bool {
                dispatcher.dispatch(Action::$action(value));
                true
            }
        }
    };
}

macro_rules! draft_input {
    ($fn: ident, $title:expr, $acc: ident, $field: ident, $action: ident) => {
        fn $fn() -> Input<EventStore, $acc> {
            Input::new($title)
        }

        struct $acc;

        impl Access<EventStore, String> for $acc {
            fn get(store: &RefCell<EventStore>) -> String {
                store.borrow().draft.$field.clone()
            }

            fn set(dispatcher: &mut Dispatcher, value: String) -> bool {
                dispatcher.dispatch(Action::$action(value));
                true
            }
        }
    };
}

draft_input!(new_title, "Title", TitleAccess, title, UpdateTitle);
draft_input!(
    new_start,
    "Start (YYYY-MM-DDTHH:MM)",
    StartAccess,
    start,
    UpdateStart
);
draft_input!(
    new_end,
    "End (YYYY-MM-DDTHH:MM)",
    EndAccess,
    end,
    UpdateEnd
);
draft_input!(
    new_description,
    "Description",
    DescriptionAccess,
    description,
    UpdateDescription
);
new_input!(
    new_ticket_price,
    "Ticket price",
    TicketPriceAccess,
    ticket_price,
    UpdateTicketPrice
);
new_input!(
    new_banner,
    "Banner image (path, blank for none)",
    BannerPathAccess,
    banner_path,
    UpdateBannerPath
);

fn new_require_approval() -> RadioGroup<EventStore, bool, RequireApprovalAccess> {
    let options = vec!["No".to_string(), "Yes".to_string()];
    RadioGroup::new("Require approval", vec![false, true], options)
}

struct RequireApprovalAccess;

impl Access<EventStore, bool> for RequireApprovalAccess {
    fn get(store: &RefCell<EventStore>) -> bool {
        store.borrow().draft.require_approval
    }

    fn set(dispatcher: &mut Dispatcher, value: bool) -> bool {
        dispatcher.dispatch(Action::UpdateRequireApproval(value));
        true
    }
}

fn new_tickets() -> RadioGroup<EventStore, bool, TicketsFreeAccess> {
    let options = vec!["Free".to_string(), "Paid".to_string()];
    RadioGroup::new("Tickets", vec![true, false], options)
}

struct TicketsFreeAccess;

impl Access<EventStore, bool> for TicketsFreeAccess {
    fn get(store: &RefCell<EventStore>) -> bool {
        store.borrow().draft.tickets_free
    }

    fn set(dispatcher: &mut Dispatcher, value: bool) -> bool {
        dispatcher.dispatch(Action::UpdateTicketsFree(value));
        true
    }
}

struct PaidTickets;

impl VisiblePredicate<EventStore> for PaidTickets {
    fn is_visible(store: &RefCell<EventStore>) -> bool {
        !store.borrow().draft.tickets_free
    }
}

struct CapacityAccess;

impl Access<EventStore, Option<u32>> for CapacityAccess {
    fn get(store: &RefCell<EventStore>) -> Option<u32> {
        store.borrow().draft.capacity
    }

    fn set(dispatcher: &mut Dispatcher, value: Option<u32>) -> bool {
        dispatcher.dispatch(Action::UpdateCapacity(value));
        true
    }
}

fn new_capacity() -> Input<EventStore, PositiveIntegerAccess<EventStore, u32, CapacityAccess>> {
    Input::new("Capacity (blank for unlimited)")
}

fn new_theme() -> RadioGroup<EventStore, Option<Theme>, ThemeAccess> {
    let values: Vec<_> = std::iter::once(None).chain(Theme::iter().map(Some)).collect();
    let options = values
        .iter()
        .map(|v| v.map_or_else(|| "None".to_string(), |t| t.to_string()))
        .collect();
    RadioGroup::new("Theme", values, options)
}

struct ThemeAccess;

impl Access<EventStore, Option<Theme>> for ThemeAccess {
    fn get(store: &RefCell<EventStore>) -> Option<Theme> {
        store.borrow().themes.selected()
    }

    fn set(dispatcher: &mut Dispatcher, value: Option<Theme>) -> bool {
        dispatcher.dispatch(Action::UpdateTheme(value));
        true
    }
}
