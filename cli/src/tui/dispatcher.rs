// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{cell::RefCell, rc::Rc};

use evently_core::Theme;
use jiff::civil::DateTime;

type Callback = Rc<RefCell<dyn FnMut(&Action)>>;

pub struct Dispatcher {
    subscribers: Vec<Callback>,
}

impl Dispatcher {
    pub fn new() -> Self {
        Self {
            subscribers: Vec::new(),
        }
    }

    pub fn register(&mut self, callback: Callback) {
        self.subscribers.push(callback);
    }

    pub fn dispatch(&mut self, action: Action) {
        tracing::trace!(?action, "dispatching");
        for sub in &self.subscribers {
            (sub.borrow_mut())(&action);
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    UpdateTitle(String),
    UpdateStart(String),
    UpdateEnd(String),
    UpdateLocation(String),
    HighlightSuggestion(Option<usize>),
    SelectSuggestion(usize),
    UpdateDescription(String),
    UpdateRequireApproval(bool),
    UpdateTicketsFree(bool),
    UpdateTicketPrice(String),
    UpdateBannerPath(String),
    UpdateCapacity(Option<u32>),
    UpdateTheme(Option<Theme>),
    /// Fills the demo values, scheduled relative to the given time.
    FillDemo(DateTime),
    SubmitChanges,
}
