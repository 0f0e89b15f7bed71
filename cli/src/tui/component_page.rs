// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{cell::RefCell, marker::PhantomData};

use ratatui::crossterm::event::{KeyCode, KeyEvent};
use ratatui::prelude::*;
use ratatui::symbols::border;
use ratatui::widgets::Block;

use crate::tui::component::{Component, Message};
use crate::tui::dispatcher::Dispatcher;

/// Key hints shown on the bottom border, as `(label, key)` pairs.
pub type KeyHints = &'static [(&'static str, &'static str)];

const NAVIGATION_HINTS: KeyHints = &[("Prev", "<Up>"), ("Next", "<Down>"), ("Exit", "<Esc>")];

/// A bordered page with a centered title and key hints. `Esc` closes it
/// unless the inner component consumes the key first.
pub struct SinglePage<S, C: Component<S>> {
    title: String,
    hints: KeyHints,
    inner: C,
    _store: PhantomData<S>,
}

impl<S, C: Component<S>> SinglePage<S, C> {
    pub fn new(title: impl ToString, inner: C) -> Self {
        Self {
            title: title.to_string(),
            hints: NAVIGATION_HINTS,
            inner,
            _store: PhantomData,
        }
    }

    pub fn with_hints(mut self, hints: KeyHints) -> Self {
        self.hints = hints;
        self
    }

    fn frame() -> Block<'static> {
        Block::bordered().border_set(border::ROUNDED)
    }

    fn hint_line(&self) -> Line<'static> {
        let mut spans = Vec::with_capacity(self.hints.len() * 2 + 1);
        for (label, key) in self.hints {
            spans.push(format!(" {label} ").into());
            spans.push(key.blue().bold());
        }
        spans.push(" ".into());
        Line::from(spans)
    }
}

impl<S, C: Component<S>> Component<S> for SinglePage<S, C> {
    fn render(&self, store: &RefCell<S>, area: Rect, buf: &mut Buffer) {
        let block = Self::frame()
            .title(Line::from(format!(" {} ", self.title).bold()).centered())
            .title_bottom(self.hint_line().centered())
            .white();

        let body = block.inner(area);
        block.render(area, buf);
        self.inner.render(store, body, buf);
    }

    fn get_cursor_position(&self, store: &RefCell<S>, area: Rect) -> Option<(u16, u16)> {
        self.inner
            .get_cursor_position(store, Self::frame().inner(area))
    }

    fn on_key(
        &mut self,
        dispatcher: &mut Dispatcher,
        store: &RefCell<S>,
        area: Rect,
        event: KeyEvent,
    ) -> Option<Message> {
        let body = Self::frame().inner(area);
        self.inner
            .on_key(dispatcher, store, body, event)
            .or_else(|| (event.code == KeyCode::Esc).then_some(Message::Exit))
    }

    fn activate(&mut self, dispatcher: &mut Dispatcher, store: &RefCell<S>) {
        self.inner.activate(dispatcher, store);
    }

    fn deactivate(&mut self, dispatcher: &mut Dispatcher, store: &RefCell<S>) {
        self.inner.deactivate(dispatcher, store);
    }
}
