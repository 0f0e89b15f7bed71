// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{cell::RefCell, marker::PhantomData, str::FromStr};

use ratatui::{buffer::Buffer, crossterm::event::KeyEvent, layout::Rect};

use crate::tui::{
    component::{Component, Message},
    component_form::{Access, FormItem, FormItemState},
    dispatcher::Dispatcher,
};

/// Decides from the store whether a [`VisibleIf`] item is shown.
pub trait VisiblePredicate<S> {
    fn is_visible(store: &RefCell<S>) -> bool;
}

/// Hides the wrapped item, and skips it during navigation, while `P` says so.
pub struct VisibleIf<S, T, P>
where
    T: FormItem<S>,
    P: VisiblePredicate<S>,
{
    item: T,
    _marker: PhantomData<(S, P)>,
}

impl<S, T, P> VisibleIf<S, T, P>
where
    T: FormItem<S>,
    P: VisiblePredicate<S>,
{
    pub fn new(item: T) -> Self {
        Self {
            item,
            _marker: PhantomData,
        }
    }
}

impl<S, T, P> Component<S> for VisibleIf<S, T, P>
where
    T: FormItem<S>,
    P: VisiblePredicate<S>,
{
    fn render(&self, store: &RefCell<S>, area: Rect, buf: &mut Buffer) {
        self.item.render(store, area, buf);
    }

    fn get_cursor_position(&self, store: &RefCell<S>, area: Rect) -> Option<(u16, u16)> {
        self.item.get_cursor_position(store, area)
    }

    fn on_key(
        &mut self,
        dispatcher: &mut Dispatcher,
        store: &RefCell<S>,
        area: Rect,
        event: KeyEvent,
    ) -> Option<Message> {
        self.item.on_key(dispatcher, store, area, event)
    }

    fn activate(&mut self, dispatcher: &mut Dispatcher, store: &RefCell<S>) {
        self.item.activate(dispatcher, store);
    }

    fn deactivate(&mut self, dispatcher: &mut Dispatcher, store: &RefCell<S>) {
        self.item.deactivate(dispatcher, store);
    }
}

impl<S, T, P> FormItem<S> for VisibleIf<S, T, P>
where
    T: FormItem<S>,
    P: VisiblePredicate<S>,
{
    fn item_title(&self, store: &RefCell<S>) -> &str {
        self.item.item_title(store)
    }

    fn item_state(&self, store: &RefCell<S>) -> FormItemState {
        match P::is_visible(store) {
            true => self.item.item_state(store),
            false => FormItemState::Invisible,
        }
    }

    fn item_height(&self, store: &RefCell<S>) -> u16 {
        self.item.item_height(store)
    }
}

/// Edits an optional positive integer as text. Blank text clears the value;
/// zero and anything unparsable are rejected.
pub struct PositiveIntegerAccess<S, T, A>(PhantomData<(S, T, A)>);

impl<S, T, A> Access<S, String> for PositiveIntegerAccess<S, T, A>
where
    T: FromStr + ToString + Default + PartialOrd + Clone,
    A: Access<S, Option<T>>,
{
    fn get(store: &RefCell<S>) -> String {
        A::get(store).map(|n| n.to_string()).unwrap_or_default()
    }

    fn set(dispatcher: &mut Dispatcher, value: String) -> bool {
        let text = value.trim();
        if text.is_empty() {
            return A::set(dispatcher, None);
        }

        match text.parse::<T>() {
            Ok(n) if n > T::default() => A::set(dispatcher, Some(n)),
            _ => {
                tracing::debug!(text, "not a positive integer");
                false
            }
        }
    }
}
