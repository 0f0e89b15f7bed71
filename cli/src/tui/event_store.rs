// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{cell::RefCell, rc::Rc};

use evently_core::{
    AutocompleteController, Banner, DraftError, EventDraft, EventPayload, MapView, ThemeStore,
};

use crate::tui::dispatcher::{Action, Dispatcher};

/// State of the create-event editor.
///
/// The address text lives in the autocomplete controller, which owns the
/// query, the suggestions and the committed selection.
#[derive(Debug)]
pub struct EventStore {
    pub draft: EventDraft,

    /// Ticket price as typed, parsed on submit.
    pub ticket_price: String,

    /// Banner image path as typed, read on submit. Blank removes the banner.
    pub banner_path: String,

    pub themes: ThemeStore,
    pub autocomplete: AutocompleteController,

    /// Index of the highlighted suggestion in the dropdown.
    pub highlighted: Option<usize>,

    /// Validation feedback shown under the form.
    pub message: Option<String>,

    /// Set once the form was submitted successfully.
    pub payload: Option<EventPayload>,
}

impl EventStore {
    pub fn new(
        draft: EventDraft,
        themes: ThemeStore,
        mut autocomplete: AutocompleteController,
    ) -> Self {
        if !draft.location.is_empty() {
            autocomplete.on_address_change(draft.location.clone());
        }

        Self {
            ticket_price: draft.ticket_price.map(|p| p.to_string()).unwrap_or_default(),
            banner_path: draft
                .banner
                .as_ref()
                .map(|b| b.path().display().to_string())
                .unwrap_or_default(),
            draft,
            themes,
            autocomplete,
            highlighted: None,
            message: None,
            payload: None,
        }
    }

    /// Applies lookups that finished since the last call. Returns whether the
    /// store changed.
    pub fn sync(&mut self) -> bool {
        let updates = self.autocomplete.pump();
        if updates.is_empty() {
            return false;
        }

        let len = self.autocomplete.suggestions().len();
        self.highlighted = self.highlighted.filter(|&i| i < len);
        true
    }

    /// The address text of the location field.
    pub fn location(&self) -> &str {
        self.autocomplete.query()
    }

    /// The map for the current selection.
    pub fn map_view(&self) -> MapView {
        MapView::for_selection(self.autocomplete.selection())
    }

    /// Collects the form into a draft, with the location and theme filled in.
    pub fn to_draft(&self) -> Result<EventDraft, DraftError> {
        let mut draft = self.draft.clone();
        draft.location = self.autocomplete.query().to_string();
        draft.location_point = self.autocomplete.selection().cloned();
        draft.theme = self.themes.selected();
        draft.ticket_price = match draft.tickets_free {
            true => None,
            false => EventDraft::parse_ticket_price(&self.ticket_price)?,
        };
        draft.banner = self.load_banner()?;
        Ok(draft)
    }

    /// Reuses the attached banner while the path is unchanged, otherwise
    /// reads the file at the typed path.
    fn load_banner(&self) -> Result<Option<Banner>, DraftError> {
        let path = self.banner_path.trim();
        if path.is_empty() {
            return Ok(None);
        }
        match &self.draft.banner {
            Some(banner) if banner.path().as_os_str() == path => Ok(Some(banner.clone())),
            _ => Ok(Some(Banner::read(path)?)),
        }
    }

    pub fn into_payload(self) -> Option<EventPayload> {
        self.payload
    }

    fn submit(&mut self) {
        match self.to_draft().and_then(|draft| draft.submit()) {
            Ok(payload) => {
                tracing::debug!(title = payload.title, "event submitted");
                self.message = None;
                self.payload = Some(payload);
            }
            Err(e) => {
                tracing::debug!(error = %e, "event rejected");
                self.message = Some(e.to_string());
            }
        }
    }

    fn check_schedule(&mut self) {
        self.message = self.draft.validate_schedule().err().map(|e| e.to_string());
    }

    fn change_location(&mut self, text: String) {
        self.autocomplete.on_address_change(text);
        self.highlighted = None;
    }

    pub fn register_to(that: Rc<RefCell<Self>>, dispatcher: &mut Dispatcher) {
        let callback = Rc::new(RefCell::new(move |action: &Action| {
            let mut that = that.borrow_mut();
            match action {
                Action::UpdateTitle(v) => {
                    that.draft.title = v.clone();
                    that.message = None;
                }
                Action::UpdateStart(v) => {
                    that.draft.start = v.clone();
                    that.check_schedule();
                }
                Action::UpdateEnd(v) => {
                    that.draft.end = v.clone();
                    that.check_schedule();
                }
                Action::UpdateLocation(v) => that.change_location(v.clone()),
                Action::HighlightSuggestion(v) => that.highlighted = *v,
                Action::SelectSuggestion(i) => {
                    if let Some(selected) = that.autocomplete.select(*i) {
                        tracing::debug!(%selected, "location selected");
                    }
                    that.highlighted = None;
                }
                Action::UpdateDescription(v) => that.draft.description = v.clone(),
                Action::UpdateRequireApproval(v) => that.draft.require_approval = *v,
                Action::UpdateTicketsFree(v) => that.draft.tickets_free = *v,
                Action::UpdateTicketPrice(v) => that.ticket_price = v.clone(),
                Action::UpdateBannerPath(v) => {
                    that.banner_path = v.clone();
                    if v.trim().is_empty() {
                        that.draft.banner = None;
                    }
                }
                Action::UpdateCapacity(v) => that.draft.capacity = *v,
                Action::UpdateTheme(Some(theme)) => that.themes.set_theme(*theme),
                Action::UpdateTheme(None) => that.themes.clear_theme(),
                Action::FillDemo(now) => {
                    that.draft.fill_demo(*now);
                    let location = that.draft.location.clone();
                    that.change_location(location);
                    that.check_schedule();
                }
                Action::SubmitChanges => that.submit(),
            }
        }));
        dispatcher.register(callback);
    }
}
