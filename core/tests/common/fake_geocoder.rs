// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! A geocoder driven by the test.
//!
//! Every lookup is handed to the test as a [`PendingLookup`] and stays in
//! flight until the test answers it, so completion order is fully scripted.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use evently_core::{AutocompleteRequest, GeocodeError, Geocoder, Suggestion};
use tokio::sync::{mpsc, oneshot};

type LookupResult = Result<Vec<Suggestion>, GeocodeError>;

/// A lookup waiting for its answer.
#[derive(Debug)]
pub struct PendingLookup {
    /// The request the controller issued.
    pub request: AutocompleteRequest,
    responder: oneshot::Sender<LookupResult>,
}

impl PendingLookup {
    /// Completes the lookup.
    pub fn respond(self, result: LookupResult) {
        // The controller may have been dropped already.
        let _ = self.responder.send(result);
    }
}

/// Scripted geocoder.
#[derive(Debug)]
pub struct FakeGeocoder {
    configured: bool,
    calls: AtomicUsize,
    lookups: mpsc::UnboundedSender<PendingLookup>,
}

impl FakeGeocoder {
    /// Creates a configured geocoder and the stream of its lookups.
    pub fn new() -> (Arc<Self>, mpsc::UnboundedReceiver<PendingLookup>) {
        Self::with_configured(true)
    }

    /// Creates a geocoder that reports a missing API key.
    pub fn unconfigured() -> (Arc<Self>, mpsc::UnboundedReceiver<PendingLookup>) {
        Self::with_configured(false)
    }

    fn with_configured(configured: bool) -> (Arc<Self>, mpsc::UnboundedReceiver<PendingLookup>) {
        let (tx, rx) = mpsc::unbounded_channel();
        let geocoder = Self {
            configured,
            calls: AtomicUsize::new(0),
            lookups: tx,
        };
        (Arc::new(geocoder), rx)
    }

    /// Number of lookups received so far.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Geocoder for FakeGeocoder {
    fn ensure_configured(&self) -> Result<(), GeocodeError> {
        if self.configured {
            Ok(())
        } else {
            Err(GeocodeError::MissingApiKey)
        }
    }

    async fn autocomplete(&self, request: &AutocompleteRequest) -> LookupResult {
        self.calls.fetch_add(1, Ordering::SeqCst);

        let (responder, answer) = oneshot::channel();
        let pending = PendingLookup {
            request: request.clone(),
            responder,
        };
        if self.lookups.send(pending).is_err() {
            return Err(GeocodeError::Http("test stopped listening".to_string()));
        }

        answer
            .await
            .unwrap_or_else(|_| Err(GeocodeError::Http("lookup abandoned".to_string())))
    }
}
