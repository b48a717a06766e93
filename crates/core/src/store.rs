//! # Booking Selection Store
//!
//! Holds the booking draft the user is assembling and notifies subscribers
//! after every change. One store is created at startup and shared as an
//! `Arc<BookingStore>` with whatever needs to read or write the draft.
//!
//! Every setter replaces exactly one field. The only coupling is the date
//! setter, which also marks the calendar as interacted with, and
//! [`BookingStore::set_time_slots`], which swaps both slot lists at once.
//!
//! Updates are notified in the order they were applied, so the last draft a
//! listener sees is always the current one. Listeners may read the store but
//! must not write to it.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError, RwLock};

use chrono::NaiveDate;
use tracing::{debug, trace};

use crate::models::booking::BookingDraft;
use crate::models::court::{Court, CourtId, Partner};
use crate::models::time_slot::TimeSlot;

type Listener = Arc<dyn Fn(&BookingDraft) + Send + Sync>;

/// Handle returned by [`BookingStore::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

#[derive(Default)]
pub struct BookingStore {
    draft: RwLock<BookingDraft>,
    listeners: Mutex<Vec<(SubscriptionId, Listener)>>,
    /// Held from write through notification
    dispatch: Mutex<()>,
    next_subscription: AtomicU64,
}

impl BookingStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clone of the current draft.
    pub fn snapshot(&self) -> BookingDraft {
        self.draft
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Reads the draft in place without cloning it.
    pub fn with<R>(&self, f: impl FnOnce(&BookingDraft) -> R) -> R {
        let draft = self.draft.read().unwrap_or_else(PoisonError::into_inner);
        f(&draft)
    }

    /// Registers a listener called with the new draft after every update.
    pub fn subscribe<F>(&self, listener: F) -> SubscriptionId
    where
        F: Fn(&BookingDraft) + Send + Sync + 'static,
    {
        let id = SubscriptionId(self.next_subscription.fetch_add(1, Ordering::Relaxed));
        self.listeners().push((id, Arc::new(listener)));
        trace!(subscription = id.0, "booking store listener registered");
        id
    }

    /// Returns false if the subscription was already gone.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut listeners = self.listeners();
        let before = listeners.len();
        listeners.retain(|(existing, _)| *existing != id);
        before != listeners.len()
    }

    pub fn set_selected_date(&self, date: Option<NaiveDate>) {
        self.update("selected_date", |draft| {
            draft.selected_date = date;
            draft.has_clicked_date = true;
        });
    }

    pub fn set_has_clicked_date(&self, clicked: bool) {
        self.update("has_clicked_date", |draft| draft.has_clicked_date = clicked);
    }

    pub fn set_selected_time(&self, time: Option<String>) {
        self.update("selected_time", |draft| draft.selected_time = time);
    }

    pub fn set_duration(&self, minutes: u32) {
        self.update("duration", |draft| draft.duration = minutes);
    }

    pub fn set_field_id(&self, field_id: Option<CourtId>) {
        self.update("field_id", |draft| draft.field_id = field_id);
    }

    pub fn set_selected_court(&self, court: Option<Court>) {
        self.update("selected_court", |draft| draft.selected_court = court);
    }

    pub fn set_selected_partner(&self, partner: Option<Partner>) {
        self.update("selected_partner", |draft| draft.selected_partner = partner);
    }

    pub fn set_selected_time_slot_ids(&self, ids: Vec<String>) {
        self.update("selected_time_slot_ids", |draft| {
            draft.selected_time_slot_ids = ids
        });
    }

    pub fn set_all_time_slots(&self, slots: Vec<TimeSlot>) {
        self.update("all_time_slots", |draft| draft.all_time_slots = slots);
    }

    pub fn set_available_time_slots(&self, slots: Vec<TimeSlot>) {
        self.update("available_time_slots", |draft| {
            draft.available_time_slots = slots
        });
    }

    /// Replaces the full slot list and its available subset in one update, so
    /// no listener sees slots from two different fetches.
    pub fn set_time_slots(&self, all: Vec<TimeSlot>, available: Vec<TimeSlot>) {
        self.update("time_slots", |draft| {
            draft.all_time_slots = all;
            draft.available_time_slots = available;
        });
    }

    pub fn set_note(&self, note: String) {
        self.update("note", |draft| draft.note = note);
    }

    pub fn set_price(&self, price: f64) {
        self.update("price", |draft| draft.price = price);
    }

    pub fn set_drink_option(&self, option: Option<String>) {
        self.update("drink_option", |draft| draft.drink_option = option);
    }

    pub fn set_customer_name(&self, name: String) {
        self.update("customer_name", |draft| draft.customer_name = name);
    }

    pub fn set_user_id(&self, user_id: Option<String>) {
        self.update("user_id", |draft| draft.user_id = user_id);
    }

    /// Restores every field to its default in a single update.
    pub fn reset_booking(&self) {
        self.update("reset", |draft| *draft = BookingDraft::default());
    }

    fn update(&self, field: &'static str, apply: impl FnOnce(&mut BookingDraft)) {
        let _dispatch = self.dispatch.lock().unwrap_or_else(PoisonError::into_inner);
        let snapshot = {
            let mut draft = self.draft.write().unwrap_or_else(PoisonError::into_inner);
            apply(&mut draft);
            draft.clone()
        };
        debug!(field, "booking draft updated");

        // Listeners run outside the draft and listener locks so they may read
        // the store or unsubscribe themselves.
        let listeners: Vec<Listener> = self
            .listeners()
            .iter()
            .map(|(_, listener)| Arc::clone(listener))
            .collect();
        for listener in listeners {
            listener(&snapshot);
        }
    }

    fn listeners(&self) -> MutexGuard<'_, Vec<(SubscriptionId, Listener)>> {
        self.listeners.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
