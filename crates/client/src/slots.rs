//! Time slot loading for the booking flow.
//!
//! Users can switch court or date faster than the API answers. Each refresh
//! takes a generation ticket, and a response only reaches the store if no
//! newer refresh was started in the meantime, so the slots shown always
//! belong to the latest selection.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::NaiveDate;
use courtbook_core::errors::BookingResult;
use courtbook_core::generation::RequestGeneration;
use courtbook_core::models::court::CourtId;
use courtbook_core::models::time_slot::TimeSlot;
use courtbook_core::store::BookingStore;
use tracing::debug;

#[async_trait]
pub trait SlotSource: Send + Sync {
    async fn fetch_time_slots(
        &self,
        court_id: CourtId,
        date: NaiveDate,
    ) -> BookingResult<Vec<TimeSlot>>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotRefresh {
    /// Store updated; number of available slots
    Applied(usize),
    /// A newer refresh started before this one finished
    Superseded,
}

pub struct SlotLoader<S> {
    source: S,
    store: Arc<BookingStore>,
    generation: RequestGeneration,
}

impl<S: SlotSource> SlotLoader<S> {
    pub fn new(source: S, store: Arc<BookingStore>) -> Self {
        Self {
            source,
            store,
            generation: RequestGeneration::new(),
        }
    }

    /// Fetches slots for `court_id` on `date` and, if still current, replaces
    /// `all_time_slots` and `available_time_slots` in the store.
    ///
    /// Errors leave the store untouched.
    pub async fn refresh(
        &self,
        court_id: CourtId,
        date: NaiveDate,
    ) -> BookingResult<SlotRefresh> {
        let ticket = self.generation.begin();
        let slots = self.source.fetch_time_slots(court_id, date).await?;

        if !self.generation.is_current(ticket) {
            debug!(court_id, %date, "dropping superseded time slot response");
            return Ok(SlotRefresh::Superseded);
        }

        let available = available_slots(&slots, court_id);
        let count = available.len();
        self.store.set_time_slots(slots, available);
        debug!(court_id, %date, available = count, "time slots applied");

        Ok(SlotRefresh::Applied(count))
    }

    /// Makes any in-flight refresh a no-op, e.g. when the draft is reset.
    pub fn cancel_pending(&self) {
        self.generation.invalidate();
    }
}

/// Open slots on `court_id`, in the order the API returned them.
pub fn available_slots(slots: &[TimeSlot], court_id: CourtId) -> Vec<TimeSlot> {
    slots
        .iter()
        .filter(|slot| slot.available && slot.court_id == court_id)
        .cloned()
        .collect()
}
