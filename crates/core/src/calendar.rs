use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::store::BookingStore;

/// Flags a date picker attaches to a rendered day.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayModifiers {
    pub disabled: bool,
    #[serde(default)]
    pub selected: bool,
    #[serde(default)]
    pub today: bool,
    /// Day belongs to the previous or next month
    #[serde(default)]
    pub outside: bool,
}

impl DayModifiers {
    pub fn enabled() -> Self {
        Self::default()
    }

    pub fn disabled() -> Self {
        Self {
            disabled: true,
            ..Self::default()
        }
    }
}

/// Applies a date picker day click to the booking store.
///
/// Disabled days are ignored entirely: the store is left alone and
/// `on_day_click` is not called. Otherwise the date is stored, the calendar
/// is marked as clicked, and `on_day_click` is then called once with the
/// original arguments. Returns whether the click was applied.
pub fn handle_day_click<E, F>(
    store: &BookingStore,
    day: NaiveDate,
    modifiers: &DayModifiers,
    event: &E,
    on_day_click: Option<F>,
) -> bool
where
    F: FnOnce(NaiveDate, &DayModifiers, &E),
{
    if modifiers.disabled {
        trace!(%day, "ignoring click on disabled day");
        return false;
    }

    store.set_selected_date(Some(day));
    store.set_has_clicked_date(true);

    if let Some(callback) = on_day_click {
        callback(day, modifiers, event);
    }

    true
}

/// Binds [`handle_day_click`] to a store and an optional external callback,
/// for widgets that take a single click handler.
pub struct DayClickHandler<'a, E> {
    store: &'a BookingStore,
    on_day_click: Option<Box<dyn FnMut(NaiveDate, &DayModifiers, &E) + 'a>>,
}

impl<'a, E> DayClickHandler<'a, E> {
    pub fn new(store: &'a BookingStore) -> Self {
        Self {
            store,
            on_day_click: None,
        }
    }

    pub fn with_callback(
        mut self,
        callback: impl FnMut(NaiveDate, &DayModifiers, &E) + 'a,
    ) -> Self {
        self.on_day_click = Some(Box::new(callback));
        self
    }

    pub fn click(&mut self, day: NaiveDate, modifiers: &DayModifiers, event: &E) -> bool {
        let callback = self.on_day_click.as_mut().map(|callback| {
            move |day: NaiveDate, modifiers: &DayModifiers, event: &E| {
                callback(day, modifiers, event)
            }
        });
        handle_day_click(self.store, day, modifiers, event, callback)
    }
}
