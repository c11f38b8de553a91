//! Expiration dates (stored as MM/DD/YY) and reminder scheduling rules.

use chrono::{Days, NaiveDate, NaiveDateTime, NaiveTime};

use crate::error::{FridgeError, Result};
use crate::model::InventoryItem;

const EXPIRATION_FORMAT: &str = "%m/%d/%y";

pub fn format_expiration(date: NaiveDate) -> String {
    date.format(EXPIRATION_FORMAT).to_string()
}

pub fn parse_expiration(value: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), EXPIRATION_FORMAT).map_err(|e| {
        FridgeError::Validation(format!("'{}' is not an MM/DD/YY date: {}", value, e))
    })
}

/// Items expiring between `today` and `today + days` (inclusive), soonest first.
/// Already expired items and unparseable dates are left out.
pub fn expiring_within(items: &[InventoryItem], today: NaiveDate, days: u32) -> Vec<(NaiveDate, &InventoryItem)> {
    // Windows reaching past the calendar end cover everything after today
    let last = today
        .checked_add_days(Days::new(u64::from(days)))
        .unwrap_or(NaiveDate::MAX);

    let mut due: Vec<(NaiveDate, &InventoryItem)> = items
        .iter()
        .filter_map(|item| parse_expiration(&item.expiration).ok().map(|date| (date, item)))
        .filter(|(date, _)| *date >= today && *date <= last)
        .collect();

    due.sort_by_key(|(date, _)| *date);
    due
}

/// Items whose expiration date lies before `today`
pub fn expired(items: &[InventoryItem], today: NaiveDate) -> Vec<&InventoryItem> {
    items
        .iter()
        .filter(|item| parse_expiration(&item.expiration).is_ok_and(|date| date < today))
        .collect()
}

/// Combine a picked date and time into a reminder fire time.
///
/// The reminder must lie strictly in the future.
pub fn reminder_fire_time(date: NaiveDate, time: NaiveTime, now: NaiveDateTime) -> Result<NaiveDateTime> {
    let fire_at = date.and_time(time);
    if fire_at <= now {
        return Err(FridgeError::Validation(
            "reminder time must be in the future".to_string(),
        ));
    }
    Ok(fire_at)
}
