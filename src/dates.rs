use thiserror::Error;
use time::{Date, Month, Weekday};

/// Convert a loose day/month/year triple into a real calendar date
pub(crate) fn calendar_date(day: u32, month: u32, year: i32) -> Result<Date, InvalidDate> {
    let invalid = InvalidDate { day, month, year };
    let month = u8::try_from(month)
        .ok()
        .and_then(|m| Month::try_from(m).ok())
        .ok_or(invalid)?;
    let day = u8::try_from(day).map_err(|_| invalid)?;
    Date::from_calendar_date(year, month, day).map_err(|_| invalid)
}

/// Returns whether the given date falls on a Sunday.  Fails if the triple is
/// not a real date.
pub(crate) fn is_sunday(day: u32, month: u32, year: i32) -> Result<bool, InvalidDate> {
    calendar_date(day, month, year).map(|date| date.weekday() == Weekday::Sunday)
}

pub(crate) fn is_today(day: u32, month: u32, year: i32, today: Date) -> bool {
    let (ty, tm, td) = today.to_calendar_date();
    year == ty && month == u32::from(u8::from(tm)) && day == u32::from(td)
}

/// Split a date into the `(day, month, year)` triple the holiday predicates
/// work with
pub(crate) fn triple(date: Date) -> (u32, u32, i32) {
    let (year, month, day) = date.to_calendar_date();
    (u32::from(day), u32::from(u8::from(month)), year)
}

#[derive(Clone, Copy, Debug, Eq, Error, PartialEq)]
#[error("invalid date: {day:02}.{month:02}.{year:04}")]
pub(crate) struct InvalidDate {
    day: u32,
    month: u32,
    year: i32,
}
