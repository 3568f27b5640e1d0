mod pager;
mod view;
mod widget;
pub(crate) use self::pager::MonthPager;
pub(crate) use self::view::{DayKind, MonthView};
pub(crate) use self::widget::MonthGrid;
use crate::dates::{is_sunday, is_today, triple};
use crate::holidays::HolidayStore;
use time::Date;

pub(crate) trait DayClassifier {
    fn classify(&self, date: Date) -> DayKind;
}

/// Classifies days using the holiday rules and the date that the program
/// considers to be today
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct Highlighter {
    today: Date,
    holidays: HolidayStore,
}

impl Highlighter {
    pub(crate) fn new(today: Date, holidays: HolidayStore) -> Highlighter {
        Highlighter { today, holidays }
    }
}

impl DayClassifier for Highlighter {
    fn classify(&self, date: Date) -> DayKind {
        let (day, month, year) = triple(date);
        if is_today(day, month, year, self.today) {
            DayKind::Today
        } else if self.holidays.contains(date) {
            DayKind::Holiday
        } else if is_sunday(day, month, year) == Ok(true) {
            DayKind::Sunday
        } else {
            DayKind::Normal
        }
    }
}
