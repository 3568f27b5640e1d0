use super::DayClassifier;
use std::iter::successors;
use time::{Date, Month, Weekday};

pub(crate) const DAYS_IN_WEEK: usize = 7;

/// How a day is highlighted.  When more than one applies, the earlier variant
/// in `Today`, `Holiday`, `Sunday` wins.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub(crate) enum DayKind {
    Normal,
    Sunday,
    Holiday,
    Today,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct DayCell {
    pub(crate) date: Date,
    pub(crate) kind: DayKind,
}

impl DayCell {
    pub(crate) fn day(&self) -> u8 {
        self.date.day()
    }

    pub(crate) fn label(&self) -> String {
        if self.kind == DayKind::Today {
            format!("[{:2}]", self.day())
        } else {
            format!(" {:2} ", self.day())
        }
    }
}

/// One row of the month grid, Monday first.  Days outside the month are
/// `None`.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub(crate) struct Week([Option<DayCell>; DAYS_IN_WEEK]);

impl Week {
    fn set(&mut self, cell: DayCell) {
        let i = usize::from(cell.date.weekday().number_days_from_monday());
        self.0[i] = Some(cell);
    }

    /// Iterate over the column index & cell of every day in the week that
    /// belongs to the month
    pub(crate) fn enumerate(&self) -> impl Iterator<Item = (u16, DayCell)> + '_ {
        std::iter::zip(0u16.., self.0.iter()).filter_map(|(i, cell)| cell.map(|c| (i, c)))
    }
}

/// A fully classified month, ready to be drawn
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct MonthView {
    year: i32,
    month: Month,
    weeks: Vec<Week>,
}

impl MonthView {
    pub(crate) fn new<C: DayClassifier>(year: i32, month: Month, classifier: &C) -> Option<Self> {
        let first = Date::from_calendar_date(year, month, 1).ok()?;
        let mut weeks = vec![Week::default()];
        for date in successors(Some(first), |d| d.next_day()).take_while(|d| d.month() == month) {
            if date.weekday() == Weekday::Monday && date != first {
                weeks.push(Week::default());
            }
            let cell = DayCell {
                date,
                kind: classifier.classify(date),
            };
            if let Some(week) = weeks.last_mut() {
                week.set(cell);
            }
        }
        Some(MonthView { year, month, weeks })
    }

    pub(crate) fn year(&self) -> i32 {
        self.year
    }

    pub(crate) fn month(&self) -> Month {
        self.month
    }

    pub(crate) fn weeks(&self) -> &[Week] {
        &self.weeks
    }
}
