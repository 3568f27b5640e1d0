use super::{DayClassifier, MonthView};
use thiserror::Error;
use time::{Date, Month};

/// The month currently on display, plus what is needed to draw it
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct MonthPager<C> {
    today: Date,
    year: i32,
    month: Month,
    classifier: C,
}

impl<C: DayClassifier> MonthPager<C> {
    pub(crate) fn new(today: Date, classifier: C) -> Self {
        MonthPager {
            today,
            year: today.year(),
            month: today.month(),
            classifier,
        }
    }

    pub(crate) fn start_date(mut self, date: Date) -> Self {
        self.jump_to_date(date);
        self
    }

    /// Build the view of the displayed month from scratch
    pub(crate) fn view(&self) -> MonthView {
        MonthView::new(self.year, self.month, &self.classifier)
            .expect("displayed month should be representable")
    }

    pub(crate) fn jump_to_today(&mut self) {
        self.jump_to_date(self.today);
    }

    pub(crate) fn jump_to_date(&mut self, date: Date) {
        self.year = date.year();
        self.month = date.month();
    }

    pub(crate) fn next_month(&mut self) -> Result<(), OutOfTimeError> {
        let year = if self.month == Month::December {
            self.year.checked_add(1).ok_or(OutOfTimeError)?
        } else {
            self.year
        };
        self.go_to(year, self.month.next())
    }

    pub(crate) fn previous_month(&mut self) -> Result<(), OutOfTimeError> {
        let year = if self.month == Month::January {
            self.year.checked_sub(1).ok_or(OutOfTimeError)?
        } else {
            self.year
        };
        self.go_to(year, self.month.previous())
    }

    pub(crate) fn next_year(&mut self) -> Result<(), OutOfTimeError> {
        let year = self.year.checked_add(1).ok_or(OutOfTimeError)?;
        self.go_to(year, self.month)
    }

    pub(crate) fn previous_year(&mut self) -> Result<(), OutOfTimeError> {
        let year = self.year.checked_sub(1).ok_or(OutOfTimeError)?;
        self.go_to(year, self.month)
    }

    fn go_to(&mut self, year: i32, month: Month) -> Result<(), OutOfTimeError> {
        let date = Date::from_calendar_date(year, month, 1).map_err(|_| OutOfTimeError)?;
        self.jump_to_date(date);
        Ok(())
    }
}

#[derive(Copy, Clone, Debug, Eq, Error, PartialEq)]
#[error("reached the end of time")]
pub(crate) struct OutOfTimeError;
