use super::view::{DayKind, MonthView};
use crate::theme::{HOLIDAY_STYLE, SUNDAY_STYLE, TITLE_STYLE, TODAY_STYLE, WEEKDAY_STYLE};
use ratatui::{prelude::*, widgets::*};
use time::Month;

static HEADER: &str = "Pon   Tor   Sre   Čet   Pet   Sob   Ned";

/// Number of columns per day of week
const DAY_WIDTH: u16 = 6;

/// Width of the calendar grid in columns
const MAIN_WIDTH: u16 = DAY_WIDTH * 7;

/// Columns between the left edge of a day's slot and its label
const DAY_INDENT: u16 = 1;

/// Number of lines taken up by the title, the weekday names, and the rule
/// below them
const HEADER_LINES: u16 = 3;

/// Number of lines taken up by each week of the calendar
const WEEK_LINES: u16 = 2;

const ACS_HLINE: char = '─';

pub(crate) fn month_name(month: Month) -> &'static str {
    match month {
        Month::January => "Januar",
        Month::February => "Februar",
        Month::March => "Marec",
        Month::April => "April",
        Month::May => "Maj",
        Month::June => "Junij",
        Month::July => "Julij",
        Month::August => "Avgust",
        Month::September => "September",
        Month::October => "Oktober",
        Month::November => "November",
        Month::December => "December",
    }
}

/// Draws a [`MonthView`] as a Monday-first grid.  All date logic has already
/// been done by the time the view reaches this widget.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct MonthGrid<'a> {
    view: &'a MonthView,
}

impl<'a> MonthGrid<'a> {
    pub(crate) fn new(view: &'a MonthView) -> MonthGrid<'a> {
        MonthGrid { view }
    }
}

impl Widget for MonthGrid<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let left = area.width.saturating_sub(MAIN_WIDTH) / 2;
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Length(left),
                Constraint::Length(MAIN_WIDTH.min(area.width)),
                Constraint::Min(0),
            ])
            .split(area);
        let mut canvas = BufferCanvas::new(chunks[1], buf);
        canvas.draw_title(self.view.month(), self.view.year());
        canvas.draw_header();
        for (i, week) in std::iter::zip(0u16.., self.view.weeks()) {
            for (col, cell) in week.enumerate() {
                canvas.draw_day(i, col, &cell.label(), cell.kind);
            }
        }
    }
}

fn day_style(kind: DayKind) -> Style {
    match kind {
        DayKind::Normal => Style::new(),
        DayKind::Sunday => SUNDAY_STYLE,
        DayKind::Holiday => HOLIDAY_STYLE,
        DayKind::Today => TODAY_STYLE,
    }
}

#[derive(Debug, Eq, PartialEq)]
struct BufferCanvas<'a> {
    area: Rect,
    buf: &'a mut Buffer,
}

impl<'a> BufferCanvas<'a> {
    fn new(area: Rect, buf: &'a mut Buffer) -> Self {
        Self { area, buf }
    }

    fn draw_title(&mut self, month: Month, year: i32) {
        let title = format!("{} {year}", month_name(month));
        let width = u16::try_from(Text::raw(title.as_str()).width()).unwrap_or(u16::MAX);
        self.mvprint(
            0,
            MAIN_WIDTH.saturating_sub(width) / 2,
            title,
            Some(TITLE_STYLE),
        );
    }

    fn draw_header(&mut self) {
        self.mvprint(1, DAY_INDENT, HEADER, Some(WEEKDAY_STYLE));
        self.hline(2, 0, ACS_HLINE, MAIN_WIDTH);
    }

    fn draw_day(&mut self, week_no: u16, col: u16, label: &str, kind: DayKind) {
        self.mvprint(
            week_no * WEEK_LINES + HEADER_LINES,
            col * DAY_WIDTH + DAY_INDENT,
            label,
            Some(day_style(kind)),
        );
    }

    fn mvprint<S: AsRef<str>>(&mut self, y: u16, x: u16, s: S, style: Option<Style>) {
        if y < self.area.height && x < self.area.width {
            let text = Text::styled(s.as_ref(), style.unwrap_or_default());
            let width = u16::try_from(text.width()).unwrap_or(u16::MAX);
            // Using a Paragraph lets us truncate text that extends beyond the
            // calendar's area, though we need to be sure that the Rect passed
            // to the Paragraph is entirely within the frame lest a panic
            // result.
            Paragraph::new(text).render(
                Rect {
                    x: x + self.area.x,
                    y: y + self.area.y,
                    width: (self.area.width - x).min(width),
                    height: 1,
                },
                self.buf,
            );
        }
    }

    fn hline(&mut self, y: u16, x: u16, ch: char, length: u16) {
        self.mvprint(y, x, String::from(ch).repeat(length.into()), None);
    }
}
