use crate::theme::{
    jumpto::{READY_ENTER_STYLE, UNFILLED_CELL_STYLE},
    BASE_STYLE,
};
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Flex, Layout, Margin, Rect},
    text::{Line, Span, Text},
    widgets::{Block, Clear, StatefulWidget, Widget},
};
use time::{Date, Month};

const OUTER_WIDTH: u16 = 18;
const OUTER_HEIGHT: u16 = 8;
const ENTER_POS: usize = 8;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct JumpTo;

impl StatefulWidget for JumpTo {
    type State = JumpToState;

    /*
     * ..................
     * .┌── Jump To… ──┐.
     * .│              │.
     * .│  DD.MM.YYYY  │.
     * .│              │.
     * .│   [ENTER]    │.
     * .└──────────────┘.
     * ..................
     */

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        let [outer_area] = Layout::horizontal([OUTER_WIDTH])
            .flex(Flex::Center)
            .areas(area);
        let [outer_area] = Layout::vertical([OUTER_HEIGHT])
            .flex(Flex::Center)
            .areas(outer_area);
        Clear.render(outer_area, buf);
        Block::new().style(BASE_STYLE).render(outer_area, buf);
        let block_area = outer_area.inner(Margin::new(1, 1));
        Block::bordered()
            .title(" Jump To… ")
            .title_alignment(Alignment::Center)
            .render(block_area, buf);
        let text_area = block_area.inner(Margin::new(1, 1));
        state.to_text().render(text_area, buf);
    }
}

/// Digits typed so far into the `DD.MM.YYYY` template
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub(crate) struct JumpToState {
    day: [Option<u8>; 2],
    month: [Option<u8>; 2],
    year: [Option<u8>; 4],
    pos: usize,
}

impl JumpToState {
    pub(crate) fn new() -> JumpToState {
        JumpToState::default()
    }

    fn to_text(self) -> Text<'static> {
        Text::from_iter([
            Line::styled("", BASE_STYLE),
            self.to_line(),
            Line::styled("", BASE_STYLE),
            // Style a span and convert it to a line rather than creating a
            // styled line directly so that only the "[ENTER]" text and not any
            // of its centering padding will be underlined:
            Line::from(Span::styled(
                "[ENTER]",
                if self.pos == ENTER_POS {
                    READY_ENTER_STYLE
                } else {
                    BASE_STYLE
                },
            )),
        ])
        .centered()
    }

    fn to_line(self) -> Line<'static> {
        let mut spans = Vec::new();
        let mut first = true;
        for (fallback, digits) in [
            ("D", self.day.as_slice()),
            ("M", self.month.as_slice()),
            ("Y", self.year.as_slice()),
        ] {
            if !std::mem::replace(&mut first, false) {
                spans.push(Span::styled(".", BASE_STYLE));
            }
            for dg in digits {
                spans.push(match dg {
                    Some(d) => Span::styled(format!("{d}"), BASE_STYLE),
                    None => Span::styled(fallback, UNFILLED_CELL_STYLE),
                });
            }
        }
        Line::from_iter(spans)
    }

    fn slot(&mut self, pos: usize) -> &mut Option<u8> {
        match pos {
            0..2 => &mut self.day[pos],
            2..4 => &mut self.month[pos - 2],
            4..8 => &mut self.year[pos - 4],
            _ => unreachable!("cursor should not be past the last digit"),
        }
    }

    pub(crate) fn handle_input(&mut self, input: JumpToInput) -> JumpToOutput {
        match (input, self.pos) {
            (JumpToInput::Digit(d), 0..ENTER_POS) => {
                *self.slot(self.pos) = Some(d);
                self.pos += 1;
                JumpToOutput::Ok
            }
            (JumpToInput::Backspace, 1..) => {
                self.pos -= 1;
                *self.slot(self.pos) = None;
                JumpToOutput::Ok
            }
            (JumpToInput::Enter, ENTER_POS) => match self.to_date() {
                Some(date) => JumpToOutput::Jump(date),
                None => JumpToOutput::Invalid,
            },
            _ => JumpToOutput::Invalid,
        }
    }

    fn to_date(self) -> Option<Date> {
        let day = number(&self.day)?;
        let month = number(&self.month)?;
        let year = number(&self.year).filter(|&y| y > 0)?;
        let month = Month::try_from(u8::try_from(month).ok()?).ok()?;
        let day = u8::try_from(day).ok()?;
        Date::from_calendar_date(i32::try_from(year).ok()?, month, day).ok()
    }
}

fn number(digits: &[Option<u8>]) -> Option<u32> {
    digits
        .iter()
        .try_fold(0u32, |acc, d| d.map(|d| acc * 10 + u32::from(d)))
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum JumpToInput {
    Digit(u8),
    Backspace,
    Enter,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum JumpToOutput {
    Ok,
    Invalid,
    Jump(Date),
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::date;

    fn type_digits(state: &mut JumpToState, digits: &str) {
        for c in digits.chars() {
            let d = c.to_digit(10).and_then(|d| u8::try_from(d).ok()).unwrap();
            assert_eq!(state.handle_input(JumpToInput::Digit(d)), JumpToOutput::Ok);
        }
    }

    fn line_text(state: JumpToState) -> String {
        state
            .to_line()
            .spans
            .iter()
            .map(|s| s.content.as_ref())
            .collect()
    }

    #[test]
    fn test_jump() {
        let mut state = JumpToState::new();
        type_digits(&mut state, "08022024");
        assert_eq!(line_text(state), "08.02.2024");
        assert_eq!(
            state.handle_input(JumpToInput::Enter),
            JumpToOutput::Jump(date!(2024 - 02 - 08))
        );
    }

    #[test]
    fn test_partial_entry() {
        let mut state = JumpToState::new();
        assert_eq!(line_text(state), "DD.MM.YYYY");
        type_digits(&mut state, "250");
        assert_eq!(line_text(state), "25.0M.YYYY");
        assert_eq!(state.handle_input(JumpToInput::Enter), JumpToOutput::Invalid);
    }

    #[test]
    fn test_backspace() {
        let mut state = JumpToState::new();
        assert_eq!(
            state.handle_input(JumpToInput::Backspace),
            JumpToOutput::Invalid
        );
        type_digits(&mut state, "2506");
        assert_eq!(state.handle_input(JumpToInput::Backspace), JumpToOutput::Ok);
        assert_eq!(line_text(state), "25.0M.YYYY");
        type_digits(&mut state, "61991");
        assert_eq!(
            state.handle_input(JumpToInput::Enter),
            JumpToOutput::Jump(date!(1991 - 06 - 25))
        );
    }

    #[test]
    fn test_earliest_year() {
        let mut state = JumpToState::new();
        type_digits(&mut state, "01010001");
        assert_eq!(
            state.handle_input(JumpToInput::Enter),
            JumpToOutput::Jump(date!(0001 - 01 - 01))
        );
    }

    #[test]
    fn test_too_many_digits() {
        let mut state = JumpToState::new();
        type_digits(&mut state, "01012000");
        assert_eq!(
            state.handle_input(JumpToInput::Digit(1)),
            JumpToOutput::Invalid
        );
        assert_eq!(line_text(state), "01.01.2000");
    }

    #[test]
    fn test_impossible_dates() {
        for digits in ["31022024", "00012024", "01132024", "29022023", "01010000"] {
            let mut state = JumpToState::new();
            type_digits(&mut state, digits);
            assert_eq!(
                state.handle_input(JumpToInput::Enter),
                JumpToOutput::Invalid,
                "{digits} should be rejected"
            );
        }
    }
}
