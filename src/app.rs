use crate::calendar::{DayClassifier, MonthGrid, MonthPager};
use crate::jumpto::{JumpTo, JumpToInput, JumpToOutput, JumpToState};
use crate::popup::Popup;
use crate::theme::BASE_STYLE;
use crossterm::event::{read, KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    backend::Backend,
    buffer::Buffer,
    layout::Rect,
    widgets::{StatefulWidget, Widget},
    Terminal,
};
use std::io::{self, Write};

static NOTICE_FOOTER: &str = "Press the Any Key to dismiss.";

#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct App<C> {
    pager: MonthPager<C>,
    state: AppState,
    notices: Vec<String>,
}

impl<C: DayClassifier> App<C> {
    pub(crate) fn new(pager: MonthPager<C>) -> App<C> {
        App {
            pager,
            state: AppState::Calendar,
            notices: Vec::new(),
        }
    }

    /// Show the given messages in a popup until the user presses a key
    pub(crate) fn with_notices<I: IntoIterator<Item = String>>(mut self, notices: I) -> App<C> {
        self.notices.extend(notices);
        if !self.notices.is_empty() {
            self.state = AppState::Noticing;
        }
        self
    }

    pub(crate) fn run<B: Backend>(mut self, mut terminal: Terminal<B>) -> io::Result<()> {
        while !self.quitting() {
            self.draw(&mut terminal)?;
            self.handle_input()?;
        }
        Ok(())
    }

    fn draw<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        terminal.draw(|frame| frame.render_widget(self, frame.area()))?;
        Ok(())
    }

    fn handle_input(&mut self) -> io::Result<()> {
        let normal_modifiers = KeyModifiers::NONE | KeyModifiers::SHIFT;
        if let Some(KeyEvent {
            code, modifiers, ..
        }) = read()?.as_key_press_event()
        {
            if modifiers == KeyModifiers::CONTROL && code == KeyCode::Char('c') {
                self.state = AppState::Quitting;
            } else if !normal_modifiers.contains(modifiers) || !self.handle_key(code) {
                self.beep()?;
            }
        }
        // else: Redraw on resize, and we might as well redraw on other stuff
        // too
        Ok(())
    }

    // Returns `false` if the user pressed an invalid key
    fn handle_key(&mut self, key: KeyCode) -> bool {
        match &mut self.state {
            AppState::Calendar => match key {
                KeyCode::Char('j') | KeyCode::Down => self.pager.next_month().is_ok(),
                KeyCode::Char('k') | KeyCode::Up => self.pager.previous_month().is_ok(),
                KeyCode::Char('z') | KeyCode::PageDown => self.pager.next_year().is_ok(),
                KeyCode::Char('w') | KeyCode::PageUp => self.pager.previous_year().is_ok(),
                KeyCode::Char('0') | KeyCode::Home => {
                    self.pager.jump_to_today();
                    true
                }
                KeyCode::Char('g') => {
                    self.state = AppState::Jumping(JumpToState::new());
                    true
                }
                KeyCode::Char('q') | KeyCode::Esc => {
                    self.state = AppState::Quitting;
                    true
                }
                KeyCode::Char('?') => {
                    self.state = AppState::Helping;
                    true
                }
                _ => false,
            },
            AppState::Helping => {
                self.state = AppState::Calendar;
                true
            }
            AppState::Noticing => {
                self.notices.clear();
                self.state = AppState::Calendar;
                true
            }
            AppState::Jumping(state) => {
                if matches!(key, KeyCode::Char('q' | 'g') | KeyCode::Esc) {
                    self.state = AppState::Calendar;
                    true
                } else {
                    let output = match key {
                        KeyCode::Char(c @ '0'..='9') => c
                            .to_digit(10)
                            .and_then(|d| u8::try_from(d).ok())
                            .map_or(JumpToOutput::Invalid, |d| {
                                state.handle_input(JumpToInput::Digit(d))
                            }),
                        KeyCode::Backspace | KeyCode::Delete => {
                            state.handle_input(JumpToInput::Backspace)
                        }
                        KeyCode::Enter => state.handle_input(JumpToInput::Enter),
                        _ => JumpToOutput::Invalid,
                    };
                    match output {
                        JumpToOutput::Ok => true,
                        JumpToOutput::Invalid => false,
                        JumpToOutput::Jump(date) => {
                            self.state = AppState::Calendar;
                            self.pager.jump_to_date(date);
                            true
                        }
                    }
                }
            }
            AppState::Quitting => false,
        }
    }

    fn beep(&self) -> io::Result<()> {
        io::stdout().write_all(b"\x07")
    }

    fn quitting(&self) -> bool {
        self.state == AppState::Quitting
    }
}

impl<C: DayClassifier> Widget for &mut App<C> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        buf.set_style(area, BASE_STYLE);
        let view = self.pager.view();
        MonthGrid::new(&view).render(area, buf);
        match self.state {
            AppState::Helping => Popup::help(BASE_STYLE).render(area, buf),
            AppState::Noticing => {
                let lines = self
                    .notices
                    .iter()
                    .map(String::as_str)
                    .chain(["", NOTICE_FOOTER]);
                Popup::new(" Problems ", lines, BASE_STYLE).render(area, buf);
            }
            AppState::Jumping(ref mut state) => JumpTo.render(area, buf, state),
            AppState::Calendar | AppState::Quitting => (),
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum AppState {
    Calendar,
    Helping,
    Noticing,
    Jumping(JumpToState),
    Quitting,
}
