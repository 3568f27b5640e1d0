use ratatui::{
    buffer::Buffer,
    layout::Flex,
    layout::{Alignment, Layout, Rect},
    style::Style,
    text::{Line, Span, Text},
    widgets::{Block, Clear, Paragraph, Widget},
};

pub(crate) static HELP_TEXT: &[&str] = &[
    "k, UP           Previous month",
    "j, DOWN         Next month",
    "w, PAGE UP      Previous year",
    "z, PAGE DOWN    Next year",
    "0, HOME         Jump to today",
    "g               Input date to jump to",
    "?               Show this help",
    "q, ESC          Quit",
    "",
    "Press the Any Key to dismiss.",
];

/// A bordered box of text drawn centered over whatever is beneath it
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct Popup<'a> {
    title: &'a str,
    lines: Vec<Line<'a>>,
    style: Style,
}

impl<'a> Popup<'a> {
    pub(crate) fn new<I, S>(title: &'a str, lines: I, style: Style) -> Popup<'a>
    where
        I: IntoIterator<Item = S>,
        S: Into<Line<'a>>,
    {
        Popup {
            title,
            lines: lines.into_iter().map(Into::into).collect(),
            style,
        }
    }

    pub(crate) fn help(style: Style) -> Popup<'static> {
        Popup::new(" Commands ", HELP_TEXT.iter().copied(), style)
    }
}

impl Widget for Popup<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let text = Text::from(self.lines);
        let height = u16::try_from(text.height())
            .unwrap_or(u16::MAX)
            .min(area.height.saturating_sub(2))
            .saturating_add(2);
        let width = u16::try_from(text.width())
            .unwrap_or(u16::MAX)
            .max(u16::try_from(Span::raw(self.title).width()).unwrap_or(u16::MAX))
            .min(area.width.saturating_sub(4))
            .saturating_add(2);
        let para = Paragraph::new(text)
            .block(
                Block::bordered()
                    .title(self.title)
                    .title_alignment(Alignment::Center),
            )
            .style(self.style);
        let [popup_area] = Layout::horizontal([width]).flex(Flex::Center).areas(area);
        let [popup_area] = Layout::vertical([height])
            .flex(Flex::Center)
            .areas(popup_area);
        let outer_area = Rect {
            x: popup_area.x.saturating_sub(1),
            y: popup_area.y,
            width: popup_area.width.saturating_add(2).min(area.width),
            height: popup_area.height,
        };
        Clear.render(outer_area, buf);
        Block::new().style(self.style).render(outer_area, buf);
        para.render(popup_area, buf);
    }
}
