use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};
use unicode_width::UnicodeWidthStr;

use crate::{
    app::App,
    session::{Mark, Phase, TypingSession, WordView},
    word_set::WordMode,
};

const HORIZONTAL_MARGIN: u16 = 5;
const VERTICAL_MARGIN: u16 = 2;
const SUMMARY_LINES: u16 = 3;

impl Widget for &App {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let session = &self.session;

        let bold_style = Style::default().add_modifier(Modifier::BOLD);
        let dim_style = Style::default().add_modifier(Modifier::DIM);
        let italic_style = Style::default().add_modifier(Modifier::ITALIC);

        let max_chars_per_line = area.width.saturating_sub(HORIZONTAL_MARGIN * 2).max(1);
        let body_lines = match session.phase() {
            Phase::Finished => SUMMARY_LINES,
            Phase::Idle | Phase::Running => words_occupied_lines(session, max_chars_per_line),
        };

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .horizontal_margin(HORIZONTAL_MARGIN)
            .vertical_margin(VERTICAL_MARGIN)
            .constraints([
                Constraint::Min(0),
                Constraint::Length(1), // modes
                Constraint::Length(1), // timer
                Constraint::Length(1), // progress
                Constraint::Length(1),
                Constraint::Length(body_lines),
                Constraint::Length(1),
                Constraint::Length(1), // hints
                Constraint::Min(0),
            ])
            .split(area);

        Paragraph::new(mode_selector(session.mode(), bold_style))
            .alignment(Alignment::Center)
            .render(chunks[1], buf);

        Paragraph::new(Span::styled(
            format!("{}s", session.time_remaining()),
            bold_style,
        ))
        .alignment(Alignment::Center)
        .render(chunks[2], buf);

        match session.phase() {
            Phase::Idle | Phase::Running => {
                let (pos, total) = session.progress();
                Paragraph::new(Span::styled(format!("{pos}/{total}"), dim_style))
                    .alignment(Alignment::Center)
                    .render(chunks[3], buf);

                let alignment = if body_lines == 1 {
                    // short sets look better centered
                    Alignment::Center
                } else {
                    Alignment::Left
                };
                Paragraph::new(word_line(session))
                    .alignment(alignment)
                    .wrap(Wrap { trim: true })
                    .render(chunks[5], buf);
            }
            Phase::Finished => {
                let summary = session.summary();
                let headline = if summary.attempted == summary.total {
                    "all words done"
                } else {
                    "time's up"
                };
                let lines = vec![
                    Line::from(Span::styled(headline, italic_style)),
                    Line::from(Span::styled(
                        format!("{} / {} words correct", summary.correct, summary.total),
                        Style::default().patch(bold_style).fg(Color::Green),
                    )),
                    Line::from(Span::styled(
                        format!("{} wpm   {}% acc", summary.wpm(), summary.accuracy()),
                        bold_style,
                    )),
                ];
                Paragraph::new(lines)
                    .alignment(Alignment::Center)
                    .render(chunks[5], buf);
            }
        }

        Paragraph::new(Span::styled(hints(session.phase()), italic_style))
            .alignment(Alignment::Center)
            .render(chunks[7], buf);
    }
}

fn mode_selector(active: WordMode, bold_style: Style) -> Line<'static> {
    let mut spans = Vec::with_capacity(WordMode::ALL.len() * 2);
    for (i, mode) in WordMode::ALL.into_iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw("  "));
        }
        let style = if mode == active {
            Style::default()
                .patch(bold_style)
                .fg(Color::Black)
                .bg(Color::Magenta)
        } else {
            Style::default().fg(Color::Gray)
        };
        spans.push(Span::styled(format!(" {mode} "), style));
    }
    Line::from(spans)
}

fn word_line(session: &TypingSession) -> Line<'static> {
    let bold_style = Style::default().add_modifier(Modifier::BOLD);
    let completed_style = Style::default().fg(Color::DarkGray);
    let pending_style = Style::default().fg(Color::Magenta);

    let mut spans = Vec::new();
    for (idx, word) in session.words().iter().enumerate() {
        if idx > 0 {
            spans.push(Span::raw(" "));
        }
        match session.word_view(idx) {
            WordView::Completed => spans.push(Span::styled(word.to_string(), completed_style)),
            WordView::Pending => spans.push(Span::styled(word.to_string(), pending_style)),
            WordView::Active(letters) => {
                spans.extend(letters.into_iter().map(|letter| {
                    let style = match letter.mark {
                        Mark::Correct => Style::default().patch(bold_style).fg(Color::Green),
                        Mark::Incorrect => Style::default().patch(bold_style).fg(Color::Red),
                        Mark::Cursor => Style::default()
                            .patch(bold_style)
                            .fg(Color::White)
                            .bg(Color::Magenta),
                        Mark::Pending => Style::default().patch(bold_style).fg(Color::Magenta),
                    };
                    Span::styled(letter.char.to_string(), style)
                }));
            }
        }
    }
    Line::from(spans)
}

fn words_occupied_lines(session: &TypingSession, max_chars_per_line: u16) -> u16 {
    let width: usize = session
        .words()
        .iter()
        .map(|w| w.width() + 1)
        .sum::<usize>()
        + session.current_input().width();

    if width <= max_chars_per_line as usize {
        1
    } else {
        // leave room for lines broken early at word boundaries
        (width as f64 / max_chars_per_line as f64).ceil() as u16 + 1
    }
}

fn hints(phase: Phase) -> &'static str {
    match phase {
        Phase::Idle => "(enter) start / (tab) words / (ctrl+r) restart / (esc)ape",
        Phase::Running => "(tab) words / (ctrl+r) restart / (esc)ape",
        Phase::Finished => "(enter) restart / (tab) words / (esc)ape",
    }
}
