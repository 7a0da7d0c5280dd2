use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Paragraph};

use crate::merge::MergeState;
use crate::session::Session;

const HINT: &str = "Paste or drop PDF paths (quoted or unquoted) / folder paths to change directory";
const KEYS: &str = "Shift+↑/↓ move  ↑/↓ select  m merge  s save  l load  q quit";

/// Draw the whole screen.
pub fn render(frame: &mut Frame, session: &Session) {
    let [header, hint, list, buttons, footer] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Min(3),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .areas(frame.area());

    frame.render_widget(
        Paragraph::new(format!("Current directory: {}", session.workdir().display())),
        header,
    );
    frame.render_widget(
        Paragraph::new(HINT).style(Style::default().add_modifier(Modifier::DIM)),
        hint,
    );
    render_list(frame, session, list);
    frame.render_widget(Paragraph::new(button_row(session)), buttons);
    frame.render_widget(
        Paragraph::new(KEYS).style(Style::default().add_modifier(Modifier::DIM)),
        footer,
    );
}

fn render_list(frame: &mut Frame, session: &Session, area: Rect) {
    let items: Vec<ListItem> = session
        .collection()
        .iter()
        .map(|path| ListItem::new(path.display().to_string()))
        .collect();

    let title = format!(" Documents ({}) ", session.collection().len());
    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title(title))
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
        .highlight_symbol("> ");

    let mut state = ListState::default().with_selected(session.focus());
    frame.render_stateful_widget(list, area, &mut state);
}

fn button_row(session: &Session) -> Line<'static> {
    let mut spans = vec![
        button("Merge (m)", matches!(session.merge_state(), MergeState::Running)),
        Span::raw(" "),
        button("Save (s)", false),
        Span::raw(" "),
        button("Load (l)", false),
    ];
    if let Some(status) = session.status() {
        spans.push(Span::raw("  "));
        spans.push(Span::styled(
            status.to_string(),
            Style::default().add_modifier(Modifier::BOLD),
        ));
    }
    Line::from(spans)
}

fn button(label: &'static str, busy: bool) -> Span<'static> {
    let style = if busy {
        Style::default().add_modifier(Modifier::DIM)
    } else {
        Style::default().add_modifier(Modifier::REVERSED)
    };
    Span::styled(format!("[ {label} ]"), style)
}
