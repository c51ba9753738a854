use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Clear, List, ListItem, Paragraph, Wrap};

use crate::panes::Pane;

use super::App;
use super::shell_panes::PaneContent;

pub(super) fn render(frame: &mut Frame, app: &mut App) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(1), Constraint::Length(1)])
        .split(frame.area());

    render_panes(frame, app, rows[0]);
    render_status(frame, app, rows[1]);
    render_help(frame, rows[2]);

    if app.picker.is_some() {
        render_picker(frame, app, rows[0]);
    }
}

/// Fixed arrangement: two columns, code on the right; the left column holds
/// description over result.
fn render_panes(frame: &mut Frame, app: &App, area: Rect) {
    if !app.panes.laid_out() {
        return;
    }
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);
    let left = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(columns[0]);

    render_pane(frame, app, Pane::Description, left[0]);
    render_pane(frame, app, Pane::Result, left[1]);
    render_pane(frame, app, Pane::Code, columns[1]);
}

fn render_pane(frame: &mut Frame, app: &App, pane: Pane, area: Rect) {
    let content: &PaneContent = app.panes.content(pane);
    let focused = app.focus == pane;

    let border_style = if focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .title(content.title.as_str());

    let wrap = match pane {
        // Code keeps its line structure; prose panes wrap.
        Pane::Code => None,
        Pane::Description | Pane::Result => Some(Wrap { trim: false }),
    };

    let mut paragraph = Paragraph::new(content.text.as_str())
        .block(block)
        .scroll((content.scroll, 0));
    if let Some(wrap) = wrap {
        paragraph = paragraph.wrap(wrap);
    }
    frame.render_widget(paragraph, area);
}

fn render_status(frame: &mut Frame, app: &App, area: Rect) {
    let style = if app.status.starts_with("error:") {
        Style::default().fg(Color::Red)
    } else {
        Style::default().fg(Color::Green)
    };
    frame.render_widget(Paragraph::new(app.status.as_str()).style(style), area);
}

fn render_help(frame: &mut Frame, area: Rect) {
    let help = "T track  E exercise  o open  v view tests  t test  s submit  \
                c complete  p publish  u unpublish  Tab focus  q quit";
    frame.render_widget(
        Paragraph::new(Line::from(help)).style(Style::default().fg(Color::DarkGray)),
        area,
    );
}

fn render_picker(frame: &mut Frame, app: &mut App, area: Rect) {
    let Some(picker) = app.picker.as_mut() else {
        return;
    };

    let popup = centered(area, 70, 80);
    frame.render_widget(Clear, popup);

    let items: Vec<ListItem> = picker
        .items
        .iter()
        .map(|item| ListItem::new(item.line.as_str()))
        .collect();
    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(picker.title.as_str()),
        )
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
        .highlight_symbol("> ");
    frame.render_stateful_widget(list, popup, &mut picker.state);
}

fn centered(area: Rect, percent_x: u16, percent_y: u16) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);
    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1]);
    horizontal[1]
}
