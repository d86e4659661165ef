//! UI rendering using ratatui

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap},
    Frame,
};
use showcase_core::registry::{agents, commands, copy, features};
use showcase_core::{FeatureDescriptor, Hue};

use super::app::{App, Focus, Mode};
use super::event::help_text;

/// Primary accent color
const ACCENT: Color = Color::Magenta;
/// Secondary color for less important elements
const SECONDARY: Color = Color::DarkGray;
/// Highlight color for the focused element
const HIGHLIGHT: Color = Color::Yellow;
/// Success color
const SUCCESS: Color = Color::Green;
/// Dim text color
const DIM: Color = Color::Rgb(100, 100, 100);

/// Terminal colour for a palette hue
pub fn hue_color(hue: Hue) -> Color {
    match hue {
        Hue::Purple => Color::Magenta,
        Hue::Blue => Color::Blue,
        Hue::Cyan => Color::Cyan,
        Hue::Emerald => Color::Green,
        Hue::Teal => Color::LightCyan,
        Hue::Orange => Color::Rgb(249, 115, 22),
        Hue::Red => Color::Red,
    }
}

/// Render the entire UI
pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5),  // Title, tagline, badges
            Constraint::Length(1),  // Hero buttons
            Constraint::Min(10),    // Feature cards
            Constraint::Length(8),  // Quick commands
            Constraint::Length(5),  // Agent roster
            Constraint::Length(5),  // Call to action
            Constraint::Length(1),  // Status bar
        ])
        .split(area);

    render_header(frame, chunks[0]);
    render_hero_buttons(frame, app, chunks[1]);
    render_features(frame, app, chunks[2]);
    render_commands(frame, app, chunks[3]);
    render_agents(frame, chunks[4]);
    render_call_to_action(frame, app, chunks[5]);
    render_status_bar(frame, app, chunks[6]);

    if app.mode == Mode::Help {
        render_help_overlay(frame);
    }
}

fn render_header(frame: &mut Frame, area: Rect) {
    let badges: Vec<Span> = copy::BADGES
        .iter()
        .enumerate()
        .flat_map(|(i, badge)| {
            let icon = match i {
                0 => Span::styled("✔ ", Style::default().fg(SUCCESS)),
                1 => Span::styled("⚡", Style::default().fg(HIGHLIGHT)),
                _ => Span::styled("👥", Style::default().fg(Color::Blue)),
            };
            [
                icon,
                Span::styled(format!(" {} ", badge), Style::default().fg(Color::White)),
                Span::raw("   "),
            ]
        })
        .collect();

    let text = Text::from(vec![
        Line::from(Span::styled(
            format!("✨ {}", copy::PRODUCT_NAME),
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(copy::TAGLINE, Style::default().fg(Color::Gray))),
        Line::from(badges),
    ]);

    let paragraph = Paragraph::new(text)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, area);
}

/// `[ label ]`, inverted when focused
fn button(label: &str, icon: &str, focused: bool, primary: bool) -> Span<'static> {
    let style = match (focused, primary) {
        (true, _) => Style::default()
            .fg(Color::Black)
            .bg(HIGHLIGHT)
            .add_modifier(Modifier::BOLD),
        (false, true) => Style::default()
            .fg(Color::White)
            .bg(ACCENT)
            .add_modifier(Modifier::BOLD),
        (false, false) => Style::default().fg(Color::White),
    };
    Span::styled(format!("[ {} {} ]", icon, label), style)
}

fn render_hero_buttons(frame: &mut Frame, app: &App, area: Rect) {
    let line = Line::from(vec![
        button(copy::LAUNCH_LABEL, "▶", app.is_focused(Focus::Launch), true),
        Span::raw("   "),
        button(copy::REPOSITORY_LABEL, "⎇", app.is_focused(Focus::Repository), false),
    ]);
    frame.render_widget(Paragraph::new(line).alignment(Alignment::Center), area);
}

fn render_features(frame: &mut Frame, app: &App, area: Rect) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    for (row_index, row) in rows.iter().enumerate() {
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(*row);

        for (col_index, col) in cols.iter().enumerate() {
            if let Some(feature) = features().get(row_index * 2 + col_index) {
                render_feature_card(frame, app, feature, *col);
            }
        }
    }
}

fn render_feature_card(frame: &mut Frame, app: &App, feature: &FeatureDescriptor, area: Rect) {
    let focused = app.is_focused(Focus::Feature(feature.id));
    let selected = app.selection.is_selected(feature.id);
    let hue = hue_color(feature.style.from);

    let border_style = if focused {
        Style::default().fg(HIGHLIGHT)
    } else {
        Style::default().fg(hue)
    };
    let marker = if selected { "● " } else { "" };

    let block = Block::default()
        .title(format!(" {}{} ", marker, feature.title))
        .title_style(
            Style::default()
                .fg(if focused { HIGHLIGHT } else { hue })
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_type(if selected {
            BorderType::Double
        } else {
            BorderType::Rounded
        })
        .border_style(border_style);

    let text = Text::from(vec![
        Line::from(Span::styled(feature.description, Style::default().fg(Color::Gray))),
        Line::from(""),
        Line::from(Span::styled(
            feature.example,
            Style::default().fg(hue_color(feature.style.to)),
        )),
    ]);

    frame.render_widget(
        Paragraph::new(text).block(block).wrap(Wrap { trim: false }),
        area,
    );
}

fn render_commands(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .title(format!(" 💬 {} ", copy::COMMANDS_HEADING))
        .title_style(Style::default().fg(ACCENT).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(SECONDARY));

    let mut lines: Vec<Line> = commands()
        .iter()
        .enumerate()
        .map(|(index, command)| {
            let focused = app.is_focused(Focus::Command(index));
            let style = if focused {
                Style::default()
                    .fg(Color::Black)
                    .bg(HIGHLIGHT)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            };
            Line::from(vec![
                Span::styled(format!(" c{} ", index + 1), Style::default().fg(DIM)),
                Span::styled(format!("\"{}\" →", command), style),
            ])
        })
        .collect();
    lines.push(Line::from(Span::styled(
        format!("💡 {}", copy::COMMANDS_HINT),
        Style::default().fg(DIM),
    )));

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn render_agents(frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .title(format!(" 👥 {} ", copy::AGENTS_HEADING))
        .title_style(Style::default().fg(SUCCESS).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(SECONDARY));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let roster = agents();
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(vec![Constraint::Ratio(1, roster.len() as u32); roster.len()])
        .split(inner);

    for (agent, col) in roster.iter().zip(cols.iter()) {
        let color = hue_color(agent.style.from);
        let text = Text::from(vec![
            Line::from(vec![
                Span::styled(
                    format!(" {} ", agent.initial()),
                    Style::default().fg(Color::White).bg(color).add_modifier(Modifier::BOLD),
                ),
                Span::styled(
                    format!(" {}", agent.name),
                    Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
                ),
            ]),
            Line::from(Span::styled(agent.role, Style::default().fg(Color::Gray))),
            Line::from(Span::styled(
                format!("{} Success Rate", agent.success_rate),
                Style::default().fg(color),
            )),
        ]);
        frame.render_widget(Paragraph::new(text).alignment(Alignment::Center), *col);
    }
}

fn render_call_to_action(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Thick)
        .border_style(Style::default().fg(ACCENT));

    let text = Text::from(vec![
        Line::from(Span::styled(
            copy::CTA_HEADING,
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(copy::CTA_BODY, Style::default().fg(Color::Gray))),
        Line::from(vec![
            button(copy::START_LABEL, "▶", app.is_focused(Focus::StartBuilding), true),
            Span::raw("   "),
            button(
                copy::DOCUMENTATION_LABEL,
                "↗",
                app.is_focused(Focus::Documentation),
                false,
            ),
        ]),
    ]);

    frame.render_widget(
        Paragraph::new(text).block(block).alignment(Alignment::Center),
        area,
    );
}

/// Render the status bar
fn render_status_bar(frame: &mut Frame, app: &App, area: Rect) {
    let mode_indicator = match app.mode {
        Mode::Normal => Span::styled(" SHOWCASE ", Style::default().bg(ACCENT).fg(Color::Black)),
        Mode::CopyPending => Span::styled(" COPY ", Style::default().bg(SUCCESS).fg(Color::Black)),
        Mode::Help => Span::styled(" HELP ", Style::default().bg(HIGHLIGHT).fg(Color::Black)),
    };

    let help = match app.mode {
        Mode::Normal => "Tab:focus  Enter:activate  1-4:feature  c:copy  s:start  ?:help  q:quit",
        Mode::CopyPending => "1-5:copy command  any other key:cancel",
        Mode::Help => "any key:close",
    };

    let status = app.status_message.as_deref().unwrap_or("");

    let line = Line::from(vec![
        mode_indicator,
        Span::raw(" "),
        Span::styled(help, Style::default().fg(DIM)),
        Span::raw(" "),
        Span::styled(status, Style::default().fg(HIGHLIGHT)),
    ]);

    frame.render_widget(Paragraph::new(line), area);
}

/// Render help overlay
fn render_help_overlay(frame: &mut Frame) {
    let area = frame.area();
    let text = help_text();

    let height = (text.lines().count() as u16 + 2).min(area.height);
    let width = 56.min(area.width);
    let popup_area = Rect {
        x: area.x + (area.width.saturating_sub(width)) / 2,
        y: area.y + (area.height.saturating_sub(height)) / 2,
        width,
        height,
    };

    frame.render_widget(Clear, popup_area);

    let block = Block::default()
        .title(" Help (press any key to close) ")
        .title_style(Style::default().fg(SUCCESS).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(SUCCESS));

    frame.render_widget(
        Paragraph::new(text)
            .block(block)
            .style(Style::default().fg(Color::White)),
        popup_area,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{backend::TestBackend, buffer::Buffer, Terminal};
    use showcase_core::FeatureId;

    fn draw(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(140, 48)).unwrap();
        terminal.draw(|frame| render(frame, app)).unwrap();
        buffer_text(terminal.backend().buffer())
    }

    fn buffer_text(buffer: &Buffer) -> String {
        let mut out = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                out.push_str(buffer[(x, y)].symbol());
            }
            out.push('\n');
        }
        out
    }

    #[test]
    fn renders_title_and_every_feature() {
        let screen = draw(&App::new());
        assert!(screen.contains("Magic Pipeline"));
        for feature in features() {
            assert!(screen.contains(feature.title), "missing {}", feature.title);
        }
    }

    #[test]
    fn renders_commands_agents_and_cta() {
        let screen = draw(&App::new());
        assert!(screen.contains("Create a modern sales pipeline"));
        assert!(screen.contains("Recovery Agent"));
        assert!(screen.contains("87% Success Rate"));
        assert!(screen.contains(copy::START_LABEL));
        assert!(screen.contains(copy::DOCUMENTATION_LABEL));
    }

    #[test]
    fn selected_card_is_marked() {
        let mut app = App::new();
        assert!(!draw(&app).contains("● Clean JSON Export"));
        app.selection.select(FeatureId::DataExport);
        assert!(draw(&app).contains("● Clean JSON Export"));
    }

    #[test]
    fn help_overlay_renders() {
        let mut app = App::new();
        app.toggle_help();
        assert!(draw(&app).contains("Help (press any key to close)"));
    }

    #[test]
    fn status_message_shows_in_status_bar() {
        let mut app = App::new();
        app.set_status("Copied \"Show me pipeline templates\"");
        assert!(draw(&app).contains("Copied \"Show me pipeline templates\""));
    }

    #[test]
    fn tiny_terminal_does_not_panic() {
        let mut terminal = Terminal::new(TestBackend::new(20, 6)).unwrap();
        let mut app = App::new();
        app.toggle_help();
        terminal.draw(|frame| render(frame, &app)).unwrap();
    }
}
