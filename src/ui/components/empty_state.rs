use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::theme::ThemeColors;

use super::logo;

/// 渲染空状态（带 Logo 和提示文字）
pub fn render(frame: &mut Frame, area: Rect, filtered: bool, colors: &ThemeColors) {
    let block = Block::default()
        .borders(Borders::LEFT | Borders::RIGHT)
        .border_style(Style::default().fg(colors.border));

    let inner_area = block.inner(area);
    frame.render_widget(block, area);

    // 垂直居中布局
    let logo_height = logo::LOGO_HEIGHT;
    let text_height = 3u16; // 提示文字行数
    let total_height = logo_height + 2 + text_height; // 2 是间距

    if inner_area.height < total_height {
        // 空间不足，只显示提示文字
        render_hint_only(frame, inner_area, filtered, colors);
        return;
    }

    let vertical_padding = (inner_area.height - total_height) / 2;

    let [_, logo_area, _, text_area, _] = Layout::vertical([
        Constraint::Length(vertical_padding),
        Constraint::Length(logo_height),
        Constraint::Length(2),
        Constraint::Length(text_height),
        Constraint::Fill(1),
    ])
    .areas(inner_area);

    // 渲染 Logo
    logo::render(frame, logo_area, colors);

    // 渲染提示文字
    let lines = hint_lines(filtered, colors);
    let hint_widget = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(hint_widget, text_area);
}

fn render_hint_only(frame: &mut Frame, area: Rect, filtered: bool, colors: &ThemeColors) {
    let lines = hint_lines(filtered, colors);
    let hint_widget = Paragraph::new(lines).alignment(Alignment::Center);

    // 垂直居中
    let y_offset = (area.height.saturating_sub(3)) / 2;
    let centered_area = Rect {
        x: area.x,
        y: area.y + y_offset,
        width: area.width,
        height: 3.min(area.height),
    };

    frame.render_widget(hint_widget, centered_area);
}

fn hint_lines(filtered: bool, colors: &ThemeColors) -> Vec<Line<'static>> {
    let (message, key, hint) = if filtered {
        ("No matching tasks", " Esc ", "to clear the search")
    } else {
        ("No tasks yet", " n ", "to add your first task")
    };

    vec![
        Line::from(Span::styled(message, Style::default().fg(colors.muted))),
        Line::from(""),
        Line::from(vec![
            Span::styled("Press ", Style::default().fg(colors.text)),
            Span::styled(
                key,
                Style::default()
                    .fg(colors.highlight)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(format!(" {}", hint), Style::default().fg(colors.text)),
        ]),
    ]
}
