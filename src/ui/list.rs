use ratatui::{
    layout::Constraint,
    style::Style,
    widgets::{Block, Widget},
    Frame,
};

use crate::app::App;

use super::components::{
    confirm_dialog, empty_state, footer, header, help_panel, new_task_dialog, search_bar,
    task_list, theme_selector, toast,
};

/// 渲染任务列表页面
pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let colors = app.colors;

    // 填充整个背景
    Block::default()
        .style(Style::default().bg(colors.bg))
        .render(area, frame.buffer_mut());

    // 是否显示搜索框：正在输入或有搜索内容
    let show_search = app.search_mode || !app.search_query.is_empty();

    // 根据搜索状态决定布局
    let (header_area, search_area, list_area, footer_area) = if show_search {
        let [header_area, search_area, list_area, footer_area] = ratatui::layout::Layout::vertical(
            [
                Constraint::Length(header::HEADER_HEIGHT),
                Constraint::Length(1), // 搜索框
                Constraint::Fill(1),
                Constraint::Length(3),
            ],
        )
        .areas(area);
        (header_area, Some(search_area), list_area, footer_area)
    } else {
        let [header_area, list_area, footer_area] = ratatui::layout::Layout::vertical([
            Constraint::Length(header::HEADER_HEIGHT),
            Constraint::Fill(1),
            Constraint::Length(3),
        ])
        .areas(area);
        (header_area, None, list_area, footer_area)
    };

    // 渲染 Header（Logo + 完成进度）
    header::render(
        frame,
        header_area,
        app.tasks.completed_count(),
        app.tasks.total_count(),
        &colors,
    );

    // 过滤后的可见任务
    let visible = app.visible_tasks();

    // 渲染搜索框（如果有搜索内容或正在输入）
    if let Some(search_area) = search_area {
        search_bar::render(
            frame,
            search_area,
            &app.search_query,
            app.search_mode,
            visible.len(),
            &colors,
        );
    }

    // 渲染列表或空状态（使用过滤后的数据）
    if visible.is_empty() {
        empty_state::render(frame, list_area, app.filter_active(), &colors);
    } else {
        let selected = app.list_state.selected();
        let tasks: Vec<_> = visible.into_iter().cloned().collect();
        task_list::render(frame, list_area, &tasks, selected, app.moving(), &colors);
    }

    // 渲染 Footer
    footer::render(
        frame,
        footer_area,
        !app.tasks.is_empty(),
        app.moving(),
        &colors,
    );

    // 渲染 Toast（如果有）
    if let Some(ref t) = app.toast {
        if !t.is_expired() {
            toast::render(frame, &t.message, &colors);
        }
    }

    // 渲染主题选择器（如果打开）
    if app.show_theme_selector {
        theme_selector::render(frame, app.theme_selector_index, &colors);
    }

    // 渲染 Add Task 弹窗（如果打开）
    if app.show_new_task_dialog {
        new_task_dialog::render(frame, &app.new_task_input, app.tasks.total_count(), &colors);
    }

    // 渲染确认弹窗
    if let Some(ref confirm_type) = app.confirm_dialog {
        confirm_dialog::render(frame, confirm_type, &colors);
    }

    // 渲染帮助面板
    if app.show_help {
        help_panel::render(frame, &colors);
    }
}
