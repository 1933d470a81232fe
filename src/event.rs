use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};

use crate::app::App;

/// 处理事件，返回 true 表示应该继续运行
pub fn handle_events(app: &mut App) -> io::Result<bool> {
    // 更新 Toast 状态
    app.update_toast();

    // 检查系统主题变化（用于 Auto 模式）
    app.check_system_theme();

    // 轮询事件（100ms 超时）
    if event::poll(Duration::from_millis(100))? {
        if let Event::Key(key) = event::read()? {
            // 只处理按下事件
            if key.kind != KeyEventKind::Press {
                return Ok(true);
            }
            handle_key(app, key);
        }
    }

    Ok(!app.should_quit)
}

fn handle_key(app: &mut App, key: KeyEvent) {
    // 优先处理弹窗事件

    // 帮助面板
    if app.show_help {
        handle_help_key(app, key);
        return;
    }

    // 确认弹窗
    if app.confirm_dialog.is_some() {
        handle_confirm_dialog_key(app, key);
        return;
    }

    // Add Task 弹窗
    if app.show_new_task_dialog {
        handle_new_task_dialog_key(app, key);
        return;
    }

    // 主题选择器
    if app.show_theme_selector {
        handle_theme_selector_key(app, key);
        return;
    }

    // 搜索输入模式
    if app.search_mode {
        handle_search_mode_key(app, key);
        return;
    }

    // 搬移模式（任务被抓起时只响应移动/放下/取消）
    if app.moving() {
        handle_move_mode_key(app, key);
        return;
    }

    handle_list_key(app, key);
}

/// 处理主列表的键盘事件
fn handle_list_key(app: &mut App, key: KeyEvent) {
    match key.code {
        // 退出
        KeyCode::Char('q') => app.quit(),

        // 导航 - 下移
        KeyCode::Char('j') | KeyCode::Down => {
            app.select_next();
        }

        // 导航 - 上移
        KeyCode::Char('k') | KeyCode::Up => {
            app.select_previous();
        }

        // 切换完成状态
        KeyCode::Char(' ') | KeyCode::Enter => {
            app.toggle_selected();
        }

        // 功能按键 - 新任务
        KeyCode::Char('n') => {
            app.open_new_task_dialog();
        }

        // 功能按键 - 删除任务
        KeyCode::Char('x') => {
            app.delete_selected();
        }

        // 排序 - 直接下移/上移一格
        KeyCode::Char('J') => {
            app.move_selected_down();
        }
        KeyCode::Char('K') => {
            app.move_selected_up();
        }

        // 排序 - 抓取搬移
        KeyCode::Char('m') => {
            app.start_move();
        }

        // 功能按键 - 清除已完成
        KeyCode::Char('c') => {
            app.request_clear_completed();
        }

        // 功能按键 - 搜索
        KeyCode::Char('/') => {
            app.enter_search_mode();
        }

        // 功能按键 - Theme 选择器
        KeyCode::Char('T') | KeyCode::Char('t') => {
            app.open_theme_selector();
        }

        // 功能按键 - 帮助
        KeyCode::Char('?') => {
            app.show_help = true;
        }

        // Esc 清空过滤
        KeyCode::Esc => {
            if app.filter_active() {
                app.cancel_search();
            }
        }

        _ => {}
    }
}

/// 处理搬移模式的键盘事件
fn handle_move_mode_key(app: &mut App, key: KeyEvent) {
    match key.code {
        // 带着任务下移/上移
        KeyCode::Char('j') | KeyCode::Down => {
            app.move_selected_down();
        }
        KeyCode::Char('k') | KeyCode::Up => {
            app.move_selected_up();
        }

        // 放下
        KeyCode::Enter | KeyCode::Char('m') | KeyCode::Char(' ') => {
            app.drop_move();
        }

        // 取消，放回原位
        KeyCode::Esc => {
            app.cancel_move();
        }

        _ => {}
    }
}

/// 处理 Add Task 弹窗的键盘事件
fn handle_new_task_dialog_key(app: &mut App, key: KeyEvent) {
    match key.code {
        // 确认添加
        KeyCode::Enter => {
            app.submit_new_task();
        }

        // 取消
        KeyCode::Esc => {
            app.close_new_task_dialog();
        }

        // 删除字符
        KeyCode::Backspace => {
            app.new_task_delete_char();
        }

        // 输入字符
        KeyCode::Char(c) => {
            app.new_task_input_char(c);
        }

        _ => {}
    }
}

/// 处理确认弹窗的键盘事件
fn handle_confirm_dialog_key(app: &mut App, key: KeyEvent) {
    match key.code {
        // 确认
        KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => {
            app.confirm_dialog_yes();
        }

        // 取消
        KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
            app.confirm_dialog_cancel();
        }

        _ => {}
    }
}

/// 处理主题选择器的键盘事件
fn handle_theme_selector_key(app: &mut App, key: KeyEvent) {
    match key.code {
        // 导航 - 上移
        KeyCode::Char('k') | KeyCode::Up => {
            app.theme_selector_prev();
        }

        // 导航 - 下移
        KeyCode::Char('j') | KeyCode::Down => {
            app.theme_selector_next();
        }

        // 确认选择
        KeyCode::Enter => {
            app.theme_selector_confirm();
        }

        // 取消
        KeyCode::Esc | KeyCode::Char('q') => {
            app.close_theme_selector();
        }

        _ => {}
    }
}

/// 处理搜索模式的键盘事件
///
/// 输入期间用方向键导航，字符一律进入关键字（包括 j/k）。
fn handle_search_mode_key(app: &mut App, key: KeyEvent) {
    match key.code {
        // 退出搜索输入模式（保留过滤结果）
        KeyCode::Enter => {
            app.exit_search_mode();
        }

        // 取消搜索（清空过滤）
        KeyCode::Esc => {
            app.cancel_search();
        }

        // 导航
        KeyCode::Down => {
            app.select_next();
        }
        KeyCode::Up => {
            app.select_previous();
        }

        // 删除字符
        KeyCode::Backspace => {
            app.search_delete_char();
        }

        // 输入字符
        KeyCode::Char(c) => {
            app.search_input_char(c);
        }

        _ => {}
    }
}

/// 处理帮助面板的键盘事件
fn handle_help_key(app: &mut App, key: KeyEvent) {
    match key.code {
        // 关闭帮助面板
        KeyCode::Char('?') | KeyCode::Esc | KeyCode::Char('q') => {
            app.show_help = false;
        }
        _ => {}
    }
}
