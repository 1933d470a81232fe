//! 任务列表核心逻辑
//!
//! 所有操作都是同步的全量变换：要么完整生效，要么完整 no-op。
//! 非法输入（空文本、未知 ID、越界索引）一律静默忽略，不报错。

use super::task::{Task, TaskId};

/// 有序任务列表
///
/// 不变量：所有 ID 唯一；顺序由最近一次成功的 add/delete/reorder 决定。
#[derive(Debug, Default)]
pub struct TaskList {
    tasks: Vec<Task>,
}

impl TaskList {
    pub fn new() -> Self {
        Self::default()
    }

    /// 追加新任务到末尾
    ///
    /// trim 后为空则 no-op 返回 None，否则返回新任务的 ID。
    pub fn add(&mut self, text: &str) -> Option<TaskId> {
        if text.trim().is_empty() {
            return None;
        }
        let task = Task::new(text);
        let id = task.id;
        self.tasks.push(task);
        Some(id)
    }

    /// 切换指定任务的完成状态，位置和文本不变
    ///
    /// 返回 true 表示找到并切换了任务。
    pub fn toggle(&mut self, id: TaskId) -> bool {
        match self.tasks.iter_mut().find(|t| t.id == id) {
            Some(task) => {
                task.completed = !task.completed;
                true
            }
            None => false,
        }
    }

    /// 删除指定任务，保持其余任务的相对顺序
    pub fn delete(&mut self, id: TaskId) -> bool {
        match self.position_of(id) {
            Some(index) => {
                self.tasks.remove(index);
                true
            }
            None => false,
        }
    }

    /// 把 `from` 处的任务移到 `to` 处，中间的任务依次平移（单元素搬移，不是交换）
    ///
    /// 索引越界或 `from == to` 时 no-op 返回 false。
    pub fn reorder(&mut self, from: usize, to: usize) -> bool {
        let len = self.tasks.len();
        if from == to || from >= len || to >= len {
            return false;
        }
        let task = self.tasks.remove(from);
        self.tasks.insert(to, task);
        true
    }

    /// 删除所有已完成任务，保持其余任务的相对顺序，返回删除数量
    pub fn clear_completed(&mut self) -> usize {
        let before = self.tasks.len();
        self.tasks.retain(|t| !t.completed);
        before - self.tasks.len()
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn get(&self, index: usize) -> Option<&Task> {
        self.tasks.get(index)
    }

    /// 指定 ID 的任务在列表中的位置
    pub fn position_of(&self, id: TaskId) -> Option<usize> {
        self.tasks.iter().position(|t| t.id == id)
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// 已完成任务数（用于 "N of M done" 汇总）
    pub fn completed_count(&self) -> usize {
        self.tasks.iter().filter(|t| t.completed).count()
    }

    pub fn total_count(&self) -> usize {
        self.tasks.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn list_with(texts: &[&str]) -> TaskList {
        let mut list = TaskList::new();
        for text in texts {
            list.add(text);
        }
        list
    }

    fn texts(list: &TaskList) -> Vec<&str> {
        list.tasks().iter().map(|t| t.text.as_str()).collect()
    }

    #[test]
    fn test_add_appends_trimmed() {
        let mut list = TaskList::new();
        let id = list.add("  buy milk  ");

        assert!(id.is_some());
        assert_eq!(list.len(), 1);
        let task = list.get(0).unwrap();
        assert_eq!(task.text, "buy milk");
        assert!(!task.completed);
    }

    #[test]
    fn test_add_blank_is_noop() {
        let mut list = TaskList::new();
        assert!(list.add("").is_none());
        assert!(list.add("   ").is_none());
        assert!(list.add("\t\n").is_none());
        assert!(list.is_empty());
    }

    #[test]
    fn test_add_preserves_existing_order() {
        let mut list = list_with(&["a", "b"]);
        list.add("c");
        assert_eq!(texts(&list), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_toggle_is_involution() {
        let mut list = list_with(&["a"]);
        let id = list.get(0).unwrap().id;

        assert!(list.toggle(id));
        assert!(list.get(0).unwrap().completed);

        assert!(list.toggle(id));
        assert!(!list.get(0).unwrap().completed);
    }

    #[test]
    fn test_toggle_unknown_id_is_noop() {
        let mut list = list_with(&["a"]);
        assert!(!list.toggle(TaskId::new()));
        assert!(!list.get(0).unwrap().completed);
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn test_toggle_keeps_position_and_text() {
        let mut list = list_with(&["a", "b", "c"]);
        let id = list.get(1).unwrap().id;

        list.toggle(id);

        assert_eq!(texts(&list), vec!["a", "b", "c"]);
        assert_eq!(list.position_of(id), Some(1));
    }

    #[test]
    fn test_delete_preserves_relative_order() {
        let mut list = list_with(&["a", "b", "c"]);
        let id = list.get(1).unwrap().id;

        assert!(list.delete(id));
        assert_eq!(texts(&list), vec!["a", "c"]);
    }

    #[test]
    fn test_delete_is_idempotent() {
        let mut list = list_with(&["a", "b"]);
        let id = list.get(0).unwrap().id;

        assert!(list.delete(id));
        assert!(!list.delete(id));
        assert_eq!(texts(&list), vec!["b"]);
    }

    #[test]
    fn test_reorder_moves_not_swaps() {
        // [a b c d] 中把 0 移到 2：中间元素平移，而不是 a/c 互换
        let mut list = list_with(&["a", "b", "c", "d"]);
        assert!(list.reorder(0, 2));
        assert_eq!(texts(&list), vec!["b", "c", "a", "d"]);
    }

    #[test]
    fn test_reorder_backwards() {
        let mut list = list_with(&["a", "b", "c", "d"]);
        assert!(list.reorder(3, 1));
        assert_eq!(texts(&list), vec!["a", "d", "b", "c"]);
    }

    #[test]
    fn test_reorder_roundtrip_restores_order() {
        let mut list = list_with(&["a", "b", "c", "d"]);
        assert!(list.reorder(1, 3));
        assert!(list.reorder(3, 1));
        assert_eq!(texts(&list), vec!["a", "b", "c", "d"]);
    }

    #[test]
    fn test_reorder_same_index_is_noop() {
        let mut list = list_with(&["a", "b"]);
        assert!(!list.reorder(1, 1));
        assert_eq!(texts(&list), vec!["a", "b"]);
    }

    #[test]
    fn test_reorder_out_of_bounds_is_noop() {
        let mut list = list_with(&["a", "b"]);
        assert!(!list.reorder(2, 0));
        assert!(!list.reorder(0, 2));
        assert!(!list.reorder(5, 7));
        assert_eq!(texts(&list), vec!["a", "b"]);
    }

    #[test]
    fn test_reorder_preserves_length_and_tasks() {
        let mut list = list_with(&["a", "b", "c"]);
        let ids: Vec<_> = list.tasks().iter().map(|t| t.id).collect();

        list.reorder(0, 2);

        assert_eq!(list.len(), 3);
        for id in ids {
            assert!(list.position_of(id).is_some());
        }
    }

    #[test]
    fn test_clear_completed() {
        let mut list = list_with(&["a", "b", "c", "d"]);
        let b = list.get(1).unwrap().id;
        let d = list.get(3).unwrap().id;
        list.toggle(b);
        list.toggle(d);

        assert_eq!(list.clear_completed(), 2);
        assert_eq!(texts(&list), vec!["a", "c"]);
        assert!(list.tasks().iter().all(|t| !t.completed));
    }

    #[test]
    fn test_clear_completed_empty_is_noop() {
        let mut list = list_with(&["a"]);
        assert_eq!(list.clear_completed(), 0);
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn test_counts() {
        let mut list = list_with(&["a", "b", "c"]);
        assert_eq!(list.total_count(), 3);
        assert_eq!(list.completed_count(), 0);

        let id = list.get(0).unwrap().id;
        list.toggle(id);
        assert_eq!(list.completed_count(), 1);
    }

    // 完整场景走查：toggle → reorder → add → clear_completed
    #[test]
    fn test_full_scenario() {
        let mut list = list_with(&["A", "B", "C"]);
        let b = list.get(1).unwrap().id;

        list.toggle(b);
        assert!(list.get(1).unwrap().completed);

        // 把 B 移到 A 前面
        assert!(list.reorder(1, 0));
        assert_eq!(texts(&list), vec!["B", "A", "C"]);
        assert!(list.get(0).unwrap().completed);

        list.add("D");
        assert_eq!(texts(&list), vec!["B", "A", "C", "D"]);

        assert_eq!(list.clear_completed(), 1);
        assert_eq!(texts(&list), vec!["A", "C", "D"]);
        assert!(list.tasks().iter().all(|t| !t.completed));
    }
}
