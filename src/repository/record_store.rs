// ==========================================
// 学生成绩看板 - 学生记录仓储
// ==========================================
// 职责: 有序记录集合的追加/删除/整体重排
// 默认顺序: 插入顺序
// 红线: 只允许删除和重排,不修改已有记录
// ==========================================

use std::collections::BTreeSet;

use crate::domain::student::StudentRecord;
use crate::repository::error::{RepositoryError, RepositoryResult};

// ==========================================
// RecordStore - 学生记录仓储
// ==========================================
#[derive(Debug, Clone, Default)]
pub struct RecordStore {
    records: Vec<StudentRecord>,
}

impl RecordStore {
    /// 创建空仓储
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    /// 由已有记录创建（保持给定顺序）
    pub fn with_records(records: Vec<StudentRecord>) -> Self {
        Self { records }
    }

    // ==========================================
    // 写操作
    // ==========================================

    /// 追加到末尾（不去重）
    pub fn append(&mut self, record: StudentRecord) {
        self.records.push(record);
    }

    /// 删除指定位置的记录,后续记录前移一位
    ///
    /// # 返回
    /// - Ok(StudentRecord): 被删除的记录
    /// - Err(NotFound): 位置越界,仓储不变
    pub fn delete_at(&mut self, index: usize) -> RepositoryResult<StudentRecord> {
        if index >= self.records.len() {
            return Err(RepositoryError::index_not_found(index, self.records.len()));
        }
        Ok(self.records.remove(index))
    }

    /// 按 record_id 删除
    pub fn delete_by_id(&mut self, record_id: &str) -> RepositoryResult<StudentRecord> {
        match self.position_of(record_id) {
            Some(index) => Ok(self.records.remove(index)),
            None => Err(RepositoryError::id_not_found(record_id)),
        }
    }

    /// 以重排后的副本整体替换
    ///
    /// new_order 必须恰好是当前记录的一个排列（按 record_id 比对）,
    /// 否则返回 NotAPermutation 且仓储不变
    pub fn replace_all(&mut self, new_order: Vec<StudentRecord>) -> RepositoryResult<()> {
        let is_permutation = {
            let current: BTreeSet<&str> = self.records.iter().map(|r| r.record_id()).collect();
            let incoming: BTreeSet<&str> = new_order.iter().map(|r| r.record_id()).collect();

            new_order.len() == self.records.len()
                && incoming.len() == new_order.len()
                && current == incoming
        };

        if !is_permutation {
            return Err(RepositoryError::NotAPermutation {
                expected: self.records.len(),
                actual: new_order.len(),
            });
        }

        self.records = new_order;
        Ok(())
    }

    // ==========================================
    // 读操作
    // ==========================================

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// 只读快照（用于渲染）
    pub fn to_list(&self) -> Vec<StudentRecord> {
        self.records.clone()
    }

    /// 只读视图
    pub fn as_slice(&self) -> &[StudentRecord] {
        &self.records
    }

    pub fn get(&self, index: usize) -> Option<&StudentRecord> {
        self.records.get(index)
    }

    pub fn find_by_id(&self, record_id: &str) -> Option<&StudentRecord> {
        self.records.iter().find(|r| r.record_id() == record_id)
    }

    pub fn position_of(&self, record_id: &str) -> Option<usize> {
        self.records.iter().position(|r| r.record_id() == record_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::student::ValidatedSubmission;
    use crate::engine::grade::GradeEngine;

    fn record(name: &str, total_exam: f64) -> StudentRecord {
        GradeEngine::new().build_record(ValidatedSubmission::new(
            name.to_string(),
            format!("REG-{}", name),
            0.0,
            total_exam,
        ))
    }

    fn store_of(names: &[&str]) -> RecordStore {
        let mut store = RecordStore::new();
        for name in names {
            store.append(record(name, 50.0));
        }
        store
    }

    fn names(store: &RecordStore) -> Vec<String> {
        store.as_slice().iter().map(|r| r.name().to_string()).collect()
    }

    #[test]
    fn test_append_keeps_insertion_order() {
        let store = store_of(&["a", "b", "c"]);
        assert_eq!(store.len(), 3);
        assert!(!store.is_empty());
        assert_eq!(names(&store), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_append_does_not_deduplicate() {
        let mut store = RecordStore::new();
        store.append(record("same", 40.0));
        store.append(record("same", 40.0));
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_delete_at_shifts_following_records() {
        let mut store = store_of(&["a", "b", "c"]);

        let removed = store.delete_at(1).unwrap();
        assert_eq!(removed.name(), "b");
        assert_eq!(names(&store), vec!["a", "c"]);
        assert_eq!(store.get(1).map(|r| r.name()), Some("c"));
    }

    #[test]
    fn test_delete_at_out_of_range_is_not_found() {
        let mut store = store_of(&["a", "b", "c"]);

        let result = store.delete_at(3);
        assert!(matches!(result, Err(RepositoryError::NotFound { .. })));
        assert_eq!(names(&store), vec!["a", "b", "c"]);

        let mut empty = RecordStore::new();
        assert!(empty.delete_at(0).is_err());
    }

    #[test]
    fn test_delete_by_id() {
        let mut store = store_of(&["a", "b"]);
        let id = store.as_slice()[0].record_id().to_string();

        assert_eq!(store.delete_by_id(&id).unwrap().name(), "a");
        assert_eq!(names(&store), vec!["b"]);
        assert!(store.delete_by_id(&id).is_err());
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_replace_all_accepts_permutation() {
        let mut store = store_of(&["a", "b", "c"]);
        let mut reversed = store.to_list();
        reversed.reverse();

        store.replace_all(reversed).unwrap();
        assert_eq!(names(&store), vec!["c", "b", "a"]);
    }

    #[test]
    fn test_replace_all_rejects_foreign_records() {
        let mut store = store_of(&["a", "b"]);

        let foreign = vec![record("a", 50.0), record("b", 50.0)];
        assert!(matches!(
            store.replace_all(foreign),
            Err(RepositoryError::NotAPermutation { .. })
        ));

        let mut truncated = store.to_list();
        truncated.pop();
        assert!(store.replace_all(truncated).is_err());

        let first = store.as_slice()[0].clone();
        assert!(store.replace_all(vec![first.clone(), first]).is_err());

        assert_eq!(names(&store), vec!["a", "b"]);
    }

    #[test]
    fn test_snapshot_is_detached() {
        let mut store = store_of(&["a", "b"]);
        let snapshot = store.to_list();
        store.delete_at(0).unwrap();

        assert_eq!(snapshot.len(), 2);
        assert_eq!(store.len(), 1);
    }
}
