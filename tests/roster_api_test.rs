// ==========================================
// RosterApi 集成测试
// ==========================================
// 测试范围:
// 1. 录入: 校验全部字段、拒绝时仓储不变
// 2. 删除: 按位置/按 record_id,越界不变
// 3. 排序: 稳定降序,高亮随之移动
// 4. 统计: 平均分、最高分、及格率、看板汇总
// ==========================================

mod helpers;

use helpers::test_data_builder::StudentBuilder;
use student_records::api::{ApiError, RosterApi};
use student_records::domain::types::{Grade, ScoreField};
use student_records::engine::FieldErrorKind;
use student_records::repository::RecordStore;

// ==========================================
// 录入测试
// ==========================================

#[test]
fn test_submit_合法录入() {
    student_records::logging::init_test();
    let mut api = RosterApi::new();

    let record = api
        .submit("Jane Smith", "BIT-002-2025", "18", "45")
        .expect("录入失败");

    assert_eq!(record.total(), 63.0);
    assert_eq!(record.grade(), Grade::B);
    assert_eq!(api.len(), 1);
    assert!(api.find_by_id(record.record_id()).is_some());
}

#[test]
fn test_submit_报告全部字段错误() {
    let mut api = RosterApi::new();

    let err = api.submit("", "  ", "abc", "71").unwrap_err();

    match err {
        ApiError::ValidationFailed { violations, .. } => {
            let fields: Vec<ScoreField> = violations.iter().map(|v| v.field).collect();
            assert_eq!(fields, ScoreField::ALL.to_vec(), "必须按表单顺序报告全部字段");
            assert_eq!(violations[2].kind, FieldErrorKind::NotANumber);
            assert!(matches!(
                violations[3].kind,
                FieldErrorKind::OutOfRange { .. }
            ));
        }
        other => panic!("期望 ValidationFailed, 实际: {:?}", other),
    }
    assert!(api.is_empty(), "拒绝时仓储必须不变");
}

#[test]
fn test_submit_边界分数() {
    let mut api = RosterApi::new();

    let top = api.submit("Max", "R-1", "30", "70").expect("录入失败");
    let bottom = api.submit("Min", "R-2", "0", "0").expect("录入失败");
    let edge = api.submit("Edge", "R-3", "10", "29.9").expect("录入失败");

    assert_eq!(top.grade(), Grade::A);
    assert_eq!(bottom.grade(), Grade::Fail);
    assert_eq!(edge.grade(), Grade::Fail);
    assert!((edge.total() - 39.9).abs() < 1e-9);
}

#[test]
fn test_submit_分数取前导数字() {
    let mut api = RosterApi::new();

    let record = api
        .submit("\u{feff}Jane ", "BIT-020", "25abc", "12 marks")
        .expect("录入失败");

    assert_eq!(record.name(), "Jane");
    assert_eq!(record.cat_score(), 25.0);
    assert_eq!(record.exam_score(), 12.0);
    assert_eq!(record.total(), 37.0);
    assert_eq!(record.grade(), Grade::Fail);

    let err = api.submit("\u{feff}", "BIT-021", "x10", "10").unwrap_err();
    match err {
        ApiError::ValidationFailed { violations, .. } => {
            let kinds: Vec<FieldErrorKind> = violations.iter().map(|v| v.kind).collect();
            assert_eq!(
                kinds,
                vec![FieldErrorKind::RequiredField, FieldErrorKind::NotANumber]
            );
        }
        other => panic!("期望 ValidationFailed, 实际: {:?}", other),
    }
    assert_eq!(api.len(), 1);
}

#[test]
fn test_validate_不入库() {
    let api = RosterApi::new();

    let report = api.validate(&StudentBuilder::new("Alice").cat(31.0).raw());

    assert!(!report.is_valid());
    assert!(report.is_field_valid(ScoreField::Name));
    assert!(!report.is_field_valid(ScoreField::Cat));
    assert!(api.is_empty());
}

// ==========================================
// 删除测试
// ==========================================

#[test]
fn test_delete_at_保持其余顺序() {
    let mut api = RosterApi::with_sample_data().expect("预置失败");

    let removed = api.delete_at(1).expect("删除失败");

    assert_eq!(removed.name(), "Jane Smith");
    let names: Vec<&str> = api.records().iter().map(|r| r.name()).collect();
    assert_eq!(names, vec!["John Doe", "Bob Johnson"]);
}

#[test]
fn test_delete_at_越界() {
    let mut api = RosterApi::with_sample_data().expect("预置失败");
    let before = api.get_all();

    let err = api.delete_at(3).unwrap_err();

    assert!(matches!(err, ApiError::NotFound(_)));
    assert_eq!(api.get_all(), before, "越界删除不得修改仓储");
}

#[test]
fn test_delete_by_id() {
    let mut api = RosterApi::with_sample_data().expect("预置失败");
    let target = api.records()[2].record_id().to_string();

    let removed = api.delete_by_id(&target).expect("删除失败");

    assert_eq!(removed.name(), "Bob Johnson");
    assert!(api.find_by_id(&target).is_none());
    assert!(matches!(
        api.delete_by_id(&target),
        Err(ApiError::NotFound(_))
    ));
}

// ==========================================
// 排序与统计测试
// ==========================================

#[test]
fn test_sort_descending_稳定() {
    let records = vec![
        StudentBuilder::new("first").total(50.0).build(),
        StudentBuilder::new("second").total(80.0).build(),
        StudentBuilder::new("third").total(50.0).build(),
    ];
    let mut api = RosterApi::with_store(RecordStore::with_records(records));

    api.sort_descending().expect("排序失败");

    let names: Vec<String> = api.records().iter().map(|r| r.name().to_string()).collect();
    assert_eq!(names, vec!["second", "first", "third"]);

    api.sort_descending().expect("排序失败");
    let again: Vec<&str> = api.records().iter().map(|r| r.name()).collect();
    assert_eq!(again, names, "排序必须幂等");
}

#[test]
fn test_statistics_示例数据() {
    let api = RosterApi::with_sample_data().expect("预置失败");

    let average = api.average().expect("平均分失败");
    assert!((average - 63.333_333).abs() < 1e-3);

    let top = api.top_performer().expect("最高分失败");
    assert_eq!(top.name(), "John Doe");

    let stats = api.pass_fail_stats().expect("统计失败");
    assert_eq!(stats.pass_count, 3);
    assert_eq!(stats.fail_count, 0);
    assert_eq!(stats.pass_pct, 100.0);
    assert_eq!(stats.fail_pct, 0.0);
}

#[test]
fn test_dashboard_summary() {
    let mut api = RosterApi::new();
    api.submit("A", "R-1", "20", "20").expect("录入失败");
    api.submit("B", "R-2", "30", "60").expect("录入失败");

    let summary = api.dashboard().summary();

    assert_eq!(summary.student_count, 2);
    assert_eq!(summary.class_average, Some(65.0));
    assert_eq!(
        summary.top_performer.as_ref().map(|r| r.name()),
        Some("B")
    );
    assert_eq!(summary.highlighted, vec![1]);
    let stats = summary.pass_fail.expect("应有统计");
    assert_eq!(stats.pass_count, 2);
}

#[test]
fn test_dashboard_summary_空集合() {
    let api = RosterApi::new();

    let summary = api.dashboard().summary();

    assert_eq!(summary.student_count, 0);
    assert_eq!(summary.class_average, None);
    assert!(summary.top_performer.is_none());
    assert!(summary.pass_fail.is_none());
    assert!(summary.highlighted.is_empty());
}

#[test]
fn test_empty_collection_消息() {
    let api = RosterApi::new();

    assert_eq!(
        api.average().unwrap_err().to_string(),
        "No students to calculate average"
    );
    assert_eq!(
        api.top_performer().unwrap_err().to_string(),
        "No students to highlight"
    );
    assert_eq!(
        api.pass_fail_stats().unwrap_err().to_string(),
        "No students to analyze"
    );
}
