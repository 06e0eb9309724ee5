// ==========================================
// 花名册导入集成测试
// ==========================================
// 测试范围:
// 1. 表头别名映射、按文件顺序追加
// 2. 非法行独立拒绝,不中断导入
// 3. 文件级错误: 不存在/格式不支持/缺列
// ==========================================


use student_records::api::{ApiError, RosterApi};
use student_records::domain::types::{Grade, ScoreField};
use student_records::importer::RosterCsvImporter;
use test_helpers::{create_csv_file, ROSTER_CSV};

#[test]
fn test_import_csv_部分成功() {
    let file = create_csv_file(ROSTER_CSV).expect("无法创建CSV");
    let mut api = RosterApi::new();

    let report = api.import_csv(file.path()).expect("导入失败");

    assert_eq!(report.total_rows, 3);
    assert_eq!(report.imported_count(), 2);
    assert_eq!(report.rejected_count(), 1);

    let rejected = &report.rejected[0];
    assert_eq!(rejected.row_number, 2);
    assert_eq!(rejected.errors.len(), 1);
    assert_eq!(rejected.errors[0].field, ScoreField::Cat);

    let names: Vec<&str> = api.records().iter().map(|r| r.name()).collect();
    assert_eq!(names, vec!["Alice Wanjiru", "Carol Mwangi"]);
    assert_eq!(api.records()[0].grade(), Grade::A);
    assert_eq!(api.records()[1].grade(), Grade::B);
}

#[test]
fn test_import_csv_追加到已有记录之后() {
    let file = create_csv_file(ROSTER_CSV).expect("无法创建CSV");
    let mut api = RosterApi::with_sample_data().expect("预置失败");

    api.import_csv(file.path()).expect("导入失败");

    assert_eq!(api.len(), 5);
    assert_eq!(api.records()[3].name(), "Alice Wanjiru");
}

#[test]
fn test_import_csv_跳过空白行() {
    let file = create_csv_file("name,reg_no,cat,exam\nA,R-1,10,20\n,,,\nB,R-2,15,25\n")
        .expect("无法创建CSV");

    let rows = RosterCsvImporter::new()
        .read_rows(file.path())
        .expect("读取失败");

    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].row_number, 1);
    assert_eq!(rows[1].row_number, 3, "空白行仍计入行号");
}

#[test]
fn test_import_csv_缺少列() {
    let file = create_csv_file("name,reg_no,cat\nA,R-1,10\n").expect("无法创建CSV");
    let mut api = RosterApi::new();

    let err = api.import_csv(file.path()).unwrap_err();

    assert!(matches!(err, ApiError::ImportError(_)));
    assert!(err.to_string().contains("Missing required column"));
    assert!(api.is_empty(), "文件级错误不得追加任何记录");
}

#[test]
fn test_import_csv_文件不存在() {
    let mut api = RosterApi::new();

    let err = api
        .import_csv(std::path::Path::new("/nonexistent/roster.csv"))
        .unwrap_err();

    assert!(matches!(err, ApiError::ImportError(_)));
    assert!(err.to_string().contains("File not found"));
}

#[test]
fn test_import_csv_格式不支持() {
    let file = tempfile::Builder::new()
        .suffix(".xlsx")
        .tempfile()
        .expect("无法创建临时文件");
    let mut api = RosterApi::new();

    let err = api.import_csv(file.path()).unwrap_err();

    assert!(err.to_string().contains("Unsupported file format"));
}
