// ==========================================
// 配置加载集成测试
// ==========================================
// 测试范围: 文件加载、缺省值、覆写优先级、非法取值
// ==========================================


use std::collections::HashMap;
use std::path::PathBuf;

use student_records::app::AppState;
use student_records::config::{config_keys, ConfigError, ConfigManager, DashboardConfig};
use test_helpers::{create_config_file, create_csv_file, ROSTER_CSV};

fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |key: &str| map.get(key).cloned()
}

#[test]
fn test_load_配置文件不存在使用默认值() {
    let manager = ConfigManager::load("/nonexistent/student_records.json").expect("加载失败");

    assert_eq!(manager.config(), &DashboardConfig::default());
    assert!(manager.source_path().is_none());
}

#[test]
fn test_load_部分字段() {
    let file = create_config_file(r#"{ "seed_sample_data": true, "logging": { "json": true } }"#)
        .expect("无法创建配置文件");

    let manager = ConfigManager::load(file.path()).expect("加载失败");

    let config = manager.config();
    assert!(config.seed_sample_data);
    assert_eq!(config.display_precision, 1, "未指定字段使用默认值");
    assert!(config.logging.json);
    assert_eq!(config.logging.filter, "info");
    assert_eq!(manager.source_path(), Some(file.path()));
}

#[test]
fn test_load_格式错误() {
    let file = create_config_file("{ not json").expect("无法创建配置文件");

    let err = ConfigManager::load(file.path()).unwrap_err();

    assert!(matches!(err, ConfigError::Parse { .. }));
}

#[test]
fn test_覆写优先于文件() {
    let file = create_config_file(r#"{ "display_precision": 2 }"#).expect("无法创建配置文件");
    let mut manager = ConfigManager::load(file.path()).expect("加载失败");

    manager
        .apply_overrides_with(lookup_from(&[
            (config_keys::ENV_DISPLAY_PRECISION, "3"),
            (config_keys::ENV_SEED_SAMPLE_DATA, "on"),
            (config_keys::ENV_IMPORT_PATH, "/tmp/roster.csv"),
        ]))
        .expect("覆写失败");

    let config = manager.config();
    assert_eq!(config.display_precision, 3);
    assert!(config.seed_sample_data);
    assert_eq!(config.import_path, Some(PathBuf::from("/tmp/roster.csv")));
}

#[test]
fn test_覆写非法取值() {
    let mut manager = ConfigManager::new();

    let err = manager
        .apply_overrides_with(lookup_from(&[(config_keys::ENV_DISPLAY_PRECISION, "9")]))
        .unwrap_err();

    assert!(matches!(err, ConfigError::InvalidValue { .. }));
}

#[test]
fn test_app_state_按配置导入() {
    let csv = create_csv_file(ROSTER_CSV).expect("无法创建CSV");
    let config = DashboardConfig {
        seed_sample_data: false,
        import_path: Some(csv.path().to_path_buf()),
        ..DashboardConfig::default()
    };

    let state = AppState::new(config).expect("初始化失败");

    assert_eq!(state.roster.len(), 2);
    assert_eq!(state.precision(), 1);
}

#[test]
fn test_app_state_默认空花名册启动() {
    let state = AppState::new(DashboardConfig::default()).expect("初始化失败");

    assert!(state.roster.is_empty(), "默认配置不得预置演示学生");
}

#[test]
fn test_app_state_预置演示数据() {
    let config = DashboardConfig {
        seed_sample_data: true,
        ..DashboardConfig::default()
    };

    let state = AppState::new(config).expect("初始化失败");

    assert_eq!(state.roster.len(), 3);
}
