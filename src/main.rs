// ==========================================
// 学生成绩看板 - 控制台主入口
// ==========================================
// 流程: 加载配置 → 初始化日志 → 构建 AppState → 读取 stdin 命令循环
// ==========================================

use std::io::{self, BufRead, Write};

use anyhow::Context;

use student_records::app::{AppState, ConsoleSession};
use student_records::config::ConfigManager;
use student_records::logging;

fn main() -> anyhow::Result<()> {
    // 加载配置（文件缺失时使用默认值）,再叠加环境变量
    let mut manager = ConfigManager::load_default().context("failed to load configuration")?;
    manager
        .apply_env_overrides()
        .context("invalid configuration override")?;

    logging::init(&manager.config().logging)?;

    tracing::info!("==================================================");
    tracing::info!("{} v{}", student_records::APP_NAME, student_records::VERSION);
    tracing::info!(config = ?manager.source_path(), "配置已加载");
    tracing::debug!(snapshot = %manager.snapshot_json()?, "配置快照");
    tracing::info!("==================================================");

    let state = AppState::new(manager.into_config()).context("failed to initialize dashboard")?;
    let mut session = ConsoleSession::new(state);

    let stdin = io::stdin();
    let mut stdout = io::stdout();

    writeln!(stdout, "{} (type 'help' for commands)", student_records::APP_NAME)?;
    writeln!(stdout, "{}", session.render_table())?;

    loop {
        write!(stdout, "> ")?;
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }

        match session.handle_line(&line) {
            Some(output) if output.is_empty() => {}
            Some(output) => writeln!(stdout, "{}", output)?,
            None => break,
        }
    }

    tracing::info!(students = session.state().roster.len(), "会话结束");
    Ok(())
}
