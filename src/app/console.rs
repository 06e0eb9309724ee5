// ==========================================
// 学生成绩看板 - 控制台适配
// ==========================================
// 职责: 解析控制台输入行,调用花名册 API,渲染文本输出
// 约定: delete 使用从 1 开始的行号; add 参数以 '|' 分隔
// ==========================================

use std::path::PathBuf;
use thiserror::Error;

use crate::api::error::ApiError;
use crate::app::state::AppState;
use crate::domain::student::{RawSubmission, StudentRecord};

const HELP_TEXT: &str = "\
Commands:
  add NAME|REG_NO|CAT|EXAM   add a student (CAT 0-30, Exam 0-70)
  list                       show all students
  sort                       sort by total marks (highest to lowest)
  average                    show the class average
  top                        show the top student
  stats                      show pass/fail statistics
  delete ROW                 delete the student at ROW (1-based)
  delete-id RECORD_ID        delete the student with RECORD_ID
  import PATH                import students from a CSV file
  help                       show this help
  quit                       exit";

/// 控制台命令
#[derive(Debug, Clone, PartialEq)]
pub enum ConsoleCommand {
    Add(RawSubmission),
    List,
    Sort,
    Average,
    Top,
    Stats,
    /// 从 1 开始的行号
    Delete(usize),
    DeleteId(String),
    Import(PathBuf),
    Help,
    Quit,
}

/// 命令解析错误
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandParseError {
    #[error("Unknown command: {0} (type 'help' for a list of commands)")]
    UnknownCommand(String),

    #[error("Missing argument for '{command}': {argument}")]
    MissingArgument {
        command: &'static str,
        argument: &'static str,
    },

    #[error("Invalid row number: {0} (rows start at 1)")]
    InvalidRow(String),
}

impl ConsoleCommand {
    /// 解析一行输入
    ///
    /// 空行返回 Ok(None)
    pub fn parse(line: &str) -> Result<Option<Self>, CommandParseError> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(None);
        }

        let (verb, rest) = match line.split_once(char::is_whitespace) {
            Some((verb, rest)) => (verb, rest.trim()),
            None => (line, ""),
        };

        let command = match verb.to_ascii_lowercase().as_str() {
            "add" => {
                // 缺失的字段按空串处理,交给校验层报告 RequiredField
                let mut parts = rest.split('|').map(str::to_string);
                let mut next = || parts.next().unwrap_or_default();
                ConsoleCommand::Add(RawSubmission::new(next(), next(), next(), next()))
            }
            "list" | "ls" => ConsoleCommand::List,
            "sort" => ConsoleCommand::Sort,
            "average" | "avg" => ConsoleCommand::Average,
            "top" => ConsoleCommand::Top,
            "stats" => ConsoleCommand::Stats,
            "delete" | "del" => {
                if rest.is_empty() {
                    return Err(CommandParseError::MissingArgument {
                        command: "delete",
                        argument: "ROW",
                    });
                }
                match rest.parse::<usize>() {
                    Ok(row) if row >= 1 => ConsoleCommand::Delete(row),
                    _ => return Err(CommandParseError::InvalidRow(rest.to_string())),
                }
            }
            "delete-id" => {
                if rest.is_empty() {
                    return Err(CommandParseError::MissingArgument {
                        command: "delete-id",
                        argument: "RECORD_ID",
                    });
                }
                ConsoleCommand::DeleteId(rest.to_string())
            }
            "import" => {
                if rest.is_empty() {
                    return Err(CommandParseError::MissingArgument {
                        command: "import",
                        argument: "PATH",
                    });
                }
                ConsoleCommand::Import(PathBuf::from(rest))
            }
            "help" | "?" => ConsoleCommand::Help,
            "quit" | "exit" | "q" => ConsoleCommand::Quit,
            other => return Err(CommandParseError::UnknownCommand(other.to_string())),
        };

        Ok(Some(command))
    }
}

// ==========================================
// ConsoleSession - 控制台会话
// ==========================================

/// 控制台会话
pub struct ConsoleSession {
    state: AppState,
}

impl ConsoleSession {
    pub fn new(state: AppState) -> Self {
        Self { state }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// 处理一行输入
    ///
    /// # 返回
    /// - None: 退出会话
    /// - Some(text): 需要输出的文本（可能为空）
    pub fn handle_line(&mut self, line: &str) -> Option<String> {
        match ConsoleCommand::parse(line) {
            Ok(None) => Some(String::new()),
            Ok(Some(ConsoleCommand::Quit)) => None,
            Ok(Some(command)) => Some(self.execute(command)),
            Err(e) => Some(e.to_string()),
        }
    }

    /// 执行命令并渲染输出
    pub fn execute(&mut self, command: ConsoleCommand) -> String {
        let roster = &mut self.state.roster;
        let precision = self.state.config.display_precision;

        match command {
            ConsoleCommand::Add(raw) => match roster.submit_raw(&raw) {
                Ok(record) => format!(
                    "Student added: {} (Total: {:.*}, Grade: {})",
                    record.name(),
                    precision,
                    record.total(),
                    record.grade()
                ),
                Err(e) => render_error(&e),
            },
            ConsoleCommand::List => self.render_table(),
            ConsoleCommand::Sort => match roster.sort_descending() {
                Ok(()) => format!(
                    "Students sorted by total marks (highest to lowest)\n{}",
                    self.render_table()
                ),
                Err(e) => render_error(&e),
            },
            ConsoleCommand::Average => match roster.average() {
                Ok(average) => format!(
                    "Class Average: {:.*} (based on {} students)",
                    precision,
                    average,
                    roster.len()
                ),
                Err(e) => render_error(&e),
            },
            ConsoleCommand::Top => match roster.top_performer() {
                Ok(top) => format!(
                    "Top Student: {} (Total: {:.*}, Grade: {})",
                    top.name(),
                    precision,
                    top.total(),
                    top.grade()
                ),
                Err(e) => render_error(&e),
            },
            ConsoleCommand::Stats => match roster.pass_fail_stats() {
                Ok(stats) => format!(
                    "Pass: {} ({:.1}%) | Fail: {} ({:.1}%)",
                    stats.pass_count, stats.pass_pct, stats.fail_count, stats.fail_pct
                ),
                Err(e) => render_error(&e),
            },
            ConsoleCommand::Delete(row) => match roster.delete_at(row - 1) {
                Ok(_) => "Student deleted successfully".to_string(),
                Err(e) => render_error(&e),
            },
            ConsoleCommand::DeleteId(record_id) => match roster.delete_by_id(&record_id) {
                Ok(_) => "Student deleted successfully".to_string(),
                Err(e) => render_error(&e),
            },
            ConsoleCommand::Import(path) => match roster.import_csv(&path) {
                Ok(report) => {
                    let mut out = format!(
                        "Imported {} of {} rows from {}",
                        report.imported_count(),
                        report.total_rows,
                        path.display()
                    );
                    for rejected in &report.rejected {
                        let reasons: Vec<&str> =
                            rejected.errors.iter().map(|e| e.message.as_str()).collect();
                        out.push_str(&format!(
                            "\n  Row {}: {}",
                            rejected.row_number,
                            reasons.join("; ")
                        ));
                    }
                    out
                }
                Err(e) => render_error(&e),
            },
            ConsoleCommand::Help => HELP_TEXT.to_string(),
            ConsoleCommand::Quit => String::new(),
        }
    }

    /// 渲染学生表格,高亮行以 '*' 标记
    pub fn render_table(&self) -> String {
        let records = self.state.roster.records();
        if records.is_empty() {
            return "No students in the system".to_string();
        }

        let highlighted = self.state.roster.highlight_set();
        let precision = self.state.precision();

        let mut out = format!(
            "  {:>3}  {:<24} {:<16} {:>6} {:>6} {:>7}  {}",
            "#", "Name", "Reg No", "CAT", "Exam", "Total", "Grade"
        );
        for (index, record) in records.iter().enumerate() {
            let marker = if highlighted.contains(&index) { '*' } else { ' ' };
            out.push('\n');
            out.push_str(&render_row(marker, index + 1, record, precision));
        }
        out
    }
}

fn render_row(marker: char, row: usize, record: &StudentRecord, precision: usize) -> String {
    format!(
        "{} {:>3}  {:<24} {:<16} {:>6.*} {:>6.*} {:>7.*}  {}",
        marker,
        row,
        record.name(),
        record.reg_no(),
        precision,
        record.cat_score(),
        precision,
        record.exam_score(),
        precision,
        record.total(),
        record.grade()
    )
}

fn render_error(err: &ApiError) -> String {
    match err {
        ApiError::ValidationFailed { violations, .. } => {
            let mut out = String::from("Please correct the following:");
            for violation in violations {
                out.push_str("\n  - ");
                out.push_str(&violation.message);
            }
            out
        }
        other => other.to_string(),
    }
}
