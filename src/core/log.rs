use crate::errors::AppResult;
use crate::store::log::{LogEntry, read_log};
use ansi_term::Colour;
use regex::Regex;
use std::path::Path;
use std::sync::LazyLock;

const OP_MAX_WIDTH: usize = 60;

static ANSI_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\x1B\[[0-9;]*[mK]").expect("valid ANSI pattern"));

fn strip_ansi(s: &str) -> String {
    ANSI_RE.replace_all(s, "").into_owned()
}

/// ANSI colour by operation.
fn color_for_operation(op: &str) -> Colour {
    match op {
        "track" => Colour::Green,
        "del" => Colour::Red,
        "edit" => Colour::Yellow,
        "config_migrated" => Colour::Purple,
        "backup" => Colour::Blue,
        "init" => Colour::RGB(255, 153, 51),
        "export" => Colour::Cyan,
        _ => Colour::White,
    }
}

pub struct LogLogic;

impl LogLogic {
    /// Render the internal log, one line per entry.
    pub fn render(entries: &[LogEntry]) -> String {
        if entries.is_empty() {
            return "No log entries.\n".to_string();
        }

        let rows: Vec<(usize, String, &LogEntry)> = entries
            .iter()
            .enumerate()
            .map(|(i, e)| {
                let date = chrono::DateTime::parse_from_rfc3339(&e.date)
                    .map(|dt| dt.format("%FT%T%:z").to_string())
                    .unwrap_or_else(|_| e.date.clone());
                (i + 1, date, e)
            })
            .collect();

        let id_w = entries.len().to_string().len();
        let date_w = rows.iter().map(|(_, d, _)| d.len()).max().unwrap_or(0);
        let op_w = entries
            .iter()
            .map(|e| op_target(e).chars().count())
            .max()
            .unwrap_or(10)
            .min(OP_MAX_WIDTH);

        let mut out = String::new();
        for (id, date, e) in rows {
            let color = color_for_operation(&e.operation);

            let visible = op_target(e);
            let truncated = if visible.chars().count() > OP_MAX_WIDTH {
                let mut s: String = visible.chars().take(OP_MAX_WIDTH - 3).collect();
                s.push_str("...");
                s
            } else {
                visible
            };

            // only the operation word is coloured
            let colored = match truncated.split_once(' ') {
                Some((op, rest)) => format!("{} {}", color.paint(op), rest),
                None => color.paint(truncated.as_str()).to_string(),
            };

            let padding =
                " ".repeat(op_w.saturating_sub(strip_ansi(&colored).chars().count()));

            out.push_str(&format!(
                "{:>id_w$}: {:<date_w$} | {}{} => {}\n",
                id,
                date,
                colored,
                padding,
                e.message,
                id_w = id_w,
                date_w = date_w
            ));
        }

        out
    }

    pub fn print_log(data_file: &Path) -> AppResult<()> {
        let entries = read_log(data_file)?;
        println!("📜 Internal log:\n");
        print!("{}", Self::render(&entries));
        Ok(())
    }
}

fn op_target(e: &LogEntry) -> String {
    if e.target.is_empty() {
        e.operation.clone()
    } else {
        format!("{} ({})", e.operation, e.target)
    }
}
