use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::export::parse_range;
use crate::models::SessionRecord;
use crate::store::SessionStore;
use crate::utils::formatting::truncate;
use crate::utils::table::{Column, Table};
use crate::utils::time::{format_datetime, format_hms};

const COMMENT_MAX_WIDTH: usize = 40;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List {
        period,
        activity,
        h12,
        h24,
    } = cmd
    {
        let store = SessionStore::load(cfg.data_path());

        let bounds = match period {
            Some(p) => parse_range(p)?,
            None => None,
        };

        let use_12hour = if *h12 {
            true
        } else if *h24 {
            false
        } else {
            cfg.use_12hour_format
        };

        let selected: Vec<&SessionRecord> = store
            .sessions()
            .iter()
            .filter(|s| bounds.is_none_or(|b| b.contains(s.start_date())))
            .filter(|s| {
                activity
                    .as_deref()
                    .is_none_or(|a| s.activity.eq_ignore_ascii_case(a))
            })
            .collect();

        if selected.is_empty() {
            println!("No sessions found.");
            return Ok(());
        }

        print!("{}", render_table(&selected, use_12hour));
        println!("\n{} session(s)", selected.len());
    }

    Ok(())
}

/// Sessions table: ID, Activity, Start, End, Duration, Comments.
pub fn render_table(sessions: &[&SessionRecord], use_12hour: bool) -> String {
    let mut table = Table::new(
        ["ID", "Activity", "Start Time", "End Time", "Duration", "Comments"]
            .into_iter()
            .map(Column::new)
            .collect(),
    );

    for s in sessions {
        table.add_row(vec![
            s.id.to_string(),
            s.activity.clone(),
            format_datetime(&s.start, use_12hour),
            s.end
                .as_ref()
                .map(|e| format_datetime(e, use_12hour))
                .unwrap_or_else(|| "--".to_string()),
            format_hms(s.duration),
            truncate(&s.comments, COMMENT_MAX_WIDTH),
        ]);
    }

    table.render()
}
