use crate::models::Statistics;
use crate::utils::formatting::{bar, pad_right, truncate};
use crate::utils::time::format_hm;

const CHART_WIDTH: usize = 30;
const LABEL_WIDTH: usize = 20;

/// Text renderings of the statistics (summary and distribution chart).
pub struct StatsLogic;

impl StatsLogic {
    pub fn summary(stats: &Statistics) -> String {
        let total_hours = stats.total_time / 3600;
        let total_minutes = (stats.total_time % 3600) / 60;

        let mut out = String::new();
        out.push_str(&format!("Total Sessions:   {}\n", stats.total_sessions));
        out.push_str(&format!(
            "Total Time:       {} hours, {} minutes\n",
            total_hours, total_minutes
        ));
        out.push_str(&format!(
            "Average Duration: {} minutes\n",
            stats.average_duration / 60
        ));

        if !stats.activities.is_empty() {
            out.push_str("\nActivities:\n");
            for (name, a) in &stats.activities {
                out.push_str(&format!(
                    "  {}: {} sessions, {}\n",
                    name,
                    a.count,
                    format_hm(a.total_time)
                ));
            }
        }

        out
    }

    /// One bar per activity, sized by its share of the tracked time.
    pub fn chart(stats: &Statistics) -> String {
        if stats.activities.is_empty() {
            return "No sessions to chart.\n".to_string();
        }

        let mut out = String::from("Activity Distribution\n");
        for (name, a) in &stats.activities {
            let pct = stats.share(name);
            let label = truncate(&format!("{} ({})", name, a.count), LABEL_WIDTH);
            out.push_str(&format!(
                "  {} {} {:>5.1}%\n",
                pad_right(&label, LABEL_WIDTH),
                bar(pct, CHART_WIDTH),
                pct
            ));
        }
        out
    }
}
