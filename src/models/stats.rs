use super::session::SessionRecord;
use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ActivityStats {
    pub count: usize,
    pub total_time: i64,
}

/// Aggregate view over the stored sessions.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Statistics {
    pub total_sessions: usize,
    pub total_time: i64,
    pub average_duration: i64,
    pub activities: BTreeMap<String, ActivityStats>,
}

impl Statistics {
    pub fn from_sessions(sessions: &[SessionRecord]) -> Self {
        let mut activities: BTreeMap<String, ActivityStats> = BTreeMap::new();
        let mut total_time = 0i64;

        for s in sessions {
            total_time += s.duration;
            let entry = activities.entry(s.activity.clone()).or_default();
            entry.count += 1;
            entry.total_time += s.duration;
        }

        let total_sessions = sessions.len();
        let average_duration = if total_sessions == 0 {
            0
        } else {
            total_time / total_sessions as i64
        };

        Self {
            total_sessions,
            total_time,
            average_duration,
            activities,
        }
    }

    /// Share of the total tracked time for one activity, in percent.
    pub fn share(&self, activity: &str) -> f64 {
        match self.activities.get(activity) {
            Some(a) if self.total_time > 0 => a.total_time as f64 * 100.0 / self.total_time as f64,
            _ => 0.0,
        }
    }
}
