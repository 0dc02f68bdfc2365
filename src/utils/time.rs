//! Time utilities: ISO-8601 timestamps, duration formatting, 12/24h display.

use chrono::NaiveDateTime;

/// Timestamp format written to the sessions file (microsecond precision).
pub const ISO_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.6f";

const DISPLAY_12H: &str = "%Y-%m-%d %I:%M:%S %p";
const DISPLAY_24H: &str = "%Y-%m-%d %H:%M:%S";

/// Parse a local ISO-8601 timestamp, with or without fractional seconds.
pub fn parse_iso(s: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f")
        .or_else(|_| NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M"))
        .ok()
}

pub fn format_iso(dt: &NaiveDateTime) -> String {
    dt.format(ISO_FORMAT).to_string()
}

pub fn format_datetime(dt: &NaiveDateTime, use_12hour: bool) -> String {
    if use_12hour {
        dt.format(DISPLAY_12H).to_string()
    } else {
        dt.format(DISPLAY_24H).to_string()
    }
}

/// Whole seconds between two timestamps, clamped at zero.
pub fn seconds_between(start: NaiveDateTime, end: NaiveDateTime) -> i64 {
    (end - start).num_seconds().max(0)
}

/// 5400 → "01:30:00"
pub fn format_hms(secs: i64) -> String {
    let s = secs.max(0);
    format!("{:02}:{:02}:{:02}", s / 3600, (s % 3600) / 60, s % 60)
}

/// 5400 → "1h 30m"
pub fn format_hm(secs: i64) -> String {
    let s = secs.max(0);
    format!("{}h {}m", s / 3600, (s % 3600) / 60)
}

/// serde adapter for `NaiveDateTime` fields stored as ISO strings.
pub mod iso {
    use chrono::NaiveDateTime;
    use serde::{Deserialize, Deserializer, Serializer, de::Error};

    pub fn serialize<S: Serializer>(dt: &NaiveDateTime, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(&super::format_iso(dt))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<NaiveDateTime, D::Error> {
        let raw = String::deserialize(d)?;
        super::parse_iso(&raw).ok_or_else(|| D::Error::custom(format!("invalid timestamp '{raw}'")))
    }
}

/// serde adapter for optional ISO timestamps (`end` of an in-progress session).
pub mod iso_opt {
    use chrono::NaiveDateTime;
    use serde::{Deserialize, Deserializer, Serializer, de::Error};

    pub fn serialize<S: Serializer>(dt: &Option<NaiveDateTime>, s: S) -> Result<S::Ok, S::Error> {
        match dt {
            Some(v) => s.serialize_str(&super::format_iso(v)),
            None => s.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        d: D,
    ) -> Result<Option<NaiveDateTime>, D::Error> {
        match Option::<String>::deserialize(d)? {
            None => Ok(None),
            Some(raw) if raw.trim().is_empty() => Ok(None),
            Some(raw) => super::parse_iso(&raw)
                .map(Some)
                .ok_or_else(|| D::Error::custom(format!("invalid timestamp '{raw}'"))),
        }
    }
}
