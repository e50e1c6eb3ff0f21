use chrono::{
  DateTime,
  Local,
  TimeZone,
  Utc
};
use taskpad_core::Notice;

const TIMESTAMP_FORMAT: &str =
  "%Y-%m-%d %H:%M";

pub fn count_label(
  count: Option<usize>
) -> String {
  count.map_or_else(
    || "…".to_string(),
    |count| count.to_string()
  )
}

/// Renders a server timestamp in the
/// browser's local zone.
pub fn format_timestamp(
  timestamp: DateTime<Utc>
) -> String {
  format_in(timestamp, &Local)
}

fn format_in<Tz: TimeZone>(
  timestamp: DateTime<Utc>,
  zone: &Tz
) -> String
where
  Tz::Offset: std::fmt::Display
{
  timestamp
    .with_timezone(zone)
    .format(TIMESTAMP_FORMAT)
    .to_string()
}

pub fn notice_text(
  notice: &Notice
) -> String {
  format!(
    "Failed {}: {}",
    notice.operation, notice.message
  )
}
