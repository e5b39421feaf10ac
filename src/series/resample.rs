//! Bar resampling onto a fixed time grid.

use chrono::{DateTime, Duration, Utc};

use crate::models::bar::Bar;

/// Dashboard bucket width for non-exempt instruments.
pub fn default_bucket() -> Duration {
    Duration::minutes(15)
}

/// Normalize raw bars onto a fixed grid.
///
/// Exempt series pass through with volume forced to zero. Otherwise bars are
/// grouped into left-closed buckets of width `bucket`, aligned to the UNIX
/// epoch, and each non-empty bucket becomes one bar stamped with the bucket
/// start. Empty buckets are dropped.
pub fn resample(raw: &[Bar], bucket: Duration, exempt: bool) -> Vec<Bar> {
    if exempt {
        return raw.iter().map(|bar| bar.with_volume(0.0)).collect();
    }

    let width_ms = bucket.num_milliseconds();
    if width_ms <= 0 {
        return raw.to_vec();
    }

    let mut ordered = raw.to_vec();
    ordered.sort_by_key(|bar| bar.timestamp);

    let mut out: Vec<Bar> = Vec::new();
    for bar in ordered {
        let start = bucket_start(bar.timestamp, width_ms);
        match out.last_mut() {
            Some(current) if current.timestamp == start => {
                current.high = current.high.max(bar.high);
                current.low = current.low.min(bar.low);
                current.close = bar.close;
                current.volume += bar.volume;
            }
            _ => out.push(Bar {
                timestamp: start,
                ..bar
            }),
        }
    }

    out
}

fn bucket_start(timestamp: DateTime<Utc>, width_ms: i64) -> DateTime<Utc> {
    let ms = timestamp.timestamp_millis();
    let start = ms - ms.rem_euclid(width_ms);
    DateTime::from_timestamp_millis(start).unwrap_or(timestamp)
}
