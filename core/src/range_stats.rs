use serde::Serialize;

use crate::metrics::avg_positive;
use crate::series::lower_bound;
use crate::smoothing::median3;
use crate::types::{SelectionRange, StreamSet};

/// Aggregater over et markert utvalg av den delte sample-indeksen.
/// Snitt er `None` (ikke 0) når ingen samples i området bærer signal –
/// UI skal kunne skille "ingen data" fra "0".
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RangeStats {
    pub distance_m: f64,
    pub duration_s: f64,
    pub avg_speed_kmh: Option<f64>,
    pub avg_watts: Option<f64>,
    pub avg_hr: Option<f64>,
    pub avg_cadence: Option<f64>,
    /// Sum av positive høydedeltaer i området; nedoverbakke trekkes ikke fra.
    pub elevation_gain_m: f64,
    /// Vertikal stigningshastighet, meter klatret per time.
    pub vam_m_per_h: Option<f64>,
}

/// Statistikk for utvalget `[start, end]` (begge med). Degenerert utvalg
/// (like ender, eller kortere enn `min_distance_m`) gir nullet record med
/// alle snitt `None`. `start > end` er kontraktsbrudd og panikker.
pub fn range_stats(streams: &StreamSet, range: SelectionRange, min_distance_m: f64) -> RangeStats {
    assert!(
        range.start <= range.end,
        "range_stats: start {} > end {}",
        range.start,
        range.end
    );

    let n = streams.common_len();
    if n == 0 || range.start >= n {
        return RangeStats::default();
    }
    let start = range.start;
    let end = range.end.min(n - 1);

    let dist = streams.distance_m.as_deref();
    let clamped = SelectionRange { start, end };
    if clamped.is_degenerate(dist, min_distance_m) {
        return RangeStats::default();
    }

    let distance_m = dist.map_or(0.0, |d| d[end] - d[start]);
    let duration_s = streams.time_s.as_deref().map_or(0.0, |t| t[end] - t[start]);

    let avg_speed_kmh = if duration_s > 0.0 && distance_m > 0.0 {
        Some(distance_m / duration_s * 3.6)
    } else {
        None
    };

    let avg_watts = streams
        .watts
        .as_deref()
        .and_then(|w| avg_positive(&w[start..=end]));
    let avg_hr = streams
        .heartrate_bpm
        .as_deref()
        .and_then(|h| avg_positive(&h[start..=end]));
    let avg_cadence = streams
        .cadence_rpm
        .as_deref()
        .and_then(|c| avg_positive(&c[start..=end]));

    // medianglattet høyde før deltaene, ellers teller GPS-støy som klatring
    let elevation_gain_m = streams.altitude_m.as_deref().map_or(0.0, |a| {
        let smoothed = median3(&a[start..=end]);
        let mut gain = 0.0;
        for i in 1..smoothed.len() {
            let delta = smoothed[i] - smoothed[i - 1];
            if delta > 0.0 {
                gain += delta;
            }
        }
        gain
    });

    let vam_m_per_h = if duration_s > 0.0 && elevation_gain_m > 0.0 {
        Some(elevation_gain_m / (duration_s / 3600.0))
    } else {
        None
    };

    RangeStats {
        distance_m,
        duration_s,
        avg_speed_kmh,
        avg_watts,
        avg_hr,
        avg_cadence,
        elevation_gain_m,
        vam_m_per_h,
    }
}

/// Beste (raskeste) tid over en sammenhengende strekning på `split_m`
/// meter, søkt med lower bound per startindeks. `None` når økten er
/// kortere enn strekningen.
pub fn best_split_seconds(distance_m: &[f64], time_s: &[f64], split_m: f64) -> Option<f64> {
    let n = distance_m.len().min(time_s.len());
    if n < 2 || split_m <= 0.0 {
        return None;
    }
    let d = &distance_m[..n];
    let t = &time_s[..n];
    if d[n - 1] - d[0] < split_m {
        return None;
    }

    let mut best: Option<f64> = None;
    for i in 0..n {
        let target = d[i] + split_m;
        if target > d[n - 1] {
            break;
        }
        let j = lower_bound(d, target);
        let dt = t[j] - t[i];
        if best.map_or(true, |b| dt < b) {
            best = Some(dt);
        }
    }
    best
}
