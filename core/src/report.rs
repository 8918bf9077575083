use serde::Serialize;

use crate::metrics::{
    avg_positive, intensity_factor, normalized_power, training_stress_score, variability_index,
};
use crate::range_stats::{range_stats, RangeStats};
use crate::types::{AthleteSettings, SelectionRange, StreamSet};
use crate::zones::{bucket_time_in_zones, coggan_power_zones, heartrate_zones, ZoneBucket};

/// Samlerapport for én økt ut mot presentasjonslaget. Alt som kan mangle
/// grunnlag (FTP ikke satt, ingen wattmåler, for kort økt) er `Option`
/// eller tom liste.
#[derive(Debug, Clone, Default, Serialize)]
pub struct SessionReport {
    pub session_id: String,
    pub duration_min: f64,
    pub distance_km: f64,
    pub np: Option<f64>,
    pub r#if: Option<f64>,
    pub tss: Option<f64>,
    pub vi: Option<f64>,
    pub avg_power: Option<f64>,
    pub avg_hr: Option<f64>,
    pub avg_cadence: Option<f64>,
    pub elevation_gain_m: f64,
    pub power_zones: Vec<ZoneBucket>,
    pub hr_zones: Vec<ZoneBucket>,
}

/// Kjør hele metrikk-pipelinen over full øktlengde.
pub fn session_report(
    session_id: &str,
    streams: &StreamSet,
    settings: &AthleteSettings,
) -> SessionReport {
    let n = streams.common_len();
    if n == 0 {
        log::debug!("session_report {}: tomme strømmer", session_id);
        return SessionReport {
            session_id: session_id.to_string(),
            ..SessionReport::default()
        };
    }

    let stats: RangeStats = range_stats(streams, SelectionRange::new(0, n - 1), 0.0);

    let watts = streams.watts.as_deref().map(|w| &w[..n]);
    let np = watts.and_then(normalized_power);
    let r#if = intensity_factor(np, settings.ftp);
    // uten tidsstrøm er varigheten manglende input, ikke 0 – da finnes
    // ingen TSS (0.0 ville lest som "ingen belastning")
    let tss = if streams.time_s.is_some() && stats.duration_s > 0.0 {
        training_stress_score(stats.duration_s, np, r#if, settings.ftp)
    } else {
        None
    };
    let vi = variability_index(np, watts.and_then(avg_positive));

    let time = streams.time_s.as_deref().map(|t| &t[..n]);
    let power_zones = match (watts, settings.ftp) {
        (Some(w), Some(ftp)) if ftp > 0.0 => {
            bucket_time_in_zones(w, time, &coggan_power_zones(ftp))
        }
        _ => Vec::new(),
    };
    let hr_zones = match (streams.heartrate_bpm.as_deref(), settings.hr_max) {
        (Some(h), Some(hr_max)) if hr_max > 0.0 => {
            bucket_time_in_zones(&h[..n], time, &heartrate_zones(hr_max))
        }
        _ => Vec::new(),
    };

    SessionReport {
        session_id: session_id.to_string(),
        duration_min: stats.duration_s / 60.0,
        distance_km: stats.distance_m / 1000.0,
        np,
        r#if,
        tss,
        vi,
        avg_power: stats.avg_watts,
        avg_hr: stats.avg_hr,
        avg_cadence: stats.avg_cadence,
        elevation_gain_m: stats.elevation_gain_m,
        power_zones,
        hr_zones,
    }
}
