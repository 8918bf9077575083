use once_cell::sync::Lazy;
use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

use crate::curve::PowerCurveEntry;
use crate::metrics::watts_per_kg;

/// Referanseverdi i W/kg for én styrkedimensjon ved én varighet.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Benchmark {
    pub label: String,
    pub seconds: u32,
    pub wkg: f64,
}

impl Benchmark {
    fn new(label: &str, seconds: u32, wkg: f64) -> Self {
        Self {
            label: label.to_string(),
            seconds,
            wkg,
        }
    }
}

/// Standard-benchmarks (omtrent verdensklassenivå per varighet).
/// Rekkefølgen er også tie-break-rekkefølgen for ryttertypen:
/// spurt > punch > klatring > tempo > utholdenhet.
pub static DEFAULT_BENCHMARKS: Lazy<Vec<Benchmark>> = Lazy::new(|| {
    vec![
        Benchmark::new("Spurt", 5, 22.0),
        Benchmark::new("Punch", 60, 10.5),
        Benchmark::new("Klatring", 300, 7.0),
        Benchmark::new("Tempo", 1200, 5.8),
        Benchmark::new("Utholdenhet", 3600, 5.0),
    ]
});

/// Scorer innenfor `STRENGTH_TIE_EPS` av maks regnes som likeverdige og
/// avgjøres av tabellrekkefølgen.
pub const STRENGTH_TIE_EPS: f64 = 1.0;

/// 0–100-score for én dimensjon. `None` når kurven mangler varigheten.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StrengthScore {
    pub label: String,
    pub seconds: u32,
    pub score: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StrengthProfile {
    pub scores: Vec<StrengthScore>,
    /// Etikett for den dominerende dimensjonen.
    pub rider_type: String,
}

/// Styrkeprofil fra en kraftkurve (typisk all-time):
/// `min(100, 100 * utøver_wkg / benchmark_wkg)` per dimensjon.
/// `None` uten vekt eller når ingen dimensjon lar seg score.
pub fn strength_profile(
    curve: &[PowerCurveEntry],
    weight_kg: Option<f64>,
    benchmarks: &[Benchmark],
) -> Option<StrengthProfile> {
    weight_kg.filter(|w| *w > 0.0)?;
    if benchmarks.is_empty() {
        return None;
    }

    let scores: Vec<StrengthScore> = benchmarks
        .iter()
        .map(|b| {
            let score = curve
                .iter()
                .find(|e| e.duration_s == b.seconds)
                .and_then(|e| watts_per_kg(e.watts, weight_kg))
                .map(|wkg| (100.0 * wkg / b.wkg).min(100.0));
            StrengthScore {
                label: b.label.clone(),
                seconds: b.seconds,
                score,
            }
        })
        .collect();

    let max = scores
        .iter()
        .filter_map(|s| s.score)
        .max_by_key(|s| OrderedFloat(*s))?;

    // første dimensjon innenfor epsilon av maks vinner (tabellrekkefølgen)
    let rider_type = scores
        .iter()
        .find(|s| s.score.map_or(false, |v| v >= max - STRENGTH_TIE_EPS))
        .map(|s| s.label.clone())
        .unwrap_or_default();

    Some(StrengthProfile { scores, rider_type })
}
