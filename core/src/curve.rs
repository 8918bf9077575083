use chrono::NaiveDate;
use once_cell::sync::Lazy;
use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

/// Ett trinn i varighetsstigen for kraftkurven.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LadderStep {
    pub label: String,
    pub seconds: u32,
}

impl LadderStep {
    fn new(label: &str, seconds: u32) -> Self {
        Self {
            label: label.to_string(),
            seconds,
        }
    }
}

/// Logaritmisk standardstige: tett i spurt-enden, grov mot timene.
/// Bare et bekvemmelighets-default – stigen er parameter overalt.
pub static DEFAULT_LADDER: Lazy<Vec<LadderStep>> = Lazy::new(|| {
    vec![
        LadderStep::new("1s", 1),
        LadderStep::new("2s", 2),
        LadderStep::new("3s", 3),
        LadderStep::new("5s", 5),
        LadderStep::new("10s", 10),
        LadderStep::new("15s", 15),
        LadderStep::new("20s", 20),
        LadderStep::new("30s", 30),
        LadderStep::new("45s", 45),
        LadderStep::new("1m", 60),
        LadderStep::new("2m", 120),
        LadderStep::new("3m", 180),
        LadderStep::new("5m", 300),
        LadderStep::new("8m", 480),
        LadderStep::new("10m", 600),
        LadderStep::new("15m", 900),
        LadderStep::new("20m", 1200),
        LadderStep::new("30m", 1800),
        LadderStep::new("45m", 2700),
        LadderStep::new("1t", 3600),
        LadderStep::new("2t", 7200),
        LadderStep::new("3t", 10800),
    ]
});

/// Beste holdte snittkraft for én varighet, med proveniens når kurven er
/// bygget på tvers av økter (hvilken økt/dato som satte rekorden).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PowerCurveEntry {
    pub label: String,
    pub duration_s: u32,
    pub watts: f64,
    pub activity_id: Option<String>,
    pub activity_date: Option<NaiveDate>,
}

/// Wattstrøm for én økt, med id/dato for proveniens.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActivityPower {
    pub id: String,
    pub date: NaiveDate,
    pub watts: Vec<f64>,
}

/// Maks rullende snitt over et sammenhengende vindu på `window_s` samples
/// (prefikssum + glidende vindu). Returnerer (watt, startindeks).
/// Strengt `>` slik at første forekomst vinner ved likhet – deterministisk
/// uansett hvor mange like intervaller økten har.
pub fn best_avg_power(watts: &[f64], window_s: u32) -> Option<(f64, usize)> {
    let w = window_s as usize;
    if w == 0 || watts.len() < w {
        return None;
    }

    let mut sum: f64 = watts[..w].iter().sum();
    let mut best = sum;
    let mut best_start = 0usize;
    for start in 1..=(watts.len() - w) {
        sum += watts[start + w - 1] - watts[start - 1];
        if sum > best {
            best = sum;
            best_start = start;
        }
    }
    Some((best / w as f64, best_start))
}

/// Kraftkurve for én økt: hvert stige-trinn som får plass i strømmen.
/// Trinn lengre enn økten hoppes over, de er ikke 0.
pub fn activity_curve(watts: &[f64], ladder: &[LadderStep]) -> Vec<PowerCurveEntry> {
    let mut out = Vec::new();
    for step in ladder {
        if let Some((best, _)) = best_avg_power(watts, step.seconds) {
            out.push(PowerCurveEntry {
                label: step.label.clone(),
                duration_s: step.seconds,
                watts: best,
                activity_id: None,
                activity_date: None,
            });
        }
    }
    out
}

/// Kraftkurve på tvers av økter: per varighet, maks enkelt-økt-beste over
/// alle bidragsytende økter, med proveniens. Samme stige-rutine som for
/// én økt, bare med ett fan-in-nivå til – hvem som bidrar styres av
/// kalleren (alle økter, ett år, en treningsblokk).
/// Første økt i rekkefølgen vinner ved likhet.
pub fn combined_curve(activities: &[&ActivityPower], ladder: &[LadderStep]) -> Vec<PowerCurveEntry> {
    let mut out = Vec::new();
    for step in ladder {
        let mut best: Option<(f64, &ActivityPower)> = None;
        for act in activities {
            if let Some((watts, _)) = best_avg_power(&act.watts, step.seconds) {
                let better = match &best {
                    Some((cur, _)) => OrderedFloat(watts) > OrderedFloat(*cur),
                    None => true,
                };
                if better {
                    best = Some((watts, act));
                }
            }
        }
        if let Some((watts, act)) = best {
            out.push(PowerCurveEntry {
                label: step.label.clone(),
                duration_s: step.seconds,
                watts,
                activity_id: Some(act.id.clone()),
                activity_date: Some(act.date),
            });
        }
    }
    out
}

/// Årskurve: samme rutine, innsnevret til øktene i ett kalenderår.
/// Per varighet kan årsbeste aldri overstige all-time-beste – innsnevring
/// av omfanget kan bare fjerne kandidater.
pub fn curve_for_year(
    activities: &[ActivityPower],
    year: i32,
    ladder: &[LadderStep],
) -> Vec<PowerCurveEntry> {
    use chrono::Datelike;
    let scoped: Vec<&ActivityPower> = activities
        .iter()
        .filter(|a| a.date.year() == year)
        .collect();
    combined_curve(&scoped, ladder)
}

/// All-time-kurve over et sett økter.
pub fn curve_all_time(activities: &[ActivityPower], ladder: &[LadderStep]) -> Vec<PowerCurveEntry> {
    let all: Vec<&ActivityPower> = activities.iter().collect();
    combined_curve(&all, ladder)
}
