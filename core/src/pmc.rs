use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

/// Performance Management Chart – CTL/ATL/TSB over en sammenhengende,
/// hull-fylt dagserie. Rekurrensen er en ren sekvensiell fold: dag d
/// avhenger av dag d-1, så ingen vektorisering, bare én gjennomgang i
/// datorekkefølge. Samme input skal gi bit-for-bit samme output.

pub const CTL_DAYS: f64 = 42.0;
pub const ATL_DAYS: f64 = 7.0;

/// Varmstart fra data før vinduet, mot kaldstart-skjevhet.
/// Default (0/0) = ingen historikk.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PmcSeed {
    pub ctl: f64,
    pub atl: f64,
}

/// Én rad per kalenderdag, også dager uten trening (tss = 0, lasten
/// henfaller).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyTrainingLoad {
    pub date: NaiveDate,
    pub tss: f64,
    pub ctl: f64,
    pub atl: f64,
    pub tsb: f64,
}

/// Hull-fylt dags-TSS over `[from, to]` (begge med). Flere økter samme
/// dag summeres; datoer utenfor vinduet ignoreres.
pub fn daily_tss_series(entries: &[(NaiveDate, f64)], from: NaiveDate, to: NaiveDate) -> Vec<f64> {
    assert!(from <= to, "daily_tss_series: from {} > to {}", from, to);
    let days = (to - from).num_days() as usize + 1;
    let mut out = vec![0.0f64; days];
    for (date, tss) in entries {
        if *date < from || *date > to {
            continue;
        }
        let idx = (*date - from).num_days() as usize;
        out[idx] += tss;
    }
    out
}

/// Selve rekurrensen, k = 2/(N+1):
///   ctl[d] = tss[d]*kC + ctl[d-1]*(1-kC)
///   atl[d] = tss[d]*kA + atl[d-1]*(1-kA)
///   tsb[d] = ctl[d-1] - atl[d-1]
/// TSB bruker gårsdagens verdier – formen du *går inn i* dagen med.
pub fn compute_pmc(from: NaiveDate, daily_tss: &[f64], seed: PmcSeed) -> Vec<DailyTrainingLoad> {
    let kc = 2.0 / (CTL_DAYS + 1.0);
    let ka = 2.0 / (ATL_DAYS + 1.0);

    log::debug!(
        "compute_pmc: {} dager fra {}, seed ctl={:.1} atl={:.1}",
        daily_tss.len(),
        from,
        seed.ctl,
        seed.atl
    );

    let mut out = Vec::with_capacity(daily_tss.len());
    let mut prev_ctl = seed.ctl;
    let mut prev_atl = seed.atl;

    for (i, &tss) in daily_tss.iter().enumerate() {
        let date = from + Duration::days(i as i64);
        let tsb = prev_ctl - prev_atl;
        let ctl = tss * kc + prev_ctl * (1.0 - kc);
        let atl = tss * ka + prev_atl * (1.0 - ka);
        out.push(DailyTrainingLoad {
            date,
            tss,
            ctl,
            atl,
            tsb,
        });
        prev_ctl = ctl;
        prev_atl = atl;
    }
    out
}

/// Tolkningsbånd for TSB.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FormStatus {
    VeryFresh,
    Optimal,
    Neutral,
    Fatigued,
    VeryFatigued,
}

/// TSB > 25 → svært uthvilt; 5..=25 → optimal; -10..<5 → nøytral;
/// -30..<-10 → sliten; under -30 → svært sliten.
pub fn form_status(tsb: f64) -> FormStatus {
    if tsb > 25.0 {
        FormStatus::VeryFresh
    } else if tsb >= 5.0 {
        FormStatus::Optimal
    } else if tsb >= -10.0 {
        FormStatus::Neutral
    } else if tsb >= -30.0 {
        FormStatus::Fatigued
    } else {
        FormStatus::VeryFatigued
    }
}

impl FormStatus {
    pub fn label(&self) -> &'static str {
        match self {
            FormStatus::VeryFresh => "Svært uthvilt – fare for detrening",
            FormStatus::Optimal => "Optimal",
            FormStatus::Neutral => "Nøytral",
            FormStatus::Fatigued => "Sliten",
            FormStatus::VeryFatigued => "Svært sliten",
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            FormStatus::VeryFresh => "#7fb3d5",
            FormStatus::Optimal => "#7dcea0",
            FormStatus::Neutral => "#f7dc6f",
            FormStatus::Fatigued => "#f0b27a",
            FormStatus::VeryFatigued => "#ec7063",
        }
    }
}

/// Ukentlig CTL-rampe i prosent: (ctl[d] - ctl[d-7]) / ctl[d-7] * 100.
/// `None` før dag 7 eller når nevneren ikke bærer signal.
pub fn weekly_ramp(loads: &[DailyTrainingLoad], day: usize) -> Option<f64> {
    if day < 7 || day >= loads.len() {
        return None;
    }
    let base = loads[day - 7].ctl;
    if base <= 0.0 {
        return None;
    }
    Some((loads[day].ctl - base) / base * 100.0)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RampFlag {
    /// Over +8 %/uke – skaderisiko.
    TooFast,
    Ok,
    /// Under -5 %/uke – formen lekker.
    Declining,
}

pub fn ramp_flag(ramp_pct: f64) -> RampFlag {
    if ramp_pct > 8.0 {
        RampFlag::TooFast
    } else if ramp_pct < -5.0 {
        RampFlag::Declining
    } else {
        RampFlag::Ok
    }
}
