use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Én sone i en ordnet, uttømmende partisjon av metrikk-domenet.
/// Sonen dekker `[forrige upper, upper)`; siste sone skal ha
/// `upper = f64::INFINITY` og fanger alt over de endelige grensene.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ZoneDef {
    pub label: String,
    pub upper: f64,
    pub color: String,
}

impl ZoneDef {
    pub fn new(label: &str, upper: f64, color: &str) -> Self {
        Self {
            label: label.to_string(),
            upper,
            color: color.to_string(),
        }
    }
}

/// Tidsvektet bøtte ut mot presentasjonslaget.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ZoneBucket {
    pub zone_index: usize,
    pub label: String,
    pub seconds: f64,
    pub percent: f64,
    pub color: String,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ZoneError {
    #[error("sonetabellen er tom")]
    Empty,
    #[error("sonegrensene må være strengt stigende (sone {0})")]
    NotAscending(usize),
    #[error("siste sone må være åpen oppover (upper = inf)")]
    NoCatchAll,
}

/// Sjekk at en caller-levert sonetabell er brukbar: ikke tom, strengt
/// stigende grenser, og en åpen siste sone.
pub fn validate_zones(zones: &[ZoneDef]) -> Result<(), ZoneError> {
    if zones.is_empty() {
        return Err(ZoneError::Empty);
    }
    for i in 1..zones.len() {
        if zones[i].upper <= zones[i - 1].upper {
            return Err(ZoneError::NotAscending(i));
        }
    }
    if zones[zones.len() - 1].upper.is_finite() {
        return Err(ZoneError::NoCatchAll);
    }
    Ok(())
}

/// Tidsvektet histogram av en strøm inn i soner.
///
/// Vekting per sample med positivt signal:
///   - tidsstrøm med lik lengde: `max(1, t[i+1] - t[i])`
///     (siste sample bruker `max(1, t[i] - t[i-1])`)
///   - ellers: 1.0 per sample (antallsvekting som fallback)
///
/// Sonevalg: første sone der verdien er strengt mindre enn `upper`,
/// sjekket i stigende rekkefølge. Tom vektor ut når total vekt er 0 –
/// "ingen brukbare data" skal ikke se ut som en nullfylt partisjon.
pub fn bucket_time_in_zones(
    values: &[f64],
    time_s: Option<&[f64]>,
    zones: &[ZoneDef],
) -> Vec<ZoneBucket> {
    if zones.is_empty() || values.is_empty() {
        return Vec::new();
    }

    let n = values.len();
    let time = match time_s {
        Some(t) if t.len() == n && n >= 2 => Some(t),
        Some(t) if t.len() != n => {
            log::debug!(
                "bucket_time_in_zones: tidsstrøm ({}) matcher ikke verdistrøm ({}), faller tilbake til antallsvekting",
                t.len(),
                n
            );
            None
        }
        _ => None,
    };

    let mut seconds = vec![0.0f64; zones.len()];
    for (i, &v) in values.iter().enumerate() {
        if v <= 0.0 {
            continue; // 0/manglende = ikke noe signal
        }
        let w = match time {
            Some(t) => {
                if i + 1 < n {
                    (t[i + 1] - t[i]).max(1.0)
                } else {
                    (t[i] - t[i - 1]).max(1.0)
                }
            }
            None => 1.0,
        };
        let zi = zones
            .iter()
            .position(|z| v < z.upper)
            .unwrap_or(zones.len() - 1);
        seconds[zi] += w;
    }

    let total: f64 = seconds.iter().sum();
    if total <= 0.0 {
        return Vec::new();
    }

    zones
        .iter()
        .enumerate()
        .map(|(i, z)| ZoneBucket {
            zone_index: i,
            label: z.label.clone(),
            seconds: seconds[i],
            percent: seconds[i] / total * 100.0,
            color: z.color.clone(),
        })
        .collect()
}

/// Klassiske 7 wattsoner (Coggan) skalert av FTP. Ren data – callere kan
/// like gjerne sende inn en 5-soners tabell, kjernen bryr seg ikke.
pub fn coggan_power_zones(ftp: f64) -> Vec<ZoneDef> {
    vec![
        ZoneDef::new("Z1 Aktiv restitusjon", ftp * 0.55, "#7fb3d5"),
        ZoneDef::new("Z2 Utholdenhet", ftp * 0.75, "#76d7c4"),
        ZoneDef::new("Z3 Tempo", ftp * 0.90, "#7dcea0"),
        ZoneDef::new("Z4 Terskel", ftp * 1.05, "#f7dc6f"),
        ZoneDef::new("Z5 VO2max", ftp * 1.20, "#f0b27a"),
        ZoneDef::new("Z6 Anaerob", ftp * 1.50, "#ec7063"),
        ZoneDef::new("Z7 Nevromuskulær", f64::INFINITY, "#a569bd"),
    ]
}

/// 5 pulssoner som andel av makspuls.
pub fn heartrate_zones(hr_max: f64) -> Vec<ZoneDef> {
    vec![
        ZoneDef::new("Z1 Rolig", hr_max * 0.60, "#7fb3d5"),
        ZoneDef::new("Z2 Grunntrening", hr_max * 0.70, "#76d7c4"),
        ZoneDef::new("Z3 Moderat", hr_max * 0.80, "#f7dc6f"),
        ZoneDef::new("Z4 Hard", hr_max * 0.90, "#f0b27a"),
        ZoneDef::new("Z5 Maks", f64::INFINITY, "#ec7063"),
    ]
}
