/// Normalized Power:
/// 1) 30s rullende snitt av kraft (fast vindu, antar ~1 Hz)
/// 2) ^4-middel
/// 3) fjerderot
///
/// Krever minst ett helt vindu – økter under 30 samples har ikke NP.
/// Nuller (frihjuling) teller med i snittet, det er meningen.
pub fn normalized_power(watts: &[f64]) -> Option<f64> {
    let window = 30usize;
    if watts.len() < window {
        return None;
    }

    let mut smooth = Vec::with_capacity(watts.len() - window + 1);
    let mut sum = 0.0f64;
    for i in 0..watts.len() {
        sum += watts[i];
        if i >= window {
            sum -= watts[i - window];
        }
        if i + 1 >= window {
            smooth.push(sum / window as f64);
        }
    }

    let mut fourth_power_avg = 0.0f64;
    for v in &smooth {
        fourth_power_avg += v.powi(4);
    }
    fourth_power_avg /= smooth.len() as f64;

    Some(fourth_power_avg.powf(0.25))
}

/// Snitt over samples med positivt signal. 0/negativt regnes som
/// "mangler" (sensor-dropout) og holdes utenfor – `None` når ingenting
/// bærer signal, slik at UI kan vise "ingen data" i stedet for 0.
pub fn avg_positive(values: &[f64]) -> Option<f64> {
    let mut sum = 0.0f64;
    let mut cnt = 0usize;
    for &v in values {
        if v > 0.0 {
            sum += v;
            cnt += 1;
        }
    }
    if cnt == 0 {
        None
    } else {
        Some(sum / cnt as f64)
    }
}

/// IF = NP/FTP
pub fn intensity_factor(np: Option<f64>, ftp: Option<f64>) -> Option<f64> {
    match (np, ftp) {
        (Some(n), Some(f)) if f > 0.0 => Some(n / f),
        _ => None,
    }
}

/// TSS = (varighet_sek * NP * IF) / (FTP * 3600) * 100
/// Standardformelen – skal treffe referanseverdier eksakt
/// (1 t på FTP gir nøyaktig 100).
pub fn training_stress_score(
    duration_s: f64,
    np: Option<f64>,
    if_: Option<f64>,
    ftp: Option<f64>,
) -> Option<f64> {
    assert!(duration_s >= 0.0, "training_stress_score: negativ varighet");
    match (np, if_, ftp) {
        (Some(n), Some(i), Some(f)) if f > 0.0 => {
            Some((duration_s * n * i) / (f * 3600.0) * 100.0)
        }
        _ => None,
    }
}

/// VI = NP / snittwatt
pub fn variability_index(np: Option<f64>, avg_power: Option<f64>) -> Option<f64> {
    match (np, avg_power) {
        (Some(n), Some(a)) if a > 0.0 => Some(n / a),
        _ => None,
    }
}

/// Watt per kilo – grunnlaget for styrkeprofilen.
pub fn watts_per_kg(watts: f64, weight_kg: Option<f64>) -> Option<f64> {
    match weight_kg {
        Some(w) if w > 0.0 => Some(watts / w),
        _ => None,
    }
}
