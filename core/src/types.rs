use serde::{Deserialize, Serialize};

/// Parallelle sample-vektorer for én økt. Alle strømmer deler sample-indeks
/// (typisk 1 Hz), men kan ha ulik lengde fra opptaker/import – bruk
/// `common_len()` og kutt til minste lengde før indeksert bruk.
///
/// 0.0 (eller manglende strøm) betyr "ikke noe signal" og skal holdes
/// utenfor snittberegninger.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StreamSet {
    /// Sekunder fra start, ikke-synkende.
    pub time_s: Option<Vec<f64>>,
    /// Meter fra start, ikke-synkende.
    pub distance_m: Option<Vec<f64>>,
    pub altitude_m: Option<Vec<f64>>,
    pub heartrate_bpm: Option<Vec<f64>>,
    pub watts: Option<Vec<f64>>,
    pub cadence_rpm: Option<Vec<f64>>,
    /// [lat, lon] per sample.
    pub latlng: Option<Vec<[f64; 2]>>,
}

impl StreamSet {
    /// Minste lengde over strømmene som faktisk finnes. 0 hvis ingen.
    pub fn common_len(&self) -> usize {
        let mut len: Option<usize> = None;
        let mut take = |l: usize| {
            len = Some(match len {
                Some(cur) => cur.min(l),
                None => l,
            });
        };
        if let Some(v) = &self.time_s {
            take(v.len());
        }
        if let Some(v) = &self.distance_m {
            take(v.len());
        }
        if let Some(v) = &self.altitude_m {
            take(v.len());
        }
        if let Some(v) = &self.heartrate_bpm {
            take(v.len());
        }
        if let Some(v) = &self.watts {
            take(v.len());
        }
        if let Some(v) = &self.cadence_rpm {
            take(v.len());
        }
        if let Some(v) = &self.latlng {
            take(v.len());
        }
        len.unwrap_or(0)
    }
}

/// Utøver-innstillinger fra lagringslaget (utenfor kjernen).
/// Alt er valgfritt – metrikker som mangler grunnlag gir `None`, ikke 0.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AthleteSettings {
    pub ftp: Option<f64>,
    pub weight_kg: Option<f64>,
    pub hr_max: Option<f64>,
    pub hr_rest: Option<f64>,
}

/// Markert utvalg i den delte sample-indeksen, begge ender inklusive.
/// Invariant: `start <= end` – brudd er en kontraktsfeil hos kalleren.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionRange {
    pub start: usize,
    pub end: usize,
}

impl SelectionRange {
    pub fn new(start: usize, end: usize) -> Self {
        assert!(start <= end, "SelectionRange: start {} > end {}", start, end);
        Self { start, end }
    }

    /// Antall samples i utvalget (begge ender med).
    pub fn len(&self) -> usize {
        self.end - self.start + 1
    }

    /// Degenerert utvalg = "ikke noe utvalg": like ender, eller kortere
    /// distanse enn terskelen når distansestrøm finnes.
    pub fn is_degenerate(&self, distance_m: Option<&[f64]>, min_distance_m: f64) -> bool {
        if self.start == self.end {
            return true;
        }
        if let Some(d) = distance_m {
            if self.end < d.len() && (d[self.end] - d[self.start]) < min_distance_m {
                return true;
            }
        }
        false
    }
}
