use serde::Serialize;

use crate::series::lower_bound;
use crate::types::SelectionRange;

/// Ett punkt i en nedsamplet serie. `index` peker tilbake på rå-samplen
/// (for intervall-sampling: venstre brakett) slik at UI kan slå opp igjen.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ResampledPoint {
    pub distance_km: f64,
    pub value: f64,
    pub index: usize,
}

fn point(distance_m: f64, value: f64, index: usize) -> ResampledPoint {
    ResampledPoint {
        distance_km: distance_m / 1000.0,
        value,
        index,
    }
}

/// Intervall-sampling: gå distanseaksen i faste steg (f.eks. 100 m) og
/// interpoler verdien lineært mellom de to rå-samplene som omslutter
/// steget. Første og siste rå-sample sendes alltid ut uendret, uansett
/// steglengde – GPS-opptakere sampler ujevnt og profilen skal likevel
/// starte og slutte der økten gjør.
pub fn by_interval(distance_m: &[f64], values: &[f64], step_m: f64) -> Vec<ResampledPoint> {
    let n = distance_m.len().min(values.len());
    if n == 0 || step_m <= 0.0 {
        return Vec::new();
    }
    let d = &distance_m[..n];
    let v = &values[..n];

    let mut out = vec![point(d[0], v[0], 0)];
    if n == 1 {
        return out;
    }

    let last = n - 1;
    let mut target = d[0] + step_m;
    while target < d[last] {
        let i = lower_bound(d, target).max(1);
        let (x0, x1) = (d[i - 1], d[i]);
        // vakt mot duplikate distanser (stillestående samples)
        let frac = if x1 > x0 { (target - x0) / (x1 - x0) } else { 0.0 };
        let val = v[i - 1] + frac * (v[i] - v[i - 1]);
        out.push(point(target, val, i - 1));
        target += step_m;
    }

    out.push(point(d[last], v[last], last));
    out
}

/// Budsjett-sampling: maks `max_points` punkter ut, ingen interpolasjon.
/// `step = max(1, lengde / max_points)` og hver `step`-te rå-sample tas
/// med; siste sample i området tvinges inn hvis steget hoppet forbi den.
/// Prioriterer distansetroskap over glatting når full oppløsning ville
/// druknet et diagram.
pub fn by_budget(
    distance_m: &[f64],
    values: &[f64],
    range: Option<SelectionRange>,
    max_points: usize,
) -> Vec<ResampledPoint> {
    let n = distance_m.len().min(values.len());
    if n == 0 || max_points == 0 {
        return Vec::new();
    }

    let (start, end) = match range {
        Some(r) => {
            assert!(r.start <= r.end, "by_budget: start {} > end {}", r.start, r.end);
            (r.start, r.end.min(n - 1))
        }
        None => (0, n - 1),
    };
    if start > end {
        return Vec::new();
    }

    let len = end - start + 1;
    let step = (len / max_points).max(1);

    let mut out = Vec::with_capacity(len.min(max_points) + 1);
    let mut i = start;
    while i <= end {
        out.push(point(distance_m[i], values[i], i));
        i += step;
    }
    if out.last().map(|p| p.index) != Some(end) {
        out.push(point(distance_m[end], values[end], end));
    }
    out
}
