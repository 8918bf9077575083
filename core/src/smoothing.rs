/// Robust 3-punkts medianfilter for høydeserier.
/// Endepunkter bruker seg selv som naboverdi (repeteres) for å holde lengden.
pub fn median3(values: &[f64]) -> Vec<f64> {
    if values.is_empty() {
        return Vec::new();
    }
    let n = values.len();
    let mut out = Vec::with_capacity(n);

    for i in 0..n {
        let a0 = if i > 0 { values[i - 1] } else { values[i] };
        let a1 = values[i];
        let a2 = if i + 1 < n { values[i + 1] } else { values[i] };

        let mut win = [a0, a1, a2];
        win.sort_by(|x, y| x.partial_cmp(y).unwrap());
        out.push(win[1]); // median
    }

    out
}
