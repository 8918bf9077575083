/// Binærsøk over ikke-synkende serier (distanse/tid). Grunnmur for alle
/// område-operasjoner – må være eksakt i grensene, ellers forplanter
/// off-by-one seg til alt av områdestatistikk.

/// Minste indeks `i` slik at `xs[i] >= v` (lower bound).
/// Finnes ingen slik indeks returneres siste indeks; tom serie gir 0.
pub fn lower_bound(xs: &[f64], v: f64) -> usize {
    if xs.is_empty() {
        return 0;
    }
    let mut lo = 0usize;
    let mut hi = xs.len();
    while lo < hi {
        let mid = lo + (hi - lo) / 2;
        if xs[mid] < v {
            lo = mid + 1;
        } else {
            hi = mid;
        }
    }
    if lo == xs.len() {
        xs.len() - 1
    } else {
        lo
    }
}

/// Indeksen med verdien numerisk nærmest `v`: lower bound-kandidaten
/// sammenlignes mot forgjengeren. Ved helt lik avstand vinner kandidaten.
pub fn nearest(xs: &[f64], v: f64) -> usize {
    if xs.is_empty() {
        return 0;
    }
    let i = lower_bound(xs, v);
    if xs[i] < v {
        // ingen xs[i] >= v – siste element er nærmest
        return i;
    }
    if i == 0 {
        return 0;
    }
    let prev = i - 1;
    if (v - xs[prev]) < (xs[i] - v) {
        prev
    } else {
        i
    }
}
