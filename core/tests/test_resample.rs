use wattspor_core::resample::{by_budget, by_interval};
use wattspor_core::types::SelectionRange;

#[test]
fn interval_interpolerer_mellom_raa_samples() {
    let d = [0.0, 100.0, 200.0];
    let v = [0.0, 10.0, 20.0];
    let out = by_interval(&d, &v, 50.0);

    // 0, 50, 100, 150, 200 m → lineært 0, 5, 10, 15, 20
    assert_eq!(out.len(), 5);
    let values: Vec<f64> = out.iter().map(|p| p.value).collect();
    for (got, want) in values.iter().zip([0.0, 5.0, 10.0, 15.0, 20.0]) {
        assert!((got - want).abs() < 1e-9, "got {:?}", values);
    }
    assert!((out[1].distance_km - 0.05).abs() < 1e-12);
}

#[test]
fn interval_bevarer_endepunktene_uansett_steg() {
    let d = [0.0, 100.0, 200.0, 300.0];
    let v = [1.0, 2.0, 3.0, 4.0];
    // steget er mye lengre enn økten → likevel første og siste rå-sample
    let out = by_interval(&d, &v, 5000.0);
    assert_eq!(out.len(), 2);
    assert_eq!(out[0].index, 0);
    assert_eq!(out[0].value, 1.0);
    assert_eq!(out[1].index, 3);
    assert_eq!(out[1].value, 4.0);
}

#[test]
fn interval_tomt_og_ugyldig_steg_gir_tomt() {
    assert!(by_interval(&[], &[], 100.0).is_empty());
    assert!(by_interval(&[0.0, 1.0], &[0.0, 1.0], 0.0).is_empty());
}

#[test]
fn interval_kutter_til_minste_lengde() {
    // distansestrømmen er lengre enn verdistrømmen → kutt til min(len)
    let d = [0.0, 100.0, 200.0, 300.0];
    let v = [5.0, 7.0];
    let out = by_interval(&d, &v, 50.0);
    assert_eq!(out.last().unwrap().index, 1);
}

#[test]
fn budget_holder_seg_innenfor_taket() {
    let d: Vec<f64> = (0..11).map(|i| i as f64 * 10.0).collect();
    let v: Vec<f64> = (0..11).map(|i| i as f64).collect();
    let out = by_budget(&d, &v, None, 3);

    // step = 11/3 = 3 → 0, 3, 6, 9 pluss tvunget siste sample
    let idx: Vec<usize> = out.iter().map(|p| p.index).collect();
    assert_eq!(idx, vec![0, 3, 6, 9, 10]);
}

#[test]
fn budget_tvinger_ikke_inn_duplikat_av_siste() {
    let d: Vec<f64> = (0..20).map(|i| i as f64).collect();
    let v = d.clone();
    // område 2..=8, step = 7/3 = 2 → 2, 4, 6, 8 – siste treffes av steget
    let out = by_budget(&d, &v, Some(SelectionRange::new(2, 8)), 3);
    let idx: Vec<usize> = out.iter().map(|p| p.index).collect();
    assert_eq!(idx, vec![2, 4, 6, 8]);
}

#[test]
fn budget_tomt_inn_gir_tomt_ut() {
    assert!(by_budget(&[], &[], None, 100).is_empty());
    assert!(by_budget(&[1.0], &[1.0], None, 0).is_empty());
}
