use wattspor_core::range_stats::{best_split_seconds, range_stats};
use wattspor_core::types::{SelectionRange, StreamSet};

fn streams() -> StreamSet {
    StreamSet {
        time_s: Some((0..11).map(|i| i as f64).collect()),
        distance_m: Some((0..11).map(|i| i as f64 * 10.0).collect()),
        altitude_m: Some((0..11).map(|i| 100.0 + i as f64 * 2.0).collect()),
        heartrate_bpm: Some(vec![0.0, 0.0, 140.0, 150.0, 0.0, 160.0, 0.0, 0.0, 0.0, 0.0, 0.0]),
        watts: Some(vec![0.0, 100.0, 200.0, 0.0, 0.0, 300.0, 0.0, 0.0, 0.0, 0.0, 0.0]),
        cadence_rpm: None,
        latlng: None,
    }
}

#[test]
fn full_oekt_gir_distanse_varighet_og_snitt() {
    let s = streams();
    let stats = range_stats(&s, SelectionRange::new(0, 10), 0.0);

    assert!((stats.distance_m - 100.0).abs() < 1e-9);
    assert!((stats.duration_s - 10.0).abs() < 1e-9);
    // 100 m på 10 s = 36 km/t
    assert!((stats.avg_speed_kmh.unwrap() - 36.0).abs() < 1e-9);
    // bare positive samples teller: (100+200+300)/3
    assert!((stats.avg_watts.unwrap() - 200.0).abs() < 1e-9);
    assert!((stats.avg_hr.unwrap() - 150.0).abs() < 1e-9);
    assert!(stats.avg_cadence.is_none()); // strømmen finnes ikke

    // monoton stigning 2 m per sample → 20 m, medianfilteret endrer ingenting
    assert!((stats.elevation_gain_m - 20.0).abs() < 1e-9);
    // 20 m på 10 s → 7200 m/t
    assert!((stats.vam_m_per_h.unwrap() - 7200.0).abs() < 1e-6);
}

#[test]
fn degenerert_utvalg_er_ikke_et_utvalg() {
    let s = streams();

    // like ender → alt nullet, snitt "utilgjengelig" (None, ikke 0)
    let stats = range_stats(&s, SelectionRange::new(4, 4), 0.0);
    assert_eq!(stats.distance_m, 0.0);
    assert_eq!(stats.duration_s, 0.0);
    assert!(stats.avg_speed_kmh.is_none());
    assert!(stats.avg_watts.is_none());
    assert!(stats.avg_hr.is_none());
    assert!(stats.vam_m_per_h.is_none());

    // under distanseterskelen → samme sak
    let stats = range_stats(&s, SelectionRange::new(2, 3), 50.0);
    assert!(stats.avg_watts.is_none());
    assert_eq!(stats.distance_m, 0.0);
}

#[test]
fn utvalg_uten_signal_gir_none_ikke_null() {
    let s = streams();
    // watt-samples 6..=10 er alle 0
    let stats = range_stats(&s, SelectionRange::new(6, 10), 0.0);
    assert!(stats.avg_watts.is_none());
    assert!(stats.avg_hr.is_none());
    assert!((stats.distance_m - 40.0).abs() < 1e-9);
}

#[test]
fn nedoverbakke_trekkes_ikke_fra() {
    let mut s = streams();
    s.altitude_m = Some(vec![
        200.0, 198.0, 196.0, 194.0, 192.0, 190.0, 188.0, 186.0, 184.0, 182.0, 180.0,
    ]);
    let stats = range_stats(&s, SelectionRange::new(0, 10), 0.0);
    assert_eq!(stats.elevation_gain_m, 0.0);
    assert!(stats.vam_m_per_h.is_none());
}

#[test]
fn utvalg_klippes_mot_korteste_stroem() {
    let mut s = streams();
    s.watts = Some(vec![0.0, 100.0, 200.0]); // kortere enn resten
    let stats = range_stats(&s, SelectionRange::new(0, 10), 0.0);
    // felles lengde er 3 → utvalget klippes til [0, 2]
    assert!((stats.distance_m - 20.0).abs() < 1e-9);
    assert!((stats.avg_watts.unwrap() - 150.0).abs() < 1e-9);
}

#[test]
#[should_panic]
fn omvendt_utvalg_er_kontraktsbrudd() {
    let s = streams();
    let _ = range_stats(&s, SelectionRange { start: 5, end: 2 }, 0.0);
}

#[test]
fn beste_split_finner_raskeste_strekning() {
    let d = [0.0, 100.0, 200.0, 300.0, 400.0];
    let t = [0.0, 10.0, 30.0, 60.0, 70.0];
    // 100 m-splitter: 10, 20, 30, 10 s → beste er 10
    let best = best_split_seconds(&d, &t, 100.0).unwrap();
    assert!((best - 10.0).abs() < 1e-9);

    // lengre enn hele økten → None
    assert!(best_split_seconds(&d, &t, 500.0).is_none());
    assert!(best_split_seconds(&[], &[], 100.0).is_none());
}
