//! WattSpor core – ren beregningskjerne for treningsmetrikk.
//!
//! Inn: rå sample-strømmer (watt, puls, distanse, høyde, ...) pluss
//! lagrede innstillinger (FTP, vekt). Ut: avledede metrikker som verdier
//! uten oppførsel – soner, kraftkurve, CTL/ATL/TSB, områdestatistikk.
//! Ingen I/O, ingen delt tilstand; alt er rene, idempotente funksjoner.

pub mod curve;
pub mod metrics;
pub mod pmc;
pub mod range_stats;
pub mod report;
pub mod resample;
pub mod series;
pub mod smoothing;
pub mod strength;
pub mod types;
pub mod zones;

pub use report::{session_report, SessionReport};
pub use types::{AthleteSettings, SelectionRange, StreamSet};
