use std::time::{Duration, Instant};

use vinculum_core::{decode_fraction, encode_fraction, Error};

use crate::rand::Rand;

#[derive(Debug, Default, serde::Serialize)]
pub struct Summary {
    pub count: usize,
    pub mismatches: usize,
    pub bytes: usize,
    #[serde(serialize_with = "as_secs")]
    pub elapsed: Duration,
}

impl Summary {
    pub fn per_second(&self) -> f64 {
        self.count as f64 / self.elapsed.as_secs_f64().max(f64::EPSILON)
    }
}

impl std::fmt::Display for Summary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{count} round trips ({bytes} bytes) in {elapsed:?}, {rate:.0}/s, {mismatches} mismatches",
            count = self.count,
            bytes = self.bytes,
            elapsed = self.elapsed,
            rate = self.per_second(),
            mismatches = self.mismatches,
        )
    }
}

fn as_secs<S: serde::Serializer>(elapsed: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_f64(elapsed.as_secs_f64())
}

/// Encodes and decodes `count` random fractions, checking that each survives.
pub fn run(count: usize, rng: &Rand) -> Result<Summary, Error> {
    let mut summary = Summary {
        count,
        ..Summary::default()
    };

    let start = Instant::now();
    for _ in 0..count {
        let fraction = rng.fraction();
        let numeral = encode_fraction(fraction)?;
        summary.bytes += numeral.len();

        let decoded = decode_fraction(&numeral)?;
        if decoded != fraction {
            log::error!("{fraction} encoded as {numeral} but decoded as {decoded}");
            summary.mismatches += 1;
        }
    }
    summary.elapsed = start.elapsed();

    log::info!("{summary}");
    Ok(summary)
}

#[test]
fn round_trips_without_mismatches() {
    let summary = run(1_000, &Rand::seed(42)).unwrap();
    assert_eq!(summary.count, 1_000);
    assert_eq!(summary.mismatches, 0);
    assert!(summary.bytes >= 1_000);
}
