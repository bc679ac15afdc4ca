//! Identifiers and randomness
//!
//! Ids look like `note-<unix millis>-<9 base-36 chars>`, the format older
//! saved boards already contain.

use chrono::{DateTime, Utc};

const BASE36: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";
const SUFFIX_LEN: usize = 9;

/// Uniform samples in `[0, 1)`
pub trait RandomSource {
    fn next_f64(&mut self) -> f64;

    /// Uniform index in `0..len`; `len` must be non-zero
    fn next_index(&mut self, len: usize) -> usize {
        ((self.next_f64() * len as f64) as usize).min(len - 1)
    }
}

/// `Math.random()` from the browser
#[derive(Clone, Copy, Debug, Default)]
pub struct JsRandom;

impl RandomSource for JsRandom {
    fn next_f64(&mut self) -> f64 {
        js_sys::Math::random()
    }
}

pub fn generate_id(prefix: &str, now: DateTime<Utc>, rng: &mut impl RandomSource) -> String {
    let suffix: String = (0..SUFFIX_LEN)
        .map(|_| BASE36[rng.next_index(BASE36.len())] as char)
        .collect();
    format!("{}-{}-{}", prefix, now.timestamp_millis(), suffix)
}

pub fn note_id(now: DateTime<Utc>, rng: &mut impl RandomSource) -> String {
    generate_id("note", now, rng)
}

pub fn todo_id(now: DateTime<Utc>, rng: &mut impl RandomSource) -> String {
    generate_id("todo", now, rng)
}

#[cfg(test)]
pub mod testing {
    use super::RandomSource;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    /// Deterministic source for tests
    pub struct SeededRandom(StdRng);

    impl SeededRandom {
        pub fn new(seed: u64) -> Self {
            Self(StdRng::seed_from_u64(seed))
        }
    }

    impl RandomSource for SeededRandom {
        fn next_f64(&mut self) -> f64 {
            self.0.random::<f64>()
        }
    }

    /// Replays a fixed sequence, cycling at the end
    pub struct ScriptedRandom {
        values: Vec<f64>,
        next: usize,
    }

    impl ScriptedRandom {
        pub fn new(values: Vec<f64>) -> Self {
            Self { values, next: 0 }
        }
    }

    impl RandomSource for ScriptedRandom {
        fn next_f64(&mut self) -> f64 {
            let v = self.values[self.next % self.values.len()];
            self.next += 1;
            v
        }
    }
}
