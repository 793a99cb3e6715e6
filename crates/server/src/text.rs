use std::sync::{Arc, Mutex};

use rand::{rngs::StdRng, Rng, SeedableRng};

pub const GENERATED_LEN: usize = 8;

/// Character pool for API-created message bodies.
pub const ALPHABET: [char; 15] = [
    'a', 'b', 'c', 'd', 'e', 'f', 'g', '1', '2', '3', '4', '5', 'X', 'Y', 'Z',
];

/// Shared random text source. Seedable so tests can pin the output.
#[derive(Clone)]
pub struct TextGenerator {
    rng: Arc<Mutex<StdRng>>,
}

impl TextGenerator {
    pub fn from_entropy() -> Self {
        Self {
            rng: Arc::new(Mutex::new(StdRng::from_entropy())),
        }
    }

    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: Arc::new(Mutex::new(StdRng::seed_from_u64(seed))),
        }
    }

    /// Exactly `GENERATED_LEN` characters drawn uniformly from `ALPHABET`.
    pub fn generate(&self) -> String {
        let mut rng = self.rng.lock().expect("rng lock");
        (0..GENERATED_LEN)
            .map(|_| ALPHABET[rng.gen_range(0..ALPHABET.len())])
            .collect()
    }
}
