//! MySQL-compatible pseudo-random generator backing `RAND([seed])`.

const MAX_VALUE: u64 = 0x3FFF_FFFF;

/// Two-seed linear congruential generator with the same stream as MySQL's
/// `my_rnd`, so `RAND(n)` reproduces server output for the same seed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MysqlRng {
    seed1: u64,
    seed2: u64,
}

impl MysqlRng {
    /// Seed the generator. Only the low 32 bits of `seed` are significant.
    pub fn new(seed: i64) -> Self {
        let seed = seed as u32 as u64;
        let seed1 = (seed.wrapping_mul(0x10001).wrapping_add(55_555_555) as u32) as u64;
        let seed2 = (seed.wrapping_mul(0x1000_0001) as u32) as u64;
        tracing::trace!("RAND generator seeded with {}", seed);
        Self {
            seed1: seed1 % MAX_VALUE,
            seed2: seed2 % MAX_VALUE,
        }
    }

    /// Next value in `[0, 1)`.
    pub fn next_f64(&mut self) -> f64 {
        self.seed1 = (self.seed1 * 3 + self.seed2) % MAX_VALUE;
        self.seed2 = (self.seed1 + self.seed2 + 33) % MAX_VALUE;
        self.seed1 as f64 / MAX_VALUE as f64
    }
}
