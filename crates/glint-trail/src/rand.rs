//! Injectable random source, with a lightweight xorshift32 default

/// Uniform random numbers for spawn decisions and particle attributes.
///
/// Swapping the source makes spawning reproducible.
pub trait RandomSource {
    /// Returns a value in [0, 1)
    fn next_f64(&mut self) -> f64;

    /// Returns a value in [min, max)
    fn range(&mut self, min: f64, max: f64) -> f64 {
        min + self.next_f64() * (max - min)
    }
}

/// Seedable xorshift32 generator
#[derive(Debug, Clone)]
pub struct TrailRng {
    state: u32,
}

impl TrailRng {
    pub fn new(seed: u32) -> Self {
        Self {
            state: if seed == 0 { 1 } else { seed },
        }
    }

    fn next_u32(&mut self) -> u32 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 17;
        x ^= x << 5;
        self.state = x;
        x
    }
}

impl RandomSource for TrailRng {
    fn next_f64(&mut self) -> f64 {
        // u32::MAX / 2^32 < 1, so the result never reaches 1.0
        f64::from(self.next_u32()) / 4_294_967_296.0
    }
}

/// Replays a fixed list of values, wrapping around at the end
#[cfg(test)]
pub(crate) struct ScriptedRandom {
    values: Vec<f64>,
    index: usize,
}

#[cfg(test)]
impl ScriptedRandom {
    pub(crate) fn new(values: &[f64]) -> Self {
        Self {
            values: values.to_vec(),
            index: 0,
        }
    }

    /// Always returns `value`
    pub(crate) fn constant(value: f64) -> Self {
        Self::new(&[value])
    }

    pub(crate) fn draws(&self) -> usize {
        self.index
    }
}

#[cfg(test)]
impl RandomSource for ScriptedRandom {
    fn next_f64(&mut self) -> f64 {
        let v = self.values[self.index % self.values.len()];
        self.index += 1;
        v
    }
}
