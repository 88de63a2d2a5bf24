//! The uniform random scalar source every generator draws from.
//!
//! [`RandomSource`] is the only stateful dependency in the crate. It is passed
//! by `&mut` into every operation and advances once per scalar requested.
//! Thread safety, if a source is shared, is the source's own concern.

/// 2^53, the number of distinct mantissa steps used for unit draws.
const MANTISSA_STEPS: f64 = (1u64 << 53) as f64;

/// Maps the upper 53 bits of `bits` onto `[0, 1)`.
pub(crate) fn bits_to_half_open(bits: u64) -> f64 {
    (bits >> 11) as f64 / MANTISSA_STEPS
}

/// Maps the upper 53 bits of `bits` onto `[0, 1]`, both ends reachable.
pub(crate) fn bits_to_closed(bits: u64) -> f64 {
    (bits >> 11) as f64 / (MANTISSA_STEPS - 1.0)
}

/// Maps the upper 53 bits of `bits` onto `(0, 1)`.
pub(crate) fn bits_to_open(bits: u64) -> f64 {
    ((bits >> 11) as f64 + 0.5) / MANTISSA_STEPS
}

/// A source of uniformly distributed scalars.
///
/// Implementors supply the closed and half-open unit draws; the remaining
/// interval shapes and the ranged variants are derived from them.
pub trait RandomSource {
    /// Uniform scalar in `[0, 1]`.
    fn unit_closed(&mut self) -> f64;

    /// Uniform scalar in `[0, 1)`.
    fn unit_half_open(&mut self) -> f64;

    /// Uniform scalar in `(0, 1]`.
    fn unit_half_closed(&mut self) -> f64 {
        1.0 - self.unit_half_open()
    }

    /// Uniform scalar in `(0, 1)`.
    fn unit_open(&mut self) -> f64 {
        let x = self.unit_half_open();
        if x > 0.0 {
            x
        } else {
            0.5
        }
    }

    /// Uniform scalar in `[lo, hi]`. Expects `lo <= hi`.
    fn range_closed(&mut self, lo: f64, hi: f64) -> f64 {
        let t = self.unit_closed();
        (lo + t * (hi - lo)).max(lo).min(hi)
    }

    /// Uniform scalar in `[lo, hi)`.
    fn range_half_open(&mut self, lo: f64, hi: f64) -> f64 {
        lo + self.unit_half_open() * (hi - lo)
    }

    /// Uniform scalar in `(lo, hi]`.
    fn range_half_closed(&mut self, lo: f64, hi: f64) -> f64 {
        lo + self.unit_half_closed() * (hi - lo)
    }

    /// Uniform scalar in `(lo, hi)`.
    fn range_open(&mut self, lo: f64, hi: f64) -> f64 {
        lo + self.unit_open() * (hi - lo)
    }
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn unit_closed(&mut self) -> f64 {
        (**self).unit_closed()
    }

    fn unit_half_open(&mut self) -> f64 {
        (**self).unit_half_open()
    }

    fn unit_half_closed(&mut self) -> f64 {
        (**self).unit_half_closed()
    }

    fn unit_open(&mut self) -> f64 {
        (**self).unit_open()
    }
}

/// Adapts any [`rand::RngCore`] into a [`RandomSource`].
#[cfg(feature = "rand")]
#[derive(Debug, Clone)]
pub struct RandAdapter<R>(pub R);

#[cfg(feature = "rand")]
impl<R: rand::RngCore> RandomSource for RandAdapter<R> {
    fn unit_closed(&mut self) -> f64 {
        bits_to_closed(self.0.next_u64())
    }

    fn unit_half_open(&mut self) -> f64 {
        bits_to_half_open(self.0.next_u64())
    }

    fn unit_open(&mut self) -> f64 {
        bits_to_open(self.0.next_u64())
    }
}

/// Test doubles shared by the unit tests of several modules.
#[cfg(test)]
pub(crate) mod testing {
    use super::RandomSource;

    /// Always returns the midpoint of whatever interval is requested.
    pub struct Midpoint;

    impl RandomSource for Midpoint {
        fn unit_closed(&mut self) -> f64 {
            0.5
        }

        fn unit_half_open(&mut self) -> f64 {
            0.5
        }
    }

    /// Replays a fixed list of unit draws, cycling when exhausted.
    pub struct Scripted {
        values: Vec<f64>,
        index: usize,
    }

    impl Scripted {
        pub fn new(values: &[f64]) -> Self {
            Self {
                values: values.to_vec(),
                index: 0,
            }
        }

        fn next(&mut self) -> f64 {
            let v = self.values[self.index % self.values.len()];
            self.index += 1;
            v
        }
    }

    impl RandomSource for Scripted {
        fn unit_closed(&mut self) -> f64 {
            self.next()
        }

        fn unit_half_open(&mut self) -> f64 {
            self.next()
        }
    }
}
