use rand::Rng;

/// Source of randomness consumed by the store and the phrase generator.
///
/// Generation only ever needs two draws: a uniform index and a uniform
/// float used for coin flips. Any `rand` generator implements this trait,
/// so callers pass `rand::rng()` for real output or a seeded `StdRng` for
/// reproducible output.
pub trait RandomSource {
	/// Uniform integer in `[0, upper)`. `upper` must be strictly positive.
	fn below(&mut self, upper: usize) -> usize;

	/// Uniform float in `[0.0, 1.0)`.
	fn unit(&mut self) -> f64;

	/// Succeeds with probability `p`.
	fn chance(&mut self, p: f64) -> bool {
		self.unit() < p
	}
}

impl<R: rand::RngCore> RandomSource for R {
	fn below(&mut self, upper: usize) -> usize {
		self.random_range(0..upper)
	}

	fn unit(&mut self) -> f64 {
		self.random()
	}
}
