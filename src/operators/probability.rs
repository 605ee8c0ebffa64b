//! Rate-gated decisions
//!
//! The search loop uses these to decide whether crossover or mutation
//! fires. Each call consumes exactly one uniform draw from the supplied
//! random source.

use rand::distributions::OpenClosed01;
use rand::Rng;

/// Draw a uniform sample in `(0, 1]`.
///
/// Excluding zero makes both boundary rates exact: a rate of `0.0` never
/// selects the alternate branch and a rate of `1.0` always does.
#[inline]
pub fn uniform_draw<R: Rng + ?Sized>(rng: &mut R) -> f64 {
    rng.sample(OpenClosed01)
}

/// Run `alternate` with probability `rate`, otherwise `default`.
///
/// One sample is drawn; a sample strictly greater than `rate` selects
/// `default`, anything else selects `alternate`. Only the chosen closure
/// is evaluated. `rate` is expected to be validated upstream (see
/// [`GeneticSettings`](crate::population::settings::GeneticSettings)).
pub fn prob_event<R, T, D, A>(rng: &mut R, rate: f64, default: D, alternate: A) -> T
where
    R: Rng + ?Sized,
    D: FnOnce() -> T,
    A: FnOnce() -> T,
{
    debug_assert!((0.0..=1.0).contains(&rate), "rate {rate} outside [0, 1]");
    let sample = uniform_draw(rng);
    if sample > rate {
        default()
    } else {
        alternate()
    }
}

/// Pick `alternate` with probability `rate`, otherwise `default`.
///
/// Same decision rule as [`prob_event`] applied to ready values.
pub fn prob_value<R, T>(rng: &mut R, rate: f64, default: T, alternate: T) -> T
where
    R: Rng + ?Sized,
{
    prob_event(rng, rate, move || default, move || alternate)
}
