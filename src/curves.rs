//! Built-in curve catalog.
//!
//! Every entry has a fixed domain and formula, so generation cannot fail.
//! The two random entries draw from whatever RNG the caller provides.

use crate::plot::{PlotMode, PlotRequest};
use clap::ValueEnum;
use rand::Rng;
use std::f64::consts::PI;

/// Samples used by every sampled domain.
pub const SAMPLE_COUNT: usize = 100;

/// Named curve generators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
pub enum CurveKind {
    /// y = x over 1..=5.
    Linear,
    /// y = sin(x) over [-2π, 2π].
    Sine,
    /// y = cos(x) over [-2π, 2π].
    Cosine,
    /// y = x² over [-10, 10].
    Quadratic,
    /// y = eˣ over [0, 10].
    Exponential,
    /// y = ln(x) over [0.1, 10].
    Logarithmic,
    /// Uniform random points in the unit square.
    ScatterRandom,
    /// Uniform random noise over x in [0, 10].
    RandomNoise,
}

impl CurveKind {
    /// All curves in menu order.
    pub const ALL: [CurveKind; 8] = [
        CurveKind::Linear,
        CurveKind::Sine,
        CurveKind::Cosine,
        CurveKind::Quadratic,
        CurveKind::Exponential,
        CurveKind::Logarithmic,
        CurveKind::ScatterRandom,
        CurveKind::RandomNoise,
    ];

    /// Stable identifier, as accepted on the command line.
    pub fn id(self) -> &'static str {
        match self {
            CurveKind::Linear => "linear",
            CurveKind::Sine => "sine",
            CurveKind::Cosine => "cosine",
            CurveKind::Quadratic => "quadratic",
            CurveKind::Exponential => "exponential",
            CurveKind::Logarithmic => "logarithmic",
            CurveKind::ScatterRandom => "scatter-random",
            CurveKind::RandomNoise => "random-noise",
        }
    }

    /// Figure title, also used as the menu label.
    pub fn title(self) -> &'static str {
        match self {
            CurveKind::Linear => "Linear graph",
            CurveKind::Sine => "Sinus graph",
            CurveKind::Cosine => "Cosine graph",
            CurveKind::Quadratic => "Squared graph",
            CurveKind::Exponential => "Exp graph",
            CurveKind::Logarithmic => "Log graph",
            CurveKind::ScatterRandom => "Dotty graph",
            CurveKind::RandomNoise => "Random graph",
        }
    }

    /// Draw mode.
    pub fn mode(self) -> PlotMode {
        match self {
            CurveKind::ScatterRandom => PlotMode::Scatter,
            _ => PlotMode::Line,
        }
    }

    /// Whether two generations can differ.
    pub fn is_stochastic(self) -> bool {
        matches!(self, CurveKind::ScatterRandom | CurveKind::RandomNoise)
    }

    /// Look up a curve by its identifier.
    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.id() == id)
    }
}

/// Generate a curve using the thread-local RNG.
pub fn generate(kind: CurveKind) -> PlotRequest {
    generate_with(kind, &mut rand::rng())
}

/// Generate a curve, drawing random values from `rng`.
pub fn generate_with<R: Rng + ?Sized>(kind: CurveKind, rng: &mut R) -> PlotRequest {
    let (x, y) = match kind {
        CurveKind::Linear => {
            let x: Vec<f64> = (1..=5).map(f64::from).collect();
            (x.clone(), x)
        },
        CurveKind::Sine => map_domain(linspace(-2.0 * PI, 2.0 * PI, SAMPLE_COUNT), f64::sin),
        CurveKind::Cosine => map_domain(linspace(-2.0 * PI, 2.0 * PI, SAMPLE_COUNT), f64::cos),
        CurveKind::Quadratic => map_domain(linspace(-10.0, 10.0, SAMPLE_COUNT), |x| x * x),
        CurveKind::Exponential => map_domain(linspace(0.0, 10.0, SAMPLE_COUNT), f64::exp),
        CurveKind::Logarithmic => map_domain(linspace(0.1, 10.0, SAMPLE_COUNT), f64::ln),
        CurveKind::ScatterRandom => (uniform(rng, SAMPLE_COUNT), uniform(rng, SAMPLE_COUNT)),
        CurveKind::RandomNoise => (linspace(0.0, 10.0, SAMPLE_COUNT), uniform(rng, SAMPLE_COUNT)),
    };

    PlotRequest::from_series(x, y, kind.title(), kind.mode())
}

/// Evenly spaced samples over `[start, end]`, endpoints included.
///
/// The last sample is exactly `end`, so accumulated step error never pushes
/// a domain past its documented bound.
pub fn linspace(start: f64, end: f64, count: usize) -> Vec<f64> {
    match count {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (end - start) / (count - 1) as f64;
            (0..count)
                .map(|i| {
                    if i == count - 1 {
                        end
                    } else {
                        start + step * i as f64
                    }
                })
                .collect()
        },
    }
}

fn map_domain(x: Vec<f64>, f: impl Fn(f64) -> f64) -> (Vec<f64>, Vec<f64>) {
    let y = x.iter().map(|&v| f(v)).collect();
    (x, y)
}

fn uniform<R: Rng + ?Sized>(rng: &mut R, count: usize) -> Vec<f64> {
    (0..count).map(|_| rng.random::<f64>()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    const TOLERANCE: f64 = 1e-12;

    fn assert_formula(kind: CurveKind, f: impl Fn(f64) -> f64) {
        let req = generate(kind);
        for (x, y) in req.x().iter().zip(req.y()) {
            assert!(
                (y - f(*x)).abs() <= TOLERANCE * f(*x).abs().max(1.0),
                "{}: y({}) = {}, expected {}",
                kind.id(),
                x,
                y,
                f(*x)
            );
        }
    }

    #[test]
    fn every_curve_has_equal_nonzero_lengths() {
        for kind in CurveKind::ALL {
            let req = generate(kind);
            assert!(!req.x().is_empty(), "{} is empty", kind.id());
            assert_eq!(req.x().len(), req.y().len(), "{} lengths differ", kind.id());
            assert_eq!(req.title(), kind.title());
            assert_eq!(req.mode(), kind.mode());
        }
    }

    #[test]
    fn linear_is_identity_over_one_to_five() {
        let req = generate(CurveKind::Linear);
        assert_eq!(req.x(), &[1.0, 2.0, 3.0, 4.0, 5.0]);
        assert_eq!(req.x(), req.y());
    }

    #[test]
    fn closed_form_curves_match_their_formulas() {
        assert_formula(CurveKind::Sine, f64::sin);
        assert_formula(CurveKind::Cosine, f64::cos);
        assert_formula(CurveKind::Quadratic, |x| x * x);
        assert_formula(CurveKind::Exponential, f64::exp);
        assert_formula(CurveKind::Logarithmic, f64::ln);
    }

    #[test]
    fn sampled_domains_hit_their_endpoints() {
        let cases = [
            (CurveKind::Sine, -2.0 * PI, 2.0 * PI),
            (CurveKind::Cosine, -2.0 * PI, 2.0 * PI),
            (CurveKind::Quadratic, -10.0, 10.0),
            (CurveKind::Exponential, 0.0, 10.0),
            (CurveKind::Logarithmic, 0.1, 10.0),
            (CurveKind::RandomNoise, 0.0, 10.0),
        ];
        for (kind, start, end) in cases {
            let req = generate(kind);
            assert_eq!(req.len(), SAMPLE_COUNT);
            assert_eq!(req.x()[0], start);
            assert_eq!(req.x()[SAMPLE_COUNT - 1], end);
            assert!(req.x().windows(2).all(|w| w[0] < w[1]));
        }
    }

    #[test]
    fn logarithm_stays_finite() {
        let req = generate(CurveKind::Logarithmic);
        assert!(req.y().iter().all(|y| y.is_finite()));
    }

    #[test]
    fn deterministic_curves_are_idempotent() {
        for kind in CurveKind::ALL.into_iter().filter(|k| !k.is_stochastic()) {
            assert_eq!(generate(kind), generate(kind));
        }
    }

    #[test]
    fn random_curves_stay_in_the_unit_interval() {
        for _ in 0..10 {
            let scatter = generate(CurveKind::ScatterRandom);
            assert_eq!(scatter.len(), SAMPLE_COUNT);
            assert_eq!(scatter.mode(), PlotMode::Scatter);
            assert!(scatter
                .x()
                .iter()
                .chain(scatter.y())
                .all(|v| (0.0..1.0).contains(v)));

            let noise = generate(CurveKind::RandomNoise);
            assert_eq!(noise.len(), SAMPLE_COUNT);
            assert!(noise.y().iter().all(|v| (0.0..1.0).contains(v)));
        }
    }

    #[test]
    fn seeded_rng_reproduces_random_curves() {
        let a = generate_with(CurveKind::ScatterRandom, &mut StdRng::seed_from_u64(7));
        let b = generate_with(CurveKind::ScatterRandom, &mut StdRng::seed_from_u64(7));
        assert_eq!(a, b);
    }

    #[test]
    fn linspace_edges() {
        assert!(linspace(0.0, 1.0, 0).is_empty());
        assert_eq!(linspace(3.0, 9.0, 1), vec![3.0]);
        assert_eq!(linspace(0.0, 1.0, 5), vec![0.0, 0.25, 0.5, 0.75, 1.0]);
    }

    #[test]
    fn ids_round_trip() {
        for kind in CurveKind::ALL {
            assert_eq!(CurveKind::from_id(kind.id()), Some(kind));
        }
        assert_eq!(CurveKind::from_id("tangent"), None);
    }
}
