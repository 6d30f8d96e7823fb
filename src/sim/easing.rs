use serde::{Deserialize, Serialize};

const BACK_C1: f64 = 1.70158;
const BACK_C3: f64 = BACK_C1 + 1.0;

const BOUNCE_N1: f64 = 7.5625;
const BOUNCE_D1: f64 = 2.75;

pub fn linear(x: f64) -> f64 {
    x
}

pub fn ease_out_cubic(x: f64) -> f64 {
    1.0 - (1.0 - x).powi(3)
}

/// Sharper deceleration than cubic.
pub fn ease_out_quint(x: f64) -> f64 {
    1.0 - (1.0 - x).powi(5)
}

/// Overshoots above 1 before settling back, the springy pop-in curve.
pub fn ease_out_back(x: f64) -> f64 {
    1.0 + BACK_C3 * (x - 1.0).powi(3) + BACK_C1 * (x - 1.0).powi(2)
}

/// Four decreasing bounce arcs. Stays within [0, 1] on [0, 1].
pub fn ease_out_bounce(x: f64) -> f64 {
    if x < 1.0 / BOUNCE_D1 {
        BOUNCE_N1 * x * x
    } else if x < 2.0 / BOUNCE_D1 {
        let x = x - 1.5 / BOUNCE_D1;
        BOUNCE_N1 * x * x + 0.75
    } else if x < 2.5 / BOUNCE_D1 {
        let x = x - 2.25 / BOUNCE_D1;
        BOUNCE_N1 * x * x + 0.9375
    } else {
        let x = x - 2.625 / BOUNCE_D1;
        BOUNCE_N1 * x * x + 0.984375
    }
}

/// Named easing curve, used where a preset picks its curve from data.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Easing {
    Linear,
    #[default]
    OutCubic,
    OutQuint,
    OutBack,
    OutBounce,
}
impl Easing {
    pub fn apply(self, x: f64) -> f64 {
        match self {
            Easing::Linear => linear(x),
            Easing::OutCubic => ease_out_cubic(x),
            Easing::OutQuint => ease_out_quint(x),
            Easing::OutBack => ease_out_back(x),
            Easing::OutBounce => ease_out_bounce(x),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-12;

    fn samples() -> impl Iterator<Item = f64> {
        (0..=200).map(|i| i as f64 / 200.0)
    }

    #[test]
    fn endpoints_are_exact() {
        let curves = [
            Easing::Linear,
            Easing::OutCubic,
            Easing::OutQuint,
            Easing::OutBack,
            Easing::OutBounce,
        ];
        for easing in curves {
            assert!(easing.apply(0.0).abs() < EPS, "f(0) for {:?}", easing);
            assert!((easing.apply(1.0) - 1.0).abs() < EPS, "f(1) for {:?}", easing);
        }
        assert_eq!(ease_out_bounce(0.0), 0.0);
    }

    #[test]
    fn cubic_and_quint_are_monotonic() {
        let mut prev_cubic = f64::MIN;
        let mut prev_quint = f64::MIN;
        for x in samples() {
            let c = ease_out_cubic(x);
            let q = ease_out_quint(x);
            assert!(c >= prev_cubic);
            assert!(q >= prev_quint);
            prev_cubic = c;
            prev_quint = q;
        }
    }

    #[test]
    fn quint_decelerates_harder_than_cubic() {
        for x in samples().filter(|x| *x > 0.0 && *x < 1.0) {
            assert!(ease_out_quint(x) > ease_out_cubic(x));
        }
    }

    #[test]
    fn back_overshoots_then_settles() {
        let peak = samples().map(ease_out_back).fold(f64::MIN, f64::max);
        assert!(peak > 1.0, "peak {peak}");
        assert!(peak < 1.2, "peak {peak}");
    }

    #[test]
    fn bounce_stays_in_unit_range() {
        for x in samples() {
            let y = ease_out_bounce(x);
            assert!((0.0..=1.0 + EPS).contains(&y), "f({x}) = {y}");
        }
    }

    #[test]
    fn bounce_touches_ground_between_arcs() {
        // each arc boundary lands back on 1
        for boundary in [1.0 / BOUNCE_D1, 2.0 / BOUNCE_D1, 2.5 / BOUNCE_D1] {
            assert!((ease_out_bounce(boundary) - 1.0).abs() < 1e-9);
        }
        assert!(ease_out_bounce(0.5) < 1.0);
    }

    #[test]
    fn easing_names_round_trip_through_json() {
        let parsed: Easing = serde_json::from_str("\"OutBounce\"").unwrap();
        assert_eq!(parsed, Easing::OutBounce);
        assert_eq!(Easing::default(), Easing::OutCubic);
    }
}
