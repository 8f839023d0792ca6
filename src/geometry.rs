//! Geometric helpers for outline editing: line projection, handle
//! extension, rotation, and single-cubic refitting.

use kurbo::{CubicBez, Point, Vec2};

/// Orthogonally project `p` onto the infinite line through `a` and `b`.
///
/// The projection is unclamped: the result may lie outside the `a`–`b`
/// span. When `a` and `b` coincide the line is degenerate and `a` is
/// returned.
pub fn line_projection(a: Point, b: Point, p: Point) -> Point {
    let ab = b - a;
    let len2 = ab.hypot2();
    if len2 < f64::EPSILON {
        return a;
    }
    let t = (p - a).dot(ab) / len2;
    a + ab * t
}

/// Place a point on the ray from `from` through `through`, at the ray's
/// current length plus `extra`.
///
/// Used to keep the opposite handle of a smooth point inline while
/// preserving its distance from the anchor. Degenerate rays (`from` on
/// top of `through`) leave no direction to extend along; `through` is
/// returned unchanged.
pub fn extend_through(from: Point, through: Point, extra: f64) -> Point {
    let v = through - from;
    let len = v.hypot();
    if len < f64::EPSILON {
        return through;
    }
    from + v * ((len + extra) / len)
}

/// Rotate `p` around `center` by `angle` radians, counterclockwise.
pub fn rotate_about(center: Point, p: Point, angle: f64) -> Point {
    let (s, c) = angle.sin_cos();
    let v = p - center;
    center + Vec2::new(v.x * c - v.y * s, v.x * s + v.y * c)
}

/// Least-squares fit of a single cubic through `samples`, holding the end
/// points fixed and the handle directions to `tan1` (leaving the first
/// sample) and `tan2` (arriving at the last sample).
///
/// Classic FitCurve estimation: chord-length parameterize the samples,
/// then solve the 2x2 normal equations for the two handle lengths. When
/// the system is degenerate or produces inverted handles, fall back to
/// the Wu/Barsky heuristic of one third of the chord per handle.
pub fn fit_cubic(samples: &[Point], tan1: Vec2, tan2: Vec2) -> CubicBez {
    debug_assert!(samples.len() >= 2, "cubic fit needs at least two samples");
    let first = samples[0];
    let last = samples[samples.len() - 1];
    let chord = (last - first).hypot();
    let t1 = normalize_or(tan1, last - first);
    let t2 = normalize_or(tan2, first - last);
    let fallback = CubicBez::new(
        first,
        first + t1 * (chord / 3.0),
        last + t2 * (chord / 3.0),
        last,
    );
    if samples.len() < 3 || chord < f64::EPSILON {
        return fallback;
    }

    let params = chord_length_params(samples);
    let mut c00 = 0.0;
    let mut c01 = 0.0;
    let mut c11 = 0.0;
    let mut x0 = 0.0;
    let mut x1 = 0.0;
    for (p, u) in samples.iter().zip(params.iter()) {
        let b1 = 3.0 * u * (1.0 - u) * (1.0 - u);
        let b2 = 3.0 * u * u * (1.0 - u);
        let b3 = u * u * u;
        let a1 = t1 * b1;
        let a2 = t2 * b2;
        let d = (*p - first) - (last - first) * (b2 + b3);
        c00 += a1.dot(a1);
        c01 += a1.dot(a2);
        c11 += a2.dot(a2);
        x0 += a1.dot(d);
        x1 += a2.dot(d);
    }
    let det = c00 * c11 - c01 * c01;
    if det.abs() < f64::EPSILON {
        return fallback;
    }
    let alpha1 = (x0 * c11 - x1 * c01) / det;
    let alpha2 = (c00 * x1 - c01 * x0) / det;
    if !alpha1.is_finite() || !alpha2.is_finite() || alpha1 <= 0.0 || alpha2 <= 0.0 {
        return fallback;
    }
    CubicBez::new(first, first + t1 * alpha1, last + t2 * alpha2, last)
}

fn normalize_or(v: Vec2, fallback: Vec2) -> Vec2 {
    let len = v.hypot();
    if len < f64::EPSILON {
        let flen = fallback.hypot();
        if flen < f64::EPSILON {
            return Vec2::ZERO;
        }
        return fallback / flen;
    }
    v / len
}

fn chord_length_params(samples: &[Point]) -> Vec<f64> {
    let mut params = Vec::with_capacity(samples.len());
    params.push(0.0);
    let mut total = 0.0;
    for pair in samples.windows(2) {
        total += (pair[1] - pair[0]).hypot();
        params.push(total);
    }
    if total > 0.0 {
        for u in params.iter_mut() {
            *u /= total;
        }
    }
    params
}
