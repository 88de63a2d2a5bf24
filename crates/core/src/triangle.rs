//! Uniform sampling of, and projection onto, a 2D triangle.
//!
//! The displayable region of every chroma-based model, for a fixed hue, is the
//! triangle `(0, 0)`, `(0, 1)`, `(1, apex)` in the (chroma, second channel)
//! plane. [`Triangle::sample`] draws from it with uniform area density in one
//! step; [`Triangle::nearest`] snaps an outside point back onto it.

use crate::random::RandomSource;
use glam::DVec2;

/// A triangle given by its three vertices.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle {
    pub a: DVec2,
    pub b: DVec2,
    pub c: DVec2,
}

impl Triangle {
    pub fn new(a: DVec2, b: DVec2, c: DVec2) -> Self {
        Self { a, b, c }
    }

    /// The valid (chroma, second channel) region of a chroma-based model whose
    /// fully saturated color sits at second-channel coordinate `apex`.
    pub fn chroma_region(apex: f64) -> Self {
        Self::new(DVec2::ZERO, DVec2::Y, DVec2::new(1.0, apex))
    }

    /// Unsigned area.
    pub fn area(&self) -> f64 {
        0.5 * (self.b - self.a).perp_dot(self.c - self.a).abs()
    }

    /// Draws one point with uniform density over the triangle.
    ///
    /// Two unit draws `(u, v)` cover the unit square; the half with
    /// `u + v > 1` is reflected onto the other half, then mapped through the
    /// affine combination `a + u(b - a) + v(c - a)`. No draw is rejected.
    pub fn sample<R: RandomSource + ?Sized>(&self, rng: &mut R) -> DVec2 {
        let mut u = rng.unit_closed();
        let mut v = rng.unit_closed();
        if u + v > 1.0 {
            u = 1.0 - u;
            v = 1.0 - v;
        }
        self.a + (self.b - self.a) * u + (self.c - self.a) * v
    }

    /// Closest point of the (closed) triangle to `p` in Euclidean distance.
    ///
    /// Classifies `p` against the vertex, edge and face Voronoi regions.
    pub fn nearest(&self, p: DVec2) -> DVec2 {
        let (a, b, c) = (self.a, self.b, self.c);
        let ab = b - a;
        let ac = c - a;

        let ap = p - a;
        let d1 = ab.dot(ap);
        let d2 = ac.dot(ap);
        if d1 <= 0.0 && d2 <= 0.0 {
            return a;
        }

        let bp = p - b;
        let d3 = ab.dot(bp);
        let d4 = ac.dot(bp);
        if d3 >= 0.0 && d4 <= d3 {
            return b;
        }

        let vc = d1 * d4 - d3 * d2;
        if vc <= 0.0 && d1 >= 0.0 && d3 <= 0.0 {
            return a + ab * (d1 / (d1 - d3));
        }

        let cp = p - c;
        let d5 = ab.dot(cp);
        let d6 = ac.dot(cp);
        if d6 >= 0.0 && d5 <= d6 {
            return c;
        }

        let vb = d5 * d2 - d1 * d6;
        if vb <= 0.0 && d2 >= 0.0 && d6 <= 0.0 {
            return a + ac * (d2 / (d2 - d6));
        }

        let va = d3 * d6 - d5 * d4;
        if va <= 0.0 && d4 - d3 >= 0.0 && d5 - d6 >= 0.0 {
            let w = (d4 - d3) / ((d4 - d3) + (d5 - d6));
            return b + (c - b) * w;
        }

        let denom = 1.0 / (va + vb + vc);
        a + ab * (vb * denom) + ac * (vc * denom)
    }

    /// Whether `p` lies within `eps` of the triangle.
    pub fn contains(&self, p: DVec2, eps: f64) -> bool {
        self.nearest(p).distance(p) <= eps
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prng::Xorshift64;
    use crate::random::testing::Scripted;

    const EPSILON: f64 = 1e-12;

    fn approx_vec(a: DVec2, b: DVec2) -> bool {
        a.distance(b) < EPSILON
    }

    // -- Geometry --

    #[test]
    fn chroma_region_has_half_unit_area() {
        for apex in [0.0, 0.299, 0.5, 1.0] {
            let t = Triangle::chroma_region(apex);
            assert!((t.area() - 0.5).abs() < EPSILON, "apex {apex}");
        }
    }

    #[test]
    fn nearest_of_inside_point_is_itself() {
        let t = Triangle::chroma_region(0.5);
        let p = DVec2::new(0.2, 0.5);
        assert!(approx_vec(t.nearest(p), p));
        assert!(t.contains(p, 0.0));
    }

    #[test]
    fn nearest_snaps_to_vertices() {
        let t = Triangle::chroma_region(0.5);
        assert!(approx_vec(t.nearest(DVec2::new(-1.0, -1.0)), DVec2::ZERO));
        assert!(approx_vec(t.nearest(DVec2::new(-0.5, 2.0)), DVec2::Y));
        assert!(approx_vec(t.nearest(DVec2::new(2.0, 0.5)), DVec2::new(1.0, 0.5)));
    }

    #[test]
    fn nearest_projects_onto_edges() {
        let t = Triangle::chroma_region(0.5);
        // Left of the chroma = 0 edge.
        assert!(approx_vec(
            t.nearest(DVec2::new(-0.3, 0.4)),
            DVec2::new(0.0, 0.4)
        ));
        // Above the upper edge y = 1 - x / 2: (0.5, 1) projects onto it
        // perpendicularly, landing at (0.4, 0.8).
        let q = t.nearest(DVec2::new(0.5, 1.0));
        assert!(approx_vec(q, DVec2::new(0.4, 0.8)), "got {q}");
    }

    #[test]
    fn contains_rejects_outside_points() {
        let t = Triangle::chroma_region(1.0);
        assert!(!t.contains(DVec2::new(0.8, 0.5), 1e-9));
        assert!(t.contains(DVec2::new(0.5, 0.8), 1e-9));
    }

    // -- Sampling --

    #[test]
    fn sample_reflects_upper_half_of_unit_square() {
        let t = Triangle::chroma_region(1.0);
        let p = t.sample(&mut Scripted::new(&[0.75, 0.75]));
        // (0.75, 0.75) folds to (0.25, 0.25): 0.25 * (0,1) + 0.25 * (1,1)
        assert!(approx_vec(p, DVec2::new(0.25, 0.5)), "got {p}");
    }

    #[test]
    fn samples_always_inside() {
        let mut rng = Xorshift64::new(77);
        for apex in [0.114, 0.5, 0.886, 1.0] {
            let t = Triangle::chroma_region(apex);
            for _ in 0..5000 {
                let p = t.sample(&mut rng);
                assert!(t.contains(p, 1e-12), "{p} outside apex {apex}");
            }
        }
    }

    /// Chi-square statistic of (chroma, second) points binned into equal-width
    /// chroma strips, each split into equal fractions of its vertical extent.
    /// Expected counts follow the exact area of each cell.
    fn chi_square(points: &[DVec2], apex: f64, strips: usize, rows: usize) -> f64 {
        let mut counts = vec![0usize; strips * rows];
        for p in points {
            let s = ((p.x * strips as f64) as usize).min(strips - 1);
            let lo = p.x * apex;
            let hi = p.x * apex + 1.0 - p.x;
            let frac = if hi > lo { (p.y - lo) / (hi - lo) } else { 0.5 };
            let r = ((frac * rows as f64).max(0.0) as usize).min(rows - 1);
            counts[s * rows + r] += 1;
        }
        let n = points.len() as f64;
        let mut stat = 0.0;
        for s in 0..strips {
            let x0 = s as f64 / strips as f64;
            let x1 = (s + 1) as f64 / strips as f64;
            // Strip area over total area 1/2.
            let strip_frac = 2.0 * ((x1 - x0) - (x1 * x1 - x0 * x0) / 2.0);
            let expected = n * strip_frac / rows as f64;
            for r in 0..rows {
                let observed = counts[s * rows + r] as f64;
                stat += (observed - expected).powi(2) / expected;
            }
        }
        stat
    }

    // 40 cells -> 39 degrees of freedom; the 0.1% critical value is ~72.1.
    const CHI_SQUARE_LIMIT: f64 = 80.0;

    #[test]
    fn barycentric_sampling_is_uniform_over_area() {
        let mut rng = Xorshift64::new(20_240_601);
        for apex in [0.5, 0.299] {
            let t = Triangle::chroma_region(apex);
            let points: Vec<DVec2> = (0..20_000).map(|_| t.sample(&mut rng)).collect();
            let stat = chi_square(&points, apex, 10, 4);
            assert!(
                stat < CHI_SQUARE_LIMIT,
                "chi-square {stat} for apex {apex} exceeds {CHI_SQUARE_LIMIT}"
            );
        }
    }

    #[test]
    fn independent_axis_sampling_fails_uniformity() {
        // Chroma drawn uniformly, then the second channel uniformly within its
        // legal range at that chroma: every chroma strip gets equal mass even
        // though strips shrink as chroma rises.
        let apex = 0.5;
        let mut rng = Xorshift64::new(20_240_601);
        let points: Vec<DVec2> = (0..20_000)
            .map(|_| {
                let c = rng.unit_closed();
                let lo = c * apex;
                let hi = lo + 1.0 - c;
                DVec2::new(c, rng.range_closed(lo, hi))
            })
            .collect();
        let stat = chi_square(&points, apex, 10, 4);
        assert!(
            stat > 10.0 * CHI_SQUARE_LIMIT,
            "naive sampling unexpectedly passed: chi-square {stat}"
        );
    }
}
