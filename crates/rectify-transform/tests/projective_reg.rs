//! Homography estimation regression test
//!
//! Test structure:
//!   1. Identity: a canvas rectangle mapped onto itself
//!   2. Pure scale: axis-aligned quads give exact diagonal coefficients
//!   3. Corner round-trip over a deterministic set of jittered quads
//!   4. Degenerate quads are rejected as singular
//!   5. Crossed (winding-swapped) quads still solve and round-trip

use rectify_core::{Point, Quad};
use rectify_test::RegParams;
use rectify_transform::{Homography, TransformError, estimate_homography};

/// Deterministic LCG so the quad set is identical on every run.
struct Lcg(u64);

impl Lcg {
    fn next_f64(&mut self) -> f64 {
        self.0 = self
            .0
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        (self.0 >> 11) as f64 / (1u64 << 53) as f64
    }
}

/// Quad whose corners sit in the outer 30% bands of a `w` x `h` region.
fn jittered_quad(rng: &mut Lcg, w: f64, h: f64) -> Quad {
    let near = |rng: &mut Lcg| rng.next_f64() * 0.3;
    let far = |rng: &mut Lcg| 0.7 + rng.next_f64() * 0.3;
    let tl = (near(rng) * w, near(rng) * h);
    let tr = (far(rng) * w, near(rng) * h);
    let br = (far(rng) * w, far(rng) * h);
    let bl = (near(rng) * w, far(rng) * h);
    Quad::from_coords([tl, tr, br, bl]).expect("finite corners")
}

fn check_round_trip(rp: &mut RegParams, h: &Homography, src: &Quad, dst: &Quad, tol: f64) {
    for (s, d) in src.iter().zip(dst.iter()) {
        let p = h.transform_point(d);
        rp.compare_values(s.x, p.x, tol);
        rp.compare_values(s.y, p.y, tol);
    }
}

#[test]
fn projective_reg_identity() {
    let mut rp = RegParams::new("projective_identity");

    for (w, h) in [(4, 3), (8, 6), (16, 16), (5, 7), (10, 10), (32, 24)] {
        let rect = Quad::rectangle(w, h);
        let hom = estimate_homography(&rect, &rect).expect("estimate identity");
        let expected = Homography::identity();
        for (e, a) in expected.coeffs().iter().zip(hom.coeffs()) {
            rp.compare_values(*e, *a, 1e-12);
        }
    }

    assert!(rp.cleanup(), "projective_identity regression test failed");
}

#[test]
fn projective_reg_pure_scale() {
    let mut rp = RegParams::new("projective_scale");

    // 98 / 49 is exactly 2
    let src = Quad::from_coords([(0.0, 0.0), (98.0, 0.0), (98.0, 98.0), (0.0, 98.0)]).unwrap();
    let h = Homography::estimate(&src, &Quad::rectangle(50, 50)).expect("estimate scale");
    let c = h.coeffs();
    rp.compare_values(2.0, c[0], 0.0);
    rp.compare_values(2.0, c[4], 0.0);
    for i in [1, 2, 3, 5, 6, 7] {
        rp.compare_values(0.0, c[i], 0.0);
    }

    // Full 100x100 image onto 50x50: the last output pixel center lands on
    // the far edge of the source.
    let src = Quad::rectangle(101, 101);
    let h = Homography::estimate(&src, &Quad::rectangle(50, 50)).expect("estimate full");
    rp.compare_values(100.0 / 49.0, h.coeffs()[0], 1e-12);
    rp.compare_values(100.0 / 49.0, h.coeffs()[4], 1e-12);
    let (x, y) = h.apply(49.0, 49.0);
    rp.compare_values(100.0, x, 1e-9);
    rp.compare_values(100.0, y, 1e-9);

    assert!(rp.cleanup(), "projective_scale regression test failed");
}

#[test]
fn projective_reg_corner_round_trip() {
    let mut rp = RegParams::new("projective_round_trip");

    let mut rng = Lcg(12345);
    for _ in 0..200 {
        let out_w = 2 + (rng.next_f64() * 500.0) as u32;
        let out_h = 2 + (rng.next_f64() * 500.0) as u32;
        let src_w = 50.0 + rng.next_f64() * 1000.0;
        let src_h = 50.0 + rng.next_f64() * 1000.0;
        let src = jittered_quad(&mut rng, src_w, src_h);
        let dst = Quad::rectangle(out_w, out_h);

        let h = Homography::estimate(&src, &dst).expect("estimate jittered quad");
        check_round_trip(&mut rp, &h, &src, &dst, 1e-9);
    }

    assert!(rp.cleanup(), "projective_round_trip regression test failed");
}

#[test]
fn projective_reg_degenerate() {
    let mut rp = RegParams::new("projective_degenerate");
    let dst = Quad::rectangle(50, 50);

    let cases: [[(f64, f64); 4]; 4] = [
        // three collinear corners
        [(0.0, 0.0), (50.0, 0.0), (100.0, 0.0), (0.0, 100.0)],
        // two coincident corners
        [(0.0, 0.0), (0.0, 0.0), (10.0, 10.0), (0.0, 10.0)],
        // all corners on one line
        [(0.0, 0.0), (1.0, 1.0), (2.0, 2.0), (3.0, 3.0)],
        // all corners equal
        [(7.0, 7.0), (7.0, 7.0), (7.0, 7.0), (7.0, 7.0)],
    ];
    for coords in cases {
        let src = Quad::from_coords(coords).unwrap();
        let result = Homography::estimate(&src, &dst);
        rp.check(
            result == Err(TransformError::Singular),
            &format!("{coords:?} should be singular, got {result:?}"),
        );
    }

    // A one-pixel-wide output has no area to map onto
    let src = Quad::rectangle(20, 20);
    let result = Homography::estimate(&src, &Quad::rectangle(1, 20));
    rp.check(
        result == Err(TransformError::Singular),
        "one-pixel-wide destination should be singular",
    );

    assert!(rp.cleanup(), "projective_degenerate regression test failed");
}

#[test]
fn projective_reg_crossed_quad() {
    let mut rp = RegParams::new("projective_crossed");

    let quad = Quad::from_coords([(5.0, 5.0), (35.0, 5.0), (35.0, 35.0), (5.0, 35.0)]).unwrap();
    let crossed = quad.flip_winding();
    let dst = Quad::rectangle(20, 20);
    let h = Homography::estimate(&crossed, &dst).expect("crossed quad still solves");
    check_round_trip(&mut rp, &h, &crossed, &dst, 1e-9);

    // The bottom edge runs right to left.
    let left = h.transform_point(Point::new(0.0, 19.0));
    let right = h.transform_point(Point::new(19.0, 19.0));
    rp.check(left.x > right.x, "bottom edge should be mirrored");

    assert!(rp.cleanup(), "projective_crossed regression test failed");
}
