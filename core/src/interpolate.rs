// Cubic interpolation between `b` and `c`, with `a` and `d` as the outer
// control points (four consecutive lattice samples).
//
// x = 0 gives b, x = 1 gives c. Overshoot outside [min, max] of the inputs
// is possible and left alone.
#[inline]
pub fn cubic(a: f32, b: f32, c: f32, d: f32, x: f32) -> f32 {
    let p = (d - c) - (a - b);
    x * x * x * p + x * x * ((a - b) - p) + x * (c - a) + b
}

#[cfg(test)]
mod tests {
    use super::cubic;

    const QUADS: [[f32; 4]; 5] = [
        [0.0, 0.0, 0.0, 0.0],
        [1.0, 2.0, 3.0, 4.0],
        [-0.5, 0.25, 0.125, -0.375],
        [0.4, -0.1, 0.3, 0.05],
        [-0.031_379_94, 0.407_477_6, 0.419_765, -0.345_082_3],
    ];

    #[test]
    fn cubic_start_is_b() {
        for [a, b, c, d] in QUADS {
            assert_eq!(cubic(a, b, c, d, 0.0), b);
        }
    }

    #[test]
    fn cubic_end_is_c_for_dyadic_inputs() {
        assert_eq!(cubic(1.0, 2.0, 3.0, 4.0, 1.0), 3.0);
        assert_eq!(cubic(-0.5, 0.25, 0.125, -0.375, 1.0), 0.125);
        assert_eq!(cubic(0.0, 0.0, 0.0, 0.0, 1.0), 0.0);
    }

    #[test]
    fn cubic_end_is_c_within_rounding() {
        for [a, b, c, d] in QUADS {
            let v = cubic(a, b, c, d, 1.0);
            assert!((v - c).abs() < 1e-6, "cubic(.., 1) = {v}, expected {c}");
        }
    }

    #[test]
    fn cubic_flat_input_is_flat() {
        for i in 0..=10 {
            let x = i as f32 / 10.0;
            assert_eq!(cubic(0.3, 0.3, 0.3, 0.3, x), 0.3);
        }
    }

    #[test]
    fn cubic_midpoint_weights() {
        // At x = 0.5 the weights are (-1/8, 5/8, 5/8, -1/8)
        let v = cubic(1.0, 0.0, 0.0, 0.0, 0.5);
        assert_eq!(v, -0.125);
        let v = cubic(0.0, 1.0, 0.0, 0.0, 0.5);
        assert_eq!(v, 0.625);
    }

    #[test]
    fn cubic_can_overshoot() {
        let v = cubic(-0.5, 0.5, 0.5, -0.5, 0.5);
        assert!(v > 0.5);
    }

    #[test]
    fn cubic_propagates_nan() {
        assert!(cubic(f32::NAN, 0.0, 0.0, 0.0, 0.5).is_nan());
    }
}
