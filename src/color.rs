//! CIEDE2000 color difference.
//!
//! Standard viewing conditions (k_L = k_C = k_H = 1). Hue angles are kept in
//! degrees and only converted to radians at the trigonometric call sites.

use crate::features::Lab;

const POW25_7: f64 = 6_103_515_625.0; // 25^7

#[inline(always)]
fn pow7(x: f64) -> f64 {
    let x2 = x * x;
    let x3 = x2 * x;
    x3 * x3 * x
}

#[inline(always)]
fn hue_degrees(b: f64, a_prime: f64) -> f64 {
    let h = b.atan2(a_prime).to_degrees();
    if h < 0.0 {
        h + 360.0
    } else {
        h
    }
}

/// Perceptual distance between two Lab colors. Symmetric, non-negative, and
/// exactly zero for identical inputs.
pub fn ciede2000(c1: Lab, c2: Lab) -> f64 {
    let chroma1 = c1.a.hypot(c1.b);
    let chroma2 = c2.a.hypot(c2.b);
    let c_mean = (chroma1 + chroma2) / 2.0;

    let c_mean7 = pow7(c_mean);
    let g = 0.5 * (1.0 - (c_mean7 / (c_mean7 + POW25_7)).sqrt());

    let a1p = (1.0 + g) * c1.a;
    let a2p = (1.0 + g) * c2.a;

    let c1p = a1p.hypot(c1.b);
    let c2p = a2p.hypot(c2.b);
    let h1p = hue_degrees(c1.b, a1p);
    let h2p = hue_degrees(c2.b, a2p);

    let dl = c2.l - c1.l;
    let dc = c2p - c1p;

    let achromatic = c1p * c2p == 0.0;
    let h_diff = h2p - h1p;

    let dh = if achromatic {
        0.0
    } else if h_diff.abs() <= 180.0 {
        h_diff
    } else if h_diff > 180.0 {
        h_diff - 360.0
    } else {
        h_diff + 360.0
    };
    let d_big_h = 2.0 * (c1p * c2p).sqrt() * (dh / 2.0).to_radians().sin();

    let l_mean = (c1.l + c2.l) / 2.0;
    let cp_mean = (c1p + c2p) / 2.0;

    let hp_mean = if achromatic {
        h1p + h2p
    } else if h_diff.abs() <= 180.0 {
        (h1p + h2p) / 2.0
    } else if h1p + h2p < 360.0 {
        (h1p + h2p + 360.0) / 2.0
    } else {
        (h1p + h2p - 360.0) / 2.0
    };

    let t = 1.0 - 0.17 * (hp_mean - 30.0).to_radians().cos()
        + 0.24 * (2.0 * hp_mean).to_radians().cos()
        + 0.32 * (3.0 * hp_mean + 6.0).to_radians().cos()
        - 0.20 * (4.0 * hp_mean - 63.0).to_radians().cos();

    let d_theta = 30.0 * (-((hp_mean - 275.0) / 25.0).powi(2)).exp();
    let cp_mean7 = pow7(cp_mean);
    let r_c = 2.0 * (cp_mean7 / (cp_mean7 + POW25_7)).sqrt();
    let r_t = -(2.0 * d_theta).to_radians().sin() * r_c;

    let l_off = (l_mean - 50.0).powi(2);
    let s_l = 1.0 + (0.015 * l_off) / (20.0 + l_off).sqrt();
    let s_c = 1.0 + 0.045 * cp_mean;
    let s_h = 1.0 + 0.015 * cp_mean * t;

    let tl = dl / s_l;
    let tc = dc / s_c;
    let th = d_big_h / s_h;

    // The rotation term can push the sum a hair below zero for near-identical
    // colors. NaN must pass through untouched.
    let sum = tl * tl + tc * tc + th * th + r_t * tc * th;
    if sum < 0.0 {
        0.0
    } else {
        sum.sqrt()
    }
}
