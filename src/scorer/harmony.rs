use super::types::ColorTrace;
use crate::color::ciede2000;
use crate::config::ColorThresholds;
use crate::features::ColorCluster;
use crate::util::{clamp01, round_to};

/// The 50/30/20 palette pyramid.
pub const IDEAL_SHARES: [f64; 3] = [0.50, 0.30, 0.20];

/// Color Harmony (C): how close the palette shares sit to 50/30/20, blended
/// with whether the mean pairwise distance falls in the harmonious band.
///
/// `clusters` must already be sorted by descending share.
pub fn score_color_harmony(clusters: &[ColorCluster], cfg: &ColorThresholds) -> (f64, ColorTrace) {
    let mut p = [0.0; 3];
    for (slot, c) in p.iter_mut().zip(clusters.iter()) {
        *slot = c.pct;
    }

    let total: f64 = p.iter().sum();
    if total > 0.0 {
        p.iter_mut().for_each(|v| *v /= total);
    } else {
        p = IDEAL_SHARES;
    }

    let deviation: f64 = p
        .iter()
        .zip(IDEAL_SHARES.iter())
        .map(|(pi, qi)| (pi - qi).abs())
        .sum();
    let r = clamp01(1.0 - 0.5 * deviation);

    let dbar = mean_pairwise_distance(clusters);

    let too_far = (dbar - cfg.d_max).max(0.0);
    let too_close = (cfg.d_min - dbar).max(0.0);
    let h = clamp01((-too_far / cfg.tau_h).exp() * (-too_close / cfg.tau_h).exp());

    let c = clamp01(0.7 * r + 0.3 * h);

    let trace = ColorTrace {
        p: p.map(|v| round_to(v, 3)),
        dbar: round_to(dbar, 2),
        r: round_to(r, 3),
        h: round_to(h, 3),
    };

    (c, trace)
}

/// Mean CIEDE2000 distance among the (up to) three largest clusters.
pub fn mean_pairwise_distance(clusters: &[ColorCluster]) -> f64 {
    match clusters {
        [a, b, c, ..] => {
            let d01 = ciede2000(a.lab, b.lab);
            let d02 = ciede2000(a.lab, c.lab);
            let d12 = ciede2000(b.lab, c.lab);
            (d01 + d02 + d12) / 3.0
        }
        [a, b] => ciede2000(a.lab, b.lab),
        _ => 0.0,
    }
}
