//! Scroll-driven presentation rules, kept free of DOM access.

use std::f64::consts::FRAC_PI_2;

/// Scroll distance over which the edge gradients fade in.
pub const GRADIENT_RAMP_PX: f64 = 400.0;
pub const GRADIENT_MAX_OPACITY: f64 = 0.9;
pub const NAVBAR_CONDENSE_PX: f64 = 50.0;
pub const SCROLL_INDICATOR_HIDE_PX: f64 = 100.0;

/// Ease-in (`1 - cos`) from 0 at the top to [`GRADIENT_MAX_OPACITY`] after
/// [`GRADIENT_RAMP_PX`].
pub fn scroll_gradient_opacity(scroll_y: f64) -> f64 {
    let progress = (scroll_y / GRADIENT_RAMP_PX).clamp(0.0, 1.0);
    let eased = 1.0 - (progress * FRAC_PI_2).cos();
    eased.clamp(0.0, 1.0) * GRADIENT_MAX_OPACITY
}

pub fn navbar_condensed(scroll_y: f64) -> bool {
    scroll_y > NAVBAR_CONDENSE_PX
}

pub fn scroll_indicator_visible(scroll_y: f64) -> bool {
    scroll_y <= SCROLL_INDICATOR_HIDE_PX
}

/// `animation-delay` for the `index`-th item of a staggered list.
pub fn stagger_style(base_ms: u32, step_ms: u32, index: usize) -> String {
    let delay = base_ms.saturating_add(step_ms.saturating_mul(index as u32));
    format!("animation-delay: {}ms;", delay)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_gradient_opacity_bounds() {
        assert!(approx(scroll_gradient_opacity(0.0), 0.0));
        assert!(approx(scroll_gradient_opacity(-30.0), 0.0));
        assert!(approx(scroll_gradient_opacity(400.0), 0.9));
        assert!(approx(scroll_gradient_opacity(5000.0), 0.9));
    }

    #[test]
    fn test_gradient_opacity_eases_in() {
        // 1 - cos(pi/4) = 0.2928...
        let half = scroll_gradient_opacity(200.0);
        assert!(approx(half, (1.0 - (0.5 * FRAC_PI_2).cos()) * 0.9));
        assert!(half < 0.45);

        let samples: Vec<f64> = (0..=8).map(|i| scroll_gradient_opacity(i as f64 * 50.0)).collect();
        assert!(samples.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_scroll_thresholds() {
        assert!(!navbar_condensed(50.0));
        assert!(navbar_condensed(50.5));
        assert!(scroll_indicator_visible(100.0));
        assert!(!scroll_indicator_visible(101.0));
    }

    #[test]
    fn test_stagger_style() {
        assert_eq!(stagger_style(0, 100, 0), "animation-delay: 0ms;");
        assert_eq!(stagger_style(200, 100, 3), "animation-delay: 500ms;");
    }
}
