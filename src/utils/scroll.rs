//! Pure math for the hero parallax.
//!
//! The scroll listener samples the hero's bounding rect and feeds it through
//! these functions. Keeping them free of any DOM types lets the contract run
//! under plain `cargo test` on the host.

/// Normalized progress of the tracked container past the viewport top.
///
/// 0.0 while the container's top edge is at or below the viewport top,
/// 1.0 once the container has fully scrolled past, linear in between.
/// Degenerate geometry (zero or negative height, NaN, infinities) reports
/// 0.0 so the bound outputs sit at their resting values.
pub fn scroll_progress(container_top: f64, container_height: f64) -> f64 {
    if !container_top.is_finite() || !container_height.is_finite() || container_height <= 0.0 {
        return 0.0;
    }
    (-container_top / container_height).clamp(0.0, 1.0)
}

/// Vertical offset for the hero background, in CSS percent of its own height.
///
/// Runs 0 at progress 0 to 50 at progress 1, so the background scrolls at
/// half the speed of the foreground copy.
pub fn parallax_shift(progress: f64) -> f64 {
    sanitize_progress(progress) * 50.0
}

/// Opacity for the hero background. Fades 1 to 0 over the first half of the
/// traversal and holds 0 for the rest.
pub fn overlay_opacity(progress: f64) -> f64 {
    (1.0 - 2.0 * sanitize_progress(progress)).max(0.0)
}

fn sanitize_progress(progress: f64) -> f64 {
    if progress.is_finite() {
        progress.clamp(0.0, 1.0)
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn progress_rests_at_zero_before_any_scroll() {
        assert_eq!(scroll_progress(0.0, 600.0), 0.0);
        assert_eq!(scroll_progress(250.0, 600.0), 0.0, "container below the viewport top must not report progress");
    }

    #[test]
    fn progress_reaches_one_when_container_fully_passes() {
        assert_eq!(scroll_progress(-600.0, 600.0), 1.0);
        assert_eq!(scroll_progress(-1500.0, 600.0), 1.0, "overscroll past the container must clamp to 1");
    }

    #[test]
    fn progress_is_linear_across_the_container() {
        assert!((scroll_progress(-150.0, 600.0) - 0.25).abs() < 1e-12);
        assert!((scroll_progress(-300.0, 600.0) - 0.5).abs() < 1e-12);
        assert!((scroll_progress(-450.0, 600.0) - 0.75).abs() < 1e-12);
    }

    #[test]
    fn degenerate_geometry_is_inert() {
        assert_eq!(scroll_progress(-300.0, 0.0), 0.0);
        assert_eq!(scroll_progress(-300.0, -50.0), 0.0);
        assert_eq!(scroll_progress(f64::NAN, 600.0), 0.0);
        assert_eq!(scroll_progress(-300.0, f64::INFINITY), 0.0);
        assert_eq!(parallax_shift(f64::NAN), 0.0);
        assert_eq!(overlay_opacity(f64::NAN), 1.0, "an inert hero must keep the background fully visible");
    }

    #[test]
    fn shift_spans_zero_to_fifty_percent() {
        assert_eq!(parallax_shift(0.0), 0.0);
        assert!((parallax_shift(0.5) - 25.0).abs() < 1e-12);
        assert_eq!(parallax_shift(1.0), 50.0);
    }

    #[test]
    fn opacity_fades_over_the_first_half_then_holds_zero() {
        assert_eq!(overlay_opacity(0.0), 1.0);
        assert!((overlay_opacity(0.25) - 0.5).abs() < 1e-12);
        assert_eq!(overlay_opacity(0.5), 0.0);
        assert_eq!(overlay_opacity(0.75), 0.0);
        assert_eq!(overlay_opacity(1.0), 0.0);
    }

    #[test]
    fn outputs_are_monotonic_while_scrolling_down() {
        let mut previous_shift = -1.0f64;
        let mut previous_opacity = 2.0f64;

        for step in 0..=40 {
            let top = -(step as f64) * 20.0;
            let progress = scroll_progress(top, 800.0);
            let shift = parallax_shift(progress);
            let opacity = overlay_opacity(progress);
            assert!(
                shift + 1e-9 >= previous_shift,
                "background shift should never move back up while scrolling down"
            );
            assert!(
                opacity - 1e-9 <= previous_opacity,
                "background opacity should never recover while scrolling down"
            );
            previous_shift = shift;
            previous_opacity = opacity;
        }
    }

    proptest! {
        #[test]
        fn shift_stays_inside_its_band(progress in -2.0f64..3.0) {
            let shift = parallax_shift(progress);
            prop_assert!((0.0..=50.0).contains(&shift));
        }

        #[test]
        fn opacity_stays_inside_its_band(progress in -2.0f64..3.0) {
            let opacity = overlay_opacity(progress);
            prop_assert!((0.0..=1.0).contains(&opacity));
        }

        #[test]
        fn shift_matches_the_linear_map_on_valid_progress(progress in 0.0f64..=1.0) {
            prop_assert!((parallax_shift(progress) - progress * 50.0).abs() < 1e-9);
        }

        #[test]
        fn opacity_matches_the_piecewise_map_on_valid_progress(progress in 0.0f64..=1.0) {
            let expected = if progress <= 0.5 { 1.0 - 2.0 * progress } else { 0.0 };
            prop_assert!((overlay_opacity(progress) - expected).abs() < 1e-9);
        }

        #[test]
        fn progress_is_always_a_valid_fraction(top in -5000.0f64..5000.0, height in -100.0f64..3000.0) {
            let progress = scroll_progress(top, height);
            prop_assert!(progress.is_finite());
            prop_assert!((0.0..=1.0).contains(&progress));
        }
    }
}
