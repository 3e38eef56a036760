//! The skin-tone heuristic.
//!
//! A fixed empirical rule on a pixel's RGB values, standing in for
//! "this pixel probably belongs to a face and should survive the
//! carve."  It is crude, it has false positives on sand and wood, and
//! it works well enough that the thresholds are deliberately not
//! configurable.

/// Energy assigned to skin pixels and their halo.  The gradient term
/// tops out under ~1300 for an RGBA8 image, so one million keeps
/// protected pixels three orders of magnitude above anything the
/// gradient pass can produce, while staying exactly representable in
/// an f64 even after summing along a seam.  One million is a chosen
/// sentinel, not a derived bound; whatever replaces it must keep that
/// separation.
pub const SKIN_ENERGY: f64 = 1_000_000.0;

/// Half-width of the protected square around a skin pixel: five
/// pixels each side, an 11x11 window.
pub const SKIN_HALO: u32 = 5;

/// Classify one RGB triple as skin.  Requires a bright, red-dominant
/// pixel with a real channel spread and a red/green balance inside
/// the empirical skin band.  True grays can never qualify: their
/// spread is zero.
pub fn is_skin_pixel(r: u8, g: u8, b: u8) -> bool {
    if !(r > 95 && g > 40 && b > 20) {
        return false;
    }
    let spread = r.max(g).max(b) - r.min(g).min(b);
    if spread <= 15 || !(r > g && r > b) || r - g <= 15 {
        return false;
    }
    // r > 95 above guarantees a nonzero sum.
    let sum = f64::from(r) + f64::from(g) + f64::from(b);
    let red_share = f64::from(r) / sum;
    let green_share = f64::from(g) / sum;
    red_share > 0.35 && green_share > 0.27 && green_share < 0.37
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recognizes_common_skin_tones() {
        assert!(is_skin_pixel(224, 172, 105));
        assert!(is_skin_pixel(150, 100, 50));
        assert!(is_skin_pixel(200, 120, 80));
    }

    #[test]
    fn rejects_grays_for_lack_of_spread() {
        assert!(!is_skin_pixel(128, 128, 128));
        assert!(!is_skin_pixel(0, 0, 0));
        assert!(!is_skin_pixel(255, 255, 255));
    }

    #[test]
    fn rejects_saturated_primaries() {
        assert!(!is_skin_pixel(255, 0, 0));
        assert!(!is_skin_pixel(0, 255, 0));
        assert!(!is_skin_pixel(255, 41, 21));
    }

    #[test]
    fn rejects_pixels_outside_the_green_band() {
        // Passes every integer threshold but sits below the 0.27
        // green-share floor.
        assert!(!is_skin_pixel(96, 41, 21));
    }
}
