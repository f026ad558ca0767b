// utils/math.rs

use rand::Rng;

/// Draws a uniform random number from `min..max`, guarding against an
/// empty range. Logs a warning and returns `min` when `min >= max` so a
/// bad range never panics mid-frame.
pub fn safe_gen_range(min: f64, max: f64, context: &str) -> f64 {
    if min >= max {
        println!(
            "WARNING: Empty range in {}: min={}, max={}",
            context, min, max
        );
        min
    } else {
        let mut rng = rand::thread_rng();
        rng.gen_range(min..max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn draws_stay_inside_range() {
        for _ in 0..200 {
            let v = safe_gen_range(150.0, 450.0, "test range");
            assert!((150.0..450.0).contains(&v));
        }
    }

    #[test]
    fn empty_range_returns_min() {
        assert_eq!(safe_gen_range(5.0, 5.0, "degenerate"), 5.0);
        assert_eq!(safe_gen_range(9.0, 2.0, "inverted"), 9.0);
    }
}
