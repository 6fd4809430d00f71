//! Integer percentage arithmetic.
//!
//! Inputs are non-negative counts; a zero denominator yields `None` and is
//! resolved by the caller's [`ZeroDenominatorPolicy`](crate::ZeroDenominatorPolicy).

/// `round(numerator / denominator * 100)`, ties rounded up.
pub fn round_percent(numerator: i32, denominator: i32) -> Option<i32> {
    debug_assert!(numerator >= 0 && denominator >= 0);
    if denominator == 0 {
        return None;
    }
    Some((200 * numerator + denominator) / (2 * denominator))
}

/// `ceil(numerator / denominator * 100)`.
pub fn ceil_percent(numerator: i32, denominator: i32) -> Option<i32> {
    debug_assert!(numerator >= 0 && denominator >= 0);
    if denominator == 0 {
        return None;
    }
    Some((100 * numerator + denominator - 1) / denominator)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rounds_half_up() {
        assert_eq!(round_percent(10, 26), Some(38));
        assert_eq!(round_percent(5, 26), Some(19));
        assert_eq!(round_percent(1, 8), Some(13)); // 12.5
        assert_eq!(round_percent(1, 3), Some(33));
        assert_eq!(round_percent(0, 5), Some(0));
        assert_eq!(round_percent(3, 0), None);
    }

    #[test]
    fn ceils_exact_multiples_without_overshoot() {
        assert_eq!(ceil_percent(4, 26), Some(16));
        assert_eq!(ceil_percent(7, 100), Some(7));
        assert_eq!(ceil_percent(1, 4), Some(25));
        assert_eq!(ceil_percent(0, 4), Some(0));
        assert_eq!(ceil_percent(0, 0), None);
    }
}
