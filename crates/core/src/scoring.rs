//! Scoring module - line-clear points and speed progression
//!
//! Points use the classic line table scaled by the level the lock happened
//! on. Speed only changes when a single lock step clears at least
//! `threshold` lines; cumulative lines do not matter.

use crate::types::LINE_SCORES;

/// Calculate line clear score (Classic rules)
/// lines: number of lines cleared by one lock (1-4)
/// level: level at the time of the lock (1-based)
pub fn calculate_line_score(lines: usize, level: u32) -> u32 {
    if lines == 0 {
        return 0;
    }
    let base_score = LINE_SCORES[lines.min(LINE_SCORES.len() - 1)];
    base_score.saturating_mul(level.max(1))
}

/// Fall interval for a level: `base_ms / (level * 0.5)`
pub fn drop_interval_ms(base_ms: f64, level: u32) -> f64 {
    base_ms / (level.max(1) as f64 * 0.5)
}

/// Level after a lock step that cleared `lines_cleared` lines
pub fn next_level(level: u32, lines_cleared: usize, threshold: u32) -> u32 {
    if lines_cleared as u64 >= threshold as u64 {
        level.saturating_add(1)
    } else {
        level
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_score_scales_with_level() {
        assert_eq!(calculate_line_score(0, 3), 0);
        assert_eq!(calculate_line_score(1, 1), 40);
        assert_eq!(calculate_line_score(2, 2), 200);
        assert_eq!(calculate_line_score(4, 3), 3600);
    }

    #[test]
    fn test_drop_interval_formula() {
        assert_eq!(drop_interval_ms(1000.0, 1), 2000.0);
        assert_eq!(drop_interval_ms(1000.0, 2), 1000.0);
        assert_eq!(drop_interval_ms(1000.0, 4), 500.0);
        assert!(drop_interval_ms(1000.0, 3) < drop_interval_ms(1000.0, 2));
    }

    #[test]
    fn test_next_level_uses_lines_of_this_step() {
        assert_eq!(next_level(1, 0, 1), 1);
        assert_eq!(next_level(1, 1, 1), 2);
        assert_eq!(next_level(5, 3, 1), 6);
        assert_eq!(next_level(5, 1, 2), 5);
    }
}
