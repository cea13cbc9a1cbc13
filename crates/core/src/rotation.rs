//! Rotation engine - quarter turns of square patterns
//!
//! A turn is a transpose followed by either reversing every row (clockwise)
//! or reversing the row order (counter-clockwise). Rotation returns a new
//! pattern, so catalog templates are never mutated.

use crate::pieces::Pattern;
use crate::types::{Rotation, RotationDir};

/// Rotate a pattern 90° in `dir`
pub fn rotate(pattern: &Pattern, dir: RotationDir) -> Pattern {
    let n = pattern.size();
    let mut out = *pattern;

    for r in 0..n {
        for c in 0..r {
            let a = out.get(r, c);
            let b = out.get(c, r);
            out.set(r, c, b);
            out.set(c, r, a);
        }
    }

    let transposed = out;
    for r in 0..n {
        for c in 0..n {
            let value = match dir {
                RotationDir::Cw => transposed.get(r, n - 1 - c),
                RotationDir::Ccw => transposed.get(n - 1 - r, c),
            };
            out.set(r, c, value);
        }
    }

    out
}

/// Apply `turns` clockwise quarter turns (taken modulo 4)
pub fn rotate_times(pattern: &Pattern, turns: u8) -> Pattern {
    (0..turns % 4).fold(*pattern, |p, _| rotate(&p, RotationDir::Cw))
}

/// Orient a catalog pattern to a rotation state
pub fn oriented(pattern: &Pattern, rotation: Rotation) -> Pattern {
    rotate_times(pattern, rotation.index())
}
