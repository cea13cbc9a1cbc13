//! Piece catalog and rotation tests

use blockfall::core::pieces::{kind_for_symbol, kind_for_value, pattern_for_symbol};
use blockfall::core::rotation::{oriented, rotate};
use blockfall::core::{pattern_for, CoreError, Pattern};
use blockfall::types::{PieceKind, Rotation, RotationDir};

#[test]
fn test_catalog_sizes_and_values() {
    for kind in PieceKind::ALL {
        let pattern = pattern_for(kind);
        let expected_size = match kind {
            PieceKind::I => 4,
            PieceKind::O => 2,
            _ => 3,
        };
        assert_eq!(pattern.size(), expected_size, "{kind:?}");

        let cells = pattern.occupied();
        assert_eq!(cells.len(), 4, "{kind:?} should have four cells");
        assert!(cells.iter().all(|&(_, _, v)| v == kind.value()));
    }
}

#[test]
fn test_symbol_lookup() {
    assert_eq!(kind_for_symbol('T'), Ok(PieceKind::T));
    assert_eq!(kind_for_symbol('s'), Ok(PieceKind::S));
    assert_eq!(kind_for_symbol('X'), Err(CoreError::UnknownPieceType('X')));
    assert_eq!(kind_for_value(4), Ok(PieceKind::O));
    assert_eq!(kind_for_value(9), Err(CoreError::UnknownPieceValue(9)));
    assert_eq!(pattern_for_symbol('i').unwrap(), pattern_for(PieceKind::I));
}

#[test]
fn test_t_rotates_clockwise() {
    let t = pattern_for(PieceKind::T);
    assert_eq!(
        rotate(&t, RotationDir::Cw).to_rows(),
        vec![vec![0, 7, 0], vec![0, 7, 7], vec![0, 7, 0]]
    );
    assert_eq!(
        rotate(&t, RotationDir::Ccw).to_rows(),
        vec![vec![0, 7, 0], vec![7, 7, 0], vec![0, 7, 0]]
    );
}

#[test]
fn test_rotation_is_a_four_cycle() {
    for kind in PieceKind::ALL {
        let p = pattern_for(kind);
        for dir in [RotationDir::Cw, RotationDir::Ccw] {
            let turned = (0..4).fold(p, |acc, _| rotate(&acc, dir));
            assert_eq!(turned, p, "{kind:?} {dir:?}");
        }
        assert_eq!(rotate(&rotate(&p, RotationDir::Cw), RotationDir::Ccw), p);
    }
}

#[test]
fn test_oriented_matches_repeated_turns() {
    let l = pattern_for(PieceKind::L);
    let twice = rotate(&rotate(&l, RotationDir::Cw), RotationDir::Cw);
    assert_eq!(oriented(&l, Rotation::South), twice);
    assert_eq!(oriented(&l, Rotation::North), l);
}

#[test]
fn test_custom_pattern_validation() {
    assert!(Pattern::from_rows(&[vec![1u8, 1], vec![1, 1]]).is_ok());
    assert_eq!(
        Pattern::from_rows(&[vec![1u8, 1, 0], vec![1, 1, 0]]),
        Err(CoreError::NonSquarePattern { rows: 2, cols: 3 })
    );
    let big: Vec<Vec<u8>> = vec![vec![0; 5]; 5];
    assert_eq!(Pattern::from_rows(&big), Err(CoreError::PatternTooLarge(5)));
}
