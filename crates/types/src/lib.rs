//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the workspace.
//! All types are plain data with no game logic, making them usable from the
//! engine, the terminal view and the input mapping alike.
//!
//! # Grid Dimensions
//!
//! The default playfield is 10 columns by 20 rows. Both are configurable per
//! session; these constants only provide the defaults.
//!
//! # Timing
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `FRAME_MS` | 16 | Frame interval of the terminal loop (~60 FPS) |
//! | `BASE_DROP_MS` | 1000 | Base of the gravity formula |
//! | `LEVEL_LINE_THRESHOLD` | 1 | Lines per lock step needed to level up |
//!
//! The fall interval at level `n` is `BASE_DROP_MS / (n * 0.5)`:
//!
//! | Level | Interval |
//! |-------|----------|
//! | 1 | 2000ms |
//! | 2 | 1000ms |
//! | 3 | 666ms |
//! | 4 | 500ms |
//!
//! # Examples
//!
//! ```
//! use blockfall_types::{PieceKind, Rotation, DEFAULT_WIDTH, DEFAULT_HEIGHT};
//!
//! let piece = PieceKind::from_symbol('t').unwrap();
//! assert_eq!(piece, PieceKind::T);
//! assert_eq!(piece.value(), 7);
//!
//! assert_eq!(Rotation::North.rotate_cw(), Rotation::East);
//!
//! assert_eq!(DEFAULT_WIDTH, 10);
//! assert_eq!(DEFAULT_HEIGHT, 20);
//! ```

use serde::{Deserialize, Serialize};

/// Default grid width in cells
pub const DEFAULT_WIDTH: usize = 10;

/// Default grid height in cells
pub const DEFAULT_HEIGHT: usize = 20;

/// Frame interval of the interactive loop in milliseconds
pub const FRAME_MS: u32 = 16;

/// Base of the gravity formula (milliseconds)
pub const BASE_DROP_MS: f64 = 1000.0;

/// Lines that a single lock step has to clear to advance the level
pub const LEVEL_LINE_THRESHOLD: u32 = 1;

/// Level a fresh game starts at
pub const START_LEVEL: u32 = 1;

/// Heuristic weight applied to the aggregate column height
pub const HEIGHT_WEIGHT: i32 = -1;

/// Heuristic weight applied to completed lines
pub const LINES_WEIGHT: i32 = 1;

/// Heuristic weight applied to holes
pub const HOLES_WEIGHT: i32 = -1;

/// Line clear scoring table (Classic Nintendo scoring)
///
/// Base points for clearing N lines in one lock step, multiplied by the level.
pub const LINE_SCORES: [u32; 5] = [0, 40, 100, 300, 1200];

/// A grid or pattern cell.
///
/// `0` is empty; `1..=7` is the [`PieceKind::value`] of the piece that filled it.
pub type Cell = u8;

/// Empty cell value
pub const EMPTY: Cell = 0;

/// The seven piece kinds
///
/// Each kind carries a stable cell value (its palette index):
/// I=1, L=2, J=3, O=4, Z=5, S=6, T=7.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PieceKind {
    I,
    L,
    J,
    O,
    Z,
    S,
    T,
}

impl PieceKind {
    /// All kinds in cell-value order
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::L,
        PieceKind::J,
        PieceKind::O,
        PieceKind::Z,
        PieceKind::S,
        PieceKind::T,
    ];

    /// Parse a piece kind from its letter (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use blockfall_types::PieceKind;
    ///
    /// assert_eq!(PieceKind::from_symbol('i'), Some(PieceKind::I));
    /// assert_eq!(PieceKind::from_symbol('O'), Some(PieceKind::O));
    /// assert_eq!(PieceKind::from_symbol('x'), None);
    /// ```
    pub fn from_symbol(c: char) -> Option<Self> {
        match c.to_ascii_uppercase() {
            'I' => Some(PieceKind::I),
            'L' => Some(PieceKind::L),
            'J' => Some(PieceKind::J),
            'O' => Some(PieceKind::O),
            'Z' => Some(PieceKind::Z),
            'S' => Some(PieceKind::S),
            'T' => Some(PieceKind::T),
            _ => None,
        }
    }

    /// Look up the kind that owns a nonzero cell value
    pub fn from_value(value: Cell) -> Option<Self> {
        match value {
            1..=7 => Some(Self::ALL[value as usize - 1]),
            _ => None,
        }
    }

    /// Cell value written into the grid for this kind
    pub fn value(self) -> Cell {
        match self {
            PieceKind::I => 1,
            PieceKind::L => 2,
            PieceKind::J => 3,
            PieceKind::O => 4,
            PieceKind::Z => 5,
            PieceKind::S => 6,
            PieceKind::T => 7,
        }
    }

    /// Uppercase letter of the kind
    pub fn symbol(self) -> char {
        match self {
            PieceKind::I => 'I',
            PieceKind::L => 'L',
            PieceKind::J => 'J',
            PieceKind::O => 'O',
            PieceKind::Z => 'Z',
            PieceKind::S => 'S',
            PieceKind::T => 'T',
        }
    }

    /// Fill colour of this kind
    pub fn color(self) -> Rgb {
        PALETTE[self.value() as usize - 1]
    }
}

/// Rotation states, counted in clockwise quarter turns from the catalog layout
///
/// - **North**: catalog orientation (index 0)
/// - **East**: one clockwise turn (index 1)
/// - **South**: two turns (index 2)
/// - **West**: three clockwise turns, or one counter-clockwise (index 3)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Rotation {
    #[default]
    North,
    East,
    South,
    West,
}

impl Rotation {
    /// Build a rotation from any index, wrapping modulo 4
    ///
    /// ```
    /// use blockfall_types::Rotation;
    ///
    /// assert_eq!(Rotation::from_index(1), Rotation::East);
    /// assert_eq!(Rotation::from_index(6), Rotation::South);
    /// ```
    pub fn from_index(index: u8) -> Self {
        match index % 4 {
            0 => Rotation::North,
            1 => Rotation::East,
            2 => Rotation::South,
            _ => Rotation::West,
        }
    }

    /// Index in `0..4`
    pub fn index(self) -> u8 {
        match self {
            Rotation::North => 0,
            Rotation::East => 1,
            Rotation::South => 2,
            Rotation::West => 3,
        }
    }

    /// Rotate clockwise (90°)
    pub fn rotate_cw(self) -> Self {
        Self::from_index(self.index() + 1)
    }

    /// Rotate counter-clockwise (-90°)
    pub fn rotate_ccw(self) -> Self {
        Self::from_index(self.index() + 3)
    }

    /// Step in the given direction
    pub fn turn(self, dir: RotationDir) -> Self {
        match dir {
            RotationDir::Cw => self.rotate_cw(),
            RotationDir::Ccw => self.rotate_ccw(),
        }
    }
}

/// Direction of a quarter turn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RotationDir {
    /// Clockwise (+1)
    Cw,
    /// Counter-clockwise (-1)
    Ccw,
}

/// Game actions that can be applied to modify game state
///
/// Used by both human input and the autoplayer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Move piece one cell left
    MoveLeft,
    /// Move piece one cell right
    MoveRight,
    /// Drop piece one cell down (locks it when blocked)
    SoftDrop,
    /// Drop piece until it locks
    HardDrop,
    /// Rotate piece 90° clockwise
    RotateCw,
    /// Rotate piece 90° counter-clockwise
    RotateCcw,
    /// Toggle pause state
    Pause,
    /// Start a fresh game
    Restart,
}

/// 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Piece palette, indexed by `cell value - 1`
pub const PALETTE: [Rgb; 7] = [
    Rgb::new(0x3a, 0xdd, 0xbe), // I
    Rgb::new(0xf2, 0xa9, 0x00), // L
    Rgb::new(0x00, 0x52, 0xff), // J
    Rgb::new(0xdf, 0xc6, 0x6d), // O
    Rgb::new(0xec, 0x1c, 0x24), // Z
    Rgb::new(0x00, 0x93, 0x93), // S
    Rgb::new(0x69, 0x41, 0xc6), // T
];

/// Fill colour for a cell value; `None` means no fill.
///
/// ```
/// use blockfall_types::{color_for, Rgb};
///
/// assert_eq!(color_for(0), None);
/// assert_eq!(color_for(1), Some(Rgb::new(0x3a, 0xdd, 0xbe)));
/// assert_eq!(color_for(42), None);
/// ```
pub fn color_for(value: Cell) -> Option<Rgb> {
    PieceKind::from_value(value).map(PieceKind::color)
}
