//! Built-in level data: 0 = path, 1 = wall, 2 = start, 3 = exit.

use super::GridLevel;

// Level 1 - simple 8x8 maze
const LEVEL_1: &[&[u8]] = &[
    &[1, 1, 1, 1, 1, 1, 1, 1],
    &[1, 2, 0, 1, 0, 0, 0, 1],
    &[1, 0, 0, 1, 0, 1, 0, 1],
    &[1, 1, 0, 0, 0, 1, 0, 1],
    &[1, 0, 0, 1, 1, 1, 0, 1],
    &[1, 0, 1, 1, 0, 0, 0, 1],
    &[1, 0, 0, 0, 0, 1, 3, 1],
    &[1, 1, 1, 1, 1, 1, 1, 1],
];

// Level 2 - 10x10 with multiple dead ends
const LEVEL_2: &[&[u8]] = &[
    &[1, 1, 1, 1, 1, 1, 1, 1, 1, 1],
    &[1, 2, 0, 1, 0, 0, 0, 1, 0, 1],
    &[1, 0, 0, 1, 0, 1, 0, 1, 0, 1],
    &[1, 1, 0, 0, 0, 1, 0, 0, 0, 1],
    &[1, 0, 0, 1, 1, 1, 1, 1, 0, 1],
    &[1, 0, 1, 1, 0, 0, 0, 0, 0, 1],
    &[1, 0, 0, 0, 0, 1, 0, 1, 1, 1],
    &[1, 1, 1, 1, 0, 1, 0, 0, 0, 1],
    &[1, 0, 0, 0, 0, 1, 1, 1, 3, 1],
    &[1, 1, 1, 1, 1, 1, 1, 1, 1, 1],
];

// Level 3 - 12x12 with tricky dead ends
const LEVEL_3: &[&[u8]] = &[
    &[1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1],
    &[1, 2, 0, 1, 0, 0, 0, 1, 0, 0, 0, 1],
    &[1, 0, 0, 1, 0, 1, 0, 1, 0, 1, 0, 1],
    &[1, 1, 0, 0, 0, 1, 0, 0, 0, 1, 0, 1],
    &[1, 0, 0, 1, 1, 1, 1, 1, 0, 1, 0, 1],
    &[1, 0, 1, 1, 0, 0, 0, 1, 0, 0, 0, 1],
    &[1, 0, 0, 0, 0, 1, 0, 0, 0, 1, 0, 1],
    &[1, 1, 1, 1, 0, 1, 1, 1, 1, 1, 0, 1],
    &[1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1],
    &[1, 0, 1, 1, 1, 1, 0, 1, 1, 1, 1, 1],
    &[1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 3, 1],
    &[1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1],
];

// Level 4 - 14x14 with narrow corridors
const LEVEL_4: &[&[u8]] = &[
    &[1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1],
    &[1, 2, 0, 1, 0, 0, 0, 1, 0, 0, 0, 1, 0, 1],
    &[1, 0, 0, 1, 0, 1, 0, 1, 0, 1, 0, 0, 0, 1],
    &[1, 1, 0, 0, 0, 1, 0, 0, 0, 1, 1, 1, 0, 1],
    &[1, 0, 0, 1, 1, 1, 1, 1, 0, 0, 0, 0, 0, 1],
    &[1, 0, 1, 1, 0, 0, 0, 1, 1, 1, 1, 1, 0, 1],
    &[1, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 1, 0, 1],
    &[1, 1, 1, 1, 0, 1, 1, 1, 1, 1, 0, 0, 0, 1],
    &[1, 0, 0, 0, 0, 0, 0, 0, 0, 1, 1, 1, 0, 1],
    &[1, 0, 1, 1, 1, 1, 0, 1, 0, 0, 0, 0, 0, 1],
    &[1, 0, 0, 0, 0, 1, 0, 1, 1, 1, 1, 1, 0, 1],
    &[1, 1, 1, 1, 0, 1, 0, 0, 0, 0, 0, 1, 0, 1],
    &[1, 0, 0, 0, 0, 1, 1, 1, 1, 1, 0, 0, 3, 1],
    &[1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1],
];

// Level 5 - 16x16 complex maze
const LEVEL_5: &[&[u8]] = &[
    &[1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1],
    &[1, 2, 0, 1, 0, 0, 0, 1, 0, 0, 0, 1, 0, 0, 0, 1],
    &[1, 0, 0, 1, 0, 1, 0, 1, 0, 1, 0, 1, 0, 1, 0, 1],
    &[1, 1, 0, 0, 0, 1, 0, 0, 0, 1, 0, 0, 0, 1, 0, 1],
    &[1, 0, 0, 1, 1, 1, 1, 1, 0, 1, 1, 1, 1, 1, 0, 1],
    &[1, 0, 1, 1, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 1],
    &[1, 0, 0, 0, 0, 1, 0, 0, 0, 1, 1, 1, 1, 1, 0, 1],
    &[1, 1, 1, 1, 0, 1, 1, 1, 1, 1, 0, 0, 0, 1, 0, 1],
    &[1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 1],
    &[1, 0, 1, 1, 1, 1, 0, 1, 1, 1, 1, 1, 1, 1, 0, 1],
    &[1, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 1, 0, 1],
    &[1, 1, 1, 1, 0, 1, 1, 1, 1, 1, 1, 1, 0, 1, 0, 1],
    &[1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 1],
    &[1, 0, 1, 1, 1, 1, 1, 1, 1, 1, 0, 1, 1, 1, 0, 1],
    &[1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 3, 1],
    &[1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1],
];

// Level 6 - 18x18, lots of dead ends
const LEVEL_6: &[&[u8]] = &[
    &[1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1],
    &[1, 2, 0, 1, 0, 0, 0, 1, 0, 0, 0, 1, 0, 0, 0, 1, 0, 1],
    &[1, 0, 0, 1, 0, 1, 0, 1, 0, 1, 0, 1, 0, 1, 0, 1, 0, 1],
    &[1, 1, 0, 0, 0, 1, 0, 0, 0, 1, 0, 0, 0, 1, 0, 0, 0, 1],
    &[1, 0, 0, 1, 1, 1, 1, 1, 0, 1, 1, 1, 1, 1, 1, 1, 0, 1],
    &[1, 0, 1, 1, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1],
    &[1, 0, 0, 0, 0, 1, 0, 0, 0, 1, 1, 1, 1, 1, 1, 1, 0, 1],
    &[1, 1, 1, 1, 0, 1, 1, 1, 1, 1, 0, 0, 0, 0, 0, 1, 0, 1],
    &[1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 1, 1, 0, 0, 0, 1],
    &[1, 0, 1, 1, 1, 1, 0, 1, 1, 1, 1, 1, 0, 1, 1, 1, 0, 1],
    &[1, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 1],
    &[1, 1, 1, 1, 0, 1, 1, 1, 1, 1, 1, 1, 1, 1, 0, 1, 0, 1],
    &[1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 1],
    &[1, 0, 1, 1, 1, 1, 0, 1, 1, 1, 1, 1, 0, 1, 1, 1, 0, 1],
    &[1, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 1, 0, 0, 0, 1, 0, 1],
    &[1, 1, 1, 1, 0, 1, 1, 1, 1, 1, 0, 1, 1, 1, 0, 1, 0, 1],
    &[1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 3, 1],
    &[1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1],
];

/// The six shipped levels, in play order
pub fn builtin() -> Vec<GridLevel> {
    [LEVEL_1, LEVEL_2, LEVEL_3, LEVEL_4, LEVEL_5, LEVEL_6]
        .into_iter()
        .filter_map(GridLevel::from_rows)
        .collect()
}
