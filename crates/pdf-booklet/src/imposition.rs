//! Column imposition
//!
//! Maps the twelve reading-order columns of a column set onto the six
//! physical slots of each side of a sheet. Printed duplex and folded, the
//! sheet then reads column 0, 1, 2, ... 11 in order.
//!
//! ```text
//! Front: slot 0  1  2  3  4  5
//!        col  0  2  4  6  8  10
//!
//! Back:  slot 0  1  2  3  4  5
//!        col  11 9  7  5  3  1
//! ```
//!
//! The permutation is fixed. Any other order breaks the collation of the
//! folded booklet.

use crate::constants::{COLUMNS_PER_SET, SLOTS_PER_SIDE};
use crate::layout::{ColumnSet, ConceptualColumn};

/// Conceptual column printed in each front slot, left to right
pub const FRONT_COLUMN_ORDER: [usize; SLOTS_PER_SIDE] = [0, 2, 4, 6, 8, 10];

/// Conceptual column printed in each back slot, left to right
pub const BACK_COLUMN_ORDER: [usize; SLOTS_PER_SIDE] = [11, 9, 7, 5, 3, 1];

/// Which physical side of the printed sheet
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SheetSide {
    /// Front of the sheet (printed first in duplex)
    Front,
    /// Back of the sheet (printed second in duplex)
    Back,
}

impl SheetSide {
    pub const BOTH: [SheetSide; 2] = [SheetSide::Front, SheetSide::Back];
}

/// A conceptual column assigned to a physical slot
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SlotAssignment<'a> {
    pub slot: usize,
    pub column_index: usize,
    pub column: &'a ConceptualColumn,
}

/// Column order for one side of the sheet
pub fn column_order(side: SheetSide) -> [usize; SLOTS_PER_SIDE] {
    match side {
        SheetSide::Front => FRONT_COLUMN_ORDER,
        SheetSide::Back => BACK_COLUMN_ORDER,
    }
}

/// Slot assignments for one side of the sheet, in slot order
pub fn impose_side(set: &ColumnSet, side: SheetSide) -> [SlotAssignment<'_>; SLOTS_PER_SIDE] {
    let order = column_order(side);
    std::array::from_fn(|slot| SlotAssignment {
        slot,
        column_index: order[slot],
        column: &set.columns[order[slot]],
    })
}

/// Side and slot where a conceptual column is printed
pub fn physical_position(column_index: usize) -> Option<(SheetSide, usize)> {
    if column_index >= COLUMNS_PER_SET {
        return None;
    }
    SheetSide::BOTH.into_iter().find_map(|side| {
        column_order(side)
            .iter()
            .position(|&c| c == column_index)
            .map(|slot| (side, slot))
    })
}
