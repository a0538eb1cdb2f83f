//! The fixed column-mapping rule set.
//!
//! All ranges are data, not inline arithmetic, so they can be tested and
//! swapped without touching row materialization. Mapping is purely
//! positional; the single passthrough field is the only header-name lookup.

/// Target column that receives the auto-generated 1-based sequence number.
pub const SEQUENCE_COLUMN: u32 = 1;

/// Target column that receives the passthrough field.
pub const PASSTHROUGH_COLUMN: u32 = 2;

/// Source header of the passthrough field ("source detail"). When the source
/// has no such header, column 2 is left as cleared rather than written.
pub const PASSTHROUGH_HEADER: &str = "来源详情";

/// Only the first three worksheets of a template are mapped; any further
/// sheets pass through untouched.
pub const MAPPED_SHEET_COUNT: usize = 3;

/// Residual-value guard: each written row is pre-cleared from column 2 up to
/// at least this column, so stale template example data cannot leak into the
/// output even when the sheet under-reports its width.
pub const CLEAR_COLUMN_FLOOR: u32 = 50;

/// A contiguous-range positional copy: `width` source columns starting at
/// `source_start` (0-based) land on `width` target columns starting at
/// `target_start` (1-based).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockRule {
    pub source_start: usize,
    pub width: usize,
    pub target_start: u32,
}

impl BlockRule {
    /// Last target column written by this block (1-based, inclusive).
    pub fn target_end(&self) -> u32 {
        self.target_start + self.width as u32 - 1
    }
}

// Sheet 0: source R-U -> C-F, source H-Q -> G-P.
const SHEET_0_BLOCKS: &[BlockRule] = &[
    BlockRule {
        source_start: 17,
        width: 4,
        target_start: 3,
    },
    BlockRule {
        source_start: 7,
        width: 10,
        target_start: 7,
    },
];

// Sheet 1: source V-AE -> C-L.
const SHEET_1_BLOCKS: &[BlockRule] = &[BlockRule {
    source_start: 21,
    width: 10,
    target_start: 3,
}];

// Sheet 2: source AF-AK -> C-H.
const SHEET_2_BLOCKS: &[BlockRule] = &[BlockRule {
    source_start: 31,
    width: 6,
    target_start: 3,
}];

/// Block rules for a target sheet index. Sheets beyond the mapped range have
/// no rules.
pub fn blocks_for_sheet(sheet_index: usize) -> &'static [BlockRule] {
    match sheet_index {
        0 => SHEET_0_BLOCKS,
        1 => SHEET_1_BLOCKS,
        2 => SHEET_2_BLOCKS,
        _ => &[],
    }
}
