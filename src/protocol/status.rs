//! Status report parsing
//!
//! Extracts connected player slots from the free-form text a `status`
//! command returns.
//!
//! The report is a header plus one fixed-width row per player; the slot
//! number sits in the first column, right after a single leading space and
//! padded with spaces to the column width. Everything else in the row
//! (score, ping, name, address) is ignored here.

use regex::Regex;

/// Parses player rows out of a truncated status report
#[derive(Debug)]
pub struct StatusParser {
    row: Regex,
}

/// One leading space, a 1-2 digit slot, then the space run padding the
/// fixed-width slot column (two-digit slots carry one pad space less).
const PLAYER_ROW: &str = r"^ (\d{1,2}) {4,}";

impl StatusParser {
    pub fn new() -> Self {
        Self {
            row: Regex::new(PLAYER_ROW).expect("player row pattern compiles"),
        }
    }

    /// Extract slot indices from a status report, in row order
    ///
    /// A report with fewer than two lines cannot contain a player table and
    /// is treated as "no players" rather than matched line by line. A row
    /// whose capture fails integer conversion is skipped, never fatal.
    pub fn player_slots(&self, report: &str) -> Vec<u8> {
        if report.lines().count() < 2 {
            return Vec::new();
        }

        report
            .lines()
            .filter_map(|line| self.row.captures(line))
            .filter_map(|captures| captures[1].parse::<u8>().ok())
            .collect()
    }
}

impl Default for StatusParser {
    fn default() -> Self {
        Self::new()
    }
}
