//! Static cost documentation for a store's operations.
//!
//! These tables are fixed text written alongside each store; nothing here is
//! measured.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ComplexityEntry {
    pub operation: &'static str,
    pub cost: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ComplexityReport {
    pub title: &'static str,
    pub entries: &'static [ComplexityEntry],
}

impl ComplexityReport {
    pub fn cost_of(&self, operation: &str) -> Option<&'static str> {
        self.entries
            .iter()
            .find(|e| e.operation == operation)
            .map(|e| e.cost)
    }
}

impl fmt::Display for ComplexityReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}:", self.title)?;
        for entry in self.entries {
            writeln!(f, "{}: {}", entry.operation, entry.cost)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const REPORT: ComplexityReport = ComplexityReport {
        title: "Costs",
        entries: &[
            ComplexityEntry {
                operation: "Insert",
                cost: "O(1)",
            },
            ComplexityEntry {
                operation: "Scan",
                cost: "O(n)",
            },
        ],
    };

    #[test]
    fn renders_one_line_per_entry() {
        assert_eq!(REPORT.to_string(), "Costs:\nInsert: O(1)\nScan: O(n)\n");
        assert_eq!(REPORT.cost_of("Scan"), Some("O(n)"));
        assert_eq!(REPORT.cost_of("Delete"), None);
    }
}
