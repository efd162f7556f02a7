use std::fmt;

/// Operator-facing tally of one run.
#[derive(Debug, Default, Clone, Copy)]
pub struct Summary {
    pub pages: usize,
    pub accepted: usize,
    pub required_missing: usize,
    pub heuristic_rejected: usize,
    pub read_failed: usize,
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} pages processed", self.pages)?;
        writeln!(f, "  accepted:            {}", self.accepted)?;
        writeln!(f, "  missing a required field: {}", self.required_missing)?;
        writeln!(f, "  rejected by heuristics:   {}", self.heuristic_rejected)?;
        write!(f, "  unreadable:          {}", self.read_failed)
    }
}
