use std::fmt;

/// Why an extraction produced no record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuditTag {
    /// A mandatory field extraction failed.
    Required,
    /// A heuristic rejected an otherwise-valid record.
    Heuristic,
}

impl AuditTag {
    pub fn as_str(&self) -> &'static str {
        match self {
            AuditTag::Required => "[required]",
            AuditTag::Heuristic => "[heuristic]",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuditEvent {
    pub tag: AuditTag,
    pub message: String,
}

impl fmt::Display for AuditEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.tag.as_str(), self.message)
    }
}

/// Deferred audit trail for one document.
///
/// Extractors and the heuristic gate push events here instead of writing to
/// any shared sink, so concurrent workers stay deterministic and testable;
/// the collector flushes each log to the line-oriented audit file afterwards.
#[derive(Debug, Default)]
pub struct AuditLog {
    events: Vec<AuditEvent>,
}

impl AuditLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn required(&mut self, message: impl Into<String>) {
        self.events.push(AuditEvent {
            tag: AuditTag::Required,
            message: message.into(),
        });
    }

    pub fn heuristic(&mut self, message: impl Into<String>) {
        self.events.push(AuditEvent {
            tag: AuditTag::Heuristic,
            message: message.into(),
        });
    }

    pub fn events(&self) -> &[AuditEvent] {
        &self.events
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}
