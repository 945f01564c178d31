use std::fmt;

/// Replica role a query is routed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TabletType {
    /// Read-write primary (formerly "master")
    #[default]
    Primary,
    /// Serving replica, eligible for promotion
    Replica,
    /// Read-only replica for batch and analytics traffic
    Rdonly,
}

impl TabletType {
    pub fn as_str(&self) -> &'static str {
        match self {
            TabletType::Primary => "primary",
            TabletType::Replica => "replica",
            TabletType::Rdonly => "rdonly",
        }
    }
}

impl fmt::Display for TabletType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
