/// Outcome of the `list` command
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListReport {
    /// Number of dependencies declared in the manifest
    pub total: usize,
    /// Number of declared dependencies without a justification
    pub unexplained: usize,
}

/// Outcome of the `clean` command
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CleanReport {
    /// Store keys removed because they are no longer declared
    pub removed: Vec<String>,
}

/// Outcome of the `update` command
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateReport {
    /// Dependency names given an empty placeholder justification
    pub added: Vec<String>,
}
