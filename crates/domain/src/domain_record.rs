use serde::{Deserialize, Serialize};

/// Which side of the `domainlist` table an import targets.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ListAction {
    #[default]
    Allow,
    Deny,
}

impl ListAction {
    pub fn to_str(&self) -> &'static str {
        match self {
            ListAction::Allow => "allow",
            ListAction::Deny => "deny",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "allow" => Some(ListAction::Allow),
            "deny" => Some(ListAction::Deny),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DomainKind {
    Exact,
    Regex,
}

impl DomainKind {
    /// Integer stored in `domainlist.type`.
    ///
    /// | action | exact | regex |
    /// |--------|-------|-------|
    /// | allow  | 0     | 2     |
    /// | deny   | 1     | 3     |
    pub fn type_code(&self, action: ListAction) -> i64 {
        match (action, self) {
            (ListAction::Allow, DomainKind::Exact) => 0,
            (ListAction::Deny, DomainKind::Exact) => 1,
            (ListAction::Allow, DomainKind::Regex) => 2,
            (ListAction::Deny, DomainKind::Regex) => 3,
        }
    }
}

/// One normalized list entry, ready to be reconciled against `domainlist`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DomainRecord {
    domain: String,
    kind: DomainKind,
    comment: String,
}

impl DomainRecord {
    /// Returns `None` when the domain is empty after trimming.
    pub fn new(domain: &str, kind: DomainKind, comment: &str) -> Option<Self> {
        let domain = domain.trim();
        if domain.is_empty() {
            return None;
        }
        Some(Self {
            domain: domain.to_string(),
            kind,
            comment: comment.to_string(),
        })
    }

    pub fn domain(&self) -> &str {
        &self.domain
    }

    pub fn kind(&self) -> DomainKind {
        self.kind
    }

    pub fn comment(&self) -> &str {
        &self.comment
    }
}

/// Records produced by one normalization pass, in source order.
pub type ImportBatch = Vec<DomainRecord>;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ImportSummary {
    pub added: usize,
    pub existing: usize,
}
