use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProcessAction {
    Aprobar,
    Rechazar,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProcessEntry {
    pub entry_id: String,
    /// Acting manager/director/admin, from the authenticated caller.
    pub processed_by: String,
    pub action: ProcessAction,
    pub reason: Option<String>,
}
