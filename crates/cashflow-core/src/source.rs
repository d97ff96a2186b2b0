use cashflow_domain::CashflowDocument;

use crate::CoreError;

/// Abstraction over collaborators that supply the entries and opening balance.
///
/// Implementations validate eagerly: a returned document is always well formed.
pub trait EntrySource: Send + Sync {
    fn load_document(&self) -> Result<CashflowDocument, CoreError>;

    /// Human-readable origin used in logs and error messages.
    fn describe(&self) -> String;
}
