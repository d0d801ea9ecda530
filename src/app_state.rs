//! Implements a struct that holds the shared state of the server.

use std::sync::{Arc, Mutex};

use crate::{activity::ActivityLog, ledger::Ledger};

/// The state shared between the server's route handlers.
///
/// The ledger and activity log live in process memory for the lifetime of
/// the server; backups are the only way state crosses sessions. Cloning is
/// cheap, the stores are shared behind [Arc]s.
#[derive(Debug, Clone, Default)]
pub struct AppState {
    /// The session ledger holding all transactions.
    pub ledger: Arc<Mutex<Ledger>>,
    /// The session activity log.
    pub activity: Arc<Mutex<ActivityLog>>,
}
