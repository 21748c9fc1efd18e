//! Host lifecycle hooks and the scoped transaction around an operation.

/// Services the embedding application provides to an operation.
///
/// `begin_transaction`/`commit`/`rollback` map to the host's undo grouping;
/// `report_error` is its message channel. Progress is advisory only.
pub trait Host {
    fn progress(&mut self, fraction: f64);

    fn begin_transaction(&mut self);

    fn commit(&mut self);

    fn rollback(&mut self);

    fn report_error(&mut self, message: &str);
}

/// A host that forwards every hook to `tracing`.
#[derive(Clone, Debug, Default)]
pub struct TracingHost {
    label: String,
}

impl TracingHost {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
        }
    }
}

impl Host for TracingHost {
    fn progress(&mut self, fraction: f64) {
        tracing::trace!(label = %self.label, fraction, "progress");
    }

    fn begin_transaction(&mut self) {
        tracing::debug!(label = %self.label, "begin transaction");
    }

    fn commit(&mut self) {
        tracing::debug!(label = %self.label, "commit");
    }

    fn rollback(&mut self) {
        tracing::warn!(label = %self.label, "rollback");
    }

    fn report_error(&mut self, message: &str) {
        tracing::error!(label = %self.label, "{message}");
    }
}

/// An open host transaction.
///
/// Dropping it without [`Transaction::commit`] rolls back, so every early
/// return and `?` path releases the transaction.
pub struct Transaction<'h, H: Host> {
    host: &'h mut H,
    committed: bool,
}

impl<'h, H: Host> Transaction<'h, H> {
    pub fn begin(host: &'h mut H) -> Self {
        host.begin_transaction();
        Self {
            host,
            committed: false,
        }
    }

    pub fn host(&mut self) -> &mut H {
        self.host
    }

    pub fn commit(mut self) {
        self.host.commit();
        self.committed = true;
    }
}

impl<H: Host> Drop for Transaction<'_, H> {
    fn drop(&mut self) {
        if !self.committed {
            self.host.rollback();
        }
    }
}
