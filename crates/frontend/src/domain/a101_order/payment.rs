//! Payment gate: committing any new row across the three line-item tables
//! unlocks the payment confirmation dialog. The gate is single-shot per
//! batch of additions: once the dialog is confirmed or abandoned, the
//! "new rows pending payment" signal resets.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PaymentGate {
    enabled: bool,
    dialog_open: bool,
}

impl PaymentGate {
    pub fn enabled(&self) -> bool {
        self.enabled
    }

    pub fn dialog_open(&self) -> bool {
        self.dialog_open
    }

    /// Called whenever a row collection commits a draft.
    pub fn notify_rows_committed(&mut self) {
        self.enabled = true;
    }

    /// No-op unless the gate is enabled.
    pub fn open_dialog(&mut self) {
        if self.enabled {
            self.dialog_open = true;
        }
    }

    pub fn confirm(&mut self) {
        self.reset();
    }

    /// Cancelling behaves exactly like confirming: both close the dialog and
    /// disarm the gate until the next committed row.
    pub fn cancel(&mut self) {
        self.reset();
    }

    fn reset(&mut self) {
        self.dialog_open = false;
        self.enabled = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_disabled_and_closed() {
        let gate = PaymentGate::default();
        assert!(!gate.enabled());
        assert!(!gate.dialog_open());
    }

    #[test]
    fn test_open_dialog_requires_enabled_gate() {
        let mut gate = PaymentGate::default();
        gate.open_dialog();
        assert!(!gate.dialog_open());

        gate.notify_rows_committed();
        gate.open_dialog();
        assert!(gate.dialog_open());
    }

    #[test]
    fn test_confirm_resets_gate() {
        let mut gate = PaymentGate::default();
        gate.notify_rows_committed();
        gate.open_dialog();
        gate.confirm();
        assert!(!gate.dialog_open());
        assert!(!gate.enabled());
        // single-shot: reopening without a new commit is a no-op
        gate.open_dialog();
        assert!(!gate.dialog_open());
    }

    #[test]
    fn test_cancel_also_resets_gate() {
        let mut gate = PaymentGate::default();
        gate.notify_rows_committed();
        gate.open_dialog();
        gate.cancel();
        assert!(!gate.dialog_open());
        assert!(!gate.enabled());
    }
}
