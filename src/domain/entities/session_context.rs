use once_cell::sync::Lazy;
use parking_lot::Mutex;

// Mutex: taken just long enough to clone or replace the slot.
static CURRENT_SESSION_CONTEXT: Lazy<Mutex<Option<SessionContext>>> =
    Lazy::new(|| Mutex::new(None));

/// Session handle reconstructed from a context token delivered alongside a
/// gaming payload.
///
/// This crate only carries the token; everything else about the session lives
/// with the host. The current context is process-wide and is replaced
/// wholesale whenever a launch event delivers a new token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionContext {
    context_token_id: String,
}

impl SessionContext {
    pub fn new(context_token_id: &str) -> Self {
        Self {
            context_token_id: context_token_id.to_string(),
        }
    }

    pub fn context_token_id(&self) -> &str {
        &self.context_token_id
    }

    /// The process-wide current session context, if one has been installed.
    pub fn current() -> Option<SessionContext> {
        CURRENT_SESSION_CONTEXT.lock().clone()
    }

    /// Installs `context` as the process-wide current session context,
    /// replacing any previous one.
    pub fn set_current(context: SessionContext) {
        *CURRENT_SESSION_CONTEXT.lock() = Some(context);
    }
}

// Tests touching the process-wide slot serialize on this lock so parallel
// test runs don't observe each other's contexts.
#[cfg(test)]
pub(crate) fn current_slot_test_lock() -> parking_lot::MutexGuard<'static, ()> {
    static TEST_LOCK: Lazy<Mutex<()>> = Lazy::new(|| Mutex::new(()));
    TEST_LOCK.lock()
}
