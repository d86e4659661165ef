//! Side effects triggered from the showcase screen.
//!
//! Three fire-and-forget actions:
//! - `start_demo` runs the host-supplied start hook (errors propagate)
//! - `copy_to_clipboard` writes a quick command to the platform clipboard
//! - `open_external` opens one of the fixed project links in a browser
//!
//! Clipboard and browser failures are logged and swallowed; the screen has
//! no error state for them.

use std::fmt;

use thiserror::Error;

/// Failure reported by a platform seam
#[derive(Debug, Error)]
pub enum PlatformError {
    #[error("clipboard unavailable: {0}")]
    ClipboardUnavailable(String),

    #[error("clipboard write failed: {0}")]
    ClipboardWrite(String),

    #[error("could not open {url}: {reason}")]
    OpenFailed { url: String, reason: String },
}

/// Write access to the system clipboard
pub trait Clipboard {
    fn write_text(&mut self, text: &str) -> Result<(), PlatformError>;
}

/// Launches a URL in a new, isolated browsing context
pub trait Opener {
    fn open(&mut self, url: &str, policy: OpenPolicy) -> Result<(), PlatformError>;
}

/// Isolation flags for a newly opened context
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OpenPolicy {
    /// The opened page gets no handle back to us
    pub no_opener: bool,
    /// No referrer is sent with the navigation
    pub no_referrer: bool,
}

impl OpenPolicy {
    pub const ISOLATED: OpenPolicy = OpenPolicy {
        no_opener: true,
        no_referrer: true,
    };
}

/// The fixed outbound links on the screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExternalLink {
    Repository,
    Documentation,
}

impl ExternalLink {
    pub const REPOSITORY_URL: &'static str = "https://github.com/ahmedtawfeeq1/magic-pipeline-ai";
    // Docs live in the repository README
    pub const DOCUMENTATION_URL: &'static str =
        "https://github.com/ahmedtawfeeq1/magic-pipeline-ai";

    pub fn url(self) -> &'static str {
        match self {
            ExternalLink::Repository => Self::REPOSITORY_URL,
            ExternalLink::Documentation => Self::DOCUMENTATION_URL,
        }
    }
}

/// What happened to a best-effort action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionOutcome {
    /// The platform accepted the request
    Delivered,
    /// The platform refused; already logged
    Suppressed,
}

impl ActionOutcome {
    pub fn is_delivered(self) -> bool {
        self == ActionOutcome::Delivered
    }
}

/// Host callback run when the user asks to start the demo
pub type StartHook = Box<dyn FnMut() -> anyhow::Result<()>>;

/// Routes screen activations to their side effects
pub struct Dispatcher<C, O> {
    clipboard: C,
    opener: O,
    on_start: StartHook,
}

impl<C: Clipboard, O: Opener> Dispatcher<C, O> {
    pub fn new<F>(clipboard: C, opener: O, on_start: F) -> Self
    where
        F: FnMut() -> anyhow::Result<()> + 'static,
    {
        Self {
            clipboard,
            opener,
            on_start: Box::new(on_start),
        }
    }

    /// Invoke the start hook once. No debouncing: every call runs it.
    pub fn start_demo(&mut self) -> anyhow::Result<()> {
        tracing::info!("start demo requested");
        (self.on_start)()
    }

    /// Write `text` verbatim to the clipboard.
    pub fn copy_to_clipboard(&mut self, text: &str) -> ActionOutcome {
        debug_assert!(!text.is_empty(), "quick commands are never empty");

        match self.clipboard.write_text(text) {
            Ok(()) => {
                tracing::debug!(len = text.len(), "copied command to clipboard");
                ActionOutcome::Delivered
            }
            Err(err) => {
                tracing::warn!(error = %err, "clipboard write failed");
                ActionOutcome::Suppressed
            }
        }
    }

    /// Open a fixed link with opener and referrer suppressed.
    pub fn open_external(&mut self, link: ExternalLink) -> ActionOutcome {
        let url = link.url();
        match self.opener.open(url, OpenPolicy::ISOLATED) {
            Ok(()) => {
                tracing::info!(%url, "opened external link");
                ActionOutcome::Delivered
            }
            Err(err) => {
                tracing::warn!(%url, error = %err, "failed to open external link");
                ActionOutcome::Suppressed
            }
        }
    }

    pub fn clipboard(&self) -> &C {
        &self.clipboard
    }

    pub fn opener(&self) -> &O {
        &self.opener
    }
}

impl<C: fmt::Debug, O: fmt::Debug> fmt::Debug for Dispatcher<C, O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Dispatcher")
            .field("clipboard", &self.clipboard)
            .field("opener", &self.opener)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::commands;
    use std::cell::Cell;
    use std::rc::Rc;

    #[derive(Debug, Default)]
    struct MemoryClipboard {
        contents: Option<String>,
        writes: usize,
    }

    impl Clipboard for MemoryClipboard {
        fn write_text(&mut self, text: &str) -> Result<(), PlatformError> {
            self.contents = Some(text.to_string());
            self.writes += 1;
            Ok(())
        }
    }

    #[derive(Debug)]
    struct DeniedClipboard;

    impl Clipboard for DeniedClipboard {
        fn write_text(&mut self, _text: &str) -> Result<(), PlatformError> {
            Err(PlatformError::ClipboardWrite("permission denied".into()))
        }
    }

    #[derive(Debug, Default)]
    struct RecordingOpener {
        requests: Vec<(String, OpenPolicy)>,
    }

    impl Opener for RecordingOpener {
        fn open(&mut self, url: &str, policy: OpenPolicy) -> Result<(), PlatformError> {
            self.requests.push((url.to_string(), policy));
            Ok(())
        }
    }

    #[derive(Debug)]
    struct BlockedOpener;

    impl Opener for BlockedOpener {
        fn open(&mut self, url: &str, _policy: OpenPolicy) -> Result<(), PlatformError> {
            Err(PlatformError::OpenFailed {
                url: url.to_string(),
                reason: "popup blocked".into(),
            })
        }
    }

    fn counting_hook() -> (Rc<Cell<usize>>, impl FnMut() -> anyhow::Result<()>) {
        let calls = Rc::new(Cell::new(0));
        let counter = Rc::clone(&calls);
        (calls, move || {
            counter.set(counter.get() + 1);
            Ok(())
        })
    }

    #[test]
    fn start_demo_invokes_hook_once_per_call() {
        let (calls, hook) = counting_hook();
        let mut dispatcher =
            Dispatcher::new(MemoryClipboard::default(), RecordingOpener::default(), hook);

        dispatcher.start_demo().unwrap();
        assert_eq!(calls.get(), 1);

        // no debounce
        dispatcher.start_demo().unwrap();
        dispatcher.start_demo().unwrap();
        assert_eq!(calls.get(), 3);
    }

    #[test]
    fn start_demo_propagates_hook_failure() {
        let mut dispatcher = Dispatcher::new(
            MemoryClipboard::default(),
            RecordingOpener::default(),
            || Err(anyhow::anyhow!("launcher crashed")),
        );

        let err = dispatcher.start_demo().unwrap_err();
        assert_eq!(err.to_string(), "launcher crashed");
    }

    #[test]
    fn copy_writes_exact_text() {
        let (_, hook) = counting_hook();
        let mut dispatcher =
            Dispatcher::new(MemoryClipboard::default(), RecordingOpener::default(), hook);

        let outcome = dispatcher.copy_to_clipboard("Create a modern sales pipeline");

        assert_eq!(outcome, ActionOutcome::Delivered);
        assert_eq!(
            dispatcher.clipboard().contents.as_deref(),
            Some("Create a modern sales pipeline")
        );
    }

    #[test]
    fn copy_of_each_command_replaces_clipboard() {
        let (_, hook) = counting_hook();
        let mut dispatcher =
            Dispatcher::new(MemoryClipboard::default(), RecordingOpener::default(), hook);

        for command in commands() {
            dispatcher.copy_to_clipboard(command);
            assert_eq!(dispatcher.clipboard().contents.as_deref(), Some(*command));
        }
        assert_eq!(dispatcher.clipboard().writes, commands().len());
    }

    #[test]
    fn copy_failure_is_swallowed() {
        let (calls, hook) = counting_hook();
        let mut dispatcher = Dispatcher::new(DeniedClipboard, RecordingOpener::default(), hook);

        let outcome = dispatcher.copy_to_clipboard("Show me pipeline templates");

        assert_eq!(outcome, ActionOutcome::Suppressed);
        assert!(!outcome.is_delivered());
        assert_eq!(calls.get(), 0);
        assert!(dispatcher.opener().requests.is_empty());
    }

    #[test]
    fn open_external_requests_exact_url_with_isolation() {
        let (_, hook) = counting_hook();
        let mut dispatcher =
            Dispatcher::new(MemoryClipboard::default(), RecordingOpener::default(), hook);

        dispatcher.open_external(ExternalLink::Repository);
        dispatcher.open_external(ExternalLink::Documentation);

        let requests = &dispatcher.opener().requests;
        assert_eq!(requests.len(), 2);
        assert_eq!(requests[0].0, "https://github.com/ahmedtawfeeq1/magic-pipeline-ai");
        assert_eq!(requests[1].0, ExternalLink::DOCUMENTATION_URL);
        for (_, policy) in requests {
            assert!(policy.no_opener);
            assert!(policy.no_referrer);
        }
    }

    #[test]
    fn blocked_open_is_swallowed() {
        let (_, hook) = counting_hook();
        let mut dispatcher = Dispatcher::new(MemoryClipboard::default(), BlockedOpener, hook);

        assert_eq!(
            dispatcher.open_external(ExternalLink::Documentation),
            ActionOutcome::Suppressed
        );
        assert!(dispatcher.clipboard().contents.is_none());
    }
}
