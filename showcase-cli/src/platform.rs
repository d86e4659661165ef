//! System-backed implementations of the dispatcher seams

use std::fmt;

use cli_clipboard::{ClipboardContext, ClipboardProvider};
use showcase_core::{Clipboard, OpenPolicy, Opener, PlatformError};

/// OS clipboard via cli-clipboard.
///
/// The context is created on first write and kept alive afterwards; on X11
/// the selection is lost when its owner goes away.
#[derive(Default)]
pub struct SystemClipboard {
    ctx: Option<ClipboardContext>,
}

impl SystemClipboard {
    pub fn new() -> Self {
        Self::default()
    }
}

impl fmt::Debug for SystemClipboard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SystemClipboard")
            .field("connected", &self.ctx.is_some())
            .finish()
    }
}

impl Clipboard for SystemClipboard {
    fn write_text(&mut self, text: &str) -> Result<(), PlatformError> {
        if self.ctx.is_none() {
            let ctx = ClipboardContext::new()
                .map_err(|e| PlatformError::ClipboardUnavailable(e.to_string()))?;
            self.ctx = Some(ctx);
        }

        match self.ctx.as_mut() {
            Some(ctx) => ctx
                .set_contents(text.to_owned())
                .map_err(|e| PlatformError::ClipboardWrite(e.to_string())),
            None => Err(PlatformError::ClipboardUnavailable("no clipboard context".into())),
        }
    }
}

/// Default browser via the `open` crate.
///
/// The browser is a separate process started by the OS: it never gets a
/// handle back to us and no referrer is attached, which is exactly what
/// `OpenPolicy::ISOLATED` asks for.
#[derive(Debug, Default)]
pub struct BrowserOpener;

impl Opener for BrowserOpener {
    fn open(&mut self, url: &str, policy: OpenPolicy) -> Result<(), PlatformError> {
        tracing::debug!(
            %url,
            no_opener = policy.no_opener,
            no_referrer = policy.no_referrer,
            "launching browser"
        );
        open::that_detached(url).map_err(|e| PlatformError::OpenFailed {
            url: url.to_string(),
            reason: e.to_string(),
        })
    }
}
