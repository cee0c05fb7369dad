use anyhow::{Result, anyhow};
use cli_clipboard::{ClipboardContext, ClipboardProvider};
use tracing::warn;

/// Destination for copied text.
pub trait ClipboardSink {
    fn set_text(
        &mut self,
        text: &str,
    ) -> Result<()>;
}

/// The desktop clipboard.
#[derive(Debug, Default)]
pub struct SystemClipboard;

impl ClipboardSink for SystemClipboard {
    fn set_text(
        &mut self,
        text: &str,
    ) -> Result<()> {
        let mut ctx =
            ClipboardContext::new().map_err(|e| anyhow!("clipboard unavailable: {e}"))?;
        ctx.set_contents(text.to_string())
            .map_err(|e| anyhow!("clipboard copy failed: {e}"))
    }
}

/// Copies `text` when the document already reached another destination, so
/// a failure is only logged. Returns whether the text landed.
pub fn copy_or_warn<C>(
    sink: &mut C,
    text: &str,
) -> bool
where
    C: ClipboardSink + ?Sized,
{
    match sink.set_text(text) {
        Ok(()) => true,
        Err(e) => {
            warn!("{e:#}");
            false
        }
    }
}
