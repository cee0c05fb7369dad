use std::ops::ControlFlow;
use std::panic::{self, PanicHookInfo};
use std::sync::Arc;

use crate::generate::Generator;
use crate::io::clipboard::ClipboardSink;
use crate::ui::tui_events::{self, UiMsg};
use crate::ui::{tui_render, tui_state::FormState};
use anyhow::Result;
use crossterm::{
    event, execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};

type PanicHook = Arc<dyn Fn(&PanicHookInfo<'_>) + Sync + Send + 'static>;

/// Runs the terminal form until the user quits and returns the paragraphs
/// shown last.
pub fn run_form<C>(
    generator: &mut Generator,
    clipboard: &mut C,
    initial_count: usize,
    max_count: usize,
) -> Result<Vec<String>>
where
    C: ClipboardSink + ?Sized,
{
    let mut state = FormState::new(initial_count, max_count);

    with_restore_hook(|| {
        let outcome = match enable_raw_mode() {
            Ok(()) => drive(generator, clipboard, &mut state),
            Err(e) => Err(e.into()),
        };
        // Undo raw mode even when the loop failed
        let restored = restore_terminal();
        outcome.and(restored)
    })?;

    Ok(state.article.items().to_vec())
}

/// Carries out one message from the event handler.
pub fn apply<C>(
    state: &mut FormState,
    generator: &mut Generator,
    clipboard: &mut C,
    msg: UiMsg,
) -> Result<ControlFlow<()>>
where
    C: ClipboardSink + ?Sized,
{
    match msg {
        UiMsg::Quit => return Ok(ControlFlow::Break(())),
        UiMsg::Generate => {
            let (n, clamped) = state.requested_count();
            let shown = generator.generate_into(&mut state.article, n)?;
            state.scroll = 0;
            state.status = Some(if clamped {
                format!("Generated {shown} paragraphs (limited to {})", state.max_count)
            } else {
                format!("Generated {shown} paragraphs")
            });
        }
        UiMsg::Copy => {
            state.status = Some(match clipboard.set_text(&state.article_text()) {
                Ok(()) => "Copied article to clipboard".to_string(),
                Err(e) => format!("Copy failed: {e:#}"),
            });
        }
    }
    Ok(ControlFlow::Continue(()))
}

// Runs `f` with a panic hook that restores the terminal before deferring to
// the hook installed before, which is reinstated once `f` returns.
fn with_restore_hook<T>(f: impl FnOnce() -> T) -> T {
    let previous: PanicHook = Arc::from(panic::take_hook());
    let chained = Arc::clone(&previous);
    panic::set_hook(Box::new(move |info| {
        let _ = restore_terminal();
        chained(info);
    }));

    let out = f();

    let _ = panic::take_hook();
    panic::set_hook(Box::new(move |info| previous(info)));
    out
}

fn restore_terminal() -> Result<()> {
    let raw = disable_raw_mode();
    let screen = execute!(std::io::stdout(), LeaveAlternateScreen);
    raw?;
    screen?;
    Ok(())
}

fn drive<C>(
    generator: &mut Generator,
    clipboard: &mut C,
    state: &mut FormState,
) -> Result<()>
where
    C: ClipboardSink + ?Sized,
{
    execute!(std::io::stdout(), EnterAlternateScreen)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(std::io::stdout()))?;

    let outcome = loop {
        if let Err(e) = terminal.draw(|f| tui_render::render(f, &*state)) {
            break Err(e.into());
        }
        let evt = match event::read() {
            Ok(evt) => evt,
            Err(e) => break Err(e.into()),
        };
        let Some(msg) = tui_events::handle_event(state, evt) else {
            continue;
        };
        match apply(state, generator, clipboard, msg) {
            Ok(ControlFlow::Continue(())) => {}
            Ok(ControlFlow::Break(())) => break Ok(()),
            Err(e) => break Err(e),
        }
    };

    let cursor = terminal.show_cursor();
    outcome?;
    cursor?;
    Ok(())
}
