use crate::ui::tui_state::FormState;
use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

const PAGE_LINES: u16 = 10;

/// Actions the event loop has to carry out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiMsg {
    Generate,
    Copy,
    Quit,
}

/// Apply a terminal event to the form. Editing and scrolling are handled
/// here; anything needing the generator or clipboard is returned.
pub fn handle_event(
    state: &mut FormState,
    evt: Event,
) -> Option<UiMsg> {
    let Event::Key(KeyEvent {
        code,
        modifiers,
        kind,
        ..
    }) = evt
    else {
        return None;
    };
    if kind != KeyEventKind::Press {
        return None;
    }
    match (code, modifiers) {
        (KeyCode::Esc, _) => Some(UiMsg::Quit),
        (KeyCode::Char('c'), KeyModifiers::CONTROL) => Some(UiMsg::Quit),
        (KeyCode::Char('q'), _) => Some(UiMsg::Quit),
        (KeyCode::Char('y'), KeyModifiers::CONTROL) => Some(UiMsg::Copy),
        (KeyCode::Enter, _) => Some(UiMsg::Generate),
        (KeyCode::Backspace, _) => {
            state.backspace();
            None
        }
        (KeyCode::Up, _) => {
            state.scroll_up(1);
            None
        }
        (KeyCode::Down, _) => {
            state.scroll_down(1);
            None
        }
        (KeyCode::PageUp, _) => {
            state.scroll_up(PAGE_LINES);
            None
        }
        (KeyCode::PageDown, _) => {
            state.scroll_down(PAGE_LINES);
            None
        }
        (KeyCode::Home, _) => {
            state.scroll = 0;
            None
        }
        (KeyCode::Char(c), m) if !m.contains(KeyModifiers::CONTROL) => {
            state.push_char(c);
            None
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn ctrl(c: char) -> Event {
        Event::Key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL))
    }

    #[test]
    fn typing_then_enter_generates() {
        let mut state = FormState::new(0, 100);
        state.input.clear();
        assert_eq!(handle_event(&mut state, key(KeyCode::Char('4'))), None);
        assert_eq!(handle_event(&mut state, key(KeyCode::Char('2'))), None);
        assert_eq!(handle_event(&mut state, key(KeyCode::Backspace)), None);
        assert_eq!(state.input, "4");
        assert_eq!(
            handle_event(&mut state, key(KeyCode::Enter)),
            Some(UiMsg::Generate)
        );
    }

    #[test]
    fn quit_and_copy_keys() {
        let mut state = FormState::new(1, 100);
        assert_eq!(handle_event(&mut state, key(KeyCode::Esc)), Some(UiMsg::Quit));
        assert_eq!(handle_event(&mut state, ctrl('c')), Some(UiMsg::Quit));
        assert_eq!(
            handle_event(&mut state, key(KeyCode::Char('q'))),
            Some(UiMsg::Quit)
        );
        assert_eq!(handle_event(&mut state, ctrl('y')), Some(UiMsg::Copy));
        assert_eq!(state.input, "1");
    }

    #[test]
    fn release_events_are_ignored() {
        let mut state = FormState::new(1, 100);
        let mut release = KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE);
        release.kind = KeyEventKind::Release;
        assert_eq!(handle_event(&mut state, Event::Key(release)), None);
    }

    #[test]
    fn arrows_scroll_article() {
        let mut state = FormState::new(1, 100);
        handle_event(&mut state, key(KeyCode::PageDown));
        handle_event(&mut state, key(KeyCode::Up));
        assert_eq!(state.scroll, PAGE_LINES - 1);
        handle_event(&mut state, key(KeyCode::Home));
        assert_eq!(state.scroll, 0);
    }
}
