use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::session::{Keystroke, Phase};

/// What a terminal key means to the app.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    Start,
    Restart,
    NextMode,
    PrevMode,
    Type(Keystroke),
}

pub fn action_for(key: KeyEvent, phase: Phase) -> Action {
    if key.kind == KeyEventKind::Release {
        return Action::Type(Keystroke::Other);
    }

    // AltGr arrives as CONTROL | ALT on Windows and still produces a
    // printable char, so only a lone Ctrl or a lone Alt makes a chord
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    let alt = key.modifiers.contains(KeyModifiers::ALT);
    let chord = ctrl != alt;
    match key.code {
        KeyCode::Esc => Action::Quit,
        KeyCode::Char('c') if chord && ctrl => Action::Quit,
        KeyCode::Char('r') if chord && ctrl => Action::Restart,
        KeyCode::Enter => match phase {
            Phase::Idle => Action::Start,
            Phase::Finished => Action::Restart,
            Phase::Running => Action::Type(Keystroke::Other),
        },
        KeyCode::Tab => Action::NextMode,
        KeyCode::BackTab => Action::PrevMode,
        KeyCode::Backspace => Action::Type(Keystroke::Backspace),
        KeyCode::Char(' ') => Action::Type(Keystroke::Space),
        KeyCode::Char(_) if chord => Action::Type(Keystroke::Other),
        KeyCode::Char(c) => Action::Type(Keystroke::Char(c)),
        _ => Action::Type(Keystroke::Other),
    }
}
