use crate::ui::message::AppMessage;
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

pub struct InputHandler;

impl InputHandler {
    pub fn handle_key(key: KeyEvent) -> Option<AppMessage> {
        match (key.code, key.modifiers) {
            (KeyCode::Char('c'), KeyModifiers::CONTROL) => Some(AppMessage::Quit),
            (KeyCode::Char('q'), _) => Some(AppMessage::Quit),
            (KeyCode::Char('o'), _) => Some(AppMessage::Open),
            (KeyCode::Char(' '), _) | (KeyCode::Char('p'), _) => Some(AppMessage::Play),
            (KeyCode::Char('s'), _) => Some(AppMessage::Stop),
            (KeyCode::Char('l'), _) => Some(AppMessage::ToggleLoop),
            (KeyCode::Tab, _) | (KeyCode::Down, _) | (KeyCode::Char('j'), _) => {
                Some(AppMessage::NextControl)
            }
            (KeyCode::BackTab, _) | (KeyCode::Up, _) | (KeyCode::Char('k'), _) => {
                Some(AppMessage::PreviousControl)
            }
            (KeyCode::Enter, _) => Some(AppMessage::Activate),
            _ => None,
        }
    }

    pub fn handle_browser_key(key: KeyEvent) -> Option<AppMessage> {
        match (key.code, key.modifiers) {
            (KeyCode::Char('c'), KeyModifiers::CONTROL) => Some(AppMessage::Quit),
            (KeyCode::Esc, _) | (KeyCode::Char('q'), _) => Some(AppMessage::BrowserCancel),
            (KeyCode::Up, _) | (KeyCode::Char('k'), _) => Some(AppMessage::BrowserUp),
            (KeyCode::Down, _) | (KeyCode::Char('j'), _) => Some(AppMessage::BrowserDown),
            (KeyCode::Home, _) | (KeyCode::Char('g'), _) => Some(AppMessage::BrowserFirst),
            (KeyCode::End, _) | (KeyCode::Char('G'), _) => Some(AppMessage::BrowserLast),
            (KeyCode::Enter, _) | (KeyCode::Right, _) | (KeyCode::Char('l'), _) => {
                Some(AppMessage::BrowserEnter)
            }
            (KeyCode::Backspace, _) | (KeyCode::Left, _) | (KeyCode::Char('h'), _) => {
                Some(AppMessage::BrowserParent)
            }
            (KeyCode::Char('.'), _) => Some(AppMessage::BrowserToggleHidden),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn deck_keys() {
        assert_eq!(
            InputHandler::handle_key(key(KeyCode::Char(' '))),
            Some(AppMessage::Play)
        );
        assert_eq!(
            InputHandler::handle_key(key(KeyCode::Char('s'))),
            Some(AppMessage::Stop)
        );
        assert_eq!(
            InputHandler::handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Some(AppMessage::Quit)
        );
        assert_eq!(InputHandler::handle_key(key(KeyCode::Char('x'))), None);
    }

    #[test]
    fn chooser_keys_do_not_leak_into_the_deck() {
        assert_eq!(
            InputHandler::handle_browser_key(key(KeyCode::Char('l'))),
            Some(AppMessage::BrowserEnter)
        );
        assert_eq!(
            InputHandler::handle_browser_key(key(KeyCode::Esc)),
            Some(AppMessage::BrowserCancel)
        );
        assert_eq!(InputHandler::handle_browser_key(key(KeyCode::Char(' '))), None);
    }
}
