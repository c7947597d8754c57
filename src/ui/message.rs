#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppMessage {
    // Controls
    Quit,
    Open,
    Play,
    Stop,
    ToggleLoop,
    NextControl,
    PreviousControl,
    Activate,

    // File chooser
    BrowserUp,
    BrowserDown,
    BrowserFirst,
    BrowserLast,
    BrowserEnter,
    BrowserParent,
    BrowserToggleHidden,
    BrowserCancel,
}
