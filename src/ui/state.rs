#[derive(Debug, Clone, Default)]
pub struct UiState {
    pub focus: Focus,
    pub has_focus: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Focus {
    #[default]
    Open,
    Play,
    Stop,
    Loop,
}

impl Focus {
    /// Cycles forward through the controls that are on screen.
    pub fn next(self, with_loop: bool) -> Self {
        match self {
            Focus::Open => Focus::Play,
            Focus::Play => Focus::Stop,
            Focus::Stop if with_loop => Focus::Loop,
            Focus::Stop | Focus::Loop => Focus::Open,
        }
    }

    pub fn previous(self, with_loop: bool) -> Self {
        match self {
            Focus::Open if with_loop => Focus::Loop,
            Focus::Open => Focus::Stop,
            Focus::Play => Focus::Open,
            Focus::Stop => Focus::Play,
            Focus::Loop => Focus::Stop,
        }
    }
}
