#[derive(Debug, PartialEq, Eq, Clone, Copy, Default)]
pub enum AutoplayState {
    #[default]
    Stopped, // No periodic advance armed
    Running, // Advancing every autoplay interval
}

impl AutoplayState {
    pub fn is_running(self) -> bool {
        self == AutoplayState::Running
    }
}
