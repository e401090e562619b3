/// Open/closed state of one dropdown instance. Created closed, replaced
/// wholesale on every toggle, owned by the host for the widget's lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DropdownState {
    pub open: bool,
}

impl DropdownState {
    /// Initial state: closed.
    pub const fn new() -> Self {
        Self { open: false }
    }

    /// The toggled state. Pure; the caller hands the result to the host
    /// through the config's state-change message.
    #[must_use]
    pub const fn toggle(self) -> Self {
        Self { open: !self.open }
    }
}
