use crate::entries::Entry;
use crate::state::DropdownState;
use crate::types::Palette;

/// Which side of the toggle button the panels open on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    #[default]
    Down,
    Up,
}

/// Optional group operations. When present, the open widget shows a
/// "Check All" and an "Uncheck All" button wired to the callback.
pub enum GroupOps<M> {
    None,
    SetAll(Box<dyn Fn(bool) -> M>),
}

impl<M> GroupOps<M> {
    pub fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }
}

/// Immutable description of one dropdown instance: label, colors, open
/// direction, optional group operations, item projections and message
/// constructors. Built fresh by host render code, never stored.
pub struct Config<T, M> {
    pub label: String,
    pub direction: Direction,
    pub palette: Palette,
    pub group_ops: GroupOps<M>,
    pub entry_label: Box<dyn Fn(&T) -> String>,
    pub entry_checked: Box<dyn Fn(&T) -> bool>,
    pub on_toggle: Box<dyn Fn(&T) -> M>,
    pub on_state: Box<dyn Fn(DropdownState) -> M>,
}

impl<M> Config<Entry, M> {
    /// Constructor for the common `Entry` item shape: no group
    /// operations, `Down` direction, default palette.
    pub fn new(
        label: impl Into<String>,
        on_state: impl Fn(DropdownState) -> M + 'static,
        on_toggle: impl Fn(&Entry) -> M + 'static,
    ) -> Self {
        Self::custom(
            label,
            on_state,
            on_toggle,
            |entry: &Entry| entry.label.clone(),
            |entry: &Entry| entry.checked,
        )
    }
}

impl<T, M> Config<T, M> {
    /// Full constructor for arbitrary item types. The two projections map
    /// an item to its label and checked flag; items themselves stay
    /// opaque to the widget.
    pub fn custom(
        label: impl Into<String>,
        on_state: impl Fn(DropdownState) -> M + 'static,
        on_toggle: impl Fn(&T) -> M + 'static,
        entry_label: impl Fn(&T) -> String + 'static,
        entry_checked: impl Fn(&T) -> bool + 'static,
    ) -> Self {
        Self {
            label: label.into(),
            direction: Direction::default(),
            palette: Palette::default(),
            group_ops: GroupOps::None,
            entry_label: Box::new(entry_label),
            entry_checked: Box::new(entry_checked),
            on_toggle: Box::new(on_toggle),
            on_state: Box::new(on_state),
        }
    }

    pub fn direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    pub fn palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }

    /// Enable the group-operations panel with the given set-all message
    /// constructor.
    pub fn select_all(mut self, on_set_all: impl Fn(bool) -> M + 'static) -> Self {
        self.group_ops = GroupOps::SetAll(Box::new(on_set_all));
        self
    }
}
