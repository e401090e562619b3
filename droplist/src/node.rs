use crate::types::Style;

/// A node in the view tree. `M` is the host's message type; interactive
/// nodes carry the message to emit when activated. The tree is a plain
/// value: building it has no side effects and activating a node is the
/// host's job.
#[derive(Debug, Clone, PartialEq)]
pub enum Node<M> {
    /// Renders nothing and occupies no space.
    Empty,

    Text {
        content: String,
        style: Style,
    },

    Button {
        label: String,
        on_press: Option<M>,
        style: Style,
    },

    /// A checked/unchecked indicator with a label. The checked flag is a
    /// projection of host data; toggling it is signalled through
    /// `on_toggle`, never computed here.
    Checkbox {
        label: String,
        checked: bool,
        on_toggle: Option<M>,
        style: Style,
    },

    Row {
        children: Vec<Node<M>>,
        style: Style,
        gap: u16,
    },

    Column {
        children: Vec<Node<M>>,
        style: Style,
        gap: u16,
    },
}

impl<M> Node<M> {
    pub const fn empty() -> Self {
        Self::Empty
    }

    pub fn text(content: impl Into<String>) -> Self {
        Self::Text {
            content: content.into(),
            style: Style::new(),
        }
    }

    pub fn button(label: impl Into<String>) -> Self {
        Self::Button {
            label: label.into(),
            on_press: None,
            style: Style::new(),
        }
    }

    pub fn checkbox(label: impl Into<String>, checked: bool) -> Self {
        Self::Checkbox {
            label: label.into(),
            checked,
            on_toggle: None,
            style: Style::new(),
        }
    }

    pub fn row(children: Vec<Node<M>>) -> Self {
        Self::Row {
            children,
            style: Style::new(),
            gap: 0,
        }
    }

    pub fn column(children: Vec<Node<M>>) -> Self {
        Self::Column {
            children,
            style: Style::new(),
            gap: 0,
        }
    }

    pub fn style(mut self, new_style: Style) -> Self {
        match &mut self {
            Self::Empty => {}
            Self::Text { style, .. }
            | Self::Button { style, .. }
            | Self::Checkbox { style, .. }
            | Self::Row { style, .. }
            | Self::Column { style, .. } => *style = new_style,
        }
        self
    }

    pub fn gap(mut self, new_gap: u16) -> Self {
        if let Self::Row { gap, .. } | Self::Column { gap, .. } = &mut self {
            *gap = new_gap;
        }
        self
    }

    /// Attach the message emitted when a button is pressed.
    pub fn on_press(mut self, message: M) -> Self {
        if let Self::Button { on_press, .. } = &mut self {
            *on_press = Some(message);
        }
        self
    }

    /// Attach the message emitted when a checkbox is activated.
    pub fn on_toggle(mut self, message: M) -> Self {
        if let Self::Checkbox { on_toggle, .. } = &mut self {
            *on_toggle = Some(message);
        }
        self
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    /// Whether activating this node emits a message.
    pub fn is_interactive(&self) -> bool {
        self.message().is_some()
    }

    /// The message this node emits when activated, if any.
    pub fn message(&self) -> Option<&M> {
        match self {
            Self::Button { on_press, .. } => on_press.as_ref(),
            Self::Checkbox { on_toggle, .. } => on_toggle.as_ref(),
            _ => None,
        }
    }

    /// Child nodes, empty for leaves.
    pub fn children(&self) -> &[Node<M>] {
        match self {
            Self::Row { children, .. } | Self::Column { children, .. } => children,
            _ => &[],
        }
    }

    pub fn style_ref(&self) -> Option<&Style> {
        match self {
            Self::Empty => None,
            Self::Text { style, .. }
            | Self::Button { style, .. }
            | Self::Checkbox { style, .. }
            | Self::Row { style, .. }
            | Self::Column { style, .. } => Some(style),
        }
    }
}
