//! The renderer: a pure function from configuration, state and items to
//! a view tree. Nothing here mutates host data; interactive nodes carry
//! the message the host should apply.

use crate::config::{Config, Direction, GroupOps};
use crate::node::Node;
use crate::state::DropdownState;
use crate::types::{Border, Palette, Style};

pub const CHECK_ALL_LABEL: &str = "Check All";
pub const UNCHECK_ALL_LABEL: &str = "Uncheck All";

/// Build the view tree for one dropdown instance.
///
/// Closed state renders the toggle button alone. Open state stacks the
/// group panel and the checklist around it: `Down` puts them below the
/// button, `Up` above it, and the group panel sits adjacent to the button
/// in both directions.
pub fn view<T, M>(config: &Config<T, M>, state: DropdownState, items: &[T]) -> Node<M> {
    let button = toggle_button(config, state);

    if !state.open {
        return Node::column(vec![button]);
    }

    let group = group_panel(config);
    let checklist = checklist_panel(config, items);

    let children = match config.direction {
        Direction::Down => vec![button, group, checklist],
        Direction::Up => vec![checklist, group, button],
    };

    Node::column(children)
}

fn toggle_button<T, M>(config: &Config<T, M>, state: DropdownState) -> Node<M> {
    Node::button(config.label.clone())
        .on_press((config.on_state)(state.toggle()))
        .style(button_style(&config.palette))
}

fn group_panel<T, M>(config: &Config<T, M>) -> Node<M> {
    match &config.group_ops {
        GroupOps::None => Node::empty(),
        GroupOps::SetAll(on_set_all) => Node::row(vec![
            Node::button(CHECK_ALL_LABEL)
                .on_press(on_set_all(true))
                .style(button_style(&config.palette)),
            Node::button(UNCHECK_ALL_LABEL)
                .on_press(on_set_all(false))
                .style(button_style(&config.palette)),
        ])
        .gap(1)
        .style(Style::new().background(config.palette.panel_background.clone())),
    }
}

fn checklist_panel<T, M>(config: &Config<T, M>, items: &[T]) -> Node<M> {
    let rows = items
        .iter()
        .map(|item| {
            Node::checkbox((config.entry_label)(item), (config.entry_checked)(item))
                .on_toggle((config.on_toggle)(item))
                .style(Style::new().foreground(config.palette.text.clone()))
        })
        .collect();

    Node::column(rows).style(
        Style::new()
            .background(config.palette.panel_background.clone())
            .border(Border::Single)
            .border_color(config.palette.panel_border.clone()),
    )
}

fn button_style(palette: &Palette) -> Style {
    Style::new()
        .background(palette.button_background.clone())
        .foreground(palette.text.clone())
        .border(Border::Single)
        .border_color(palette.button_border.clone())
}
