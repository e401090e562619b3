//! Interactive dropdown demo. The host owns the state and the entry
//! list; every interaction arrives as a message that is applied here,
//! never inside the widget.
//!
//! Keys: q/Esc quit, Space toggles the dropdown, d flips the open
//! direction. Click the button, the checkboxes and the group buttons.

use std::fs::File;
use std::time::Duration;

use crossterm::event::{Event as CrosstermEvent, KeyCode, MouseButton, MouseEventKind};
use droplist::{
    hit, set_all, toggle_entry, view, Config, Direction, DropdownState, Entry, Terminal,
};
use log::LevelFilter;
use simplelog::{Config as LogConfig, WriteLogger};

#[derive(Debug, Clone, PartialEq)]
enum Msg {
    Dropdown(DropdownState),
    Toggle(Entry),
    SetAll(bool),
}

fn main() -> std::io::Result<()> {
    let _ = WriteLogger::init(
        LevelFilter::Debug,
        LogConfig::default(),
        File::create("droplist-demo.log")?,
    );

    let mut term = Terminal::new()?;
    let mut state = DropdownState::new();
    let mut direction = Direction::Down;
    let mut entries = vec![
        Entry::new("Apple", false),
        Entry::new("Banana", false),
        Entry::new("Cherry", true),
        Entry::new("Dragonfruit", false),
        Entry::new("Elderberry", false),
    ];

    loop {
        let config = Config::new("Fruit basket", Msg::Dropdown, |entry: &Entry| {
            Msg::Toggle(entry.clone())
        })
        .select_all(Msg::SetAll)
        .direction(direction);

        let root = view(&config, state, &entries);
        let area = term.render(&root)?;

        for event in term.poll(Some(Duration::from_millis(100)))? {
            match event {
                CrosstermEvent::Key(key) => match key.code {
                    KeyCode::Char('q') | KeyCode::Esc => return Ok(()),
                    KeyCode::Char(' ') | KeyCode::Enter => state = state.toggle(),
                    KeyCode::Char('d') => {
                        direction = match direction {
                            Direction::Down => Direction::Up,
                            Direction::Up => Direction::Down,
                        };
                    }
                    _ => {}
                },
                CrosstermEvent::Mouse(mouse) => {
                    if let MouseEventKind::Down(MouseButton::Left) = mouse.kind {
                        if let Some(message) = hit(&root, area, mouse.column, mouse.row) {
                            apply(message, &mut state, &mut entries);
                        }
                    }
                }
                _ => {}
            }
        }
    }
}

fn apply(message: Msg, state: &mut DropdownState, entries: &mut Vec<Entry>) {
    log::debug!("[demo] applying {message:?}");
    match message {
        Msg::Dropdown(next) => *state = next,
        Msg::Toggle(entry) => *entries = toggle_entry(&entry, entries),
        Msg::SetAll(checked) => *entries = set_all(checked, entries),
    }
}
