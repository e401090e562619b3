use droplist::{
    measure, paint, view, Buffer, Color, Config, Direction, DropdownState, Entry, Node, Palette,
    Rect, Rgb,
};

#[derive(Debug, Clone, PartialEq)]
enum Msg {
    Dropdown(DropdownState),
    Toggle(Entry),
    SetAll(bool),
}

fn render_to_buffer(root: &Node<Msg>, width: u16, height: u16) -> (Buffer, Rect) {
    let (w, h) = measure(root);
    let area = Rect::from_size(w.min(width), h.min(height));
    let mut buf = Buffer::new(width, height);
    paint(root, area, &mut buf);
    (buf, area)
}

fn sample_entries() -> Vec<Entry> {
    vec![
        Entry::new("Apple", false),
        Entry::new("Banana", true),
        Entry::new("Cherry", false),
    ]
}

fn config() -> Config<Entry, Msg> {
    Config::new("Fruit", Msg::Dropdown, |entry: &Entry| {
        Msg::Toggle(entry.clone())
    })
}

#[test]
fn test_closed_paints_only_the_button() {
    let root = view(&config(), DropdownState::new(), &sample_entries());
    let (buf, area) = render_to_buffer(&root, 40, 20);

    // Bordered button is three rows tall and the whole tree
    assert_eq!(area.height, 3);
    assert_eq!(buf.get(0, 0).unwrap().char, '┌');
    assert!(buf.row_text(1).contains("Fruit"));

    // Nothing painted below the button
    for y in 3..20 {
        assert_eq!(buf.row_text(y).trim(), "");
    }
}

#[test]
fn test_open_down_stacks_button_group_checklist() {
    let config = config().select_all(Msg::SetAll);
    let root = view(&config, DropdownState { open: true }, &sample_entries());
    let (buf, area) = render_to_buffer(&root, 40, 20);

    // button rows 0-2, group rows 3-5, checklist rows 6-10
    assert_eq!(area.height, 11);
    assert!(buf.row_text(1).contains("Fruit"));
    assert!(buf.row_text(4).contains("Check All"));
    assert!(buf.row_text(4).contains("Uncheck All"));
    assert!(buf.row_text(7).contains("[ ] Apple"));
    assert!(buf.row_text(8).contains("[x] Banana"));
    assert!(buf.row_text(9).contains("[ ] Cherry"));
}

#[test]
fn test_open_up_stacks_checklist_group_button() {
    let config = config()
        .select_all(Msg::SetAll)
        .direction(Direction::Up);
    let root = view(&config, DropdownState { open: true }, &sample_entries());
    let (buf, _) = render_to_buffer(&root, 40, 20);

    // checklist rows 0-4, group rows 5-7, button rows 8-10
    assert!(buf.row_text(1).contains("[ ] Apple"));
    assert!(buf.row_text(6).contains("Check All"));
    assert!(buf.row_text(9).contains("Fruit"));
}

#[test]
fn test_default_palette_paints_white_button_with_gray_border() {
    let root = view(&config(), DropdownState::new(), &sample_entries());
    let (buf, _) = render_to_buffer(&root, 40, 20);

    let corner = buf.get(0, 0).unwrap();
    assert_eq!(corner.fg, Rgb::new(204, 204, 204));
    assert_eq!(corner.bg, Rgb::new(255, 255, 255));

    let label_cell = buf.get(2, 1).unwrap();
    assert_eq!(label_cell.char, 'F');
    assert_eq!(label_cell.fg, Rgb::new(0, 0, 0));
    assert_eq!(label_cell.bg, Rgb::new(255, 255, 255));
}

#[test]
fn test_custom_palette_drives_all_colors() {
    let palette = Palette {
        panel_background: Color::rgb(10, 10, 40),
        panel_border: Color::rgb(90, 90, 120),
        button_background: Color::rgb(20, 60, 20),
        button_border: Color::rgb(120, 200, 120),
        text: Color::rgb(240, 240, 240),
    };
    let config = config().palette(palette);
    let root = view(&config, DropdownState { open: true }, &sample_entries());
    let (buf, _) = render_to_buffer(&root, 40, 20);

    // Button border and fill (no group panel: checklist starts at row 3)
    assert_eq!(buf.get(0, 0).unwrap().fg, Rgb::new(120, 200, 120));
    assert_eq!(buf.get(2, 1).unwrap().bg, Rgb::new(20, 60, 20));

    // Checklist border and fill
    assert_eq!(buf.get(0, 3).unwrap().fg, Rgb::new(90, 90, 120));
    let row_cell = buf.get(2, 4).unwrap();
    assert_eq!(row_cell.bg, Rgb::new(10, 10, 40));
    assert_eq!(row_cell.fg, Rgb::new(240, 240, 240));
}

#[test]
fn test_open_with_no_items_paints_empty_panel() {
    let root = view(&config(), DropdownState { open: true }, &[]);
    let (buf, area) = render_to_buffer(&root, 40, 20);

    // button rows 0-2, empty bordered panel rows 3-4
    assert_eq!(area.height, 5);
    assert_eq!(buf.get(0, 3).unwrap().char, '┌');
    assert_eq!(buf.get(0, 4).unwrap().char, '└');
    assert!(!buf.row_text(3).contains('['));
}

#[test]
fn test_paint_into_small_buffer_clips_without_panicking() {
    let config = config().select_all(Msg::SetAll);
    let root = view(&config, DropdownState { open: true }, &sample_entries());

    let (w, h) = measure(&root);
    let mut buf = Buffer::new(8, 4);
    paint(&root, Rect::from_size(w, h), &mut buf);

    assert!(buf.row_text(1).contains("Fruit"));
}
