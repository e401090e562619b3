use super::Color;

/// The five colors a dropdown instance is styled with. No other visual
/// configuration exists.
#[derive(Debug, Clone, PartialEq)]
pub struct Palette {
    /// Fill behind the checklist and group panels.
    pub panel_background: Color,
    /// Border around the checklist and group panels.
    pub panel_border: Color,
    /// Fill behind the toggle and group buttons.
    pub button_background: Color,
    /// Border around the toggle and group buttons.
    pub button_border: Color,
    /// Label and row text.
    pub text: Color,
}

impl Palette {
    /// White backgrounds, light-gray borders, black text.
    pub const fn new() -> Self {
        Self {
            panel_background: Color::Rgb {
                r: 255,
                g: 255,
                b: 255,
            },
            panel_border: Color::Rgb {
                r: 204,
                g: 204,
                b: 204,
            },
            button_background: Color::Rgb {
                r: 255,
                g: 255,
                b: 255,
            },
            button_border: Color::Rgb {
                r: 204,
                g: 204,
                b: 204,
            },
            text: Color::Rgb { r: 0, g: 0, b: 0 },
        }
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::new()
    }
}
