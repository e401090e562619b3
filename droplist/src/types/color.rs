#[derive(Debug, Clone, PartialEq)]
pub enum Color {
    Oklch { l: f32, c: f32, h: f32 },
    Rgb { r: u8, g: u8, b: u8 },
    Derived { base: Box<Color>, ops: Vec<ColorOp> },
}

#[derive(Debug, Clone, PartialEq)]
pub enum ColorOp {
    Lighten(f32),
    Darken(f32),
    Mix(Color, f32),
}

/// Concrete terminal color. Everything resolves to this before painting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

impl Color {
    pub fn oklch(l: f32, c: f32, h: f32) -> Self {
        Self::Oklch { l, c, h }
    }

    pub fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::Rgb { r, g, b }
    }

    pub fn lighten(self, amount: f32) -> Self {
        self.with_op(ColorOp::Lighten(amount))
    }

    pub fn darken(self, amount: f32) -> Self {
        self.with_op(ColorOp::Darken(amount))
    }

    pub fn mix(self, other: Color, amount: f32) -> Self {
        self.with_op(ColorOp::Mix(other, amount))
    }

    fn with_op(self, op: ColorOp) -> Self {
        match self {
            Self::Derived { base, mut ops } => {
                ops.push(op);
                Self::Derived { base, ops }
            }
            other => Self::Derived {
                base: Box::new(other),
                ops: vec![op],
            },
        }
    }

    /// Resolve to a concrete color, applying any derived operations in
    /// Oklch space.
    pub fn to_rgb(&self) -> Rgb {
        match self {
            Self::Rgb { r, g, b } => Rgb::new(*r, *g, *b),
            Self::Oklch { l, c, h } => oklch_to_rgb(*l, *c, *h),
            Self::Derived { base, ops } => {
                let (mut l, mut c, mut h) = base.to_oklch();
                for op in ops {
                    match op {
                        ColorOp::Lighten(amount) => {
                            l = (l + amount).clamp(0.0, 1.0);
                        }
                        ColorOp::Darken(amount) => {
                            l = (l - amount).clamp(0.0, 1.0);
                        }
                        ColorOp::Mix(other, amount) => {
                            let (ol, oc, oh) = other.to_oklch();
                            l = l * (1.0 - amount) + ol * amount;
                            c = c * (1.0 - amount) + oc * amount;
                            // Hue interpolation needs wrap-around handling
                            let mut diff = oh - h;
                            if diff > 180.0 {
                                diff -= 360.0;
                            } else if diff < -180.0 {
                                diff += 360.0;
                            }
                            h = (h + diff * amount) % 360.0;
                            if h < 0.0 {
                                h += 360.0;
                            }
                        }
                    }
                }
                oklch_to_rgb(l, c, h)
            }
        }
    }

    fn to_oklch(&self) -> (f32, f32, f32) {
        match self {
            Self::Oklch { l, c, h } => (*l, *c, *h),
            Self::Rgb { r, g, b } => rgb_to_oklch(Rgb::new(*r, *g, *b)),
            Self::Derived { .. } => rgb_to_oklch(self.to_rgb()),
        }
    }
}

fn oklch_to_rgb(l: f32, c: f32, h: f32) -> Rgb {
    use palette::{IntoColor, Oklch, Srgb};

    let oklch = Oklch::new(l, c, h);
    let srgb: Srgb = oklch.into_color();
    let (r, g, b) = srgb.into_format::<u8>().into_components();

    Rgb::new(r, g, b)
}

fn rgb_to_oklch(rgb: Rgb) -> (f32, f32, f32) {
    use palette::{IntoColor, Oklch, Srgb};

    let srgb = Srgb::new(rgb.r, rgb.g, rgb.b).into_format::<f32>();
    let oklch: Oklch = srgb.into_color();

    (oklch.l, oklch.chroma, oklch.hue.into_positive_degrees())
}
