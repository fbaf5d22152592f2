use iced::color;
use iced::theme::Palette;
use iced::{Color, Theme};

use rainbow_border_core::shared::color::Rgb;

/// Custom theme whose background is the border's background color, with
/// text picked for contrast against it.
pub fn resolve_theme(background: Rgb) -> Theme {
    let [r, g, b] = background.to_array();
    let palette = if is_light(background) {
        light_palette(Color::from_rgb8(r, g, b))
    } else {
        dark_palette(Color::from_rgb8(r, g, b))
    };
    Theme::custom("Rainbow Border", palette)
}

fn dark_palette(background: Color) -> Palette {
    Palette {
        background,
        text: color!(0xcc, 0xcc, 0xcc),
        primary: color!(0x5e, 0x9f, 0xf5),
        success: color!(0x30, 0xd1, 0x58),
        warning: color!(0xff, 0xcc, 0x00),
        danger: color!(0xff, 0x45, 0x3a),
    }
}

fn light_palette(background: Color) -> Palette {
    Palette {
        background,
        text: color!(0x1d, 0x1d, 0x1f),
        primary: color!(0x34, 0x78, 0xf6),
        success: color!(0x34, 0xc7, 0x59),
        warning: color!(0xff, 0x9f, 0x0a),
        danger: color!(0xff, 0x3b, 0x30),
    }
}

/// Rec. 601 luma above the midpoint.
fn is_light(color: Rgb) -> bool {
    let luma = 0.299 * f32::from(color.r) + 0.587 * f32::from(color.g) + 0.114 * f32::from(color.b);
    luma > 127.5
}
