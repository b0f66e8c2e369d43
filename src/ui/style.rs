/// Palette and widget styles
use iced::widget::{button, container};
use iced::{gradient::Linear, Background, Border, Color, Gradient, Radians, Shadow, Theme, Vector};

pub const BACKGROUND: Color = rgb(0.043, 0.063, 0.125); // #0b1020
pub const TEAL: Color = rgb(0.0, 0.831, 0.788); // #00d4c9
pub const PINK: Color = rgb(1.0, 0.302, 0.714); // #ff4db6
pub const GRAY_900: Color = rgb(0.067, 0.094, 0.153);
pub const GRAY_800: Color = rgb(0.122, 0.161, 0.216);
pub const GRAY_700: Color = rgb(0.216, 0.255, 0.318);
pub const GRAY_500: Color = rgb(0.42, 0.447, 0.502);
pub const GRAY_400: Color = rgb(0.612, 0.639, 0.686);
pub const LIKED: Color = rgb(0.937, 0.267, 0.267);
pub const DISLIKED: Color = rgb(0.231, 0.51, 0.965);
pub const SAVED: Color = TEAL;

const fn rgb(r: f32, g: f32, b: f32) -> Color {
    Color { r, g, b, a: 1.0 }
}

const ROUND: f32 = 999.0;

/// Scale a colour's alpha, used while the card fades in
pub fn faded(color: Color, opacity: f32) -> Color {
    Color {
        a: color.a * opacity,
        ..color
    }
}

/// Teal to pink, left to right
pub fn accent_gradient() -> Background {
    Background::Gradient(Gradient::Linear(
        Linear::new(Radians(std::f32::consts::FRAC_PI_2))
            .add_stop(0.0, TEAL)
            .add_stop(1.0, PINK),
    ))
}

pub fn page(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(BACKGROUND)),
        text_color: Some(Color::WHITE),
        ..container::Style::default()
    }
}

pub fn card(opacity: f32) -> impl Fn(&Theme) -> container::Style {
    move |_theme| container::Style {
        background: Some(Background::Color(faded(GRAY_900, opacity))),
        border: Border {
            color: faded(GRAY_800, opacity),
            width: 1.0,
            radius: 16.0.into(),
        },
        shadow: Shadow {
            color: faded(Color::BLACK, 0.5 * opacity),
            offset: Vector::new(0.0, 12.0),
            blur_radius: 32.0,
        },
        ..container::Style::default()
    }
}

pub fn image_placeholder(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(GRAY_800)),
        border: Border {
            radius: 16.0.into(),
            ..Border::default()
        },
        ..container::Style::default()
    }
}

/// Genre badge, logo badge and the active progress dot
pub fn accent_pill(radius: f32) -> impl Fn(&Theme) -> container::Style {
    move |_theme| container::Style {
        background: Some(accent_gradient()),
        text_color: Some(Color::WHITE),
        border: Border {
            radius: radius.into(),
            ..Border::default()
        },
        ..container::Style::default()
    }
}

pub fn dot(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(GRAY_700)),
        border: Border {
            radius: ROUND.into(),
            ..Border::default()
        },
        ..container::Style::default()
    }
}

pub fn notice(color: Color) -> impl Fn(&Theme) -> container::Style {
    move |_theme| container::Style {
        background: Some(Background::Color(GRAY_900)),
        text_color: Some(Color::WHITE),
        border: Border {
            color,
            width: 1.0,
            radius: 10.0.into(),
        },
        ..container::Style::default()
    }
}

pub fn backdrop(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: 0.7,
            ..Color::BLACK
        })),
        ..container::Style::default()
    }
}

pub fn modal(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(GRAY_900)),
        text_color: Some(Color::WHITE),
        border: Border {
            radius: 16.0.into(),
            ..Border::default()
        },
        ..container::Style::default()
    }
}

fn neutral_background(status: button::Status) -> Color {
    match status {
        button::Status::Hovered | button::Status::Pressed => GRAY_700,
        _ => GRAY_800,
    }
}

/// Like/dislike/save/share: highlighted when active, neutral otherwise
pub fn action(active: bool, active_color: Color) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme, status| {
        let (background, text_color) = if active {
            (active_color, Color::WHITE)
        } else {
            (neutral_background(status), GRAY_400)
        };

        button::Style {
            background: Some(Background::Color(background)),
            text_color,
            border: Border {
                radius: ROUND.into(),
                ..Border::default()
            },
            ..button::Style::default()
        }
    }
}

/// Previous/next arrows, dimmed at the carousel boundaries
pub fn nav(arrow_color: Color) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme, status| {
        let opacity = if matches!(status, button::Status::Disabled) { 0.3 } else { 1.0 };

        button::Style {
            background: Some(Background::Color(faded(neutral_background(status), opacity))),
            text_color: faded(arrow_color, opacity),
            border: Border {
                radius: ROUND.into(),
                ..Border::default()
            },
            ..button::Style::default()
        }
    }
}

pub fn chip(selected: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme, status| {
        let (background, text_color) = if selected {
            (accent_gradient(), Color::WHITE)
        } else {
            (Background::Color(neutral_background(status)), rgb(0.82, 0.835, 0.859))
        };

        button::Style {
            background: Some(background),
            text_color,
            border: Border {
                radius: ROUND.into(),
                ..Border::default()
            },
            ..button::Style::default()
        }
    }
}

/// Floating upload button and the modal's close button
pub fn accent_button(radius: f32) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme, _status| button::Style {
        background: Some(accent_gradient()),
        text_color: Color::WHITE,
        border: Border {
            radius: radius.into(),
            ..Border::default()
        },
        ..button::Style::default()
    }
}

/// Header search button, no background until hovered
pub fn ghost(_theme: &Theme, status: button::Status) -> button::Style {
    let background = match status {
        button::Status::Hovered | button::Status::Pressed => Some(Background::Color(GRAY_800)),
        _ => None,
    };

    button::Style {
        background,
        text_color: GRAY_400,
        border: Border {
            radius: 8.0.into(),
            ..Border::default()
        },
        ..button::Style::default()
    }
}
