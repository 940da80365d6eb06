use iced::widget::{button, container, pick_list, text_editor, text_input};
use iced::{Background, Border, Color, Theme};

pub const BG: Color = Color {
    r: 16.0 / 255.0,
    g: 19.0 / 255.0,
    b: 26.0 / 255.0,
    a: 1.0,
};
pub const SURFACE_0: Color = Color {
    r: 21.0 / 255.0,
    g: 25.0 / 255.0,
    b: 34.0 / 255.0,
    a: 1.0,
};
pub const SURFACE_1: Color = Color {
    r: 27.0 / 255.0,
    g: 32.0 / 255.0,
    b: 43.0 / 255.0,
    a: 1.0,
};
pub const SURFACE_2: Color = Color {
    r: 34.0 / 255.0,
    g: 41.0 / 255.0,
    b: 54.0 / 255.0,
    a: 1.0,
};
pub const SURFACE_3: Color = Color {
    r: 42.0 / 255.0,
    g: 51.0 / 255.0,
    b: 66.0 / 255.0,
    a: 1.0,
};
pub const BORDER: Color = Color {
    r: 52.0 / 255.0,
    g: 62.0 / 255.0,
    b: 78.0 / 255.0,
    a: 1.0,
};
pub const TEXT: Color = Color {
    r: 228.0 / 255.0,
    g: 234.0 / 255.0,
    b: 243.0 / 255.0,
    a: 1.0,
};
pub const TEXT_MUTED: Color = Color {
    r: 130.0 / 255.0,
    g: 142.0 / 255.0,
    b: 158.0 / 255.0,
    a: 1.0,
};
pub const PRIMARY: Color = Color {
    r: 86.0 / 255.0,
    g: 156.0 / 255.0,
    b: 240.0 / 255.0,
    a: 1.0,
};
pub const PRIMARY_HOVER: Color = Color {
    r: 108.0 / 255.0,
    g: 172.0 / 255.0,
    b: 248.0 / 255.0,
    a: 1.0,
};
pub const DANGER: Color = Color {
    r: 226.0 / 255.0,
    g: 92.0 / 255.0,
    b: 92.0 / 255.0,
    a: 1.0,
};

const SELECTION: Color = Color {
    r: 86.0 / 255.0,
    g: 156.0 / 255.0,
    b: 240.0 / 255.0,
    a: 0.35,
};

pub fn app_theme() -> Theme {
    Theme::custom(
        "Semtrack".to_string(),
        iced::theme::Palette {
            background: BG,
            text: TEXT,
            primary: PRIMARY,
            success: PRIMARY,
            danger: DANGER,
        },
    )
}

pub fn surface_style(color: Color, border_radius: f32) -> container::Style {
    container::Style::default()
        .background(Background::Color(color))
        .color(TEXT)
        .border(Border {
            radius: border_radius.into(),
            width: 1.0,
            color: BORDER,
        })
}

pub fn flat_surface_style(color: Color) -> container::Style {
    container::Style::default()
        .background(Background::Color(color))
        .color(TEXT)
}

pub fn primary_button(_theme: &Theme, status: button::Status) -> button::Style {
    let bg = match status {
        button::Status::Active => PRIMARY,
        button::Status::Hovered => PRIMARY_HOVER,
        button::Status::Pressed => PRIMARY,
        button::Status::Disabled => SURFACE_3,
    };

    button::Style {
        background: Some(Background::Color(bg)),
        text_color: if matches!(status, button::Status::Disabled) {
            TEXT_MUTED
        } else {
            BG
        },
        border: Border {
            radius: 8.0.into(),
            width: 1.0,
            color: bg,
        },
        shadow: Default::default(),
    }
}

pub fn subtle_button(_theme: &Theme, status: button::Status) -> button::Style {
    let bg = match status {
        button::Status::Active => SURFACE_2,
        button::Status::Hovered => SURFACE_3,
        button::Status::Pressed => SURFACE_3,
        button::Status::Disabled => SURFACE_1,
    };

    button::Style {
        background: Some(Background::Color(bg)),
        text_color: if matches!(status, button::Status::Disabled) {
            TEXT_MUTED
        } else {
            TEXT
        },
        border: Border {
            radius: 8.0.into(),
            width: 1.0,
            color: BORDER,
        },
        shadow: Default::default(),
    }
}

pub fn input_style(_theme: &Theme, status: text_input::Status) -> text_input::Style {
    let base = text_input::Style {
        background: Background::Color(SURFACE_1),
        border: Border {
            radius: 8.0.into(),
            width: 1.0,
            color: BORDER,
        },
        icon: TEXT_MUTED,
        placeholder: TEXT_MUTED,
        value: TEXT,
        selection: SELECTION,
    };

    match status {
        text_input::Status::Active => base,
        text_input::Status::Hovered => text_input::Style {
            border: Border {
                color: SURFACE_3,
                ..base.border
            },
            ..base
        },
        text_input::Status::Focused => text_input::Style {
            border: Border {
                color: PRIMARY,
                ..base.border
            },
            ..base
        },
        text_input::Status::Disabled => text_input::Style {
            value: TEXT_MUTED,
            ..base
        },
    }
}

pub fn editor_style(_theme: &Theme, status: text_editor::Status) -> text_editor::Style {
    let base = text_editor::Style {
        background: Background::Color(SURFACE_1),
        border: Border {
            radius: 8.0.into(),
            width: 1.0,
            color: BORDER,
        },
        icon: TEXT_MUTED,
        placeholder: TEXT_MUTED,
        value: TEXT,
        selection: SELECTION,
    };

    match status {
        text_editor::Status::Active => base,
        text_editor::Status::Hovered => text_editor::Style {
            border: Border {
                color: SURFACE_3,
                ..base.border
            },
            ..base
        },
        text_editor::Status::Focused => text_editor::Style {
            border: Border {
                color: PRIMARY,
                ..base.border
            },
            ..base
        },
        text_editor::Status::Disabled => text_editor::Style {
            value: TEXT_MUTED,
            ..base
        },
    }
}

pub fn pick_list_style(_theme: &Theme, status: pick_list::Status) -> pick_list::Style {
    let base = pick_list::Style {
        text_color: TEXT,
        background: Background::Color(SURFACE_1),
        placeholder_color: TEXT_MUTED,
        handle_color: TEXT_MUTED,
        border: Border {
            radius: 8.0.into(),
            width: 1.0,
            color: BORDER,
        },
    };

    match status {
        pick_list::Status::Active => base,
        pick_list::Status::Hovered | pick_list::Status::Opened => pick_list::Style {
            border: Border {
                color: PRIMARY,
                ..base.border
            },
            ..base
        },
    }
}
