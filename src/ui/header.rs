use iced::alignment::Alignment;
use iced::widget::{button, container, horizontal_space, row, text};
use iced::{Element, Length};

use crate::Message;

use super::style;

pub fn view<'a>() -> Element<'a, Message> {
    let export = button(text("Export").size(13))
        .on_press(Message::ExportPressed)
        .padding([6, 12])
        .style(style::subtle_button);

    let import = button(text("Import").size(13))
        .on_press(Message::ImportPressed)
        .padding([6, 12])
        .style(style::subtle_button);

    container(
        row![
            text("Semtrack").size(16),
            text(format!("v{}", env!("CARGO_PKG_VERSION"))).size(10).color(style::TEXT_MUTED),
            horizontal_space(),
            export,
            import
        ]
        .spacing(8)
        .padding([5, 12])
        .align_y(Alignment::Center),
    )
    .width(Length::Fill)
    .style(|_| style::surface_style(style::SURFACE_1, 0.0))
    .into()
}
