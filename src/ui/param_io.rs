use iced::widget::{button, column, horizontal_space, row, text, text_editor};
use iced::{Element, Length};

use crate::panel::{PanelMode, ParamIoPanel};
use crate::Message;

use super::style;

pub fn view<'a>(panel: &'a ParamIoPanel) -> Element<'a, Message> {
    let title = match panel.mode() {
        PanelMode::Import => "Paste parameters JSON",
        _ => "Current parameters (read-only)",
    };

    let mut editor = text_editor(panel.editor())
        .height(Length::Fill)
        .style(style::editor_style);
    if panel.is_editable() {
        editor = editor
            .placeholder("{ \"maxTerms\": 10, ... }")
            .on_action(Message::PanelEdited);
    }

    let action = button(text(panel.action_label()).size(13))
        .on_press(Message::PanelClosePressed)
        .padding([8, 18])
        .style(style::primary_button);

    column![
        text(title).size(14),
        editor,
        row![horizontal_space(), action]
    ]
    .spacing(10)
    .height(Length::Fill)
    .into()
}
