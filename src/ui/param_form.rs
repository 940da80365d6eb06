use iced::widget::{button, checkbox, column, pick_list, row, text, text_input};
use iced::{Element, Length};

use crate::params::{Algorithm, BoostMethod, ParamsForm, WeighFunction};
use crate::Message;

use super::style;

pub fn view<'a>(form: &'a ParamsForm) -> Element<'a, Message> {
    let tracking = column![
        text("Tracking").size(14),
        row![
            field("Max terms", &form.max_terms, Message::MaxTermsChanged),
            field(
                "Max related terms",
                &form.max_related_terms,
                Message::MaxRelatedTermsChanged
            ),
        ]
        .spacing(10),
        row![
            field("Start key", &form.start_key, Message::StartKeyChanged),
            field("End key", &form.end_key, Message::EndKeyChanged),
        ]
        .spacing(10),
        row![
            field("Min similarity", &form.min_sim, Message::MinSimChanged),
            field("Word boost", &form.word_boost, Message::WordBoostChanged),
        ]
        .spacing(10),
        row![
            labeled(
                "Algorithm",
                pick_list(
                    &Algorithm::ALL[..],
                    Some(form.algorithm),
                    Message::AlgorithmSelected
                )
                .width(Length::Fill)
                .style(style::pick_list_style)
                .padding([6, 8])
                .into(),
            ),
            labeled(
                "Boost method",
                pick_list(
                    &BoostMethod::ALL[..],
                    Some(form.boost_method),
                    Message::BoostMethodSelected
                )
                .width(Length::Fill)
                .style(style::pick_list_style)
                .padding([6, 8])
                .into(),
            ),
        ]
        .spacing(10),
        row![
            checkbox("Track forwards", form.forwards).on_toggle(Message::ForwardsToggled),
            checkbox("Clean term list", form.do_cleaning).on_toggle(Message::DoCleaningToggled),
        ]
        .spacing(20),
    ]
    .spacing(10);

    let aggregation = column![
        text("Aggregation").size(14),
        row![
            labeled(
                "Weigh function",
                pick_list(
                    &WeighFunction::ALL[..],
                    Some(form.agg_weigh_function),
                    Message::WeighFunctionSelected
                )
                .width(Length::Fill)
                .style(style::pick_list_style)
                .padding([6, 8])
                .into(),
            ),
            field(
                "Weigh function parameter",
                &form.agg_wf_param,
                Message::WfParamChanged
            ),
        ]
        .spacing(10),
        row![
            field(
                "Years per interval",
                &form.agg_years_in_interval,
                Message::YearsInIntervalChanged
            ),
            field(
                "Words per year",
                &form.agg_words_per_year,
                Message::WordsPerYearChanged
            ),
        ]
        .spacing(10),
    ]
    .spacing(10);

    let apply = button(text("Apply").size(13))
        .on_press(Message::ApplyPressed)
        .padding([8, 18])
        .style(style::primary_button);

    column![tracking, aggregation, apply].spacing(18).into()
}

fn field<'a>(
    label: &'a str,
    value: &'a str,
    on_input: impl Fn(String) -> Message + 'a,
) -> Element<'a, Message> {
    labeled(
        label,
        text_input("", value)
            .on_input(on_input)
            .padding(8)
            .style(style::input_style)
            .width(Length::Fill)
            .into(),
    )
}

fn labeled<'a>(label: &'a str, widget: Element<'a, Message>) -> Element<'a, Message> {
    column![text(label).size(12).color(style::TEXT_MUTED), widget]
        .spacing(4)
        .width(Length::FillPortion(1))
        .into()
}
