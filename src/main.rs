mod panel;
mod params;
mod storage;
mod store;
mod ui;

use iced::widget::{column, container, scrollable, text, text_editor};
use iced::{Element, Length, Task};

use panel::{PanelMode, ParamIoPanel};
use params::ParamsForm;
use store::{ParameterService, ParameterStore};
use ui::style;

fn main() -> iced::Result {
    iced::application("Semtrack", update, view)
        .theme(|_| style::app_theme())
        .window_size((760.0, 860.0))
        .run_with(|| (App::default(), Task::none()))
}

struct App {
    store: ParameterStore,
    form: ParamsForm,
    panel: ParamIoPanel,
    error: Option<String>,
}

impl Default for App {
    fn default() -> Self {
        let (store, load_error) = match ParameterStore::load() {
            Ok(store) => (store, None),
            Err(err) => (ParameterStore::with_defaults(), Some(err)),
        };
        let form = ParamsForm::from_params(store.params());

        Self {
            store,
            form,
            panel: ParamIoPanel::new(),
            error: load_error,
        }
    }
}

#[derive(Debug, Clone)]
pub enum Message {
    MaxTermsChanged(String),
    MaxRelatedTermsChanged(String),
    StartKeyChanged(String),
    EndKeyChanged(String),
    MinSimChanged(String),
    WordBoostChanged(String),
    ForwardsToggled(bool),
    DoCleaningToggled(bool),
    AlgorithmSelected(params::Algorithm),
    BoostMethodSelected(params::BoostMethod),
    WeighFunctionSelected(params::WeighFunction),
    WfParamChanged(String),
    YearsInIntervalChanged(String),
    WordsPerYearChanged(String),
    ApplyPressed,
    ExportPressed,
    ImportPressed,
    PanelEdited(text_editor::Action),
    PanelClosePressed,
}

fn update(app: &mut App, message: Message) -> Task<Message> {
    match message {
        Message::MaxTermsChanged(value) => {
            app.form.max_terms = value;
            Task::none()
        }
        Message::MaxRelatedTermsChanged(value) => {
            app.form.max_related_terms = value;
            Task::none()
        }
        Message::StartKeyChanged(value) => {
            app.form.start_key = value;
            Task::none()
        }
        Message::EndKeyChanged(value) => {
            app.form.end_key = value;
            Task::none()
        }
        Message::MinSimChanged(value) => {
            app.form.min_sim = value;
            Task::none()
        }
        Message::WordBoostChanged(value) => {
            app.form.word_boost = value;
            Task::none()
        }
        Message::ForwardsToggled(value) => {
            app.form.forwards = value;
            Task::none()
        }
        Message::DoCleaningToggled(value) => {
            app.form.do_cleaning = value;
            Task::none()
        }
        Message::AlgorithmSelected(algorithm) => {
            app.form.algorithm = algorithm;
            Task::none()
        }
        Message::BoostMethodSelected(method) => {
            app.form.boost_method = method;
            Task::none()
        }
        Message::WeighFunctionSelected(function) => {
            app.form.agg_weigh_function = function;
            Task::none()
        }
        Message::WfParamChanged(value) => {
            app.form.agg_wf_param = value;
            Task::none()
        }
        Message::YearsInIntervalChanged(value) => {
            app.form.agg_years_in_interval = value;
            Task::none()
        }
        Message::WordsPerYearChanged(value) => {
            app.form.agg_words_per_year = value;
            Task::none()
        }
        Message::ApplyPressed => {
            let result = app
                .form
                .to_params()
                .and_then(|params| app.store.write(params));
            app.error = result.err();
            Task::none()
        }
        Message::ExportPressed => {
            app.error = app.panel.open_export(&app.store).err();
            Task::none()
        }
        Message::ImportPressed => {
            app.panel.open_import();
            app.error = None;
            Task::none()
        }
        Message::PanelEdited(action) => {
            app.panel.perform(action);
            Task::none()
        }
        Message::PanelClosePressed => {
            let was_import = app.panel.mode() == PanelMode::Import;
            match app.panel.close(&mut app.store) {
                Ok(()) => {
                    app.error = None;
                    if was_import {
                        app.form = ParamsForm::from_params(app.store.params());
                    }
                }
                Err(err) => app.error = Some(err),
            }
            Task::none()
        }
    }
}

fn view(app: &App) -> Element<'_, Message> {
    let header = ui::header::view();

    let content: Element<'_, Message> = if app.panel.is_open() {
        ui::param_io::view(&app.panel)
    } else {
        scrollable(ui::param_form::view(&app.form))
            .height(Length::Fill)
            .into()
    };

    let main_section = container(content)
        .padding(16)
        .width(Length::Fill)
        .height(Length::Fill)
        .style(|_| style::flat_surface_style(style::SURFACE_0));

    let status: Element<'_, Message> = if let Some(err) = app.error.as_deref() {
        container(text(err).size(12).color(style::DANGER))
            .padding([6, 12])
            .width(Length::Fill)
            .style(|_| style::surface_style(style::SURFACE_1, 0.0))
            .into()
    } else {
        container(text("Ready").size(12).color(style::TEXT_MUTED))
            .padding([6, 12])
            .width(Length::Fill)
            .style(|_| style::surface_style(style::SURFACE_1, 0.0))
            .into()
    };

    let layout = column![header, main_section, status]
        .spacing(1)
        .height(Length::Fill)
        .width(Length::Fill);

    container(layout)
        .width(Length::Fill)
        .height(Length::Fill)
        .style(|_| style::flat_surface_style(style::BG))
        .into()
}
