use crate::config::{get_settings, get_settings_mut, validate_api_url};
use crate::models::page::PAGE_SIZES;
use iced::widget::{Button, Column, Container, PickList, Row, Scrollable, Text, TextInput};
use iced::{Element, Length, Padding, Task};
use iced_modern_theme::Modern;
use log::error;

pub enum Action {
    None,
    UpdateUI(),
}

#[derive(Debug, Clone)]
pub enum Message {
    LanguageChanged(String),
    ThemeChanged(String),
    RoasPerPageChanged(u64),
    ApiUrlChanged(String),
    ApiUrlSubmitted,
}

pub struct Preferences {
    available_languages: Vec<String>,
    pub theme: String,
    pub roas_per_page: u64,
    pub api_url: String,
    pub api_url_error: Option<String>,
    selected_language: String,
}

const THEMES: [&str; 2] = ["Light", "Dark"];

impl Preferences {
    pub fn new() -> (Self, Task<Message>) {
        let settings = get_settings();
        let available_languages = rust_i18n::available_locales!()
            .iter()
            .map(|l| l.to_string())
            .collect();
        (
            Self {
                available_languages,
                selected_language: settings.config.language.clone(),
                theme: settings.config.theme.clone(),
                roas_per_page: settings.config.roas_per_page,
                api_url: settings.config.api_url.clone(),
                api_url_error: None,
            },
            Task::none(),
        )
    }

    pub fn update(&mut self, message: Message) -> Action {
        match message {
            Message::LanguageChanged(language) => {
                let mut settings = get_settings_mut();
                settings.config.language = language;
                if let Err(err) = settings.save() {
                    error!("Failed to save settings: {}", err);
                }
                rust_i18n::set_locale(&settings.config.language);
                self.selected_language = settings.config.language.clone();
                Action::UpdateUI()
            }
            Message::ThemeChanged(theme) => {
                let mut settings = get_settings_mut();
                settings.config.theme = theme;
                if let Err(err) = settings.save() {
                    error!("Failed to save settings: {}", err);
                }
                self.theme = settings.config.theme.clone();
                Action::UpdateUI()
            }
            Message::RoasPerPageChanged(roas_per_page) => {
                self.roas_per_page = roas_per_page;
                let mut settings = get_settings_mut();
                settings.config.roas_per_page = roas_per_page;
                if let Err(err) = settings.save() {
                    error!("Failed to save settings: {}", err);
                }
                Action::None
            }
            Message::ApiUrlChanged(api_url) => {
                self.api_url = api_url;
                self.api_url_error = None;
                Action::None
            }
            Message::ApiUrlSubmitted => {
                let api_url = self.api_url.trim().to_string();
                if let Err(err) = validate_api_url(&api_url) {
                    self.api_url_error = Some(err);
                    return Action::None;
                }
                let mut settings = get_settings_mut();
                settings.config.api_url = api_url;
                if let Err(err) = settings.save() {
                    error!("Failed to save settings: {}", err);
                }
                self.api_url = settings.config.api_url.clone();
                Action::UpdateUI()
            }
        }
    }

    pub fn view(&self) -> Element<Message> {
        let language_section = self.create_section(
            t!("preferences.label.language").to_string(),
            PickList::new(
                self.available_languages.clone(),
                Some(self.selected_language.clone()),
                Message::LanguageChanged,
            )
            .placeholder(t!("preferences.select.language"))
            .style(Modern::pick_list())
            .width(Length::Fill),
        );

        let theme_section = self.create_section(
            t!("preferences.label.theme").to_string(),
            PickList::new(THEMES, Some(self.theme.as_str()), |theme| {
                Message::ThemeChanged(theme.to_string())
            })
            .placeholder(t!("preferences.select.theme"))
            .style(Modern::pick_list())
            .width(Length::Fill),
        );

        let page_size_section = self.create_section(
            t!("preferences.label.roas_per_page").to_string(),
            PickList::new(
                PAGE_SIZES,
                Some(self.roas_per_page),
                Message::RoasPerPageChanged,
            )
            .style(Modern::pick_list())
            .width(Length::Fill),
        );

        let mut api_url_column = Column::new().spacing(8).push(
            Row::new()
                .spacing(10)
                .push(
                    TextInput::new("http://localhost:8080", &self.api_url)
                        .on_input(Message::ApiUrlChanged)
                        .on_submit(Message::ApiUrlSubmitted)
                        .style(Modern::text_input())
                        .padding(Padding::new(12.0))
                        .size(16)
                        .width(Length::Fill),
                )
                .push(
                    Button::new(Text::new(t!("preferences.button.apply")))
                        .style(Modern::primary_button())
                        .on_press(Message::ApiUrlSubmitted)
                        .padding([12, 20]),
                ),
        );
        if let Some(err) = &self.api_url_error {
            api_url_column = api_url_column.push(
                Text::new(err.as_str())
                    .size(14)
                    .style(Modern::secondary_text()),
            );
        }
        let api_url_section = self.create_section(
            t!("preferences.label.api_url").to_string(),
            api_url_column,
        );

        let scrollable = Scrollable::new(
            Column::new()
                .padding(20)
                .spacing(30)
                .push(
                    Text::new(t!("preferences.title"))
                        .size(32)
                        .style(Modern::primary_text()),
                )
                .push(
                    Text::new(t!("preferences.subtitle"))
                        .size(16)
                        .style(Modern::secondary_text()),
                )
                .push(
                    Column::new()
                        .spacing(25)
                        .push(language_section)
                        .push(theme_section)
                        .push(page_size_section)
                        .push(api_url_section),
                ),
        );

        Container::new(scrollable)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }

    fn create_section<'a>(
        &self,
        title: String,
        widget: impl Into<Element<'a, Message>>,
    ) -> Element<'a, Message> {
        Container::new(
            Column::new()
                .spacing(12)
                .push(Text::new(title).size(18).style(Modern::primary_text()))
                .push(widget),
        )
        .padding(20)
        .style(Modern::card_container())
        .width(Length::Fill)
        .into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_api_url_is_reported_and_not_saved() {
        let (mut preferences, _) = Preferences::new();
        let saved = get_settings().config.api_url.clone();

        preferences.update(Message::ApiUrlChanged("ftp://rpki.example.net".to_string()));
        let action = preferences.update(Message::ApiUrlSubmitted);

        assert!(matches!(action, Action::None));
        assert!(preferences.api_url_error.is_some());
        assert_eq!(get_settings().config.api_url, saved);

        preferences.update(Message::ApiUrlChanged("http://localhost:8080".to_string()));
        assert_eq!(preferences.api_url_error, None);
    }
}
