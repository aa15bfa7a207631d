#[macro_use]
extern crate rust_i18n;
mod components;
mod config;
mod error;
mod models;
mod screen;
mod services;
mod utils;

use crate::components::navbar::{NavButton, Navbar};
use crate::components::toast::{Toast, ToastKind};
use crate::components::{navbar, toast};
use crate::config::get_settings;
use crate::screen::{Preferences, RoasList, Screen, TrustAnchors};
use crate::screen::{preferences, roas_list, trust_anchors};
use crate::services::api_client::ApiClient;
use crate::services::logger_service;
use iced::widget::{Column, Row, container, stack};
use iced::{Alignment, Element, Length, Subscription, Task, Theme, time};
use iced_modern_theme::Modern;
use log::{error, info};
use std::time::{Duration, Instant};

i18n!("locales", fallback = "en");

const TOAST_DURATION: Duration = Duration::from_secs(4);

#[derive(Debug, Clone)]
pub enum Message {
    Navbar(navbar::Message),
    Roas(roas_list::Message),
    TrustAnchors(trust_anchors::Message),
    Preferences(preferences::Message),
    SettingsUpdated,
    Toast(toast::Message),
    Tick(Instant),
    HandleToast {
        kind: ToastKind,
        message: String,
        duration: Option<Duration>,
    },
}

pub struct ValidatorUi {
    theme: Theme,
    screen: Screen,
    navbar: Navbar,
    toasts: Vec<Toast>,
    next_toast_id: u32,
    client: ApiClient,
}

fn theme_from_settings() -> Theme {
    if get_settings().config.theme == "Dark" {
        Modern::dark_theme()
    } else {
        Modern::light_theme()
    }
}

impl ValidatorUi {
    pub fn new(client: ApiClient) -> (Self, Task<Message>) {
        let (roas, roas_task) = RoasList::new(client.clone());
        (
            Self {
                theme: theme_from_settings(),
                screen: Screen::Roas(roas),
                navbar: Navbar::new(),
                toasts: vec![],
                next_toast_id: 0,
                client,
            },
            roas_task.map(Message::Roas),
        )
    }

    pub fn title(&self) -> String {
        t!("app.title").to_string()
    }

    fn theme(&self) -> Theme {
        self.theme.clone()
    }

    fn push_toast(&mut self, kind: ToastKind, message: String, duration: Option<Duration>) {
        self.toasts.push(Toast {
            id: self.next_toast_id,
            message,
            kind,
            created: Instant::now(),
            duration: duration.unwrap_or(TOAST_DURATION),
        });
        self.next_toast_id = self.next_toast_id.wrapping_add(1);
    }

    fn navigate(&mut self, target: NavButton) -> Task<Message> {
        match target {
            NavButton::Roas => {
                let (roas, task) = RoasList::new(self.client.clone());
                self.screen = Screen::Roas(roas);
                task.map(Message::Roas)
            }
            NavButton::TrustAnchors => {
                let (trust_anchors, task) = TrustAnchors::new(self.client.clone());
                self.screen = Screen::TrustAnchors(trust_anchors);
                task.map(Message::TrustAnchors)
            }
            NavButton::Preferences => {
                let (preferences, task) = Preferences::new();
                self.screen = Screen::Preferences(preferences);
                task.map(Message::Preferences)
            }
        }
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::HandleToast {
                kind,
                message,
                duration,
            } => {
                self.push_toast(kind, message, duration);
                Task::none()
            }
            Message::Roas(message) => {
                if let Screen::Roas(roas) = &mut self.screen {
                    match roas.update(message) {
                        roas_list::Action::None => Task::none(),
                        roas_list::Action::Run(task) => task.map(Message::Roas),
                        roas_list::Action::ShowToast {
                            kind,
                            message,
                            duration,
                        } => self.update(Message::HandleToast {
                            kind,
                            message,
                            duration,
                        }),
                    }
                } else {
                    Task::none()
                }
            }
            Message::TrustAnchors(message) => {
                if let Screen::TrustAnchors(trust_anchors) = &mut self.screen {
                    match trust_anchors.update(message) {
                        trust_anchors::Action::None => Task::none(),
                        trust_anchors::Action::Run(task) => task.map(Message::TrustAnchors),
                    }
                } else {
                    Task::none()
                }
            }
            Message::Preferences(message) => {
                if let Screen::Preferences(preferences) = &mut self.screen {
                    match preferences.update(message) {
                        preferences::Action::None => Task::none(),
                        preferences::Action::UpdateUI() => self.update(Message::SettingsUpdated),
                    }
                } else {
                    Task::none()
                }
            }
            Message::SettingsUpdated => {
                self.theme = theme_from_settings();
                match ApiClient::from_settings() {
                    Ok(client) => {
                        info!("Validator API url set to {}", client.base_url());
                        self.client = client;
                    }
                    Err(err) => {
                        error!("Keeping previous API client: {}", err);
                        self.push_toast(ToastKind::Error, err.to_string(), None);
                    }
                }
                let (preferences, task) = Preferences::new();
                self.screen = Screen::Preferences(preferences);
                task.map(Message::Preferences)
            }
            Message::Navbar(navbar_msg) => match self.navbar.update(navbar_msg) {
                navbar::Action::Run(task) => task.map(Message::Navbar),
                navbar::Action::Navigate(target) => self.navigate(target),
            },
            Message::Tick(now) => {
                self.toasts.retain(|toast| !toast.is_expired(now));
                Task::none()
            }
            Message::Toast(toast::Message::Dismiss(id)) => {
                self.toasts.retain(|toast| toast.id != id);
                Task::none()
            }
        }
    }

    pub fn subscription(&self) -> Subscription<Message> {
        if self.toasts.is_empty() {
            Subscription::none()
        } else {
            time::every(Duration::from_millis(500)).map(Message::Tick)
        }
    }

    pub fn view(&self) -> Element<Message> {
        let navbar = self.navbar.view().map(Message::Navbar);

        let content = match &self.screen {
            Screen::Roas(roas) => roas.view().map(Message::Roas),
            Screen::TrustAnchors(trust_anchors) => {
                trust_anchors.view().map(Message::TrustAnchors)
            }
            Screen::Preferences(preferences) => preferences.view().map(Message::Preferences),
        };

        let layout = Row::new().push(navbar).push(content);

        let toast_widgets: Vec<_> = self
            .toasts
            .iter()
            .map(|toast| toast.view().map(Message::Toast))
            .collect();

        let toast_overlay = container(Column::with_children(toast_widgets).spacing(10))
            .width(Length::Fill)
            .height(Length::Fill)
            .padding(20)
            .align_x(Alignment::Start)
            .align_y(Alignment::End);

        stack![layout, toast_overlay].into()
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv::dotenv().ok();
    logger_service::init()?;
    info!("Starting application");
    info!("{:?}", _rust_i18n_available_locales());

    {
        let settings = get_settings();
        rust_i18n::set_locale(settings.config.language.as_str());
    }

    let client = ApiClient::from_settings()?;
    info!("Validator API url: {}", client.base_url());

    iced::application(ValidatorUi::title, ValidatorUi::update, ValidatorUi::view)
        .theme(ValidatorUi::theme)
        .subscription(ValidatorUi::subscription)
        .run_with(move || ValidatorUi::new(client))?;

    Ok(())
}
