use crate::components::empty_state;
use crate::models::trust_anchor::TrustAnchor;
use crate::services::api_client::ApiClient;
use crate::services::trust_anchor_service;
use iced::widget::{Button, Column, Container, Row, Scrollable, Text};
use iced::{Alignment, Element, Length, Task};
use iced_font_awesome::fa_icon_solid;
use iced_modern_theme::Modern;
use log::{error, info};

pub enum Action {
    None,
    Run(Task<Message>),
}

#[derive(Debug, Clone)]
pub enum Message {
    Loaded(Result<Vec<TrustAnchor>, String>),
    Refresh,
}

pub struct TrustAnchors {
    client: ApiClient,
    pub trust_anchors: Vec<TrustAnchor>,
    pub error_message: Option<String>,
    loading: bool,
}

impl TrustAnchors {
    pub fn new(client: ApiClient) -> (Self, Task<Message>) {
        let mut screen = Self {
            client,
            trust_anchors: vec![],
            error_message: None,
            loading: false,
        };
        let task = screen.load();
        (screen, task)
    }

    fn load(&mut self) -> Task<Message> {
        self.loading = true;
        let client = self.client.clone();
        Task::perform(
            async move {
                trust_anchor_service::get_trust_anchors(&client)
                    .await
                    .map_err(|e| e.to_string())
            },
            Message::Loaded,
        )
    }

    pub fn update(&mut self, message: Message) -> Action {
        match message {
            Message::Loaded(Ok(trust_anchors)) => {
                info!("Loaded {} trust anchors", trust_anchors.len());
                self.loading = false;
                self.trust_anchors = trust_anchors;
                self.error_message = None;
                Action::None
            }
            Message::Loaded(Err(err)) => {
                error!("Failed to load trust anchors: {}", err);
                self.loading = false;
                self.error_message = Some(err);
                Action::None
            }
            Message::Refresh => Action::Run(self.load()),
        }
    }

    pub fn view(&self) -> Element<Message> {
        let header = Row::new()
            .spacing(10)
            .align_y(Alignment::Center)
            .push(
                Text::new(t!("trust_anchors.title"))
                    .size(32)
                    .style(Modern::primary_text())
                    .width(Length::Fill),
            )
            .push(
                Button::new(
                    Row::new()
                        .spacing(8)
                        .align_y(Alignment::Center)
                        .push(fa_icon_solid("rotate").size(16.0))
                        .push(Text::new(t!("trust_anchors.button.refresh")).size(16)),
                )
                .style(Modern::primary_button())
                .on_press(Message::Refresh)
                .padding([10, 16]),
            );

        let mut content = Column::new().spacing(20).padding(10).push(header);

        if let Some(err) = &self.error_message {
            content = content.push(
                Text::new(t!("trust_anchors.error.load", error = err))
                    .size(14)
                    .style(Modern::secondary_text()),
            );
        }

        let body: Element<Message> = if self.trust_anchors.is_empty() {
            let title = if self.loading {
                t!("trust_anchors.loading.title")
            } else {
                t!("trust_anchors.empty.title")
            };
            empty_state("shield-halved", title.to_string(), String::new())
        } else {
            self.trust_anchors
                .iter()
                .fold(Column::new().spacing(12), |column, ta| {
                    column.push(trust_anchor_card(ta))
                })
                .into()
        };

        content = content.push(
            Container::new(Scrollable::new(body))
                .width(Length::Fill)
                .height(Length::Fill),
        );

        Container::new(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }
}

fn trust_anchor_card(ta: &TrustAnchor) -> Element<'_, Message> {
    let (icon, status) = if ta.initial_certificate_tree_validation_run_completed {
        ("circle-check", t!("trust_anchors.status.completed"))
    } else {
        ("hourglass-half", t!("trust_anchors.status.pending"))
    };

    let locations = ta.locations.iter().fold(Column::new().spacing(4), |column, location| {
        column.push(Text::new(location.as_str()).size(13).style(Modern::secondary_text()))
    });

    let mut title = Row::new()
        .spacing(10)
        .align_y(Alignment::Center)
        .push(fa_icon_solid(icon).size(18.0))
        .push(Text::new(ta.name.as_str()).size(18).style(Modern::primary_text()))
        .push(Text::new(status).size(14).style(Modern::secondary_text()));
    if let Some(badge) = origin_label(ta) {
        title = title.push(
            Container::new(Text::new(badge).size(12))
                .padding([2, 8])
                .style(Modern::accent_container()),
        );
    }

    Container::new(
        Column::new()
            .spacing(8)
            .push(title)
            .push(locations),
    )
    .padding(16)
    .width(Length::Fill)
    .style(Modern::card_container())
    .into()
}

fn origin_label(ta: &TrustAnchor) -> Option<String> {
    ta.preconfigured
        .then(|| t!("trust_anchors.badge.preconfigured").to_string())
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;

    fn screen() -> TrustAnchors {
        let client = ApiClient::new("http://127.0.0.1:9", Duration::from_secs(1)).expect("client");
        TrustAnchors::new(client).0
    }

    #[test]
    fn loaded_trust_anchors_replace_error() {
        let mut screen = screen();
        screen.error_message = Some("timeout".to_string());
        screen.update(Message::Loaded(Ok(vec![TrustAnchor {
            name: "RIPE NCC RPKI Root".to_string(),
            locations: vec!["rsync://rpki.ripe.net/ta/ripe-ncc-ta.cer".to_string()],
            preconfigured: true,
            initial_certificate_tree_validation_run_completed: true,
        }])));
        assert_eq!(screen.trust_anchors.len(), 1);
        assert_eq!(screen.error_message, None);
        assert!(!screen.loading);
    }

    #[test]
    fn only_preconfigured_trust_anchors_get_a_badge() {
        let mut ta = TrustAnchor {
            name: "AFRINIC RPKI Root".to_string(),
            locations: vec![],
            preconfigured: true,
            initial_certificate_tree_validation_run_completed: false,
        };
        assert!(origin_label(&ta).is_some_and(|label| !label.is_empty()));
        ta.preconfigured = false;
        assert_eq!(origin_label(&ta), None);
    }

    #[test]
    fn failure_is_kept_as_display_string() {
        let mut screen = screen();
        screen.update(Message::Loaded(Err("connection refused".to_string())));
        assert_eq!(screen.error_message.as_deref(), Some("connection refused"));
        assert!(matches!(screen.update(Message::Refresh), Action::Run(_)));
        assert!(screen.loading);
    }
}
