use crate::components::toast::ToastKind;
use crate::components::{SearchBarConfig, alert, empty_state, pagination, search_bar};
use crate::config::get_settings;
use crate::models::page::{PAGE_SIZES, Pagination, normalize_page_size};
use crate::models::roa::{Roa, RoasResponse};
use crate::models::trust_anchor::{TrustAnchor, validated_names};
use crate::services::api_client::ApiClient;
use crate::services::export_service::{self, ExportFormat, ExportOutcome};
use crate::services::roa_service::{self, RoaQuery};
use crate::services::trust_anchor_service;
use iced::alignment::Horizontal;
use iced::task::Handle;
use iced::widget::{Button, Column, Container, Row, Scrollable, Text};
use iced::{Alignment, Element, Length, Task};
use iced_font_awesome::fa_icon_solid;
use iced_modern_theme::Modern;
use log::{debug, error, info, warn};
use rfd::AsyncFileDialog;
use std::time::Duration;

const SEARCH_DEBOUNCE: Duration = Duration::from_millis(300);

pub enum Action {
    None,
    Run(Task<Message>),
    ShowToast {
        kind: ToastKind,
        message: String,
        duration: Option<Duration>,
    },
}

#[derive(Debug, Clone)]
pub enum Message {
    RoasLoaded(RoaQuery, Result<RoasResponse, String>),
    TotalEstimated(RoaQuery, Result<Option<u64>, String>),
    TrustAnchorsLoaded(Result<Vec<TrustAnchor>, String>),
    PageChanged(u64),
    PageSizeChanged(u64),
    QueryChanged(String),
    DelayedQuery(String),
    SearchByClick,
    DismissAlert,
    ExportRequested(ExportFormat),
    ExportFinished(Result<ExportOutcome, String>),
    Refresh,
}

/// Paginated list of validated ROAs with the validated trust anchors banner.
pub struct RoasList {
    client: ApiClient,
    pub roas: Vec<Roa>,
    pub response: Option<RoasResponse>,
    pub pagination: Pagination,
    pub error_message: Option<String>,
    /// Failure of the last total estimate; the rows themselves loaded.
    pub total_error: Option<String>,
    pub alert_shown: bool,
    pub alert_list_validated_ta: Option<String>,
    /// Text currently typed in the search box.
    pub query: String,
    /// Search term applied to the backend request.
    pub search_by: Option<String>,
    loading: bool,
    last_query: Option<RoaQuery>,
    in_flight: Option<Handle>,
}

impl RoasList {
    pub fn new(client: ApiClient) -> (Self, Task<Message>) {
        let page_size = get_settings().config.roas_per_page;
        Self::with_page_size(client, page_size)
    }

    pub fn with_page_size(client: ApiClient, page_size: u64) -> (Self, Task<Message>) {
        let mut list = Self {
            client,
            roas: vec![],
            response: None,
            pagination: Pagination::new(normalize_page_size(page_size)),
            error_message: None,
            total_error: None,
            alert_shown: true,
            alert_list_validated_ta: None,
            query: String::new(),
            search_by: None,
            loading: false,
            last_query: None,
            in_flight: None,
        };
        let load = list.load_data();
        let trust_anchors = list.load_validated_trust_anchors();
        (list, Task::batch([load, trust_anchors]))
    }

    fn current_query(&self) -> RoaQuery {
        RoaQuery {
            start_from: self.pagination.offset(),
            page_size: self.pagination.page_size,
            search: self.search_by.clone(),
        }
    }

    /// Requests the current page, aborting a request that is still running.
    fn load_data(&mut self) -> Task<Message> {
        let query = self.current_query();
        debug!("Requesting roas {:?}", query);

        let client = self.client.clone();
        let request = query.clone();
        let (task, handle) = Task::perform(
            async move {
                roa_service::get_roas(&client, &request)
                    .await
                    .map_err(|e| e.to_string())
            },
            move |result| Message::RoasLoaded(query.clone(), result),
        )
        .abortable();

        if let Some(previous) = self.in_flight.replace(handle) {
            previous.abort();
        }
        self.loading = true;
        self.last_query = Some(self.current_query());
        task
    }

    fn load_validated_trust_anchors(&self) -> Task<Message> {
        let client = self.client.clone();
        Task::perform(
            async move {
                trust_anchor_service::get_trust_anchors(&client)
                    .await
                    .map_err(|e| e.to_string())
            },
            Message::TrustAnchorsLoaded,
        )
    }

    fn estimate_total(&self, query: RoaQuery, response: RoasResponse) -> Task<Message> {
        let client = self.client.clone();
        let loaded = query.clone();
        Task::perform(
            async move {
                roa_service::estimate_total_roas(&client, &loaded, &response)
                    .await
                    .map_err(|e| e.to_string())
            },
            move |result| Message::TotalEstimated(query.clone(), result),
        )
    }

    fn is_current(&self, query: &RoaQuery) -> bool {
        self.last_query.as_ref() == Some(query)
    }

    fn has_next_page(&self) -> bool {
        match &self.response {
            Some(response) if response.links.next.is_some() => true,
            Some(_) => self.roas.len() as u64 == self.pagination.page_size,
            None => false,
        }
    }

    pub fn update(&mut self, message: Message) -> Action {
        match message {
            Message::RoasLoaded(query, result) => {
                if !self.is_current(&query) {
                    debug!("Dropping stale roas response for {:?}", query);
                    return Action::None;
                }
                self.loading = false;
                self.in_flight = None;

                match result {
                    Ok(response) => {
                        info!(
                            "Loaded {} roas from offset {}",
                            response.data.len(),
                            query.start_from
                        );
                        self.roas = response.data.clone();
                        self.response = Some(response.clone());
                        self.error_message = None;
                        self.pagination.recompute_bounds();
                        Action::Run(self.estimate_total(query, response))
                    }
                    Err(err) => {
                        error!("Failed to load roas: {}", err);
                        let err = if err.is_empty() {
                            t!("roas.error.unknown").to_string()
                        } else {
                            err
                        };
                        self.error_message = Some(err.clone());
                        Action::ShowToast {
                            kind: ToastKind::Error,
                            message: t!("roas.error.load", error = err).to_string(),
                            duration: None,
                        }
                    }
                }
            }

            Message::TotalEstimated(query, result) => {
                if !self.is_current(&query) {
                    return Action::None;
                }
                match result {
                    Ok(total) => {
                        debug!("Estimated roa total {:?}", total);
                        self.pagination.total = total;
                        self.total_error = None;
                    }
                    Err(err) => {
                        error!("Failed to estimate roa total: {}", err);
                        self.total_error = Some(err);
                    }
                }
                Action::None
            }

            Message::TrustAnchorsLoaded(result) => {
                match result {
                    Ok(trust_anchors) => {
                        let names = validated_names(&trust_anchors);
                        debug!("Validated trust anchors: {}", names);
                        self.alert_list_validated_ta = Some(names);
                    }
                    Err(err) => warn!("Unable to load trust anchors for the alert: {}", err),
                }
                Action::None
            }

            Message::PageChanged(page) => {
                if self.pagination.go_to_page(page) {
                    Action::Run(self.load_data())
                } else {
                    Action::None
                }
            }

            Message::PageSizeChanged(page_size) => {
                self.pagination.change_page_size(normalize_page_size(page_size));
                Action::Run(self.load_data())
            }

            Message::QueryChanged(query) => {
                self.query = query.clone();
                let task = Task::perform(
                    async move {
                        tokio::time::sleep(SEARCH_DEBOUNCE).await;
                        query
                    },
                    Message::DelayedQuery,
                );
                Action::Run(task)
            }

            Message::DelayedQuery(query) => {
                if self.query == query && normalize_search(&query) != self.search_by {
                    self.update(Message::SearchByClick)
                } else {
                    Action::None
                }
            }

            Message::SearchByClick => {
                self.search_by = normalize_search(&self.query);
                info!("Searching roas by {:?}", self.search_by);
                self.pagination.reset();
                Action::Run(self.load_data())
            }

            Message::DismissAlert => {
                self.alert_shown = false;
                Action::None
            }

            Message::ExportRequested(format) => {
                let client = self.client.clone();
                let task = Task::perform(
                    async move {
                        let Some(file) = AsyncFileDialog::new()
                            .add_filter(format.label(), &[format.extension()])
                            .set_file_name(export_service::default_file_name(format))
                            .save_file()
                            .await
                        else {
                            return Ok(ExportOutcome::Cancelled);
                        };
                        export_service::export_roas(&client, format, file.path())
                            .await
                            .map_err(|e| e.to_string())
                    },
                    Message::ExportFinished,
                );
                Action::Run(task)
            }

            Message::ExportFinished(result) => match result {
                Ok(ExportOutcome::Saved(path)) => Action::ShowToast {
                    kind: ToastKind::Success,
                    message: t!("roas.export.saved", path = path.display()).to_string(),
                    duration: None,
                },
                Ok(ExportOutcome::NotReady) => Action::ShowToast {
                    kind: ToastKind::Error,
                    message: t!("roas.export.not_ready").to_string(),
                    duration: None,
                },
                Ok(ExportOutcome::Cancelled) => Action::None,
                Err(err) => {
                    error!("Export failed: {}", err);
                    Action::ShowToast {
                        kind: ToastKind::Error,
                        message: t!("roas.export.error", error = err).to_string(),
                        duration: None,
                    }
                }
            },

            Message::Refresh => {
                let load = self.load_data();
                let trust_anchors = self.load_validated_trust_anchors();
                Action::Run(Task::batch([load, trust_anchors]))
            }
        }
    }

    pub fn view(&self) -> Element<Message> {
        let header = Row::new()
            .spacing(10)
            .align_y(Alignment::Center)
            .push(
                Text::new(t!("roas.title"))
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
                        .push(Text::new(t!("roas.button.refresh")).size(16)),
                )
                .style(Modern::primary_button())
                .on_press(Message::Refresh)
                .padding([10, 16]),
            );

        let mut content = Column::new().spacing(20).padding(10).push(header);

        if self.alert_shown {
            if let Some(list) = &self.alert_list_validated_ta {
                let message = if list.is_empty() {
                    t!("roas.alert.none_validated").to_string()
                } else {
                    t!("roas.alert.validated", list = list).to_string()
                };
                content = content.push(alert(message, Message::DismissAlert));
            }
        }

        content = content.push(search_bar(SearchBarConfig {
            query: &self.query,
            page_size: self.pagination.page_size,
            page_sizes: &PAGE_SIZES,
            on_query_change: Box::new(Message::QueryChanged),
            on_search: Message::SearchByClick,
            on_export_csv: Message::ExportRequested(ExportFormat::Csv),
            on_export_json: Message::ExportRequested(ExportFormat::Json),
            on_page_size_change: Box::new(Message::PageSizeChanged),
        }));

        if let Some(err) = &self.error_message {
            content = content.push(
                Text::new(t!("roas.error.load", error = err))
                    .size(14)
                    .style(Modern::secondary_text()),
            );
        }

        if let Some(err) = &self.total_error {
            content = content.push(
                Text::new(t!("roas.error.total", error = err))
                    .size(14)
                    .style(Modern::secondary_text()),
            );
        }

        if !self.roas.is_empty() {
            let summary = match self.pagination.total {
                Some(total) => t!(
                    "roas.summary.with_total",
                    first = self.pagination.first_in_table,
                    last = self.pagination.last_displayed(),
                    total = total
                ),
                None => t!(
                    "roas.summary.without_total",
                    first = self.pagination.first_in_table,
                    last = self.pagination.last_displayed()
                ),
            };
            content = content.push(Text::new(summary).size(14).style(Modern::secondary_text()));
        }

        let table: Element<Message> = if self.roas.is_empty() {
            if self.loading {
                empty_state(
                    "hourglass",
                    t!("roas.loading.title").to_string(),
                    String::new(),
                )
            } else {
                empty_state(
                    "folder-open",
                    t!("roas.empty.title").to_string(),
                    t!("roas.empty.subtitle").to_string(),
                )
            }
        } else {
            roa_table(&self.roas)
        };

        content = content
            .push(
                Container::new(Scrollable::new(table))
                    .style(Modern::card_container())
                    .padding(10)
                    .width(Length::Fill)
                    .height(Length::Fill),
            )
            .push(
                Container::new(pagination(
                    self.pagination.page,
                    self.pagination.total_pages(),
                    self.has_next_page(),
                    Message::PageChanged,
                ))
                .width(Length::Fill)
                .align_x(Horizontal::Center),
            );

        Container::new(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }
}

fn normalize_search(query: &str) -> Option<String> {
    let trimmed = query.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

fn roa_table(roas: &[Roa]) -> Element<'_, Message> {
    fn cell<'a>(value: impl ToString, portion: u16) -> Text<'a> {
        Text::new(value.to_string())
            .size(14)
            .width(Length::FillPortion(portion))
    }

    let header = Row::new()
        .spacing(10)
        .push(cell(t!("roas.column.asn"), 2).style(Modern::secondary_text()))
        .push(cell(t!("roas.column.prefix"), 3).style(Modern::secondary_text()))
        .push(cell(t!("roas.column.max_length"), 2).style(Modern::secondary_text()))
        .push(cell(t!("roas.column.trust_anchor"), 3).style(Modern::secondary_text()));

    roas.iter()
        .fold(Column::new().spacing(8).push(header), |table, roa| {
            table.push(
                Row::new()
                    .spacing(10)
                    .push(cell(&roa.asn, 2))
                    .push(cell(&roa.prefix, 3))
                    .push(cell(roa.length, 2))
                    .push(cell(&roa.trust_anchor, 3)),
            )
        })
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> ApiClient {
        ApiClient::new("http://127.0.0.1:9", Duration::from_secs(1)).expect("client")
    }

    fn roa(asn: &str) -> Roa {
        Roa {
            asn: asn.to_string(),
            prefix: "193.0.0.0/21".to_string(),
            length: 21,
            trust_anchor: "RIPE NCC RPKI Root".to_string(),
            uri: None,
        }
    }

    fn list() -> RoasList {
        RoasList::with_page_size(client(), 10).0
    }

    fn ta(name: &str, completed: bool) -> TrustAnchor {
        TrustAnchor {
            name: name.to_string(),
            locations: vec![],
            preconfigured: false,
            initial_certificate_tree_validation_run_completed: completed,
        }
    }

    #[test]
    fn initial_request_is_first_page() {
        let list = list();
        assert_eq!(
            list.last_query,
            Some(RoaQuery {
                start_from: 0,
                page_size: 10,
                search: None,
            })
        );
        assert!(list.loading);
    }

    #[test]
    fn successful_load_replaces_roas_and_clears_error() {
        let mut list = list();
        list.error_message = Some("old failure".to_string());
        let query = list.current_query();
        let response = RoasResponse {
            data: vec![roa("AS3333"), roa("AS1103")],
            links: Default::default(),
        };

        let action = list.update(Message::RoasLoaded(query, Ok(response)));

        assert!(matches!(action, Action::Run(_)));
        assert_eq!(list.roas.len(), 2);
        assert_eq!(list.error_message, None);
        assert!(!list.loading);
    }

    #[test]
    fn failed_load_keeps_roas_and_sets_error() {
        let mut list = list();
        list.roas = vec![roa("AS3333")];
        let query = list.current_query();

        let action = list.update(Message::RoasLoaded(query, Err("connection refused".to_string())));

        assert!(matches!(
            action,
            Action::ShowToast {
                kind: ToastKind::Error,
                ..
            }
        ));
        assert_eq!(list.roas, vec![roa("AS3333")]);
        assert!(list.error_message.as_deref().is_some_and(|e| !e.is_empty()));
    }

    #[test]
    fn failed_load_with_empty_message_still_reports_an_error() {
        let mut list = list();
        let query = list.current_query();
        list.update(Message::RoasLoaded(query, Err(String::new())));
        assert!(list.error_message.as_deref().is_some_and(|e| !e.is_empty()));
    }

    #[test]
    fn stale_response_is_ignored() {
        let mut list = list();
        let stale = list.current_query();
        list.update(Message::PageChanged(3));

        let response = RoasResponse {
            data: vec![roa("AS3333")],
            links: Default::default(),
        };
        let action = list.update(Message::RoasLoaded(stale, Ok(response)));

        assert!(matches!(action, Action::None));
        assert!(list.roas.is_empty());
    }

    #[test]
    fn navigating_to_the_active_page_does_not_fetch() {
        let mut list = list();
        assert!(matches!(list.update(Message::PageChanged(2)), Action::Run(_)));
        let query = list.last_query.clone();

        assert!(matches!(list.update(Message::PageChanged(2)), Action::None));
        assert_eq!(list.last_query, query);
    }

    #[test]
    fn page_change_requests_matching_offset() {
        let mut list = list();
        list.update(Message::PageChanged(5));
        assert_eq!(list.pagination.first_in_table, 41);
        assert_eq!(list.pagination.last_in_table, 50);
        assert_eq!(list.last_query.as_ref().map(|q| q.start_from), Some(40));
    }

    #[test]
    fn page_size_change_keeps_first_record_visible() {
        let mut list = list();
        list.update(Message::PageChanged(5));

        let action = list.update(Message::PageSizeChanged(25));

        assert!(matches!(action, Action::Run(_)));
        assert_eq!(list.pagination.page, 41 / 25 + 1);
        assert_eq!(list.pagination.page_size, 25);
        assert_eq!(list.last_query.as_ref().map(|q| q.page_size), Some(25));
    }

    #[test]
    fn estimated_total_is_applied_for_current_query() {
        let mut list = list();
        let query = list.current_query();
        list.update(Message::TotalEstimated(query, Ok(Some(50))));
        assert_eq!(list.pagination.total, Some(50));
        assert_eq!(list.pagination.total_pages(), Some(5));
    }

    #[test]
    fn failed_estimate_is_kept_apart_from_load_errors() {
        let mut list = list();
        let query = list.current_query();
        list.update(Message::RoasLoaded(
            query.clone(),
            Ok(RoasResponse {
                data: vec![roa("AS3333")],
                links: Default::default(),
            }),
        ));

        list.update(Message::TotalEstimated(query.clone(), Err("timeout".to_string())));
        assert_eq!(list.total_error.as_deref(), Some("timeout"));
        assert_eq!(list.error_message, None);
        assert_eq!(list.roas.len(), 1);

        list.update(Message::TotalEstimated(query, Ok(Some(1))));
        assert_eq!(list.total_error, None);
    }

    #[test]
    fn refresh_reloads_the_current_page() {
        let mut list = list();
        list.update(Message::PageChanged(3));
        let query = list.last_query.clone();
        let current = list.current_query();
        list.update(Message::RoasLoaded(
            current,
            Ok(RoasResponse {
                data: vec![roa("AS3333")],
                links: Default::default(),
            }),
        ));
        assert!(!list.loading);

        assert!(matches!(list.update(Message::Refresh), Action::Run(_)));
        assert!(list.loading);
        assert_eq!(list.last_query, query);
        assert_eq!(list.pagination.page, 3);
    }

    #[test]
    fn estimate_for_previous_query_is_ignored() {
        let mut list = list();
        let stale = list.current_query();
        list.update(Message::PageSizeChanged(50));
        list.update(Message::TotalEstimated(stale, Ok(Some(50))));
        assert_eq!(list.pagination.total, None);
    }

    #[test]
    fn alert_lists_validated_trust_anchors() {
        let mut list = list();
        list.update(Message::TrustAnchorsLoaded(Ok(vec![ta("TA1", true), ta("TA2", false)])));
        assert_eq!(list.alert_list_validated_ta.as_deref(), Some("TA1"));
    }

    #[test]
    fn alert_failure_leaves_text_unset() {
        let mut list = list();
        list.update(Message::TrustAnchorsLoaded(Err("timeout".to_string())));
        assert_eq!(list.alert_list_validated_ta, None);
        assert_eq!(list.error_message, None);
    }

    #[test]
    fn alert_can_be_dismissed() {
        let mut list = list();
        list.update(Message::DismissAlert);
        assert!(!list.alert_shown);
    }

    #[test]
    fn search_resets_to_first_page_with_term() {
        let mut list = list();
        list.update(Message::PageChanged(4));
        list.query = "  AS3333 ".to_string();

        let action = list.update(Message::SearchByClick);

        assert!(matches!(action, Action::Run(_)));
        assert_eq!(list.search_by.as_deref(), Some("AS3333"));
        assert_eq!(list.pagination.page, 1);
        assert_eq!(
            list.last_query,
            Some(RoaQuery {
                start_from: 0,
                page_size: 10,
                search: Some("AS3333".to_string()),
            })
        );
    }

    #[test]
    fn debounced_query_only_searches_when_still_current() {
        let mut list = list();
        assert!(matches!(
            list.update(Message::QueryChanged("AS33".to_string())),
            Action::Run(_)
        ));
        list.update(Message::QueryChanged("AS3333".to_string()));

        assert!(matches!(list.update(Message::DelayedQuery("AS33".to_string())), Action::None));
        assert!(matches!(
            list.update(Message::DelayedQuery("AS3333".to_string())),
            Action::Run(_)
        ));
        assert_eq!(list.search_by.as_deref(), Some("AS3333"));
        assert!(matches!(list.update(Message::DelayedQuery("AS3333".to_string())), Action::None));
    }

    #[test]
    fn export_outcomes_map_to_toasts() {
        let mut list = list();
        assert!(matches!(
            list.update(Message::ExportFinished(Ok(ExportOutcome::NotReady))),
            Action::ShowToast {
                kind: ToastKind::Error,
                ..
            }
        ));
        assert!(matches!(
            list.update(Message::ExportFinished(Ok(ExportOutcome::Saved("roas.csv".into())))),
            Action::ShowToast {
                kind: ToastKind::Success,
                ..
            }
        ));
        assert!(matches!(
            list.update(Message::ExportFinished(Ok(ExportOutcome::Cancelled))),
            Action::None
        ));
    }

    #[test]
    fn next_page_is_offered_for_full_batches() {
        let mut list = list();
        let query = list.current_query();
        let response = RoasResponse {
            data: (0..10).map(|i| roa(&format!("AS{i}"))).collect(),
            links: Default::default(),
        };
        list.update(Message::RoasLoaded(query, Ok(response)));
        assert!(list.has_next_page());

        list.roas.truncate(3);
        assert!(!list.has_next_page());
    }
}
