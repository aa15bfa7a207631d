use iced::widget::{Container, Row, Space, Text, button};
use iced::{Alignment, Length};
use iced_font_awesome::{fa_icon, fa_icon_solid};
use iced_modern_theme::Modern;

/// Dismissible information banner shown above a list.
pub fn alert<'a, M: 'a + Clone>(message: String, on_dismiss: M) -> iced::Element<'a, M> {
    let close_button = button(
        Container::new(fa_icon("circle-xmark").size(17.5))
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(Alignment::Center)
            .align_y(Alignment::Center),
    )
    .width(Length::Fixed(25.0))
    .height(Length::Fixed(25.0))
    .on_press(on_dismiss)
    .style(Modern::danger_button());

    Container::new(
        Row::new()
            .spacing(12)
            .align_y(Alignment::Center)
            .push(fa_icon_solid("circle-info").size(18.0))
            .push(Text::new(message).size(14).style(Modern::primary_text()))
            .push(Space::with_width(Length::Fill))
            .push(close_button),
    )
    .width(Length::Fill)
    .padding([12, 20])
    .style(Modern::accent_container())
    .into()
}
