use iced::alignment::Horizontal;
use iced::widget::{Column, button, container, text, scrollable};
use iced::{Element, Length, Task};
use iced_modern_theme::Modern;
use rust_i18n::t;

pub enum Action {
    Run(Task<Message>),
    Navigate(NavButton),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavButton {
    Roas,
    TrustAnchors,
    Preferences,
}

#[derive(Debug, Clone)]
pub enum Message {
    ButtonSignal(NavButton),
    ButtonPressed(NavButton),
}

pub struct Navbar {
    pub selected: NavButton,
}

impl Navbar {
    pub fn new() -> Self {
        Navbar {
            selected: NavButton::Roas,
        }
    }

    pub fn update(&mut self, message: Message) -> Action {
        match message {
            Message::ButtonSignal(id) => {
                self.selected = id;
                Action::Run(Task::perform(async {}, move |_| Message::ButtonPressed(id)))
            }
            Message::ButtonPressed(id) => {
                self.selected = id;
                Action::Navigate(id)
            }
        }
    }

    pub fn view(&self) -> Element<Message> {
        fn styled_button(
            label: String,
            id: NavButton,
            selected: NavButton,
        ) -> iced::widget::Button<'static, Message> {
            let base = button(text(label).width(Length::Fill).align_x(Horizontal::Center))
                .width(Length::Fill)
                .height(Length::Fixed(45.0))
                .padding(10)
                .on_press(Message::ButtonSignal(id));

            if id == selected {
                base.style(Modern::green_tinted_button())
            } else {
                base.style(Modern::blue_tinted_button())
            }
        }

        let navbar = Column::new()
            .push(styled_button(
                t!("navbar.button.roas").to_string(),
                NavButton::Roas,
                self.selected,
            ))
            .push(styled_button(
                t!("navbar.button.trust_anchors").to_string(),
                NavButton::TrustAnchors,
                self.selected,
            ))
            .spacing(5);

        let empty_middle = scrollable(Column::new().push(text("").size(1)))
            .width(Length::Fill)
            .height(Length::Fill);

        let settings_button = Column::new().push(styled_button(
            t!("navbar.button.settings").to_string(),
            NavButton::Preferences,
            self.selected,
        ));

        let layout = Column::new()
            .push(navbar.height(Length::Fixed(95.0)))
            .push(empty_middle.height(Length::Fill))
            .push(settings_button.height(Length::Fixed(45.0)))
            .spacing(10);

        container(layout)
            .width(Length::Fixed(250.0))
            .height(Length::Fill)
            .padding(5)
            .style(Modern::sidebar_container())
            .into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pressed_button_navigates_and_is_selected() {
        let mut navbar = Navbar::new();
        let action = navbar.update(Message::ButtonPressed(NavButton::TrustAnchors));
        assert!(matches!(action, Action::Navigate(NavButton::TrustAnchors)));
        assert_eq!(navbar.selected, NavButton::TrustAnchors);
    }
}
