use iced::widget::{canvas, column, container, stack, text};
use iced::{window, Element, Length, Subscription, Task, Theme};

use rainbow_border_core::animation::border_animator::BorderAnimator;

use crate::host::{IcedOverlay, IcedScheduler, IcedWindow};
use crate::settings;
use crate::theme;
use crate::widgets::border_canvas::BorderCanvas;

pub const INITIAL_SIZE: iced::Size = iced::Size {
    width: 620.0,
    height: 540.0,
};

#[derive(Debug, Clone)]
pub enum Message {
    Tick,
    Resized(iced::Size),
    CloseRequested(window::Id),
}

pub struct App {
    animator: BorderAnimator<IcedWindow, IcedOverlay, IcedScheduler>,
    theme: Theme,
}

impl App {
    pub fn new() -> (Self, Task<Message>) {
        let config = settings::load_config();
        let theme = theme::resolve_theme(config.background());
        let animator = BorderAnimator::attach(
            IcedWindow::new(INITIAL_SIZE),
            IcedOverlay::new(),
            IcedScheduler::new(),
            config,
        );
        (Self { animator, theme }, Task::none())
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Tick => {
                if let Some(id) = self.animator.scheduler_mut().take_pending() {
                    self.animator.fire(id);
                }
            }
            Message::Resized(size) => {
                self.animator.window_mut().set_size(size);
                self.animator.redraw();
            }
            Message::CloseRequested(id) => {
                self.animator.window_mut().close();
                self.animator.teardown();
                return window::close(id);
            }
        }
        Task::none()
    }

    pub fn view(&self) -> Element<'_, Message> {
        let config = self.animator.config();
        let caption = column![
            text("Rainbow Border").size(22.0),
            text(format!(
                "{}px border, {}px corners, {:?} per tick",
                config.border_width(),
                config.corner_radius(),
                config.interval()
            ))
            .size(13.0),
        ]
        .spacing(6)
        .align_x(iced::Alignment::Center);

        let content = container(caption)
            .width(Length::Fill)
            .height(Length::Fill)
            .center_x(Length::Fill)
            .center_y(Length::Fill);

        let border = canvas(BorderCanvas::new(self.animator.overlay()))
            .width(Length::Fill)
            .height(Length::Fill);

        stack![content, border].into()
    }

    pub fn theme(&self) -> Theme {
        self.theme.clone()
    }

    pub fn subscription(&self) -> Subscription<Message> {
        let ticks = match self.animator.scheduler().pending_delay() {
            Some(delay) => iced::time::every(delay).map(|_| Message::Tick),
            None => Subscription::none(),
        };

        Subscription::batch([
            ticks,
            window::resize_events().map(|(_id, size)| Message::Resized(size)),
            window::close_requests().map(Message::CloseRequested),
        ])
    }
}
