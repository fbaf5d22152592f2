mod app;
mod host;
mod settings;
mod theme;
mod widgets;

use app::App;

fn main() -> iced::Result {
    env_logger::init();

    iced::application(App::new, App::update, App::view)
        .title("Rainbow Border")
        .theme(App::theme)
        .subscription(App::subscription)
        .window(iced::window::Settings {
            size: app::INITIAL_SIZE,
            exit_on_close_request: false,
            ..Default::default()
        })
        .run()
}
