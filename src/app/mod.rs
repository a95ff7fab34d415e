// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration for the category screen.
//!
//! The `App` struct wires together the catalog, the entry form, the list and
//! the toast notifications, and translates component events into catalog
//! mutations. Policy decisions (window sizing, theme resolution, page size)
//! stay close to the main update loop so user-facing behavior is easy to
//! audit.

pub mod config;
mod message;
pub mod paths;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::catalog::Catalog;
use crate::ui::category_form;
use crate::ui::category_table;
use crate::ui::notifications::{self, Notification};
use crate::ui::theming::ThemeMode;
use iced::{window, Element, Subscription, Task, Theme};
use std::time::Instant;

pub const WINDOW_DEFAULT_WIDTH: u32 = 800;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 650;
pub const MIN_WINDOW_WIDTH: u32 = 480;
pub const MIN_WINDOW_HEIGHT: u32 = 480;

/// Root Iced application state.
#[derive(Debug)]
pub struct App {
    catalog: Catalog,
    form: category_form::State,
    table: category_table::State,
    /// Toast notification manager for user feedback.
    notifications: notifications::Manager,
    theme_mode: ThemeMode,
    /// Categories shown per list page.
    page_size: usize,
    /// Clock sample from the latest tick; drives toast fade rendering.
    now: Instant,
}

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // Wrap flags in RefCell<Option<_>> to satisfy Fn trait requirement
    // while only consuming flags once (iced 0.14 requires Fn, not FnOnce)
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl Default for App {
    fn default() -> Self {
        Self {
            catalog: Catalog::new(),
            form: category_form::State::default(),
            table: category_table::State::default(),
            notifications: notifications::Manager::new(),
            theme_mode: ThemeMode::System,
            page_size: config::DEFAULT_PAGE_SIZE,
            now: Instant::now(),
        }
    }
}

impl App {
    /// Initializes application state from the persisted configuration and the
    /// launch `Flags`.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load();
        (Self::with_config(&config, config_warning, flags), Task::none())
    }

    fn with_config(
        config: &config::Config,
        config_warning: Option<String>,
        flags: Flags,
    ) -> Self {
        let mut app = App::default();

        // The command line wins over the persisted theme.
        app.theme_mode = flags.theme.unwrap_or(config.general.theme_mode);
        app.page_size = config.page_size();

        if let Some(warning) = config_warning {
            app.notifications.push(Notification::warning(warning));
        }

        app
    }

    fn title(&self) -> String {
        String::from("Category Lens")
    }

    fn theme(&self) -> Theme {
        if self.theme_mode.is_dark() {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    fn subscription(&self) -> Subscription<Message> {
        subscription::create_tick_subscription(self.notifications.has_notifications())
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        update::handle(self, message)
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(self)
    }
}
