// SPDX-License-Identifier: MPL-2.0
//! Application root state and wiring between the gallery controller, the
//! localization bundle and the Iced runtime.
//!
//! Startup order: settings, locale, FFmpeg probe, catalog, viewed state. All
//! gallery state then lives in one [`Gallery`] mutated only from `update`.

mod message;
pub mod paths;
pub mod persisted_state;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::catalog::Catalog;
use crate::config::{self, Config};
use crate::gallery::Gallery;
use crate::i18n::I18n;
use crate::ui::memory_viewer::PlaybackPolicy;
use crate::video_player::{self, VideoSource};
use iced::{window, Element, Subscription, Task, Theme};
use persisted_state::ViewedStore;
use std::fmt;
use std::path::Path;
use std::time::Duration;

/// Root Iced application state.
pub struct App {
    i18n: I18n,
    gallery: Gallery,
    theme: Theme,
    reveal_delay: Duration,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("progress", &self.gallery.progress())
            .field("viewer_open", &self.gallery.viewer().is_open())
            .finish_non_exhaustive()
    }
}

pub const WINDOW_DEFAULT_HEIGHT: f32 = 760.0;
pub const WINDOW_DEFAULT_WIDTH: f32 = 960.0;
pub const MIN_WINDOW_HEIGHT: f32 = 520.0;
pub const MIN_WINDOW_WIDTH: f32 = 640.0;

/// Builds the window settings.
#[must_use]
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH, WINDOW_DEFAULT_HEIGHT),
        min_size: Some(iced::Size::new(MIN_WINDOW_WIDTH, MIN_WINDOW_HEIGHT)),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 requires a `Fn` boot closure; flags are consumed on the first call
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

fn playback_policy(config: &Config, media_dir: &Path) -> PlaybackPolicy {
    PlaybackPolicy {
        autoplay: config.video.autoplay_enabled(),
        fallback: config
            .video
            .fallback()
            .map(|raw| VideoSource::parse(raw, media_dir)),
    }
}

impl App {
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load();
        if let Some(key) = config_warning {
            tracing::warn!(warning = %key, "settings ignored, using defaults");
        }

        let i18n = I18n::new(flags.lang.clone(), &config);
        tracing::debug!(locale = %i18n.current_locale(), "locale selected");

        video_player::probe_support();

        let media_dir = paths::media_dir(flags.media_dir, config.gallery.media_dir.clone());
        tracing::info!(media_dir = %media_dir.display(), "loading memories");
        let (catalog, catalog_warning) = Catalog::load_from_dir(&media_dir);
        if let Some(key) = catalog_warning {
            tracing::warn!(warning = %key, "using built-in memories");
        }

        let policy = playback_policy(&config, &media_dir);
        let mut gallery = Gallery::new(catalog, ViewedStore::new(), media_dir, policy);
        let effect = if flags.reset {
            gallery.reset_viewed_state()
        } else {
            gallery.load_viewed_state()
        };

        let mut app = App {
            i18n,
            gallery,
            theme: config.general.theme_mode.iced_theme(),
            reveal_delay: config.gallery.reveal_delay(),
        };
        let entrance = app.gallery.start_card_entrance();
        let task = Task::batch([
            update::effect_task(effect, app.reveal_delay),
            update::effect_task(entrance, app.reveal_delay),
        ]);

        (app, task)
    }

    fn title(&self) -> String {
        let app_name = self.i18n.tr("window-title");
        match self.gallery.viewer().details() {
            Some(details) => format!("{} - {app_name}", details.title),
            None => app_name,
        }
    }

    fn theme(&self) -> Theme {
        self.theme.clone()
    }

    fn subscription(&self) -> Subscription<Message> {
        Subscription::batch([
            subscription::create_keyboard_subscription(),
            subscription::create_video_subscription(self.gallery.viewer()),
            subscription::create_spinner_subscription(self.gallery.viewer()),
        ])
    }

    /// Dispatch table: each message source routes to one named handler.
    fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = update::UpdateContext {
            gallery: &mut self.gallery,
            reveal_delay: self.reveal_delay,
        };

        match message {
            Message::Gallery(gallery_message) => {
                update::handle_gallery_message(&mut ctx, gallery_message)
            }
            Message::Viewer(viewer_message) => {
                update::handle_viewer_message(&mut ctx, viewer_message)
            }
            Message::Reveal(reveal_message) => {
                update::handle_reveal_message(&mut ctx, reveal_message)
            }
            Message::EscapePressed => update::handle_escape(&mut ctx),
            Message::ResetRequested => update::handle_reset(&mut ctx),
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            gallery: &self.gallery,
        })
    }
}
