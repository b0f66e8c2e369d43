use std::time::{Duration, Instant};

use chrono::Datelike;
use iced::keyboard::{self, key::Named, Key};
use iced::widget::{column, container, Stack};
use iced::{Alignment, Element, Length, Subscription, Task, Theme};
use tracing::{debug, info, warn};

mod share;
mod state;
mod ui;

use share::ShareError;
use state::carousel::Carousel;
use state::data::Meme;
use state::feed;
use state::filter::GenreFilter;
use state::notice::{NoticeKind, Notices};
use state::settings::Settings;
use state::transition::{Frame, Slide};

/// Animation and notice refresh rate while something is moving
const FRAME: Duration = Duration::from_millis(16);

/// Main application state
struct MemeFlow {
    settings: Settings,
    /// Every meme from the feed, in feed order
    feed: Vec<Meme>,
    filter: GenreFilter,
    /// `None` when the active filter matches nothing
    carousel: Option<Carousel>,
    slide: Option<Slide>,
    notices: Notices,
    upload_open: bool,
    year: i32,
}

/// Application messages (events)
#[derive(Debug, Clone)]
enum Message {
    Previous,
    Next,
    ToggleLike,
    ToggleDislike,
    ToggleSave,
    Share,
    /// Clipboard hand-off finished, with the shared link or the failure
    ShareFinished(Result<String, ShareError>),
    KeyPressed(Key),
    GenreSelected(GenreFilter),
    OpenUpload,
    CloseUpload,
    Tick(Instant),
}

impl MemeFlow {
    /// Create a new instance of the application
    fn new() -> (Self, Task<Message>) {
        let settings = Settings::load();

        let (memes, feed_error) = match &settings.feed_path {
            Some(path) => match feed::load_feed(path) {
                Ok(memes) => (memes, None),
                Err(err) => {
                    warn!(error = %err, "falling back to the sample feed");
                    (feed::sample_feed(), Some(err.to_string()))
                }
            },
            None => (feed::sample_feed(), None),
        };

        let mut app = Self::with_feed(settings, memes);
        if let Some(err) = feed_error {
            app.notices.push(NoticeKind::Error, format!("Could not load feed: {}", err), Instant::now());
        }

        info!(memes = app.feed.len(), "MemeFlow initialized");
        (app, Task::none())
    }

    fn with_feed(settings: Settings, feed: Vec<Meme>) -> Self {
        let carousel = Carousel::new(feed.clone());

        MemeFlow {
            settings,
            feed,
            filter: GenreFilter::All,
            carousel,
            slide: None,
            notices: Notices::new(),
            upload_open: false,
            year: chrono::Local::now().year(),
        }
    }

    /// Handle application messages and update state
    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Previous => self.navigate(Carousel::go_previous),
            Message::Next => self.navigate(Carousel::go_next),
            Message::ToggleLike => {
                if let Some(carousel) = self.carousel.as_mut() {
                    carousel.toggle_like();
                }
            }
            Message::ToggleDislike => {
                if let Some(carousel) = self.carousel.as_mut() {
                    carousel.toggle_dislike();
                }
            }
            Message::ToggleSave => {
                if let Some(carousel) = self.carousel.as_mut() {
                    carousel.toggle_save();
                }
            }
            Message::Share => {
                if let Some(link) = self.share_link() {
                    return Task::perform(share::copy_link(link), Message::ShareFinished);
                }
            }
            Message::ShareFinished(result) => self.finish_share(result, Instant::now()),
            Message::KeyPressed(key) => {
                if self.upload_open && key == Key::Named(Named::Escape) {
                    self.upload_open = false;
                    return Task::none();
                }

                self.navigate(|carousel| carousel.handle_key(&key));
            }
            Message::GenreSelected(filter) => self.select_genre(filter),
            Message::OpenUpload => self.upload_open = true,
            Message::CloseUpload => self.upload_open = false,
            Message::Tick(now) => {
                self.notices.expire(now);
                if self.slide.is_some_and(|slide| slide.is_finished(now)) {
                    self.slide = None;
                }
            }
        }

        Task::none()
    }

    /// Run one navigation step and start the slide if it moved
    fn navigate(&mut self, step: impl FnOnce(&mut Carousel) -> bool) {
        let Some(carousel) = self.carousel.as_mut() else {
            return;
        };

        let from = carousel.index();
        if !step(carousel) {
            return;
        }

        debug!(index = carousel.index(), id = carousel.current().id, "navigated");
        self.slide = Slide::start(carousel.direction(), from, Instant::now());
    }

    fn share_link(&self) -> Option<String> {
        self.carousel
            .as_ref()
            .map(|carousel| carousel.share_link(&self.settings.share_origin))
    }

    /// Report a share outcome; never touches the carousel
    fn finish_share(&mut self, result: Result<String, ShareError>, now: Instant) {
        match result {
            Ok(link) => {
                info!(%link, "share link copied");
                self.notices.push(NoticeKind::Success, "Link copied to clipboard!", now);
            }
            Err(err) => {
                warn!(error = %err, "failed to copy share link");
                self.notices.push(NoticeKind::Error, format!("Failed to copy link: {}", err), now);
            }
        }
    }

    /// Rebuild the carousel over the memes matching `filter`
    fn select_genre(&mut self, filter: GenreFilter) {
        if filter == self.filter {
            return;
        }

        self.filter = filter;
        self.carousel = Carousel::new(filter.apply(&self.feed));
        self.slide = None;
        info!(
            filter = %filter.label(),
            memes = self.carousel.as_ref().map_or(0, Carousel::len),
            "genre filter changed"
        );
    }

    /// Build the user interface
    fn view(&self) -> Element<Message> {
        let body = match &self.carousel {
            Some(carousel) => {
                let frame = self
                    .slide
                    .map_or(Frame::SETTLED, |slide| slide.frame(Instant::now()));
                let outgoing = self
                    .slide
                    .and_then(|slide| carousel.items().get(slide.outgoing()));
                ui::card::view(carousel, frame, outgoing)
            }
            None => ui::chrome::empty_state(self.filter),
        };

        let main = container(
            column![ui::chrome::genre_chips(self.filter), body]
                .spacing(32)
                .align_x(Alignment::Center),
        )
        .width(Length::Fill)
        .height(Length::Fill)
        .center_x(Length::Fill)
        .center_y(Length::Fill)
        .padding([32, 16]);

        let page = container(column![ui::chrome::header(), main, ui::chrome::footer(self.year)])
            .width(Length::Fill)
            .height(Length::Fill)
            .style(ui::style::page);

        let mut layers = vec![
            page.into(),
            ui::chrome::upload_button(),
            ui::chrome::notices(&self.notices),
        ];
        if self.upload_open {
            layers.push(ui::chrome::upload_modal());
        }

        Stack::with_children(layers)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }

    /// Arrow keys for the whole lifetime of the window, plus a frame
    /// tick while a slide or a notice is live
    fn subscription(&self) -> Subscription<Message> {
        let keys = keyboard::on_key_press(|key, modifiers| {
            if modifiers.control() || modifiers.alt() || modifiers.logo() {
                return None;
            }
            Some(Message::KeyPressed(key))
        });

        if self.slide.is_some() || !self.notices.is_empty() {
            Subscription::batch([keys, iced::time::every(FRAME).map(Message::Tick)])
        } else {
            keys
        }
    }

    /// Set the application theme
    fn theme(&self) -> Theme {
        Theme::Dark
    }
}

fn main() -> iced::Result {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("memeflow=info")),
        )
        .init();

    iced::application("MemeFlow", MemeFlow::update, MemeFlow::view)
        .subscription(MemeFlow::subscription)
        .theme(MemeFlow::theme)
        .centered()
        .run_with(MemeFlow::new)
}
