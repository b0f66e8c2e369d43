/// The meme card: image, caption, genre badge, counters and actions,
/// flanked by the previous/next arrows, with the progress dots below
use iced::widget::{button, column, container, image, row, text, Row, Space};
use iced::{Alignment, ContentFit, Element, Length};

use super::stage::Stage;
use super::style;
use crate::state::carousel::{Carousel, Interactions};
use crate::state::data::Meme;
use crate::state::transition::Frame;
use crate::Message;

const CARD_WIDTH: f32 = 560.0;
/// 3:2 like the source images
const IMAGE_HEIGHT: f32 = CARD_WIDTH * 2.0 / 3.0;

pub fn view<'a>(
    carousel: &'a Carousel,
    frame: Frame,
    outgoing: Option<&'a Meme>,
) -> Element<'a, Message> {
    let previous = button(text("‹").size(28))
        .padding([4, 16])
        .style(style::nav(style::TEAL))
        .on_press_maybe(carousel.can_go_previous().then_some(Message::Previous));

    let next = button(text("›").size(28))
        .padding([4, 16])
        .style(style::nav(style::PINK))
        .on_press_maybe(carousel.can_go_next().then_some(Message::Next));

    // The leaving card is drawn first, the entering one on top
    let mut cards = Stage::new(CARD_WIDTH);
    if let Some(meme) = outgoing.filter(|_| frame.exit_opacity > 0.0) {
        cards = cards.push(
            meme_card(meme, Interactions::default(), frame.exit_opacity),
            frame.exit_offset,
        );
    }
    let cards = cards.push(
        meme_card(carousel.current(), carousel.interactions(), frame.enter_opacity),
        frame.enter_offset,
    );

    let stage = row![previous, cards, next]
        .spacing(24)
        .align_y(Alignment::Center);

    column![stage, progress(carousel)]
        .spacing(24)
        .align_x(Alignment::Center)
        .into()
}

fn meme_card(meme: &Meme, state: Interactions, opacity: f32) -> Element<'_, Message> {
    let title = text(&meme.title).size(22).color(style::faded(iced::Color::WHITE, opacity));
    let caption = text(&meme.caption).color(style::faded(style::GRAY_400, opacity));

    let badge = container(text(meme.genre.slug()).size(12))
        .padding([4, 12])
        .style(style::accent_pill(999.0));
    let counters = text(format!("{} likes • {} saves", meme.likes, meme.saves))
        .size(14)
        .color(style::faded(style::GRAY_500, opacity));

    let actions = row![
        action(if state.liked { "♥" } else { "♡" }, state.liked, style::LIKED, Message::ToggleLike),
        action(if state.disliked { "▼" } else { "▽" }, state.disliked, style::DISLIKED, Message::ToggleDislike),
        action(if state.saved { "★" } else { "☆" }, state.saved, style::SAVED, Message::ToggleSave),
        action("⇪", false, style::GRAY_800, Message::Share),
    ]
    .spacing(16);

    let details = column![
        column![title, caption].spacing(8),
        row![badge, counters].spacing(8).align_y(Alignment::Center),
        container(actions).center_x(Length::Fill),
    ]
    .spacing(16)
    .padding(24);

    container(column![picture(meme), details])
        .width(CARD_WIDTH)
        .clip(true)
        .style(style::card(opacity))
        .into()
}

/// Local images are shown as-is; remote ones get a placeholder panel,
/// the browser does not fetch anything over the network
fn picture(meme: &Meme) -> Element<'_, Message> {
    if let Some(path) = meme.local_image_path().filter(|path| path.is_file()) {
        return image(image::Handle::from_path(path))
            .width(Length::Fill)
            .height(IMAGE_HEIGHT)
            .content_fit(ContentFit::Cover)
            .into();
    }

    container(
        column![
            text(&meme.title).size(28).color(style::TEAL),
            text(&meme.image_url).size(12).color(style::GRAY_500),
        ]
        .spacing(8)
        .align_x(Alignment::Center),
    )
    .width(Length::Fill)
    .height(IMAGE_HEIGHT)
    .center_x(Length::Fill)
    .center_y(IMAGE_HEIGHT)
    .style(style::image_placeholder)
    .into()
}

fn action<'a>(
    glyph: &'a str,
    active: bool,
    active_color: iced::Color,
    message: Message,
) -> Element<'a, Message> {
    button(text(glyph).size(20))
        .padding(12)
        .style(style::action(active, active_color))
        .on_press(message)
        .into()
}

/// One dot per meme, the current one widened
fn progress<'a>(carousel: &'a Carousel) -> Element<'a, Message> {
    let dots = carousel.items().iter().enumerate().map(|(idx, _)| -> Element<'a, Message> {
        if idx == carousel.index() {
            container(Space::new(32.0, 4.0)).style(style::accent_pill(999.0)).into()
        } else {
            container(Space::new(4.0, 4.0)).style(style::dot).into()
        }
    });

    Row::with_children(dots)
        .spacing(8)
        .align_y(Alignment::Center)
        .into()
}
