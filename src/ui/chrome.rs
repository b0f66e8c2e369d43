/// Everything around the card: header, footer, genre chips, the upload
/// button and its modal, notices and the empty state
use iced::widget::{
    button, center, column, container, horizontal_rule, horizontal_space, mouse_area, opaque,
    row, text, Column,
};
use iced::{Alignment, Element, Length, Pixels};
use iced_aw::Wrap;

use super::style;
use crate::state::filter::GenreFilter;
use crate::state::notice::{NoticeKind, Notices};
use crate::Message;

pub fn header<'a>() -> Element<'a, Message> {
    let logo = container(text("MF").size(16))
        .center_x(40)
        .center_y(40)
        .style(style::accent_pill(8.0));

    let wordmark = text("MemeFlow").size(26).color(style::TEAL);

    // Search is not offered; the button stays inert
    let search = button(text("⌕").size(20)).padding(8).style(style::ghost);

    column![
        row![logo, wordmark, horizontal_space(), search]
            .spacing(12)
            .padding([16, 24])
            .align_y(Alignment::Center),
        horizontal_rule(1),
    ]
    .into()
}

pub fn footer<'a>(year: i32) -> Element<'a, Message> {
    let links = row![
        text("Admin Dashboard").size(14).color(style::GRAY_400),
        text("Profile").size(14).color(style::GRAY_400),
    ]
    .spacing(16);

    column![
        horizontal_rule(1),
        row![
            text(format!("© {} MemeFlow. All rights reserved.", year))
                .size(14)
                .color(style::GRAY_400),
            horizontal_space(),
            links,
        ]
        .padding([24, 24])
        .align_y(Alignment::Center),
    ]
    .into()
}

pub fn genre_chips<'a>(selected: GenreFilter) -> Element<'a, Message> {
    let chips = GenreFilter::chips()
        .into_iter()
        .map(|chip| -> Element<'a, Message> {
            button(text(chip.label()).size(14))
                .padding([8, 16])
                .style(style::chip(chip == selected))
                .on_press(Message::GenreSelected(chip))
                .into()
        })
        .collect::<Vec<_>>();

    container(
        Wrap::with_elements(chips)
            .spacing(Pixels(12.0))
            .line_spacing(Pixels(12.0)),
    )
    .center_x(Length::Fill)
    .into()
}

pub fn empty_state<'a>(filter: GenreFilter) -> Element<'a, Message> {
    let message = match filter {
        GenreFilter::All => String::from("No memes to show."),
        GenreFilter::Only(genre) => format!("No {} memes yet.", genre.label()),
    };

    text(message).size(18).color(style::GRAY_400).into()
}

pub fn upload_button<'a>() -> Element<'a, Message> {
    container(
        button(text("+").size(24))
            .padding([8, 18])
            .style(style::accent_button(999.0))
            .on_press(Message::OpenUpload),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .align_right(Length::Fill)
    .align_bottom(Length::Fill)
    .padding(32)
    .into()
}

/// Upload placeholder; clicking the backdrop closes it
pub fn upload_modal<'a>() -> Element<'a, Message> {
    let dialog = container(
        column![
            text("Upload Meme").size(26),
            text("Upload feature coming soon!").color(style::GRAY_400),
            button(container(text("Close")).center_x(Length::Fill))
                .width(Length::Fill)
                .padding(8)
                .style(style::accent_button(8.0))
                .on_press(Message::CloseUpload),
        ]
        .spacing(16),
    )
    .width(420)
    .padding(32)
    .style(style::modal);

    mouse_area(
        center(opaque(dialog))
            .style(style::backdrop),
    )
    .on_press(Message::CloseUpload)
    .into()
}

/// Stacked notices in the top-right corner
pub fn notices<'a>(notices: &'a Notices) -> Element<'a, Message> {
    let items = notices.iter().map(|notice| -> Element<'a, Message> {
        let accent = match notice.kind {
            NoticeKind::Success => style::TEAL,
            NoticeKind::Error => style::LIKED,
        };

        container(text(notice.message.as_str()).size(14))
            .padding([10, 16])
            .style(style::notice(accent))
            .into()
    });

    container(Column::with_children(items).spacing(8).align_x(Alignment::End))
        .width(Length::Fill)
        .align_right(Length::Fill)
        .padding([80, 24])
        .into()
}
