// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! The page is a scrollable column of header and grid; while the lightbox is
//! on screen (fade-out included) its overlay is stacked on top.

use super::{App, Message};
use crate::ui::design_tokens::spacing;
use crate::ui::{gallery, header, lightbox, styles};
use iced::widget::{Column, Container, Scrollable, Space, Stack};
use iced::{Element, Length};

impl App {
    /// Renders the whole window.
    pub fn view(&self) -> Element<'_, Message> {
        let header_view = header::view(self.site_text.as_ref(), &self.status_tag, &self.i18n)
            .map(Message::Header);

        // While the manifest loads the grid area stays blank; the empty-state
        // wording is reserved for a selection that really has no pieces.
        let grid: Element<'_, Message> = if self.loading {
            Space::new().width(Length::Fill).height(Length::Shrink).into()
        } else {
            gallery::view(
                &self.gallery,
                &self.displayed,
                gallery::columns_for(self.window_width),
                &self.status_tag,
                &self.i18n,
            )
            .map(Message::Gallery)
        };

        let page = Column::new()
            .spacing(spacing::XL)
            .padding(spacing::XL)
            .width(Length::Fill)
            .push(header_view)
            .push(grid);

        let base = Container::new(Scrollable::new(page).width(Length::Fill).height(Length::Fill))
            .width(Length::Fill)
            .height(Length::Fill)
            .style(styles::page);

        let Some(piece) = self
            .lightbox
            .current()
            .and_then(|index| self.displayed.get(index))
        else {
            return base.into();
        };

        let visual = if self.full_image_failed {
            lightbox::Visual::Failed
        } else {
            match self.cache.peek(&self.site_root.join(&piece.image)) {
                Some(data) => lightbox::Visual::Ready(data),
                None => lightbox::Visual::Loading,
            }
        };

        let overlay =
            lightbox::view(&self.lightbox, piece, visual, &self.i18n).map(Message::Lightbox);

        Stack::new().push(base).push(overlay).into()
    }
}
