// SPDX-License-Identifier: MPL-2.0
//! Page header: site heading, the about paragraph and the status tabs.

use crate::artwork::{SiteText, DEFAULT_STATUS_TAG, SOLD_STATUS_TAG};
use crate::i18n::I18n;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, Column, Row, Text};
use iced::{Element, Length};

/// Messages for the header.
#[derive(Debug, Clone)]
pub enum Message {
    /// A status tab was selected.
    StatusSelected(String),
}

/// Heading shown above the grid, site override first.
pub fn heading<'a>(site_text: Option<&'a SiteText>, i18n: &I18n) -> String {
    site_text
        .and_then(SiteText::heading)
        .map(str::to_string)
        .unwrap_or_else(|| i18n.tr("app-name"))
}

/// Render the header block.
pub fn view<'a>(
    site_text: Option<&'a SiteText>,
    status_tag: &'a str,
    i18n: &I18n,
) -> Element<'a, Message> {
    let mut header = Column::new()
        .spacing(spacing::MD)
        .width(Length::Fill)
        .push(Text::new(heading(site_text, i18n)).size(typography::TITLE_LG));

    if let Some(about) = site_text.and_then(SiteText::about) {
        header = header.push(
            Text::new(about)
                .size(typography::BODY)
                .color(palette::PAPER_300),
        );
    }

    let tabs = Row::new()
        .spacing(spacing::SM)
        .push(tab(
            i18n.tr("tab-available"),
            DEFAULT_STATUS_TAG,
            status_tag,
        ))
        .push(tab(i18n.tr("tab-sold"), SOLD_STATUS_TAG, status_tag));

    header.push(tabs).into()
}

fn tab<'a>(label: String, tag: &str, current: &str) -> Element<'a, Message> {
    button(Text::new(label).size(typography::BODY))
        .height(Length::Fixed(sizing::TAB_HEIGHT))
        .padding([spacing::XS, spacing::MD])
        .style(styles::tab(tag == current))
        .on_press(Message::StatusSelected(tag.to_string()))
        .into()
}
