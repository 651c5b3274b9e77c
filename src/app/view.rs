use super::messages::Message;
use super::state::{
    App, CHAPTER_NOT_FOUND_MESSAGE, CLEAR_CONFIRM_PROMPT, LOADING_MESSAGE, PLACEHOLDER_MESSAGE,
    VERSE_NUMBER_SCALE, VERSE_SCROLL_ID,
};
use crate::config::ThemeMode;
use crate::corpus::Corpus;
use crate::reading::navigation::{book_options, chapter_options};
use crate::reading::{BookOption, ChapterOption, ChapterView, Position, VerseLine, render_chapter};
use crate::theme::highlight_color;
use iced::alignment::Vertical;
use iced::widget::text::{LineHeight, Wrapping};
use iced::widget::{
    Column, button, column, container, horizontal_space, mouse_area, pick_list, row, scrollable,
    text,
};
use iced::{Background, Color, Element, Length, Theme};

impl App {
    pub fn view(&self) -> Element<'_, Message> {
        let corpus = self.corpus.as_deref();

        let mut content: Column<'_, Message> = column![
            self.selector_row(corpus),
            self.controls_row(corpus),
            text(self.bookmark_status().to_string()).size(14.0),
        ]
        .padding(16)
        .spacing(12)
        .height(Length::Fill);

        let body = if self.loading {
            Self::notice(LOADING_MESSAGE)
        } else if let Some(err) = self.load_error.as_deref() {
            Self::notice(err)
        } else {
            match (corpus, self.navigation.position()) {
                (Some(corpus), Some(position)) => {
                    match render_chapter(corpus, position, &self.highlights) {
                        Ok(chapter) => column![self.chapter_view(chapter), self.clear_row(position)]
                            .spacing(12)
                            .height(Length::Fill)
                            .into(),
                        Err(_) => Self::notice(CHAPTER_NOT_FOUND_MESSAGE),
                    }
                }
                _ => Self::notice(PLACEHOLDER_MESSAGE),
            }
        };
        content = content.push(body);

        container(content).width(Length::Fill).into()
    }
}

impl App {
    fn selector_row<'a>(&'a self, corpus: Option<&'a Corpus>) -> Element<'a, Message> {
        let books: Vec<BookOption> = corpus.map(book_options).unwrap_or_default();
        let selected_book = self
            .navigation
            .selected_book()
            .and_then(|book| books.get(book).cloned());

        let chapters: Vec<ChapterOption> = match (corpus, self.navigation.selected_book()) {
            (Some(corpus), Some(book)) => chapter_options(corpus, book),
            _ => Vec::new(),
        };
        let selected_chapter = self
            .navigation
            .selected_chapter()
            .and_then(|chapter| chapters.get(chapter).copied());

        let book_picker = pick_list(books, selected_book, |option: BookOption| {
            Message::BookSelected(Some(option.index))
        })
        .placeholder("Select a book");
        let chapter_picker = pick_list(chapters, selected_chapter, |option: ChapterOption| {
            Message::ChapterSelected(Some(option.index))
        })
        .placeholder("Select a chapter");

        let close_book = if self.navigation.selected_book().is_some() {
            button("Close book").on_press(Message::BookSelected(None))
        } else {
            button("Close book")
        };

        row![book_picker, chapter_picker, close_book]
            .spacing(10)
            .align_y(Vertical::Center)
            .width(Length::Fill)
            .into()
    }

    fn controls_row<'a>(&'a self, corpus: Option<&'a Corpus>) -> Element<'a, Message> {
        let (can_go_previous, can_go_next) = match corpus {
            Some(corpus) => (
                self.navigation.can_go_previous(corpus),
                self.navigation.can_go_next(corpus),
            ),
            None => (false, false),
        };

        let prev_button = if can_go_previous {
            button("Previous").on_press(Message::PreviousChapter)
        } else {
            button("Previous")
        };
        let next_button = if can_go_next {
            button("Next").on_press(Message::NextChapter)
        } else {
            button("Next")
        };

        let theme_label = match self.preferences.theme {
            ThemeMode::Dark => "Light mode",
            ThemeMode::Light => "Dark mode",
        };
        let theme_toggle = button(theme_label).on_press(Message::ToggleTheme);

        let smaller = if self.preferences.can_decrease_font_size() {
            button("A-").on_press(Message::DecreaseFontSize)
        } else {
            button("A-")
        };
        let larger = if self.preferences.can_increase_font_size() {
            button("A+").on_press(Message::IncreaseFontSize)
        } else {
            button("A+")
        };

        row![
            prev_button,
            next_button,
            horizontal_space(),
            theme_toggle,
            smaller,
            text(self.preferences.font_size.to_string()),
            larger,
        ]
        .spacing(10)
        .align_y(Vertical::Center)
        .width(Length::Fill)
        .into()
    }

    fn chapter_view<'a>(&'a self, chapter: ChapterView<'a>) -> Element<'a, Message> {
        let size = self.text_size();
        let highlight = highlight_color(&self.config, self.preferences.theme);

        let verses = chapter
            .verses
            .into_iter()
            .fold(Column::new().spacing(4), |verses, verse| {
                verses.push(self.verse_row(verse, size, highlight))
            });

        let body = column![text(chapter.heading).size(size * 1.4), verses]
            .spacing(12)
            .width(Length::Fill);

        scrollable(container(body).width(Length::Fill).padding([8, 12]))
            .id(VERSE_SCROLL_ID.clone())
            .height(Length::Fill)
            .into()
    }

    fn verse_row<'a>(
        &self,
        verse: VerseLine<'a>,
        size: f32,
        highlight: Color,
    ) -> Element<'a, Message> {
        let line = row![
            text(verse.number.to_string()).size(size * VERSE_NUMBER_SCALE),
            text(verse.text)
                .size(size)
                .line_height(LineHeight::Relative(self.config.line_spacing))
                .wrapping(Wrapping::WordOrGlyph)
                .width(Length::Fill),
        ]
        .spacing(8)
        .align_y(Vertical::Top);

        let highlighted = verse.highlighted;
        let boxed = container(line)
            .width(Length::Fill)
            .padding([2, 4])
            .style(move |_theme: &Theme| container::Style {
                background: highlighted.then_some(Background::Color(highlight)),
                ..container::Style::default()
            });

        mouse_area(boxed)
            .on_press(Message::VerseClicked(verse.key.verse))
            .into()
    }

    fn clear_row(&self, position: Position) -> Element<'_, Message> {
        let count = self
            .highlights
            .count_in_chapter(position.book, position.chapter);

        if self.pending_clear == Some(position) {
            return row![
                text(CLEAR_CONFIRM_PROMPT),
                button("Clear").on_press(Message::ConfirmClearHighlights),
                button("Cancel").on_press(Message::CancelClearHighlights),
            ]
            .spacing(10)
            .align_y(Vertical::Center)
            .into();
        }

        let label = format!("Clear highlights ({count})");
        let clear = if count > 0 {
            button(text(label)).on_press(Message::RequestClearHighlights)
        } else {
            button(text(label))
        };
        row![clear].into()
    }

    fn notice(message: &str) -> Element<'_, Message> {
        container(text(message).size(18.0))
            .center_x(Length::Fill)
            .center_y(Length::Fill)
            .into()
    }
}
