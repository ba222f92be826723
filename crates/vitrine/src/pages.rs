//! Page rendering for the portfolio.
//!
//! Every page draws on top of the particle background as plain styled
//! lines; navigation state lives in the app, pages are stateless.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Style, Stylize},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
};
use vitrine_content::{Article, ContentStore};

/// The navigable pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Page {
    #[default]
    Home,
    Articles,
    Thoughts,
    Courses,
}

impl Page {
    pub fn next(self) -> Self {
        match self {
            Page::Home => Page::Articles,
            Page::Articles => Page::Thoughts,
            Page::Thoughts => Page::Courses,
            Page::Courses => Page::Home,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Page::Home => Page::Courses,
            Page::Articles => Page::Home,
            Page::Thoughts => Page::Articles,
            Page::Courses => Page::Thoughts,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Page::Home => "Home",
            Page::Articles => "Articles",
            Page::Thoughts => "Thoughts",
            Page::Courses => "Courses",
        }
    }
}

/// Tab bar listing the pages, current one highlighted.
pub fn render_tabs(frame: &mut Frame, area: Rect, current: Page, accent: Color) {
    let mut spans = Vec::new();
    for page in [Page::Home, Page::Articles, Page::Thoughts, Page::Courses] {
        if page == current {
            spans.push(Span::styled(
                format!(" {} ", page.title()),
                Style::new().fg(accent).bold(),
            ));
        } else {
            spans.push(Span::styled(
                format!(" {} ", page.title()),
                Style::new().dark_gray(),
            ));
        }
    }
    frame.render_widget(
        Paragraph::new(Line::from(spans)).alignment(Alignment::Center),
        area,
    );
}

/// Home page: name, typewriter headline, date.
pub fn render_home(frame: &mut Frame, area: Rect, headline: &str, date: &str, accent: Color) {
    let chunks = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(1), // name
        Constraint::Length(1), // spacing
        Constraint::Length(1), // typewriter headline
        Constraint::Length(1), // spacing
        Constraint::Length(1), // date
        Constraint::Fill(1),
    ])
    .split(area);

    frame.render_widget(
        Paragraph::new(Line::from("A M A N   B H A R D W A J").style(Style::new().fg(accent).bold()))
            .alignment(Alignment::Center),
        chunks[1],
    );
    frame.render_widget(
        Paragraph::new(Line::from(headline.to_string()).style(Style::new().white()))
            .alignment(Alignment::Center),
        chunks[3],
    );
    frame.render_widget(
        Paragraph::new(Line::from(date.to_string()).style(Style::new().dark_gray()))
            .alignment(Alignment::Center),
        chunks[5],
    );
}

/// Article list, two lines per entry.
pub fn render_articles(
    frame: &mut Frame,
    area: Rect,
    store: &ContentStore,
    selected: usize,
    accent: Color,
) {
    let mut lines = Vec::new();
    for (i, article) in store.articles().iter().enumerate() {
        let marker = if i == selected { "› " } else { "  " };
        let title_style = if i == selected {
            Style::new().fg(accent).bold()
        } else {
            Style::new().white()
        };
        lines.push(Line::from(vec![
            Span::styled(marker, Style::new().fg(accent)),
            Span::styled(article.title.clone(), title_style),
        ]));
        lines.push(Line::from(vec![
            Span::raw("  "),
            Span::styled(
                format!(
                    "{} · {} · ♥ {}",
                    article.category, article.read_time, article.likes
                ),
                Style::new().dark_gray(),
            ),
        ]));
        lines.push(Line::raw(""));
    }
    frame.render_widget(Paragraph::new(lines), area);
}

/// A single article body, scrollable.
pub fn render_article_detail(
    frame: &mut Frame,
    area: Rect,
    article: &Article,
    scroll: u16,
    accent: Color,
) {
    let chunks =
        Layout::vertical([Constraint::Length(2), Constraint::Fill(1)]).split(area);
    frame.render_widget(
        Paragraph::new(vec![
            Line::from(article.title.clone()).style(Style::new().fg(accent).bold()),
            Line::from(format!(
                "{} · {} · {}",
                article.category,
                article.read_time,
                article.created_at.format("%B %d, %Y")
            ))
            .style(Style::new().dark_gray()),
        ]),
        chunks[0],
    );
    frame.render_widget(
        Paragraph::new(article.content.clone())
            .wrap(Wrap { trim: false })
            .scroll((scroll, 0)),
        chunks[1],
    );
}

/// Thought feed.
pub fn render_thoughts(
    frame: &mut Frame,
    area: Rect,
    store: &ContentStore,
    selected: usize,
    accent: Color,
) {
    let mut lines = Vec::new();
    for (i, thought) in store.thoughts().iter().enumerate() {
        let style = if i == selected {
            Style::new().fg(accent)
        } else {
            Style::new().white()
        };
        lines.push(Line::from(vec![
            Span::styled(
                format!("{} ", thought.author_name),
                Style::new().fg(accent).bold(),
            ),
            Span::styled(
                thought.created_at.format("· %B %d, %Y").to_string(),
                Style::new().dark_gray(),
            ),
        ]));
        lines.push(Line::from(Span::styled(thought.content.clone(), style)));
        lines.push(Line::from(Span::styled(
            format!("♥ {}   💬 {}", thought.likes, thought.comments),
            Style::new().dark_gray(),
        )));
        lines.push(Line::raw(""));
    }
    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), area);
}

/// Course playlists with their videos.
pub fn render_courses(
    frame: &mut Frame,
    area: Rect,
    store: &ContentStore,
    selected: usize,
    accent: Color,
) {
    let mut lines = Vec::new();
    for (i, course) in store.courses().iter().enumerate() {
        let title_style = if i == selected {
            Style::new().fg(accent).bold()
        } else {
            Style::new().white()
        };
        let featured = if course.featured { " ★" } else { "" };
        lines.push(Line::from(vec![
            Span::styled(course.title.clone(), title_style),
            Span::styled(featured, Style::new().yellow()),
        ]));
        lines.push(Line::from(Span::styled(
            format!(
                "{} · {} · {} videos",
                course.category, course.total_duration, course.total_videos
            ),
            Style::new().dark_gray(),
        )));
        if i == selected {
            for video in store.course_videos(&course.id) {
                lines.push(Line::from(Span::styled(
                    format!("    {}. {}  ({})", video.order_index, video.title, video.duration),
                    Style::new().gray(),
                )));
            }
        }
        lines.push(Line::raw(""));
    }
    frame.render_widget(Paragraph::new(lines), area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_cycle_is_closed() {
        let mut page = Page::Home;
        for _ in 0..4 {
            page = page.next();
        }
        assert_eq!(page, Page::Home);
        assert_eq!(Page::Home.prev(), Page::Courses);
        assert_eq!(Page::Courses.next(), Page::Home);
    }
}
