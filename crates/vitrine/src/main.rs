use std::io;
use std::time::{Duration, Instant};

use chrono::Local;
use color_eyre::eyre::eyre;
use crossterm::event::{
    self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
    KeyModifiers, MouseEvent, MouseEventKind,
};
use crossterm::execute;
use ratatui::{
    DefaultTerminal, Frame,
    layout::{Alignment, Constraint, Layout},
    style::{Color, Stylize},
    text::Line,
    widgets::Paragraph,
};
use vitrine_config::Config;
use vitrine_content::ContentStore;
use vitrine_core::{FrameInput, Viewport};
use vitrine_motion::{FieldConfig, ParticleField, Surface, Typewriter, TypewriterConfig};

mod pages;
mod surface;

use pages::Page;
use surface::CellSurface;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let mut args = std::env::args().skip(1);
    if let Some(flag) = args.next() {
        if flag == "--dump-json" {
            return dump_json(args.next().as_deref().unwrap_or("articles"));
        }
        return Err(eyre!("unknown argument: {flag}"));
    }

    let config = Config::load()?;
    let mouse_capture = config.mouse_capture;
    let terminal = ratatui::init();
    if mouse_capture {
        execute!(io::stdout(), EnableMouseCapture)?;
    }
    // Size the particle field from the real terminal dimensions so the
    // population spawns spread across the whole viewport.
    let result = terminal
        .size()
        .map_err(Into::into)
        .and_then(|size| App::new(config, Viewport::new(size.width, size.height)))
        .and_then(|app| app.run(terminal));
    if mouse_capture {
        execute!(io::stdout(), DisableMouseCapture).ok();
    }
    ratatui::restore();
    result
}

/// Print a content set as JSON, in the shape the portfolio API serves.
fn dump_json(what: &str) -> color_eyre::Result<()> {
    let store = ContentStore::new();
    let json = match what {
        "articles" => ContentStore::to_json(store.articles())?,
        "thoughts" => ContentStore::to_json(store.thoughts())?,
        "courses" => ContentStore::to_json(store.courses())?,
        other => return Err(eyre!("unknown content set: {other}")),
    };
    println!("{json}");
    Ok(())
}

/// The main application holding navigation and animation state.
pub struct App {
    running: bool,
    config: Config,
    store: ContentStore,
    page: Page,
    /// Selected entry on the current list page.
    selected: usize,
    /// Index of the article open in detail view, if any.
    detail: Option<usize>,
    body_scroll: u16,
    typewriter: Typewriter,
    field: ParticleField,
    surface: CellSurface,
    pointer: Option<(f32, f32)>,
    epoch: Instant,
}

impl App {
    pub fn new(config: Config, viewport: Viewport) -> color_eyre::Result<Self> {
        let divisor = config.speed.interval_divisor();
        let mut typewriter = Typewriter::new(TypewriterConfig {
            phrases: config.headline.clone(),
            type_interval_ms: (config.type_ms / divisor).max(1),
            delete_interval_ms: (config.delete_ms / divisor).max(1),
            hold_ms: (config.hold_ms / divisor).max(1),
            cycle: config.cycle,
        })?;
        typewriter.start(0);

        // Spawn the population across the initial viewport; render()
        // re-syncs the domain if the terminal is resized later.
        let field = ParticleField::new(
            FieldConfig {
                count: config.particle_count,
                palette: config.palette.colors().to_vec(),
                velocity_scale: 0.5 * config.speed.motion_multiplier(),
                ..FieldConfig::default()
            },
            viewport,
        )?;

        Ok(Self {
            running: false,
            config,
            store: ContentStore::new(),
            page: Page::Home,
            selected: 0,
            detail: None,
            body_scroll: 0,
            typewriter,
            field,
            surface: CellSurface::new(viewport.width as u16, viewport.height as u16),
            pointer: None,
            epoch: Instant::now(),
        })
    }

    /// Run the application's main loop.
    pub fn run(mut self, mut terminal: DefaultTerminal) -> color_eyre::Result<()> {
        self.running = true;
        while self.running {
            let now_ms = self.epoch.elapsed().as_millis() as u64;
            self.typewriter.advance(now_ms);
            let input = FrameInput {
                pointer: self.pointer,
                scroll: self.scroll_progress(),
            };
            self.field.step(input);
            terminal.draw(|frame| self.render(frame))?;
            self.handle_crossterm_events()?;
        }
        self.typewriter.dispose();
        self.field.dispose();
        Ok(())
    }

    fn accent(&self) -> Color {
        self.config.palette.colors()[0]
    }

    /// Scroll progress of the current view, normalized to `[0, 1]`.
    fn scroll_progress(&self) -> f32 {
        if self.detail.is_some() {
            return (self.body_scroll as f32 / 20.0).min(1.0);
        }
        let len = self.page_len();
        if len <= 1 {
            0.0
        } else {
            self.selected as f32 / (len - 1) as f32
        }
    }

    fn page_len(&self) -> usize {
        match self.page {
            Page::Home => 1,
            Page::Articles => self.store.articles().len(),
            Page::Thoughts => self.store.thoughts().len(),
            Page::Courses => self.store.courses().len(),
        }
    }

    /// Renders the user interface.
    fn render(&mut self, frame: &mut Frame) {
        let area = frame.area();
        let now_ms = self.epoch.elapsed().as_millis() as u64;
        let accent = self.accent();

        if self.surface.size() != (area.width, area.height) {
            self.surface.resize(area.width, area.height);
            self.field.set_viewport(Viewport::new(area.width, area.height));
        }

        // Particle background first, page content on top.
        let input = FrameInput {
            pointer: self.pointer,
            scroll: self.scroll_progress(),
        };
        self.field.render(&mut self.surface, input);
        frame.render_widget(Paragraph::new(self.surface.lines()), area);

        let chunks = Layout::vertical([
            Constraint::Length(1), // tabs
            Constraint::Length(1), // spacing
            Constraint::Fill(1),   // page content
            Constraint::Length(1), // help
        ])
        .split(area);

        pages::render_tabs(frame, chunks[0], self.page, accent);

        match self.page {
            Page::Home => {
                let caret_visible = (now_ms / 500) % 2 == 0;
                let headline = self.typewriter.display(caret_visible);
                let date = Local::now().format("%A, %B %d, %Y").to_string();
                pages::render_home(frame, chunks[2], &headline, &date, accent);
            }
            Page::Articles => match self.detail.and_then(|i| self.store.articles().get(i)) {
                Some(article) => pages::render_article_detail(
                    frame,
                    chunks[2],
                    article,
                    self.body_scroll,
                    accent,
                ),
                None => {
                    pages::render_articles(frame, chunks[2], &self.store, self.selected, accent)
                }
            },
            Page::Thoughts => {
                pages::render_thoughts(frame, chunks[2], &self.store, self.selected, accent)
            }
            Page::Courses => {
                pages::render_courses(frame, chunks[2], &self.store, self.selected, accent)
            }
        }

        let help = Line::from(vec![
            "q".bold().fg(accent),
            " quit  ".dark_gray(),
            "tab".bold().fg(accent),
            " page  ".dark_gray(),
            "↑↓".bold().fg(accent),
            " move  ".dark_gray(),
            "⏎".bold().fg(accent),
            " open".dark_gray(),
        ])
        .alignment(Alignment::Center);
        frame.render_widget(Paragraph::new(help), chunks[3]);
    }

    /// Reads crossterm events with a frame-rate poll budget.
    fn handle_crossterm_events(&mut self) -> color_eyre::Result<()> {
        if event::poll(Duration::from_millis(33))? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => self.on_key_event(key),
                Event::Mouse(mouse) => self.on_mouse_event(mouse),
                Event::Resize(width, height) => {
                    self.surface.resize(width, height);
                    self.field.set_viewport(Viewport::new(width, height));
                }
                _ => {}
            }
        }
        Ok(())
    }

    fn on_key_event(&mut self, key: KeyEvent) {
        match (key.modifiers, key.code) {
            (_, KeyCode::Char('q'))
            | (KeyModifiers::CONTROL, KeyCode::Char('c') | KeyCode::Char('C')) => self.quit(),
            (_, KeyCode::Esc) => {
                if self.detail.take().is_some() {
                    self.body_scroll = 0;
                } else {
                    self.quit();
                }
            }
            (_, KeyCode::Tab) => self.switch_page(self.page.next()),
            (_, KeyCode::BackTab) => self.switch_page(self.page.prev()),
            (_, KeyCode::Down | KeyCode::Char('j')) => self.move_down(),
            (_, KeyCode::Up | KeyCode::Char('k')) => self.move_up(),
            (_, KeyCode::Enter) => {
                if self.page == Page::Articles && self.detail.is_none() {
                    self.detail = Some(self.selected);
                    self.body_scroll = 0;
                }
            }
            _ => {}
        }
    }

    fn on_mouse_event(&mut self, mouse: MouseEvent) {
        match mouse.kind {
            MouseEventKind::Moved | MouseEventKind::Drag(_) => {
                self.pointer = Some((mouse.column as f32, mouse.row as f32));
            }
            MouseEventKind::ScrollDown => self.move_down(),
            MouseEventKind::ScrollUp => self.move_up(),
            _ => {}
        }
    }

    fn switch_page(&mut self, page: Page) {
        self.page = page;
        self.selected = 0;
        self.detail = None;
        self.body_scroll = 0;
    }

    fn move_down(&mut self) {
        if self.detail.is_some() {
            self.body_scroll = self.body_scroll.saturating_add(1);
        } else {
            let len = self.page_len();
            if len > 0 {
                self.selected = (self.selected + 1).min(len - 1);
            }
        }
    }

    fn move_up(&mut self) {
        if self.detail.is_some() {
            self.body_scroll = self.body_scroll.saturating_sub(1);
        } else {
            self.selected = self.selected.saturating_sub(1);
        }
    }

    fn quit(&mut self) {
        self.running = false;
    }
}
