use log::{debug, info};
use std::time::{Duration, Instant};

use crate::navigation::{RegionHost, RegionId, ScrollBehavior, ScrollBlock, ScrollOptions};

use super::content::{Language, NewsCategory, PHOTOS, PLATFORMS, Photo, TRACKS, Track};
use super::theme::{Theme, ThemeVariant};
use super::tiles::{Tile, TileKind, headline_tiles, rows, static_tiles};

const SLIDESHOW_INTERVAL: Duration = Duration::from_secs(5);

/// Follow-up work requested by an activation, run by the dashboard after
/// the navigator call returns
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    ShowCategory(NewsCategory),
}

/// Vertical scroll position over dashboard rows
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Viewport {
    pub top: u16,
    target: u16,
    visible_rows: u16,
    total_rows: u16,
}

impl Viewport {
    pub fn new(total_rows: u16) -> Self {
        Self {
            top: 0,
            target: 0,
            visible_rows: total_rows.max(1),
            total_rows,
        }
    }

    pub fn visible_rows(&self) -> u16 {
        self.visible_rows
    }

    pub fn target(&self) -> u16 {
        self.target
    }

    fn max_top(&self) -> u16 {
        self.total_rows.saturating_sub(self.visible_rows)
    }

    pub fn set_visible_rows(&mut self, rows: u16) {
        self.visible_rows = rows.max(1);
        self.target = self.target.min(self.max_top());
        self.top = self.top.min(self.max_top());
    }

    /// Bring `row` into view. Smooth scrolls advance one row per tick.
    pub fn scroll_to(&mut self, row: u16, options: ScrollOptions) {
        let visible = self.visible_rows;
        let target = match options.block {
            ScrollBlock::Start => row,
            ScrollBlock::Center => row.saturating_sub(visible / 2),
            ScrollBlock::End => (row + 1).saturating_sub(visible),
            ScrollBlock::Nearest => {
                if row < self.target {
                    row
                } else if row >= self.target + visible {
                    row + 1 - visible
                } else {
                    self.target
                }
            }
        };
        self.target = target.min(self.max_top());

        if options.behavior == ScrollBehavior::Instant {
            self.top = self.target;
        }
    }

    pub fn tick(&mut self) {
        if self.top < self.target {
            self.top += 1;
        } else if self.top > self.target {
            self.top -= 1;
        }
    }

    pub fn is_visible(&self, row: u16) -> bool {
        row >= self.top && row < self.top + self.visible_rows
    }
}

/// Everything the dashboard shows, plus the region effects the navigator
/// drives
pub struct DashboardView {
    pub tiles: Vec<Tile>,
    pub theme: Theme,
    pub language: Language,
    pub household_name: String,
    pub category: NewsCategory,
    pub photo_index: usize,
    pub slideshow_playing: bool,
    pub track_index: usize,
    pub music_playing: bool,
    pub focused: Option<RegionId>,
    pub viewport: Viewport,
    pub status: Option<String>,
    last_slide: Instant,
    commands: Vec<Command>,
}

impl DashboardView {
    pub fn new(theme: ThemeVariant, household_name: impl Into<String>) -> Self {
        let category = NewsCategory::default();
        let mut tiles = static_tiles();
        tiles.extend(headline_tiles(category));

        Self {
            tiles,
            theme: Theme::new(theme),
            language: Language::default(),
            household_name: household_name.into(),
            category,
            photo_index: 0,
            slideshow_playing: false,
            track_index: 0,
            music_playing: false,
            focused: None,
            viewport: Viewport::new(rows::COUNT),
            status: None,
            last_slide: Instant::now(),
            commands: Vec::new(),
        }
    }

    pub fn tile(&self, id: &RegionId) -> Option<&Tile> {
        self.tiles.iter().find(|t| &t.id == id)
    }

    pub fn is_focused(&self, id: &RegionId) -> bool {
        self.focused.as_ref() == Some(id)
    }

    /// Tiles on one row, left to right
    pub fn row_tiles(&self, row: u16) -> Vec<&Tile> {
        let mut tiles: Vec<&Tile> = self.tiles.iter().filter(|t| t.row() == row).collect();
        tiles.sort_by_key(|t| t.order);
        tiles
    }

    pub fn take_commands(&mut self) -> Vec<Command> {
        std::mem::take(&mut self.commands)
    }

    /// Swap the headline cards for another category.
    /// Returns the removed and the added tiles.
    pub fn replace_headlines(&mut self, category: NewsCategory) -> (Vec<Tile>, Vec<Tile>) {
        let (removed, kept): (Vec<Tile>, Vec<Tile>) = std::mem::take(&mut self.tiles)
            .into_iter()
            .partition(|t| matches!(t.kind, TileKind::Headline(..)));
        let added = headline_tiles(category);

        self.tiles = kept;
        self.tiles.extend(added.iter().cloned());
        self.category = category;
        (removed, added)
    }

    pub fn current_photo(&self) -> &'static Photo {
        &PHOTOS[self.photo_index % PHOTOS.len()]
    }

    pub fn current_track(&self) -> &'static Track {
        &TRACKS[self.track_index % TRACKS.len()]
    }

    /// Per-frame housekeeping: smooth scrolling and the slideshow timer
    pub fn tick(&mut self, now: Instant) {
        self.viewport.tick();

        if self.slideshow_playing && now.duration_since(self.last_slide) >= SLIDESHOW_INTERVAL {
            self.photo_index = (self.photo_index + 1) % PHOTOS.len();
            self.last_slide = now;
        }
    }

    fn set_status(&mut self, message: impl Into<String>) {
        let message = message.into();
        debug!("Status: {}", message);
        self.status = Some(message);
    }

    fn run_activation(&mut self, kind: TileKind) {
        match kind {
            TileKind::ThemeToggle => {
                let variant = self.theme.variant.toggled();
                self.theme = Theme::new(variant);
                self.set_status(format!("Switched to {} theme", variant.label()));
            }
            TileKind::Language => {
                self.language = self.language.next();
                self.set_status(format!("Language: {}", self.language.code()));
            }
            TileKind::Voice => self.set_status("Voice control is unavailable"),
            TileKind::Settings => self.set_status("Settings are read from config.toml"),
            TileKind::PhotoPrevious => {
                self.photo_index = (self.photo_index + PHOTOS.len() - 1) % PHOTOS.len();
                self.last_slide = Instant::now();
            }
            TileKind::PhotoNext => {
                self.photo_index = (self.photo_index + 1) % PHOTOS.len();
                self.last_slide = Instant::now();
            }
            TileKind::PhotoPlay => {
                self.slideshow_playing = !self.slideshow_playing;
                self.last_slide = Instant::now();
                let state = if self.slideshow_playing { "playing" } else { "paused" };
                self.set_status(format!("Slideshow {}", state));
            }
            TileKind::MusicPrevious => {
                self.track_index = (self.track_index + TRACKS.len() - 1) % TRACKS.len();
            }
            TileKind::MusicNext => {
                self.track_index = (self.track_index + 1) % TRACKS.len();
            }
            TileKind::MusicPlay => {
                self.music_playing = !self.music_playing;
                let track = self.current_track();
                let message = if self.music_playing {
                    format!("Playing {} by {}", track.title, track.artist)
                } else {
                    "Music paused".to_string()
                };
                self.set_status(message);
            }
            TileKind::Platform(i) => {
                if let Some(platform) = PLATFORMS.get(i) {
                    info!("Opening platform {} at {}", platform.name, platform.url);
                    self.set_status(format!("Opening {} ({})", platform.name, platform.url));
                }
            }
            TileKind::NewsCategory(category) => {
                if category != self.category {
                    self.commands.push(Command::ShowCategory(category));
                }
                self.set_status(format!("Showing {} news", category.label()));
            }
            other => self.set_status(format!("Selected {}", other.title())),
        }
    }
}

impl RegionHost for DashboardView {
    fn scroll_into_view(&mut self, id: &RegionId, options: ScrollOptions) {
        if let Some(row) = self.tile(id).map(|t| t.row()) {
            self.viewport.scroll_to(row, options);
        }
    }

    fn focus(&mut self, id: &RegionId) {
        self.focused = Some(id.clone());
    }

    fn activate(&mut self, id: &RegionId) {
        match self.tile(id).map(|t| t.kind) {
            Some(kind) => self.run_activation(kind),
            None => debug!("Activation for unknown tile {}", id),
        }
    }

    fn focus_root(&mut self) {
        self.focused = None;
    }
}
