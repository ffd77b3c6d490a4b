use crate::navigation::{LayoutOrder, RegionId, RegionSpec};

use super::content::{MATCHES, NewsCategory, PLATFORMS, RECOMMENDATIONS};

/// Row indices of the dashboard sections, top to bottom
pub mod rows {
    pub const HEADER: u16 = 0;
    pub const WIDGETS: u16 = 1;
    pub const PHOTOS: u16 = 2;
    pub const MUSIC: u16 = 3;
    pub const PLATFORMS: u16 = 4;
    pub const NEWS_CATEGORIES: u16 = 5;
    pub const HEADLINES: u16 = 6;
    pub const SPORTS: u16 = 7;
    pub const RECOMMENDED: u16 = 8;
    pub const FOOTER: u16 = 9;

    pub const COUNT: u16 = 10;

    pub fn title(row: u16) -> &'static str {
        match row {
            HEADER => "Controls",
            WIDGETS => "Today",
            PHOTOS => "Family Photos",
            MUSIC => "Now Playing",
            PLATFORMS => "Streaming",
            NEWS_CATEGORIES => "Latest News",
            HEADLINES => "Headlines",
            SPORTS => "Live Sports",
            RECOMMENDED => "You Might Like",
            FOOTER => "More",
            _ => "",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TileKind {
    ThemeToggle,
    Language,
    Voice,
    Settings,
    Weather,
    Clock,
    Astronomy,
    Photos,
    PhotoPrevious,
    PhotoPlay,
    PhotoNext,
    Music,
    MusicPrevious,
    MusicPlay,
    MusicNext,
    Platform(usize),
    NewsCategory(NewsCategory),
    Headline(NewsCategory, usize),
    Match(usize),
    Recommendation(usize),
    Help,
    About,
}

impl TileKind {
    /// Short title shown in the tile border and status line
    pub fn title(self) -> String {
        match self {
            TileKind::ThemeToggle => "Theme".to_string(),
            TileKind::Language => "Language".to_string(),
            TileKind::Voice => "Voice".to_string(),
            TileKind::Settings => "Settings".to_string(),
            TileKind::Weather => "Weather".to_string(),
            TileKind::Clock => "Clock".to_string(),
            TileKind::Astronomy => "Sky Tonight".to_string(),
            TileKind::Photos => "Slideshow".to_string(),
            TileKind::PhotoPrevious | TileKind::MusicPrevious => "Previous".to_string(),
            TileKind::PhotoPlay | TileKind::MusicPlay => "Play/Pause".to_string(),
            TileKind::PhotoNext | TileKind::MusicNext => "Next".to_string(),
            TileKind::Music => "Music".to_string(),
            TileKind::Platform(i) => PLATFORMS.get(i).map(|p| p.name).unwrap_or("Platform").to_string(),
            TileKind::NewsCategory(category) => category.label().to_string(),
            TileKind::Headline(category, i) => format!("{} #{}", category.label(), i + 1),
            TileKind::Match(i) => MATCHES.get(i).map(|m| m.league).unwrap_or("Match").to_string(),
            TileKind::Recommendation(i) => RECOMMENDATIONS
                .get(i)
                .map(|r| r.title)
                .unwrap_or("Recommended")
                .to_string(),
            TileKind::Help => "Help".to_string(),
            TileKind::About => "About".to_string(),
        }
    }
}

/// A focusable tile on the dashboard
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tile {
    pub id: RegionId,
    pub kind: TileKind,
    pub order: LayoutOrder,
    pub disabled: bool,
}

impl Tile {
    fn new(id: impl Into<RegionId>, kind: TileKind, row: u16, column: u16) -> Self {
        Self {
            id: id.into(),
            kind,
            order: LayoutOrder::new(row, column),
            disabled: false,
        }
    }

    fn disabled(mut self) -> Self {
        self.disabled = true;
        self
    }

    pub fn region(&self) -> RegionSpec {
        RegionSpec::new(self.id.clone(), self.order).disabled(self.disabled)
    }

    pub fn row(&self) -> u16 {
        self.order.row
    }
}

/// Every tile except the headline cards
pub fn static_tiles() -> Vec<Tile> {
    let mut tiles = vec![
        Tile::new("theme", TileKind::ThemeToggle, rows::HEADER, 0),
        Tile::new("language", TileKind::Language, rows::HEADER, 1),
        // Voice input is not supported in the terminal
        Tile::new("voice", TileKind::Voice, rows::HEADER, 2).disabled(),
        Tile::new("settings", TileKind::Settings, rows::HEADER, 3),
        Tile::new("weather", TileKind::Weather, rows::WIDGETS, 0),
        Tile::new("clock", TileKind::Clock, rows::WIDGETS, 1),
        Tile::new("astronomy", TileKind::Astronomy, rows::WIDGETS, 2),
        Tile::new("photos", TileKind::Photos, rows::PHOTOS, 0),
        Tile::new("photo-previous", TileKind::PhotoPrevious, rows::PHOTOS, 1),
        Tile::new("photo-play", TileKind::PhotoPlay, rows::PHOTOS, 2),
        Tile::new("photo-next", TileKind::PhotoNext, rows::PHOTOS, 3),
        Tile::new("music", TileKind::Music, rows::MUSIC, 0),
        Tile::new("music-previous", TileKind::MusicPrevious, rows::MUSIC, 1),
        Tile::new("music-play", TileKind::MusicPlay, rows::MUSIC, 2),
        Tile::new("music-next", TileKind::MusicNext, rows::MUSIC, 3),
    ];

    for (i, _) in PLATFORMS.iter().enumerate() {
        tiles.push(Tile::new(
            RegionId::owned(format!("platform-{}", i)),
            TileKind::Platform(i),
            rows::PLATFORMS,
            i as u16,
        ));
    }

    for (i, category) in NewsCategory::ALL.iter().enumerate() {
        tiles.push(Tile::new(
            RegionId::owned(format!("news-category-{}", category.slug())),
            TileKind::NewsCategory(*category),
            rows::NEWS_CATEGORIES,
            i as u16,
        ));
    }

    for (i, _) in MATCHES.iter().enumerate() {
        tiles.push(Tile::new(
            RegionId::owned(format!("match-{}", i)),
            TileKind::Match(i),
            rows::SPORTS,
            i as u16,
        ));
    }

    for (i, _) in RECOMMENDATIONS.iter().enumerate() {
        tiles.push(Tile::new(
            RegionId::owned(format!("recommended-{}", i)),
            TileKind::Recommendation(i),
            rows::RECOMMENDED,
            i as u16,
        ));
    }

    tiles.push(Tile::new("help", TileKind::Help, rows::FOOTER, 0));
    tiles.push(Tile::new("about", TileKind::About, rows::FOOTER, 1));
    tiles
}

/// Headline cards for one news category
pub fn headline_tiles(category: NewsCategory) -> Vec<Tile> {
    category
        .headlines()
        .iter()
        .enumerate()
        .map(|(i, _)| {
            Tile::new(
                RegionId::owned(format!("headline-{}-{}", category.slug(), i)),
                TileKind::Headline(category, i),
                rows::HEADLINES,
                i as u16,
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_tile_ids_are_unique() {
        let mut tiles = static_tiles();
        for category in NewsCategory::ALL {
            tiles.extend(headline_tiles(category));
        }

        let ids: HashSet<_> = tiles.iter().map(|t| t.id.clone()).collect();
        assert_eq!(ids.len(), tiles.len());
    }

    #[test]
    fn test_positions_are_unique_within_static_tiles() {
        let tiles = static_tiles();
        let positions: HashSet<_> = tiles.iter().map(|t| t.order).collect();
        assert_eq!(positions.len(), tiles.len());
        assert!(tiles.iter().all(|t| t.row() < rows::COUNT));
    }

    #[test]
    fn test_only_voice_is_disabled() {
        let disabled: Vec<_> = static_tiles()
            .into_iter()
            .filter(|t| t.disabled)
            .map(|t| t.kind)
            .collect();
        assert_eq!(disabled, vec![TileKind::Voice]);
    }
}
