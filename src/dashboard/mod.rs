pub mod content;
pub mod render;
pub mod runtime;
pub mod theme;
pub mod tiles;
pub mod view;

use anyhow::Result;
use crossterm::event::KeyEvent;
use log::{debug, info};
use std::time::Instant;

use crate::config::Config;
use crate::navigation::{FocusNavigator, KeyMap, NavInput, NavOutcome, NavigatorOptions, RegionRegistry};

use content::NewsCategory;
use theme::ThemeVariant;
use view::{Command, DashboardView};

pub use runtime::run;

/// The dashboard: tiles, the registry they register with, and the
/// navigator that moves focus between them
pub struct Dashboard {
    navigator: FocusNavigator,
    registry: RegionRegistry,
    view: DashboardView,
    keys: KeyMap,
}

impl Dashboard {
    pub fn new(config: &Config) -> Result<Self> {
        Ok(Self::with_parts(
            config.navigator_options(),
            config.key_map()?,
            config.ui.theme,
            config.ui.household_name.clone(),
        ))
    }

    pub fn with_parts(
        options: NavigatorOptions,
        keys: KeyMap,
        theme: ThemeVariant,
        household_name: impl Into<String>,
    ) -> Self {
        Self {
            navigator: FocusNavigator::new(options),
            registry: RegionRegistry::new(),
            view: DashboardView::new(theme, household_name),
            keys,
        }
    }

    pub fn view(&self) -> &DashboardView {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut DashboardView {
        &mut self.view
    }

    pub fn navigator(&self) -> &FocusNavigator {
        &self.navigator
    }

    pub fn registry(&self) -> &RegionRegistry {
        &self.registry
    }

    pub fn keys(&self) -> &KeyMap {
        &self.keys
    }

    /// Register every tile and install the navigator
    pub fn mount(&mut self) {
        for tile in &self.view.tiles {
            self.registry.register(tile.region());
        }
        self.navigator.mount(&self.registry, &mut self.view);
        info!("Dashboard mounted with {} tiles", self.registry.len());
    }

    pub fn unmount(&mut self) {
        self.navigator.unmount();
        self.registry.clear();
        info!("Dashboard unmounted");
    }

    /// Route a key event. `None` when the key is not a navigation key.
    pub fn handle_key(&mut self, event: &KeyEvent) -> Option<NavOutcome> {
        let input = self.keys.map_event(event)?;
        Some(self.dispatch(input))
    }

    pub fn dispatch(&mut self, input: NavInput) -> NavOutcome {
        let outcome = self.navigator.handle(input, &self.registry, &mut self.view);
        for command in self.view.take_commands() {
            self.execute(command);
        }
        outcome
    }

    pub fn tick(&mut self, now: Instant) {
        self.view.tick(now);
    }

    fn execute(&mut self, command: Command) {
        match command {
            Command::ShowCategory(category) => self.show_category(category),
        }
    }

    fn show_category(&mut self, category: NewsCategory) {
        let (removed, added) = self.view.replace_headlines(category);
        for tile in &removed {
            self.registry.deregister(&tile.id);
        }
        for tile in &added {
            self.registry.register(tile.region());
        }
        debug!(
            "News category {}: {} headlines out, {} in",
            category.slug(),
            removed.len(),
            added.len()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::navigation::{RegionId, RegionSource};
    use tiles::{TileKind, rows};

    fn dashboard() -> Dashboard {
        let mut dashboard = Dashboard::with_parts(
            NavigatorOptions::default(),
            KeyMap::default(),
            ThemeVariant::Dark,
            "Family",
        );
        dashboard.mount();
        dashboard
    }

    #[test]
    fn test_mount_focuses_theme_toggle() {
        let dashboard = dashboard();
        assert!(dashboard.view().is_focused(&RegionId::new("theme")));
        assert_eq!(dashboard.navigator().cursor(), Some(0));
    }

    #[test]
    fn test_voice_button_is_skipped() {
        let mut dashboard = dashboard();
        dashboard.dispatch(NavInput::Right);
        dashboard.dispatch(NavInput::Right);

        assert!(dashboard.view().is_focused(&RegionId::new("settings")));
    }

    #[test]
    fn test_escape_clears_focus_but_keeps_cursor() {
        let mut dashboard = dashboard();
        dashboard.dispatch(NavInput::Down);

        assert_eq!(dashboard.dispatch(NavInput::Cancel), NavOutcome::Cancelled);
        assert_eq!(dashboard.view().focused, None);
        assert_eq!(dashboard.navigator().cursor(), Some(1));

        dashboard.dispatch(NavInput::Down);
        assert!(dashboard.view().is_focused(&RegionId::new("settings")));
    }

    #[test]
    fn test_category_switch_changes_region_set() {
        let mut dashboard = dashboard();
        let before = dashboard.registry().snapshot().len();

        let sports = RegionId::new("news-category-sports");
        let position = dashboard
            .registry()
            .snapshot()
            .iter()
            .position(|id| id == &sports)
            .unwrap();
        for _ in 0..position {
            dashboard.dispatch(NavInput::Down);
        }
        assert!(dashboard.view().is_focused(&sports));

        dashboard.dispatch(NavInput::Activate);

        let snapshot = dashboard.registry().snapshot();
        let expected = before - NewsCategory::General.headlines().len()
            + NewsCategory::Sports.headlines().len();
        assert_eq!(snapshot.len(), expected);
        assert_eq!(dashboard.view().category, NewsCategory::Sports);
        assert!(snapshot.contains(&RegionId::new("headline-sports-3")));
        assert!(!snapshot.contains(&RegionId::new("headline-general-0")));

        // Cursor stays on the category button across the rescan
        dashboard.dispatch(NavInput::Down);
        let focused = dashboard.view().focused.clone().unwrap();
        assert_eq!(
            dashboard.view().tile(&focused).map(|t| t.kind),
            Some(TileKind::NewsCategory(NewsCategory::Entertainment))
        );
    }

    #[test]
    fn test_wrap_from_last_tile_to_first() {
        let mut dashboard = dashboard();
        dashboard.dispatch(NavInput::Up);
        assert!(dashboard.view().is_focused(&RegionId::new("about")));
        assert_eq!(
            dashboard.view().tile(&RegionId::new("about")).map(|t| t.row()),
            Some(rows::FOOTER)
        );

        dashboard.dispatch(NavInput::Down);
        assert!(dashboard.view().is_focused(&RegionId::new("theme")));
    }

    #[test]
    fn test_unmount_stops_navigation() {
        let mut dashboard = dashboard();
        dashboard.unmount();

        assert_eq!(dashboard.dispatch(NavInput::Down), NavOutcome::Ignored);
        assert!(dashboard.registry().is_empty());
    }
}
