use log::{debug, trace};

use super::host::{RegionHost, ScrollOptions};
use super::input::{NavInput, Step};
use super::region::{RegionId, RegionSource};

/// Observable navigator state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavState {
    /// No focusable regions
    Idle,
    /// At least one region; `cursor` indexes the current snapshot
    Active { cursor: usize },
}

/// What a call to [`FocusNavigator::handle`] did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavOutcome {
    Moved { from: usize, to: usize, id: RegionId },
    Activated(RegionId),
    Cancelled,
    /// Not mounted, no regions, or nothing to do
    Ignored,
}

/// Behavior switches for the navigator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavigatorOptions {
    pub scroll: ScrollOptions,
    /// Focus region 0 when mounting
    pub autofocus: bool,
}

impl Default for NavigatorOptions {
    fn default() -> Self {
        Self {
            scroll: ScrollOptions::default(),
            autofocus: true,
        }
    }
}

/// Virtual cursor over the focusable regions of a UI.
///
/// The region list is rescanned before every input, so regions that appear
/// or disappear between events are always seen. After a rescan the cursor
/// follows the previously focused region by identity; if that region is
/// gone the cursor is clamped to `min(previous, len - 1)`.
#[derive(Debug)]
pub struct FocusNavigator {
    options: NavigatorOptions,
    regions: Vec<RegionId>,
    cursor: usize,
    mounted: bool,
}

impl Default for FocusNavigator {
    fn default() -> Self {
        Self::new(NavigatorOptions::default())
    }
}

impl FocusNavigator {
    pub fn new(options: NavigatorOptions) -> Self {
        Self {
            options,
            regions: Vec::new(),
            cursor: 0,
            mounted: false,
        }
    }

    pub fn options(&self) -> &NavigatorOptions {
        &self.options
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    pub fn state(&self) -> NavState {
        if self.regions.is_empty() {
            NavState::Idle
        } else {
            NavState::Active {
                cursor: self.cursor,
            }
        }
    }

    /// Cursor index, `None` while idle
    pub fn cursor(&self) -> Option<usize> {
        match self.state() {
            NavState::Idle => None,
            NavState::Active { cursor } => Some(cursor),
        }
    }

    /// Region under the cursor in the last snapshot
    pub fn current(&self) -> Option<&RegionId> {
        self.regions.get(self.cursor)
    }

    /// The last snapshot
    pub fn regions(&self) -> &[RegionId] {
        &self.regions
    }

    /// Install the navigator: initial scan, then focus region 0 if any.
    pub fn mount<S, H>(&mut self, source: &S, host: &mut H)
    where
        S: RegionSource + ?Sized,
        H: RegionHost + ?Sized,
    {
        self.mounted = true;
        self.cursor = 0;
        self.regions = source.snapshot();
        debug!("Navigator mounted with {} regions", self.regions.len());

        if self.options.autofocus {
            if let Some(first) = self.regions.first() {
                host.focus(first);
            }
        }
    }

    /// Tear down. Inputs are ignored until the next `mount`.
    pub fn unmount(&mut self) {
        debug!("Navigator unmounted");
        self.mounted = false;
        self.regions.clear();
        self.cursor = 0;
    }

    /// Re-query the region set and bring the cursor back into bounds
    pub fn rescan<S>(&mut self, source: &S) -> &[RegionId]
    where
        S: RegionSource + ?Sized,
    {
        let previous = self.regions.get(self.cursor).cloned();
        let fresh = source.snapshot();

        self.cursor = if fresh.is_empty() {
            0
        } else if let Some(pos) = previous
            .as_ref()
            .and_then(|id| fresh.iter().position(|r| r == id))
        {
            pos
        } else {
            self.cursor.min(fresh.len() - 1)
        };

        if fresh.len() != self.regions.len() {
            trace!(
                "Rescan: {} -> {} regions, cursor {}",
                self.regions.len(),
                fresh.len(),
                self.cursor
            );
        }
        self.regions = fresh;
        &self.regions
    }

    /// Apply one input against a fresh snapshot of `source`
    pub fn handle<S, H>(&mut self, input: NavInput, source: &S, host: &mut H) -> NavOutcome
    where
        S: RegionSource + ?Sized,
        H: RegionHost + ?Sized,
    {
        if !self.mounted {
            trace!("Ignoring {:?}: navigator not mounted", input);
            return NavOutcome::Ignored;
        }

        let len = self.rescan(source).len();
        if len == 0 {
            trace!("Ignoring {:?}: no focusable regions", input);
            return NavOutcome::Ignored;
        }

        match input.step() {
            Some(step) => self.step(step, host),
            None => match input {
                NavInput::Activate => {
                    let id = self.regions[self.cursor].clone();
                    debug!("Activating {}", id);
                    host.activate(&id);
                    NavOutcome::Activated(id)
                }
                NavInput::Cancel => {
                    debug!("Focus returned to root");
                    host.focus_root();
                    NavOutcome::Cancelled
                }
                _ => NavOutcome::Ignored,
            },
        }
    }

    fn step<H>(&mut self, step: Step, host: &mut H) -> NavOutcome
    where
        H: RegionHost + ?Sized,
    {
        let len = self.regions.len();
        let from = self.cursor;
        let to = match step {
            Step::Previous => {
                if from == 0 {
                    len - 1
                } else {
                    from - 1
                }
            }
            Step::Next => (from + 1) % len,
        };

        self.cursor = to;
        let id = self.regions[to].clone();
        debug!("Focus {:?}: {} -> {} ({})", step, from, to, id);

        host.scroll_into_view(&id, self.options.scroll);
        host.focus(&id);

        NavOutcome::Moved { from, to, id }
    }
}
