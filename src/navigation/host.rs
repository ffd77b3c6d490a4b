use serde::{Deserialize, Serialize};

use super::region::RegionId;

/// How a scroll into view should be animated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScrollBehavior {
    #[default]
    Smooth,
    Instant,
}

/// Where the region should land inside the viewport
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScrollBlock {
    Start,
    #[default]
    Center,
    End,
    Nearest,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ScrollOptions {
    #[serde(default)]
    pub behavior: ScrollBehavior,
    #[serde(default)]
    pub block: ScrollBlock,
}

/// Capabilities a focusable region exposes to the navigator.
///
/// The navigator only requests these effects, it never implements them.
/// Calls are made one region at a time and in order: a directional move
/// issues `scroll_into_view` and then `focus` on the destination.
pub trait RegionHost {
    fn scroll_into_view(&mut self, id: &RegionId, options: ScrollOptions);

    fn focus(&mut self, id: &RegionId);

    /// Equivalent of a click on the region
    fn activate(&mut self, id: &RegionId);

    /// Move focus to the neutral root scope, clearing widget focus
    fn focus_root(&mut self);
}

/// A single call made on a [`RegionHost`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "effect", rename_all = "snake_case")]
pub enum Effect {
    ScrollIntoView { id: RegionId, options: ScrollOptions },
    Focus { id: RegionId },
    Activate { id: RegionId },
    FocusRoot,
}

impl Effect {
    /// The region this effect targets, if any
    pub fn region(&self) -> Option<&RegionId> {
        match self {
            Effect::ScrollIntoView { id, .. } | Effect::Focus { id } | Effect::Activate { id } => {
                Some(id)
            }
            Effect::FocusRoot => None,
        }
    }
}

/// Host that records every requested effect in call order
#[derive(Debug, Default, Clone)]
pub struct RecordingHost {
    effects: Vec<Effect>,
}

impl RecordingHost {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn effects(&self) -> &[Effect] {
        &self.effects
    }

    pub fn take(&mut self) -> Vec<Effect> {
        std::mem::take(&mut self.effects)
    }

    pub fn is_empty(&self) -> bool {
        self.effects.is_empty()
    }

    /// Effects that targeted the given region
    pub fn effects_on<'a>(&'a self, id: &'a RegionId) -> impl Iterator<Item = &'a Effect> + 'a {
        self.effects.iter().filter(move |e| e.region() == Some(id))
    }

    pub fn focus_count(&self, id: &RegionId) -> usize {
        self.effects_on(id)
            .filter(|e| matches!(e, Effect::Focus { .. }))
            .count()
    }

    pub fn scroll_count(&self, id: &RegionId) -> usize {
        self.effects_on(id)
            .filter(|e| matches!(e, Effect::ScrollIntoView { .. }))
            .count()
    }

    pub fn activation_count(&self, id: &RegionId) -> usize {
        self.effects_on(id)
            .filter(|e| matches!(e, Effect::Activate { .. }))
            .count()
    }
}

impl RegionHost for RecordingHost {
    fn scroll_into_view(&mut self, id: &RegionId, options: ScrollOptions) {
        self.effects.push(Effect::ScrollIntoView {
            id: id.clone(),
            options,
        });
    }

    fn focus(&mut self, id: &RegionId) {
        self.effects.push(Effect::Focus { id: id.clone() });
    }

    fn activate(&mut self, id: &RegionId) {
        self.effects.push(Effect::Activate { id: id.clone() });
    }

    fn focus_root(&mut self) {
        self.effects.push(Effect::FocusRoot);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_scroll_options_are_smooth_center() {
        let options = ScrollOptions::default();
        assert_eq!(options.behavior, ScrollBehavior::Smooth);
        assert_eq!(options.block, ScrollBlock::Center);
    }

    #[test]
    fn test_recording_host_counts_per_region() {
        let a = RegionId::new("a");
        let b = RegionId::new("b");
        let mut host = RecordingHost::new();

        host.scroll_into_view(&a, ScrollOptions::default());
        host.focus(&a);
        host.activate(&b);
        host.focus_root();

        assert_eq!(host.effects().len(), 4);
        assert_eq!(host.focus_count(&a), 1);
        assert_eq!(host.scroll_count(&a), 1);
        assert_eq!(host.activation_count(&a), 0);
        assert_eq!(host.activation_count(&b), 1);
        assert_eq!(host.effects()[3], Effect::FocusRoot);
    }

    #[test]
    fn test_effect_serializes_with_tag() {
        let effect = Effect::Focus { id: RegionId::new("weather") };
        let json = serde_json::to_value(&effect).unwrap();
        assert_eq!(json["effect"], "focus");
        assert_eq!(json["id"], "weather");
    }
}
