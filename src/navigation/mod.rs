//! Remote-control focus navigation.
//!
//! A [`FocusNavigator`] keeps a virtual cursor over the regions a
//! [`RegionSource`] reports and turns [`NavInput`]s into calls on a
//! [`RegionHost`]. Up/Left step to the previous region and Down/Right to
//! the next one, wrapping at both ends.

pub mod host;
pub mod input;
pub mod navigator;
pub mod region;

pub use host::{Effect, RecordingHost, RegionHost, ScrollBehavior, ScrollBlock, ScrollOptions};
pub use input::{KeyMap, NavInput, Step, key_name, parse_key};
pub use navigator::{FocusNavigator, NavOutcome, NavState, NavigatorOptions};
pub use region::{LayoutOrder, RegionId, RegionRegistry, RegionSource, RegionSpec};
