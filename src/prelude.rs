pub use crate::anchor_box::{AnchorBox, DrivenAnchors, FillImage, FillImageKind};
pub use crate::config::StatBarConfig;
pub use crate::direction::{FillDirection, LayoutFlip};
pub use crate::events::StatBarValueChanged;
pub use crate::host::{HostLookup, StatBarHost, TextTarget};
pub use crate::projection::FillProjection;
pub use crate::references::CachedReferences;
pub use crate::schedule::{StatBarSystems, StatBarUpdate};
pub use crate::settings::StatBarSettings;
pub use crate::spawn::{StatBarEntities, spawn_default_stat_bar, spawn_stat_bar};
pub use crate::stat_accessor::{StatBarCommandsExt, StatBarWorldExt};
pub use crate::stat_bar::{MAX_MIN_DIGITS, StatBar, StatBarCommand};
pub use crate::stat_bar_error::{StatBarError, StatBarResult};
pub use crate::transition::{ColorTint, ColorTints, TintTier, Transition};
