pub use crate::error::{Error, SpResult};
pub use crate::types::{SETTINGS_OPTION, SettingValue, SettingsMap};

pub use tracing::{debug, debug_span, error, info, info_span, warn};

// vim: ts=4
