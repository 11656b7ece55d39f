pub use simpay_types::error::{Error, SpResult};
pub use simpay_types::types::{SETTINGS_OPTION, SettingValue, SettingsMap};

pub use tracing::{debug, info, warn};

// vim: ts=4
