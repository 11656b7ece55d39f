pub use crate::app::App;
pub use simpay_types::error::{Error, SpResult};
pub use simpay_types::types::{SettingValue, SettingsMap};

pub use tracing::{debug, error, info, warn};

// vim: ts=4
