//! Settings registry with priority-ordered collections, typed controls and persistence
//!
//! # Architecture
//!
//! - **Collection** (`collection.rs`): keyed store retrieved in priority order
//! - **Section** (`section.rs`): sections and subsections
//! - **Setting** (`setting.rs`): setting definitions and control kinds
//! - **Registry** (`registry.rs`): registration context, frozen after startup
//! - **Schema** (`schema.rs`): REST schema and value validation
//! - **Render** (`render.rs`): form controls
//! - **Service** (`service.rs`): value resolution, caching and persistence

pub mod collection;
pub mod registry;
pub mod render;
pub mod schema;
pub mod section;
pub mod service;
pub mod setting;

pub use collection::{Collection, CollectionItem};
pub use registry::{FrozenSettingsRegistry, Registrar, SettingsRegistry};
pub use render::{FieldRenderer, field_id, field_name, parse_field_name, settings_url};
pub use section::{Section, Subsection};
pub use service::SettingsService;
pub use setting::{
	InputField, InputType, SchemaType, Setting, SettingBuilder, SettingKind, SettingOption,
	SettingSchema,
};

// vim: ts=4
