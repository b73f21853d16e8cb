pub mod catalog;
pub mod config;
pub mod error;
pub mod field;
pub mod form_document;
pub mod form_state;
pub mod prompt;
pub mod status;

pub use catalog::{
    ASPECT_RATIOS, AspectRatioOption, CAMERA_MOVEMENTS, CameraMovementOption,
    DEFAULT_ASPECT_RATIO,
};
pub use config::{AppConfig, LoggingSettings, OutputFormat, OutputSettings};
pub use error::AppError;
pub use field::{FieldKind, FormField};
pub use form_document::FormDocumentFormat;
pub use form_state::FormState;
pub use prompt::{GeneratedPrompts, PromptStyle, Segment, assemble};
pub use status::{StatusKind, StatusLine, StatusMessage};
