// Standalone components
pub mod button;
pub mod checkbox_field;
pub mod field_error;
pub mod form;
pub mod form_section;
pub mod form_select;
pub mod input;
pub mod json_preview;

// Primitive wrappers
pub mod alert_dialog;

// Re-exports for convenience
pub use alert_dialog::*;
pub use button::*;
pub use checkbox_field::*;
pub use field_error::*;
pub use form::*;
pub use form_section::*;
pub use form_select::*;
pub use input::*;
pub use json_preview::*;
