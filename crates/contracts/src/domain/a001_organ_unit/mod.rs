//! Órgano: borrador del formulario, validación y máquina de estados de envío

pub mod aggregate;
pub mod form;

// Re-exports
pub use aggregate::{OrganUnitDraft, OrganUnitField, ValidationError, ValidationErrors};
pub use form::{FormStage, OrganUnitForm};
