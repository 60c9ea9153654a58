use super::aggregate::{OrganUnitDraft, OrganUnitField, ValidationErrors};

/// Etapas del formulario. No existe etapa "en vuelo": el envío es síncrono.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormStage {
    Editing,
    Submitted,
}

/// Estado completo del formulario: borrador, errores vigentes y etapa.
/// Todas las transiciones son síncronas y totales.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrganUnitForm {
    pub draft: OrganUnitDraft,
    pub errors: ValidationErrors,
    pub stage: FormStage,
}

impl Default for OrganUnitForm {
    fn default() -> Self {
        Self::new()
    }
}

impl OrganUnitForm {
    pub fn new() -> Self {
        Self {
            draft: OrganUnitDraft::default(),
            errors: ValidationErrors::default(),
            stage: FormStage::Editing,
        }
    }

    /// Aplica una edición y descarta el error registrado para ese campo,
    /// sin revalidar. El error reaparece, si procede, en el próximo envío.
    pub fn edit_field(&mut self, field: OrganUnitField, value: impl Into<String>) {
        self.draft.set_field(field, value.into());
        self.errors.clear(field);
    }

    /// Intento de envío: pasada completa de validación. Con el mapa vacío el
    /// formulario pasa a `Submitted` y devuelve `true`; el llamador es quien
    /// entrega el borrador al colector. Si no, el mapa queda retenido para
    /// mostrarse y la etapa no cambia.
    pub fn submit(&mut self) -> bool {
        self.errors = self.draft.validate();
        if self.errors.is_empty() {
            self.stage = FormStage::Submitted;
            true
        } else {
            false
        }
    }

    /// Vuelve al borrador por defecto desde cualquier etapa. Atiende tanto a
    /// "Limpiar" durante la edición como a "Agregar otro órgano" tras un
    /// envío correcto.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    pub fn is_submitted(&self) -> bool {
        self.stage == FormStage::Submitted
    }
}
