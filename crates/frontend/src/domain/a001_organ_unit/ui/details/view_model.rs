use super::model;
use contracts::domain::a001_organ_unit::{OrganUnitField, OrganUnitForm};
use leptos::prelude::*;

/// ViewModel for the organ unit form
#[derive(Clone)]
pub struct OrganUnitDetailsViewModel {
    pub form: RwSignal<OrganUnitForm>,
}

impl OrganUnitDetailsViewModel {
    pub fn new() -> Self {
        Self {
            form: RwSignal::new(OrganUnitForm::new()),
        }
    }

    pub fn is_submitted(&self) -> impl Fn() -> bool + '_ {
        move || self.form.get().is_submitted()
    }

    /// Current raw value of one field
    pub fn field_value(&self, field: OrganUnitField) -> String {
        self.form.get().draft.field(field).to_string()
    }

    /// Message to render under one field, if its last validation failed
    pub fn field_error(&self, field: OrganUnitField) -> Option<&'static str> {
        self.form.get().errors.message_for(field)
    }

    /// One keystroke/selection: store the value and drop that field's error
    pub fn edit_field(&self, field: OrganUnitField, value: String) {
        self.form.update(|f| f.edit_field(field, value));
    }

    /// Validate and commit. On a clean pass the draft goes to the console
    /// sink and the success view takes over.
    pub fn submit_command(&self) {
        let mut committed = false;
        self.form.update(|f| committed = f.submit());
        if committed {
            if let Err(e) = model::register(&self.form.get().draft) {
                log::error!("No se pudo registrar el órgano: {}", e);
            }
        }
    }

    /// "Limpiar" while editing, "Agregar otro órgano" from the success view
    pub fn reset_command(&self) {
        self.form.update(|f| f.reset());
    }
}
