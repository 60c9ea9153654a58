use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::enums::nivel_jerarquico::NivelJerarquico;

/// Fecha de inicio con la que nace todo borrador nuevo
pub const FECHA_INICIO_DEFAULT: &str = "2025-01-01";

// ============================================================================
// Fields
// ============================================================================

/// Campos del formulario de órgano
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum OrganUnitField {
    Denominacion,
    Especialidad,
    NivelJerarquico,
    Abreviatura,
    Orden,
    FechaInicio,
    FechaFin,
    Descripcion,
}

impl OrganUnitField {
    /// Nombre del campo tal como viaja en el JSON y en el DOM
    pub fn as_str(&self) -> &'static str {
        match self {
            OrganUnitField::Denominacion => "denominacion",
            OrganUnitField::Especialidad => "especialidad",
            OrganUnitField::NivelJerarquico => "nivelJerarquico",
            OrganUnitField::Abreviatura => "abreviatura",
            OrganUnitField::Orden => "orden",
            OrganUnitField::FechaInicio => "fechaInicio",
            OrganUnitField::FechaFin => "fechaFin",
            OrganUnitField::Descripcion => "descripcion",
        }
    }

    /// Campos cuya ausencia, por sí sola, es un error de validación
    pub fn required() -> Vec<OrganUnitField> {
        vec![
            OrganUnitField::Denominacion,
            OrganUnitField::Especialidad,
            OrganUnitField::NivelJerarquico,
            OrganUnitField::Abreviatura,
            OrganUnitField::Orden,
            OrganUnitField::FechaInicio,
        ]
    }
}

// ============================================================================
// Validation errors
// ============================================================================

/// Errores de validación del formulario. Ambos son locales y recuperables:
/// se muestran junto al campo y nunca escalan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    RequiredFieldMissing,
    DateRangeInvalid,
}

impl ValidationError {
    pub fn message(&self) -> &'static str {
        match self {
            ValidationError::RequiredFieldMissing => "Este campo es obligatorio",
            ValidationError::DateRangeInvalid => {
                "La fecha de fin debe ser posterior a la fecha de inicio"
            }
        }
    }
}

/// Mapa campo → error producido por una pasada de validación
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    entries: BTreeMap<OrganUnitField, ValidationError>,
}

impl ValidationErrors {
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn get(&self, field: OrganUnitField) -> Option<ValidationError> {
        self.entries.get(&field).copied()
    }

    pub fn message_for(&self, field: OrganUnitField) -> Option<&'static str> {
        self.get(field).map(|e| e.message())
    }

    /// Retira la entrada de un solo campo, si existe
    pub fn clear(&mut self, field: OrganUnitField) {
        self.entries.remove(&field);
    }

    fn record(&mut self, field: OrganUnitField, error: ValidationError) {
        self.entries.insert(field, error);
    }

    pub fn fields(&self) -> impl Iterator<Item = OrganUnitField> + '_ {
        self.entries.keys().copied()
    }
}

// ============================================================================
// Draft
// ============================================================================

/// Borrador del órgano en edición. Todos los campos guardan el valor crudo
/// del control correspondiente; `orden` incluido, que llega como texto desde
/// un input numérico.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrganUnitDraft {
    pub denominacion: String,
    pub especialidad: String,

    #[serde(rename = "nivelJerarquico")]
    pub nivel_jerarquico: String,

    pub abreviatura: String,
    pub orden: String,

    #[serde(rename = "fechaInicio")]
    pub fecha_inicio: String,

    /// Cadena vacía = sin fecha de fin
    #[serde(rename = "fechaFin")]
    pub fecha_fin: String,

    pub descripcion: String,
}

impl Default for OrganUnitDraft {
    fn default() -> Self {
        Self {
            denominacion: String::new(),
            especialidad: String::new(),
            nivel_jerarquico: String::new(),
            abreviatura: String::new(),
            orden: String::new(),
            fecha_inicio: FECHA_INICIO_DEFAULT.to_string(),
            fecha_fin: String::new(),
            descripcion: String::new(),
        }
    }
}

impl OrganUnitDraft {
    /// Valor crudo de un campo
    pub fn field(&self, field: OrganUnitField) -> &str {
        match field {
            OrganUnitField::Denominacion => &self.denominacion,
            OrganUnitField::Especialidad => &self.especialidad,
            OrganUnitField::NivelJerarquico => &self.nivel_jerarquico,
            OrganUnitField::Abreviatura => &self.abreviatura,
            OrganUnitField::Orden => &self.orden,
            OrganUnitField::FechaInicio => &self.fecha_inicio,
            OrganUnitField::FechaFin => &self.fecha_fin,
            OrganUnitField::Descripcion => &self.descripcion,
        }
    }

    /// Reemplaza el valor de un campo dejando el resto intactos
    pub fn set_field(&mut self, field: OrganUnitField, value: String) {
        match field {
            OrganUnitField::Denominacion => self.denominacion = value,
            OrganUnitField::Especialidad => self.especialidad = value,
            OrganUnitField::NivelJerarquico => self.nivel_jerarquico = value,
            OrganUnitField::Abreviatura => self.abreviatura = value,
            OrganUnitField::Orden => self.orden = value,
            OrganUnitField::FechaInicio => self.fecha_inicio = value,
            OrganUnitField::FechaFin => self.fecha_fin = value,
            OrganUnitField::Descripcion => self.descripcion = value,
        }
    }

    /// Nivel jerárquico como enumeración, si el código almacenado es válido
    pub fn nivel(&self) -> Option<NivelJerarquico> {
        NivelJerarquico::from_code(&self.nivel_jerarquico)
    }

    /// Validación completa del borrador. Recalcula el mapa entero, nunca
    /// mezcla con un resultado anterior. El borrador es válido sii el mapa
    /// devuelto está vacío.
    pub fn validate(&self) -> ValidationErrors {
        let mut errors = ValidationErrors::default();

        for field in OrganUnitField::required() {
            if self.field(field).is_empty() {
                errors.record(field, ValidationError::RequiredFieldMissing);
            }
        }

        // La regla de rango se evalúa con independencia de que fechaInicio
        // esté marcada como ausente o no.
        if !self.fecha_inicio.is_empty()
            && !self.fecha_fin.is_empty()
            && !end_after_start(&self.fecha_inicio, &self.fecha_fin)
        {
            errors.record(OrganUnitField::FechaFin, ValidationError::DateRangeInvalid);
        }

        errors
    }
}

/// `fin` estrictamente posterior a `inicio`. Valores que no sean fechas ISO
/// caen al orden lexicográfico, que para fechas ISO coincide.
fn end_after_start(inicio: &str, fin: &str) -> bool {
    let inicio_parsed = NaiveDate::parse_from_str(inicio, "%Y-%m-%d");
    let fin_parsed = NaiveDate::parse_from_str(fin, "%Y-%m-%d");
    match (inicio_parsed, fin_parsed) {
        (Ok(i), Ok(f)) => f > i,
        _ => fin > inicio,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_draft() -> OrganUnitDraft {
        OrganUnitDraft {
            denominacion: "Consejo".to_string(),
            especialidad: "Salud".to_string(),
            nivel_jerarquico: "Alto".to_string(),
            abreviatura: "CS".to_string(),
            orden: "1".to_string(),
            fecha_inicio: "2025-01-01".to_string(),
            fecha_fin: String::new(),
            descripcion: String::new(),
        }
    }

    #[test]
    fn test_default_draft() {
        let draft = OrganUnitDraft::default();
        assert_eq!(draft.fecha_inicio, FECHA_INICIO_DEFAULT);
        for field in OrganUnitField::required() {
            if field != OrganUnitField::FechaInicio {
                assert_eq!(draft.field(field), "");
            }
        }
        assert_eq!(draft.fecha_fin, "");
        assert_eq!(draft.descripcion, "");
    }

    #[test]
    fn test_empty_draft_flags_every_required_field() {
        let mut draft = OrganUnitDraft::default();
        draft.fecha_inicio = String::new();

        let errors = draft.validate();
        assert_eq!(errors.len(), 6);
        assert_eq!(errors.fields().collect::<Vec<_>>(), OrganUnitField::required());
        for field in OrganUnitField::required() {
            assert_eq!(errors.get(field), Some(ValidationError::RequiredFieldMissing));
        }
        assert_eq!(errors.get(OrganUnitField::FechaFin), None);
        assert_eq!(errors.get(OrganUnitField::Descripcion), None);
    }

    #[test]
    fn test_filled_draft_is_valid() {
        assert!(filled_draft().validate().is_empty());
    }

    #[test]
    fn test_missing_fields_only_flag_themselves() {
        let mut draft = filled_draft();
        draft.especialidad = String::new();
        draft.orden = String::new();

        let errors = draft.validate();
        assert_eq!(errors.len(), 2);
        assert_eq!(
            errors.get(OrganUnitField::Especialidad),
            Some(ValidationError::RequiredFieldMissing)
        );
        assert_eq!(
            errors.get(OrganUnitField::Orden),
            Some(ValidationError::RequiredFieldMissing)
        );
        assert_eq!(errors.get(OrganUnitField::Denominacion), None);
    }

    #[test]
    fn test_fecha_fin_earlier_is_invalid() {
        let mut draft = filled_draft();
        draft.fecha_inicio = "2025-03-01".to_string();
        draft.fecha_fin = "2025-02-01".to_string();

        let errors = draft.validate();
        assert_eq!(
            errors.get(OrganUnitField::FechaFin),
            Some(ValidationError::DateRangeInvalid)
        );
    }

    #[test]
    fn test_fecha_fin_equal_is_invalid() {
        let mut draft = filled_draft();
        draft.fecha_inicio = "2025-03-01".to_string();
        draft.fecha_fin = "2025-03-01".to_string();

        assert_eq!(
            draft.validate().get(OrganUnitField::FechaFin),
            Some(ValidationError::DateRangeInvalid)
        );
    }

    #[test]
    fn test_fecha_fin_later_is_valid() {
        let mut draft = filled_draft();
        draft.fecha_inicio = "2025-03-01".to_string();
        draft.fecha_fin = "2025-04-01".to_string();

        assert!(draft.validate().is_empty());
    }

    #[test]
    fn test_date_range_checked_even_with_other_fields_missing() {
        let mut draft = OrganUnitDraft::default();
        draft.fecha_inicio = "2025-05-01".to_string();
        draft.fecha_fin = "2025-04-01".to_string();

        let errors = draft.validate();
        assert_eq!(
            errors.get(OrganUnitField::FechaFin),
            Some(ValidationError::DateRangeInvalid)
        );
        assert_eq!(
            errors.get(OrganUnitField::Denominacion),
            Some(ValidationError::RequiredFieldMissing)
        );
    }

    #[test]
    fn test_orden_is_presence_only() {
        // El mínimo de 1 es una pista de la UI; la validación solo exige
        // que el campo no esté vacío.
        let mut draft = filled_draft();
        draft.orden = "0".to_string();
        assert!(draft.validate().is_empty());
    }

    #[test]
    fn test_validation_is_idempotent() {
        let mut draft = filled_draft();
        draft.abreviatura = String::new();
        draft.fecha_fin = "2024-01-01".to_string();

        assert_eq!(draft.validate(), draft.validate());
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            ValidationError::RequiredFieldMissing.message(),
            "Este campo es obligatorio"
        );
        assert_eq!(
            ValidationError::DateRangeInvalid.message(),
            "La fecha de fin debe ser posterior a la fecha de inicio"
        );
    }

    #[test]
    fn test_nivel_parses_from_stored_code() {
        use crate::enums::nivel_jerarquico::NivelJerarquico;

        let mut draft = filled_draft();
        assert_eq!(draft.nivel(), Some(NivelJerarquico::Alto));
        draft.nivel_jerarquico = String::new();
        assert_eq!(draft.nivel(), None);
    }
}
