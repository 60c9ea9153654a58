use serde::{Deserialize, Serialize};

/// Niveles jerárquicos de un órgano
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NivelJerarquico {
    Alto,
    Medio,
    Basico,
}

impl NivelJerarquico {
    /// Código almacenado en el borrador (el valor del `<select>`)
    pub fn code(&self) -> &'static str {
        match self {
            NivelJerarquico::Alto => "Alto",
            NivelJerarquico::Medio => "Medio",
            NivelJerarquico::Basico => "Básico",
        }
    }

    /// Nombre legible para mostrar
    pub fn display_name(&self) -> &'static str {
        match self {
            NivelJerarquico::Alto => "Alto",
            NivelJerarquico::Medio => "Medio",
            NivelJerarquico::Basico => "Básico",
        }
    }

    /// Todos los niveles, en el orden en que se ofrecen al usuario
    pub fn all() -> Vec<NivelJerarquico> {
        vec![
            NivelJerarquico::Alto,
            NivelJerarquico::Medio,
            NivelJerarquico::Basico,
        ]
    }

    /// Parseo desde el código
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "Alto" => Some(NivelJerarquico::Alto),
            "Medio" => Some(NivelJerarquico::Medio),
            "Básico" => Some(NivelJerarquico::Basico),
            _ => None,
        }
    }
}

impl ToString for NivelJerarquico {
    fn to_string(&self) -> String {
        self.code().to_string()
    }
}
