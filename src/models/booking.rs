use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub const LANGUAGE_OPTIONS: &[&str] = &["English", "Hindi", "Tamil", "Spanish", "Mandarin", "Other"];

pub const MOBILITY_OPTIONS: &[&str] = &[
    "Independent",
    "Needs walking assistance",
    "Wheelchair user",
    "Requires stretcher",
];

pub const PACKAGE_OPTIONS: &[&str] = &[
    "Door-to-Door",
    "Full-day personalized tour",
    "Airport assistance only",
    "Medical appointment support",
];

/// Borrador de reserva del viajero. Todos los campos son texto tal cual llega
/// del input; las listas de opciones solo describen lo que ofrecen los selects.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize, Debug)]
pub struct BookingDraft {
    pub name: String,
    pub language: String,
    pub mobility: String,
    pub date: String, // YYYY-MM-DD del input type=date, puede estar vacío
    pub package: String,
    pub notes: String,
}

impl Default for BookingDraft {
    fn default() -> Self {
        Self {
            name: String::new(),
            language: LANGUAGE_OPTIONS[0].to_string(),
            mobility: MOBILITY_OPTIONS[0].to_string(),
            date: String::new(),
            package: PACKAGE_OPTIONS[0].to_string(),
            notes: String::new(),
        }
    }
}

impl BookingDraft {
    /// Valor actual de un campo
    pub fn get(&self, field: BookingField) -> &str {
        match field {
            BookingField::Name => &self.name,
            BookingField::Language => &self.language,
            BookingField::Mobility => &self.mobility,
            BookingField::Date => &self.date,
            BookingField::Package => &self.package,
            BookingField::Notes => &self.notes,
        }
    }

    /// Reemplaza solo el campo indicado; el resto queda intacto
    pub fn set(&mut self, field: BookingField, value: String) {
        let slot = match field {
            BookingField::Name => &mut self.name,
            BookingField::Language => &mut self.language,
            BookingField::Mobility => &mut self.mobility,
            BookingField::Date => &mut self.date,
            BookingField::Package => &mut self.package,
            BookingField::Notes => &mut self.notes,
        };
        *slot = value;
    }
}

/// Claves del formulario de reserva (coinciden con el atributo `name` del DOM)
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum BookingField {
    Name,
    Language,
    Mobility,
    Date,
    Package,
    Notes,
}

impl BookingField {
    pub const ALL: [BookingField; 6] = [
        BookingField::Name,
        BookingField::Language,
        BookingField::Mobility,
        BookingField::Date,
        BookingField::Package,
        BookingField::Notes,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            BookingField::Name => "name",
            BookingField::Language => "language",
            BookingField::Mobility => "mobility",
            BookingField::Date => "date",
            BookingField::Package => "package",
            BookingField::Notes => "notes",
        }
    }

    /// Opciones del select para campos enumerados, None para texto libre
    pub fn options(&self) -> Option<&'static [&'static str]> {
        match self {
            BookingField::Language => Some(LANGUAGE_OPTIONS),
            BookingField::Mobility => Some(MOBILITY_OPTIONS),
            BookingField::Package => Some(PACKAGE_OPTIONS),
            BookingField::Name | BookingField::Date | BookingField::Notes => None,
        }
    }

    /// ID del elemento en el DOM
    pub fn element_id(&self) -> String {
        format!("booking-{}", self.as_str())
    }
}

impl fmt::Display for BookingField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BookingField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BookingField::ALL
            .iter()
            .copied()
            .find(|field| field.as_str() == s)
            .ok_or_else(|| format!("Campo de reserva desconocido: {}", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_draft() {
        let draft = BookingDraft::default();
        assert_eq!(draft.name, "");
        assert_eq!(draft.language, "English");
        assert_eq!(draft.mobility, "Independent");
        assert_eq!(draft.date, "");
        assert_eq!(draft.package, "Door-to-Door");
        assert_eq!(draft.notes, "");
    }

    #[test]
    fn test_field_names_parse_back() {
        for field in BookingField::ALL {
            assert_eq!(field.as_str().parse::<BookingField>(), Ok(field));
        }
    }

    #[test]
    fn test_unknown_field_is_rejected() {
        assert!("email".parse::<BookingField>().is_err());
        assert!("Name".parse::<BookingField>().is_err());
        assert!("".parse::<BookingField>().is_err());
    }

    #[test]
    fn test_set_touches_only_one_field() {
        for field in BookingField::ALL {
            let before = BookingDraft::default();
            let mut after = before.clone();
            after.set(field, "x".to_string());

            assert_eq!(after.get(field), "x");
            for other in BookingField::ALL.iter().filter(|f| **f != field) {
                assert_eq!(after.get(*other), before.get(*other), "{} cambió", other);
            }
        }
    }

    #[test]
    fn test_options_only_for_selects() {
        assert_eq!(BookingField::Language.options().map(|o| o.len()), Some(6));
        assert_eq!(BookingField::Mobility.options().map(|o| o.len()), Some(4));
        assert_eq!(BookingField::Package.options().map(|o| o.len()), Some(4));
        assert!(BookingField::Name.options().is_none());
        assert!(BookingField::Date.options().is_none());
        assert!(BookingField::Notes.options().is_none());
    }

    #[test]
    fn test_defaults_are_first_options() {
        let draft = BookingDraft::default();
        for field in [BookingField::Language, BookingField::Mobility, BookingField::Package] {
            assert_eq!(Some(draft.get(field)), field.options().and_then(|o| o.first().copied()));
        }
    }

    #[test]
    fn test_draft_serializes_with_dom_names() {
        let json = serde_json::to_value(BookingDraft::default()).unwrap();
        for field in BookingField::ALL {
            assert!(json.get(field.as_str()).is_some(), "falta {}", field);
        }
    }
}
