//! Modelo Models
//!
//! Data structures matching the backend `/modelo` resource.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

/// Server-assigned record id, kept exactly as the server sent it.
///
/// Backends hand out numbers or generated string keys; both are used
/// verbatim as list keys and in `/modelo/{id}`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct ModeloId(String);

impl ModeloId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ModeloId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<u32> for ModeloId {
    fn from(id: u32) -> Self {
        Self(id.to_string())
    }
}

impl From<&str> for ModeloId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl<'de> Deserialize<'de> for ModeloId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Raw::deserialize(deserializer)? {
            Raw::Text(s) if s.is_empty() => Err(serde::de::Error::custom("empty modelo id")),
            raw => Ok(Self(raw.into_text())),
        }
    }
}

/// Modelo record as returned by the backend (always carries an id)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Modelo {
    pub id: ModeloId,
    #[serde(rename = "nome", default, deserialize_with = "text_or_number")]
    pub name: String,
    #[serde(rename = "anoModelo", default, deserialize_with = "text_or_number")]
    pub model_year: String,
    #[serde(rename = "qtModelo", default, deserialize_with = "text_or_number")]
    pub quantity: String,
    #[serde(rename = "categoriaId", default, deserialize_with = "text_or_number")]
    pub category_id: String,
    #[serde(rename = "marcaId", default, deserialize_with = "text_or_number")]
    pub brand_id: String,
}

impl Modelo {
    /// Copy the five editable fields into a fresh draft (the id stays behind)
    pub fn to_draft(&self) -> ModeloDraft {
        ModeloDraft {
            name: self.name.clone(),
            model_year: self.model_year.clone(),
            quantity: self.quantity.clone(),
            category_id: self.category_id.clone(),
            brand_id: self.brand_id.clone(),
        }
    }
}

/// Editable form buffer. Also the request body for create and update.
///
/// Every field is free-form text; numeric fields are sent exactly as typed,
/// blanks included.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModeloDraft {
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(rename = "anoModelo")]
    pub model_year: String,
    #[serde(rename = "qtModelo")]
    pub quantity: String,
    #[serde(rename = "categoriaId")]
    pub category_id: String,
    #[serde(rename = "marcaId")]
    pub brand_id: String,
}

impl ModeloDraft {
    pub fn get(&self, field: ModeloField) -> &str {
        match field {
            ModeloField::Name => &self.name,
            ModeloField::ModelYear => &self.model_year,
            ModeloField::Quantity => &self.quantity,
            ModeloField::CategoryId => &self.category_id,
            ModeloField::BrandId => &self.brand_id,
        }
    }

    /// Replace exactly one field
    pub fn set(&mut self, field: ModeloField, value: String) {
        let slot = match field {
            ModeloField::Name => &mut self.name,
            ModeloField::ModelYear => &mut self.model_year,
            ModeloField::Quantity => &mut self.quantity,
            ModeloField::CategoryId => &mut self.category_id,
            ModeloField::BrandId => &mut self.brand_id,
        };
        *slot = value;
    }
}

/// The five user-editable fields of a Modelo
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModeloField {
    Name,
    ModelYear,
    Quantity,
    CategoryId,
    BrandId,
}

impl ModeloField {
    /// Form order
    pub const ALL: [ModeloField; 5] = [
        ModeloField::Name,
        ModeloField::ModelYear,
        ModeloField::Quantity,
        ModeloField::CategoryId,
        ModeloField::BrandId,
    ];

    /// Wire / form input name
    pub fn name(self) -> &'static str {
        match self {
            ModeloField::Name => "nome",
            ModeloField::ModelYear => "anoModelo",
            ModeloField::Quantity => "qtModelo",
            ModeloField::CategoryId => "categoriaId",
            ModeloField::BrandId => "marcaId",
        }
    }

    pub fn from_name(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|field| field.name() == s)
    }

    pub fn label(self) -> &'static str {
        match self {
            ModeloField::Name => "Nome",
            ModeloField::ModelYear => "Ano do Modelo",
            ModeloField::Quantity => "Quantidade",
            ModeloField::CategoryId => "Categoria ID",
            ModeloField::BrandId => "Marca ID",
        }
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            ModeloField::Name => "Digite o nome",
            ModeloField::ModelYear => "Digite o ano do modelo",
            ModeloField::Quantity => "Digite a quantidade",
            ModeloField::CategoryId => "Digite o ID da categoria",
            ModeloField::BrandId => "Digite o ID da marca",
        }
    }

    /// HTML input type; everything except the name is numeric
    pub fn input_type(self) -> &'static str {
        match self {
            ModeloField::Name => "text",
            _ => "number",
        }
    }
}

/// A JSON scalar that may arrive as text or as a number
#[derive(Deserialize)]
#[serde(untagged)]
enum Raw {
    Text(String),
    Int(i64),
    Big(u64),
    Float(f64),
}

impl Raw {
    fn into_text(self) -> String {
        match self {
            Raw::Text(s) => s,
            Raw::Int(n) => n.to_string(),
            Raw::Big(n) => n.to_string(),
            Raw::Float(n) => n.to_string(),
        }
    }
}

/// Accept a JSON string, number or null as text
fn text_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Raw>::deserialize(deserializer)?
        .map(Raw::into_text)
        .unwrap_or_default())
}
