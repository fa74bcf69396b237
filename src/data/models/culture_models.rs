use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Category of a cultural-information record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CulturalType {
    #[serde(rename = "historia")]
    History,
    #[serde(rename = "tradiciones")]
    Traditions,
    #[serde(rename = "festivales")]
    Festivals,
    #[serde(rename = "artesanias")]
    Crafts,
    #[serde(rename = "gastronomia")]
    Cuisine,
    #[serde(rename = "vestimenta")]
    Attire,
    #[serde(rename = "musica")]
    Music,
    #[serde(rename = "ubicacion")]
    Location,
    #[serde(rename = "poblacion")]
    Population,
    #[serde(rename = "idioma")]
    Language,
    #[serde(rename = "religion")]
    Religion,
}

impl CulturalType {
    pub fn as_str(&self) -> &'static str {
        match self {
            CulturalType::History => "historia",
            CulturalType::Traditions => "tradiciones",
            CulturalType::Festivals => "festivales",
            CulturalType::Crafts => "artesanias",
            CulturalType::Cuisine => "gastronomia",
            CulturalType::Attire => "vestimenta",
            CulturalType::Music => "musica",
            CulturalType::Location => "ubicacion",
            CulturalType::Population => "poblacion",
            CulturalType::Language => "idioma",
            CulturalType::Religion => "religion",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CulturalInfoEntry {
    pub id: u32,
    #[serde(rename = "titulo")]
    pub title: String,
    #[serde(rename = "descripcion")]
    pub description: String,
    #[serde(rename = "tipo")]
    pub kind: CulturalType,
    #[serde(rename = "imagen", default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(rename = "palabrasClave", default)]
    pub keywords: Vec<String>,
    pub region: String,
    #[serde(rename = "fechaCreacion", with = "super::dates")]
    pub created_at: DateTime<Utc>,
}

/// Query parameters of the cultural listing. Paging values are clamped,
/// not rejected, so they stay signed here.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CultureFilter {
    #[serde(rename = "busqueda")]
    pub search: Option<String>,
    #[serde(rename = "tipo")]
    pub kind: Option<CulturalType>,
    #[serde(rename = "pagina")]
    pub page: Option<i64>,
    #[serde(rename = "limite")]
    pub page_size: Option<i64>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CulturePage {
    #[serde(rename = "datos")]
    pub entries: Vec<CulturalInfoEntry>,
    pub total: usize,
    #[serde(rename = "pagina")]
    pub page: u32,
    #[serde(rename = "limite")]
    pub page_size: u32,
    #[serde(rename = "totalPaginas")]
    pub total_pages: u32,
}

/// Display label and color for one cultural type
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TypeDisplay {
    #[serde(rename = "nombre")]
    pub label: String,
    pub color: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TypeCount {
    #[serde(rename = "tipo")]
    pub kind: CulturalType,
    #[serde(rename = "cantidad")]
    pub count: usize,
}

/// Envelope used by the cultural endpoints
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    #[serde(rename = "exito")]
    pub success: bool,
    #[serde(rename = "mensaje")]
    pub message: String,
    #[serde(flatten)]
    pub body: T,
}

impl<T> ApiResponse<T> {
    pub fn ok(message: impl Into<String>, body: T) -> Self {
        Self {
            success: true,
            message: message.into(),
            body,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct Data<T> {
    #[serde(rename = "datos")]
    pub data: T,
}

#[derive(Debug, Serialize)]
pub struct DataWithTotal<T> {
    #[serde(rename = "datos")]
    pub data: Vec<T>,
    pub total: usize,
}
