use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct InsurerDto {
    pub id: i32,
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "nit")]
    pub tax_id: String,
    #[serde(rename = "contacto")]
    pub contact: String,
    #[serde(rename = "contratos", default)]
    pub contracts: Vec<ContractDto>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct InsurerInputDto {
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "nit")]
    pub tax_id: String,
    #[serde(rename = "contacto")]
    pub contact: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct ContractDto {
    pub id: i32,
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "fecha_inicio")]
    pub start_date: NaiveDate,
    #[serde(rename = "fecha_fin")]
    pub end_date: NaiveDate,
    #[serde(rename = "tipo_tarifa")]
    pub rate_type: String,
    #[serde(rename = "techo_mensual")]
    pub monthly_cap: f64,
    #[serde(rename = "condiciones")]
    pub conditions: Option<String>,
    #[serde(rename = "aseguradora_id")]
    pub insurer_id: i32,
}

/// Full set of writable contract fields, used for both creation and update.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct ContractInputDto {
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "fecha_inicio")]
    pub start_date: NaiveDate,
    #[serde(rename = "fecha_fin")]
    pub end_date: NaiveDate,
    /// Usually one of `ISS`, `SOAT`, `CUPS` or `Otro`
    #[serde(rename = "tipo_tarifa")]
    pub rate_type: String,
    #[serde(rename = "techo_mensual")]
    pub monthly_cap: f64,
    #[serde(rename = "condiciones", default)]
    pub conditions: Option<String>,
    #[serde(rename = "aseguradora_id")]
    pub insurer_id: i32,
}
