use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use uuid::Uuid;

use super::dates::parse_record_date;

/// One billed unit of work as delivered by the upstream ingestion layer.
///
/// Records are immutable inputs: the aggregation code only ever borrows
/// slices of them and never mutates the caller's collection. Serde aliases
/// bridge the upstream tabular column names, and a missing or unparseable
/// value degrades to `None` rather than failing the row.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimeRecord {
    #[serde(default = "Uuid::new_v4")]
    pub id: Uuid,
    #[serde(default, deserialize_with = "de_record_date")]
    pub record_date: Option<NaiveDate>,
    #[serde(
        default,
        alias = "price_model_type",
        deserialize_with = "de_price_model",
        serialize_with = "ser_price_model"
    )]
    pub price_model: PriceModel,
    #[serde(default, alias = "fee_record")]
    pub fee: Option<f64>,
    #[serde(default, alias = "cost_record")]
    pub cost: Option<f64>,
    #[serde(default, alias = "profit_record")]
    pub profit: Option<f64>,
    #[serde(default, alias = "project_name", skip_serializing_if = "Option::is_none")]
    pub project: Option<String>,
    #[serde(default, alias = "customer_name", skip_serializing_if = "Option::is_none")]
    pub customer: Option<String>,
    #[serde(default, alias = "person_name", skip_serializing_if = "Option::is_none")]
    pub person: Option<String>,
}

impl TimeRecord {
    pub fn new(record_date: Option<NaiveDate>, price_model: PriceModel) -> Self {
        Self {
            id: Uuid::new_v4(),
            record_date,
            price_model,
            fee: None,
            cost: None,
            profit: None,
            project: None,
            customer: None,
            person: None,
        }
    }

    pub fn with_amounts(mut self, fee: f64, cost: f64, profit: f64) -> Self {
        self.fee = Some(fee);
        self.cost = Some(cost);
        self.profit = Some(profit);
        self
    }

    pub fn with_project(mut self, name: impl Into<String>) -> Self {
        self.project = Some(name.into());
        self
    }

    pub fn with_customer(mut self, name: impl Into<String>) -> Self {
        self.customer = Some(name.into());
        self
    }

    pub fn with_person(mut self, name: impl Into<String>) -> Self {
        self.person = Some(name.into());
        self
    }
}

/// Pricing model behind a billed record, normalized from the free-text
/// `price_model_type` column at the ingestion boundary. Anything that is not
/// one of the two recognized models collapses to `Other`, which still counts
/// toward total income but toward neither fee bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PriceModel {
    HourlyRate,
    FixedPrice,
    #[default]
    Other,
}

impl PriceModel {
    /// Case-insensitive normalization of the upstream category value.
    pub fn from_label(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.eq_ignore_ascii_case("hourly_rate") {
            PriceModel::HourlyRate
        } else if trimmed.eq_ignore_ascii_case("fixed_price") {
            PriceModel::FixedPrice
        } else {
            PriceModel::Other
        }
    }

    /// Canonical wire token, mirroring the upstream column values.
    pub fn as_token(&self) -> &'static str {
        match self {
            PriceModel::HourlyRate => "hourly_rate",
            PriceModel::FixedPrice => "fixed_price",
            PriceModel::Other => "other",
        }
    }

    /// Display name used by entity breakdowns.
    pub fn label(&self) -> &'static str {
        match self {
            PriceModel::HourlyRate => "Hourly Rate",
            PriceModel::FixedPrice => "Fixed Price",
            PriceModel::Other => "No Price Model",
        }
    }
}

fn de_record_date<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    Ok(raw.as_deref().and_then(parse_record_date))
}

fn de_price_model<'de, D>(deserializer: D) -> Result<PriceModel, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    Ok(raw.as_deref().map(PriceModel::from_label).unwrap_or_default())
}

fn ser_price_model<S>(model: &PriceModel, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(model.as_token())
}
