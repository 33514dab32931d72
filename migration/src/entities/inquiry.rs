//! Inquiry entity: one row per submitted lead-capture form

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "inquiries")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub name: String,
    pub phone: String,
    pub postcode: String,
    pub email: Option<String>,
    pub selected_model: Option<String>,
    /// Referral code carried over from the landing page URL
    #[sea_orm(column_name = "ref")]
    pub ref_code: Option<String>,
    /// Energy-performance-certificate code
    pub epc: Option<String>,
    pub source: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub notes: Option<String>,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
