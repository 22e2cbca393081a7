use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "courses")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub course_name: String,
    #[sea_orm(column_type = "Double")]
    pub original_price: f64,
    #[sea_orm(column_type = "Double")]
    pub discounted_price: f64,
    pub course_category: String,
    pub description: String,
    /// JSON array of strings
    pub target_audience: String,
    /// JSON array of strings
    pub course_curriculum: String,
    pub duration: String,
    pub course_level: String,
    pub image_url: Option<String>,
    pub certification: String,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
