use sea_orm::entity::prelude::*;

use crate::models::department::Department;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    /// UUID v4, assigned at creation.
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,

    #[sea_orm(unique)]
    pub username: String,

    pub phone: String,

    pub department: Department,

    /// Lowercased. NULL rows never collide on the unique index.
    #[sea_orm(unique)]
    pub email: Option<String>,

    /// bcrypt digest
    pub password_hash: String,

    pub created_at: String,

    pub updated_at: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
