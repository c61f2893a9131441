use sea_orm::entity::prelude::*;

use domain::StudentAddress;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "student_addresses")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub student_id: i32,
    pub address_type: String,
    pub street: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub postcode: Option<String>,
    pub country: Option<String>,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
    pub deleted_at: Option<DateTimeUtc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for StudentAddress {
    fn from(model: Model) -> Self {
        StudentAddress {
            id: model.id,
            student_id: model.student_id,
            address_type: model.address_type,
            street: model.street,
            city: model.city,
            state: model.state,
            postcode: model.postcode,
            country: model.country,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
