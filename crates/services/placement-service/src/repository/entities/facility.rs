//! Facility database entity for SeaORM.

use sea_orm::entity::prelude::*;

use domain::Facility;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "facilities")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub organization_name: String,
    pub contact_person: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub postcode: Option<String>,
    pub website: Option<String>,
    pub registration_date: Option<Date>,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
    pub deleted_at: Option<DateTimeUtc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Facility {
    fn from(model: Model) -> Self {
        Facility {
            id: model.id,
            organization_name: model.organization_name,
            contact_person: model.contact_person,
            email: model.email,
            phone: model.phone,
            address: model.address,
            city: model.city,
            state: model.state,
            postcode: model.postcode,
            website: model.website,
            registration_date: model.registration_date,
            created_at: model.created_at,
            updated_at: model.updated_at,
            deleted_at: model.deleted_at,
        }
    }
}
