use sea_orm::entity::prelude::*;

use domain::FacilityAttribute;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "facility_attributes")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub facility_id: i32,
    pub name: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub value: Option<String>,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
    pub deleted_at: Option<DateTimeUtc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for FacilityAttribute {
    fn from(model: Model) -> Self {
        FacilityAttribute {
            id: model.id,
            facility_id: model.facility_id,
            name: model.name,
            value: model.value,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
