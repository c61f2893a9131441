use sea_orm::entity::prelude::*;

use domain::FacilityBranch;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "facility_branches")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub facility_id: i32,
    pub branch_name: Option<String>,
    pub address: Option<String>,
    pub city: String,
    pub state: Option<String>,
    pub postcode: Option<String>,
    pub phone: Option<String>,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
    pub deleted_at: Option<DateTimeUtc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for FacilityBranch {
    fn from(model: Model) -> Self {
        FacilityBranch {
            id: model.id,
            facility_id: model.facility_id,
            branch_name: model.branch_name,
            address: model.address,
            city: model.city,
            state: model.state,
            postcode: model.postcode,
            phone: model.phone,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
