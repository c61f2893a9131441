use sea_orm::entity::prelude::*;

use domain::PlacementExecutiveRegion;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "placement_executive_regions")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub placement_executive_id: i32,
    pub region: String,
    pub state: Option<String>,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
    pub deleted_at: Option<DateTimeUtc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for PlacementExecutiveRegion {
    fn from(model: Model) -> Self {
        PlacementExecutiveRegion {
            id: model.id,
            placement_executive_id: model.placement_executive_id,
            region: model.region,
            state: model.state,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
