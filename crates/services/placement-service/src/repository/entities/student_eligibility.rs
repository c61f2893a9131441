use sea_orm::entity::prelude::*;

use domain::StudentEligibility;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "student_eligibility")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub student_id: i32,
    pub criterion: String,
    pub is_eligible: bool,
    pub assessed_on: Option<Date>,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
    pub deleted_at: Option<DateTimeUtc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for StudentEligibility {
    fn from(model: Model) -> Self {
        StudentEligibility {
            id: model.id,
            student_id: model.student_id,
            criterion: model.criterion,
            is_eligible: model.is_eligible,
            assessed_on: model.assessed_on,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
