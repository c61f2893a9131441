use sea_orm::entity::prelude::*;

use domain::StudentJobStatus;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "student_job_statuses")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub student_id: i32,
    pub status: String,
    pub employer: Option<String>,
    pub position: Option<String>,
    pub effective_date: Option<Date>,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
    pub deleted_at: Option<DateTimeUtc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for StudentJobStatus {
    fn from(model: Model) -> Self {
        StudentJobStatus {
            id: model.id,
            student_id: model.student_id,
            status: model.status,
            employer: model.employer,
            position: model.position,
            effective_date: model.effective_date,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
