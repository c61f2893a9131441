use sea_orm::entity::prelude::*;

use domain::StudentVisa;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "student_visas")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub student_id: i32,
    pub visa_type: String,
    pub visa_number: Option<String>,
    pub expiry_date: Option<Date>,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
    pub deleted_at: Option<DateTimeUtc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for StudentVisa {
    fn from(model: Model) -> Self {
        StudentVisa {
            id: model.id,
            student_id: model.student_id,
            visa_type: model.visa_type,
            visa_number: model.visa_number,
            expiry_date: model.expiry_date,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
