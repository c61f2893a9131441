use sea_orm::entity::prelude::*;

use domain::FacilityAgreement;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "facility_agreements")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub facility_id: i32,
    pub agreement_type: String,
    pub start_date: Date,
    pub end_date: Option<Date>,
    pub document_url: Option<String>,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
    pub deleted_at: Option<DateTimeUtc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for FacilityAgreement {
    fn from(model: Model) -> Self {
        FacilityAgreement {
            id: model.id,
            facility_id: model.facility_id,
            agreement_type: model.agreement_type,
            start_date: model.start_date,
            end_date: model.end_date,
            document_url: model.document_url,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
