//! Aggregate create/read/update/delete against a migrated SQLite database.

mod support;

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue::Set, ColumnTrait, EntityTrait, QueryFilter};

use common::{AppError, PaginationParams};
use domain::{
    AccountStatus, CreateFacility, CreatePlacementExecutive, CreateStudent, LoginCredentials,
    Password, UpdateFacility, UpdateStudent,
};
use placement_service_lib::repository::entities::{
    account, facility, facility_agreement, facility_branch, placement_executive,
    placement_executive_region, role, student, student_address,
};

use support::{
    acme_care, count, dana, date, facility_named, facility_with_agreement, sam, setup,
};

#[tokio::test]
async fn test_acme_care_scenario() {
    let (db, services) = setup().await;

    let created = services.facilities.create(acme_care()).await.unwrap();

    assert_eq!(created.facility.organization_name, "Acme Care");
    assert_eq!(created.branches.len(), 1);
    assert_eq!(created.branches[0].city, "Springfield");
    assert_eq!(created.branches[0].facility_id, created.facility.id);

    let linked = created.account.expect("linked account");
    assert_eq!(linked.user_id, "acme@x.com");
    assert_eq!(linked.role, "Facility");
    assert_eq!(linked.status, AccountStatus::Active);

    let stored = account::Entity::find()
        .filter(account::Column::LoginId.eq("acme@x.com"))
        .one(db.connection())
        .await
        .unwrap()
        .expect("stored account");
    assert_eq!(stored.facility_id, Some(created.facility.id));
    assert_eq!(stored.placement_executive_id, None);
    assert_ne!(stored.password_hash, "Secret123");
    assert!(stored.password_hash.starts_with("$argon2id$"));
    assert!(Password::from_hash(stored.password_hash).verify("Secret123"));
}

#[tokio::test]
async fn test_duplicate_login_is_conflict_and_writes_nothing() {
    let (db, services) = setup().await;
    services.facilities.create(acme_care()).await.unwrap();

    let err = services
        .facilities
        .create(CreateFacility {
            organization_name: "Other Care".to_string(),
            ..acme_care()
        })
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::Conflict(_)));
    assert_eq!(err.to_string(), "userID 'acme@x.com' already exists");
    assert_eq!(count::<facility::Entity>(db.connection()).await, 1);
    assert_eq!(count::<facility_branch::Entity>(db.connection()).await, 1);
    assert_eq!(count::<account::Entity>(db.connection()).await, 1);
}

#[tokio::test]
async fn test_login_id_differing_only_in_case_is_conflict() {
    let (db, services) = setup().await;
    services.facilities.create(acme_care()).await.unwrap();

    let err = services
        .facilities
        .create(CreateFacility {
            login: Some(LoginCredentials::new("ACME@X.com", "Secret123")),
            ..facility_named("Other Care")
        })
        .await
        .unwrap_err();

    assert_eq!(err.to_string(), "userID 'acme@x.com' already exists");
    assert_eq!(count::<facility::Entity>(db.connection()).await, 1);
}

#[tokio::test]
async fn test_login_ids_are_unique_across_aggregate_types() {
    let (db, services) = setup().await;
    services.facilities.create(acme_care()).await.unwrap();

    let err = services
        .students
        .create(CreateStudent {
            login: Some(LoginCredentials::new("acme@x.com", "Secret123")),
            ..sam()
        })
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::Conflict(_)));
    assert_eq!(count::<student::Entity>(db.connection()).await, 0);
    assert_eq!(count::<student_address::Entity>(db.connection()).await, 0);
}

#[tokio::test]
async fn test_concurrent_creations_yield_one_conflict() {
    let (db, services) = setup().await;

    let (first, second) = tokio::join!(
        services.facilities.create(acme_care()),
        services.facilities.create(acme_care()),
    );

    let successes = [first.is_ok(), second.is_ok()]
        .iter()
        .filter(|ok| **ok)
        .count();
    assert_eq!(successes, 1);

    let failure = match (first, second) {
        (Err(e), Ok(_)) | (Ok(_), Err(e)) => e,
        _ => unreachable!("exactly one creation succeeds"),
    };
    assert!(matches!(failure, AppError::Conflict(_)));
    assert_eq!(count::<facility::Entity>(db.connection()).await, 1);
    assert_eq!(count::<account::Entity>(db.connection()).await, 1);
}

#[tokio::test]
async fn test_failure_after_root_insert_rolls_back_everything() {
    let (db, services) = setup().await;

    // Without a live Facility role the account insert fails after the root exists
    let facility_role = role::Entity::find()
        .filter(role::Column::Name.eq("Facility"))
        .one(db.connection())
        .await
        .unwrap()
        .expect("seeded role");
    let mut retired: role::ActiveModel = facility_role.into();
    retired.deleted_at = Set(Some(Utc::now()));
    retired.update(db.connection()).await.unwrap();

    let err = services
        .facilities
        .create(facility_with_agreement())
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::NotFound(_)));
    assert_eq!(err.to_string(), "Role 'Facility' not found");
    assert_eq!(count::<facility::Entity>(db.connection()).await, 0);
    assert_eq!(count::<facility_branch::Entity>(db.connection()).await, 0);
    assert_eq!(count::<facility_agreement::Entity>(db.connection()).await, 0);
    assert_eq!(count::<account::Entity>(db.connection()).await, 0);
}

#[tokio::test]
async fn test_missing_joining_date_writes_nothing() {
    let (db, services) = setup().await;

    let err = services
        .placement_executives
        .create(CreatePlacementExecutive {
            joining_date: None,
            ..dana()
        })
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::Validation(ref msg) if msg == "joining_date is required"));
    assert_eq!(count::<placement_executive::Entity>(db.connection()).await, 0);
    assert_eq!(count::<placement_executive_region::Entity>(db.connection()).await, 0);
    assert_eq!(count::<account::Entity>(db.connection()).await, 0);
}

#[tokio::test]
async fn test_placement_executive_round_trip() {
    let (_db, services) = setup().await;

    let created = services.placement_executives.create(dana()).await.unwrap();
    let fetched = services
        .placement_executives
        .get(created.placement_executive.id)
        .await
        .unwrap();

    assert_eq!(fetched.placement_executive.first_name, "Dana");
    assert_eq!(fetched.placement_executive.joining_date, date(2024, 2, 1));
    assert_eq!(fetched.regions.len(), 1);
    assert_eq!(fetched.regions[0].region, "North");
    assert_eq!(fetched.account.map(|a| a.role).as_deref(), Some("PlacementExecutive"));
}

#[tokio::test]
async fn test_student_round_trip() {
    let (_db, services) = setup().await;

    let created = services.students.create(sam()).await.unwrap();
    let fetched = services.students.get(created.student.id).await.unwrap();

    assert_eq!(fetched.student.first_name, "Sam");
    assert_eq!(fetched.student.last_name.as_deref(), Some("Lee"));
    assert_eq!(fetched.student.date_of_birth, Some(date(2001, 5, 17)));
    assert_eq!(fetched.student.course.as_deref(), Some("Nursing"));
    assert_eq!(fetched.addresses.len(), 2);
    assert_eq!(fetched.addresses[0].address_type, "home");
    assert_eq!(fetched.addresses[1].address_type, "term");
    assert_eq!(fetched.visas.len(), 1);
    assert_eq!(fetched.eligibility.len(), 1);
    assert!(fetched.eligibility[0].is_eligible);
    assert_eq!(fetched.job_statuses.len(), 1);

    let linked = fetched.account.expect("linked account");
    assert_eq!(linked.user_id, "sam.lee");
    assert_eq!(linked.role, "Student");
}

#[tokio::test]
async fn test_create_without_login_provisions_no_account() {
    let (db, services) = setup().await;

    let created = services
        .students
        .create(CreateStudent {
            login: None,
            ..sam()
        })
        .await
        .unwrap();

    assert!(created.account.is_none());
    assert_eq!(count::<account::Entity>(db.connection()).await, 0);
}

#[tokio::test]
async fn test_soft_deleted_aggregate_is_hidden_but_stored() {
    let (db, services) = setup().await;
    let created = services.facilities.create(acme_care()).await.unwrap();
    let id = created.facility.id;

    services.facilities.delete(id).await.unwrap();

    assert!(matches!(
        services.facilities.get(id).await,
        Err(AppError::NotFound(_))
    ));
    let page = services
        .facilities
        .list(PaginationParams::default())
        .await
        .unwrap();
    assert!(page.data.is_empty());
    assert_eq!(page.meta.total, 0);

    let row = facility::Entity::find_by_id(id)
        .one(db.connection())
        .await
        .unwrap()
        .expect("row is still stored");
    assert!(row.deleted_at.is_some());

    let branches = facility_branch::Entity::find()
        .all(db.connection())
        .await
        .unwrap();
    assert!(branches.iter().all(|b| b.deleted_at.is_some()));

    let stored = account::Entity::find()
        .one(db.connection())
        .await
        .unwrap()
        .expect("account is still stored");
    assert!(stored.deleted_at.is_some());

    assert!(matches!(
        services.facilities.delete(id).await,
        Err(AppError::NotFound(_))
    ));
}

#[tokio::test]
async fn test_soft_deleted_login_id_stays_reserved() {
    let (_db, services) = setup().await;
    let created = services.facilities.create(acme_care()).await.unwrap();
    services.facilities.delete(created.facility.id).await.unwrap();

    let err = services.facilities.create(acme_care()).await.unwrap_err();

    assert!(matches!(err, AppError::Conflict(_)));
}

#[tokio::test]
async fn test_hard_delete_removes_every_row() {
    let (db, services) = setup().await;
    let created = services
        .facilities
        .create(facility_with_agreement())
        .await
        .unwrap();
    let id = created.facility.id;

    services.facilities.delete(id).await.unwrap();
    services.facilities.hard_delete(id).await.unwrap();

    assert_eq!(count::<facility::Entity>(db.connection()).await, 0);
    assert_eq!(count::<facility_branch::Entity>(db.connection()).await, 0);
    assert_eq!(count::<facility_agreement::Entity>(db.connection()).await, 0);
    assert_eq!(count::<account::Entity>(db.connection()).await, 0);
    assert!(matches!(
        services.facilities.hard_delete(id).await,
        Err(AppError::NotFound(_))
    ));

    // The login id is free again
    services.facilities.create(acme_care()).await.unwrap();
}

#[tokio::test]
async fn test_update_changes_root_scalars_only() {
    let (_db, services) = setup().await;
    let created = services.facilities.create(acme_care()).await.unwrap();
    let id = created.facility.id;

    let updated = services
        .facilities
        .update(
            id,
            UpdateFacility {
                city: Some(Some("Shelbyville".to_string())),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.facility.city.as_deref(), Some("Shelbyville"));
    assert_eq!(updated.facility.organization_name, "Acme Care");
    assert_eq!(updated.facility.email.as_deref(), Some("office@acme.example"));
    assert_eq!(updated.branches.len(), 1);
    assert!(updated.facility.updated_at >= created.facility.updated_at);
}

#[tokio::test]
async fn test_update_with_null_clears_optional_field() {
    let (_db, services) = setup().await;
    let created = services.facilities.create(acme_care()).await.unwrap();
    let changes = UpdateFacility {
        email: Some(None),
        phone: Some(Some("+1 555 0100".to_string())),
        ..Default::default()
    };

    let updated = services
        .facilities
        .update(created.facility.id, changes)
        .await
        .unwrap();

    assert_eq!(updated.facility.email, None);
    assert_eq!(updated.facility.phone.as_deref(), Some("+1 555 0100"));
    assert_eq!(updated.facility.city, created.facility.city);
}

#[tokio::test]
async fn test_update_rejects_invalid_or_missing() {
    let (_db, services) = setup().await;
    let created = services.students.create(sam()).await.unwrap();

    let future_birthday = UpdateStudent {
        date_of_birth: Some(Some(Utc::now().date_naive() + chrono::Duration::days(30))),
        ..Default::default()
    };
    assert!(matches!(
        services
            .students
            .update(created.student.id, future_birthday)
            .await,
        Err(AppError::Validation(_))
    ));

    let empty_name = UpdateFacility {
        organization_name: Some(String::new()),
        ..Default::default()
    };
    assert!(matches!(
        services.facilities.update(1, empty_name).await,
        Err(AppError::Validation(_))
    ));

    assert!(matches!(
        services
            .facilities
            .update(999, UpdateFacility::default())
            .await,
        Err(AppError::NotFound(_))
    ));
}

#[tokio::test]
async fn test_list_is_paginated_in_creation_order() {
    let (_db, services) = setup().await;
    for name in ["Alpha", "Bravo", "Charlie"] {
        services.facilities.create(facility_named(name)).await.unwrap();
    }

    let first = services
        .facilities
        .list(PaginationParams::new(1, 2))
        .await
        .unwrap();
    assert_eq!(first.data.len(), 2);
    assert_eq!(first.data[0].organization_name, "Alpha");
    assert_eq!(first.meta.total, 3);
    assert_eq!(first.meta.total_pages, 2);

    let second = services
        .facilities
        .list(PaginationParams::new(2, 2))
        .await
        .unwrap();
    assert_eq!(second.data.len(), 1);
    assert_eq!(second.data[0].organization_name, "Charlie");

    let beyond = services
        .facilities
        .list(PaginationParams::new(u64::MAX, 100))
        .await
        .unwrap();
    assert!(beyond.data.is_empty());
    assert_eq!(beyond.meta.total, 3);
}
