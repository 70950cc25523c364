mod common;

use crate::common::{create_test_pool, sample_address, sample_user};

use bcard_db::{DbError, UserRepository};

use bcard_core::{Image, PersonName};
use uuid::Uuid;

#[tokio::test]
async fn create_and_find_round_trip() {
    let repo = UserRepository::new(create_test_pool().await);
    let user = sample_user("noa@example.com");

    repo.create(&user).await.unwrap();
    let found = repo.find_by_id(user.id).await.unwrap().unwrap();

    assert_eq!(found.email, "noa@example.com");
    assert_eq!(found.name.first, "Noa");
    assert!(!found.is_admin);
}

#[tokio::test]
async fn duplicate_email_is_reported_as_duplicate() {
    let repo = UserRepository::new(create_test_pool().await);
    let first = sample_user("noa@example.com");
    let mut second = sample_user("noa@example.com");
    second.id = Uuid::new_v4();

    repo.create(&first).await.unwrap();
    let result = repo.create(&second).await;

    assert!(matches!(result, Err(DbError::Duplicate { field: "email", .. })));
}

#[tokio::test]
async fn find_by_email_misses_unknown_address() {
    let repo = UserRepository::new(create_test_pool().await);

    let found = repo.find_by_email("nobody@example.com").await.unwrap();

    assert!(found.is_none());
}

#[tokio::test]
async fn update_profile_changes_profile_but_not_email() {
    let repo = UserRepository::new(create_test_pool().await);
    let user = sample_user("noa@example.com");
    repo.create(&user).await.unwrap();

    let updated = repo
        .update_profile(
            user.id,
            &PersonName {
                first: "Noam".to_string(),
                middle: Some("B".to_string()),
                last: "Levi".to_string(),
            },
            "052-7654321",
            &Image {
                url: "https://example.com/a.png".to_string(),
                alt: "me".to_string(),
            },
            &sample_address(),
        )
        .await
        .unwrap()
        .unwrap();

    assert_eq!(updated.name.first, "Noam");
    assert_eq!(updated.phone, "052-7654321");
    assert_eq!(updated.email, "noa@example.com");
}

#[tokio::test]
async fn update_profile_of_missing_user_returns_none() {
    let repo = UserRepository::new(create_test_pool().await);
    let user = sample_user("noa@example.com");

    let updated = repo
        .update_profile(user.id, &user.name, &user.phone, &user.image, &user.address)
        .await
        .unwrap();

    assert!(updated.is_none());
}

#[tokio::test]
async fn set_business_persists_explicit_value() {
    let repo = UserRepository::new(create_test_pool().await);
    let user = sample_user("noa@example.com");
    repo.create(&user).await.unwrap();

    let updated = repo.set_business(user.id, true).await.unwrap().unwrap();
    assert!(updated.is_business);

    // Setting the same value again is not a toggle
    let updated = repo.set_business(user.id, true).await.unwrap().unwrap();
    assert!(updated.is_business);
}

#[tokio::test]
async fn delete_is_idempotent_about_absence() {
    let repo = UserRepository::new(create_test_pool().await);
    let user = sample_user("noa@example.com");
    repo.create(&user).await.unwrap();

    assert!(repo.delete(user.id).await.unwrap());
    assert!(!repo.delete(user.id).await.unwrap());
}
