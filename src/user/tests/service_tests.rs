//! Service orchestration tests for profile registration.

use std::sync::Arc;

use crate::user::{
    adapters::memory::InMemoryUserRepository,
    domain::{DEFAULT_AVATAR_URL, UserId},
    services::{CreateProfileRequest, UpdateProfileRequest, UserProfileError, UserProfileService},
};
use mockable::DefaultClock;
use rstest::{fixture, rstest};

type TestService = UserProfileService<InMemoryUserRepository, DefaultClock>;

#[fixture]
fn service() -> TestService {
    UserProfileService::new(
        Arc::new(InMemoryUserRepository::new()),
        Arc::new(DefaultClock),
    )
}

fn subject() -> UserId {
    UserId::new("firebase-uid-1").expect("valid user id")
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn create_assigns_default_avatar_and_empty_name(service: TestService) {
    let created = service
        .create(&subject(), CreateProfileRequest::new("ana@example.com"))
        .await
        .expect("profile creation should succeed");

    assert_eq!(created.name(), "");
    assert_eq!(created.avatar(), DEFAULT_AVATAR_URL);
    let fetched = service.info(&subject()).await.expect("lookup should succeed");
    assert_eq!(fetched, created);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn create_twice_reports_existing_profile(service: TestService) {
    let first = service
        .create(
            &subject(),
            CreateProfileRequest::new("ana@example.com").with_name("Ana"),
        )
        .await
        .expect("first creation should succeed");

    let result = service
        .create(&subject(), CreateProfileRequest::new("other@example.com"))
        .await;

    let Err(UserProfileError::AlreadyExists(existing)) = result else {
        panic!("expected AlreadyExists, got {result:?}");
    };
    assert_eq!(*existing, first);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn create_rejects_malformed_email(service: TestService) {
    let result = service
        .create(&subject(), CreateProfileRequest::new("not-an-email"))
        .await;
    assert!(matches!(result, Err(UserProfileError::Domain(_))));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn update_ignores_blank_fields(service: TestService) {
    service
        .create(
            &subject(),
            CreateProfileRequest::new("ana@example.com")
                .with_name("Ana")
                .with_avatar("https://img.example/a.png"),
        )
        .await
        .expect("creation should succeed");

    let updated = service
        .update(
            &subject(),
            UpdateProfileRequest {
                name: Some(String::new()),
                avatar: Some("https://img.example/b.png".to_owned()),
            },
        )
        .await
        .expect("update should succeed");

    assert_eq!(updated.name(), "Ana");
    assert_eq!(updated.avatar(), "https://img.example/b.png");
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn info_for_unknown_subject_is_not_found(service: TestService) {
    let result = service.info(&subject()).await;
    assert!(matches!(result, Err(UserProfileError::NotFound(_))));
}
