//! Integration tests for the notification service.

mod helpers;

use uuid::Uuid;

use vendora_core::error::ErrorKind;
use vendora_entity::{
    NotificationKind, NotificationMetadata, NotificationPriority, NotificationStatus, UserRole,
};
use vendora_notify::CreateOverrides;

use helpers::TestApp;

#[tokio::test]
async fn test_create_substitutes_placeholders() {
    let app = TestApp::new();
    let user = Uuid::new_v4();

    app.service
        .create_notification(
            user,
            NotificationKind::OrderPlaced,
            CreateOverrides {
                metadata: NotificationMetadata {
                    order_id: Some("ORD-42".to_string()),
                    amount: Some(1_234_567.0),
                    ..Default::default()
                },
                ..Default::default()
            },
        )
        .await
        .unwrap();

    let list = app
        .service
        .get_user_notifications(user, None, false)
        .await
        .unwrap();
    assert_eq!(list.len(), 1);
    let n = &list[0];
    assert_eq!(n.title, "Order Placed");
    assert!(n.message.contains("ORD-42"));
    assert!(n.message.contains("1,234,567"));
    assert!(!n.message.contains("{orderId}"));
    assert_eq!(n.priority, NotificationPriority::Medium);
    assert_eq!(n.status, NotificationStatus::Unread);
    assert!(n.read_at.is_none());
}

#[tokio::test]
async fn test_missing_metadata_renders_empty_string() {
    let app = TestApp::new();
    let user = Uuid::new_v4();

    app.service
        .create_notification(user, NotificationKind::OrderShipped, CreateOverrides::default())
        .await
        .unwrap();

    let list = app
        .service
        .get_user_notifications(user, None, false)
        .await
        .unwrap();
    assert_eq!(list[0].message, "Order  is on its way.");
}

#[tokio::test]
async fn test_overrides_replace_template_outright() {
    let app = TestApp::new();
    let user = Uuid::new_v4();

    app.service
        .create_notification(
            user,
            NotificationKind::Welcome,
            CreateOverrides {
                title: Some("Custom title".to_string()),
                message: Some("Custom {userName} stays literal".to_string()),
                priority: Some(NotificationPriority::Urgent),
                recipient_role: Some(UserRole::Customer),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    let list = app
        .service
        .get_user_notifications(user, None, false)
        .await
        .unwrap();
    let n = &list[0];
    assert_eq!(n.title, "Custom title");
    // Override text is not run through substitution.
    assert_eq!(n.message, "Custom {userName} stays literal");
    assert_eq!(n.priority, NotificationPriority::Urgent);
    assert_eq!(n.recipient_role, Some(UserRole::Customer));
}

#[tokio::test]
async fn test_nil_recipient_rejected() {
    let app = TestApp::new();

    let err = app
        .service
        .create_notification(Uuid::nil(), NotificationKind::Welcome, CreateOverrides::default())
        .await
        .unwrap_err();

    assert_eq!(err.kind, ErrorKind::Validation);
    assert!(app.store.is_empty());
}

#[tokio::test]
async fn test_mark_as_read_is_monotonic() {
    let app = TestApp::new();
    let user = Uuid::new_v4();
    let id = app
        .service
        .create_notification(user, NotificationKind::Welcome, CreateOverrides::default())
        .await
        .unwrap();

    app.service.mark_as_read(id).await.unwrap();

    let list = app
        .service
        .get_user_notifications(user, None, false)
        .await
        .unwrap();
    let n = &list[0];
    assert_eq!(n.status, NotificationStatus::Read);
    assert!(n.read_at.unwrap() >= n.created_at);

    // A second call is harmless.
    app.service.mark_as_read(id).await.unwrap();
    let list = app
        .service
        .get_user_notifications(user, None, false)
        .await
        .unwrap();
    assert_eq!(list[0].status, NotificationStatus::Read);
}

#[tokio::test]
async fn test_unread_count_matches_unread_query() {
    let app = TestApp::new();
    let user = Uuid::new_v4();
    let mut ids = Vec::new();
    for _ in 0..4 {
        ids.push(
            app.service
                .create_notification(user, NotificationKind::Welcome, CreateOverrides::default())
                .await
                .unwrap(),
        );
    }
    app.service.mark_as_read(ids[0]).await.unwrap();

    let count = app.service.get_unread_count(user).await.unwrap();
    let unread = app
        .service
        .get_user_notifications(user, Some(usize::MAX), true)
        .await
        .unwrap();
    assert_eq!(count, unread.len() as u64);
    assert_eq!(count, 3);
}

#[tokio::test]
async fn test_mark_all_as_read() {
    let app = TestApp::new();
    let user = Uuid::new_v4();
    for _ in 0..3 {
        app.service
            .create_notification(user, NotificationKind::Welcome, CreateOverrides::default())
            .await
            .unwrap();
    }

    app.service.mark_all_as_read(user).await.unwrap();

    assert_eq!(app.service.get_unread_count(user).await.unwrap(), 0);

    // No unread left: a second call is a no-op.
    app.service.mark_all_as_read(user).await.unwrap();
}

#[tokio::test]
async fn test_delete_notification() {
    let app = TestApp::new();
    let user = Uuid::new_v4();
    let id = app
        .service
        .create_notification(user, NotificationKind::Welcome, CreateOverrides::default())
        .await
        .unwrap();

    app.service.delete_notification(id).await.unwrap();

    assert!(app.store.is_empty());
}

#[tokio::test]
async fn test_recipient_isolation() {
    let app = TestApp::new();
    let alice = Uuid::new_v4();
    let bob = Uuid::new_v4();
    app.service
        .create_notification(alice, NotificationKind::Welcome, CreateOverrides::default())
        .await
        .unwrap();
    app.service
        .create_notification(bob, NotificationKind::Welcome, CreateOverrides::default())
        .await
        .unwrap();

    let list = app
        .service
        .get_user_notifications(alice, None, false)
        .await
        .unwrap();
    assert!(list.iter().all(|n| n.recipient_id == alice));
    assert_eq!(list.len(), 1);
}

#[tokio::test]
async fn test_bulk_fan_out_cardinality() {
    let app = TestApp::new();
    let recipients = [Uuid::new_v4(), Uuid::new_v4(), Uuid::new_v4()];

    app.service
        .create_bulk_notifications(
            &recipients,
            NotificationKind::SystemMaintenance,
            CreateOverrides::default(),
        )
        .await
        .unwrap();

    assert_eq!(app.store.len(), 3);
    for recipient in recipients {
        let list = app
            .service
            .get_user_notifications(recipient, None, false)
            .await
            .unwrap();
        assert_eq!(list.len(), 1);
        assert_eq!(list[0].status, NotificationStatus::Unread);
    }
}

#[tokio::test]
async fn test_bulk_partial_failure_reports_and_keeps_successes() {
    let app = TestApp::new();
    let good = Uuid::new_v4();
    // A nil recipient fails validation inside the fan-out.
    let recipients = [good, Uuid::nil()];

    let err = app
        .service
        .create_bulk_notifications(&recipients, NotificationKind::Welcome, CreateOverrides::default())
        .await
        .unwrap_err();

    assert_eq!(err.kind, ErrorKind::Storage);
    // The successful write stands.
    assert_eq!(app.store.len(), 1);
}

#[tokio::test]
async fn test_role_broadcast_reaches_current_members_only() {
    let app = TestApp::new();
    let admin = app.add_user("Ada", UserRole::Admin);
    let super_admin = app.add_user("Sam", UserRole::SuperAdmin);
    let customer = app.add_user("Cleo", UserRole::Customer);

    app.service
        .create_role_notification(
            &UserRole::ADMINS,
            NotificationKind::NewVendorApplication,
            CreateOverrides::default(),
        )
        .await
        .unwrap();

    assert_eq!(app.store.len(), 2);
    for id in [admin, super_admin] {
        let list = app
            .service
            .get_user_notifications(id, None, false)
            .await
            .unwrap();
        assert_eq!(list.len(), 1);
        assert_eq!(list[0].kind, NotificationKind::NewVendorApplication);
    }
    let none = app
        .service
        .get_user_notifications(customer, None, false)
        .await
        .unwrap();
    assert!(none.is_empty());
}

#[tokio::test]
async fn test_role_broadcast_with_no_members_is_noop() {
    let app = TestApp::new();
    app.add_user("Cleo", UserRole::Customer);

    app.service
        .create_role_notification(
            &[UserRole::Support],
            NotificationKind::SystemMaintenance,
            CreateOverrides::default(),
        )
        .await
        .unwrap();

    assert!(app.store.is_empty());
}

#[tokio::test]
async fn test_list_is_newest_first_and_capped() {
    let app = TestApp::new();
    let user = Uuid::new_v4();
    for _ in 0..5 {
        app.service
            .create_notification(user, NotificationKind::Welcome, CreateOverrides::default())
            .await
            .unwrap();
    }

    let list = app
        .service
        .get_user_notifications(user, Some(3), false)
        .await
        .unwrap();
    assert_eq!(list.len(), 3);
    for pair in list.windows(2) {
        assert!(pair[0].created_at >= pair[1].created_at);
    }
}
