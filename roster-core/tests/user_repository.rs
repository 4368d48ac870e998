//! Validates the CRUD contract of the SQLite users repository.

use anyhow::Result;
use roster_core::{RosterError, SqliteUsersRepository, UserChanges, UserDraft, UsersRepository};
use sqlx::SqlitePool;
use uuid::Uuid;

fn draft(name: &str, image: Option<&str>) -> UserDraft {
    UserDraft {
        name: name.to_string(),
        email: format!("{}@example.com", name.to_lowercase()),
        phone: "555-0100".to_string(),
        image: image.map(str::to_string),
    }
}

fn changes_from(draft: &UserDraft) -> UserChanges {
    UserChanges {
        name: draft.name.clone(),
        email: draft.email.clone(),
        phone: draft.phone.clone(),
        image: draft.image.clone(),
    }
}

#[sqlx::test(migrator = "roster_core::MIGRATOR")]
async fn create_then_list_includes_new_record(pool: SqlitePool) -> Result<()> {
    let repo = SqliteUsersRepository::new(pool);

    let draft = draft("Alice", Some("image_1_alice.png"));
    let id = repo.create_user(&draft).await?;

    let users = repo.get_all_users().await?;
    assert_eq!(users.len(), 1);

    let user = &users[0];
    assert_eq!(user.id, id);
    assert_eq!(user.name, draft.name);
    assert_eq!(user.email, draft.email);
    assert_eq!(user.phone, draft.phone);
    assert_eq!(user.image.as_deref(), Some("image_1_alice.png"));
    assert_eq!(user.created_at, user.updated_at);
    Ok(())
}

#[sqlx::test(migrator = "roster_core::MIGRATOR")]
async fn list_preserves_insertion_order(pool: SqlitePool) -> Result<()> {
    let repo = SqliteUsersRepository::new(pool);

    let first = repo.create_user(&draft("Alice", None)).await?;
    let second = repo.create_user(&draft("Bob", None)).await?;
    let third = repo.create_user(&draft("Carol", None)).await?;

    let ids: Vec<Uuid> = repo.get_all_users().await?.iter().map(|u| u.id).collect();
    assert_eq!(ids, vec![first, second, third]);
    Ok(())
}

#[sqlx::test(migrator = "roster_core::MIGRATOR")]
async fn get_user_by_id_absent_is_none(pool: SqlitePool) -> Result<()> {
    let repo = SqliteUsersRepository::new(pool);

    assert!(repo.get_user_by_id(Uuid::new_v4()).await?.is_none());
    Ok(())
}

#[sqlx::test(migrator = "roster_core::MIGRATOR")]
async fn update_applies_fields_and_bumps_updated_at(pool: SqlitePool) -> Result<()> {
    let repo = SqliteUsersRepository::new(pool);

    let id = repo.create_user(&draft("Alice", Some("image_1_a.png"))).await?;
    let created = repo.get_user_by_id(id).await?.expect("created user");

    let changes = UserChanges {
        name: "Alice B".to_string(),
        email: "alice.b@example.com".to_string(),
        phone: "555-0199".to_string(),
        image: Some("image_2_b.png".to_string()),
    };
    let updated = repo.update_user(id, &changes).await?.expect("updated user");

    assert_eq!(updated.id, id);
    assert_eq!(updated.name, changes.name);
    assert_eq!(updated.email, changes.email);
    assert_eq!(updated.phone, changes.phone);
    assert_eq!(updated.image.as_deref(), Some("image_2_b.png"));
    assert_eq!(updated.created_at, created.created_at);
    assert!(updated.updated_at >= created.updated_at);
    Ok(())
}

#[sqlx::test(migrator = "roster_core::MIGRATOR")]
async fn update_retains_image_when_unchanged(pool: SqlitePool) -> Result<()> {
    let repo = SqliteUsersRepository::new(pool);

    let draft = draft("Alice", Some("image_1_a.png"));
    let id = repo.create_user(&draft).await?;

    let mut changes = changes_from(&draft);
    changes.phone = "555-0142".to_string();
    let updated = repo.update_user(id, &changes).await?.expect("updated user");

    assert_eq!(updated.image.as_deref(), Some("image_1_a.png"));
    Ok(())
}

#[sqlx::test(migrator = "roster_core::MIGRATOR")]
async fn update_absent_id_is_none(pool: SqlitePool) -> Result<()> {
    let repo = SqliteUsersRepository::new(pool);

    let changes = changes_from(&draft("Ghost", None));
    assert!(repo.update_user(Uuid::new_v4(), &changes).await?.is_none());
    Ok(())
}

#[sqlx::test(migrator = "roster_core::MIGRATOR")]
async fn delete_returns_row_and_removes_it(pool: SqlitePool) -> Result<()> {
    let repo = SqliteUsersRepository::new(pool);

    let id = repo.create_user(&draft("Alice", Some("image_1_a.png"))).await?;

    let deleted = repo.delete_user(id).await?.expect("deleted user");
    assert_eq!(deleted.id, id);
    assert_eq!(deleted.image.as_deref(), Some("image_1_a.png"));

    assert!(repo.get_user_by_id(id).await?.is_none());
    assert!(repo.get_all_users().await?.is_empty());
    Ok(())
}

#[sqlx::test(migrator = "roster_core::MIGRATOR")]
async fn delete_absent_id_leaves_other_rows_intact(pool: SqlitePool) -> Result<()> {
    let repo = SqliteUsersRepository::new(pool);

    let kept = repo.create_user(&draft("Alice", None)).await?;

    assert!(repo.delete_user(Uuid::new_v4()).await?.is_none());

    let users = repo.get_all_users().await?;
    assert_eq!(users.len(), 1);
    assert_eq!(users[0].id, kept);
    Ok(())
}

#[sqlx::test(migrator = "roster_core::MIGRATOR")]
async fn create_rejects_missing_required_fields(pool: SqlitePool) -> Result<()> {
    let repo = SqliteUsersRepository::new(pool);

    let mut invalid = draft("Alice", None);
    invalid.email = "  ".to_string();

    let err = repo.create_user(&invalid).await.unwrap_err();
    assert!(matches!(err, RosterError::Validation(_)));
    assert!(repo.get_all_users().await?.is_empty());
    Ok(())
}
