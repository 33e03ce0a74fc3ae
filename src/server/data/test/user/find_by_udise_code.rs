use super::*;

/// Tests finding a registered user by UDISE code.
///
/// Expected: Ok(Some(User)) with matching user data
#[tokio::test]
async fn finds_registered_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::create_user_with_code(db, "1234567").await?;

    let repo = UserRepository::new(db);
    let user = repo.find_by_udise_code("1234567").await?;

    let user = user.expect("registered user should be found");
    assert_eq!(user.id, created.id);
    assert_eq!(user.udise_code, "1234567");

    Ok(())
}

/// Tests querying a code nobody registered.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unregistered_code() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_user_with_code(db, "1234567").await?;

    let repo = UserRepository::new(db);

    assert!(repo.find_by_udise_code("7654321").await?.is_none());

    Ok(())
}

/// Tests that lookups compare the full code rather than a prefix.
///
/// Expected: Ok(None) for a code that only shares a prefix with a registered one
#[tokio::test]
async fn does_not_match_code_prefix() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_user_with_code(db, "12345678").await?;

    let repo = UserRepository::new(db);

    assert!(repo.find_by_udise_code("1234567").await?.is_none());

    Ok(())
}
