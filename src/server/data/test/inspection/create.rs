use super::*;

fn document(rooms: Vec<Room>) -> ValidInspection {
    ValidInspection {
        school_name: "Government Primary School".to_string(),
        board_file: Some("https://blobs.test/inspections/board.pdf".to_string()),
        state: "Bihar".to_string(),
        district: "Patna".to_string(),
        block: "Phulwari".to_string(),
        udise_code: "1234567".to_string(),
        rooms,
    }
}

/// Tests inserting an inspection with rooms.
///
/// Verifies the returned record carries a store-assigned id, timestamps and the
/// rooms exactly as submitted.
///
/// Expected: Ok(Inspection) matching the document
#[tokio::test]
async fn creates_inspection_with_rooms() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::SchoolInspection)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let mut room = Room::new();
    room.push(Surface::Roof, "https://blobs.test/inspections/roof-1.jpg".to_string());
    room.push(Surface::Roof, "https://blobs.test/inspections/roof-2.jpg".to_string());

    let repo = InspectionRepository::new(db);
    let inspection = repo.create(document(vec![room.clone(), Room::new()])).await?;

    assert!(inspection.id > 0);
    assert_eq!(inspection.created_at, inspection.updated_at);
    assert_eq!(inspection.school_name, "Government Primary School");
    assert_eq!(
        inspection.board_file.as_deref(),
        Some("https://blobs.test/inspections/board.pdf")
    );
    assert_eq!(inspection.rooms, vec![room, Room::new()]);

    Ok(())
}

/// Tests that stored rooms keep an entry for every surface.
///
/// Expected: JSON column holds one object per room with all fifteen surface keys
#[tokio::test]
async fn stores_every_surface_for_each_room() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::SchoolInspection)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let mut room = Room::new();
    room.push(
        Surface::InteriorFloor,
        "https://blobs.test/inspections/floor.jpg".to_string(),
    );

    let repo = InspectionRepository::new(db);
    let inspection = repo.create(document(vec![room])).await?;

    let stored = entity::prelude::SchoolInspection::find_by_id(inspection.id)
        .one(db)
        .await?
        .expect("inspection should be stored");

    let rooms = stored.rooms.as_array().expect("rooms should be a JSON array");
    assert_eq!(rooms.len(), 1);
    let surfaces = rooms[0].as_object().expect("room should be a JSON object");
    assert_eq!(surfaces.len(), Surface::ALL.len());
    assert_eq!(
        surfaces["interiorFloor"],
        serde_json::json!(["https://blobs.test/inspections/floor.jpg"])
    );
    assert_eq!(surfaces["roof"], serde_json::json!([]));

    Ok(())
}

/// Tests inserting an inspection without a board document.
///
/// Expected: Ok(Inspection) with a null board file
#[tokio::test]
async fn stores_missing_board_file_as_null() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::SchoolInspection)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let mut document = document(Vec::new());
    document.board_file = None;

    let repo = InspectionRepository::new(db);
    let inspection = repo.create(document).await?;

    let stored = entity::prelude::SchoolInspection::find_by_id(inspection.id)
        .one(db)
        .await?
        .expect("inspection should be stored");

    assert!(stored.board_file.is_none());
    assert_eq!(stored.rooms, serde_json::json!([]));

    Ok(())
}
