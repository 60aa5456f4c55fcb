use bigbox::{
    ActivityInput, BoxInput, CatalogMutation, CatalogQuery, CategoryInput, ImageInput, Input,
    ReasonInput, Serializer, SerializerContext,
};
use bigbox_migration::{Migrator, MigratorTrait};
use sea_orm_migration::sea_orm::{Database, DatabaseConnection, DbErr};
use serde_json::json;

async fn setup() -> Result<DatabaseConnection, DbErr> {
    let db = Database::connect("sqlite::memory:").await?;
    Migrator::up(&db, None).await?;
    Ok(db)
}

#[tokio::test]
async fn migrate_up_and_down() -> Result<(), DbErr> {
    let db = setup().await?;
    assert_eq!(Migrator::get_pending_migrations(&db).await?.len(), 0);

    Migrator::down(&db, None).await?;
    assert_eq!(Migrator::get_pending_migrations(&db).await?.len(), 3);

    Ok(())
}

#[tokio::test]
async fn serialize_catalog() -> Result<(), bigbox::Error> {
    let db = setup().await?;
    let ctx = SerializerContext::default();

    let outdoor = CatalogMutation::create_category(
        &db,
        CategoryInput::from_value(json!({
            "name": "Outdoor",
            "slug": "outdoor",
            "description": "Fresh air",
        }))?,
    )
    .await?;

    let summer = CatalogMutation::create_box(
        &db,
        &ctx,
        BoxInput::from_value(json!({
            "name": "Summer box",
            "slug": "summer-box",
            "category": outdoor.id,
            "purchase_available": true,
            "price": "49.90",
        }))?,
    )
    .await?;
    CatalogMutation::add_box_image(
        &db,
        &ctx,
        &summer.slug,
        ImageInput::from_value(json!({ "order": 0, "upload": "boxes/summer.jpg" }))?,
    )
    .await?;

    let kayaking = CatalogMutation::create_activity(
        &db,
        &ctx,
        ActivityInput::from_value(json!({
            "name": "Kayaking",
            "slug": "kayaking",
            "category": outdoor.id,
            "internal_name": "KAYAK-2H",
        }))?,
    )
    .await?;
    let fresh_air = CatalogMutation::create_reason(
        &db,
        ReasonInput::from_value(json!({ "name": "Fresh air", "slug": "fresh-air" }))?,
    )
    .await?;
    CatalogMutation::set_activity_reasons(&db, &ctx, kayaking.id, vec![fresh_air.id, fresh_air.id])
        .await?;

    let value = CatalogQuery::find_box_by_slug(&db, &ctx, "summer-box")
        .await?
        .expect("summer-box was created")
        .to_value()?;
    assert_eq!(
        value,
        json!({
            "id": summer.id,
            "name": "Summer box",
            "slug": "summer-box",
            "description": "",
            "category": outdoor.id,
            "purchase_available": true,
            "price": "49.90",
            "boximage_set": [{ "id": 1, "order": 0, "upload": "/media/boxes/summer.jpg" }],
        })
    );

    let activity = CatalogQuery::find_activity_by_id(&db, &ctx, kayaking.id)
        .await?
        .expect("kayaking was created");
    assert_eq!(activity.reasons.len(), 1);
    assert_eq!(activity.reasons[0].slug, "fresh-air");
    assert!(activity.activityimage_set.is_empty());

    let category = CatalogQuery::find_category_by_id(&db, outdoor.id)
        .await?
        .expect("outdoor was created")
        .to_value()?;
    assert_eq!(
        category["box_set"],
        json!([{ "id": summer.id, "name": "Summer box", "slug": "summer-box", "price": "49.90" }])
    );

    CatalogMutation::delete_box_by_slug(&db, "summer-box").await?;
    assert!(CatalogQuery::list_boxes(&db, &ctx).await?.is_empty());

    Ok(())
}
