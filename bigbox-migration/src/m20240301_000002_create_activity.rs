use super::m20240301_000001_create_category_and_reason::{Category, Reason};
use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Activity::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Activity::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Activity::Name).string_len(255).not_null())
                    .col(
                        ColumnDef::new(Activity::Slug)
                            .string_len(50)
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Activity::Description).text().not_null())
                    .col(ColumnDef::new(Activity::CategoryId).integer().null())
                    .col(
                        ColumnDef::new(Activity::PurchaseAvailable)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(Activity::InternalName)
                            .string_len(255)
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-activity-category_id")
                            .from(Activity::Table, Activity::CategoryId)
                            .to(Category::Table, Category::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(ActivityReason::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ActivityReason::ActivityId)
                            .integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(ActivityReason::ReasonId).integer().not_null())
                    .primary_key(
                        Index::create()
                            .name("pk-activity_reason")
                            .col(ActivityReason::ActivityId)
                            .col(ActivityReason::ReasonId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-activity_reason-activity_id")
                            .from(ActivityReason::Table, ActivityReason::ActivityId)
                            .to(Activity::Table, Activity::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-activity_reason-reason_id")
                            .from(ActivityReason::Table, ActivityReason::ReasonId)
                            .to(Reason::Table, Reason::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(ActivityImage::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ActivityImage::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(ActivityImage::ActivityId)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ActivityImage::Order)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(ActivityImage::Upload)
                            .string_len(100)
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-activity_image-activity_id")
                            .from(ActivityImage::Table, ActivityImage::ActivityId)
                            .to(Activity::Table, Activity::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ActivityImage::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(ActivityReason::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Activity::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Activity {
    Table,
    Id,
    Name,
    Slug,
    Description,
    CategoryId,
    PurchaseAvailable,
    InternalName,
}

#[derive(DeriveIden)]
enum ActivityReason {
    Table,
    ActivityId,
    ReasonId,
}

#[derive(DeriveIden)]
enum ActivityImage {
    Table,
    Id,
    ActivityId,
    Order,
    Upload,
}
