use super::m20240301_000001_create_category_and_reason::Category;
use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(CatalogBox::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(CatalogBox::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(CatalogBox::Name).string_len(255).not_null())
                    .col(
                        ColumnDef::new(CatalogBox::Slug)
                            .string_len(50)
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(CatalogBox::Description).text().not_null())
                    .col(ColumnDef::new(CatalogBox::CategoryId).integer().null())
                    .col(
                        ColumnDef::new(CatalogBox::PurchaseAvailable)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(CatalogBox::Price)
                            .decimal_len(10, 2)
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-box-category_id")
                            .from(CatalogBox::Table, CatalogBox::CategoryId)
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
                    .table(BoxImage::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(BoxImage::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(BoxImage::BoxId).integer().not_null())
                    .col(ColumnDef::new(BoxImage::Order).integer().not_null().default(0))
                    .col(ColumnDef::new(BoxImage::Upload).string_len(100).not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-box_image-box_id")
                            .from(BoxImage::Table, BoxImage::BoxId)
                            .to(CatalogBox::Table, CatalogBox::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(BoxImage::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(CatalogBox::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum CatalogBox {
    #[sea_orm(iden = "box")]
    Table,
    Id,
    Name,
    Slug,
    Description,
    CategoryId,
    PurchaseAvailable,
    Price,
}

#[derive(DeriveIden)]
enum BoxImage {
    Table,
    Id,
    BoxId,
    Order,
    Upload,
}
