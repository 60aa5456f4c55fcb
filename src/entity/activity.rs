use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "activity")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(column_type = "String(StringLen::N(255))")]
    pub name: String,
    #[sea_orm(column_type = "String(StringLen::N(50))", unique)]
    pub slug: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    pub category_id: Option<i32>,
    pub purchase_available: bool,
    #[sea_orm(column_type = "String(StringLen::N(255))")]
    pub internal_name: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::category::Entity",
        from = "Column::CategoryId",
        to = "super::category::Column::Id",
        on_update = "Cascade",
        on_delete = "SetNull"
    )]
    Category,
    #[sea_orm(has_many = "super::activity_image::Entity")]
    ActivityImage,
    #[sea_orm(has_many = "super::activity_reason::Entity")]
    ActivityReason,
}

impl Related<super::category::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Category.def()
    }
}

impl Related<super::activity_image::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ActivityImage.def()
    }
}

impl Related<super::activity_reason::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ActivityReason.def()
    }
}

impl Related<super::reason::Entity> for Entity {
    fn to() -> RelationDef {
        super::activity_reason::Relation::Reason.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::activity_reason::Relation::Activity.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
