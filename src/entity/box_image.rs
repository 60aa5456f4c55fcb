use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "box_image")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub box_id: i32,
    pub order: i32,
    #[sea_orm(column_type = "String(StringLen::N(100))")]
    pub upload: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::r#box::Entity",
        from = "Column::BoxId",
        to = "super::r#box::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Box,
}

impl Related<super::r#box::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Box.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
