use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "reason")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(column_type = "String(StringLen::N(255))")]
    pub name: String,
    #[sea_orm(column_type = "String(StringLen::N(50))", unique)]
    pub slug: String,
    pub order: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::activity_reason::Entity")]
    ActivityReason,
}

impl Related<super::activity_reason::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ActivityReason.def()
    }
}

impl Related<super::activity::Entity> for Entity {
    fn to() -> RelationDef {
        super::activity_reason::Relation::Activity.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::activity_reason::Relation::Reason.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
