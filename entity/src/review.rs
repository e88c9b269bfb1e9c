use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "review")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub rating: i32,
    #[sea_orm(column_type = "Text")]
    pub body: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::campground_review::Entity")]
    CampgroundReview,
}

impl Related<super::campground_review::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CampgroundReview.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
