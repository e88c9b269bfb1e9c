//! Ordered review references held by a campground.
//!
//! Each row is one entry of a campground's `reviews` collection. Rows belong to the
//! campground and are removed with it; the referenced review rows are not.

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "campground_review")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub campground_id: i32,
    pub review_id: i32,
    pub position: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::campground::Entity",
        from = "Column::CampgroundId",
        to = "super::campground::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Campground,
    #[sea_orm(
        belongs_to = "super::review::Entity",
        from = "Column::ReviewId",
        to = "super::review::Column::Id",
        on_update = "Cascade",
        on_delete = "Restrict"
    )]
    Review,
}

impl Related<super::campground::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Campground.def()
    }
}

impl Related<super::review::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Review.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
