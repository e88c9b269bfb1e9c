use crate::server::{
    data::{campground::CampgroundRepository, review::ReviewRepository},
    model::campground::{CreateCampgroundParams, UpdateCampgroundParams},
};
use sea_orm::{ColumnTrait, DbErr, EntityTrait, PaginatorTrait, QueryFilter};
use test_utils::{builder::TestBuilder, factory};

mod append_review;
mod create;
mod delete;
mod find_by_id;
mod get_all;
mod update;
