use crate::server::{data::review::ReviewRepository, model::review::CreateReviewParams};
use sea_orm::{DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory};

mod count;
mod create;
mod find_by_ids;
