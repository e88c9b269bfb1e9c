use crate::server::{
    data::review::ReviewRepository, error::AppError, model::review::CreateReviewParams,
};
use sea_orm::{EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};
