use crate::server::{
    data::crew::CrewRepository,
    model::crew::{CreateCrewParams, CrewListParams, Sea},
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod find_by_name;
mod list;
