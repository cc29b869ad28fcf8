use crate::server::{
    data::{collection::Collection, filter::ExactMatchFilter},
    util::id::RecordId,
};
use entity::prelude::*;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod find_by_id;
mod list;
