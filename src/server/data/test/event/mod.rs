use crate::server::{
    data::event::EventRepository,
    model::event::{CreateEventParams, EventResultItem, EventStatus},
};
use chrono::{Duration, Utc};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod list;
