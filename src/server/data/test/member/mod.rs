use crate::server::{data::member::MemberRepository, util::id::RecordId};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod list;
mod top_by_bounty;
