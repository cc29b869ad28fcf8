use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Marine::Table)
                    .if_not_exists()
                    .col(string(Marine::Id).primary_key())
                    .col(string(Marine::Name))
                    .col(string(Marine::Rank))
                    .col(text_null(Marine::Bio))
                    .col(string_null(Marine::AvatarUrl))
                    .col(
                        timestamp(Marine::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Marine::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Marine {
    Table,
    Id,
    Name,
    Rank,
    Bio,
    AvatarUrl,
    CreatedAt,
}
