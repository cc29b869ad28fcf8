use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(PirateCrew::Table)
                    .if_not_exists()
                    .col(string(PirateCrew::Id).primary_key())
                    .col(string(PirateCrew::Name))
                    .col(string(PirateCrew::Sea))
                    .col(text_null(PirateCrew::Description))
                    .col(string_null(PirateCrew::EmblemUrl))
                    .col(boolean(PirateCrew::CrewOfMonth).default(false))
                    .col(
                        timestamp(PirateCrew::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(PirateCrew::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum PirateCrew {
    #[sea_orm(iden = "piratecrew")]
    Table,
    Id,
    Name,
    Sea,
    Description,
    EmblemUrl,
    CrewOfMonth,
    CreatedAt,
}
