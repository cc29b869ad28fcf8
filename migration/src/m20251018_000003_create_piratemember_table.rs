use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // crew_id holds the crew's hex id and carries no foreign key constraint.
        manager
            .create_table(
                Table::create()
                    .table(PirateMember::Table)
                    .if_not_exists()
                    .col(string(PirateMember::Id).primary_key())
                    .col(string(PirateMember::CrewId))
                    .col(string(PirateMember::Name))
                    .col(string_null(PirateMember::Role))
                    .col(big_integer(PirateMember::Bounty).default(0))
                    .col(string_null(PirateMember::AvatarUrl))
                    .col(
                        timestamp(PirateMember::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_piratemember_crew_id")
                    .table(PirateMember::Table)
                    .col(PirateMember::CrewId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(PirateMember::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum PirateMember {
    #[sea_orm(iden = "piratemember")]
    Table,
    Id,
    CrewId,
    Name,
    Role,
    Bounty,
    AvatarUrl,
    CreatedAt,
}
