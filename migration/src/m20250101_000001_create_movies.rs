use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.create_table(movies_table()).await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Movies::Table).to_owned()).await?;
        Ok(())
    }
}

// MySQL rejects literal defaults on TEXT columns; inserts always set `description`.
fn movies_table() -> TableCreateStatement {
    Table::create()
        .table(Movies::Table)
        .if_not_exists()
        .col(pk_auto(Movies::Id))
        .col(string(Movies::Title))
        .col(string(Movies::Genre))
        .col(string(Movies::Platform).default(""))
        .col(integer(Movies::Duration).default(0))
        .col(text(Movies::Description))
        .col(boolean(Movies::Watched).default(false))
        .to_owned()
}

#[derive(DeriveIden)]
pub(crate) enum Movies {
    Table,
    Id,
    Title,
    Genre,
    Platform,
    Duration,
    Description,
    Watched,
}
