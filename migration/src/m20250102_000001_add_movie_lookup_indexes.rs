use sea_orm_migration::prelude::*;

use crate::m20250101_000001_create_movies::Movies;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Titles are not unique: duplicates are allowed and deleted together.
        manager
            .create_index(
                Index::create()
                    .name("idx_movies_title")
                    .table(Movies::Table)
                    .col(Movies::Title)
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_movies_genre")
                    .table(Movies::Table)
                    .col(Movies::Genre)
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name("idx_movies_genre").table(Movies::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_movies_title").table(Movies::Table).to_owned())
            .await?;

        Ok(())
    }
}
