use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Create validated_urls table
        manager
            .create_table(
                Table::create()
                    .table(ValidatedUrls::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ValidatedUrls::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(ValidatedUrls::Url)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(ValidatedUrls::EditLink).string().not_null())
                    .col(
                        ColumnDef::new(ValidatedUrls::ErrorPayload)
                            .text()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ValidatedUrls::CapturedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(ValidatedUrls::ThemeSlug)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ValidatedUrls::PluginsDigest)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ValidatedUrls::BlockTypesDigest)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ValidatedUrls::StylesheetDigest)
                            .string()
                            .not_null(),
                    )
                    .col(ColumnDef::new(ValidatedUrls::ContentModifiedAt).timestamp_with_time_zone())
                    .to_owned(),
            )
            .await?;

        // The correlator looks records up by canonical URL only
        manager
            .create_index(
                Index::create()
                    .name("idx_validated_urls_url")
                    .table(ValidatedUrls::Table)
                    .col(ValidatedUrls::Url)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ValidatedUrls::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum ValidatedUrls {
    Table,
    Id,
    Url,
    EditLink,
    ErrorPayload,
    CapturedAt,
    ThemeSlug,
    PluginsDigest,
    BlockTypesDigest,
    StylesheetDigest,
    ContentModifiedAt,
}
