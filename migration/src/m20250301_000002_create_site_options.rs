use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Key/value store for the site state the staleness check depends on:
        // active_theme, active_plugins, enabled_block_types, global_stylesheet_hash
        manager
            .create_table(
                Table::create()
                    .table(SiteOptions::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(SiteOptions::Name)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(SiteOptions::Value).text().not_null())
                    .col(
                        ColumnDef::new(SiteOptions::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(SiteOptions::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum SiteOptions {
    Table,
    Name,
    Value,
    UpdatedAt,
}
