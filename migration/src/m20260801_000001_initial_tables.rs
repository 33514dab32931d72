use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Inquiry::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Inquiry::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Inquiry::Name).string().not_null())
                    .col(ColumnDef::new(Inquiry::Phone).string().not_null())
                    .col(ColumnDef::new(Inquiry::Postcode).string().not_null())
                    .col(ColumnDef::new(Inquiry::Email).string().null())
                    .col(ColumnDef::new(Inquiry::SelectedModel).string().null())
                    .col(ColumnDef::new(Inquiry::Ref).string().null())
                    .col(ColumnDef::new(Inquiry::Epc).string().null())
                    .col(ColumnDef::new(Inquiry::Source).string().null())
                    .col(ColumnDef::new(Inquiry::Notes).text().null())
                    .col(
                        ColumnDef::new(Inquiry::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_inquiries_created_at")
                    .table(Inquiry::Table)
                    .col(Inquiry::CreatedAt)
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Visit::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Visit::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Visit::Ref).string().null())
                    .col(ColumnDef::new(Visit::Epc).string().null())
                    .col(ColumnDef::new(Visit::Page).string().not_null())
                    .col(ColumnDef::new(Visit::UserAgent).text().null())
                    .col(ColumnDef::new(Visit::Ip).string().null())
                    .col(
                        ColumnDef::new(Visit::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_visits_created_at")
                    .table(Visit::Table)
                    .col(Visit::CreatedAt)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name("idx_visits_created_at").to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Visit::Table).to_owned())
            .await?;

        manager
            .drop_index(Index::drop().name("idx_inquiries_created_at").to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Inquiry::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Inquiry {
    #[sea_orm(iden = "inquiries")]
    Table,
    Id,
    Name,
    Phone,
    Postcode,
    Email,
    SelectedModel,
    #[sea_orm(iden = "ref")]
    Ref,
    Epc,
    Source,
    Notes,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Visit {
    #[sea_orm(iden = "visits")]
    Table,
    Id,
    #[sea_orm(iden = "ref")]
    Ref,
    Epc,
    Page,
    UserAgent,
    Ip,
    CreatedAt,
}
