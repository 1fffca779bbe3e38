use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(TodosTable::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(TodosTable::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(TodosTable::Todo).text().not_null())
                    .col(
                        ColumnDef::new(TodosTable::Date)
                            .timestamp()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(TodosTable::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum TodosTable {
    Table,
    Id,
    Todo,
    Date,
}
