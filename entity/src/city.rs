use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "city")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub country_id: i32,
    pub is_capital: bool,
    /// IANA time zone name, e.g. `Europe/Kyiv`.
    pub timezone: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::country::Entity",
        from = "Column::CountryId",
        to = "super::country::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Country,
    #[sea_orm(has_many = "super::airport::Entity")]
    Airport,
}

impl Related<super::country::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Country.def()
    }
}

impl Related<super::airport::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Airport.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
