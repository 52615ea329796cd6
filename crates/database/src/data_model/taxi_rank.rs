use indexmap::IndexMap;
use model::{taxi_rank::TaxiRank, WithId};
use sqlx::{prelude::FromRow, types::Json};
use utility::id::Id;

/// One row of the `taxi_ranks` table. The three structured columns are
/// JSONB; sqlx decodes them through the `Json` wrapper.
#[derive(Debug, Clone, FromRow)]
pub struct TaxiRankRow {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub address: Option<String>,
    pub latitude: f64,
    pub longitude: f64,
    pub district: Option<String>,
    pub routes_served: Json<Vec<String>>,
    pub hours: Json<IndexMap<String, String>>,
    pub phone: Option<String>,
    pub facilities: Json<IndexMap<String, bool>>,
}

impl TaxiRankRow {
    pub fn into_model(self) -> WithId<TaxiRank> {
        WithId::new(
            Id::new(self.id),
            TaxiRank {
                name: self.name,
                description: self.description,
                address: self.address,
                latitude: self.latitude,
                longitude: self.longitude,
                district: self.district,
                routes_served: self.routes_served.0,
                hours: self.hours.0,
                phone: self.phone,
                facilities: self.facilities.0,
            },
        )
    }
}

pub fn with_ids(rows: Vec<TaxiRankRow>) -> Vec<WithId<TaxiRank>> {
    rows.into_iter().map(TaxiRankRow::into_model).collect()
}
