use std::fmt::Debug;

use serde::Serialize;
use utility::id::{HasId, Id};

pub mod taxi_rank;

/// Fixed example record of an entity, used by the seeder and by tests.
pub trait ExampleData {
    fn example_data() -> Self;
}

/// A value annotated with its distance from some reference point.
#[derive(Debug, Clone, Serialize)]
pub struct WithDistance<T> {
    pub distance_km: f64,
    #[serde(flatten)]
    pub content: T,
}

impl<T> WithDistance<T> {
    pub fn new(distance_km: f64, content: T) -> Self {
        Self {
            distance_km,
            content,
        }
    }
}

/// A value together with its database-assigned identifier.
///
/// Model types carry no id field themselves; the id exists only once the
/// database has assigned it, so a persisted record is a `WithId<V>`.
#[derive(Debug, Clone, Serialize)]
pub struct WithId<V>
where
    V: HasId,
    V::IdType: Serialize + Debug + Clone,
{
    pub id: Id<V>,
    #[serde(flatten)]
    pub content: V,
}

impl<V> WithId<V>
where
    V: HasId,
    V::IdType: Serialize + Debug + Clone,
{
    pub fn new(id: Id<V>, content: V) -> Self {
        Self { id, content }
    }
}
