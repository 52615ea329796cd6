use std::cmp::Ordering;

use model::{taxi_rank::TaxiRank, WithDistance, WithId};
use sqlx::{types::Json, Executor, Postgres};
use utility::{geo, id::Id};

use crate::data_model::taxi_rank::{with_ids, TaxiRankRow};

use super::convert_error;
use crate::Result;

/// Inserts a single taxi rank and returns it together with the id the
/// database assigned. Never upserts; inserting the same rank twice creates
/// two rows.
pub async fn insert<'c, E>(executor: E, rank: TaxiRank) -> Result<WithId<TaxiRank>>
where
    E: Executor<'c, Database = Postgres>,
{
    sqlx::query_as(
        "
        INSERT INTO taxi_ranks(
            name,
            description,
            address,
            latitude,
            longitude,
            district,
            routes_served,
            hours,
            phone,
            facilities
        )
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
        RETURNING
            id, name, description, address, latitude, longitude,
            district, routes_served, hours, phone, facilities;
        ",
    )
    .bind(&rank.name)
    .bind(&rank.description)
    .bind(&rank.address)
    .bind(rank.latitude)
    .bind(rank.longitude)
    .bind(&rank.district)
    .bind(Json(&rank.routes_served))
    .bind(Json(&rank.hours))
    .bind(&rank.phone)
    .bind(Json(&rank.facilities))
    .fetch_one(executor)
    .await
    .map(|row: TaxiRankRow| row.into_model())
    .map_err(convert_error)
}

pub async fn get<'c, E>(executor: E, id: Id<TaxiRank>) -> Result<WithId<TaxiRank>>
where
    E: Executor<'c, Database = Postgres>,
{
    sqlx::query_as(
        "
        SELECT
            id, name, description, address, latitude, longitude,
            district, routes_served, hours, phone, facilities
        FROM
            taxi_ranks
        WHERE id = $1;
        ",
    )
    .bind(id.raw())
    .fetch_one(executor)
    .await
    .map(|row: TaxiRankRow| row.into_model())
    .map_err(convert_error)
}

pub async fn get_all<'c, E>(executor: E) -> Result<Vec<WithId<TaxiRank>>>
where
    E: Executor<'c, Database = Postgres>,
{
    sqlx::query_as(
        "
        SELECT
            id, name, description, address, latitude, longitude,
            district, routes_served, hours, phone, facilities
        FROM
            taxi_ranks
        ORDER BY name ASC;
        ",
    )
    .fetch_all(executor)
    .await
    .map(with_ids)
    .map_err(convert_error)
}

pub async fn get_by_district<'c, E, S>(
    executor: E,
    district: S,
) -> Result<Vec<WithId<TaxiRank>>>
where
    E: Executor<'c, Database = Postgres>,
    S: Into<String> + Send,
{
    sqlx::query_as(
        "
        SELECT
            id, name, description, address, latitude, longitude,
            district, routes_served, hours, phone, facilities
        FROM
            taxi_ranks
        WHERE district ILIKE $1
        ORDER BY name ASC;
        ",
    )
    .bind(format!("%{}%", district.into().replace('%', "")))
    .fetch_all(executor)
    .await
    .map(with_ids)
    .map_err(convert_error)
}

pub async fn search<'c, E, S>(executor: E, pattern: S) -> Result<Vec<WithId<TaxiRank>>>
where
    E: Executor<'c, Database = Postgres>,
    S: Into<String> + Send,
{
    let pattern = format!("%{}%", pattern.into().replace('%', ""));
    sqlx::query_as(
        "
        SELECT
            id, name, description, address, latitude, longitude,
            district, routes_served, hours, phone, facilities
        FROM
            taxi_ranks
        WHERE name ILIKE $1 OR address ILIKE $1
        ORDER BY name ASC;
        ",
    )
    .bind(pattern)
    .fetch_all(executor)
    .await
    .map(with_ids)
    .map_err(convert_error)
}

/// Ranks within `radius_km` of a center point. A bounding box narrows the
/// candidate set before the exact great-circle distance is evaluated in SQL.
pub async fn get_nearby<'c, E>(
    executor: E,
    center_latitude: f64,
    center_longitude: f64,
    radius_km: f64,
) -> Result<Vec<WithId<TaxiRank>>>
where
    E: Executor<'c, Database = Postgres>,
{
    let bounds = geo::bounding_box(center_latitude, center_longitude, radius_km);

    sqlx::query_as(
        "
        WITH distance_calc AS (
            SELECT
                id,
                ($1 * ACOS(
                    COS(RADIANS($2)) * COS(RADIANS(latitude)) *
                    COS(RADIANS(longitude) - RADIANS($3)) +
                    SIN(RADIANS($2)) * SIN(RADIANS(latitude))
                )) AS distance
            FROM
                taxi_ranks
            WHERE
                latitude BETWEEN $4 AND $5
                AND longitude BETWEEN $6 AND $7
        )
        SELECT
            id, name, description, address, latitude, longitude,
            district, routes_served, hours, phone, facilities
        FROM
            taxi_ranks
        WHERE
            id IN (
                SELECT id FROM distance_calc WHERE distance < $8
            );
        ",
    )
    .bind(geo::EARTH_RADIUS_KM)
    .bind(center_latitude)
    .bind(center_longitude)
    .bind(bounds.min_latitude)
    .bind(bounds.max_latitude)
    .bind(bounds.min_longitude)
    .bind(bounds.max_longitude)
    .bind(radius_km)
    .fetch_all(executor)
    .await
    .map(with_ids)
    .map_err(convert_error)
}

/// Like `get_nearby`, but annotates every rank with its distance from the
/// center and orders the result closest-first.
pub async fn get_nearby_with_distance<'c, E>(
    executor: E,
    center_latitude: f64,
    center_longitude: f64,
    radius_km: f64,
) -> Result<Vec<WithDistance<WithId<TaxiRank>>>>
where
    E: Executor<'c, Database = Postgres>,
{
    let mut ranks = get_nearby(executor, center_latitude, center_longitude, radius_km)
        .await?
        .into_iter()
        .map(|rank| {
            let distance_km =
                rank.content.distance_to_km(center_latitude, center_longitude);
            WithDistance::new(distance_km, rank)
        })
        .collect::<Vec<_>>();
    ranks.sort_by(|a, b| {
        a.distance_km
            .partial_cmp(&b.distance_km)
            .unwrap_or(Ordering::Equal)
    });
    Ok(ranks)
}
