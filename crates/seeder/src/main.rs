use database::{DatabaseConnectionInfo, PgDatabase};
use model::{taxi_rank::TaxiRank, ExampleData};

#[tokio::main]
async fn main() {
    env_logger::init();

    // database
    let connection_info = DatabaseConnectionInfo::from_env().unwrap_or_default();
    log::info!(
        "connecting to database '{}' at {}:{}",
        connection_info.database,
        connection_info.hostname,
        connection_info.port
    );
    let database = PgDatabase::connect(connection_info)
        .await
        .expect("could not connect to database.");

    // seed record
    let rank = TaxiRank::example_data();

    let mut tx = database
        .transaction()
        .await
        .expect("could not begin transaction.");
    let inserted = tx
        .insert_taxi_rank(rank)
        .await
        .expect("could not insert taxi rank.");
    tx.commit().await.expect("could not commit transaction.");

    log::info!("inserted taxi rank '{}'", inserted.content.name);
    println!("Taxi rank added successfully with ID: {}", inserted.id);
}
