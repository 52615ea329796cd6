pub mod taxi_rank;
