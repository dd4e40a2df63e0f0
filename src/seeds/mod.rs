pub mod sample_records_seed;
