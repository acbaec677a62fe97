pub mod db_types;
pub mod operations;
