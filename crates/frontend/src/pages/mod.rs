pub mod getting_started;
