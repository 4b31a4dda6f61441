pub mod stays;
