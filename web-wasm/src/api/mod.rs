pub mod ddragon;
