pub mod cmake;
