pub mod checksum;
pub mod token;
