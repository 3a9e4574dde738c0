pub mod address;
pub mod cidr;
