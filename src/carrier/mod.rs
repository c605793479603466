mod prefix_file;
mod prefix_carrier_mapper;

pub use prefix_carrier_mapper::PrefixCarrierMapper;
pub use prefix_file::PrefixTable;
