pub mod message;
pub mod props;
