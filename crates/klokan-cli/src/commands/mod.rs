pub mod dispatch;
pub mod export;
pub mod import;
pub mod instances;
pub mod list;
pub mod shared;
pub mod show;
