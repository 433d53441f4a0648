pub mod contract;
pub mod coordination;
pub mod device;
pub mod maintenance;

pub use contract::{CONTRACT_FIELDS, CONTRACT_REPORT_TITLE, Contract};
pub use coordination::{COORDINATION_FIELDS, COORDINATION_REPORT_TITLE, CoordinationRequest};
pub use device::{DEVICE_FIELDS, DEVICE_REPORT_TITLE, Device, DeviceLocation, DeviceStatus};
pub use maintenance::{MAINTENANCE_FIELDS, MAINTENANCE_REPORT_TITLE, MaintenanceCard};
