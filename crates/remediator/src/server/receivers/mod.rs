mod alertmanager;

pub use alertmanager::{AlertStatus, Notification};
