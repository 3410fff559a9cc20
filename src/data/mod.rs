//! Dashboard data: record types and the fixtures that populate them.

pub mod fixtures;
pub mod types;

pub use types::{
    CampaignData, CampaignStatus, CampaignTableRow, DashboardStats, MetricCard, RevenuePoint,
    Role, TrafficSource, User,
};
