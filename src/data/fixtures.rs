//! Compiled-in sample records standing in for a backend.

use super::types::{
    CampaignData, CampaignStatus, CampaignTableRow, DashboardStats, MetricCard, RevenuePoint,
    Role, TrafficSource, User,
};

pub const USERS: &[User] = &[
    User {
        id: "1",
        name: "John Doe",
        email: "john@example.com",
        role: Role::Admin,
        avatar: Some("/avatars/john.jpg"),
    },
    User {
        id: "2",
        name: "Jane Smith",
        email: "jane@example.com",
        role: Role::User,
        avatar: Some("/avatars/jane.jpg"),
    },
    User {
        id: "3",
        name: "Mike Johnson",
        email: "mike@example.com",
        role: Role::Manager,
        avatar: Some("/avatars/mike.jpg"),
    },
];

pub const DASHBOARD_STATS: DashboardStats = DashboardStats {
    total_users: 1234,
    active_users: 987,
    revenue: 52000,
    growth: 12.5,
};

pub const METRIC_CARDS: &[MetricCard] = &[
    MetricCard {
        id: "revenue",
        title: "Total Revenue",
        value: "$45,231",
        delta: 20.1,
        progress: 75,
    },
    MetricCard {
        id: "subscriptions",
        title: "Subscriptions",
        value: "2,350",
        delta: 18.0,
        progress: 62,
    },
    MetricCard {
        id: "sales",
        title: "Sales",
        value: "12,234",
        delta: -4.3,
        progress: 48,
    },
    MetricCard {
        id: "active-now",
        title: "Active Now",
        value: "573",
        delta: 2.6,
        progress: 86,
    },
];

pub const REVENUE_DATA: &[RevenuePoint] = &[
    RevenuePoint { date: "Jan", revenue: 4000.0, previous_revenue: 3200.0 },
    RevenuePoint { date: "Feb", revenue: 3000.0, previous_revenue: 2800.0 },
    RevenuePoint { date: "Mar", revenue: 5000.0, previous_revenue: 4100.0 },
    RevenuePoint { date: "Apr", revenue: 4500.0, previous_revenue: 4300.0 },
    RevenuePoint { date: "May", revenue: 6000.0, previous_revenue: 4900.0 },
    RevenuePoint { date: "Jun", revenue: 5500.0, previous_revenue: 5200.0 },
    RevenuePoint { date: "Jul", revenue: 7000.0, previous_revenue: 5800.0 },
    RevenuePoint { date: "Aug", revenue: 6500.0, previous_revenue: 6100.0 },
    RevenuePoint { date: "Sep", revenue: 7200.0, previous_revenue: 6400.0 },
    RevenuePoint { date: "Oct", revenue: 8000.0, previous_revenue: 6900.0 },
    RevenuePoint { date: "Nov", revenue: 7600.0, previous_revenue: 7300.0 },
    RevenuePoint { date: "Dec", revenue: 9100.0, previous_revenue: 7800.0 },
];

pub const CAMPAIGN_DATA: &[CampaignData] = &[
    CampaignData {
        name: "Summer Sale",
        impressions: 45_000,
        clicks: 2_250,
        conversions: 180,
        cost: 1_125.0,
    },
    CampaignData {
        name: "Black Friday",
        impressions: 78_000,
        clicks: 4_680,
        conversions: 421,
        cost: 2_340.0,
    },
    CampaignData {
        name: "Holiday Special",
        impressions: 52_000,
        clicks: 2_860,
        conversions: 229,
        cost: 1_430.0,
    },
    CampaignData {
        name: "Spring Launch",
        impressions: 31_000,
        clicks: 1_240,
        conversions: 87,
        cost: 744.0,
    },
    CampaignData {
        name: "Back to School",
        impressions: 39_000,
        clicks: 1_950,
        conversions: 136,
        cost: 975.0,
    },
];

pub const TRAFFIC_SOURCES: &[TrafficSource] = &[
    TrafficSource { name: "Organic Search", value: 42.0, color: "#3b82f6" },
    TrafficSource { name: "Direct", value: 24.0, color: "#10b981" },
    TrafficSource { name: "Social Media", value: 18.0, color: "#f59e0b" },
    TrafficSource { name: "Referral", value: 10.0, color: "#ef4444" },
    TrafficSource { name: "Email", value: 6.0, color: "#8b5cf6" },
];

pub const CAMPAIGN_TABLE: &[CampaignTableRow] = &[
    CampaignTableRow {
        id: "1",
        campaign: "Summer Sale 2024",
        status: CampaignStatus::Active,
        clicks: 12_450,
        cost: 3_200.0,
        roi: 245.5,
    },
    CampaignTableRow {
        id: "2",
        campaign: "Black Friday Deals",
        status: CampaignStatus::Paused,
        clicks: 28_900,
        cost: 8_750.0,
        roi: 312.8,
    },
    CampaignTableRow {
        id: "3",
        campaign: "Holiday Special",
        status: CampaignStatus::Active,
        clicks: 15_600,
        cost: 4_100.0,
        roi: 189.2,
    },
    CampaignTableRow {
        id: "4",
        campaign: "Spring Collection",
        status: CampaignStatus::Draft,
        clicks: 0,
        cost: 0.0,
        roi: 0.0,
    },
    CampaignTableRow {
        id: "5",
        campaign: "Back to School",
        status: CampaignStatus::Active,
        clicks: 9_800,
        cost: 2_650.0,
        roi: 98.4,
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_traffic_shares_sum_to_hundred() {
        let total: f64 = TRAFFIC_SOURCES.iter().map(|s| s.value).sum();
        assert!((total - 100.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_metric_progress_within_bounds() {
        assert!(METRIC_CARDS.iter().all(|card| card.progress <= 100));
    }

    #[test]
    fn test_fixture_ids_are_unique() {
        let ids: std::collections::HashSet<_> = CAMPAIGN_TABLE.iter().map(|row| row.id).collect();
        assert_eq!(ids.len(), CAMPAIGN_TABLE.len());
    }
}
