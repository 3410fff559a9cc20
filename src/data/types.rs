//! Dashboard record types
//!
//! Flat, immutable records backing every panel. Derived campaign ratios are
//! computed on demand and never stored.

use serde::Serialize;

/// Access level of a dashboard user.
#[derive(Debug, Copy, Clone, Eq, PartialEq, strum::Display, strum::AsRefStr)]
#[strum(serialize_all = "lowercase")]
pub enum Role {
    Admin,
    User,
    Manager,
}

#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: &'static str,
    pub name: &'static str,
    pub email: &'static str,
    pub role: Role,
    pub avatar: Option<&'static str>,
}

impl User {
    /// First character of the display name, used as the avatar stand-in.
    pub fn initial(&self) -> char {
        self.name.chars().next().unwrap_or('?')
    }
}

/// Aggregate counters shown in the stats panel. Display only.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DashboardStats {
    pub total_users: u64,
    pub active_users: u64,
    pub revenue: u64,
    pub growth: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MetricCard {
    pub id: &'static str,
    pub title: &'static str,
    /// Pre-formatted display value, e.g. "$45,231".
    pub value: &'static str,
    /// Change against the previous period, in percent.
    pub delta: f64,
    /// Target of the progress ring, 0-100.
    pub progress: u16,
}

impl MetricCard {
    pub fn is_positive(&self) -> bool {
        self.delta >= 0.0
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RevenuePoint {
    pub date: &'static str,
    pub revenue: f64,
    pub previous_revenue: f64,
}

impl RevenuePoint {
    /// Period-over-period change in percent, if the prior value is non-zero.
    pub fn change_percent(&self) -> Option<f64> {
        if self.previous_revenue == 0.0 {
            return None;
        }
        Some((self.revenue - self.previous_revenue) / self.previous_revenue * 100.0)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CampaignData {
    pub name: &'static str,
    pub impressions: u64,
    pub clicks: u64,
    pub conversions: u64,
    pub cost: f64,
}

impl CampaignData {
    /// Click-through rate in percent.
    pub fn ctr(&self) -> Option<f64> {
        ratio(self.clicks as f64, self.impressions as f64).map(|r| r * 100.0)
    }

    /// Conversions per click in percent.
    pub fn conversion_rate(&self) -> Option<f64> {
        ratio(self.conversions as f64, self.clicks as f64).map(|r| r * 100.0)
    }

    /// Cost per click.
    pub fn cost_per_click(&self) -> Option<f64> {
        ratio(self.cost, self.clicks as f64)
    }
}

fn ratio(numerator: f64, denominator: f64) -> Option<f64> {
    if denominator == 0.0 {
        None
    } else {
        Some(numerator / denominator)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TrafficSource {
    pub name: &'static str,
    /// Share of total traffic, in percent.
    pub value: f64,
    /// Display color as `#rrggbb`.
    pub color: &'static str,
}

#[derive(
    Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Serialize, strum::Display, strum::AsRefStr,
)]
pub enum CampaignStatus {
    Active,
    Paused,
    Draft,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CampaignTableRow {
    pub id: &'static str,
    pub campaign: &'static str,
    pub status: CampaignStatus,
    pub clicks: u64,
    pub cost: f64,
    /// Return on investment, in percent.
    pub roi: f64,
}
