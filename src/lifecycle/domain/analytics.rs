use serde::{Deserialize, Serialize};

/// Fleet health counts for one month of the trend chart
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthSample {
    pub month: String,
    pub healthy: u32,
    pub issues: u32,
    pub critical: u32,
}

impl HealthSample {
    pub fn total(&self) -> u64 {
        u64::from(self.healthy) + u64::from(self.issues) + u64::from(self.critical)
    }
}

/// Devices under management for one customer segment
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerSegment {
    pub name: String,
    pub devices: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeeklyDeployments {
    pub week: String,
    pub deployments: u32,
}

/// Open vulnerabilities by severity for one device model
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VulnerabilityProfile {
    pub device_model: String,
    pub critical: u32,
    pub high: u32,
    pub medium: u32,
    pub low: u32,
}

impl VulnerabilityProfile {
    pub fn total(&self) -> u64 {
        self.critical_and_high() + u64::from(self.medium) + u64::from(self.low)
    }

    pub fn critical_and_high(&self) -> u64 {
        u64::from(self.critical) + u64::from(self.high)
    }

    /// True when no severity bucket has an open issue
    pub fn is_clean(&self) -> bool {
        self.total() == 0
    }
}

/// Static series feeding the analytics screen
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalyticsDataset {
    #[serde(default)]
    pub device_health: Vec<HealthSample>,
    #[serde(default)]
    pub customer_segments: Vec<CustomerSegment>,
    #[serde(default)]
    pub weekly_deployments: Vec<WeeklyDeployments>,
    #[serde(default)]
    pub vulnerability_profiles: Vec<VulnerabilityProfile>,
}
