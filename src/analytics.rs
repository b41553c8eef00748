//! Analytics dashboard data
//!
//! A literal traffic snapshot plus a "real-time" block whose numbers drift
//! randomly on every tick. The randomization is presentation-only; nothing
//! reads these values back.

use rand::Rng;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct PageStat {
    pub page: &'static str,
    pub views: u32,
    pub percentage: u8,
}

#[derive(Debug, Clone, Serialize)]
pub struct DeviceStat {
    pub kind: &'static str,
    pub percentage: u8,
}

#[derive(Debug, Clone, Serialize)]
pub struct CountryStat {
    pub country: &'static str,
    pub visitors: u32,
    pub flag: &'static str,
}

/// The fixed dashboard snapshot.
#[derive(Debug, Clone, Serialize)]
pub struct Snapshot {
    pub total_views: u32,
    pub unique_visitors: u32,
    pub average_time: &'static str,
    pub bounce_rate: f64,
    pub real_time_users: u32,
    pub conversion_rate: f64,
    pub top_pages: Vec<PageStat>,
    pub device_types: Vec<DeviceStat>,
    pub countries: Vec<CountryStat>,
}

pub fn snapshot() -> Snapshot {
    Snapshot {
        total_views: 12_547,
        unique_visitors: 8_932,
        average_time: "3:42",
        bounce_rate: 32.5,
        real_time_users: 23,
        conversion_rate: 4.2,
        top_pages: vec![
            PageStat { page: "/about", views: 4521, percentage: 36 },
            PageStat { page: "/projects", views: 3876, percentage: 31 },
            PageStat { page: "/experience", views: 2234, percentage: 18 },
            PageStat { page: "/blog", views: 1456, percentage: 12 },
            PageStat { page: "/contact", views: 460, percentage: 3 },
        ],
        device_types: vec![
            DeviceStat { kind: "Desktop", percentage: 58 },
            DeviceStat { kind: "Mobile", percentage: 35 },
            DeviceStat { kind: "Tablet", percentage: 7 },
        ],
        countries: vec![
            CountryStat { country: "España", visitors: 3456, flag: "🇪🇸" },
            CountryStat { country: "Estados Unidos", visitors: 2134, flag: "🇺🇸" },
            CountryStat { country: "Reino Unido", visitors: 1876, flag: "🇬🇧" },
            CountryStat { country: "Francia", visitors: 987, flag: "🇫🇷" },
            CountryStat { country: "Alemania", visitors: 479, flag: "🇩🇪" },
        ],
    }
}

/// The live counters that drift while the dashboard is open.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RealTime {
    pub active_users: u32,
    pub page_views: u32,
    pub new_sessions: u32,
}

impl Default for RealTime {
    fn default() -> Self {
        Self {
            active_users: 23,
            page_views: 156,
            new_sessions: 12,
        }
    }
}

impl RealTime {
    /// Random walk: active users move by -2..=+3 but never below 1, the
    /// other counters only grow.
    pub fn drift(&mut self) {
        let mut rng = rand::rng();
        let delta = rng.random_range(0..6) as i64 - 2;
        self.active_users = (self.active_users as i64 + delta).max(1) as u32;
        self.page_views += rng.random_range(0..3);
        self.new_sessions += rng.random_range(0..2);
    }
}
