use serde::{Deserialize, Serialize};

/// One cow's yields for a single day
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MilkRecord {
    pub cow_id: u32,
    pub morning_yield: f64,
    pub evening_yield: f64,
}

impl MilkRecord {
    pub fn daily_yield(&self) -> f64 {
        self.morning_yield + self.evening_yield
    }
}

/// Records taken on one day of the schedule
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct DayLog {
    pub day: usize,
    pub milking: Vec<MilkRecord>,
}

impl DayLog {
    pub fn new(day: usize) -> Self {
        Self {
            day,
            milking: Vec::new(),
        }
    }

    pub fn contains_cow(&self, cow_id: u32) -> bool {
        self.milking.iter().any(|r| r.cow_id == cow_id)
    }
}

/// Every morning and every evening yield in the schedule, day by day
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct MilkYields {
    pub morning: Vec<f64>,
    pub evening: Vec<f64>,
}

impl MilkYields {
    pub fn morning_total(&self) -> f64 {
        self.morning.iter().sum()
    }

    pub fn evening_total(&self) -> f64 {
        self.evening.iter().sum()
    }
}
