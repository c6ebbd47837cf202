use crate::models::{DayLog, MilkRecord, MilkYields};

/// A week of milking records with cow ids unique across every day
#[derive(Debug, Clone)]
pub struct WeeklySchedule {
    days: Vec<DayLog>,
    min_cow_id: u32,
    max_cow_id: u32,
}

impl WeeklySchedule {
    /// Seven empty days, cow ids 100 to 999
    pub fn new() -> Self {
        Self::with_rules(7, 100, 999)
    }

    pub fn with_rules(days: usize, min_cow_id: u32, max_cow_id: u32) -> Self {
        Self {
            days: (0..days).map(DayLog::new).collect(),
            min_cow_id,
            max_cow_id,
        }
    }

    pub fn from_config(config: &tally_core::Config) -> Self {
        let rules = &config.milking;
        Self::with_rules(rules.days, rules.min_cow_id, rules.max_cow_id)
    }

    pub fn days(&self) -> &[DayLog] {
        &self.days
    }

    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    /// Record a cow's yields on a day.
    ///
    /// Checks run in order: day index, cow id range, cow id already logged on
    /// any day, then yields. Nothing is stored unless every check passes.
    pub fn input_cow(
        &mut self,
        day: i64,
        cow_id: u32,
        morning_yield: f64,
        evening_yield: f64,
    ) -> Result<(), MilkingError> {
        let result = self.validate(day, cow_id, morning_yield, evening_yield);
        let index = match result {
            Ok(index) => index,
            Err(err) => {
                tracing::warn!(day, cow_id, error = %err, "Rejected milking record");
                return Err(err);
            }
        };

        self.days[index].milking.push(MilkRecord {
            cow_id,
            morning_yield,
            evening_yield,
        });
        tracing::info!(day = index, cow_id, morning_yield, evening_yield, "Milking record added");

        Ok(())
    }

    fn validate(&self, day: i64, cow_id: u32, morning_yield: f64, evening_yield: f64) -> Result<usize, MilkingError> {
        let index = usize::try_from(day)
            .ok()
            .filter(|d| *d < self.days.len())
            .ok_or(MilkingError::InvalidDay {
                day,
                days: self.days.len(),
            })?;

        if cow_id < self.min_cow_id || cow_id > self.max_cow_id {
            return Err(MilkingError::InvalidCowId {
                cow_id,
                min: self.min_cow_id,
                max: self.max_cow_id,
            });
        }

        if self.contains_cow(cow_id) {
            return Err(MilkingError::DuplicateCowId(cow_id));
        }

        for value in [morning_yield, evening_yield] {
            if !value.is_finite() || value < 0.0 {
                return Err(MilkingError::InvalidYield { cow_id, value });
            }
        }

        Ok(index)
    }

    /// Whether a cow id appears on any day of the week
    pub fn contains_cow(&self, cow_id: u32) -> bool {
        self.days.iter().any(|d| d.contains_cow(cow_id))
    }

    /// Flatten the week into its morning and evening yield sequences
    pub fn sum_of_milk_yields(&self) -> MilkYields {
        let records = || self.days.iter().flat_map(|d| d.milking.iter());

        let yields = MilkYields {
            morning: records().map(|r| r.morning_yield).collect(),
            evening: records().map(|r| r.evening_yield).collect(),
        };

        tracing::debug!(morning = ?yields.morning, evening = ?yields.evening, "Weekly milk yields");
        yields
    }

    /// Clear every day, keeping the schedule length and id rules
    pub fn reset(&mut self) {
        for day in &mut self.days {
            day.milking.clear();
        }
    }
}

impl Default for WeeklySchedule {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, thiserror::Error)]
pub enum MilkingError {
    #[error("Invalid day index: {day} (schedule has {days} days)")]
    InvalidDay {
        day: i64,
        days: usize,
    },

    #[error("Invalid cow id number: {cow_id} (expected {min} to {max})")]
    InvalidCowId {
        cow_id: u32,
        min: u32,
        max: u32,
    },

    #[error("Cow id {0} already exists")]
    DuplicateCowId(u32),

    #[error("Invalid yield for cow {cow_id}: {value}")]
    InvalidYield {
        cow_id: u32,
        value: f64,
    },
}

impl From<MilkingError> for tally_core::CoreError {
    fn from(err: MilkingError) -> Self {
        tally_core::CoreError::ValidationError(err.to_string())
    }
}
