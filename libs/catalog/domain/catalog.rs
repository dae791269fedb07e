//! Sport, category and competition rows of the catalog

/// A sport with its derived live-time statistic
#[derive(Debug, Clone, PartialEq)]
pub struct Sport {
    name: String,
    key: String,
    /// Average live duration in milliseconds; NaN when no event qualifies
    live_time: f64,
}

impl Sport {
    pub fn new(name: impl Into<String>, key: impl Into<String>, live_time: f64) -> Self {
        Self {
            name: name.into(),
            key: key.into(),
            live_time,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Average live duration in milliseconds. NaN means "no data".
    pub fn live_time(&self) -> f64 {
        self.live_time
    }

    pub fn has_live_time(&self) -> bool {
        !self.live_time.is_nan()
    }

    pub fn set_live_time(&mut self, live_time: f64) {
        self.live_time = live_time;
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    name: String,
    key: String,
}

impl Category {
    pub fn new(name: impl Into<String>, key: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            key: key.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn key(&self) -> &str {
        &self.key
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Competition {
    name: String,
    key: String,
}

impl Competition {
    pub fn new(name: impl Into<String>, key: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            key: key.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn key(&self) -> &str {
        &self.key
    }
}
