use chrono::Utc;

use super::error::FaktorError;
use super::types::Service;

/// Invoice number generator producing `{prefix}{year}-{n}`, e.g.
/// `INV-1403-001`.
///
/// Uniqueness across an owner's stored invoices is the storage layer's job;
/// [`resume_after`](Self::resume_after) continues after the highest number
/// already issued so a fresh session does not reuse one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvoiceNumberSequence {
    prefix: String,
    year: i32,
    last_issued: u64,
    width: usize,
}

impl InvoiceNumberSequence {
    /// A sequence whose first number is 1.
    pub fn new(prefix: impl Into<String>, year: i32) -> Self {
        Self {
            prefix: prefix.into(),
            year,
            last_issued: 0,
            width: 3,
        }
    }

    /// Zero-padding width of the counter (default 3).
    pub fn with_width(mut self, width: usize) -> Self {
        self.width = width;
        self
    }

    /// Continue after the highest counter found among `existing` numbers of
    /// this prefix and year. Numbers of other years or prefixes are ignored.
    pub fn resume_after<'a>(mut self, existing: impl IntoIterator<Item = &'a str>) -> Self {
        let highest = existing
            .into_iter()
            .filter_map(|n| self.counter_of(n))
            .max()
            .unwrap_or(0);
        self.last_issued = self.last_issued.max(highest);
        self
    }

    /// Issue the next number.
    pub fn issue(&mut self) -> Result<String, FaktorError> {
        let next = self.next_counter()?;
        self.last_issued = next;
        Ok(self.render(next))
    }

    /// The number [`issue`](Self::issue) would return, without consuming it.
    pub fn peek(&self) -> Result<String, FaktorError> {
        Ok(self.render(self.next_counter()?))
    }

    fn next_counter(&self) -> Result<u64, FaktorError> {
        self.last_issued.checked_add(1).ok_or_else(|| {
            FaktorError::Numbering(format!(
                "counter for {}{} is exhausted",
                self.prefix, self.year
            ))
        })
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    /// Switch to a later year; the counter restarts at 1.
    pub fn advance_year(&mut self, year: i32) -> Result<(), FaktorError> {
        if year <= self.year {
            return Err(FaktorError::Numbering(format!(
                "year {year} is not after current year {}",
                self.year
            )));
        }
        self.year = year;
        self.last_issued = 0;
        Ok(())
    }

    /// Counter part of `number` if it belongs to this prefix and year.
    pub fn counter_of(&self, number: &str) -> Option<u64> {
        let rest = number.trim().strip_prefix(self.prefix.as_str())?;
        let counter = rest.strip_prefix(&format!("{}-", self.year))?;
        if counter.is_empty() || !counter.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        counter.parse().ok()
    }

    fn render(&self, n: u64) -> String {
        format!(
            "{}{}-{:0>width$}",
            self.prefix,
            self.year,
            n,
            width = self.width
        )
    }
}

/// Source of service ids, unique within an invoice and strictly increasing.
///
/// Ids may be derived from a millisecond clock; a clock that stalls or runs
/// backwards still yields increasing ids.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ServiceIdSource {
    last: u64,
}

impl ServiceIdSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Continue after `last`, e.g. a high-water mark kept by storage.
    pub fn starting_after(last: u64) -> Self {
        Self { last }
    }

    /// Continue after the highest id already present in `services`.
    pub fn after(services: &[Service]) -> Self {
        Self::starting_after(services.iter().map(|s| s.id).max().unwrap_or(0))
    }

    /// Next counter id.
    pub fn next_id(&mut self) -> Result<u64, FaktorError> {
        self.last = self.successor()?;
        Ok(self.last)
    }

    /// Next id derived from `now_millis`, bumped past the previous id if the
    /// clock has not advanced.
    pub fn next_at(&mut self, now_millis: u64) -> Result<u64, FaktorError> {
        self.last = now_millis.max(self.successor()?);
        Ok(self.last)
    }

    /// Next id derived from the system clock.
    pub fn next_timestamped(&mut self) -> Result<u64, FaktorError> {
        let now = u64::try_from(Utc::now().timestamp_millis()).unwrap_or(0);
        self.next_at(now)
    }

    fn successor(&self) -> Result<u64, FaktorError> {
        self.last
            .checked_add(1)
            .ok_or_else(|| FaktorError::Numbering(format!("no service id after {}", self.last)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn sequential_numbering() {
        let mut seq = InvoiceNumberSequence::new("INV-", 1403);
        assert_eq!(seq.issue().unwrap(), "INV-1403-001");
        assert_eq!(seq.issue().unwrap(), "INV-1403-002");
    }

    #[test]
    fn peek_does_not_consume() {
        let mut seq = InvoiceNumberSequence::new("INV-", 1403);
        assert_eq!(seq.peek().unwrap(), "INV-1403-001");
        assert_eq!(seq.peek().unwrap(), "INV-1403-001");
        assert_eq!(seq.issue().unwrap(), "INV-1403-001");
        assert_eq!(seq.peek().unwrap(), "INV-1403-002");
    }

    #[test]
    fn resumes_after_highest_existing() {
        let existing = [
            "INV-1403-007",
            "INV-1403-012",
            "INV-1402-090",
            "Q-1403-500",
            "INV-1403-x",
        ];
        let mut seq = InvoiceNumberSequence::new("INV-", 1403).resume_after(existing);
        assert_eq!(seq.issue().unwrap(), "INV-1403-013");
    }

    #[test]
    fn counter_grows_past_width() {
        let mut seq = InvoiceNumberSequence::new("F", 1403)
            .with_width(2)
            .resume_after(["F1403-99"]);
        assert_eq!(seq.issue().unwrap(), "F1403-100");
    }

    #[test]
    fn year_advance() {
        let mut seq = InvoiceNumberSequence::new("INV-", 1403);
        seq.issue().unwrap();
        seq.advance_year(1404).unwrap();
        assert_eq!(seq.issue().unwrap(), "INV-1404-001");
        assert!(seq.advance_year(1404).is_err());
        assert!(seq.advance_year(1399).is_err());
    }

    #[test]
    fn counter_ids_increase() {
        let mut ids = ServiceIdSource::new();
        assert_eq!(ids.next_id().unwrap(), 1);
        assert_eq!(ids.next_id().unwrap(), 2);
    }

    #[test]
    fn timestamp_ids_survive_clock_regression() {
        let mut ids = ServiceIdSource::new();
        assert_eq!(ids.next_at(1_700_000_000_000).unwrap(), 1_700_000_000_000);
        assert_eq!(ids.next_at(1_700_000_000_000).unwrap(), 1_700_000_000_001);
        assert_eq!(ids.next_at(1_699_999_999_000).unwrap(), 1_700_000_000_002);
        assert_eq!(ids.next_at(1_700_000_000_500).unwrap(), 1_700_000_000_500);
    }

    #[test]
    fn resumes_after_existing_services() {
        let services = [
            Service {
                id: 41,
                description: "Design".into(),
                additional_description: None,
                quantity: dec!(1),
                price: dec!(100),
            },
            Service {
                id: 7,
                description: "Print".into(),
                additional_description: None,
                quantity: dec!(1),
                price: dec!(100),
            },
        ];
        assert_eq!(ServiceIdSource::after(&services).next_id().unwrap(), 42);
    }

    #[test]
    fn exhausted_counter_is_an_error() {
        let last = format!("INV-1403-{}", u64::MAX);
        let mut seq = InvoiceNumberSequence::new("INV-", 1403).resume_after([last.as_str()]);
        assert!(matches!(seq.peek(), Err(FaktorError::Numbering(_))));
        assert!(matches!(seq.issue(), Err(FaktorError::Numbering(_))));
        // A new year starts a fresh counter.
        seq.advance_year(1404).unwrap();
        assert_eq!(seq.issue().unwrap(), "INV-1404-001");
    }

    #[test]
    fn last_counter_value_is_still_issued() {
        let last = format!("INV-1403-{}", u64::MAX - 1);
        let mut seq = InvoiceNumberSequence::new("INV-", 1403).resume_after([last.as_str()]);
        assert_eq!(seq.issue().unwrap(), format!("INV-1403-{}", u64::MAX));
        assert!(seq.issue().is_err());
    }

    #[test]
    fn exhausted_ids_are_an_error() {
        let mut ids = ServiceIdSource::starting_after(u64::MAX - 1);
        assert_eq!(ids.next_id().unwrap(), u64::MAX);
        assert!(matches!(ids.next_id(), Err(FaktorError::Numbering(_))));
        assert!(matches!(ids.next_at(u64::MAX), Err(FaktorError::Numbering(_))));
        assert!(ids.next_timestamped().is_err());
    }

    #[test]
    fn clock_at_max_is_used_once() {
        let mut ids = ServiceIdSource::new();
        assert_eq!(ids.next_at(u64::MAX).unwrap(), u64::MAX);
        assert!(ids.next_at(0).is_err());
    }
}
