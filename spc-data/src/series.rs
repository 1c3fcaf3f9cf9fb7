use crate::month::Month;
use crate::record::PriceRecord;
use crate::selection::Selection;

/// Filter a dataset down to the records matching the active selection.
///
/// A record survives when its company equals the selected company, its
/// date falls in the selected calendar month, and both prices are present
/// and finite. Input order is preserved and the source slice is untouched;
/// records dropped for missing prices are dropped silently.
pub fn filter_series(records: &[PriceRecord], selection: Selection) -> Vec<PriceRecord> {
    records
        .iter()
        .filter(|record| record.company == selection.company)
        .filter(|record| Month::of(record.date) == selection.month)
        .filter(|record| record.has_prices())
        .cloned()
        .collect()
}

#[cfg(test)]
mod test {
    use super::filter_series;
    use crate::company::Company;
    use crate::month::Month;
    use crate::record::PriceRecord;
    use crate::selection::Selection;
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn record(company: Company, y: i32, m: u32, d: u32) -> PriceRecord {
        PriceRecord::new(date(y, m, d), company, Some(150.0), Some(152.0))
    }

    fn selection(company: Company, month: Month) -> Selection {
        Selection { company, month }
    }

    #[test]
    fn test_only_matching_records_survive() {
        let records = vec![
            record(Company::Apple, 2023, 11, 3),
            record(Company::Microsoft, 2023, 11, 3),
            record(Company::Apple, 2023, 12, 1),
            record(Company::Apple, 2023, 11, 7),
        ];
        let filtered = filter_series(&records, selection(Company::Apple, Month::November));
        assert_eq!(filtered.len(), 2);
        for r in &filtered {
            assert_eq!(r.company, Company::Apple);
            assert_eq!(Month::of(r.date), Month::November);
            assert!(r.has_prices());
        }
    }

    #[test]
    fn test_input_order_preserved() {
        let records = vec![
            record(Company::Apple, 2023, 11, 7),
            record(Company::Apple, 2023, 11, 3),
            record(Company::Apple, 2023, 11, 5),
        ];
        let filtered = filter_series(&records, selection(Company::Apple, Month::November));
        let days: Vec<u32> = filtered
            .iter()
            .map(|r| chrono::Datelike::day(&r.date))
            .collect();
        assert_eq!(days, vec![7, 3, 5]);
    }

    #[test]
    fn test_filtering_is_idempotent() {
        let records = vec![
            record(Company::Apple, 2023, 11, 3),
            record(Company::Google, 2023, 11, 3),
            PriceRecord::new(date(2023, 11, 4), Company::Apple, Some(150.0), None),
        ];
        let sel = selection(Company::Apple, Month::November);
        let once = filter_series(&records, sel);
        let twice = filter_series(&once, sel);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_source_dataset_untouched() {
        let records = vec![
            record(Company::Apple, 2023, 11, 3),
            record(Company::Meta, 2023, 6, 9),
        ];
        let snapshot = records.clone();
        let _ = filter_series(&records, selection(Company::Apple, Month::November));
        let _ = filter_series(&records, selection(Company::Meta, Month::June));
        assert_eq!(records, snapshot);
    }

    #[test]
    fn test_single_record_scenario() {
        // One Apple record on 2023-11-05: present for (Apple, November),
        // absent for (Apple, December).
        let records = vec![record(Company::Apple, 2023, 11, 5)];
        let november = filter_series(&records, selection(Company::Apple, Month::November));
        assert_eq!(november.len(), 1);
        let december = filter_series(&records, selection(Company::Apple, Month::December));
        assert!(december.is_empty());
    }

    #[test]
    fn test_missing_close_excluded() {
        let records = vec![PriceRecord::new(
            date(2023, 11, 5),
            Company::Apple,
            Some(150.0),
            None,
        )];
        let filtered = filter_series(&records, selection(Company::Apple, Month::November));
        assert!(filtered.is_empty());
    }

    #[test]
    fn test_empty_dataset() {
        for company in Company::ALL {
            let filtered = filter_series(&[], selection(company, Month::January));
            assert!(filtered.is_empty());
        }
    }
}
