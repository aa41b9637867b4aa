#[cfg(test)]
mod tests {
    use crate::assets::{AssetStatus, FixedAsset};
    use crate::projects::Project;
    use crate::valuation::{valuate_records, RecordKind};
    use chrono::{DateTime, NaiveDate, TimeZone, Utc};
    use rust_decimal_macros::dec;

    fn instant(y: i32, m: u32, d: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, 0, 0, 0).unwrap()
    }

    fn asset(id: &str, category_id: &str) -> FixedAsset {
        FixedAsset {
            id: id.to_string(),
            name: format!("Asset {}", id),
            category_id: category_id.to_string(),
            original_value: dec!(12000),
            salvage_value: dec!(0),
            purchase_date: NaiveDate::from_ymd_opt(2023, 1, 1).unwrap(),
            useful_life_years: 5,
            depreciation_method: "STRAIGHT_LINE".to_string(),
            status: AssetStatus::InUse,
            notes: None,
        }
    }

    fn project(id: &str, category_id: &str) -> Project {
        Project {
            id: id.to_string(),
            name: format!("Project {}", id),
            category_id: category_id.to_string(),
            total_amount: dec!(1000),
            start_time: instant(2024, 1, 1),
            end_time: instant(2024, 1, 11),
            purchase_time: None,
            notes: None,
        }
    }

    #[test]
    fn enriches_both_record_kinds() {
        let assets = vec![asset("a1", "cat-1")];
        let projects = vec![project("p1", "cat-2")];

        let batch = valuate_records(&assets, &projects, instant(2024, 1, 6));

        assert_eq!(batch.valuations.len(), 2);
        assert!(batch.skipped.is_empty());
        assert_eq!(batch.as_of_date, NaiveDate::from_ymd_opt(2024, 1, 6).unwrap());

        let a = &batch.valuations[0];
        assert_eq!(a.kind, RecordKind::FixedAsset);
        assert_eq!(a.original_amount, dec!(12000.00));
        assert_eq!(a.consumed_amount, dec!(2400.00));
        assert_eq!(a.current_value, dec!(9600.00));
        assert_eq!(a.status, "IN_USE");

        let p = &batch.valuations[1];
        assert_eq!(p.kind, RecordKind::Project);
        assert_eq!(p.consumed_amount, dec!(500.00));
        assert_eq!(p.current_value, dec!(500.00));
        assert_eq!(p.status, "ACTIVE");
    }

    #[test]
    fn bad_record_is_skipped_not_fatal() {
        let mut bad = asset("a-bad", "cat-1");
        bad.useful_life_years = 0;
        let assets = vec![asset("a1", "cat-1"), bad];

        let mut bad_project = project("p-bad", "cat-2");
        bad_project.end_time = bad_project.start_time;
        let projects = vec![bad_project, project("p1", "cat-2")];

        let batch = valuate_records(&assets, &projects, instant(2024, 1, 6));

        assert_eq!(batch.valuations.len(), 2);
        assert_eq!(batch.skipped.len(), 2);
        assert_eq!(batch.skipped[0].record_id, "a-bad");
        assert_eq!(batch.skipped[0].kind, RecordKind::FixedAsset);
        assert_eq!(batch.skipped[1].record_id, "p-bad");
        assert!(batch.skipped[1].reason.contains("non-positive"));
    }

    #[test]
    fn empty_batch_is_valid() {
        let batch = valuate_records(&[], &[], instant(2024, 1, 6));
        assert!(batch.valuations.is_empty());
        assert!(batch.skipped.is_empty());
    }
}
