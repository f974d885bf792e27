//! Round-trip the hand-rolled CSV writer through a real CSV parser.

use sectorscope::export::{export_csv, to_csv};
use sectorscope::record::{BasicRecord, Mode, TabularRecord};

fn custom_record(company: &'static str, revenue: &'static str) -> BasicRecord {
    BasicRecord {
        customer_name: "Jane Doe",
        company_name: company,
        company_size: "SME",
        industry_area: "Testing",
        annual_revenue: revenue,
        geographics_footprint: "Nowhere",
        key_contact: "J. Doe",
        designation: "CTO",
        email_address: "jane@example.com",
        phone_whatsapp: "+1-555-0000",
        linkedin_profile: "linkedin.com/in/janedoe",
        website_url: "www.example.com",
        number_of_endpoints: "10",
        number_of_servers: "2",
        cloud_footprint: "none",
    }
}

#[test]
fn test_awkward_values_round_trip() {
    let records = [
        custom_record("Comma, Inc", "$1M"),
        custom_record("Quote \"Co\"", "He said \"hi\", then left"),
        custom_record("Multi\nLine Ltd", "$2M\n(approx)"),
    ];
    let csv = to_csv(&records).unwrap();

    let mut reader = csv::ReaderBuilder::new().from_reader(csv.as_bytes());
    let headers = reader.headers().unwrap().clone();
    assert_eq!(
        headers.iter().collect::<Vec<_>>(),
        BasicRecord::FIELDS.to_vec()
    );

    let parsed: Vec<csv::StringRecord> = reader.records().map(|r| r.unwrap()).collect();
    assert_eq!(parsed.len(), records.len());
    for (row, record) in parsed.iter().zip(&records) {
        let expected = record.field_values();
        assert_eq!(row.len(), expected.len());
        for (cell, value) in row.iter().zip(expected) {
            assert_eq!(cell, value);
        }
    }
}

#[test]
fn test_full_dataset_round_trips() {
    for mode in Mode::ALL {
        let export = export_csv(mode).unwrap();
        let mut reader = csv::ReaderBuilder::new().from_reader(export.content.as_bytes());
        let rows: Vec<csv::StringRecord> = reader.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 20, "mode {mode}");
    }
}

#[test]
fn test_premium_export_preserves_values() {
    let export = export_csv(Mode::Premium).unwrap();
    let mut reader = csv::ReaderBuilder::new().from_reader(export.content.as_bytes());
    let first = reader.records().next().unwrap().unwrap();
    assert_eq!(&first[1], "Global Bank Corp");
    assert_eq!(&first[18], "$45M annually");
}
