use std::io::Cursor;

use chrono::NaiveDate;

use crate::scoring::domain::Seniority;
use crate::scoring::import::{LeadCsvImporter, LeadImportError};

const HEADER: &str = "Lead ID,Name,Company,Company Size,Industry,Funding Stage,Annual Revenue,\
Growth Rate,Technology Stack,Location,Position,Seniority,Department,Email,Phone,LinkedIn URL,\
Website Visits,Content Downloads,Email Engagement,Social Engagement,Event Attendance,Source,\
Date Added";

fn import(rows: &str) -> Result<Vec<crate::scoring::Lead>, LeadImportError> {
    let csv = format!("{HEADER}\n{rows}");
    LeadCsvImporter::from_reader(Cursor::new(csv.into_bytes()))
}

#[test]
fn imports_a_fully_populated_row() {
    let leads = import(
        "LEAD-3001,Dana Liu,Northwind Cloud,750,SaaS,Series B,20000000,40,AWS; React; Kubernetes,\
Seattle,VP of Product,VP,Product,dana@northwind.example,555-0100,linkedin.com/in/danaliu,\
9,2,0.7,0.4,yes,Webinar,2024-06-01",
    )
    .expect("row imports");

    assert_eq!(leads.len(), 1);
    let lead = &leads[0];
    assert_eq!(lead.id.0, "LEAD-3001");
    assert_eq!(lead.company.size, 750);
    assert_eq!(lead.company.funding_stage.as_deref(), Some("Series B"));
    assert_eq!(lead.company.annual_revenue, Some(20_000_000.0));
    assert_eq!(
        lead.company.technology_stack.as_deref(),
        Some(
            &[
                "AWS".to_string(),
                "React".to_string(),
                "Kubernetes".to_string()
            ][..]
        )
    );
    assert_eq!(lead.contact.seniority, Seniority::Vp);

    let behavior = lead.behavior.as_ref().expect("behavior present");
    assert_eq!(behavior.website_visits, Some(9));
    assert_eq!(behavior.event_attendance, Some(true));
    assert_eq!(
        lead.date_added,
        NaiveDate::from_ymd_opt(2024, 6, 1).expect("valid date")
    );
}

#[test]
fn empty_cells_become_absent_fields() {
    let leads = import(
        "LEAD-3002,Sam Ortiz,Harbor Freight Lines,40,Transportation,,,,,,\
Dispatcher,Individual Contributor,Operations,,,,,,,,,Cold Call,2024-06-03",
    )
    .expect("row imports");

    let lead = &leads[0];
    assert_eq!(lead.company.funding_stage, None);
    assert_eq!(lead.company.annual_revenue, None);
    assert_eq!(lead.company.growth_rate, None);
    assert_eq!(lead.company.technology_stack, None);
    assert_eq!(lead.company.location, None);
    // No behavior column was populated, so the whole block is absent.
    assert!(lead.behavior.is_none());
}

#[test]
fn unknown_seniority_round_trips_as_other() {
    let leads = import(
        "LEAD-3003,Kai Moreno,Brightline Labs,90,Technology,,,,,,\
Staff Scientist,Fellow,Engineering,,,,,,,,,Referral,2024-06-04",
    )
    .expect("row imports");

    assert_eq!(
        leads[0].contact.seniority,
        Seniority::Other("Fellow".to_string())
    );
}

#[test]
fn invalid_numeric_cell_names_row_and_field() {
    let result = import(
        "LEAD-3004,Rae Patel,Summit Retail,lots,Retail,,,,,,\
Buyer,Manager,Operations,,,,,,,,,Cold Call,2024-06-05",
    );

    match result {
        Err(LeadImportError::InvalidField { row, field, value }) => {
            assert_eq!(row, 2);
            assert_eq!(field, "Company Size");
            assert_eq!(value, "lots");
        }
        other => panic!("expected invalid field error, got {other:?}"),
    }
}

#[test]
fn invalid_date_is_rejected() {
    let result = import(
        "LEAD-3005,Noa Berg,Atlas Media,60,Media,,,,,,\
Editor,Manager,Marketing,,,,,,,,,Newsletter,06/01/2024",
    );

    match result {
        Err(LeadImportError::InvalidField { field, .. }) => assert_eq!(field, "Date Added"),
        other => panic!("expected invalid date error, got {other:?}"),
    }
}
