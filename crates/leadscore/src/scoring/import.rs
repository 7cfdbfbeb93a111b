//! CSV lead import so exports from CRM tooling can be scored in bulk.
//!
//! Empty cells mean "absent" for optional columns; the technology stack is
//! a single semicolon-separated cell.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer};

use super::domain::{BehaviorSignals, CompanyProfile, ContactProfile, Lead, LeadId, Seniority};

#[derive(Debug, thiserror::Error)]
pub enum LeadImportError {
    #[error("failed to read lead export: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid lead CSV data: {0}")]
    Csv(#[from] csv::Error),
    #[error("row {row}: invalid {field} value '{value}'")]
    InvalidField {
        row: usize,
        field: &'static str,
        value: String,
    },
}

pub struct LeadCsvImporter;

impl LeadCsvImporter {
    pub fn from_path(path: impl AsRef<Path>) -> Result<Vec<Lead>, LeadImportError> {
        let file = File::open(path)?;
        Self::from_reader(file)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Vec<Lead>, LeadImportError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);
        let mut leads = Vec::new();

        for (index, record) in csv_reader.deserialize::<LeadRow>().enumerate() {
            // Row 1 is the header line.
            let row = index + 2;
            leads.push(record?.into_lead(row)?);
        }

        Ok(leads)
    }
}

#[derive(Debug, Deserialize)]
struct LeadRow {
    #[serde(rename = "Lead ID")]
    lead_id: String,
    #[serde(rename = "Name")]
    name: String,
    #[serde(rename = "Company")]
    company: String,
    #[serde(rename = "Company Size")]
    company_size: String,
    #[serde(rename = "Industry")]
    industry: String,
    #[serde(rename = "Funding Stage", default, deserialize_with = "empty_string_as_none")]
    funding_stage: Option<String>,
    #[serde(rename = "Annual Revenue", default, deserialize_with = "empty_string_as_none")]
    annual_revenue: Option<String>,
    #[serde(rename = "Growth Rate", default, deserialize_with = "empty_string_as_none")]
    growth_rate: Option<String>,
    #[serde(rename = "Technology Stack", default, deserialize_with = "empty_string_as_none")]
    technology_stack: Option<String>,
    #[serde(rename = "Location", default, deserialize_with = "empty_string_as_none")]
    location: Option<String>,
    #[serde(rename = "Position")]
    position: String,
    #[serde(rename = "Seniority")]
    seniority: String,
    #[serde(rename = "Department")]
    department: String,
    #[serde(rename = "Email", default, deserialize_with = "empty_string_as_none")]
    email: Option<String>,
    #[serde(rename = "Phone", default, deserialize_with = "empty_string_as_none")]
    phone: Option<String>,
    #[serde(rename = "LinkedIn URL", default, deserialize_with = "empty_string_as_none")]
    linkedin_url: Option<String>,
    #[serde(rename = "Website Visits", default, deserialize_with = "empty_string_as_none")]
    website_visits: Option<String>,
    #[serde(rename = "Content Downloads", default, deserialize_with = "empty_string_as_none")]
    content_downloads: Option<String>,
    #[serde(rename = "Email Engagement", default, deserialize_with = "empty_string_as_none")]
    email_engagement: Option<String>,
    #[serde(rename = "Social Engagement", default, deserialize_with = "empty_string_as_none")]
    social_engagement: Option<String>,
    #[serde(rename = "Event Attendance", default, deserialize_with = "empty_string_as_none")]
    event_attendance: Option<String>,
    #[serde(rename = "Source")]
    source: String,
    #[serde(rename = "Date Added")]
    date_added: String,
}

impl LeadRow {
    fn into_lead(self, row: usize) -> Result<Lead, LeadImportError> {
        let size = parse_field::<u32>(&self.company_size, row, "Company Size")?;
        let annual_revenue = parse_optional::<f64>(self.annual_revenue, row, "Annual Revenue")?;
        let growth_rate = parse_optional::<f64>(self.growth_rate, row, "Growth Rate")?;
        let website_visits = parse_optional::<u32>(self.website_visits, row, "Website Visits")?;
        let content_downloads =
            parse_optional::<u32>(self.content_downloads, row, "Content Downloads")?;
        let email_engagement =
            parse_optional::<f64>(self.email_engagement, row, "Email Engagement")?;
        let social_engagement =
            parse_optional::<f64>(self.social_engagement, row, "Social Engagement")?;
        let event_attendance = self
            .event_attendance
            .map(|value| parse_flag(&value, row, "Event Attendance"))
            .transpose()?;

        let date_added = NaiveDate::parse_from_str(&self.date_added, "%Y-%m-%d").map_err(|_| {
            LeadImportError::InvalidField {
                row,
                field: "Date Added",
                value: self.date_added.clone(),
            }
        })?;

        let technology_stack = self.technology_stack.map(|cell| {
            cell.split(';')
                .map(str::trim)
                .filter(|entry| !entry.is_empty())
                .map(str::to_string)
                .collect::<Vec<_>>()
        });

        let behavior = BehaviorSignals {
            website_visits,
            content_downloads,
            email_engagement,
            social_engagement,
            event_attendance,
        };

        Ok(Lead {
            id: LeadId(self.lead_id),
            name: self.name,
            company: CompanyProfile {
                name: self.company,
                size,
                industry: self.industry,
                funding_stage: self.funding_stage,
                annual_revenue,
                growth_rate,
                technology_stack,
                location: self.location,
            },
            contact: ContactProfile {
                position: self.position,
                seniority: Seniority::from(self.seniority),
                department: self.department,
                email: self.email,
                phone: self.phone,
                linkedin_url: self.linkedin_url,
            },
            behavior: if behavior.is_empty() {
                None
            } else {
                Some(behavior)
            },
            source: self.source,
            date_added,
        })
    }
}

fn parse_field<T: std::str::FromStr>(
    value: &str,
    row: usize,
    field: &'static str,
) -> Result<T, LeadImportError> {
    value
        .trim()
        .parse()
        .map_err(|_| LeadImportError::InvalidField {
            row,
            field,
            value: value.to_string(),
        })
}

fn parse_optional<T: std::str::FromStr>(
    value: Option<String>,
    row: usize,
    field: &'static str,
) -> Result<Option<T>, LeadImportError> {
    value
        .map(|value| parse_field(&value, row, field))
        .transpose()
}

fn parse_flag(value: &str, row: usize, field: &'static str) -> Result<bool, LeadImportError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "yes" | "1" => Ok(true),
        "false" | "no" | "0" => Ok(false),
        _ => Err(LeadImportError::InvalidField {
            row,
            field,
            value: value.to_string(),
        }),
    }
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.filter(|value| !value.trim().is_empty()))
}
