//! Record types for the three dataset propositions.
//!
//! Each proposition carries its own struct so the "which fields exist for
//! which mode" invariant is checked by the compiler rather than by
//! convention. Field declaration order doubles as the CSV column order,
//! with the original camelCase wire names kept in [`TabularRecord::FIELDS`].

use std::fmt;

/// One of the three fixed dataset variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    Basic,
    Advanced,
    Premium,
}

impl Mode {
    pub const ALL: [Mode; 3] = [Mode::Basic, Mode::Advanced, Mode::Premium];

    /// Parses a mode name as given on the CLI or in the config file.
    /// The original dataset identifiers are accepted as aliases.
    #[must_use]
    pub fn from_string(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "basic" | "proposition1" => Some(Self::Basic),
            "advanced" | "proposition2" => Some(Self::Advanced),
            "premium" | "proposition3" => Some(Self::Premium),
            _ => None,
        }
    }

    #[must_use]
    pub fn cli_name(&self) -> &'static str {
        match self {
            Self::Basic => "basic",
            Self::Advanced => "advanced",
            Self::Premium => "premium",
        }
    }

    /// Identifier used in the export filename (`all_sector_<slug>.csv`).
    #[must_use]
    pub fn file_slug(&self) -> &'static str {
        match self {
            Self::Basic => "proposition1",
            Self::Advanced => "proposition2",
            Self::Premium => "proposition3",
        }
    }

    /// Dataset headline shown above the prospect table.
    #[must_use]
    pub fn title(&self) -> &'static str {
        match self {
            Self::Basic => "Proposition 1 - Basic IT Infrastructure",
            Self::Advanced => "Proposition 2 - Advanced IT Infrastructure & Support",
            Self::Premium => "Proposition 3 - Premium with Financial & Commercial Insights",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.cli_name())
    }
}

/// A record that can be serialized into CSV: wire names in column order
/// plus the parallel list of values for one row.
pub trait TabularRecord {
    const FIELDS: &'static [&'static str];

    fn field_values(&self) -> Vec<&str>;
}

/// Accessors shared by all three record variants, for the aggregate and
/// view code that does not care which proposition a record came from.
pub trait CustomerRecord {
    fn company_name(&self) -> &str;
    fn company_size(&self) -> &str;
    fn industry_area(&self) -> &str;
    fn annual_revenue(&self) -> &str;
    fn key_contact(&self) -> &str;
    fn email_address(&self) -> &str;
    fn number_of_endpoints(&self) -> &str;
    fn number_of_servers(&self) -> &str;
}

/// Proposition 1: identity, contact, and the basic infrastructure trio.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BasicRecord {
    pub customer_name: &'static str,
    pub company_name: &'static str,
    pub company_size: &'static str,
    pub industry_area: &'static str,
    pub annual_revenue: &'static str,
    pub geographics_footprint: &'static str,
    pub key_contact: &'static str,
    pub designation: &'static str,
    pub email_address: &'static str,
    pub phone_whatsapp: &'static str,
    pub linkedin_profile: &'static str,
    pub website_url: &'static str,
    pub number_of_endpoints: &'static str,
    pub number_of_servers: &'static str,
    pub cloud_footprint: &'static str,
}

/// Proposition 2: Basic plus the full infrastructure landscape and the
/// current IT support setup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AdvancedRecord {
    pub customer_name: &'static str,
    pub company_name: &'static str,
    pub company_size: &'static str,
    pub industry_area: &'static str,
    pub annual_revenue: &'static str,
    pub geographics_footprint: &'static str,
    pub key_contact: &'static str,
    pub designation: &'static str,
    pub email_address: &'static str,
    pub phone_whatsapp: &'static str,
    pub linkedin_profile: &'static str,
    pub website_url: &'static str,
    pub number_of_endpoints: &'static str,
    pub number_of_servers: &'static str,
    pub cloud_footprint: &'static str,
    pub data_center_details: &'static str,
    pub network_size: &'static str,
    pub existing_security_stack: &'static str,
    pub presence_of_internal_it: &'static str,
    pub existing_msp_vendor: &'static str,
    pub current_slas_and_support_hours: &'static str,
}

/// Proposition 3: financial and commercial datapoints on top of the
/// infrastructure block. Carries no `presenceOfInternalIT` column; that
/// is the original schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PremiumRecord {
    pub customer_name: &'static str,
    pub company_name: &'static str,
    pub company_size: &'static str,
    pub industry_area: &'static str,
    pub annual_revenue: &'static str,
    pub geographics_footprint: &'static str,
    pub key_contact: &'static str,
    pub designation: &'static str,
    pub email_address: &'static str,
    pub phone_whatsapp: &'static str,
    pub linkedin_profile: &'static str,
    pub website_url: &'static str,
    pub number_of_endpoints: &'static str,
    pub number_of_servers: &'static str,
    pub cloud_footprint: &'static str,
    pub data_center_details: &'static str,
    pub network_size: &'static str,
    pub existing_security_stack: &'static str,
    pub it_budget_approx: &'static str,
    pub existing_msp_vendor: &'static str,
    pub current_slas_and_support_hours: &'static str,
    pub pain_points_with_existing_it: &'static str,
    pub average_downtime_incidents: &'static str,
    pub existing_monitoring_tools: &'static str,
    pub current_it_spend: &'static str,
    pub current_msp_contract_value: &'static str,
    pub pricing_preferences: &'static str,
    pub renewal_contract_timeline: &'static str,
    pub budget_available_for_outsourcing: &'static str,
    pub customer_benchmarking_summary: &'static str,
    pub additional_commercial_notes: &'static str,
}

impl TabularRecord for BasicRecord {
    const FIELDS: &'static [&'static str] = &[
        "customerName",
        "companyName",
        "companySize",
        "industryArea",
        "annualRevenue",
        "geographicsFootprint",
        "keyContact",
        "designation",
        "emailAddress",
        "phoneWhatsApp",
        "linkedinProfile",
        "websiteURL",
        "numberOfEndpoints",
        "numberOfServers",
        "cloudFootprint",
    ];

    fn field_values(&self) -> Vec<&str> {
        vec![
            self.customer_name,
            self.company_name,
            self.company_size,
            self.industry_area,
            self.annual_revenue,
            self.geographics_footprint,
            self.key_contact,
            self.designation,
            self.email_address,
            self.phone_whatsapp,
            self.linkedin_profile,
            self.website_url,
            self.number_of_endpoints,
            self.number_of_servers,
            self.cloud_footprint,
        ]
    }
}

impl TabularRecord for AdvancedRecord {
    const FIELDS: &'static [&'static str] = &[
        "customerName",
        "companyName",
        "companySize",
        "industryArea",
        "annualRevenue",
        "geographicsFootprint",
        "keyContact",
        "designation",
        "emailAddress",
        "phoneWhatsApp",
        "linkedinProfile",
        "websiteURL",
        "numberOfEndpoints",
        "numberOfServers",
        "cloudFootprint",
        "dataCenterDetails",
        "networkSize",
        "existingSecurityStack",
        "presenceOfInternalIT",
        "existingMSPVendor",
        "currentSLAsAndSupportHours",
    ];

    fn field_values(&self) -> Vec<&str> {
        vec![
            self.customer_name,
            self.company_name,
            self.company_size,
            self.industry_area,
            self.annual_revenue,
            self.geographics_footprint,
            self.key_contact,
            self.designation,
            self.email_address,
            self.phone_whatsapp,
            self.linkedin_profile,
            self.website_url,
            self.number_of_endpoints,
            self.number_of_servers,
            self.cloud_footprint,
            self.data_center_details,
            self.network_size,
            self.existing_security_stack,
            self.presence_of_internal_it,
            self.existing_msp_vendor,
            self.current_slas_and_support_hours,
        ]
    }
}

impl TabularRecord for PremiumRecord {
    const FIELDS: &'static [&'static str] = &[
        "customerName",
        "companyName",
        "companySize",
        "industryArea",
        "annualRevenue",
        "geographicsFootprint",
        "keyContact",
        "designation",
        "emailAddress",
        "phoneWhatsApp",
        "linkedinProfile",
        "websiteURL",
        "numberOfEndpoints",
        "numberOfServers",
        "cloudFootprint",
        "dataCenterDetails",
        "networkSize",
        "existingSecurityStack",
        "itBudgetApprox",
        "existingMSPVendor",
        "currentSLAsAndSupportHours",
        "painPointsWithExistingIT",
        "averageDowntimeIncidents",
        "existingMonitoringTools",
        "currentITSpend",
        "currentMSPContractValue",
        "pricingPreferences",
        "renewalContractTimeline",
        "budgetAvailableForOutsourcing",
        "customerBenchmarkingSummary",
        "additionalCommercialNotes",
    ];

    fn field_values(&self) -> Vec<&str> {
        vec![
            self.customer_name,
            self.company_name,
            self.company_size,
            self.industry_area,
            self.annual_revenue,
            self.geographics_footprint,
            self.key_contact,
            self.designation,
            self.email_address,
            self.phone_whatsapp,
            self.linkedin_profile,
            self.website_url,
            self.number_of_endpoints,
            self.number_of_servers,
            self.cloud_footprint,
            self.data_center_details,
            self.network_size,
            self.existing_security_stack,
            self.it_budget_approx,
            self.existing_msp_vendor,
            self.current_slas_and_support_hours,
            self.pain_points_with_existing_it,
            self.average_downtime_incidents,
            self.existing_monitoring_tools,
            self.current_it_spend,
            self.current_msp_contract_value,
            self.pricing_preferences,
            self.renewal_contract_timeline,
            self.budget_available_for_outsourcing,
            self.customer_benchmarking_summary,
            self.additional_commercial_notes,
        ]
    }
}

macro_rules! impl_customer_record {
    ($($ty:ty),+) => {
        $(impl CustomerRecord for $ty {
            fn company_name(&self) -> &str {
                self.company_name
            }
            fn company_size(&self) -> &str {
                self.company_size
            }
            fn industry_area(&self) -> &str {
                self.industry_area
            }
            fn annual_revenue(&self) -> &str {
                self.annual_revenue
            }
            fn key_contact(&self) -> &str {
                self.key_contact
            }
            fn email_address(&self) -> &str {
                self.email_address
            }
            fn number_of_endpoints(&self) -> &str {
                self.number_of_endpoints
            }
            fn number_of_servers(&self) -> &str {
                self.number_of_servers
            }
        })+
    };
}

impl_customer_record!(BasicRecord, AdvancedRecord, PremiumRecord);

/// The record list for one mode, tagged so callers holding only a [`Mode`]
/// can reach "the records" without going generic.
#[derive(Debug, Clone, Copy)]
pub enum RecordSet {
    Basic(&'static [BasicRecord]),
    Advanced(&'static [AdvancedRecord]),
    Premium(&'static [PremiumRecord]),
}

impl RecordSet {
    #[must_use]
    pub fn mode(&self) -> Mode {
        match self {
            Self::Basic(_) => Mode::Basic,
            Self::Advanced(_) => Mode::Advanced,
            Self::Premium(_) => Mode::Premium,
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::Basic(records) => records.len(),
            Self::Advanced(records) => records.len(),
            Self::Premium(records) => records.len(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Mode-agnostic view of the records, in declaration order.
    #[must_use]
    pub fn customers(&self) -> Vec<&dyn CustomerRecord> {
        match self {
            Self::Basic(records) => records.iter().map(|r| r as &dyn CustomerRecord).collect(),
            Self::Advanced(records) => records.iter().map(|r| r as &dyn CustomerRecord).collect(),
            Self::Premium(records) => records.iter().map(|r| r as &dyn CustomerRecord).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_parsing() {
        assert_eq!(Mode::from_string("basic"), Some(Mode::Basic));
        assert_eq!(Mode::from_string("ADVANCED"), Some(Mode::Advanced));
        assert_eq!(Mode::from_string("proposition3"), Some(Mode::Premium));
        assert_eq!(Mode::from_string("proposition2"), Some(Mode::Advanced));
        assert_eq!(Mode::from_string("platinum"), None);
        assert_eq!(Mode::from_string(""), None);
    }

    #[test]
    fn test_mode_file_slug() {
        assert_eq!(Mode::Basic.file_slug(), "proposition1");
        assert_eq!(Mode::Advanced.file_slug(), "proposition2");
        assert_eq!(Mode::Premium.file_slug(), "proposition3");
    }

    #[test]
    fn test_field_lists_match_value_lists() {
        let basic = crate::store::basic()[0];
        assert_eq!(basic.field_values().len(), BasicRecord::FIELDS.len());

        let advanced = crate::store::advanced()[0];
        assert_eq!(advanced.field_values().len(), AdvancedRecord::FIELDS.len());

        let premium = crate::store::premium()[0];
        assert_eq!(premium.field_values().len(), PremiumRecord::FIELDS.len());
    }

    #[test]
    fn test_field_counts_per_mode() {
        assert_eq!(BasicRecord::FIELDS.len(), 15);
        assert_eq!(AdvancedRecord::FIELDS.len(), 21);
        assert_eq!(PremiumRecord::FIELDS.len(), 31);
    }
}
