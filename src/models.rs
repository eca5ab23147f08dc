use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Assignee used when a payload omits `assignedTo` or sends it blank.
pub const DEFAULT_ASSIGNEE: &str = "Anurag Mishra";

// ============ Enumerations ============
//
// Each pipeline enumeration is a closed sum type. The wire strings are the
// exact display values; matching is case-sensitive ("website" is not
// "Website") and `from_wire` is the single place they are parsed, shared by
// the validation engine and the row decoder.

/// Where the lead came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LeadSource {
    Website,
    Ad,
    Referral,
    Event,
    Other,
    #[serde(rename = "Social Media")]
    SocialMedia,
    #[serde(rename = "Cold Call")]
    ColdCall,
    #[serde(rename = "Email Campaign")]
    EmailCampaign,
}

impl LeadSource {
    pub const ALL: [&'static str; 8] = [
        "Website",
        "Ad",
        "Referral",
        "Event",
        "Other",
        "Social Media",
        "Cold Call",
        "Email Campaign",
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            LeadSource::Website => "Website",
            LeadSource::Ad => "Ad",
            LeadSource::Referral => "Referral",
            LeadSource::Event => "Event",
            LeadSource::Other => "Other",
            LeadSource::SocialMedia => "Social Media",
            LeadSource::ColdCall => "Cold Call",
            LeadSource::EmailCampaign => "Email Campaign",
        }
    }

    pub fn from_wire(value: &str) -> Option<Self> {
        match value {
            "Website" => Some(LeadSource::Website),
            "Ad" => Some(LeadSource::Ad),
            "Referral" => Some(LeadSource::Referral),
            "Event" => Some(LeadSource::Event),
            "Other" => Some(LeadSource::Other),
            "Social Media" => Some(LeadSource::SocialMedia),
            "Cold Call" => Some(LeadSource::ColdCall),
            "Email Campaign" => Some(LeadSource::EmailCampaign),
            _ => None,
        }
    }
}

impl Default for LeadSource {
    fn default() -> Self {
        LeadSource::Website
    }
}

/// Position of the lead in the pipeline.
///
/// No transition graph is enforced; any status may be set at any time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LeadStatus {
    New,
    Qualified,
    Converted,
    #[serde(rename = "Follow-Up")]
    FollowUp,
    Lost,
}

impl LeadStatus {
    pub const ALL: [&'static str; 5] = ["New", "Qualified", "Converted", "Follow-Up", "Lost"];

    pub fn as_str(&self) -> &'static str {
        match self {
            LeadStatus::New => "New",
            LeadStatus::Qualified => "Qualified",
            LeadStatus::Converted => "Converted",
            LeadStatus::FollowUp => "Follow-Up",
            LeadStatus::Lost => "Lost",
        }
    }

    pub fn from_wire(value: &str) -> Option<Self> {
        match value {
            "New" => Some(LeadStatus::New),
            "Qualified" => Some(LeadStatus::Qualified),
            "Converted" => Some(LeadStatus::Converted),
            "Follow-Up" => Some(LeadStatus::FollowUp),
            "Lost" => Some(LeadStatus::Lost),
            _ => None,
        }
    }
}

impl Default for LeadStatus {
    fn default() -> Self {
        LeadStatus::New
    }
}

/// Highest education level of the lead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Qualification {
    #[serde(rename = "High School")]
    HighSchool,
    Bachelors,
    Masters,
    #[serde(rename = "PhD")]
    Phd,
    Other,
}

impl Qualification {
    pub const ALL: [&'static str; 5] = ["High School", "Bachelors", "Masters", "PhD", "Other"];

    pub fn as_str(&self) -> &'static str {
        match self {
            Qualification::HighSchool => "High School",
            Qualification::Bachelors => "Bachelors",
            Qualification::Masters => "Masters",
            Qualification::Phd => "PhD",
            Qualification::Other => "Other",
        }
    }

    pub fn from_wire(value: &str) -> Option<Self> {
        match value {
            "High School" => Some(Qualification::HighSchool),
            "Bachelors" => Some(Qualification::Bachelors),
            "Masters" => Some(Qualification::Masters),
            "PhD" => Some(Qualification::Phd),
            "Other" => Some(Qualification::Other),
            _ => None,
        }
    }
}

impl Default for Qualification {
    fn default() -> Self {
        Qualification::Bachelors
    }
}

/// Course track the lead is interested in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Interest {
    #[serde(rename = "Web Development")]
    WebDevelopment,
    #[serde(rename = "Mobile Development")]
    MobileDevelopment,
    #[serde(rename = "Data Science")]
    DataScience,
    #[serde(rename = "Digital Marketing")]
    DigitalMarketing,
    #[serde(rename = "UI/UX Design")]
    UiUxDesign,
    Other,
}

impl Interest {
    pub const ALL: [&'static str; 6] = [
        "Web Development",
        "Mobile Development",
        "Data Science",
        "Digital Marketing",
        "UI/UX Design",
        "Other",
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Interest::WebDevelopment => "Web Development",
            Interest::MobileDevelopment => "Mobile Development",
            Interest::DataScience => "Data Science",
            Interest::DigitalMarketing => "Digital Marketing",
            Interest::UiUxDesign => "UI/UX Design",
            Interest::Other => "Other",
        }
    }

    pub fn from_wire(value: &str) -> Option<Self> {
        match value {
            "Web Development" => Some(Interest::WebDevelopment),
            "Mobile Development" => Some(Interest::MobileDevelopment),
            "Data Science" => Some(Interest::DataScience),
            "Digital Marketing" => Some(Interest::DigitalMarketing),
            "UI/UX Design" => Some(Interest::UiUxDesign),
            "Other" => Some(Interest::Other),
            _ => None,
        }
    }
}

impl Default for Interest {
    fn default() -> Self {
        Interest::WebDevelopment
    }
}

// ============ Database Models ============

/// A stored lead, as persisted and as returned by the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Lead {
    /// Unique identifier, assigned by the store on insert.
    pub id: Uuid,
    /// Full name, trimmed, never empty.
    pub name: String,
    /// Email address, trimmed and lower-cased.
    pub email: String,
    /// Phone number, 7-15 digits when present.
    pub phone: Option<String>,
    pub company: Option<String>,
    pub source: LeadSource,
    pub notes: Option<String>,
    pub opt_in: bool,
    pub status: LeadStatus,
    pub qualification: Qualification,
    pub interest: Interest,
    pub assigned_to: String,
    pub city: Option<String>,
    /// Graduation year, within [1950, 2030] when present.
    pub passout_year: Option<i32>,
    pub heard_from: Option<String>,
    /// Set once on insert.
    pub created_at: DateTime<Utc>,
    /// Set on insert and on every mutation; `created_at <= updated_at`.
    pub updated_at: DateTime<Utc>,
}

/// A normalized lead that passed validation and is ready for storage.
///
/// Only the validation engine produces these, so every `NewLead` already
/// satisfies the field constraints; the store adds `id` and timestamps.
#[derive(Debug, Clone, PartialEq)]
pub struct NewLead {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub company: Option<String>,
    pub source: LeadSource,
    pub notes: Option<String>,
    pub opt_in: bool,
    pub status: LeadStatus,
    pub qualification: Qualification,
    pub interest: Interest,
    pub assigned_to: String,
    pub city: Option<String>,
    pub passout_year: Option<i32>,
    pub heard_from: Option<String>,
}

// ============ API Request Models ============

/// Raw lead submission as it arrives on the wire.
///
/// Enumeration fields stay `String` here so an out-of-set value surfaces as a
/// per-field validation error rather than a deserialization failure.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LeadPayload {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub company: Option<String>,
    pub source: Option<String>,
    pub notes: Option<String>,
    pub opt_in: Option<bool>,
    pub status: Option<String>,
    pub qualification: Option<String>,
    pub interest: Option<String>,
    pub assigned_to: Option<String>,
    pub city: Option<String>,
    pub passout_year: Option<i32>,
    pub heard_from: Option<String>,
}
