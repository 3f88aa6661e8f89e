use std::fmt;

/// Topic derived from an article headline.
///
/// Classification is a case-sensitive substring check over the title, in the
/// order of [`Topic::RULES`]. It is independent of the scorer's authority
/// rules, which read the full lower-cased article text instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Topic {
    SscExamIssues,
    MunicipalServices,
    HealthcareServices,
    UpscExamDelays,
    PublicTransport,
    EducationServices,
    WaterSupplyIssues,
    PensionServices,
    RailwayServices,
    GovernmentServices,
}

impl Topic {
    pub const RULES: [(&'static [&'static str], Topic); 9] = [
        (&["SSC", "Exam"], Topic::SscExamIssues),
        (&["Municipal", "Road"], Topic::MunicipalServices),
        (&["Hospital", "Medicine"], Topic::HealthcareServices),
        (&["UPSC"], Topic::UpscExamDelays),
        (&["Transport"], Topic::PublicTransport),
        (&["School"], Topic::EducationServices),
        (&["Water"], Topic::WaterSupplyIssues),
        (&["Pension"], Topic::PensionServices),
        (&["Railway"], Topic::RailwayServices),
    ];

    pub fn from_title(title: &str) -> Self {
        Self::RULES
            .iter()
            .find(|(needles, _)| needles.iter().any(|needle| title.contains(needle)))
            .map(|(_, topic)| *topic)
            .unwrap_or(Topic::GovernmentServices)
    }

    pub fn label(&self) -> &'static str {
        match self {
            Topic::SscExamIssues => "SSC Exam Issues",
            Topic::MunicipalServices => "Municipal Services",
            Topic::HealthcareServices => "Healthcare Services",
            Topic::UpscExamDelays => "UPSC Exam Delays",
            Topic::PublicTransport => "Public Transport",
            Topic::EducationServices => "Education Services",
            Topic::WaterSupplyIssues => "Water Supply Issues",
            Topic::PensionServices => "Pension Services",
            Topic::RailwayServices => "Railway Services",
            Topic::GovernmentServices => "Government Services",
        }
    }

    /// Office to address a request to, including the officer where known.
    pub fn public_authority(&self) -> &'static str {
        match self {
            Topic::SscExamIssues => "Staff Selection Commission, Controller of Examinations",
            Topic::MunicipalServices => "Municipal Corporation, Engineering Department",
            Topic::HealthcareServices => {
                "Department of Health & Family Welfare, Medical Superintendent"
            }
            Topic::UpscExamDelays => "Union Public Service Commission, Secretary",
            Topic::PublicTransport => "Department of Transport, Regional Transport Authority",
            Topic::EducationServices => "Department of Education, District Education Officer",
            Topic::WaterSupplyIssues => {
                "Public Health Engineering Department, Executive Engineer"
            }
            Topic::PensionServices => "Department of Pension & Pensioners' Welfare",
            Topic::RailwayServices => "Indian Railways, Divisional Railway Manager",
            Topic::GovernmentServices => {
                "Relevant Government Department, Public Information Officer"
            }
        }
    }

    /// Six request queries for the topic; topics without a table share the generic set.
    pub fn rti_queries(&self) -> &'static [&'static str; 6] {
        match self {
            Topic::SscExamIssues => &SSC_EXAM_QUERIES,
            Topic::MunicipalServices => &MUNICIPAL_QUERIES,
            Topic::HealthcareServices => &HEALTHCARE_QUERIES,
            Topic::UpscExamDelays => &UPSC_QUERIES,
            _ => &GENERIC_QUERIES,
        }
    }
}

impl fmt::Display for Topic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

pub const SSC_EXAM_QUERIES: [&str; 6] = [
    "Provide incident report details for technical glitches during SSC CGL examination",
    "Share vendor contract and service level agreements for examination technology platform",
    "Provide details of affected candidates and compensation measures announced",
    "Share internal investigation report on examination center disruptions",
    "Provide details of backup systems and contingency measures in place",
    "Share communication records between SSC and technology vendor regarding issues",
];

pub const MUNICIPAL_QUERIES: [&str; 6] = [
    "Provide approved project timeline and milestones for road repair work",
    "Share contractor selection process and tender documents",
    "Provide details of budget allocation and expenditure for infrastructure projects",
    "Share quality control inspection reports and compliance certificates",
    "Provide details of citizen complaints received regarding delayed projects",
    "Share performance evaluation reports of assigned contractors",
];

pub const HEALTHCARE_QUERIES: [&str; 6] = [
    "Provide current inventory status of essential medicines in government hospitals",
    "Share procurement records and supplier contracts for medical supplies",
    "Provide details of drug shortage incidents and response measures",
    "Share patient complaint records regarding unavailability of medicines",
    "Provide details of alternative arrangements made for affected patients",
    "Share budget allocation and utilization for medicine procurement",
];

pub const UPSC_QUERIES: [&str; 6] = [
    "Provide details of factors causing delay in UPSC exam result declaration",
    "Share internal timeline and processing status of examination evaluation",
    "Provide details of evaluation committee proceedings and decisions",
    "Share communication records with external agencies involved in evaluation",
    "Provide details of quality control measures in evaluation process",
    "Share candidate grievance records and resolution status",
];

pub const GENERIC_QUERIES: [&str; 6] = [
    "Provide details of service delivery standards and performance metrics",
    "Share citizen complaint records and resolution status",
    "Provide details of corrective measures taken to address service issues",
    "Share internal audit reports related to service quality",
    "Provide details of budget allocation and utilization for service delivery",
    "Share performance evaluation reports of responsible officers",
];
