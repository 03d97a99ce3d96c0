//! Static site content tables.
//!
//! The organization profile, program descriptions, impact statistics, and
//! donation terms are fixed mock figures. Pages render them directly and the
//! response engine interpolates them into canned replies; nothing here is
//! computed live.

/// Organization profile and contact details.
pub struct OrgInfo {
    pub name: &'static str,
    pub mission: &'static str,
    pub founded: &'static str,
    pub location: &'static str,
    pub email: &'static str,
    pub phone: &'static str,
    pub address: &'static str,
    pub volunteer_email: &'static str,
    pub certifications: &'static [&'static str],
}

/// One of the four running programs.
pub struct Program {
    /// URL slug used by `/programs/{id}`.
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    /// Fixed fund-utilization figure, already formatted for display.
    pub fund_utilization: &'static str,
}

/// Headline impact statistics.
pub struct ImpactStats {
    pub lives_changed: &'static str,
    pub communities_served: &'static str,
    pub volunteers: &'static str,
    pub active_programs: &'static str,
    pub fund_utilization: &'static str,
}

/// Donation methods and terms.
pub struct DonationTerms {
    pub methods: &'static [&'static str],
    pub tax_benefits: &'static str,
    pub minimum_display: &'static str,
    pub certificates: &'static str,
}

/// A news listing entry.
pub struct NewsItem {
    pub title: &'static str,
    pub date: &'static str,
    pub category: &'static str,
}

/// An open position on the careers page.
pub struct JobOpening {
    pub title: &'static str,
    pub location: &'static str,
    pub employment_type: &'static str,
    pub department: &'static str,
}

pub const ORG: OrgInfo = OrgInfo {
    name: "AidConnect Global",
    mission: "Empowering communities and transforming lives through sustainable development, education, healthcare, and emergency relief programs.",
    founded: "2015",
    location: "Mumbai, Maharashtra, India",
    email: "info@aidconnect.org",
    phone: "+91 22 1234 5678",
    address: "123 Hope Street, Mumbai, Maharashtra 400001, India",
    volunteer_email: "volunteer@aidconnect.org",
    certifications: &[
        "80G Tax Exemption",
        "FCRA Registered",
        "GuideStar India Platinum",
    ],
};

pub const PROGRAMS: &[Program] = &[
    Program {
        id: "education",
        name: "Education",
        description: "Supporting 15,000+ students with scholarships and skill development",
        fund_utilization: "₹45 Lakhs",
    },
    Program {
        id: "healthcare",
        name: "Healthcare",
        description: "Conducted 200+ medical camps reaching 50,000+ beneficiaries",
        fund_utilization: "₹38 Lakhs",
    },
    Program {
        id: "water",
        name: "Clean Water",
        description: "Installed 500+ water systems in rural villages",
        fund_utilization: "₹52 Lakhs",
    },
    Program {
        id: "emergency",
        name: "Emergency Relief",
        description: "Assisted 50,000+ people during natural disasters",
        fund_utilization: "₹35 Lakhs",
    },
];

pub const IMPACT: ImpactStats = ImpactStats {
    lives_changed: "50,000+",
    communities_served: "250+",
    volunteers: "1,500+",
    active_programs: "25+",
    fund_utilization: "98%",
};

pub const DONATION: DonationTerms = DonationTerms {
    methods: &["Online (UPI, Cards, Net Banking)", "Bank Transfer", "Cheque"],
    tax_benefits: "80G tax exemption available",
    minimum_display: "₹100",
    certificates: "Personalized donation certificates provided for all donations",
};

pub const NEWS: &[NewsItem] = &[
    NewsItem {
        title: "AidConnect Launches New Education Center in Bihar",
        date: "Dec 15, 2024",
        category: "Education",
    },
    NewsItem {
        title: "Healthcare Camp Benefits 5,000+ in Maharashtra",
        date: "Dec 10, 2024",
        category: "Healthcare",
    },
    NewsItem {
        title: "Clean Water Project Reaches 100th Village",
        date: "Dec 5, 2024",
        category: "Clean Water",
    },
    NewsItem {
        title: "Annual Report 2024 Released",
        date: "Nov 30, 2024",
        category: "Organization",
    },
];

pub const JOBS: &[JobOpening] = &[
    JobOpening {
        title: "Program Manager",
        location: "Mumbai",
        employment_type: "Full-time",
        department: "Operations",
    },
    JobOpening {
        title: "Field Coordinator",
        location: "Bihar",
        employment_type: "Full-time",
        department: "Field Operations",
    },
    JobOpening {
        title: "Communications Specialist",
        location: "Remote",
        employment_type: "Full-time",
        department: "Marketing",
    },
    JobOpening {
        title: "Finance Officer",
        location: "Mumbai",
        employment_type: "Full-time",
        department: "Finance",
    },
];

/// Volunteer tracks advertised on the volunteer page and in chat replies.
pub const VOLUNTEER_ROLES: &[&str] = &[
    "Field Volunteers",
    "Teaching Assistants",
    "Healthcare Support",
    "Event Coordinators",
    "Digital Marketing",
];

/// Look up a program by its URL slug.
#[must_use]
pub fn program_by_id(id: &str) -> Option<&'static Program> {
    PROGRAMS.iter().find(|p| p.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_program_lookup() {
        assert_eq!(program_by_id("education").map(|p| p.name), Some("Education"));
        assert!(program_by_id("unknown").is_none());
    }

    #[test]
    fn test_four_programs() {
        assert_eq!(PROGRAMS.len(), 4);
    }
}
