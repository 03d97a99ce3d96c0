//! Keyword rule tables and topic selection.
//!
//! Matching is case-insensitive unanchored substring search against fixed,
//! priority-ordered tables. The first rule whose keyword group matches
//! wins. Staff input never falls through to the general table; donor input
//! does when no donor rule matches.

use aidconnect_core::Role;

use super::PageContext;

/// Every reply the engine can select, one variant per canned response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Topic {
    // Staff path.
    ComplianceSummary,
    FundAllocation,
    AidRequests,
    Transactions,
    Utilization,
    PendingActions,
    StaffCapabilities,
    StaffFallback,
    // Donor path.
    AccessDenied,
    MyDonations,
    Certificates,
    MyImpact,
    // General path.
    Mission,
    Donate,
    Programs,
    Contact,
    Impact,
    Volunteer,
    Tax,
    CapabilityOverview,
}

/// One priority slot: any keyword in the group selects the topic.
struct Rule {
    keywords: &'static [&'static str],
    topic: Topic,
}

const STAFF_RULES: &[Rule] = &[
    Rule { keywords: &["compliance", "score"], topic: Topic::ComplianceSummary },
    Rule { keywords: &["fund", "allocation", "budget"], topic: Topic::FundAllocation },
    Rule { keywords: &["aid", "request"], topic: Topic::AidRequests },
    Rule { keywords: &["transaction", "donation"], topic: Topic::Transactions },
    Rule { keywords: &["utilization", "usage"], topic: Topic::Utilization },
    Rule { keywords: &["pending", "action"], topic: Topic::PendingActions },
    Rule { keywords: &["help", "what can"], topic: Topic::StaffCapabilities },
];

/// Organization-level financial phrases donors may not query. Checked
/// before any donor rule, so "certificate" in the same message cannot
/// bypass the denial.
const DENIAL_KEYWORDS: &[&str] = &["total fund", "all donation", "staff", "compliance"];

const DONOR_RULES: &[Rule] = &[
    Rule { keywords: &["my donation", "donation history"], topic: Topic::MyDonations },
    Rule { keywords: &["certificate"], topic: Topic::Certificates },
    Rule { keywords: &["impact", "help"], topic: Topic::MyImpact },
];

const GENERAL_RULES: &[Rule] = &[
    Rule { keywords: &["mission", "about"], topic: Topic::Mission },
    Rule { keywords: &["donate", "contribution"], topic: Topic::Donate },
    Rule { keywords: &["program", "initiative"], topic: Topic::Programs },
    Rule { keywords: &["contact", "reach"], topic: Topic::Contact },
    Rule { keywords: &["impact", "achievement"], topic: Topic::Impact },
    Rule { keywords: &["volunteer"], topic: Topic::Volunteer },
    Rule { keywords: &["tax", "80g"], topic: Topic::Tax },
];

fn first_match(rules: &[Rule], lowered: &str) -> Option<Topic> {
    rules
        .iter()
        .find(|rule| rule.keywords.iter().any(|keyword| lowered.contains(keyword)))
        .map(|rule| rule.topic)
}

/// Resolve one user message to a topic.
///
/// Staff role or an admin page context selects the staff table; a donor
/// gets the denial check, then the donor table, then the general table;
/// everyone else goes straight to the general table.
#[must_use]
pub fn select_topic(text: &str, role: Role, context: PageContext) -> Topic {
    let lowered = text.to_lowercase();

    if role == Role::Staff || context == PageContext::Admin {
        return first_match(STAFF_RULES, &lowered).unwrap_or(Topic::StaffFallback);
    }

    if role == Role::Donor {
        if DENIAL_KEYWORDS.iter().any(|keyword| lowered.contains(keyword)) {
            return Topic::AccessDenied;
        }
        if let Some(topic) = first_match(DONOR_RULES, &lowered) {
            return topic;
        }
    }

    first_match(GENERAL_RULES, &lowered).unwrap_or(Topic::CapabilityOverview)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn staff(text: &str) -> Topic {
        select_topic(text, Role::Staff, PageContext::General)
    }

    fn donor(text: &str) -> Topic {
        select_topic(text, Role::Donor, PageContext::General)
    }

    fn visitor(text: &str) -> Topic {
        select_topic(text, Role::Visitor, PageContext::General)
    }

    #[test]
    fn test_staff_rules_in_priority_order() {
        assert_eq!(staff("show compliance documents"), Topic::ComplianceSummary);
        assert_eq!(staff("what is our score"), Topic::ComplianceSummary);
        assert_eq!(staff("show me fund allocation for healthcare"), Topic::FundAllocation);
        assert_eq!(staff("this quarter's budget"), Topic::FundAllocation);
        assert_eq!(staff("open aid requests"), Topic::AidRequests);
        assert_eq!(staff("recent transactions"), Topic::Transactions);
        assert_eq!(staff("donation totals"), Topic::Transactions);
        assert_eq!(staff("utilization report"), Topic::Utilization);
        assert_eq!(staff("pending actions"), Topic::PendingActions);
        assert_eq!(staff("what can you do"), Topic::StaffCapabilities);
    }

    #[test]
    fn test_compliance_outranks_fund() {
        // "compliance" sits above "fund" in the table, so a message with
        // both resolves to the compliance summary.
        assert_eq!(staff("compliance of fund usage"), Topic::ComplianceSummary);
    }

    #[test]
    fn test_staff_never_falls_through_to_general() {
        assert_eq!(staff("how do I volunteer"), Topic::StaffFallback);
        assert_eq!(staff("mission statement"), Topic::StaffFallback);
        assert_eq!(staff(""), Topic::StaffFallback);
    }

    #[test]
    fn test_admin_page_uses_staff_table_for_any_role() {
        assert_eq!(
            select_topic("pending actions", Role::Visitor, PageContext::Admin),
            Topic::PendingActions
        );
        assert_eq!(
            select_topic("mission", Role::Donor, PageContext::Admin),
            Topic::StaffFallback
        );
    }

    #[test]
    fn test_donor_denial_takes_priority() {
        assert_eq!(donor("what is the total fund collected"), Topic::AccessDenied);
        assert_eq!(donor("show all donations"), Topic::AccessDenied);
        assert_eq!(donor("can I talk to staff"), Topic::AccessDenied);
        assert_eq!(donor("compliance status"), Topic::AccessDenied);
        // The denial check runs before donor rules.
        assert_eq!(donor("certificate for total fund"), Topic::AccessDenied);
    }

    #[test]
    fn test_donor_rules() {
        assert_eq!(donor("show my donations"), Topic::MyDonations);
        assert_eq!(donor("donation history please"), Topic::MyDonations);
        assert_eq!(donor("download certificate"), Topic::Certificates);
        assert_eq!(donor("what impact did I have"), Topic::MyImpact);
        assert_eq!(donor("help"), Topic::MyImpact);
    }

    #[test]
    fn test_donor_falls_through_to_general() {
        assert_eq!(donor("tell me about the mission"), Topic::Mission);
        assert_eq!(donor("how do I volunteer"), Topic::Volunteer);
        assert_eq!(donor("gibberish"), Topic::CapabilityOverview);
    }

    #[test]
    fn test_general_rules() {
        assert_eq!(visitor("tell me about your mission"), Topic::Mission);
        assert_eq!(visitor("how do I donate?"), Topic::Donate);
        assert_eq!(visitor("monthly contribution"), Topic::Donate);
        assert_eq!(visitor("what programs do you run"), Topic::Programs);
        assert_eq!(visitor("how can I reach you"), Topic::Contact);
        assert_eq!(visitor("your impact so far"), Topic::Impact);
        assert_eq!(visitor("volunteer opportunities"), Topic::Volunteer);
        assert_eq!(visitor("is there 80g exemption"), Topic::Tax);
        assert_eq!(visitor("DONATE NOW"), Topic::Donate);
    }

    #[test]
    fn test_unmatched_input_gets_capability_overview() {
        assert_eq!(visitor(""), Topic::CapabilityOverview);
        assert_eq!(visitor("   "), Topic::CapabilityOverview);
        assert_eq!(visitor("xyzzy"), Topic::CapabilityOverview);
    }

    #[test]
    fn test_substring_matching_is_unanchored() {
        // "80g" matches inside a longer token.
        assert_eq!(visitor("section80g rules"), Topic::Tax);
    }
}
