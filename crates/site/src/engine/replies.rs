//! English canned reply texts.
//!
//! All figures are fixed mock data interpolated from [`crate::content`].
//! Replies use literal newlines and markdown-like markers; the widget
//! renders them preformatted.

use std::fmt::Write as _;

use crate::content::{DONATION, IMPACT, ORG, PROGRAMS, VOLUNTEER_ROLES};

use super::Topic;

/// Welcome for visitors, shown when no localized variant applies.
pub const GENERIC_WELCOME: &str = "Hello! I'm here to help you with any questions about AidConnect Global. How can I assist you today?";

/// Staff welcome, interpolating the display name.
#[must_use]
pub fn staff_welcome(name: &str) -> String {
    format!(
        "Welcome back, {name}! As NGO Staff, I can help you with:\n\n\
         • Financial reports and fund utilization\n\
         • Program performance metrics\n\
         • Aid request management\n\
         • Compliance documentation\n\n\
         How can I assist you today?"
    )
}

/// Donor welcome, interpolating the display name.
#[must_use]
pub fn donor_welcome(name: &str) -> String {
    format!(
        "Hello {name}! Thank you for being a valued donor. I can help you with:\n\n\
         • Your donation history\n\
         • Impact of your contributions\n\
         • Download donation certificates\n\
         • Program updates you've supported\n\n\
         What would you like to know?"
    )
}

/// The English reply for a topic. Total: every topic has a reply.
#[must_use]
pub fn english_reply(topic: Topic) -> String {
    match topic {
        Topic::ComplianceSummary => "**Compliance Status:**\n\n\
             ✅ 80G Registration: Active\n\
             ✅ FCRA: Renewed (Valid till 2027)\n\
             ✅ Annual Audit: Completed (March 2024)\n\
             ✅ GuideStar: Platinum Certified\n\n\
             Compliance score: 98/100. All compliance documents are available in the Staff Portal."
            .to_owned(),
        Topic::FundAllocation => fund_allocation(),
        Topic::AidRequests => "**Aid Requests Summary:**\n\n\
             • **Pending**: 45 requests\n\
             • **In Review**: 23 requests\n\
             • **Approved**: 1,250 (this quarter)\n\
             • **Average Processing Time**: 5 days\n\n\
             Categories: Education (40%), Healthcare (30%), Emergency (20%), Water (10%)"
            .to_owned(),
        Topic::Transactions => "**Transaction Summary (FY 2024-25):**\n\n\
             • **Total Funds Collected**: ₹2.5 Crores\n\
             • **Donations This Month**: 312\n\
             • **Average Donation**: ₹3,200\n\
             • **Online Share**: 78%\n\n\
             The full ledger export is available in the Staff Dashboard."
            .to_owned(),
        Topic::Utilization => format!(
            "**Fund Utilization (FY 2024-25):**\n\n\
             • **Total Funds Collected**: ₹2.5 Crores\n\
             • **Utilized**: ₹2.45 Crores ({})\n\
             • Program spend: 90%, administration: 10%\n\n\
             Utilization reports are refreshed monthly in the Staff Dashboard.",
            IMPACT.fund_utilization
        ),
        Topic::PendingActions => "**Pending Actions:**\n\n\
             • 45 aid requests awaiting review\n\
             • 12 contact messages unanswered\n\
             • 3 compliance documents due this month\n\n\
             The prioritized queue is available in the Staff Dashboard."
            .to_owned(),
        Topic::StaffCapabilities => "As NGO Staff, I can help you with:\n\n\
             • Financial reports and fund utilization\n\
             • Program performance metrics\n\
             • Aid request management\n\
             • Compliance documentation\n\n\
             What do you need?"
            .to_owned(),
        Topic::StaffFallback => "I can pull up compliance status, fund allocation, aid requests, \
             transactions, utilization, or pending actions. Which report do you need?"
            .to_owned(),
        Topic::AccessDenied => format!(
            "I apologize, but I can only provide information about your own donations and their \
             impact. For overall organizational finances, please contact our team at {}.",
            ORG.email
        ),
        Topic::MyDonations => "Based on your account:\n\n\
             • **Total Donated**: ₹25,000\n\
             • **Programs Supported**: Education, Healthcare\n\
             • **People Impacted**: ~50 individuals\n\
             • **Certificate Status**: Available for download\n\n\
             You can download your certificates from the Donor Dashboard."
            .to_owned(),
        Topic::Certificates => "You can download your donation certificates from your Donor Dashboard. \
             Each certificate includes:\n\n\
             • Your name and donation ID\n\
             • Amount and date\n\
             • Program supported\n\
             • 80G tax exemption details\n\
             • Verification reference"
            .to_owned(),
        Topic::MyImpact => "Your contributions have made a real difference!\n\n\
             **Your Impact Summary:**\n\
             • 10 students received educational support\n\
             • 15 families received healthcare assistance\n\
             • Your donations have 98% direct utilization\n\n\
             Thank you for your continued support!"
            .to_owned(),
        Topic::Mission => format!(
            "**About {}**\n\n{}\n\n\
             **Our Focus Areas:**\n\
             • Education & Skill Development\n\
             • Healthcare Services\n\
             • Clean Water Access\n\
             • Emergency Relief\n\n\
             We've impacted {} lives across {} communities.",
            ORG.name, ORG.mission, IMPACT.lives_changed, IMPACT.communities_served
        ),
        Topic::Donate => format!(
            "**How to Donate:**\n\n\
             1. **Online**: Visit our Donate page (UPI, Cards, Net Banking)\n\
             2. **Bank Transfer**: Contact us for details\n\
             3. **Cheque**: Payable to \"{}\"\n\n\
             **Benefits:**\n\
             • {}\n\
             • {}\n\
             • Minimum: {}\n\n\
             Every rupee makes a difference! 🧡",
            ORG.name, DONATION.tax_benefits, DONATION.certificates, DONATION.minimum_display
        ),
        Topic::Programs => programs(),
        Topic::Contact => format!(
            "**Contact Us:**\n\n\
             📧 Email: {}\n\
             📞 Phone: {}\n\
             📍 Address: {}\n\n\
             Our team responds within 24-48 hours!",
            ORG.email, ORG.phone, ORG.address
        ),
        Topic::Impact => format!(
            "**Our Impact:**\n\n\
             • **{}** Lives Changed\n\
             • **{}** Communities Served\n\
             • **{}** Active Volunteers\n\
             • **{}** Fund Utilization Rate\n\n\
             Every donation creates real, measurable change!",
            IMPACT.lives_changed,
            IMPACT.communities_served,
            IMPACT.volunteers,
            IMPACT.fund_utilization
        ),
        Topic::Volunteer => volunteer(),
        Topic::Tax => format!(
            "**Tax Benefits:**\n\n\
             All donations to {} qualify for **80G tax exemption** under the Income Tax Act.\n\n\
             • You'll receive a certificate with your donation\n\
             • Certificate includes 80G registration number\n\
             • Valid for claiming tax deduction\n\n\
             Your generosity is rewarded! 🧾",
            ORG.name
        ),
        Topic::CapabilityOverview => format!(
            "I'm here to help you learn about {}! I can answer questions about:\n\n\
             • Our mission and programs\n\
             • How to donate\n\
             • Impact and achievements\n\
             • Volunteering opportunities\n\
             • Contact information\n\n\
             What would you like to know?",
            ORG.name
        ),
    }
}

fn fund_allocation() -> String {
    let mut reply = String::from("**Program Allocation (FY 2024-25):**\n\n");
    for program in PROGRAMS {
        let _ = writeln!(reply, "• {}: {}", program.name, program.fund_utilization);
    }
    reply.push_str("• Admin: ₹25 Lakhs (10%)\n\nDetailed reports available in the Staff Dashboard.");
    reply
}

fn programs() -> String {
    let mut reply = String::from("**Our Programs:**\n\n");
    for (position, program) in PROGRAMS.iter().enumerate() {
        let _ = writeln!(
            reply,
            "{}. **{}** - {}",
            position + 1,
            program.name,
            program.description
        );
    }
    reply.push_str("\nClick on any program on our homepage to donate specifically!");
    reply
}

fn volunteer() -> String {
    let mut reply =
        String::from("**Volunteer with Us!**\n\nWe welcome passionate individuals to join our mission:\n\n");
    for role in VOLUNTEER_ROLES {
        let _ = writeln!(reply, "• {role}");
    }
    let _ = write!(
        reply,
        "\nContact us at {} or visit our Volunteer page!",
        ORG.volunteer_email
    );
    reply
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_topic_has_a_nonempty_reply() {
        let topics = [
            Topic::ComplianceSummary,
            Topic::FundAllocation,
            Topic::AidRequests,
            Topic::Transactions,
            Topic::Utilization,
            Topic::PendingActions,
            Topic::StaffCapabilities,
            Topic::StaffFallback,
            Topic::AccessDenied,
            Topic::MyDonations,
            Topic::Certificates,
            Topic::MyImpact,
            Topic::Mission,
            Topic::Donate,
            Topic::Programs,
            Topic::Contact,
            Topic::Impact,
            Topic::Volunteer,
            Topic::Tax,
            Topic::CapabilityOverview,
        ];
        for topic in topics {
            assert!(!english_reply(topic).is_empty(), "{topic:?}");
        }
    }

    #[test]
    fn test_donate_reply_names_the_minimum() {
        assert!(english_reply(Topic::Donate).contains("₹100"));
    }

    #[test]
    fn test_denial_points_at_the_contact_address() {
        assert!(english_reply(Topic::AccessDenied).contains("info@aidconnect.org"));
    }

    #[test]
    fn test_allocation_lists_all_programs() {
        let reply = english_reply(Topic::FundAllocation);
        for program in PROGRAMS {
            assert!(reply.contains(program.name));
        }
    }
}
