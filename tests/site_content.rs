use cognivus_site::actions::MailTemplate;
use cognivus_site::components::navigation::NAV_LINKS;
use cognivus_site::sections::footer::QUICK_LINKS;
use cognivus_site::sections::investment_opportunity::USE_OF_FUNDS;
use cognivus_site::sections::market_opportunity::{GROWTH_TRAJECTORY, MARKET_SEGMENTS};
use cognivus_site::sections::proof_of_concept::LEAD_STATUS;
use cognivus_site::sections::team_vision::{MilestoneStatus, MILESTONES};

const SECTION_ANCHORS: &[&str] = &["#problem-solution", "#results", "#market", "#team", "#investment", "#faq"];

#[test]
fn navigation_targets_real_sections() {
    let labels: Vec<&str> = NAV_LINKS.iter().map(|link| link.label).collect();
    assert_eq!(labels, ["Technology", "Market", "Team", "Investment", "FAQ"]);
    assert!(NAV_LINKS.iter().all(|link| SECTION_ANCHORS.contains(&link.anchor)));
}

#[test]
fn only_technology_quick_link_is_dangling() {
    let dangling: Vec<&str> = QUICK_LINKS
        .iter()
        .filter(|link| !SECTION_ANCHORS.contains(&link.anchor))
        .map(|link| link.anchor)
        .collect();
    assert_eq!(dangling, ["#technology"]);
}

#[test]
fn current_breakdowns_fill_their_tracks() {
    let lead: u32 = LEAD_STATUS.iter().map(|s| u32::from(s.percentage)).sum();
    let funds: u32 = USE_OF_FUNDS.iter().map(|s| u32::from(s.percentage)).sum();
    assert_eq!(lead, 100);
    assert_eq!(funds, 100);
}

#[test]
fn market_tables() {
    assert_eq!(GROWTH_TRAJECTORY.last().map(|p| p.market), Some("$8.2B"));
    assert_eq!(MARKET_SEGMENTS.len(), 4);
    assert_eq!(MARKET_SEGMENTS[0].segment, "Alzheimer's Disease");
}

#[test]
fn one_milestone_in_flight() {
    let in_progress = MILESTONES
        .iter()
        .filter(|m| m.status == MilestoneStatus::InProgress)
        .count();
    assert_eq!(in_progress, 1);
}

#[test]
fn template_subjects_are_distinct() {
    let mut subjects: Vec<&str> = MailTemplate::ALL.iter().map(|t| t.subject()).collect();
    subjects.sort_unstable();
    subjects.dedup();
    assert_eq!(subjects.len(), MailTemplate::ALL.len());
}
