use serde::Serialize;
use tracing::info;

use super::offer::CandidateSummary;
use super::Section;
use crate::models::salary::{Proposal, SalaryNegotiation};

pub const LOADING_CANDIDATE: &str = "Loading candidate data...";

/// Position in the proposal list; moving past either end wraps around.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Carousel {
    pub current: usize,
    pub len: usize,
}

impl Carousel {
    pub fn new(len: usize, current: usize) -> Self {
        let current = if len == 0 { 0 } else { current % len };
        Self { current, len }
    }

    pub fn next(self) -> Self {
        if self.len == 0 {
            return self;
        }
        Self::new(self.len, (self.current + 1) % self.len)
    }

    pub fn prev(self) -> Self {
        if self.len == 0 {
            return self;
        }
        let current = if self.current == 0 { self.len - 1 } else { self.current - 1 };
        Self::new(self.len, current)
    }

    pub fn has_next(&self) -> bool {
        self.len > 1
    }

    pub fn has_prev(&self) -> bool {
        self.len > 1
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProposalCard {
    pub title: &'static str,
    pub version: String,
    pub status: String,
    pub salary: String,
    pub salary_basis: String,
    pub joining_date: String,
    pub submitted_by: String,
    pub submitted_on: String,
    pub notes: String,
    pub by_client: Vec<String>,
    pub by_candidate: Vec<String>,
    pub talent_engine: Vec<String>,
    pub not_applicable: Vec<String>,
}

impl From<&Proposal> for ProposalCard {
    fn from(p: &Proposal) -> Self {
        Self {
            title: "Proposal",
            version: p.version.clone(),
            status: p.status.clone(),
            salary: format!("${}/Month", p.salary.amount),
            salary_basis: p.salary.kind.clone(),
            joining_date: p.joining_date.clone(),
            submitted_by: p.submitted_by.name.clone(),
            submitted_on: p.submitted_by.date.clone(),
            notes: p.notes.clone(),
            by_client: p.terms.by_client.clone(),
            by_candidate: p.terms.by_candidate.clone(),
            talent_engine: p.terms.talent_engine.clone(),
            not_applicable: p.terms.not_applicable.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SalaryDrawer {
    pub candidate: Section<CandidateSummary>,
    pub proposal: Section<ProposalCard>,
    pub carousel: Carousel,
    pub has_next: bool,
    pub has_prev: bool,
    pub next_href: String,
    pub prev_href: String,
}

pub fn build_salary(data: Option<Option<SalaryNegotiation>>, current: usize) -> Section<SalaryDrawer> {
    let data = match data {
        Some(Some(data)) => data,
        _ => return Section::empty(LOADING_CANDIDATE),
    };

    let carousel = Carousel::new(data.proposals.len(), current);
    let candidate = match &data.candidate {
        Some(c) => Section::Ready(CandidateSummary::from(c)),
        None => Section::empty("No candidate data"),
    };
    let proposal = match data.proposals.get(carousel.current) {
        Some(p) => Section::Ready(ProposalCard::from(p)),
        None => Section::empty("No proposals yet"),
    };

    Section::Ready(SalaryDrawer {
        candidate,
        proposal,
        has_next: carousel.has_next(),
        has_prev: carousel.has_prev(),
        next_href: format!("/salary?proposal={}", carousel.next().current),
        prev_href: format!("/salary?proposal={}", carousel.prev().current),
        carousel,
    })
}

/// Accepting and asking for clarification are not sent anywhere yet.
pub fn accept_proposal(proposal: &Proposal) {
    info!(version = %proposal.version, status = %proposal.status, "Proposal accepted");
}

pub fn request_clarification(proposal: &Proposal, message: Option<&str>) {
    info!(
        version = %proposal.version,
        note = message.unwrap_or_default(),
        "Clarification requested"
    );
}
