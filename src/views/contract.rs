//! Contract page: timesheet table plus the create/edit/view side panel.

use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use tracing::info;

use super::table::{paginate, SortDir, SortState, TablePage};
use super::Section;
use crate::models::timesheet::{TimesheetData, TimesheetDay, TimesheetStatus, TimesheetWeek};
use crate::utils::time::{
    iso_week_number, short_day_label, week_bounds, week_range_label, weekday_name,
};

pub const NO_TIMESHEETS: &str = "No data available";
const LOCKED: &str = "-";

/// The week matching `week_number`, else the first week listed.
pub fn select_week(weeks: &[TimesheetWeek], week_number: u32) -> Option<&TimesheetWeek> {
    weeks
        .iter()
        .find(|w| w.week_number == week_number)
        .or_else(|| weeks.first())
}

/// Hours accept an empty string or digits only; anything else keeps `previous`.
pub fn apply_hours_input(previous: &str, input: &str) -> String {
    if input.is_empty() || input.bytes().all(|b| b.is_ascii_digit()) {
        input.to_string()
    } else {
        previous.to_string()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    #[default]
    Week,
    Hours,
}

pub type TimesheetSort = SortState<SortKey>;

pub fn default_sort() -> TimesheetSort {
    SortState {
        key: SortKey::Week,
        dir: SortDir::Desc,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RowAction {
    View,
    Edit,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimesheetRow {
    pub week_number: u32,
    pub label: String,
    pub date_range: String,
    pub hours: f64,
    pub status: TimesheetStatus,
    pub status_label: &'static str,
    pub action: RowAction,
}

pub fn build_rows(data: &TimesheetData, sort: TimesheetSort) -> Vec<TimesheetRow> {
    let mut rows: Vec<TimesheetRow> = data
        .weeks
        .iter()
        .map(|w| TimesheetRow {
            week_number: w.week_number,
            label: format!("Week {}, {}", w.week_number, data.year),
            date_range: w.date_range.clone(),
            hours: w.total_hours,
            status: w.status,
            status_label: w.status.label(),
            action: if w.status.is_read_only() {
                RowAction::View
            } else {
                RowAction::Edit
            },
        })
        .collect();

    rows.sort_by(|a, b| {
        let ordering = match sort.key {
            SortKey::Week => a.week_number.cmp(&b.week_number),
            SortKey::Hours => a.hours.total_cmp(&b.hours),
        };
        match sort.dir {
            SortDir::Asc => ordering,
            SortDir::Desc => ordering.reverse(),
        }
    });
    rows
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PanelMode {
    Create,
    Edit,
    View,
}

impl PanelMode {
    pub fn is_editable(&self) -> bool {
        matches!(self, PanelMode::Create | PanelMode::Edit)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PanelDay {
    pub weekday: String,
    pub date_label: String,
    pub hours: String,
    pub remarks: String,
    pub locked: bool,
}

impl PanelDay {
    fn from_day(day: &TimesheetDay) -> Self {
        Self {
            weekday: day.weekday.clone(),
            date_label: day.date_label.clone(),
            hours: day.hours.filter(|h| *h > 0).map(|h| h.to_string()).unwrap_or_default(),
            remarks: day.remarks.clone(),
            locked: day.locked,
        }
    }

    fn blank(date: NaiveDate) -> Self {
        Self {
            weekday: weekday_name(date),
            date_label: short_day_label(date),
            hours: String::new(),
            remarks: String::new(),
            locked: false,
        }
    }

    /// Hours and remarks as rendered in `mode`.
    pub fn display(&self, mode: PanelMode) -> (String, String) {
        if self.locked {
            return (LOCKED.to_string(), LOCKED.to_string());
        }
        match mode {
            PanelMode::View => (or_dash(&self.hours), or_dash(self.remarks.trim())),
            PanelMode::Create | PanelMode::Edit => (self.hours.clone(), self.remarks.clone()),
        }
    }
}

fn or_dash(value: &str) -> String {
    if value.is_empty() {
        LOCKED.to_string()
    } else {
        value.to_string()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderedDay {
    pub weekday: String,
    pub date_label: String,
    pub hours: String,
    pub remarks: String,
    pub editable: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeekDetail {
    pub mode: PanelMode,
    pub title: String,
    pub subtitle: String,
    pub week_number: u32,
    pub week_heading: String,
    pub week_range: String,
    pub days: Vec<RenderedDay>,
    pub total_hours: u32,
    pub can_save: bool,
}

fn render_panel(
    data: &TimesheetData,
    mode: PanelMode,
    week_number: u32,
    week_heading: String,
    week_range: String,
    days: &[PanelDay],
) -> WeekDetail {
    let rendered = days
        .iter()
        .map(|d| {
            let (hours, remarks) = d.display(mode);
            RenderedDay {
                weekday: d.weekday.clone(),
                date_label: d.date_label.clone(),
                hours,
                remarks,
                editable: mode.is_editable() && !d.locked,
            }
        })
        .collect();

    WeekDetail {
        mode,
        title: data.contract_title.clone(),
        subtitle: data.contract_subtitle.clone(),
        week_number,
        week_heading,
        week_range,
        days: rendered,
        total_hours: total_hours(days),
        can_save: mode.is_editable(),
    }
}

pub fn total_hours(days: &[PanelDay]) -> u32 {
    days.iter()
        .filter(|d| !d.locked)
        .filter_map(|d| d.hours.parse::<u32>().ok())
        .sum()
}

/// Seven blank days, Sunday to Saturday, of the week containing `today`.
pub fn open_create(data: &TimesheetData, today: NaiveDate) -> WeekDetail {
    let (start, _) = week_bounds(today);
    let days: Vec<PanelDay> = (0..7)
        .map(|i| PanelDay::blank(start + Duration::days(i)))
        .collect();
    let current = iso_week_number(today);
    let week_range = format!(
        "({} - {}, {})",
        days[0].date_label, days[6].date_label, data.year
    );
    render_panel(
        data,
        PanelMode::Create,
        current,
        format!("Week {} (This Week)", current),
        week_range,
        &days,
    )
}

/// Opens an existing week in view or edit mode. `None` when the week is unknown.
pub fn open_week(
    data: &TimesheetData,
    week_number: u32,
    mode: PanelMode,
    today: NaiveDate,
) -> Option<WeekDetail> {
    let week = data.weeks.iter().find(|w| w.week_number == week_number)?;
    let current = iso_week_number(today);
    let heading = match mode {
        PanelMode::View if week.week_number == current => {
            format!("Week {} (This Week)", week.week_number)
        }
        _ => format!("Week {}", week.week_number),
    };
    let days: Vec<PanelDay> = week.days.iter().map(PanelDay::from_day).collect();
    Some(render_panel(
        data,
        mode,
        week.week_number,
        heading,
        format!("({}, {})", week.date_range, data.year),
        &days,
    ))
}

/// Edits submitted from the panel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PanelSubmission {
    pub action: PanelAction,
    pub week_number: u32,
    pub days: Vec<PanelDay>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PanelAction {
    Save,
    Submit,
}

/// Save and submit are not persisted yet; the week is only logged.
impl PanelSubmission {
    /// Runs each submitted day through the hours rule, falling back to the
    /// stored week's entry for the same weekday. Days the backend has not seen
    /// fall back to blank.
    pub fn apply_stored_hours(&mut self, stored: Option<&TimesheetWeek>) {
        for day in self.days.iter_mut() {
            let previous = stored
                .and_then(|w| w.days.iter().find(|d| d.weekday == day.weekday))
                .map(|d| PanelDay::from_day(d).hours)
                .unwrap_or_default();
            day.hours = apply_hours_input(&previous, &day.hours);
        }
    }
}

pub fn handle_panel_action(submission: &PanelSubmission) -> u32 {
    let total = total_hours(&submission.days);
    match submission.action {
        PanelAction::Save => {
            info!(week = submission.week_number, total_hours = total, "Saving timesheet")
        }
        PanelAction::Submit => {
            info!(week = submission.week_number, total_hours = total, "Submitting timesheet")
        }
    }
    total
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContractOption {
    pub index: usize,
    pub title: String,
    pub subtitle: String,
    pub selected: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContractHeader {
    pub title: String,
    pub subtitle: String,
    pub current_week: String,
    pub current_range: String,
    pub year: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContractView {
    pub contracts: Vec<ContractOption>,
    pub header: ContractHeader,
    /// Week highlighted on load: the current one, else the first.
    pub current_week: Option<u32>,
    pub sort: TimesheetSort,
    pub table: Section<TablePage<TimesheetRow>>,
    pub panel: Option<WeekDetail>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PanelRequest {
    Create,
    Edit,
    View,
}

#[derive(Debug, Clone)]
pub struct ContractInputs {
    pub contracts: Option<Vec<TimesheetData>>,
    pub selected: usize,
    pub sort: TimesheetSort,
    pub page: usize,
    pub page_size: usize,
    pub panel: Option<PanelRequest>,
    pub panel_week: Option<u32>,
    pub today: NaiveDate,
}

pub fn build_contract(inputs: ContractInputs) -> ContractView {
    let current = iso_week_number(inputs.today);
    let contracts = inputs.contracts.clone().unwrap_or_default();
    let selected = if inputs.selected < contracts.len() { inputs.selected } else { 0 };
    let data = contracts.get(selected).cloned().unwrap_or_default();

    let header = ContractHeader {
        title: data.contract_title.clone(),
        subtitle: data.contract_subtitle.clone(),
        current_week: format!("Week {}", current),
        current_range: week_range_label(inputs.today),
        year: contracts
            .get(selected)
            .map(|c| c.year)
            .unwrap_or_else(|| inputs.today.year()),
    };

    let options = contracts
        .iter()
        .enumerate()
        .map(|(index, c)| ContractOption {
            index,
            title: c.contract_title.clone(),
            subtitle: c.contract_subtitle.clone(),
            selected: index == selected,
        })
        .collect();

    let table = match &inputs.contracts {
        None => Section::Loading,
        Some(_) if data.weeks.is_empty() => Section::empty(NO_TIMESHEETS),
        Some(_) => Section::Ready(paginate(
            build_rows(&data, inputs.sort),
            inputs.page,
            inputs.page_size,
        )),
    };

    let panel = match (inputs.panel, inputs.panel_week) {
        (Some(PanelRequest::Create), _) => Some(open_create(&data, inputs.today)),
        (Some(PanelRequest::Edit), Some(week)) => open_week(&data, week, PanelMode::Edit, inputs.today),
        (Some(PanelRequest::View), Some(week)) => open_week(&data, week, PanelMode::View, inputs.today),
        _ => None,
    };

    ContractView {
        contracts: options,
        header,
        current_week: select_week(&data.weeks, current).map(|w| w.week_number),
        sort: inputs.sort,
        table,
        panel,
    }
}
