//! Derived View Builder
//!
//! Pure transformations from raw task/list collections into the shapes the
//! dashboard, task list and calendar views render. No network or storage
//! side effects; empty inputs degrade to empty outputs.

use chrono::{DateTime, Datelike, NaiveDate, TimeZone, Utc};

use crate::models::{DateFormat, Task, TaskStatus};

/// Sort modes offered by the task list view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortMode {
    /// Server order, treated as newest-first
    Recent,
    /// Due date ascending; undated tasks always last
    DueDate,
    /// HIGH, then MEDIUM, then LOW
    Priority,
}

/// One cell of the 35-cell month grid
#[derive(Debug, Clone, PartialEq)]
pub struct CalendarCell {
    /// Day-of-month, or None for out-of-month placeholder cells
    pub day: Option<u32>,
    pub tasks: Vec<Task>,
}

/// Aggregate counts for the dashboard stat cards
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DashboardStats {
    pub total: usize,
    pub todo: usize,
    pub in_progress: usize,
    pub done: usize,
    pub overdue: usize,
    /// Percentage of tasks done, 0 when there are no tasks
    pub completion_pct: u32,
}

/// Parse a server due-date string to an exact instant.
/// Accepts RFC 3339 timestamps and bare `YYYY-MM-DD` dates (midnight UTC).
pub fn parse_due_instant(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    let date = NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()?;
    Some(Utc.from_utc_datetime(&date.and_hms_opt(0, 0, 0)?))
}

/// Parse the calendar day of a server due-date string (the `YYYY-MM-DD` prefix).
pub fn parse_due_day(raw: &str) -> Option<NaiveDate> {
    let prefix = raw.get(..10).unwrap_or(raw);
    NaiveDate::parse_from_str(prefix, "%Y-%m-%d").ok()
}

/// Split tasks into (active, archived)
pub fn partition_archived(tasks: &[Task]) -> (Vec<Task>, Vec<Task>) {
    tasks.iter().cloned().partition(|task| !task.archived)
}

/// Day-granularity overdue check used by the dashboard stats.
/// DONE tasks are never overdue.
pub fn is_overdue_on_day(task: &Task, today: NaiveDate) -> bool {
    if task.status == TaskStatus::Done {
        return false;
    }
    match task.due_date.as_deref().and_then(parse_due_day) {
        Some(day) => day < today,
        None => false,
    }
}

/// Exact-timestamp overdue check used by in-list badges.
/// Deliberately NOT unified with [`is_overdue_on_day`]: the two views apply
/// different granularities and both behaviors are load-bearing.
pub fn is_overdue_at(task: &Task, now: DateTime<Utc>) -> bool {
    if task.status == TaskStatus::Done {
        return false;
    }
    match task.due_date.as_deref().and_then(parse_due_instant) {
        Some(instant) => instant < now,
        None => false,
    }
}

/// Sort a task collection per the selected mode. Stable in every mode.
pub fn sort_tasks(tasks: &[Task], mode: SortMode) -> Vec<Task> {
    let mut sorted = tasks.to_vec();
    match mode {
        SortMode::Recent => {}
        SortMode::DueDate => {
            sorted.sort_by(|a, b| {
                let a_due = a.due_date.as_deref().and_then(parse_due_instant);
                let b_due = b.due_date.as_deref().and_then(parse_due_instant);
                match (a_due, b_due) {
                    (Some(a), Some(b)) => a.cmp(&b),
                    (Some(_), None) => std::cmp::Ordering::Less,
                    (None, Some(_)) => std::cmp::Ordering::Greater,
                    (None, None) => std::cmp::Ordering::Equal,
                }
            });
        }
        SortMode::Priority => {
            sorted.sort_by_key(|task| task.priority.rank());
        }
    }
    sorted
}

/// Compute the dashboard stat-card aggregates over the active partition
pub fn dashboard_stats(tasks: &[Task], today: NaiveDate) -> DashboardStats {
    let mut stats = DashboardStats {
        total: tasks.len(),
        ..Default::default()
    };
    for task in tasks {
        match task.status {
            TaskStatus::Todo => stats.todo += 1,
            TaskStatus::InProgress => stats.in_progress += 1,
            TaskStatus::Done => stats.done += 1,
        }
        if is_overdue_on_day(task, today) {
            stats.overdue += 1;
        }
    }
    if stats.total > 0 {
        stats.completion_pct = (stats.done * 100 / stats.total) as u32;
    }
    stats
}

/// Undone tasks due between today and today + `horizon_days` (both inclusive),
/// due date ascending.
pub fn upcoming_tasks(tasks: &[Task], today: NaiveDate, horizon_days: i64) -> Vec<Task> {
    let end = today + chrono::Duration::days(horizon_days);
    let upcoming: Vec<Task> = tasks
        .iter()
        .filter(|task| task.status != TaskStatus::Done)
        .filter(|task| {
            task.due_date
                .as_deref()
                .and_then(parse_due_day)
                .map(|day| day >= today && day <= end)
                .unwrap_or(false)
        })
        .cloned()
        .collect();
    sort_tasks(&upcoming, SortMode::DueDate)
}

/// Build the 5-week month grid: exactly 35 cells anchored at the Sunday-based
/// weekday of the 1st. Cells outside the month are placeholders and never
/// carry adjacent-month days or tasks.
pub fn calendar_grid(year: i32, month: u32, tasks: &[Task]) -> Vec<CalendarCell> {
    const CELLS: usize = 35;
    let Some(first) = NaiveDate::from_ymd_opt(year, month, 1) else {
        return vec![CalendarCell { day: None, tasks: Vec::new() }; CELLS];
    };
    let first_weekday = first.weekday().num_days_from_sunday() as usize;
    let days_in_month = days_in_month(year, month);

    (0..CELLS)
        .map(|index| {
            let day_number = index as i64 - first_weekday as i64 + 1;
            if day_number < 1 || day_number > days_in_month as i64 {
                return CalendarCell { day: None, tasks: Vec::new() };
            }
            let day = day_number as u32;
            let Some(date) = NaiveDate::from_ymd_opt(year, month, day) else {
                return CalendarCell { day: None, tasks: Vec::new() };
            };
            let cell_tasks = tasks
                .iter()
                .filter(|task| task.due_date.as_deref().and_then(parse_due_day) == Some(date))
                .cloned()
                .collect();
            CalendarCell { day: Some(day), tasks: cell_tasks }
        })
        .collect()
}

fn days_in_month(year: i32, month: u32) -> u32 {
    let next = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)
    };
    match (NaiveDate::from_ymd_opt(year, month, 1), next) {
        (Some(first), Some(next)) => (next - first).num_days() as u32,
        _ => 0,
    }
}

/// Render a due-date string per the user's date-format setting.
/// Absent or unparsable input renders as "No due date".
pub fn format_due_date(raw: Option<&str>, format: DateFormat) -> String {
    let Some(day) = raw.and_then(parse_due_day) else {
        return "No due date".to_string();
    };
    let (y, m, d) = (day.year(), day.month(), day.day());
    match format {
        DateFormat::MmDdYyyy => format!("{:02}/{:02}/{:04}", m, d, y),
        DateFormat::DdMmYyyy => format!("{:02}/{:02}/{:04}", d, m, y),
        DateFormat::YyyyMmDd => format!("{:04}/{:02}/{:02}", y, m, d),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Priority;

    fn make_task(id: &str, status: TaskStatus, priority: Priority, due: Option<&str>) -> Task {
        Task {
            id: id.to_string(),
            task_name: format!("Task {}", id),
            description: None,
            status,
            priority,
            due_date: due.map(|s| s.to_string()),
            list_id: None,
            archived: false,
        }
    }

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_partition_is_exhaustive_and_disjoint() {
        let mut archived = make_task("a", TaskStatus::Todo, Priority::Low, None);
        archived.archived = true;
        let active = make_task("b", TaskStatus::Todo, Priority::Low, None);
        let (act, arch) = partition_archived(&[archived.clone(), active.clone()]);
        assert_eq!(act, vec![active]);
        assert_eq!(arch, vec![archived]);
    }

    #[test]
    fn test_done_tasks_never_overdue() {
        let task = make_task("1", TaskStatus::Done, Priority::High, Some("2000-01-01"));
        assert!(!is_overdue_on_day(&task, day(2024, 3, 15)));
        assert!(!is_overdue_at(&task, Utc::now()));
    }

    #[test]
    fn test_overdue_day_granularity() {
        let task = make_task("1", TaskStatus::Todo, Priority::Low, Some("2024-03-14T23:00:00Z"));
        assert!(is_overdue_on_day(&task, day(2024, 3, 15)));
        // Due today is not overdue at day granularity
        let task = make_task("2", TaskStatus::Todo, Priority::Low, Some("2024-03-15T01:00:00Z"));
        assert!(!is_overdue_on_day(&task, day(2024, 3, 15)));
    }

    #[test]
    fn test_overdue_exact_granularity_differs_from_day() {
        // Same-day but earlier instant: overdue exactly, not overdue by day
        let task = make_task("1", TaskStatus::Todo, Priority::Low, Some("2024-03-15T01:00:00Z"));
        let now = Utc.with_ymd_and_hms(2024, 3, 15, 12, 0, 0).unwrap();
        assert!(is_overdue_at(&task, now));
        assert!(!is_overdue_on_day(&task, day(2024, 3, 15)));
    }

    #[test]
    fn test_overdue_without_due_date_is_false() {
        let task = make_task("1", TaskStatus::Todo, Priority::Low, None);
        assert!(!is_overdue_on_day(&task, day(2024, 3, 15)));
        assert!(!is_overdue_at(&task, Utc::now()));
        let bad = make_task("2", TaskStatus::Todo, Priority::Low, Some("not-a-date"));
        assert!(!is_overdue_on_day(&bad, day(2024, 3, 15)));
    }

    #[test]
    fn test_sort_by_due_date_undated_last() {
        let tasks = vec![
            make_task("none", TaskStatus::Todo, Priority::Low, None),
            make_task("later", TaskStatus::Todo, Priority::Low, Some("2024-01-02")),
            make_task("sooner", TaskStatus::Todo, Priority::Low, Some("2024-01-01")),
        ];
        let sorted = sort_tasks(&tasks, SortMode::DueDate);
        let ids: Vec<&str> = sorted.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, vec!["sooner", "later", "none"]);
    }

    #[test]
    fn test_sort_by_priority() {
        let tasks = vec![
            make_task("low", TaskStatus::Todo, Priority::Low, None),
            make_task("high", TaskStatus::Todo, Priority::High, None),
            make_task("medium", TaskStatus::Todo, Priority::Medium, None),
        ];
        let sorted = sort_tasks(&tasks, SortMode::Priority);
        let ids: Vec<&str> = sorted.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, vec!["high", "medium", "low"]);
    }

    #[test]
    fn test_sort_recent_preserves_server_order() {
        let tasks = vec![
            make_task("first", TaskStatus::Todo, Priority::Low, Some("2024-06-01")),
            make_task("second", TaskStatus::Done, Priority::High, None),
        ];
        assert_eq!(sort_tasks(&tasks, SortMode::Recent), tasks);
    }

    #[test]
    fn test_dashboard_stats_counts() {
        let tasks = vec![
            make_task("1", TaskStatus::Todo, Priority::Low, Some("2024-01-01")),
            make_task("2", TaskStatus::InProgress, Priority::Low, None),
            make_task("3", TaskStatus::Done, Priority::Low, Some("2024-01-01")),
            make_task("4", TaskStatus::Done, Priority::Low, None),
        ];
        let stats = dashboard_stats(&tasks, day(2024, 3, 15));
        assert_eq!(stats.total, 4);
        assert_eq!(stats.todo, 1);
        assert_eq!(stats.in_progress, 1);
        assert_eq!(stats.done, 2);
        assert_eq!(stats.overdue, 1);
        assert_eq!(stats.completion_pct, 50);
    }

    #[test]
    fn test_dashboard_stats_empty() {
        let stats = dashboard_stats(&[], day(2024, 3, 15));
        assert_eq!(stats, DashboardStats::default());
    }

    #[test]
    fn test_upcoming_window_and_order() {
        let tasks = vec![
            make_task("past", TaskStatus::Todo, Priority::Low, Some("2024-03-10")),
            make_task("late", TaskStatus::Todo, Priority::Low, Some("2024-03-20")),
            make_task("today", TaskStatus::Todo, Priority::Low, Some("2024-03-15")),
            make_task("done", TaskStatus::Done, Priority::Low, Some("2024-03-16")),
            make_task("far", TaskStatus::Todo, Priority::Low, Some("2024-04-01")),
        ];
        let upcoming = upcoming_tasks(&tasks, day(2024, 3, 15), 7);
        let ids: Vec<&str> = upcoming.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, vec!["today", "late"]);
    }

    #[test]
    fn test_calendar_grid_shape() {
        // March 2024 starts on a Friday (index 5)
        let grid = calendar_grid(2024, 3, &[]);
        assert_eq!(grid.len(), 35);
        assert_eq!(grid[4].day, None);
        assert_eq!(grid[5].day, Some(1));
        assert_eq!(grid[19].day, Some(15));
        // Only 30 cells remain after the offset; day 31 falls outside the grid
        assert_eq!(grid[34].day, Some(30));
    }

    #[test]
    fn test_calendar_buckets_by_exact_day() {
        let tasks = vec![
            make_task("hit", TaskStatus::Todo, Priority::Low, Some("2024-03-15T09:00:00Z")),
            make_task("other-month", TaskStatus::Todo, Priority::Low, Some("2024-02-15")),
            make_task("undated", TaskStatus::Todo, Priority::Low, None),
        ];
        let grid = calendar_grid(2024, 3, &tasks);
        let march_15 = grid.iter().find(|c| c.day == Some(15)).unwrap();
        assert_eq!(march_15.tasks.len(), 1);
        assert_eq!(march_15.tasks[0].id, "hit");
        let placed: usize = grid.iter().map(|c| c.tasks.len()).sum();
        assert_eq!(placed, 1);
    }

    #[test]
    fn test_calendar_placeholders_carry_no_days() {
        let grid = calendar_grid(2024, 3, &[]);
        for cell in grid.iter().filter(|c| c.day.is_none()) {
            assert!(cell.tasks.is_empty());
        }
    }

    #[test]
    fn test_format_due_date_variants() {
        assert_eq!(
            format_due_date(Some("2024-03-05"), DateFormat::DdMmYyyy),
            "05/03/2024"
        );
        assert_eq!(
            format_due_date(Some("2024-03-05T10:30:00Z"), DateFormat::MmDdYyyy),
            "03/05/2024"
        );
        assert_eq!(
            format_due_date(Some("2024-03-05"), DateFormat::YyyyMmDd),
            "2024/03/05"
        );
        assert_eq!(format_due_date(None, DateFormat::MmDdYyyy), "No due date");
        assert_eq!(
            format_due_date(Some("garbage"), DateFormat::MmDdYyyy),
            "No due date"
        );
    }
}
