//! Pure aggregation over a company's request set. No hidden state, no
//! caching: every call recomputes from the rows it is handed, so a reading
//! may mix pre- and post-update rows when it races a write. Acceptable for
//! dashboard freshness.

use std::collections::HashSet;

use chrono::{DateTime, Duration, Months, Utc};

use crate::features::dashboard::dtos::{
    DashboardStatsDto, EquipmentFaultDto, MonthlyTrendDto, ReportStatsDto, StageCountsDto,
    TechnicianScoreDto,
};
use crate::features::dashboard::models::RequestSnapshot;
use crate::features::requests::models::MaintenanceStage;
use crate::shared::constants::{
    OVERDUE_AGE_DAYS, TOP_RANKING_SIZE, TREND_MONTHS, TREND_WINDOW_DAYS,
};

/// KPI counters for the landing dashboard.
///
/// A request is overdue when its schedule has passed, or when it has no
/// schedule at all and has sat unscheduled for more than a week. The two
/// checks are independent: an unscheduled request created today is never
/// overdue.
pub fn compute_dashboard_stats(
    requests: &[RequestSnapshot],
    total_technicians: u64,
    now: DateTime<Utc>,
) -> DashboardStatsDto {
    let active: Vec<&RequestSnapshot> =
        requests.iter().filter(|r| r.stage.is_active()).collect();

    let active_technicians = active
        .iter()
        .filter_map(|r| r.technician_id)
        .collect::<HashSet<_>>()
        .len() as u64;

    let critical_equipment_count = active
        .iter()
        .filter(|r| r.priority > 1)
        .filter_map(|r| r.equipment_id)
        .collect::<HashSet<_>>()
        .len() as u64;

    let stale_cutoff = now - Duration::days(OVERDUE_AGE_DAYS);
    let overdue_request_count = active
        .iter()
        .filter(|r| match r.scheduled_date {
            Some(scheduled) => scheduled < now,
            None => r.created_at < stale_cutoff,
        })
        .count() as u64;

    DashboardStatsDto {
        active_requests: active.len() as u64,
        total_technicians,
        active_technicians,
        critical_equipment_count,
        overdue_request_count,
    }
}

pub fn compute_report_stats(requests: &[RequestSnapshot], now: DateTime<Utc>) -> ReportStatsDto {
    let mut stage_counts = StageCountsDto::default();
    for r in requests {
        match r.stage {
            MaintenanceStage::New => stage_counts.new += 1,
            MaintenanceStage::InProgress => stage_counts.in_progress += 1,
            MaintenanceStage::Repaired => stage_counts.repaired += 1,
            MaintenanceStage::Scrap => stage_counts.scrap += 1,
        }
    }

    // Out-of-range priorities exist (no bound on input) and fall outside
    // the four tracked buckets
    let mut priority_counts = vec![0u64; 4];
    for r in requests {
        if (0..4).contains(&r.priority) {
            priority_counts[r.priority as usize] += 1;
        }
    }

    let durations: Vec<f64> = requests
        .iter()
        .filter(|r| r.stage == MaintenanceStage::Repaired)
        .filter_map(|r| r.duration)
        .collect();
    let avg_duration = if durations.is_empty() {
        0.0
    } else {
        durations.iter().sum::<f64>() / durations.len() as f64
    };

    ReportStatsDto {
        stage_counts,
        priority_counts,
        avg_duration,
        top_faulty_equipment: top_faulty_equipment(requests),
        top_technicians: top_technicians(requests),
        monthly_trend: monthly_trend(requests, now),
    }
}

/// Requests grouped by equipment name, top five by count. Ties keep
/// first-seen order (stable sort over insertion order).
fn top_faulty_equipment(requests: &[RequestSnapshot]) -> Vec<EquipmentFaultDto> {
    let mut groups: Vec<EquipmentFaultDto> = Vec::new();
    for name in requests.iter().filter_map(|r| r.equipment_name.as_deref()) {
        match groups.iter_mut().find(|g| g.name == name) {
            Some(group) => group.count += 1,
            None => groups.push(EquipmentFaultDto {
                name: name.to_string(),
                count: 1,
            }),
        }
    }
    groups.sort_by(|a, b| b.count.cmp(&a.count));
    groups.truncate(TOP_RANKING_SIZE);
    groups
}

/// Technicians ranked by resolved (repaired) request count, top five.
/// `avg_speed` is mean hours per resolved request, "0.0" when nothing is
/// resolved yet.
fn top_technicians(requests: &[RequestSnapshot]) -> Vec<TechnicianScoreDto> {
    let mut groups: Vec<TechnicianScoreDto> = Vec::new();
    for r in requests {
        let Some(name) = r.technician_name.as_deref() else {
            continue;
        };
        let resolved = r.stage == MaintenanceStage::Repaired;
        let duration = if resolved { r.duration.unwrap_or(0.0) } else { 0.0 };

        match groups.iter_mut().find(|g| g.name == name) {
            Some(group) => {
                if resolved {
                    group.resolved += 1;
                    group.total_duration += duration;
                }
            }
            None => groups.push(TechnicianScoreDto {
                name: name.to_string(),
                resolved: u64::from(resolved),
                total_duration: duration,
                avg_speed: String::new(),
            }),
        }
    }
    groups.sort_by(|a, b| b.resolved.cmp(&a.resolved));
    groups.truncate(TOP_RANKING_SIZE);
    for group in &mut groups {
        group.avg_speed = if group.resolved == 0 {
            "0.0".to_string()
        } else {
            format!("{:.1}", group.total_duration / group.resolved as f64)
        };
    }
    groups
}

/// Request volume per calendar month for the six months ending now. Buckets
/// are keyed by short month name without the year, so a window spanning a
/// year boundary merges same-named months across years.
fn monthly_trend(requests: &[RequestSnapshot], now: DateTime<Utc>) -> Vec<MonthlyTrendDto> {
    let today = now.date_naive();
    let window_start = today - Duration::days(TREND_WINDOW_DAYS);

    let mut buckets: Vec<MonthlyTrendDto> = (0..TREND_MONTHS)
        .rev()
        .map(|back| {
            let month = today
                .checked_sub_months(Months::new(back as u32))
                .unwrap_or(today);
            MonthlyTrendDto {
                month: month.format("%b").to_string(),
                count: 0,
            }
        })
        .collect();

    for r in requests {
        if r.request_date < window_start {
            continue;
        }
        let label = r.request_date.format("%b").to_string();
        if let Some(bucket) = buckets.iter_mut().find(|b| b.month == label) {
            bucket.count += 1;
        }
    }

    buckets
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, TimeZone};
    use uuid::Uuid;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 15, 12, 0, 0).unwrap()
    }

    fn snapshot(stage: MaintenanceStage) -> RequestSnapshot {
        RequestSnapshot {
            stage,
            priority: 0,
            duration: None,
            equipment_id: None,
            equipment_name: None,
            technician_id: None,
            technician_name: None,
            request_date: NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
            scheduled_date: None,
            created_at: now(),
        }
    }

    #[test]
    fn test_dashboard_stats_empty_input_all_zeros() {
        let stats = compute_dashboard_stats(&[], 0, now());
        assert_eq!(stats.active_requests, 0);
        assert_eq!(stats.active_technicians, 0);
        assert_eq!(stats.critical_equipment_count, 0);
        assert_eq!(stats.overdue_request_count, 0);
    }

    #[test]
    fn test_active_excludes_repaired_and_scrap() {
        let requests = vec![
            snapshot(MaintenanceStage::New),
            snapshot(MaintenanceStage::InProgress),
            snapshot(MaintenanceStage::Repaired),
            snapshot(MaintenanceStage::Scrap),
        ];
        let stats = compute_dashboard_stats(&requests, 3, now());
        assert_eq!(stats.active_requests, 2);
        assert_eq!(stats.total_technicians, 3);
    }

    #[test]
    fn test_active_technicians_distinct_and_bounded() {
        let tech = Uuid::new_v4();
        let mut a = snapshot(MaintenanceStage::New);
        a.technician_id = Some(tech);
        let mut b = snapshot(MaintenanceStage::InProgress);
        b.technician_id = Some(tech);
        let mut c = snapshot(MaintenanceStage::Repaired);
        c.technician_id = Some(Uuid::new_v4());

        let stats = compute_dashboard_stats(&[a, b, c], 4, now());
        // Same technician on two active requests counts once; the repaired
        // request's technician is not active
        assert_eq!(stats.active_technicians, 1);
        assert!(stats.active_technicians <= stats.total_technicians);
    }

    #[test]
    fn test_critical_equipment_requires_priority_above_one() {
        let equipment = Uuid::new_v4();
        let mut low = snapshot(MaintenanceStage::New);
        low.priority = 1;
        low.equipment_id = Some(equipment);
        let mut high = snapshot(MaintenanceStage::New);
        high.priority = 2;
        high.equipment_id = Some(equipment);
        let mut high_dup = snapshot(MaintenanceStage::InProgress);
        high_dup.priority = 3;
        high_dup.equipment_id = Some(equipment);

        let stats = compute_dashboard_stats(&[low, high, high_dup], 0, now());
        assert_eq!(stats.critical_equipment_count, 1);
    }

    #[test]
    fn test_overdue_checks_are_independent() {
        // Past schedule: overdue
        let mut scheduled_past = snapshot(MaintenanceStage::New);
        scheduled_past.scheduled_date = Some(now() - Duration::days(1));
        // Future schedule: not overdue even though created long ago
        let mut scheduled_future = snapshot(MaintenanceStage::New);
        scheduled_future.scheduled_date = Some(now() + Duration::days(1));
        scheduled_future.created_at = now() - Duration::days(30);
        // No schedule, fresh: not overdue
        let unscheduled_fresh = snapshot(MaintenanceStage::New);
        // No schedule, stale: overdue
        let mut unscheduled_stale = snapshot(MaintenanceStage::New);
        unscheduled_stale.created_at = now() - Duration::days(8);

        let stats = compute_dashboard_stats(
            &[scheduled_past, scheduled_future, unscheduled_fresh, unscheduled_stale],
            0,
            now(),
        );
        assert_eq!(stats.overdue_request_count, 2);
    }

    #[test]
    fn test_avg_duration_over_repaired_only() {
        let mut a = snapshot(MaintenanceStage::Repaired);
        a.duration = Some(4.0);
        let mut b = snapshot(MaintenanceStage::Repaired);
        b.duration = Some(6.0);
        let c = snapshot(MaintenanceStage::New);

        let report = compute_report_stats(&[a, b, c], now());
        assert_eq!(report.avg_duration, 5.0);
        assert_eq!(report.stage_counts.repaired, 2);
        assert_eq!(report.stage_counts.new, 1);
    }

    #[test]
    fn test_avg_duration_zero_when_nothing_resolved() {
        let mut undone = snapshot(MaintenanceStage::InProgress);
        undone.duration = Some(9.0);
        let no_duration = snapshot(MaintenanceStage::Repaired);

        let report = compute_report_stats(&[undone, no_duration], now());
        assert_eq!(report.avg_duration, 0.0);
    }

    #[test]
    fn test_priority_counts_ignore_out_of_range() {
        let mut p0 = snapshot(MaintenanceStage::New);
        p0.priority = 0;
        let mut p3 = snapshot(MaintenanceStage::New);
        p3.priority = 3;
        let mut wild = snapshot(MaintenanceStage::New);
        wild.priority = 99;
        let mut negative = snapshot(MaintenanceStage::New);
        negative.priority = -1;

        let report = compute_report_stats(&[p0, p3, wild, negative], now());
        assert_eq!(report.priority_counts, vec![1, 0, 0, 1]);
    }

    #[test]
    fn test_top_faulty_equipment_caps_at_five_descending() {
        let mut requests = Vec::new();
        for (name, hits) in [("A", 1), ("B", 4), ("C", 2), ("D", 6), ("E", 3), ("F", 5)] {
            for _ in 0..hits {
                let mut r = snapshot(MaintenanceStage::New);
                r.equipment_name = Some(name.to_string());
                requests.push(r);
            }
        }

        let report = compute_report_stats(&requests, now());
        assert_eq!(report.top_faulty_equipment.len(), 5);
        let names: Vec<&str> = report
            .top_faulty_equipment
            .iter()
            .map(|g| g.name.as_str())
            .collect();
        assert_eq!(names, vec!["D", "F", "B", "E", "C"]);
        let counts: Vec<u64> = report.top_faulty_equipment.iter().map(|g| g.count).collect();
        assert!(counts.windows(2).all(|w| w[0] >= w[1]));
    }

    #[test]
    fn test_top_faulty_equipment_ties_keep_first_seen_order() {
        let mut requests = Vec::new();
        for name in ["second", "first"] {
            let mut r = snapshot(MaintenanceStage::New);
            r.equipment_name = Some(name.to_string());
            requests.push(r);
        }

        let report = compute_report_stats(&requests, now());
        assert_eq!(report.top_faulty_equipment[0].name, "second");
        assert_eq!(report.top_faulty_equipment[1].name, "first");
    }

    #[test]
    fn test_top_technicians_avg_speed_one_decimal() {
        let mut a = snapshot(MaintenanceStage::Repaired);
        a.technician_name = Some("Ana".to_string());
        a.duration = Some(3.0);
        let mut b = snapshot(MaintenanceStage::Repaired);
        b.technician_name = Some("Ana".to_string());
        b.duration = Some(4.0);
        let mut idle = snapshot(MaintenanceStage::New);
        idle.technician_name = Some("Ben".to_string());

        let report = compute_report_stats(&[a, b, idle], now());
        assert_eq!(report.top_technicians.len(), 2);
        assert_eq!(report.top_technicians[0].name, "Ana");
        assert_eq!(report.top_technicians[0].resolved, 2);
        assert_eq!(report.top_technicians[0].avg_speed, "3.5");
        assert_eq!(report.top_technicians[1].resolved, 0);
        assert_eq!(report.top_technicians[1].avg_speed, "0.0");
    }

    #[test]
    fn test_monthly_trend_six_buckets_ending_current_month() {
        let mut june = snapshot(MaintenanceStage::New);
        june.request_date = NaiveDate::from_ymd_opt(2024, 6, 2).unwrap();
        let mut march = snapshot(MaintenanceStage::New);
        march.request_date = NaiveDate::from_ymd_opt(2024, 3, 10).unwrap();
        // Outside the window, same month name as a bucket
        let mut stale = snapshot(MaintenanceStage::New);
        stale.request_date = NaiveDate::from_ymd_opt(2023, 6, 2).unwrap();

        let report = compute_report_stats(&[june, march, stale], now());
        let labels: Vec<&str> = report.monthly_trend.iter().map(|b| b.month.as_str()).collect();
        assert_eq!(labels, vec!["Jan", "Feb", "Mar", "Apr", "May", "Jun"]);
        assert_eq!(report.monthly_trend[2].count, 1);
        assert_eq!(report.monthly_trend[5].count, 1);
        assert_eq!(report.monthly_trend[0].count, 0);
    }

    #[test]
    fn test_monthly_trend_merges_month_names_across_years() {
        // Window Aug 2024 back through Feb 2024 spans no repeat, so shift
        // to a January anchor where the window reaches into the prior year
        let at = Utc.with_ymd_and_hms(2025, 1, 20, 0, 0, 0).unwrap();

        let mut recent = snapshot(MaintenanceStage::New);
        recent.request_date = NaiveDate::from_ymd_opt(2025, 1, 5).unwrap();
        let mut last_year = snapshot(MaintenanceStage::New);
        last_year.request_date = NaiveDate::from_ymd_opt(2024, 8, 10).unwrap();

        let report = compute_report_stats(&[recent, last_year], at);
        let labels: Vec<&str> = report.monthly_trend.iter().map(|b| b.month.as_str()).collect();
        assert_eq!(labels, vec!["Aug", "Sep", "Oct", "Nov", "Dec", "Jan"]);
        assert_eq!(report.monthly_trend[0].count, 1);
        assert_eq!(report.monthly_trend[5].count, 1);
    }

    #[test]
    fn test_report_stats_empty_input() {
        let report = compute_report_stats(&[], now());
        assert_eq!(report.avg_duration, 0.0);
        assert!(report.top_faulty_equipment.is_empty());
        assert!(report.top_technicians.is_empty());
        assert_eq!(report.monthly_trend.len(), 6);
        assert!(report.monthly_trend.iter().all(|b| b.count == 0));
    }
}
