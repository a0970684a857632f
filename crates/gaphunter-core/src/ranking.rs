use crate::types::PainPoint;

/// Pain points ordered by descending `count`.
///
/// The sort is stable: points with equal counts keep their input order.
#[must_use]
pub fn rank_pain_points(points: &[PainPoint]) -> Vec<&PainPoint> {
    let mut ranked: Vec<&PainPoint> = points.iter().collect();
    ranked.sort_by(|a, b| b.count.cmp(&a.count));
    ranked
}

/// The most frequently reported pain point, if any.
///
/// On ties the earliest point wins, matching [`rank_pain_points`].
#[must_use]
pub fn primary_complaint(points: &[PainPoint]) -> Option<&PainPoint> {
    rank_pain_points(points).into_iter().next()
}
